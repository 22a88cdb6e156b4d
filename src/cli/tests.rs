use super::*;

#[test]
fn test_cli_config_builder() {
    // Verbose flag sets debug log level
    let cli = Cli::try_parse_from(["godic", "--verbose", "generate"]).unwrap();
    let config = cli.build_config();
    assert_eq!(config.log_level, Some("debug".to_string()));
    assert!(!config.quiet);

    // Quiet flag disables logging
    let cli = Cli::try_parse_from(["godic", "--quiet", "generate"]).unwrap();
    let config = cli.build_config();
    assert_eq!(config.log_level, None);
    assert!(config.quiet);

    // Default only logs warnings
    let cli = Cli::try_parse_from(["godic", "init"]).unwrap();
    let config = cli.build_config();
    assert_eq!(config.log_level, Some("warn".to_string()));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let result = Cli::try_parse_from(["godic", "--verbose", "--quiet", "generate"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["godic", "generate", "--quiet"]).unwrap();
    assert!(cli.build_config().quiet);
}

#[test]
fn test_generate_arguments() {
    let cli = Cli::try_parse_from([
        "godic",
        "generate",
        "--manifest",
        "wiring/godic.toml",
        "--output",
        "wiring/container.go",
    ]);
    assert!(cli.is_ok());
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["godic", "install"]).is_err());
}

#[test]
fn test_execute_with_config_runs_init() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["godic", "init", "--path", path]).unwrap();
    let config = CliConfig {
        quiet: true,
        ..CliConfig::new()
    };
    cli.execute_with_config(config).unwrap();

    assert!(temp.path().join("godic.toml").exists());
}
