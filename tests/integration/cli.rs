//! Tests for the `godic` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BOX_MANIFEST: &str = r#"
package = "main"
type = "Box"

[[dependencies]]
name = "value"
type = "int"
body = "{ return 10 }"
"#;

fn godic() -> Command {
    Command::cargo_bin("godic").unwrap()
}

#[test]
fn test_generate_to_stdout() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("godic.toml"), BOX_MANIFEST).unwrap();

    godic()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("package main\n\ntype Box struct{\n\tvalue int\n}\n\n"))
        .stdout(predicate::str::contains("func (c *Box) Value() int {"));
}

#[test]
fn test_generate_to_file() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("wiring.toml");
    fs::write(&manifest, BOX_MANIFEST).unwrap();
    let output = temp.path().join("out/container.go");

    godic()
        .arg("generate")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("func (c *Box) NewValue() int { return 10 }"));
}

#[test]
fn test_generate_missing_manifest_fails() {
    let temp = TempDir::new().unwrap();

    godic()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Container manifest not found"))
        .stderr(predicate::str::contains("godic init"));
}

#[test]
fn test_generate_invalid_manifest_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("godic.toml"), "type = [").unwrap();

    godic()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid container manifest"));
}

#[test]
fn test_generate_empty_dependency_name_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("godic.toml"),
        "[[dependencies]]\nname = \"\"\ntype = \"int\"\nbody = \"{}\"\n",
    )
    .unwrap();

    godic()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency name must not be empty"));
}

#[test]
fn test_init_then_generate() {
    let temp = TempDir::new().unwrap();

    godic()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized godic.toml"));

    godic()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("import \"fmt\""))
        .stdout(predicate::str::contains("func (c *Container) Greeter() *Greeter {"));
}

#[test]
fn test_init_refuses_existing_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("godic.toml"), BOX_MANIFEST).unwrap();

    godic()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(temp.path().join("godic.toml")).unwrap(), BOX_MANIFEST);
}

#[test]
fn test_quiet_init_prints_nothing() {
    let temp = TempDir::new().unwrap();

    godic()
        .current_dir(temp.path())
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
