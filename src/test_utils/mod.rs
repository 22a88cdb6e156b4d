//! Test utilities shared by unit and integration tests.
//!
//! Enabled for `cfg(test)` and for the `test-utils` feature.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::generator::Generator;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// The four-dependency graph A -> B -> C -> D used across tests.
///
/// `b` uses `a`, `c` uses `a` and `b`, `d` uses `b` and `c`, all through
/// the `cnt` receiver of a `DIContainer`.
#[must_use]
pub fn abcd_generator() -> Generator {
    let mut generator = Generator::new();
    generator
        .add_imports(["fmt", "os"])
        .set_receiver_name("cnt")
        .set_type_name("DIContainer")
        .add_dependency(
            "a",
            "*A",
            "{\n\tfmt.Fprintln(os.Stdout, \"creating A...\")\n\treturn &A{}\n}",
        )
        .add_dependency(
            "b",
            "*B",
            "{\n\ta := cnt.A()\n\tfmt.Fprintln(os.Stdout, \"creating B...\")\n\treturn &B{a}\n}",
        )
        .add_dependency(
            "c",
            "*C",
            "{\n\ta := cnt.A()\n\tb := cnt.B()\n\tfmt.Fprintln(os.Stdout, \"creating C...\")\n\treturn &C{a, b}\n}",
        )
        .add_dependency(
            "d",
            "*D",
            "{\n\tb := cnt.B()\n\tc := cnt.C()\n\tfmt.Fprintln(os.Stdout, \"creating D...\")\n\treturn &D{b, c}\n}",
        );
    generator
}
