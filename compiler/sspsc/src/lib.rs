//! SSPS driver: command-line options, source loading and logging setup.
//!
//! The `ssps` binary is a thin wrapper over [`run_file`]; tests drive the
//! same entry points with a buffer print handler.

pub mod input;
pub mod options;
mod run;

use std::sync::Once;

pub use input::{join_lines, load_source, LoadError};
pub use options::{parse_args, Options, ParsedArgs, USAGE};
pub use run::{run_file, run_source, RunError};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. Enable with e.g. `RUST_LOG=ssps_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
