//! Flame command-line driver.
//!
//! Hosts the interpreter: reads source files or prompt lines, registers the
//! built-in externs, and renders errors for the terminal.

use std::sync::Once;

pub mod commands;
pub mod natives;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=flame_eval=debug`
/// to see function and extern registrations. Output goes to stderr so it
/// never interleaves with program output on stdout.
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
