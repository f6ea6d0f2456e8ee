//! SIMP command line library.
//!
//! The `simp` binary is a thin argument matcher over [`commands`]; the
//! source-level entry points there are usable from tests and embedders.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once.
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
