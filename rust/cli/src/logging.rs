//! Diagnostic logging setup.
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.
//! The filter honours `RUST_LOG`; e.g. `RUST_LOG=sushigo_engine=debug` shows
//! maki and pudding placings as they are decided.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,sushigo_cli=info,sushigo_engine=info";

/// Install the global fmt subscriber. Calling this more than once is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
