//! Log subscriber setup.

use modelgen_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `level` (e.g. `info`, `modelgen=debug`)
/// is used as the filter directive.
///
/// # Errors
///
/// Returns an error if the directive is invalid or a global subscriber is
/// already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            Error::new(ErrorKind::Internal(format!("invalid log level '{level}': {e}")))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to install logger: {e}"))))
}
