//! Logging setup for binaries and tests. The library itself only emits
//! `tracing` events and never installs a subscriber.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive` (e.g. `"info"` or
/// `"user_storage=debug"`). Fails if a global subscriber is already set.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
