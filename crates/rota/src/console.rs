//! Logging setup.
//!
//! Installs a `tracing` subscriber that prints structured solve events.
//! `RUST_LOG` overrides the filter from configuration.

use std::sync::OnceLock;

use rota_config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging.
///
/// Safe to call multiple times - only the first call has effect. If
/// another global subscriber is already installed, it is left in place.
pub fn init(config: &LoggingConfig) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init();
    });
}
