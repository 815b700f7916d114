//! Tracing initialization

use imagedrop_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging. Honors `RUST_LOG`; otherwise defaults to
/// info in production and debug everywhere else, with the HTTP trace layer
/// matching the service level.
pub fn init(config: &Config) {
    let default_filter = if config.is_production() {
        "imagedrop=info,tower_http=info"
    } else {
        "imagedrop=debug,tower_http=debug"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
