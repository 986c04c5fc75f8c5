//! Rickdex Server Library
//!
//! Hosts the compiled Rickdex frontend (the `target/site` output of
//! cargo-leptos). All data comes from the public GraphQL API in the
//! browser; this server only hands out files.
//!
//! # Modules
//!
//! - [`config`] - Server settings from file and environment
//! - [`server`] - Router and listener

pub mod config;
pub mod server;

pub use config::ServerConfig;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
