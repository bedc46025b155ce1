pub mod config;
pub mod error;
pub mod selection_state;

pub use config::{CatalogConfig, Config, NavigationConfig, UiConfig, ValidationResult};
pub use error::{AppError, CatalogError, ConfigError, NavigationError};
pub use selection_state::SelectionPhase;

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
///
/// Fails when a global subscriber is already set; the existing one stays in place.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()?;

    tracing::info!("Weather AI core initialized");
    Ok(())
}
