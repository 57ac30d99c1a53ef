pub mod config;
pub mod error;

pub use config::{Config, DisplayConfig, EffectsConfig, ValidationResult, DEFAULT_TIMEZONE};
pub use error::{AppError, ConfigError, ReportError};

use anyhow::Result;

/// Initialize logging for the application
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("SunPanel core initialized");
    Ok(())
}
