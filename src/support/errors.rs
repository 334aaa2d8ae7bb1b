use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{PricingError, RateTableError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid rate table: {0}")]
    RateTable(#[from] RateTableError),

    #[error("Surcharge window must start before it ends")]
    InvalidSurchargeWindow,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
