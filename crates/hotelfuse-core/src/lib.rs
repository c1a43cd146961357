pub mod app_config;
pub mod config;
pub mod hotel;
pub mod mapping;
pub mod suppliers;

use thiserror::Error;

pub use app_config::AppConfig;
pub use hotel::{Amenities, Hotel, Image, Images, Location};
pub use mapping::{FieldMapping, ImageMapping, LocationMapping, SupplierConfig};
pub use suppliers::{load_suppliers, SuppliersFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read supplier config at {path}: {source}")]
    SuppliersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse supplier config: {0}")]
    SuppliersFileParse(#[from] serde_yaml::Error),

    #[error("invalid supplier config: {0}")]
    Validation(String),
}
