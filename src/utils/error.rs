use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read inventory file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save inventory file {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration file not found: {path}")]
    MissingConfigError { path: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl InventoryError {
    /// Short message suitable for printing to the menu user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            InventoryError::ReadError { path, .. } => {
                format!("Could not read {}, starting with an empty inventory", path.display())
            }
            InventoryError::WriteError { path, .. } => {
                format!("Could not save inventory to {}", path.display())
            }
            InventoryError::ConfigError { .. }
            | InventoryError::MissingConfigError { .. }
            | InventoryError::InvalidConfigValueError { .. }
            | InventoryError::ConfigValidationError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
