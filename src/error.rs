//! Errors for loading configuration and scene files

use thiserror::Error;

use crate::layout::BoardError;

/// Errors that can occur when loading TOML input
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid scene: {0}")]
    Scene(#[from] BoardError),
}
