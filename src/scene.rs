//! Scene files: plates and socket groups stored as TOML
//!
//! ```toml
//! [[plates]]
//! id = 1
//! width = 100.0
//! height = 60.0
//!
//! [[groups]]
//! id = 1
//! plate = 1
//! count = 3
//! direction = "horizontal"
//! x = 10.0
//! y = 10.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::{Board, LayoutConfig, Plate, SocketGroup};

/// Plates and socket groups as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub plates: Vec<Plate>,
    #[serde(default)]
    pub groups: Vec<SocketGroup>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a scene from TOML text
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build a board from the scene, clamping plate dimensions
    pub fn into_board(self, config: LayoutConfig) -> Result<Board, ConfigError> {
        Ok(Board::from_parts(config, self.plates, self.groups)?)
    }
}
