//! Plate Layout - placement engine for socket groups on wall plates
//!
//! This library validates where rectangular socket groups may sit on
//! rectangular plates, maps drag pointer positions to plate coordinates and
//! computes a shared display scale for one or many plates.
//!
//! # Example
//!
//! ```rust
//! use plate_layout::layout::{Board, Direction, LayoutConfig, PlateId, Point};
//!
//! let mut board = Board::new(LayoutConfig::default(), 100.0, 60.0);
//! board
//!     .add_group(PlateId(1), 3, Direction::Horizontal, Point::new(10.0, 10.0))
//!     .unwrap();
//!
//! let err = board
//!     .add_group(PlateId(1), 1, Direction::Vertical, Point::new(14.0, 10.0))
//!     .unwrap_err();
//! assert!(err.to_string().contains("0.0 cm"));
//! ```

pub mod error;
pub mod layout;
pub mod scene;

use std::path::Path;

use serde::Deserialize;

pub use error::ConfigError;
pub use layout::{Board, LayoutConfig, PlacementError, ViewportConfig};
pub use scene::Scene;

/// Configuration for the complete engine
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Geometric constraints
    pub layout: LayoutConfig,
    /// Viewport scaling
    pub viewport: ViewportConfig,
}

impl EngineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the viewport configuration
    pub fn with_viewport(mut self, config: ViewportConfig) -> Self {
        self.viewport = config;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
