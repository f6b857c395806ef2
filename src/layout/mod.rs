//! Placement engine for socket groups on plates
//!
//! Pure geometry lives in `geometry`, `validator`, `scale` and `drag`; the
//! `board` keeps committed plates and groups and only accepts edits that
//! pass validation.

pub mod board;
pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod lint;
pub mod scale;
pub mod types;
pub mod validator;

pub use board::Board;
pub use config::{LayoutConfig, ViewportConfig};
pub use drag::{DragMapper, DragSession, DragStep};
pub use error::{BoardError, PlacementError, PlacementErrorKind, ScaleError};
pub use geometry::{group_bounds, group_size, rect_distance};
pub use scale::{compute_scale, fit, plate_origins, DisplayMode, Region, ScaleResult};
pub use types::*;
pub use validator::{bounds_of, validate_position, Validation};
