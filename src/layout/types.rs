//! Core types for the placement engine
//!
//! All lengths are centimeters unless a name says otherwise. Plate-local
//! coordinates use a bottom-left origin with y increasing upward.

use std::fmt;

use serde::Deserialize;

use super::config::LayoutConfig;

/// A 2D point; plate-local centimeters or screen pixels depending on context
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in plate coordinates (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Rect {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Build a rectangle from its bottom-left corner and size
    pub fn from_corner(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self::new(left, left + width, bottom, bottom + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Width and height of a socket group's bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PlateId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl fmt::Display for PlateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rectangular plate that socket groups are mounted on
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plate {
    pub id: PlateId,
    pub width: f64,
    pub height: f64,
}

impl Plate {
    /// Create a plate with its dimensions clamped into the configured ranges
    pub fn new(id: PlateId, width: f64, height: f64, config: &LayoutConfig) -> Self {
        let mut plate = Self {
            id,
            width,
            height,
        };
        plate.resize(width, height, config);
        plate
    }

    /// Change the plate dimensions, clamping each into its allowed range
    pub fn resize(&mut self, width: f64, height: f64, config: &LayoutConfig) {
        self.width = width.clamp(config.plate_width_range.0, config.plate_width_range.1);
        self.height = height.clamp(config.plate_height_range.0, config.plate_height_range.1);
    }

    /// Whether the plate is large enough to carry socket groups at all
    pub fn can_host_sockets(&self, config: &LayoutConfig) -> bool {
        self.width >= config.min_socket_plate.0 && self.height >= config.min_socket_plate.1
    }
}

/// Axis along which the sockets of a group are lined up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// A row or column of sockets on a plate
///
/// (`position_x`, `position_y`) is the anchor point: the center of the first
/// socket, half a socket edge in from the bounding box's bottom-left corner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocketGroup {
    pub id: GroupId,
    #[serde(rename = "plate")]
    pub plate_id: PlateId,
    pub count: u8,
    pub direction: Direction,
    #[serde(rename = "x")]
    pub position_x: f64,
    #[serde(rename = "y")]
    pub position_y: f64,
}

impl SocketGroup {
    pub fn position(&self) -> Point {
        Point::new(self.position_x, self.position_y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.position_x = position.x;
        self.position_y = position.y;
    }
}
