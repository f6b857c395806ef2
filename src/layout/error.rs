//! Error types for placement, scaling and board edits

use thiserror::Error;

use super::types::{GroupId, PlateId, Point};

/// Why a candidate anchor position was rejected
///
/// Edge variants carry the offending bounding-box edge, the plate-relative
/// limit it crossed and the nearest anchor coordinate that would pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("position ({x}, {y}) is not a finite coordinate")]
    NonFinite { x: f64, y: f64 },

    #[error("left edge at {edge:.1} cm is below the {limit} cm margin (minimum x: {min_anchor:.1})")]
    LeftEdge {
        edge: f64,
        limit: f64,
        min_anchor: f64,
    },

    #[error(
        "bottom edge at {edge:.1} cm is below the {limit} cm margin (minimum y: {min_anchor:.1})"
    )]
    BottomEdge {
        edge: f64,
        limit: f64,
        min_anchor: f64,
    },

    #[error("right edge at {edge:.1} cm exceeds {limit:.1} cm (maximum x: {max_anchor:.1})")]
    RightEdge {
        edge: f64,
        limit: f64,
        max_anchor: f64,
    },

    #[error("top edge at {edge:.1} cm exceeds {limit:.1} cm (maximum y: {max_anchor:.1})")]
    TopEdge {
        edge: f64,
        limit: f64,
        max_anchor: f64,
    },

    #[error(
        "group {group} is {distance:.1} cm from group {other} on plate {plate} (minimum {min_distance} cm)"
    )]
    GroupClearance {
        plate: PlateId,
        group: GroupId,
        other: GroupId,
        distance: f64,
        min_distance: f64,
    },
}

/// Discriminant of a [`PlacementError`], for comparing failures across drag steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementErrorKind {
    NonFinite,
    LeftEdge,
    BottomEdge,
    RightEdge,
    TopEdge,
    GroupClearance,
}

impl PlacementError {
    pub fn kind(&self) -> PlacementErrorKind {
        match self {
            Self::NonFinite { .. } => PlacementErrorKind::NonFinite,
            Self::LeftEdge { .. } => PlacementErrorKind::LeftEdge,
            Self::BottomEdge { .. } => PlacementErrorKind::BottomEdge,
            Self::RightEdge { .. } => PlacementErrorKind::RightEdge,
            Self::TopEdge { .. } => PlacementErrorKind::TopEdge,
            Self::GroupClearance { .. } => PlacementErrorKind::GroupClearance,
        }
    }

    /// Move the offending coordinate of `position` onto the acceptable bound
    ///
    /// Returns `None` for clearance failures, which have no single-axis fix,
    /// and for non-finite positions.
    pub fn suggest(&self, position: Point) -> Option<Point> {
        match *self {
            Self::LeftEdge {
                min_anchor: bound, ..
            }
            | Self::RightEdge {
                max_anchor: bound, ..
            } => Some(Point::new(bound, position.y)),
            Self::BottomEdge {
                min_anchor: bound, ..
            }
            | Self::TopEdge {
                max_anchor: bound, ..
            } => Some(Point::new(position.x, bound)),
            Self::NonFinite { .. } | Self::GroupClearance { .. } => None,
        }
    }
}

/// Errors from the scale calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("no plates to display")]
    NoPlates,

    #[error("single-plate mode needs exactly one plate, got {0}")]
    FocusedPlateCount(usize),

    #[error("no room left for plates ({width}x{height} px after padding)")]
    EmptyRegion { width: f64, height: f64 },
}

/// Errors from editing a [`Board`](super::board::Board)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("a board needs at least one plate")]
    NoPlates,

    #[error("unknown plate {0}")]
    UnknownPlate(PlateId),

    #[error("unknown socket group {0}")]
    UnknownGroup(GroupId),

    #[error("plate id {0} is used more than once")]
    DuplicatePlate(PlateId),

    #[error("socket group id {0} is used more than once")]
    DuplicateGroup(GroupId),

    #[error("no {0} ids left to assign")]
    IdsExhausted(&'static str),

    #[error("display scale {0} must be positive and finite")]
    InvalidScale(f64),

    #[error("plate {0} is the last plate and cannot be removed")]
    LastPlate(PlateId),

    #[error("plate {plate} ({width}x{height} cm) is too small for sockets")]
    PlateTooSmall {
        plate: PlateId,
        width: f64,
        height: f64,
    },

    #[error("socket count {count} is outside {min}..={max}")]
    InvalidCount { count: u8, min: u8, max: u8 },

    #[error("invalid position: {0}")]
    Placement(#[from] PlacementError),
}

impl BoardError {
    /// The placement diagnostic, if this error came from position validation
    pub fn placement(&self) -> Option<&PlacementError> {
        match self {
            Self::Placement(e) => Some(e),
            _ => None,
        }
    }
}
