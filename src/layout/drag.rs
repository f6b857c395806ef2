//! Pointer-to-plate coordinate mapping for drag repositioning
//!
//! Screen coordinates grow downward from the viewport's top-left corner;
//! plate coordinates grow upward from the plate's bottom-left corner. The
//! pointer offset is captured once at drag start against the screen
//! projection of the group's bounding-box bottom-left corner, so the group
//! does not jump under the pointer.

use super::board::Board;
use super::config::LayoutConfig;
use super::error::{BoardError, PlacementError, PlacementErrorKind};
use super::types::{GroupId, Point};

/// Conversion between screen pixels and anchor coordinates on one plate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMapper {
    /// Screen position of the plate's top-left corner
    pub plate_origin: Point,
    /// Plate height in centimeters
    pub plate_height: f64,
    /// Display pixels per centimeter
    pub scale: f64,
    /// Half a socket edge, from box corner to anchor
    pub anchor_offset: f64,
}

impl DragMapper {
    pub fn new(plate_origin: Point, plate_height: f64, scale: f64, config: &LayoutConfig) -> Self {
        Self {
            plate_origin,
            plate_height,
            scale,
            anchor_offset: config.anchor_offset(),
        }
    }

    /// Screen position of the bounding-box bottom-left corner for `anchor`
    pub fn corner_on_screen(&self, anchor: Point) -> Point {
        let left = anchor.x - self.anchor_offset;
        let bottom = anchor.y - self.anchor_offset;
        Point::new(
            self.plate_origin.x + left * self.scale,
            self.plate_origin.y + (self.plate_height - bottom) * self.scale,
        )
    }

    /// Offset of the pointer from the group's corner, captured at drag start
    pub fn grab_offset(&self, pointer: Point, anchor: Point) -> Point {
        let corner = self.corner_on_screen(anchor);
        Point::new(pointer.x - corner.x, pointer.y - corner.y)
    }

    /// Candidate anchor position for a pointer at `pointer`
    pub fn anchor_at(&self, pointer: Point, grab_offset: Point) -> Point {
        let local_x = pointer.x - grab_offset.x - self.plate_origin.x;
        let local_y = pointer.y - grab_offset.y - self.plate_origin.y;
        Point::new(
            local_x / self.scale + self.anchor_offset,
            self.plate_height - local_y / self.scale + self.anchor_offset,
        )
    }
}

/// Result of feeding one pointer move into a drag session
#[derive(Debug, Clone, PartialEq)]
pub struct DragStep {
    /// Where the pointer would put the anchor, valid or not (for guidelines)
    pub projected: Point,
    /// The group's committed anchor after this step
    pub committed: Point,
    pub error: Option<PlacementError>,
    /// The error has the same kind as the previous step's error
    pub repeated: bool,
}

/// A single in-progress drag of one socket group
///
/// Only valid candidates are written to the board; while the pointer is over
/// an invalid spot the committed position stays where it was.
#[derive(Debug, Clone)]
pub struct DragSession {
    group: GroupId,
    mapper: DragMapper,
    grab_offset: Point,
    committed: Point,
    last_error: Option<PlacementErrorKind>,
}

impl DragSession {
    /// Start dragging `group` with the pointer at `pointer`
    ///
    /// `scale` must be positive and finite.
    pub fn begin(
        board: &Board,
        group: GroupId,
        pointer: Point,
        plate_origin: Point,
        scale: f64,
    ) -> Result<Self, BoardError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(BoardError::InvalidScale(scale));
        }
        let stored = board.group(group).ok_or(BoardError::UnknownGroup(group))?;
        let plate = board
            .plate(stored.plate_id)
            .ok_or(BoardError::UnknownPlate(stored.plate_id))?;
        let mapper = DragMapper::new(plate_origin, plate.height, scale, board.config());
        let committed = stored.position();
        Ok(Self {
            group,
            mapper,
            grab_offset: mapper.grab_offset(pointer, committed),
            committed,
            last_error: None,
        })
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn committed(&self) -> Point {
        self.committed
    }

    pub fn mapper(&self) -> &DragMapper {
        &self.mapper
    }

    /// Map the pointer, validate the candidate and commit it if it passes
    pub fn pointer_move(
        &mut self,
        board: &mut Board,
        pointer: Point,
    ) -> Result<DragStep, BoardError> {
        let projected = self.mapper.anchor_at(pointer, self.grab_offset);
        match board.move_group(self.group, projected) {
            Ok(position) => {
                self.committed = position;
                self.last_error = None;
                Ok(DragStep {
                    projected,
                    committed: position,
                    error: None,
                    repeated: false,
                })
            }
            Err(BoardError::Placement(error)) => {
                let kind = error.kind();
                let repeated = self.last_error == Some(kind);
                self.last_error = Some(kind);
                Ok(DragStep {
                    projected,
                    committed: self.committed,
                    error: Some(error),
                    repeated,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Finish the drag, returning the last committed position
    pub fn end(self) -> Point {
        self.committed
    }
}
