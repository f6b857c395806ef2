//! Position validation for socket groups
//!
//! Checks run in a fixed order and the first failure wins: left, bottom,
//! right and top edge clearance, then clearance to every other group on the
//! same plate. Limits are compared exactly; a box sitting on a limit passes.
//! NaN or infinite coordinates are rejected before any of these.

use tracing::debug;

use super::config::LayoutConfig;
use super::error::PlacementError;
use super::geometry::{group_bounds, group_size, rect_distance};
use super::types::{Plate, Point, Rect, SocketGroup};

/// Outcome of validating a candidate anchor position
///
/// `position` echoes the candidate whether or not it passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub position: Point,
    pub error: Option<PlacementError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Point, PlacementError> {
        match self.error {
            None => Ok(self.position),
            Some(e) => Err(e),
        }
    }
}

/// Bounding box of a stored group at its current position
pub fn bounds_of(group: &SocketGroup, config: &LayoutConfig) -> Rect {
    let size = group_size(group.count, group.direction, config);
    group_bounds(group.position(), size, config)
}

/// Validate moving `group` to `position` on `plate`
///
/// `groups` may contain groups from any plate and may contain `group` itself;
/// only other groups on `plate` are considered.
pub fn validate_position(
    position: Point,
    group: &SocketGroup,
    plate: &Plate,
    groups: &[SocketGroup],
    config: &LayoutConfig,
) -> Validation {
    let error = check(position, group, plate, groups, config).err();
    if let Some(e) = &error {
        debug!(group = %group.id, x = position.x, y = position.y, "rejected: {e}");
    }
    Validation { position, error }
}

fn check(
    position: Point,
    group: &SocketGroup,
    plate: &Plate,
    groups: &[SocketGroup],
    config: &LayoutConfig,
) -> Result<(), PlacementError> {
    if !(position.x.is_finite() && position.y.is_finite()) {
        return Err(PlacementError::NonFinite {
            x: position.x,
            y: position.y,
        });
    }

    let size = group_size(group.count, group.direction, config);
    let bounds = group_bounds(position, size, config);
    let offset = config.anchor_offset();
    let margin = config.edge_clearance;

    if bounds.left < margin {
        return Err(PlacementError::LeftEdge {
            edge: bounds.left,
            limit: margin,
            min_anchor: margin + offset,
        });
    }
    if bounds.bottom < margin {
        return Err(PlacementError::BottomEdge {
            edge: bounds.bottom,
            limit: margin,
            min_anchor: margin + offset,
        });
    }

    let max_right = plate.width - margin;
    if bounds.right > max_right {
        return Err(PlacementError::RightEdge {
            edge: bounds.right,
            limit: max_right,
            max_anchor: max_right - size.width + offset,
        });
    }
    let max_top = plate.height - margin;
    if bounds.top > max_top {
        return Err(PlacementError::TopEdge {
            edge: bounds.top,
            limit: max_top,
            max_anchor: max_top - size.height + offset,
        });
    }

    let siblings = groups
        .iter()
        .filter(|g| g.plate_id == plate.id && g.id != group.id);
    for other in siblings {
        let distance = rect_distance(&bounds, &bounds_of(other, config));
        if distance < config.group_clearance {
            return Err(PlacementError::GroupClearance {
                plate: plate.id,
                group: group.id,
                other: other.id,
                distance,
                min_distance: config.group_clearance,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::error::PlacementErrorKind;
    use crate::layout::types::{Direction, GroupId, PlateId};

    fn plate(width: f64, height: f64) -> Plate {
        Plate::new(PlateId(1), width, height, &LayoutConfig::default())
    }

    fn group(id: u32, count: u8, direction: Direction, x: f64, y: f64) -> SocketGroup {
        SocketGroup {
            id: GroupId(id),
            plate_id: PlateId(1),
            count,
            direction,
            position_x: x,
            position_y: y,
        }
    }

    fn kind_at(x: f64, y: f64, g: &SocketGroup, p: &Plate) -> Option<PlacementErrorKind> {
        validate_position(Point::new(x, y), g, p, &[], &LayoutConfig::default())
            .error
            .map(|e| e.kind())
    }

    #[test]
    fn test_left_edge_boundary_inclusive() {
        let p = plate(100.0, 60.0);
        let g = group(1, 1, Direction::Horizontal, 0.0, 0.0);
        assert_eq!(kind_at(6.4, 20.0, &g, &p), Some(PlacementErrorKind::LeftEdge));
        assert_eq!(kind_at(6.5, 20.0, &g, &p), None);
    }

    #[test]
    fn test_left_edge_reports_minimum_anchor() {
        let p = plate(100.0, 60.0);
        let g = group(1, 1, Direction::Horizontal, 0.0, 0.0);
        let v = validate_position(
            Point::new(5.0, 20.0),
            &g,
            &p,
            &[],
            &LayoutConfig::default(),
        );
        assert!(!v.is_valid());
        assert_eq!(v.position, Point::new(5.0, 20.0));
        match v.error {
            Some(PlacementError::LeftEdge {
                edge,
                limit,
                min_anchor,
            }) => {
                assert_eq!(edge, 1.5);
                assert_eq!(limit, 3.0);
                assert_eq!(min_anchor, 6.5);
            }
            other => panic!("expected left edge error, got {other:?}"),
        }
    }

    #[test]
    fn test_bottom_edge_boundary_inclusive() {
        let p = plate(100.0, 60.0);
        let g = group(1, 2, Direction::Vertical, 0.0, 0.0);
        assert_eq!(kind_at(20.0, 6.4, &g, &p), Some(PlacementErrorKind::BottomEdge));
        assert_eq!(kind_at(20.0, 6.5, &g, &p), None);
    }

    #[test]
    fn test_left_checked_before_bottom() {
        let p = plate(100.0, 60.0);
        let g = group(1, 1, Direction::Horizontal, 0.0, 0.0);
        assert_eq!(kind_at(0.0, 0.0, &g, &p), Some(PlacementErrorKind::LeftEdge));
    }

    #[test]
    fn test_right_edge_reports_maximum_anchor() {
        let p = plate(100.0, 60.0);
        let g = group(1, 1, Direction::Horizontal, 0.0, 0.0);
        // box right = x - 3.5 + 7 must stay <= 97
        assert_eq!(kind_at(93.5, 20.0, &g, &p), None);
        let v = validate_position(
            Point::new(94.0, 20.0),
            &g,
            &p,
            &[],
            &LayoutConfig::default(),
        );
        match v.error {
            Some(PlacementError::RightEdge {
                limit, max_anchor, ..
            }) => {
                assert_eq!(limit, 97.0);
                assert_eq!(max_anchor, 93.5);
            }
            other => panic!("expected right edge error, got {other:?}"),
        }
    }

    #[test]
    fn test_top_edge_reports_maximum_anchor() {
        let p = plate(100.0, 60.0);
        let g = group(1, 1, Direction::Vertical, 0.0, 0.0);
        assert_eq!(kind_at(20.0, 53.5, &g, &p), None);
        let v = validate_position(
            Point::new(20.0, 55.0),
            &g,
            &p,
            &[],
            &LayoutConfig::default(),
        );
        match v.error {
            Some(PlacementError::TopEdge {
                edge,
                limit,
                max_anchor,
            }) => {
                assert_eq!(edge, 58.5);
                assert_eq!(limit, 57.0);
                assert_eq!(max_anchor, 53.5);
            }
            other => panic!("expected top edge error, got {other:?}"),
        }
    }

    #[test]
    fn test_group_clearance_boundary() {
        let config = LayoutConfig::default();
        let p = plate(100.0, 60.0);
        let a = group(1, 1, Direction::Horizontal, 10.0, 10.0);
        let b = group(2, 1, Direction::Horizontal, 0.0, 0.0);
        let groups = vec![a.clone(), b.clone()];

        // a's box spans x 6.5..13.5; b's box left = x - 3.5
        let too_close = validate_position(Point::new(20.9, 10.0), &b, &p, &groups, &config);
        match too_close.error {
            Some(PlacementError::GroupClearance {
                distance, other, ..
            }) => {
                assert!((distance - 3.9).abs() < 1e-9);
                assert_eq!(other, GroupId(1));
            }
            other => panic!("expected clearance error, got {other:?}"),
        }

        let exact = validate_position(Point::new(21.0, 10.0), &b, &p, &groups, &config);
        assert!(exact.is_valid(), "{:?}", exact.error);
    }

    #[test]
    fn test_other_plates_are_ignored() {
        let config = LayoutConfig::default();
        let p = plate(100.0, 60.0);
        let mut elsewhere = group(7, 3, Direction::Horizontal, 10.0, 10.0);
        elsewhere.plate_id = PlateId(2);
        let g = group(1, 3, Direction::Horizontal, 0.0, 0.0);

        let v = validate_position(Point::new(10.0, 10.0), &g, &p, &[elsewhere], &config);
        assert!(v.is_valid());
    }

    #[test]
    fn test_non_finite_positions_rejected_first() {
        let p = plate(100.0, 60.0);
        let g = group(1, 1, Direction::Horizontal, 0.0, 0.0);
        assert_eq!(kind_at(f64::NAN, f64::NAN, &g, &p), Some(PlacementErrorKind::NonFinite));
        assert_eq!(kind_at(20.0, f64::INFINITY, &g, &p), Some(PlacementErrorKind::NonFinite));
        assert_eq!(
            kind_at(f64::NEG_INFINITY, 20.0, &g, &p),
            Some(PlacementErrorKind::NonFinite)
        );
    }

    #[test]
    fn test_self_is_excluded() {
        let config = LayoutConfig::default();
        let p = plate(100.0, 60.0);
        let g = group(1, 3, Direction::Horizontal, 10.0, 10.0);
        let v = validate_position(g.position(), &g, &p, std::slice::from_ref(&g), &config);
        assert!(v.is_valid());
        assert_eq!(v.into_result(), Ok(Point::new(10.0, 10.0)));
    }
}
