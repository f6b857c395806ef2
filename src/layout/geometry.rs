//! Socket group dimensions and rectangle distances

use super::config::LayoutConfig;
use super::types::{Direction, Point, Rect, Size};

/// Bounding-box size of a group of `count` sockets lined up along `direction`
pub fn group_size(count: u8, direction: Direction, config: &LayoutConfig) -> Size {
    let count = f64::from(count);
    let span = count * config.socket_size + (count - 1.0) * config.socket_gap;
    match direction {
        Direction::Horizontal => Size {
            width: span,
            height: config.socket_size,
        },
        Direction::Vertical => Size {
            width: config.socket_size,
            height: span,
        },
    }
}

/// Bounding box of a group whose anchor sits at `anchor`
pub fn group_bounds(anchor: Point, size: Size, config: &LayoutConfig) -> Rect {
    let offset = config.anchor_offset();
    Rect::from_corner(anchor.x - offset, anchor.y - offset, size.width, size.height)
}

/// Euclidean gap between two rectangles; zero when they overlap or touch
pub fn rect_distance(a: &Rect, b: &Rect) -> f64 {
    let h_gap = if a.right < b.left {
        b.left - a.right
    } else if b.right < a.left {
        a.left - b.right
    } else {
        0.0
    };
    let v_gap = if a.top < b.bottom {
        b.bottom - a.top
    } else if b.top < a.bottom {
        a.bottom - b.top
    } else {
        0.0
    };
    (h_gap * h_gap + v_gap * v_gap).sqrt()
}
