//! Configuration for the placement engine and the viewport scaling

use serde::Deserialize;

/// Geometric constraint vocabulary, in centimeters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum distance between a group's bounding box and any plate edge
    pub edge_clearance: f64,

    /// Minimum distance between the bounding boxes of two groups on one plate
    pub group_clearance: f64,

    /// Edge length of a single square socket
    pub socket_size: f64,

    /// Gap between neighbouring sockets inside a group
    pub socket_gap: f64,

    /// Smallest plate (width, height) that may carry socket groups
    pub min_socket_plate: (f64, f64),

    /// Allowed plate width range (min, max)
    pub plate_width_range: (f64, f64),

    /// Allowed plate height range (min, max)
    pub plate_height_range: (f64, f64),

    /// Allowed number of sockets per group (min, max)
    pub socket_count_range: (u8, u8),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            edge_clearance: 3.0,
            group_clearance: 4.0,
            socket_size: 7.0,
            socket_gap: 0.2,
            min_socket_plate: (40.0, 40.0),
            plate_width_range: (20.0, 300.0),
            plate_height_range: (30.0, 128.0),
            socket_count_range: (1, 5),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance from a group's bounding-box corner to its anchor point
    pub fn anchor_offset(&self) -> f64 {
        self.socket_size / 2.0
    }

    pub fn with_edge_clearance(mut self, clearance: f64) -> Self {
        self.edge_clearance = clearance;
        self
    }

    pub fn with_group_clearance(mut self, clearance: f64) -> Self {
        self.group_clearance = clearance;
        self
    }

    /// Set the socket edge length and the gap between sockets
    pub fn with_socket_geometry(mut self, size: f64, gap: f64) -> Self {
        self.socket_size = size;
        self.socket_gap = gap;
        self
    }

    pub fn with_min_socket_plate(mut self, width: f64, height: f64) -> Self {
        self.min_socket_plate = (width, height);
        self
    }
}

/// Presentation tuning for fitting plates into a viewport, in display pixels
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Padding around the rendered plates
    pub padding: f64,

    /// Horizontal gap between neighbouring plates in the all-plates view
    pub plate_gap: f64,

    /// Viewports narrower than this use the compact scale floor
    pub compact_breakpoint: f64,

    /// Scale floor on compact viewports
    pub min_scale_compact: f64,

    /// Scale floor on regular viewports
    pub min_scale_regular: f64,

    /// Scale cap when a single plate is focused
    pub single_plate_cap: f64,

    /// Scale cap when all plates are shown side by side
    pub multi_plate_cap: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            plate_gap: 20.0,
            compact_breakpoint: 768.0,
            min_scale_compact: 0.3,
            min_scale_regular: 0.5,
            single_plate_cap: 2.0,
            multi_plate_cap: 1.0,
        }
    }
}

impl ViewportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding around the rendered plates
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the gap between plates
    pub fn with_plate_gap(mut self, gap: f64) -> Self {
        self.plate_gap = gap;
        self
    }

    /// Set the compact and regular scale floors
    pub fn with_scale_floors(mut self, compact: f64, regular: f64) -> Self {
        self.min_scale_compact = compact;
        self.min_scale_regular = regular;
        self
    }

    /// Scale floor for a viewport of the given width
    pub fn min_scale(&self, viewport_width: f64) -> f64 {
        if viewport_width < self.compact_breakpoint {
            self.min_scale_compact
        } else {
            self.min_scale_regular
        }
    }
}
