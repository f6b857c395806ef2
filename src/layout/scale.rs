//! Uniform scaling of plates into a viewport
//!
//! Every displayed plate shares one scale factor so relative sizes stay
//! truthful. Plates in the all-plates view are laid out left to right with a
//! fixed gap and top-aligned; the row is centered when it is narrower than the
//! viewport and left-aligned (scrolling) otherwise.

use tracing::debug;

use super::config::ViewportConfig;
use super::error::ScaleError;
use super::types::{Plate, PlateId, Point};

/// Which plates are on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// One plate is focused and shown alone
    SinglePlate,
    /// All plates side by side
    AllPlates,
}

/// Size of a screen area in display pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The part of this viewport left for plates once padding and gaps are taken out
    pub fn available(
        &self,
        plate_count: usize,
        mode: DisplayMode,
        config: &ViewportConfig,
    ) -> Region {
        let gaps = match mode {
            DisplayMode::SinglePlate => 0.0,
            DisplayMode::AllPlates => plate_count.saturating_sub(1) as f64 * config.plate_gap,
        };
        Region::new(
            self.width - 2.0 * config.padding - gaps,
            self.height - 2.0 * config.padding,
        )
    }
}

/// Scale factor and horizontal placement for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleResult {
    /// Display pixels per centimeter, shared by every displayed plate
    pub scale: f64,
    /// Whether the plate row is narrower than the viewport and centered
    pub centered: bool,
    /// Extra left offset applied to the plate row when centered
    pub offset_x: f64,
}

/// Compute the shared scale factor for `plates`
///
/// `available` is the region left after padding (see [`Region::available`])
/// and must have a positive width and height. `viewport_width` selects the
/// scale floor and drives centering.
pub fn compute_scale(
    plates: &[Plate],
    available: Region,
    viewport_width: f64,
    mode: DisplayMode,
    config: &ViewportConfig,
) -> Result<ScaleResult, ScaleError> {
    if plates.is_empty() {
        return Err(ScaleError::NoPlates);
    }
    if available.width <= 0.0 || available.height <= 0.0 {
        return Err(ScaleError::EmptyRegion {
            width: available.width,
            height: available.height,
        });
    }
    let floor = config.min_scale(viewport_width);

    let result = match mode {
        DisplayMode::SinglePlate => {
            let [plate] = plates else {
                return Err(ScaleError::FocusedPlateCount(plates.len()));
            };
            let scale = (available.width / plate.width)
                .min(available.height / plate.height)
                .min(config.single_plate_cap)
                .max(floor);
            ScaleResult {
                scale,
                centered: false,
                offset_x: 0.0,
            }
        }
        DisplayMode::AllPlates => {
            let total_width: f64 = plates.iter().map(|p| p.width).sum();
            let max_height = plates.iter().map(|p| p.height).fold(0.0, f64::max);
            let scale = (available.width / total_width)
                .min(available.height / max_height)
                .min(config.multi_plate_cap)
                .max(floor);

            let content = content_width(plates, scale, config);
            if content < viewport_width {
                ScaleResult {
                    scale,
                    centered: true,
                    offset_x: (viewport_width - content) / 2.0,
                }
            } else {
                ScaleResult {
                    scale,
                    centered: false,
                    offset_x: 0.0,
                }
            }
        }
    };

    debug!(
        plates = plates.len(),
        ?mode,
        scale = result.scale,
        centered = result.centered,
        "computed plate scale"
    );
    Ok(result)
}

/// Fit `plates` into a viewport of the given size
pub fn fit(
    plates: &[Plate],
    viewport: Region,
    mode: DisplayMode,
    config: &ViewportConfig,
) -> Result<ScaleResult, ScaleError> {
    let available = viewport.available(plates.len(), mode, config);
    compute_scale(plates, available, viewport.width, mode, config)
}

/// Total rendered width of a plate row including gaps and outer padding
pub fn content_width(plates: &[Plate], scale: f64, config: &ViewportConfig) -> f64 {
    let plates_width: f64 = plates.iter().map(|p| p.width * scale).sum();
    let gaps = plates.len().saturating_sub(1) as f64 * config.plate_gap;
    plates_width + gaps + 2.0 * config.padding
}

/// Screen position of each plate's top-left corner, in display order
pub fn plate_origins(
    plates: &[Plate],
    result: &ScaleResult,
    config: &ViewportConfig,
) -> Vec<(PlateId, Point)> {
    let mut x = config.padding + result.offset_x;
    plates
        .iter()
        .map(|plate| {
            let origin = Point::new(x, config.padding);
            x += plate.width * result.scale + config.plate_gap;
            (plate.id, origin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::LayoutConfig;

    fn plate(id: u32, width: f64, height: f64) -> Plate {
        Plate::new(PlateId(id), width, height, &LayoutConfig::default())
    }

    #[test]
    fn test_single_plate_fits_limiting_axis() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 100.0, 60.0)];
        let result = compute_scale(
            &plates,
            Region::new(150.0, 60.0),
            1024.0,
            DisplayMode::SinglePlate,
            &config,
        )
        .unwrap();
        assert_eq!(result.scale, 1.0);
        assert!(!result.centered);
    }

    #[test]
    fn test_single_plate_capped_at_two() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 40.0, 40.0)];
        let result = compute_scale(
            &plates,
            Region::new(2000.0, 2000.0),
            2040.0,
            DisplayMode::SinglePlate,
            &config,
        )
        .unwrap();
        assert_eq!(result.scale, 2.0);
    }

    #[test]
    fn test_single_plate_requires_one_plate() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 40.0, 40.0), plate(2, 40.0, 40.0)];
        let err = compute_scale(
            &plates,
            Region::new(500.0, 500.0),
            540.0,
            DisplayMode::SinglePlate,
            &config,
        )
        .unwrap_err();
        assert_eq!(err, ScaleError::FocusedPlateCount(2));
    }

    #[test]
    fn test_no_plates_is_an_error() {
        let err = compute_scale(
            &[],
            Region::new(500.0, 500.0),
            540.0,
            DisplayMode::AllPlates,
            &ViewportConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, ScaleError::NoPlates);
    }

    #[test]
    fn test_viewport_smaller_than_padding() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 100.0, 60.0), plate(2, 100.0, 60.0)];
        let err = fit(
            &plates,
            Region::new(30.0, 30.0),
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScaleError::EmptyRegion {
                width: -30.0,
                height: -10.0
            }
        );

        let err = compute_scale(
            &plates[..1],
            Region::new(0.0, 200.0),
            40.0,
            DisplayMode::SinglePlate,
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, ScaleError::EmptyRegion { .. }));
    }

    #[test]
    fn test_multi_plate_capped_at_one() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 40.0, 40.0), plate(2, 80.0, 40.0)];
        let result = compute_scale(
            &plates,
            Region::new(5000.0, 5000.0),
            5000.0,
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap();
        assert_eq!(result.scale, 1.0);
    }

    #[test]
    fn test_multi_plate_uses_total_width_and_max_height() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 100.0, 60.0), plate(2, 100.0, 120.0)];
        let by_width = compute_scale(
            &plates,
            Region::new(160.0, 1000.0),
            1200.0,
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap();
        assert_eq!(by_width.scale, 0.8);

        let by_height = compute_scale(
            &plates,
            Region::new(1000.0, 72.0),
            1200.0,
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap();
        assert_eq!(by_height.scale, 0.6);
    }

    #[test]
    fn test_floor_depends_on_viewport_width() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 300.0, 128.0), plate(2, 300.0, 128.0)];
        let narrow = compute_scale(
            &plates,
            Region::new(10.0, 10.0),
            320.0,
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap();
        assert_eq!(narrow.scale, 0.3);

        let wide = compute_scale(
            &plates,
            Region::new(10.0, 10.0),
            1024.0,
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap();
        assert_eq!(wide.scale, 0.5);
    }

    #[test]
    fn test_centering_offset_is_half_the_slack() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 100.0, 60.0), plate(2, 100.0, 60.0)];
        let result = fit(
            &plates,
            Region::new(1000.0, 600.0),
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap();
        // content = 200 + 20 gap + 40 padding
        assert_eq!(result.scale, 1.0);
        assert!(result.centered);
        assert_eq!(result.offset_x, (1000.0 - 260.0) / 2.0);
    }

    #[test]
    fn test_overflowing_row_is_left_aligned() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 300.0, 128.0), plate(2, 300.0, 128.0)];
        let result = fit(
            &plates,
            Region::new(200.0, 300.0),
            DisplayMode::AllPlates,
            &config,
        )
        .unwrap();
        assert_eq!(result.scale, 0.3);
        assert!(!result.centered);
        assert_eq!(result.offset_x, 0.0);
    }

    #[test]
    fn test_available_subtracts_padding_and_gaps() {
        let config = ViewportConfig::default();
        let viewport = Region::new(1000.0, 600.0);
        assert_eq!(
            viewport.available(3, DisplayMode::AllPlates, &config),
            Region::new(920.0, 560.0)
        );
        assert_eq!(
            viewport.available(1, DisplayMode::SinglePlate, &config),
            Region::new(960.0, 560.0)
        );
    }

    #[test]
    fn test_plate_origins_follow_row() {
        let config = ViewportConfig::default();
        let plates = [plate(1, 40.0, 40.0), plate(2, 80.0, 40.0)];
        let result = ScaleResult {
            scale: 2.0,
            centered: true,
            offset_x: 10.0,
        };
        let origins = plate_origins(&plates, &result, &config);
        assert_eq!(
            origins,
            vec![
                (PlateId(1), Point::new(30.0, 20.0)),
                (PlateId(2), Point::new(130.0, 20.0)),
            ]
        );
    }
}
