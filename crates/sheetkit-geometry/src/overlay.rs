//! Survey overlay transformation.
//!
//! Maps externally sourced survey polygons (cadastral parcel boundaries and
//! the like, each an outer ring plus optional hole rings) into canvas pixel
//! space through the project calibration. The overlay only makes sense once
//! a reference anchor pins the survey data to the canvas; without one the
//! transform is skipped with a warning, matching how the editor quietly
//! omits the overlay until the user places the pin.

use tracing::warn;

use sheetkit_core::{CalibrationState, Point};

use crate::transform::native_to_pixel;

/// Transforms one coordinate ring. `None` when the calibration has no
/// usable scale or no placed reference anchor.
pub fn transform_ring(ring: &[Point], calib: &CalibrationState) -> Option<Vec<Point>> {
    if !calib.has_valid_scale() {
        warn!("overlay transform skipped: no valid pixels-per-meter");
        return None;
    }
    if !calib.is_anchored() {
        warn!("overlay transform skipped: no reference anchor placed");
        return None;
    }
    Some(ring.iter().map(|p| native_to_pixel(*p, calib)).collect())
}

/// Transforms a polygon: outer ring first, hole rings after.
pub fn transform_polygon(rings: &[Vec<Point>], calib: &CalibrationState) -> Option<Vec<Vec<Point>>> {
    rings
        .iter()
        .map(|ring| transform_ring(ring, calib))
        .collect()
}

/// Transforms a multi-polygon (a list of polygons, each a list of rings).
pub fn transform_multi_polygon(
    polygons: &[Vec<Vec<Point>>],
    calib: &CalibrationState,
) -> Option<Vec<Vec<Vec<Point>>>> {
    polygons
        .iter()
        .map(|rings| transform_polygon(rings, calib))
        .collect()
}
