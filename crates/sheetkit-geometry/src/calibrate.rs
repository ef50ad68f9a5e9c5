//! Scale calibration from a user-picked span.
//!
//! The user clicks two pixel points along a feature of known real-world
//! length; the quotient becomes the project's pixels-per-meter. Stateless:
//! the caller writes the result into its `CalibrationState`.

use tracing::debug;

use sheetkit_core::constants::GEOM_EPSILON;
use sheetkit_core::{CalibrationError, Point};

/// Derives pixels-per-meter from two pixel points and the real-world
/// distance between them.
///
/// Rejects non-finite points, a distance that is zero, negative, or
/// non-finite, and coincident points (which would produce a scale of zero).
/// The result is stored at full precision; no rounding.
pub fn calibrate_scale(
    p1: Point,
    p2: Point,
    real_world_distance_m: f64,
) -> Result<f64, CalibrationError> {
    if !p1.is_finite() || !p2.is_finite() {
        return Err(CalibrationError::NonFinitePoint);
    }
    if !real_world_distance_m.is_finite() || real_world_distance_m <= 0.0 {
        return Err(CalibrationError::InvalidDistance {
            distance: real_world_distance_m,
        });
    }
    let pixel_distance = p1.distance_to(&p2);
    if pixel_distance < GEOM_EPSILON {
        return Err(CalibrationError::CoincidentPoints);
    }
    let pixels_per_meter = pixel_distance / real_world_distance_m;
    debug!(pixels_per_meter, "derived scale from calibration span");
    Ok(pixels_per_meter)
}
