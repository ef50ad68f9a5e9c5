//! Conversion between native survey coordinates and canvas pixels.
//!
//! Two modes, selected by the calibration state:
//!
//! - **Direct mode**: native (0, 0) sits at a fixed pixel origin and
//!   coordinates scale linearly by pixels-per-meter.
//! - **Anchored mode**: a reference asset's native position is pinned to a
//!   canvas pixel, and the whole overlay rotates around that pin. Active
//!   whenever the calibration carries a placed reference anchor.
//!
//! Degree-unit projects convert deltas to meters with the equirectangular
//! approximation before scaling. The reference latitude for that conversion
//! is the anchor's latitude in anchored mode but the point's own latitude
//! in direct mode; the asymmetry is longstanding observed behavior that
//! calibrated projects depend on, so both directions reproduce it exactly.
//!
//! A calibration without a usable scale degrades every transform to
//! `(0, 0)` instead of failing: measuring before calibrating is an ordinary
//! user sequence and must leave the editor interactive.

use tracing::warn;

use sheetkit_core::{
    degrees_delta_to_meters, meters_to_degrees_delta, CalibrationState, CoordUnit, Point,
    ReferenceAnchor,
};

/// Converts a native-space point to canvas pixels.
///
/// Anchored mode:
/// ```text
/// m = to_meters(native - anchor.native_pos)      // at the anchor latitude
/// r = rotate_cw(m, anchor.rotation_deg)
/// pixel = anchor.anchor_pixel + r * ppm
/// ```
///
/// Direct mode:
/// ```text
/// pixel = origin + to_meters(native) * ppm       // at the point's latitude
/// ```
pub fn native_to_pixel(native: Point, calib: &CalibrationState) -> Point {
    let Some(ppm) = calib.scale() else {
        warn!("transform requested without a valid pixels-per-meter; returning (0,0)");
        return Point::ZERO;
    };
    match calib.reference {
        Some(anchor) if anchor.is_placed() => anchored_to_pixel(native, &anchor, calib.unit, ppm),
        _ => direct_to_pixel(native, calib.origin, calib.unit, ppm),
    }
}

/// Converts a canvas pixel to native space. Exact algebraic inverse of
/// [`native_to_pixel`] in both modes and both units.
pub fn pixel_to_native(pixel: Point, calib: &CalibrationState) -> Point {
    let Some(ppm) = calib.scale() else {
        warn!("transform requested without a valid pixels-per-meter; returning (0,0)");
        return Point::ZERO;
    };
    match calib.reference {
        Some(anchor) if anchor.is_placed() => anchored_to_native(pixel, &anchor, calib.unit, ppm),
        _ => direct_to_native(pixel, calib.origin, calib.unit, ppm),
    }
}

fn anchored_to_pixel(native: Point, anchor: &ReferenceAnchor, unit: CoordUnit, ppm: f64) -> Point {
    let delta = Point::new(
        native.x - anchor.native_pos.x,
        native.y - anchor.native_pos.y,
    );
    let meters = match unit {
        CoordUnit::Meters => delta,
        CoordUnit::Degrees => degrees_delta_to_meters(delta.x, delta.y, anchor.native_pos.y),
    };

    let rad = anchor.rotation_deg.to_radians();
    let (sin_r, cos_r) = (rad.sin(), rad.cos());
    let rot_x = meters.x * cos_r - meters.y * sin_r;
    let rot_y = meters.x * sin_r + meters.y * cos_r;

    Point::new(
        anchor.anchor_pixel.x + rot_x * ppm,
        anchor.anchor_pixel.y + rot_y * ppm,
    )
}

fn anchored_to_native(pixel: Point, anchor: &ReferenceAnchor, unit: CoordUnit, ppm: f64) -> Point {
    let dx = (pixel.x - anchor.anchor_pixel.x) / ppm;
    let dy = (pixel.y - anchor.anchor_pixel.y) / ppm;

    // Undo the overlay rotation.
    let rad = anchor.rotation_deg.to_radians();
    let (sin_r, cos_r) = (rad.sin(), rad.cos());
    let meters = Point::new(dx * cos_r + dy * sin_r, -dx * sin_r + dy * cos_r);

    let delta = match unit {
        CoordUnit::Meters => meters,
        CoordUnit::Degrees => match meters_to_degrees_delta(meters, anchor.native_pos.y) {
            Some(d) => d,
            None => {
                warn!("reference anchor sits at a pole; returning (0,0)");
                return Point::ZERO;
            }
        },
    };

    Point::new(anchor.native_pos.x + delta.x, anchor.native_pos.y + delta.y)
}

fn direct_to_pixel(native: Point, origin: Point, unit: CoordUnit, ppm: f64) -> Point {
    let meters = match unit {
        CoordUnit::Meters => native,
        // The delta is taken against native (0,0) at the point's own
        // latitude.
        CoordUnit::Degrees => degrees_delta_to_meters(native.x, native.y, native.y),
    };
    Point::new(origin.x + meters.x * ppm, origin.y + meters.y * ppm)
}

fn direct_to_native(pixel: Point, origin: Point, unit: CoordUnit, ppm: f64) -> Point {
    let meters = Point::new((pixel.x - origin.x) / ppm, (pixel.y - origin.y) / ppm);
    match unit {
        CoordUnit::Meters => meters,
        CoordUnit::Degrees => {
            // Latitude only depends on the Y component, so recover it
            // first, then divide longitude by the cosine of the recovered
            // latitude. This mirrors the forward direction exactly.
            let lat = -(meters.y / sheetkit_core::constants::METERS_PER_DEGREE);
            match meters_to_degrees_delta(meters, lat) {
                Some(d) => d,
                None => {
                    warn!("recovered latitude sits at a pole; returning (0,0)");
                    return Point::ZERO;
                }
            }
        }
    }
}
