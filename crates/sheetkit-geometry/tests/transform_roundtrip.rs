use proptest::prelude::*;

use sheetkit_core::{CalibrationState, CoordUnit, Point, ReferenceAnchor};
use sheetkit_geometry::{native_to_pixel, pixel_to_native};

const TOLERANCE: f64 = 1e-6;

fn direct(ppm: f64, unit: CoordUnit, origin: Point) -> CalibrationState {
    CalibrationState {
        pixels_per_meter: Some(ppm),
        unit,
        origin,
        reference: None,
    }
}

fn anchored(
    ppm: f64,
    unit: CoordUnit,
    native_pos: Point,
    anchor_pixel: Point,
    rotation_deg: f64,
) -> CalibrationState {
    CalibrationState {
        pixels_per_meter: Some(ppm),
        unit,
        origin: Point::ZERO,
        reference: Some(ReferenceAnchor::new(native_pos, anchor_pixel, rotation_deg)),
    }
}

proptest! {
    #[test]
    fn roundtrip_direct_meters(
        x in -10_000.0..10_000.0f64,
        y in -10_000.0..10_000.0f64,
        ppm in 0.1..500.0f64,
        ox in -2_000.0..2_000.0f64,
        oy in -2_000.0..2_000.0f64,
    ) {
        let calib = direct(ppm, CoordUnit::Meters, Point::new(ox, oy));
        let native = Point::new(x, y);
        let back = pixel_to_native(native_to_pixel(native, &calib), &calib);
        prop_assert!((back.x - native.x).abs() < TOLERANCE);
        prop_assert!((back.y - native.y).abs() < TOLERANCE);
    }

    #[test]
    fn roundtrip_direct_degrees(
        lon in -179.0..179.0f64,
        lat in -84.0..84.0f64,
        ppm in 0.1..500.0f64,
    ) {
        let calib = direct(ppm, CoordUnit::Degrees, Point::new(120.0, 80.0));
        let native = Point::new(lon, lat);
        let back = pixel_to_native(native_to_pixel(native, &calib), &calib);
        prop_assert!((back.x - native.x).abs() < TOLERANCE);
        prop_assert!((back.y - native.y).abs() < TOLERANCE);
    }

    #[test]
    fn roundtrip_anchored_meters(
        x in -10_000.0..10_000.0f64,
        y in -10_000.0..10_000.0f64,
        ppm in 0.1..500.0f64,
        rotation in -360.0..360.0f64,
    ) {
        let calib = anchored(
            ppm,
            CoordUnit::Meters,
            Point::new(5_000.0, -3_000.0),
            Point::new(640.0, 480.0),
            rotation,
        );
        let native = Point::new(x, y);
        let back = pixel_to_native(native_to_pixel(native, &calib), &calib);
        prop_assert!((back.x - native.x).abs() < TOLERANCE);
        prop_assert!((back.y - native.y).abs() < TOLERANCE);
    }

    #[test]
    fn roundtrip_anchored_degrees(
        lon in -179.0..179.0f64,
        lat in -84.0..84.0f64,
        ppm in 0.1..500.0f64,
        rotation in -360.0..360.0f64,
    ) {
        let calib = anchored(
            ppm,
            CoordUnit::Degrees,
            Point::new(153.02, -27.47),
            Point::new(400.0, 300.0),
            rotation,
        );
        let native = Point::new(lon, lat);
        let back = pixel_to_native(native_to_pixel(native, &calib), &calib);
        prop_assert!((back.x - native.x).abs() < TOLERANCE);
        prop_assert!((back.y - native.y).abs() < TOLERANCE);
    }
}

#[test]
fn test_rotation_identity_at_anchor() {
    // With zero rotation the reference's own native position must land
    // exactly on the anchor pixel, not merely within tolerance.
    let native_pos = Point::new(153.02, -27.47);
    let anchor_pixel = Point::new(812.0, 457.0);
    let calib = anchored(73.25, CoordUnit::Degrees, native_pos, anchor_pixel, 0.0);
    assert_eq!(native_to_pixel(native_pos, &calib), anchor_pixel);
}

#[test]
fn test_uncalibrated_project_stays_interactive() {
    // Measuring before calibrating is an ordinary user sequence; the
    // transform degrades to (0,0) instead of failing.
    let calib = CalibrationState::default();
    assert_eq!(native_to_pixel(Point::new(55.0, 44.0), &calib), Point::ZERO);
    assert_eq!(pixel_to_native(Point::new(55.0, 44.0), &calib), Point::ZERO);
}

#[test]
fn test_zero_scale_degrades_like_missing_scale() {
    let mut calib = CalibrationState::default();
    calib.pixels_per_meter = Some(0.0);
    assert_eq!(native_to_pixel(Point::new(1.0, 1.0), &calib), Point::ZERO);
}
