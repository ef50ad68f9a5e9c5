//! Project calibration state.
//!
//! Plain data records, mutated only through explicit calibration actions in
//! the surrounding application and handed into the transform functions by
//! value. Persistence stores these fields verbatim.

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::units::CoordUnit;

/// Pin tying a reference asset's native position to a canvas pixel.
///
/// While a reference is placed, the coordinate space is anchored to it and
/// rotates around it; the fixed origin is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAnchor {
    /// Native-space position of the reference asset (meters or degrees).
    pub native_pos: Point,
    /// Canvas pixel the reference asset is pinned to.
    pub anchor_pixel: Point,
    /// Overlay rotation around the anchor, degrees, clockwise-positive.
    #[serde(default)]
    pub rotation_deg: f64,
}

impl ReferenceAnchor {
    pub fn new(native_pos: Point, anchor_pixel: Point, rotation_deg: f64) -> Self {
        Self {
            native_pos,
            anchor_pixel,
            rotation_deg,
        }
    }

    /// An anchor parked at pixel (0, 0) counts as not placed yet; the
    /// transform falls back to direct mode until the user drops the pin.
    pub fn is_placed(&self) -> bool {
        self.anchor_pixel != Point::ZERO
    }
}

/// Project-scoped coordinate calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationState {
    /// Scale factor from meters to pixels. `None` until the first
    /// calibration; must be finite and positive once set.
    #[serde(default)]
    pub pixels_per_meter: Option<f64>,
    /// Unit of the project's native coordinates.
    #[serde(default)]
    pub unit: CoordUnit,
    /// Canvas pixel position of native (0, 0). Direct mode only.
    #[serde(default)]
    pub origin: Point,
    /// Optional reference anchor; overrides direct mode once placed.
    #[serde(default)]
    pub reference: Option<ReferenceAnchor>,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self {
            pixels_per_meter: None,
            unit: CoordUnit::default(),
            origin: Point::ZERO,
            reference: None,
        }
    }
}

impl CalibrationState {
    /// Returns the scale when it is present, finite, and positive.
    pub fn scale(&self) -> Option<f64> {
        match self.pixels_per_meter {
            Some(ppm) if ppm.is_finite() && ppm > 0.0 => Some(ppm),
            _ => None,
        }
    }

    pub fn has_valid_scale(&self) -> bool {
        self.scale().is_some()
    }

    /// True when a reference anchor is present and placed. Exactly one of
    /// anchored/direct mode is active at transform time.
    pub fn is_anchored(&self) -> bool {
        self.reference.is_some_and(|r| r.is_placed())
    }
}
