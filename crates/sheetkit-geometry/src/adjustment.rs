//! Asset position corrections.
//!
//! Plotted assets keep their source coordinates and an optional manual
//! correction, both in native units. The deltas between the two are
//! computed, never stored from input, so the audit trail cannot drift from
//! the positions themselves.

use serde::{Deserialize, Serialize};

use sheetkit_core::Point;

/// An asset's source position plus an optional manual correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetPosition {
    /// Position from the imported data source.
    pub original: Point,
    /// Manually corrected position, when the user has moved the asset.
    #[serde(default)]
    pub adjusted: Option<Point>,
}

impl AssetPosition {
    pub fn new(original: Point) -> Self {
        Self {
            original,
            adjusted: None,
        }
    }

    /// The position to plot: the correction when present, else the source.
    pub fn current(&self) -> Point {
        self.adjusted.unwrap_or(self.original)
    }

    pub fn is_adjusted(&self) -> bool {
        self.adjusted.is_some()
    }

    /// Records a correction and returns the delta from the previous
    /// current position, for the adjustment log.
    pub fn adjust(&mut self, to: Point) -> AdjustmentDelta {
        let delta = AdjustmentDelta::between(self.current(), to);
        self.adjusted = Some(to);
        delta
    }

    /// Reverts to the source position.
    pub fn reset(&mut self) {
        self.adjusted = None;
    }

    /// Distance between source and correction; zero when unadjusted.
    pub fn delta_distance(&self) -> f64 {
        match self.adjusted {
            Some(adjusted) => self.original.distance_to(&adjusted),
            None => 0.0,
        }
    }
}

/// One logged movement, in native units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentDelta {
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_distance: f64,
}

impl AdjustmentDelta {
    pub fn between(from: Point, to: Point) -> Self {
        let delta_x = to.x - from.x;
        let delta_y = to.y - from.y;
        Self {
            delta_x,
            delta_y,
            delta_distance: (delta_x * delta_x + delta_y * delta_y).sqrt(),
        }
    }
}
