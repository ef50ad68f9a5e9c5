//! Per-sheet canvas placement.
//!
//! The rendering surface positions every sheet with a pixel offset and a
//! rotation. Cut lines are drawn in canvas space and must be carried into
//! the sheet's local space immediately, before a cut record is built; the
//! local space is what the composite clipper operates in.

use serde::{Deserialize, Serialize};

use sheetkit_core::{AffineMatrix, Point, TransformError};

/// Placement of a sheet on the canvas: rotate around the sheet's local
/// origin, then translate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetPlacement {
    /// X offset in pixels.
    #[serde(default)]
    pub offset_x: f64,
    /// Y offset in pixels.
    #[serde(default)]
    pub offset_y: f64,
    /// Rotation in degrees, clockwise-positive.
    #[serde(default)]
    pub rotation_deg: f64,
}

impl SheetPlacement {
    pub fn new(offset_x: f64, offset_y: f64, rotation_deg: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            rotation_deg,
        }
    }

    /// The placement as a 2×3 affine matrix (local -> canvas).
    pub fn to_matrix(&self) -> AffineMatrix {
        AffineMatrix::rotation_deg(self.rotation_deg)
            .then(&AffineMatrix::translation(self.offset_x, self.offset_y))
    }

    /// Maps a sheet-local point onto the canvas.
    pub fn local_to_canvas(&self, p: Point) -> Point {
        self.to_matrix().apply(p)
    }

    /// Maps a canvas point into the sheet's local space.
    ///
    /// A rotation-and-translation placement is always invertible, but the
    /// rendering surface may hand over an arbitrary matrix elsewhere, so
    /// the degenerate case stays an explicit error rather than a silent
    /// garbage point.
    pub fn canvas_to_local(&self, p: Point) -> Result<Point, TransformError> {
        self.to_matrix().apply_inverse(p)
    }
}
