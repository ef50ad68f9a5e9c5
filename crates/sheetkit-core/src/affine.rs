//! 2D affine transforms in standard 2×3 form.
//!
//! `x' = a·x + c·y + e`, `y' = b·x + d·y + f`. The rendering surface hands
//! each sheet's placement over in this shape; cut creation inverts it to
//! carry a canvas click into sheet-local coordinates.

use serde::{Deserialize, Serialize};

use crate::constants::GEOM_EPSILON;
use crate::error::TransformError;
use crate::geom::Point;

/// A 2×3 affine matrix (scale, rotation, and translation).
///
/// Must stay invertible: callers treat a near-zero determinant as a
/// degenerate-transform error, never as a silent pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineMatrix {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// A pure translation by `(dx, dy)`.
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// A rotation around the origin by `angle_deg` degrees,
    /// clockwise-positive in screen space (Y grows downward).
    pub fn rotation_deg(angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        let (s, c) = (rad.sin(), rad.cos());
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Composes transforms: the result applies `self` first, then `other`.
    pub fn then(&self, other: &AffineMatrix) -> AffineMatrix {
        AffineMatrix::new(
            other.a * self.a + other.c * self.b,
            other.b * self.a + other.d * self.b,
            other.a * self.c + other.c * self.d,
            other.b * self.c + other.d * self.d,
            other.a * self.e + other.c * self.f + other.e,
            other.b * self.e + other.d * self.f + other.f,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverts the matrix.
    ///
    /// Fails with [`TransformError::DegenerateMatrix`] when the determinant
    /// magnitude falls below the degeneracy cutoff, so no NaN coordinates
    /// ever flow downstream.
    pub fn invert(&self) -> Result<AffineMatrix, TransformError> {
        let det = self.determinant();
        if det.abs() < GEOM_EPSILON {
            return Err(TransformError::DegenerateMatrix { determinant: det });
        }
        Ok(AffineMatrix::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.f - self.d * self.e) / det,
            (self.b * self.e - self.a * self.f) / det,
        ))
    }

    /// Applies the transform to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Applies the inverse transform to a point.
    pub fn apply_inverse(&self, p: Point) -> Result<Point, TransformError> {
        Ok(self.invert()?.apply(p))
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}
