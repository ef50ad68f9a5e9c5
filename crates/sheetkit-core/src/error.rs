//! Error handling for SheetKit
//!
//! Provides structured error types for the calibration and geometry layers.
//! All error types use `thiserror` for ergonomic error handling.
//!
//! Degraded-but-defined conditions are deliberately NOT errors: a transform
//! requested before the project is calibrated returns `(0, 0)`, and a sheet
//! whose cuts remove everything reports `None` for its visible region. Only
//! input a caller should never legitimately produce (non-finite coordinates,
//! non-invertible placement matrices) surfaces as an error.

use thiserror::Error;

/// Calibration error type
///
/// Represents errors raised while deriving a project's pixels-per-meter
/// scale. All variants are rejected before any state mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// The real-world distance was zero, negative, or non-finite.
    #[error("Invalid real-world distance: {distance}")]
    InvalidDistance {
        /// The rejected distance value, in meters.
        distance: f64,
    },

    /// The two picked pixel points coincide, which would produce a scale of
    /// zero and break every subsequent transform.
    #[error("Calibration points are coincident")]
    CoincidentPoints,

    /// A picked point carried a NaN or infinite coordinate.
    #[error("Calibration point is not finite")]
    NonFinitePoint,
}

/// Transform error type
///
/// Represents hard failures in affine and clipping math. These indicate a
/// caller bug (for example a zero-scale sheet placement) rather than a
/// reachable user state, so they are surfaced instead of degraded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The matrix cannot be inverted.
    #[error("Degenerate transform matrix (determinant {determinant})")]
    DegenerateMatrix {
        /// The near-zero determinant that was rejected.
        determinant: f64,
    },

    /// An input coordinate was NaN or infinite.
    #[error("Non-finite coordinate input")]
    NonFiniteInput,
}

/// Main error type for SheetKit
///
/// A unified error type that can represent any error from the workspace.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Calibration error
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    /// Transform error
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a calibration error
    pub fn is_calibration_error(&self) -> bool {
        matches!(self, Error::Calibration(_))
    }

    /// Check if this is a transform error
    pub fn is_transform_error(&self) -> bool {
        matches!(self, Error::Transform(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
