//! # SheetKit Core
//!
//! Core types for the sheet alignment engine: plain 2D geometry values,
//! affine placement matrices, coordinate units, calibration state records,
//! and the error taxonomy shared by the workspace.

pub mod affine;
pub mod calibration;
pub mod constants;
pub mod error;
pub mod geom;
pub mod units;

pub use affine::AffineMatrix;
pub use calibration::{CalibrationState, ReferenceAnchor};
pub use error::{CalibrationError, Error, Result, TransformError};
pub use geom::{rotate_point, Point};
pub use units::{degrees_delta_to_meters, meters_to_degrees_delta, CoordUnit};
