//! Coordinate units and degree/meter conversion.
//!
//! Native survey coordinates are either plain meters in the project grid or
//! geographic degrees (longitude as X, latitude as Y). Degree deltas are
//! converted with a fixed-radius equirectangular approximation at a
//! reference latitude, not a datum-accurate map projection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{GEOM_EPSILON, METERS_PER_DEGREE};
use crate::geom::Point;

/// Native coordinate unit of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordUnit {
    /// Plain meters in the project's survey grid.
    Meters,
    /// Geographic degrees, WGS84 longitude/latitude.
    Degrees,
}

impl Default for CoordUnit {
    fn default() -> Self {
        Self::Meters
    }
}

impl fmt::Display for CoordUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters => write!(f, "meters"),
            Self::Degrees => write!(f, "degrees"),
        }
    }
}

impl FromStr for CoordUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meters" | "m" => Ok(Self::Meters),
            "degrees" | "deg" => Ok(Self::Degrees),
            _ => Err(format!("Unknown coordinate unit: {}", s)),
        }
    }
}

/// Converts a longitude/latitude delta to an approximate meter delta at
/// `ref_lat_deg`.
///
/// The latitude component is negated: latitude increases northward (up)
/// while canvas Y increases downward.
pub fn degrees_delta_to_meters(d_lon: f64, d_lat: f64, ref_lat_deg: f64) -> Point {
    let cos_lat = ref_lat_deg.to_radians().cos();
    Point::new(
        d_lon * METERS_PER_DEGREE * cos_lat,
        -(d_lat * METERS_PER_DEGREE),
    )
}

/// Inverse of [`degrees_delta_to_meters`].
///
/// Returns `None` at the poles, where `cos(ref_lat)` vanishes and the
/// longitude component is undefined.
pub fn meters_to_degrees_delta(meters: Point, ref_lat_deg: f64) -> Option<Point> {
    let cos_lat = ref_lat_deg.to_radians().cos();
    if cos_lat.abs() < GEOM_EPSILON {
        return None;
    }
    Some(Point::new(
        meters.x / (METERS_PER_DEGREE * cos_lat),
        -(meters.y / METERS_PER_DEGREE),
    ))
}
