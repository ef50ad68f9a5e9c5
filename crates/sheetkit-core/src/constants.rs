//! Shared numeric constants.

/// Cutoff below which a determinant or interpolation denominator is treated
/// as degenerate.
pub const GEOM_EPSILON: f64 = 1e-10;

/// Meters spanned by one degree of latitude in the fixed-radius
/// equirectangular approximation used for degree-unit projects.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Default scale for new projects, in pixels per meter.
pub const DEFAULT_PIXELS_PER_METER: f64 = 100.0;

/// Padding applied around a sheet when seeding the composite clip
/// rectangle, as a fraction of the larger sheet dimension. Any value large
/// enough to contain every cut intersection produces the same final region.
pub const CLIP_PADDING_FACTOR: f64 = 0.6;
