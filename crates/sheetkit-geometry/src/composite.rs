//! Composite clip region computation.
//!
//! Folds a sheet's ordered cut list through the half-plane clipper to
//! derive the single visible region, in the sheet's local space (origin at
//! the sheet center). Each cut keeps the side containing the center unless
//! flipped; the running polygon is then trimmed to the sheet rectangle and
//! rounded to integer pixels for canvas clipping.
//!
//! The fold seeds from a rectangle padded well past the sheet so boundary
//! intersections of any plausible cut line land inside it; the final trim
//! makes the result independent of the padding choice.

use tracing::debug;

use sheetkit_core::constants::{CLIP_PADDING_FACTOR, GEOM_EPSILON};
use sheetkit_core::{Point, Result, TransformError};

use crate::clip::{clip_half_plane, polygon_area};
use crate::cuts::CutList;

/// The visible region of a sheet after all cuts, in local pixel units.
///
/// Derived, never persisted: recomputed wholesale whenever the cut list
/// changes. `None` at the call sites means the sheet is fully obscured.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPolygon {
    pub points: Vec<Point>,
}

impl ClipPolygon {
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }
}

/// Computes the visible region with the default seed padding.
///
/// `Ok(None)` means nothing is visible: the cuts removed everything, or the
/// sheet has no usable extent yet (unrendered sheets report zero size).
/// Non-finite dimensions or cut coordinates are hard errors.
pub fn compute_clip_polygon(
    sheet_width: f64,
    sheet_height: f64,
    cuts: &CutList,
) -> Result<Option<ClipPolygon>> {
    compute_clip_polygon_with_padding(sheet_width, sheet_height, cuts, CLIP_PADDING_FACTOR)
}

/// Same as [`compute_clip_polygon`] with an explicit padding factor for the
/// seed rectangle. Any factor that keeps every cut intersection inside the
/// seed yields an identical region; the parameter exists for tuning and for
/// demonstrating that stability.
pub fn compute_clip_polygon_with_padding(
    sheet_width: f64,
    sheet_height: f64,
    cuts: &CutList,
    padding_factor: f64,
) -> Result<Option<ClipPolygon>> {
    if !sheet_width.is_finite() || !sheet_height.is_finite() || !padding_factor.is_finite() {
        return Err(TransformError::NonFiniteInput.into());
    }
    cuts.validate()?;
    if sheet_width <= 0.0 || sheet_height <= 0.0 {
        return Ok(None);
    }

    let half_w = sheet_width / 2.0;
    let half_h = sheet_height / 2.0;
    let pad = padding_factor * sheet_width.max(sheet_height);
    let mut polygon = rectangle(half_w + pad, half_h + pad);

    for (index, cut) in cuts.iter().enumerate() {
        if cut.length() < GEOM_EPSILON {
            debug!(index, "skipping zero-length cut");
            continue;
        }
        polygon = keep_side(&polygon, cut.p1, cut.p2, cut.flipped);
        if polygon.is_empty() {
            debug!(index, "cut removed the entire region");
            return Ok(None);
        }
    }

    // Trim to the sheet itself: the four unflipped edge cuts keep exactly
    // the sheet rectangle, making the result independent of the seed pad.
    for (p1, p2) in sheet_edges(half_w, half_h) {
        polygon = keep_side(&polygon, p1, p2, false);
        if polygon.is_empty() {
            return Ok(None);
        }
    }

    // Downstream rendering clips the sheet image in pixel space; vertices
    // drop to whole pixels here.
    let points: Vec<Point> = polygon
        .iter()
        .map(|p| Point::new(p.x.round(), p.y.round()))
        .collect();
    if points.len() < 3 {
        return Ok(None);
    }
    Ok(Some(ClipPolygon { points }))
}

/// Clips `polygon` to one side of the line through `p1 -> p2`: the side
/// containing the sheet center by default, the opposite side when flipped.
fn keep_side(polygon: &[Point], p1: Point, p2: Point, flipped: bool) -> Vec<Point> {
    let len = p1.distance_to(&p2);
    let dir = Point::new((p2.x - p1.x) / len, (p2.y - p1.y) / len);

    // Candidate perpendicular, left of the cut direction.
    let mut perp = Point::new(-dir.y, dir.x);

    // Point it at the sheet center (the local origin). A cut through the
    // center leaves the dot product at zero and keeps the candidate.
    let mid = p1.midpoint(&p2);
    if perp.x * -mid.x + perp.y * -mid.y < 0.0 {
        perp = Point::new(-perp.x, -perp.y);
    }
    if flipped {
        perp = Point::new(-perp.x, -perp.y);
    }

    // Order the edge so the clipper's inclusive left side is the chosen
    // side.
    let (edge_p1, edge_p2) = if dir.x * perp.y - dir.y * perp.x >= 0.0 {
        (p1, p2)
    } else {
        (p2, p1)
    };
    clip_half_plane(polygon, edge_p1, edge_p2)
}

fn rectangle(half_w: f64, half_h: f64) -> Vec<Point> {
    vec![
        Point::new(-half_w, -half_h),
        Point::new(half_w, -half_h),
        Point::new(half_w, half_h),
        Point::new(-half_w, half_h),
    ]
}

fn sheet_edges(half_w: f64, half_h: f64) -> [(Point, Point); 4] {
    [
        (Point::new(-half_w, -half_h), Point::new(half_w, -half_h)),
        (Point::new(half_w, -half_h), Point::new(half_w, half_h)),
        (Point::new(half_w, half_h), Point::new(-half_w, half_h)),
        (Point::new(-half_w, half_h), Point::new(-half_w, -half_h)),
    ]
}
