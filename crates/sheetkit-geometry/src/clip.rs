//! Half-plane polygon clipping.
//!
//! Sutherland–Hodgman against a single directed edge: "inside" is the left
//! half-plane of `edge_p1 -> edge_p2`. This layer knows nothing about cut
//! records, flip flags, or sheets; the composite engine decides edge
//! direction and feeds edges in one at a time.

use sheetkit_core::constants::GEOM_EPSILON;
use sheetkit_core::Point;

/// Clips `subject` to the left half-plane of the directed edge.
///
/// Vertices on the boundary count as inside (`cross >= 0`). Crossing edges
/// contribute their boundary intersection, interpolated from the two signed
/// cross products. An empty subject yields an empty result; degenerate
/// input never panics.
pub fn clip_half_plane(subject: &[Point], edge_p1: Point, edge_p2: Point) -> Vec<Point> {
    if subject.is_empty() {
        return Vec::new();
    }

    let dx = edge_p2.x - edge_p1.x;
    let dy = edge_p2.y - edge_p1.y;
    let cross = |pt: &Point| dx * (pt.y - edge_p1.y) - dy * (pt.x - edge_p1.x);

    let mut output = Vec::with_capacity(subject.len() + 1);
    for (i, &current) in subject.iter().enumerate() {
        let previous = subject[(i + subject.len() - 1) % subject.len()];
        let side_current = cross(&current);
        let side_previous = cross(&previous);

        if side_current >= 0.0 {
            if side_previous < 0.0 {
                output.push(intersect(previous, current, side_previous, side_current));
            }
            output.push(current);
        } else if side_previous >= 0.0 {
            output.push(intersect(previous, current, side_previous, side_current));
        }
    }
    output
}

/// Point where the segment `p1 -> p2` crosses the clip boundary, given the
/// signed cross products of its endpoints.
fn intersect(p1: Point, p2: Point, side1: f64, side2: f64) -> Point {
    let denom = side1 - side2;
    if denom.abs() < GEOM_EPSILON {
        // Both endpoints sit on the boundary; any point of the segment is
        // valid, so take the midpoint instead of dividing by near-zero.
        return p1.midpoint(&p2);
    }
    let t = side1 / denom;
    Point::new(p1.x + t * (p2.x - p1.x), p1.y + t * (p2.y - p1.y))
}

/// Absolute polygon area by the shoelace formula. Returns 0 for fewer than
/// three vertices.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice_area += p.x * q.y - q.x * p.y;
    }
    (twice_area * 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_vertical_edge_keeps_left_half() {
        let clipped = clip_half_plane(&unit_square(), Point::new(0.5, -1.0), Point::new(0.5, 2.0));
        assert_eq!(
            clipped,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.0),
                Point::new(0.5, 1.0),
                Point::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_fully_inside_is_unchanged() {
        let clipped = clip_half_plane(
            &unit_square(),
            Point::new(10.0, -10.0),
            Point::new(10.0, 10.0),
        );
        assert_eq!(clipped, unit_square());
    }

    #[test]
    fn test_fully_outside_is_empty() {
        let clipped = clip_half_plane(
            &unit_square(),
            Point::new(-10.0, -10.0),
            Point::new(-10.0, 10.0),
        );
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_empty_subject() {
        assert!(clip_half_plane(&[], Point::ZERO, Point::new(1.0, 0.0)).is_empty());
    }

    #[test]
    fn test_edge_along_side_collapses_to_zero_area() {
        // The edge runs up the square's left side, so only the boundary
        // itself survives.
        let clipped = clip_half_plane(&unit_square(), Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!(polygon_area(&clipped) < 1e-12);
        assert!(clipped.iter().all(|p| p.x.abs() < 1e-12));
    }

    #[test]
    fn test_diagonal_cut_area() {
        let clipped = clip_half_plane(&unit_square(), Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!((polygon_area(&clipped) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_area_of_degenerate_inputs() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[Point::ZERO, Point::new(1.0, 1.0)]), 0.0);
    }
}
