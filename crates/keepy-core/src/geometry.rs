// ABOUTME: Angle-between-three-points and distance helpers over landmark positions
// ABOUTME: Law-of-cosines joint angles with clamped cosine and degenerate-segment handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! Geometric utilities for joint-angle computations.
//!
//! Angles are measured at the middle point `b` of the triple `(a, b, c)`, in
//! degrees, from the three pairwise distances. Only `x`/`y` take part; depth
//! estimates from the pose model are too noisy to be useful here.

use crate::models::Point;

/// Straight angle returned by [`safe_angle`] when a segment has zero length
pub const STRAIGHT_ANGLE_DEGREES: f64 = 180.0;

/// Euclidean distance between two points in the image plane
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.hypot(dy)
}

/// Midpoint of two points
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Angle at vertex `b` formed by `a` and `c`, in degrees.
///
/// Returns `None` when `b` coincides with `a` or `c` (zero-length side), so the
/// caller can skip whatever check needed the angle.
#[must_use]
pub fn angle(a: Point, b: Point, c: Point) -> Option<f64> {
    let side_bc = distance(b, c);
    let side_ab = distance(a, b);
    let side_ac = distance(a, c);

    if side_bc == 0.0 || side_ab == 0.0 {
        return None;
    }

    let cosine = side_ab.mul_add(side_ab, side_bc * side_bc) - side_ac * side_ac;
    let cosine = (cosine / (2.0 * side_ab * side_bc)).clamp(-1.0, 1.0);
    let degrees = cosine.acos().to_degrees();

    degrees.is_finite().then_some(degrees)
}

/// Angle at vertex `b`, falling back to a straight angle for degenerate input
#[must_use]
pub fn safe_angle(a: Point, b: Point, c: Point) -> f64 {
    angle(a, b, c).unwrap_or(STRAIGHT_ANGLE_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-6
    }

    #[test]
    fn test_right_angle() {
        let result = angle(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        );
        assert!(result.is_some_and(|deg| approx(deg, 90.0)));
    }

    #[test]
    fn test_straight_line() {
        let result = angle(
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!(result.is_some_and(|deg| approx(deg, 180.0)));
    }

    #[test]
    fn test_folded_segment_is_zero_degrees() {
        let result = angle(
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
        );
        assert!(result.is_some_and(|deg| approx(deg, 0.0)));
    }

    #[test]
    fn test_degenerate_angle_is_none() {
        let shared = Point::new(3.0, 4.0);
        assert!(angle(shared, shared, Point::new(9.0, 9.0)).is_none());
        assert!(angle(Point::new(9.0, 9.0), shared, shared).is_none());
    }

    #[test]
    fn test_safe_angle_degenerate_is_straight() {
        let shared = Point::new(3.0, 4.0);
        let deg = safe_angle(shared, shared, Point::new(1.0, 1.0));
        assert!((deg - STRAIGHT_ANGLE_DEGREES).abs() < f64::EPSILON);
        let deg = safe_angle(Point::new(1.0, 1.0), shared, shared);
        assert!((deg - STRAIGHT_ANGLE_DEGREES).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!(approx(distance(a, b), 5.0));
        let mid = midpoint(a, b);
        assert!(approx(mid.x, 1.5) && approx(mid.y, 2.0));
    }
}
