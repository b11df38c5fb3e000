//! Contact point generation
//!
//! Given a confirmed overlap, derives the world-space contact location(s)
//! the resolver uses for its torque arms. Pairs involving a circle get a
//! single point; rectangle-rectangle gets up to two.

use crate::types::{approx_eq_f32, Vec2};

/// Contact point for two overlapping circles: on the first circle's
/// surface along the center-to-center direction.
#[must_use]
pub fn circle_circle_contact(pos_a: Vec2, radius_a: f32, pos_b: Vec2) -> Vec2 {
    let direction = (pos_b - pos_a).normalized();
    pos_a + direction * radius_a
}

/// Contact point for a circle overlapping a rectangle: the closest point
/// to the circle center across the rectangle's four edges.
#[must_use]
pub fn circle_rectangle_contact(circle_pos: Vec2, vertices: &[Vec2; 4]) -> Vec2 {
    let mut contact = Vec2::ZERO;
    let mut smallest_distance = f32::MAX;

    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];

        let candidate = closest_point_on_segment(a, b, circle_pos);
        let distance = candidate.distance(circle_pos);
        if distance <= smallest_distance {
            smallest_distance = distance;
            contact = candidate;
        }
    }

    contact
}

/// Contact points for two overlapping rectangles.
///
/// Every vertex of each rectangle is tested against every edge of the
/// other. The globally closest point becomes the first contact; a later
/// candidate within tolerance of the minimum becomes the second, giving a
/// stable two-point manifold for edge-edge contact. The second pass also
/// rejects candidates coincident with the first point; the first pass
/// accepts them, which can pick a second point from an unrelated
/// vertex-edge pair in rare configurations. That selection is kept as-is.
#[must_use]
pub fn rectangle_rectangle_contact(
    verts_a: &[Vec2; 4],
    verts_b: &[Vec2; 4],
) -> ([Vec2; 2], usize) {
    let mut cp1 = Vec2::ZERO;
    let mut cp2 = Vec2::ZERO;
    let mut count = 0;
    let mut min_distance = f32::MAX;

    for point in verts_a {
        for j in 0..verts_b.len() {
            let a = verts_b[j];
            let b = verts_b[(j + 1) % verts_b.len()];

            let candidate = closest_point_on_segment(a, b, *point);
            let distance = candidate.distance(*point);
            if distance < min_distance {
                cp1 = candidate;
                min_distance = distance;
                count = 1;
            } else if approx_eq_f32(distance, min_distance) {
                cp2 = candidate;
                count = 2;
            }
        }
    }

    for point in verts_b {
        for j in 0..verts_a.len() {
            let a = verts_a[j];
            let b = verts_a[(j + 1) % verts_a.len()];

            let candidate = closest_point_on_segment(a, b, *point);
            let distance = candidate.distance(*point);
            if distance < min_distance {
                cp1 = candidate;
                min_distance = distance;
                count = 1;
            } else if approx_eq_f32(distance, min_distance) && !candidate.approx_eq(cp1) {
                cp2 = candidate;
                count = 2;
            }
        }
    }

    ([cp1, cp2], count)
}

/// Closest point to `point` on the segment from `a` to `b`.
///
/// A degenerate segment falls back to its first endpoint.
#[must_use]
pub fn closest_point_on_segment(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
    let ab = b - a;
    let ap = point - a;

    let length_squared = ab.length_squared();
    if length_squared < f32::EPSILON {
        return a;
    }

    let t = ab.dot(ap) / length_squared;
    if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        a + ab * t
    }
}
