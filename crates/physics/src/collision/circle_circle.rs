//! Circle-circle collision detection

use crate::body::{RigidBody, Shape};
use crate::types::Vec2;

use super::{contact, Manifold};

/// Detect overlap between two circles and separate them.
///
/// On overlap, splits the penetration depth equally between the two bodies
/// (a static body ignores its half) and reports the manifold with the
/// normal pointing from `a` toward `b`. Coincident centers are a
/// degenerate case with no usable normal and report no collision.
pub fn detect_circle_circle(a: &mut RigidBody, b: &mut RigidBody) -> Option<Manifold> {
    let (Shape::Circle { radius: radius_a }, Shape::Circle { radius: radius_b }) =
        (a.shape, b.shape)
    else {
        return None;
    };

    let distance = a.position.distance(b.position);
    let radii = radius_a + radius_b;

    if distance >= radii || distance < f32::EPSILON {
        return None;
    }

    let normal = (b.position - a.position) / distance;
    let depth = radii - distance;

    a.move_by(-normal * (depth / 2.0));
    b.move_by(normal * (depth / 2.0));

    let contact = contact::circle_circle_contact(a.position, radius_a, b.position);
    Some(Manifold::single(normal, contact))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, radius: f32) -> RigidBody {
        RigidBody::circle(Vec2::new(x, y), 0.5, 1.0, false, 0.0, 0.1, 0.2, radius)
    }

    #[test]
    fn overlapping_circles_are_separated() {
        let mut a = circle(0.0, 0.0, 5.0);
        let mut b = circle(3.0, 0.0, 5.0);

        let manifold = detect_circle_circle(&mut a, &mut b).unwrap();
        assert!(manifold.normal.approx_eq(Vec2::new(1.0, 0.0)));
        assert!((a.position.distance(b.position) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn disjoint_circles_do_not_collide() {
        let mut a = circle(0.0, 0.0, 2.0);
        let mut b = circle(10.0, 0.0, 2.0);

        assert!(detect_circle_circle(&mut a, &mut b).is_none());
        assert_eq!(a.position, Vec2::ZERO);
        assert_eq!(b.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn coincident_centers_are_ignored() {
        let mut a = circle(1.0, 1.0, 2.0);
        let mut b = circle(1.0, 1.0, 2.0);

        assert!(detect_circle_circle(&mut a, &mut b).is_none());
    }

    #[test]
    fn static_side_leaves_correction_to_dynamic_body() {
        let mut a = RigidBody::circle(Vec2::ZERO, 0.5, 1.0, true, 0.0, 0.1, 0.2, 5.0);
        let mut b = circle(8.0, 0.0, 5.0);

        detect_circle_circle(&mut a, &mut b).unwrap();
        assert_eq!(a.position, Vec2::ZERO);
        assert!(b.position.x > 8.0);
    }
}
