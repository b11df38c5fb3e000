//! # Collision Detection and Response
//!
//! Narrow-phase tests between shape pairs via the Separating Axis Theorem,
//! contact-point generation, and the sequential-impulse resolver.
//!
//! Detection and positional correction are fused: a confirmed overlap
//! immediately splits the penetration depth between the two bodies through
//! [`RigidBody::move_by`](crate::body::RigidBody::move_by), then derives
//! the contact manifold from the corrected positions. Velocity response is
//! a separate pass in [`response`].

mod circle_circle;
mod circle_rect;
mod contact;
mod rect_rect;
mod response;

pub use circle_circle::detect_circle_circle;
pub use circle_rect::detect_circle_rectangle;
pub use contact::{
    circle_circle_contact, circle_rectangle_contact, closest_point_on_segment,
    rectangle_rectangle_contact,
};
pub use rect_rect::detect_rectangle_rectangle;
pub use response::resolve_collision;

use crate::types::Vec2;

/// Contact manifold for a colliding pair.
///
/// The normal points outward from body A toward body B. One contact point
/// for any pair involving a circle, up to two for rectangle-rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Manifold {
    pub normal: Vec2,
    pub contacts: [Vec2; 2],
    pub contact_count: usize,
}

impl Manifold {
    #[must_use]
    pub fn single(normal: Vec2, contact: Vec2) -> Self {
        Self {
            normal,
            contacts: [contact, Vec2::ZERO],
            contact_count: 1,
        }
    }

    /// Contact points as a slice of the populated entries.
    #[must_use]
    pub fn contacts(&self) -> &[Vec2] {
        &self.contacts[..self.contact_count]
    }
}

/// Project rectangle vertices onto an axis, returning the min/max extent.
///
/// The axis need not be normalized; both shapes of a pair are projected
/// onto the same raw axis, so overlap comparisons stay consistent.
pub(crate) fn project_vertices(vertices: &[Vec2; 4], axis: Vec2) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for vertex in vertices {
        let alignment = vertex.dot(axis);
        min = min.min(alignment);
        max = max.max(alignment);
    }
    (min, max)
}

/// Project a circle onto an axis, returning the min/max extent.
pub(crate) fn project_circle(center: Vec2, radius: f32, axis: Vec2) -> (f32, f32) {
    let direction = axis.normalized();
    let p1 = (center + direction * radius).dot(axis);
    let p2 = (center - direction * radius).dot(axis);
    (p1.min(p2), p1.max(p2))
}
