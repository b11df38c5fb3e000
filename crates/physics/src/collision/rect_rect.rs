//! Rectangle-rectangle collision detection via SAT

use crate::body::{RigidBody, Shape};
use crate::types::Vec2;

use super::{contact, project_vertices, Manifold};

/// Detect overlap between two rectangles and separate them.
///
/// Standard 2D SAT over both rectangles' edge perpendiculars (eight axes).
/// The axis with the minimum projected overlap becomes the separating
/// normal, flipped if needed so it points from `a` toward `b`.
pub fn detect_rectangle_rectangle(a: &mut RigidBody, b: &mut RigidBody) -> Option<Manifold> {
    let (
        Shape::Rectangle {
            vertices: verts_a, ..
        },
        Shape::Rectangle {
            vertices: verts_b, ..
        },
    ) = (a.shape, b.shape)
    else {
        return None;
    };

    let mut normal = Vec2::ZERO;
    let mut depth = f32::MAX;

    for vertices in [&verts_a, &verts_b] {
        for i in 0..vertices.len() {
            let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
            let axis = edge.perp();

            let (min_a, max_a) = project_vertices(&verts_a, axis);
            let (min_b, max_b) = project_vertices(&verts_b, axis);
            if min_b > max_a || min_a > max_b {
                return None;
            }

            let overlap = (max_a - min_b).min(max_b - min_a);
            if overlap < depth {
                depth = overlap;
                normal = axis;
            }
        }
    }

    depth /= normal.length();
    let mut normal = normal.normalized();

    let direction = b.position - a.position;
    if direction.dot(normal) < 0.0 {
        normal = -normal;
    }

    a.move_by(-normal * (depth / 2.0));
    b.move_by(normal * (depth / 2.0));

    let (
        Shape::Rectangle {
            vertices: verts_a, ..
        },
        Shape::Rectangle {
            vertices: verts_b, ..
        },
    ) = (a.shape, b.shape)
    else {
        return None;
    };

    let (contacts, contact_count) = contact::rectangle_rectangle_contact(&verts_a, &verts_b);
    Some(Manifold {
        normal,
        contacts,
        contact_count,
    })
}
