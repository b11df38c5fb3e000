//! Circle-rectangle collision detection via SAT

use crate::body::{RigidBody, Shape};
use crate::types::Vec2;

use super::{contact, project_circle, project_vertices, Manifold};

/// Detect overlap between a circle and a rectangle and separate them.
///
/// Runs SAT over the rectangle's four edge perpendiculars plus one extra
/// axis from the circle center to the nearest rectangle vertex. The extra
/// axis covers the corner case where the true separating direction is not
/// an edge normal. The reported normal points from the circle toward the
/// rectangle.
pub fn detect_circle_rectangle(circle: &mut RigidBody, rect: &mut RigidBody) -> Option<Manifold> {
    let Shape::Circle { radius } = circle.shape else {
        return None;
    };
    let Shape::Rectangle { vertices, .. } = rect.shape else {
        return None;
    };

    let mut normal = Vec2::ZERO;
    let mut depth = f32::MAX;
    let mut closest_vertex = vertices[0];

    for i in 0..vertices.len() {
        if closest_vertex.distance_squared(circle.position)
            > vertices[i].distance_squared(circle.position)
        {
            closest_vertex = vertices[i];
        }

        let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
        let axis = edge.perp();

        let (min_a, max_a) = project_vertices(&vertices, axis);
        let (min_b, max_b) = project_circle(circle.position, radius, axis);
        if min_b > max_a || min_a > max_b {
            return None;
        }

        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap < depth {
            depth = overlap;
            normal = axis;
        }
    }

    // Corner axis: circle center to nearest vertex. Degenerate when the
    // center sits on the vertex itself.
    let corner_axis = circle.position - closest_vertex;
    if corner_axis.length_squared() > f32::EPSILON {
        let (min_a, max_a) = project_vertices(&vertices, corner_axis);
        let (min_b, max_b) = project_circle(circle.position, radius, corner_axis);
        if min_b > max_a || min_a > max_b {
            return None;
        }

        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap < depth {
            depth = overlap;
            normal = corner_axis;
        }
    }

    // Axes were left unnormalized during the scan; rescale the winning
    // overlap into world units.
    depth /= normal.length();
    let mut normal = normal.normalized();

    let direction = rect.position - circle.position;
    if direction.dot(normal) < 0.0 {
        normal = -normal;
    }

    circle.move_by(-normal * (depth / 2.0));
    rect.move_by(normal * (depth / 2.0));

    let Shape::Rectangle { vertices, .. } = rect.shape else {
        return None;
    };
    let contact =
        contact::circle_rectangle_contact(circle.position, &vertices);
    Some(Manifold::single(normal, contact))
}
