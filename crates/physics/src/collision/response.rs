//! Sequential-impulse collision response
//!
//! Two passes per manifold: normal impulses with restitution first, then
//! tangential impulses with Coulomb friction. Within each pass every
//! contact's impulse is computed from the same velocity snapshot before
//! any of them is applied, so contact ordering inside a pair carries no
//! bias.

use crate::body::RigidBody;
use crate::types::Vec2;

use super::Manifold;

/// Maximum contacts per manifold; sizes the per-pair scratch arrays.
const MAX_CONTACTS: usize = 2;

/// Apply impulse-based collision response for a resolved pair.
pub fn resolve_collision(a: &mut RigidBody, b: &mut RigidBody, manifold: &Manifold) {
    if a.is_static && b.is_static {
        return;
    }

    let normal = manifold.normal;
    let count = manifold.contact_count.min(MAX_CONTACTS);

    let restitution = a.restitution.min(b.restitution);
    let static_friction = (a.static_friction + b.static_friction) / 2.0;
    let dynamic_friction = (a.dynamic_friction + b.dynamic_friction) / 2.0;

    let mut arms_a = [Vec2::ZERO; MAX_CONTACTS];
    let mut arms_b = [Vec2::ZERO; MAX_CONTACTS];
    let mut normal_magnitudes = [0.0_f32; MAX_CONTACTS];
    let mut impulses = [Vec2::ZERO; MAX_CONTACTS];

    // Normal pass: all impulses derive from pre-impulse velocities.
    for i in 0..count {
        let contact = manifold.contacts[i];
        arms_a[i] = contact - a.position;
        arms_b[i] = contact - b.position;

        let relative_velocity = contact_velocity(b, arms_b[i]) - contact_velocity(a, arms_a[i]);
        let velocity_along_normal = relative_velocity.dot(normal);
        if velocity_along_normal > 0.0 {
            // Already separating at this contact.
            continue;
        }

        let denominator = effective_mass(a, b, arms_a[i], arms_b[i], normal);
        let j = -(1.0 + restitution) * velocity_along_normal / (denominator * count as f32);

        normal_magnitudes[i] = j;
        impulses[i] = normal * j;
    }

    for i in 0..count {
        a.apply_impulse(-impulses[i], arms_a[i]);
        b.apply_impulse(impulses[i], arms_b[i]);
    }

    // Friction pass: recomputed from post-normal-impulse velocities.
    let mut friction_impulses = [Vec2::ZERO; MAX_CONTACTS];
    for i in 0..count {
        let relative_velocity = contact_velocity(b, arms_b[i]) - contact_velocity(a, arms_a[i]);

        let tangential = relative_velocity - normal * relative_velocity.dot(normal);
        if tangential.approx_eq(Vec2::ZERO) {
            continue;
        }
        let tangent = tangential.normalized();

        let denominator = effective_mass(a, b, arms_a[i], arms_b[i], tangent);
        let jt = -relative_velocity.dot(tangent) / (denominator * count as f32);

        let j = normal_magnitudes[i];
        friction_impulses[i] = if jt.abs() <= j * static_friction {
            // Sticking: the tangential impulse is inside the friction cone.
            tangent * jt
        } else {
            // Sliding: clamp to the Coulomb limit.
            tangent * (-j * dynamic_friction)
        };
    }

    for i in 0..count {
        a.apply_impulse(-friction_impulses[i], arms_a[i]);
        b.apply_impulse(friction_impulses[i], arms_b[i]);
    }
}

/// Velocity of a body at a contact arm, including the rotational term.
fn contact_velocity(body: &RigidBody, arm: Vec2) -> Vec2 {
    body.velocity + Vec2::cross_scalar(body.angular_velocity, arm)
}

/// Effective-mass denominator along a direction for the given arms.
fn effective_mass(a: &RigidBody, b: &RigidBody, arm_a: Vec2, arm_b: Vec2, direction: Vec2) -> f32 {
    let arm_a_cross = arm_a.cross(direction);
    let arm_b_cross = arm_b.cross(direction);
    a.inverse_mass
        + b.inverse_mass
        + a.inverse_rotational_inertia * arm_a_cross * arm_a_cross
        + b.inverse_rotational_inertia * arm_b_cross * arm_b_cross
}
