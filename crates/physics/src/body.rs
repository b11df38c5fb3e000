//! # Rigid Bodies
//!
//! Body state, shape variants, and the fixed-timestep integrator.
//!
//! A [`RigidBody`] carries the kinematic and dynamic state shared by all
//! shapes; the [`Shape`] variant adds the shape-specific geometry and the
//! derived rotational inertia. Rectangle vertices are a world-space cache
//! refreshed on every integration step so they never go stale.

use std::f32::consts::TAU;

use crate::types::Vec2;

/// Collision shape carried by a [`RigidBody`].
#[derive(Copy, Clone, Debug)]
pub enum Shape {
    Circle {
        radius: f32,
    },
    Rectangle {
        width: f32,
        height: f32,
        /// World-space corners, recomputed from position and angle.
        vertices: [Vec2; 4],
    },
}

/// A convex rigid body in the simulation.
///
/// Callers outside the engine read this state for rendering; they must not
/// mutate it directly. Position changes only through integration and the
/// detector's positional correction, velocity only through forces and
/// impulses.
#[derive(Copy, Clone, Debug)]
pub struct RigidBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    /// Orientation in radians, wrapped into [0, 2π) each step.
    pub angle: f32,
    /// Per-substep force accumulator, cleared after integration.
    pub acceleration: Vec2,
    pub restitution: f32,
    pub mass: f32,
    pub inverse_mass: f32,
    pub rotational_inertia: f32,
    pub inverse_rotational_inertia: f32,
    pub dynamic_friction: f32,
    pub static_friction: f32,
    pub is_static: bool,
    /// Set and cleared each substep by the drag interaction.
    pub is_held: bool,
    pub shape: Shape,
}

impl RigidBody {
    /// Create a circle body. Validation is the spawn factory's job.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn circle(
        position: Vec2,
        restitution: f32,
        mass: f32,
        is_static: bool,
        angle: f32,
        dynamic_friction: f32,
        static_friction: f32,
        radius: f32,
    ) -> Self {
        let inertia = mass * radius * radius / 2.0;
        Self::new(
            position,
            restitution,
            mass,
            is_static,
            angle,
            dynamic_friction,
            static_friction,
            inertia,
            Shape::Circle { radius },
        )
    }

    /// Create a rectangle body with its initial rotated vertex cache.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn rectangle(
        position: Vec2,
        restitution: f32,
        mass: f32,
        is_static: bool,
        angle: f32,
        dynamic_friction: f32,
        static_friction: f32,
        width: f32,
        height: f32,
    ) -> Self {
        let inertia = mass * (width * width + height * height) / 12.0;
        Self::new(
            position,
            restitution,
            mass,
            is_static,
            angle,
            dynamic_friction,
            static_friction,
            inertia,
            Shape::Rectangle {
                width,
                height,
                vertices: rotated_corners(position, width, height, angle),
            },
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn new(
        position: Vec2,
        restitution: f32,
        mass: f32,
        is_static: bool,
        angle: f32,
        dynamic_friction: f32,
        static_friction: f32,
        rotational_inertia: f32,
        shape: Shape,
    ) -> Self {
        let (mass, inverse_mass, inverse_rotational_inertia) = if is_static {
            (f32::INFINITY, 0.0, 0.0)
        } else {
            (mass, 1.0 / mass, 1.0 / rotational_inertia)
        };

        Self {
            position,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            angle,
            acceleration: Vec2::ZERO,
            restitution,
            mass,
            inverse_mass,
            rotational_inertia,
            inverse_rotational_inertia,
            dynamic_friction,
            static_friction,
            is_static,
            is_held: false,
            shape,
        }
    }

    /// Accumulate a force for the current substep.
    ///
    /// Scaled by inverse mass, so a static body is unaffected.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force * self.inverse_mass;
    }

    /// Direct positional correction used by the detector to separate
    /// overlapping shapes. No-op for static bodies, which leaves the
    /// correction on the dynamic side of a static pair.
    pub fn move_by(&mut self, delta: Vec2) {
        if self.is_static {
            return;
        }
        self.position += delta;
        self.refresh_vertices();
    }

    /// Apply an instantaneous impulse at the given arm from the center
    /// of mass.
    pub fn apply_impulse(&mut self, impulse: Vec2, contact_arm: Vec2) {
        self.velocity += impulse * self.inverse_mass;
        self.angular_velocity += contact_arm.cross(impulse) * self.inverse_rotational_inertia;
    }

    /// Advance the body by one substep using semi-implicit Euler.
    pub fn step(&mut self, delta: f32) {
        self.velocity += self.acceleration * delta;
        self.position += self.velocity * delta;
        self.angle = (self.angle + self.angular_velocity * delta).rem_euclid(TAU);

        self.refresh_vertices();

        // Snap near-zero velocities to rest to stop drift and jitter.
        if self.velocity.approx_eq(Vec2::ZERO) {
            self.velocity = Vec2::ZERO;
        }

        self.acceleration = Vec2::ZERO;
    }

    /// Recompute the world-space vertex cache from position and angle.
    fn refresh_vertices(&mut self) {
        let position = self.position;
        let angle = self.angle;
        if let Shape::Rectangle {
            width,
            height,
            vertices,
        } = &mut self.shape
        {
            *vertices = rotated_corners(position, *width, *height, angle);
        }
    }
}

/// World-space corners of a rectangle rotated about its center.
#[must_use]
pub fn rotated_corners(center: Vec2, width: f32, height: f32, angle: f32) -> [Vec2; 4] {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    [
        rotate_about(Vec2::new(center.x + half_w, center.y - half_h), center, angle),
        rotate_about(Vec2::new(center.x + half_w, center.y + half_h), center, angle),
        rotate_about(Vec2::new(center.x - half_w, center.y + half_h), center, angle),
        rotate_about(Vec2::new(center.x - half_w, center.y - half_h), center, angle),
    ]
}

fn rotate_about(point: Vec2, origin: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let local = point - origin;
    Vec2::new(
        origin.x + local.x * cos - local.y * sin,
        origin.y + local.x * sin + local.y * cos,
    )
}
