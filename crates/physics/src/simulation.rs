//! # Simulation Core
//!
//! The main simulation container and its fixed-substep stepping loop. It
//! owns the body list and coordinates the subsystems each substep:
//! narrow-phase detection, impulse resolution, force application, and
//! integration.

use crate::body::{RigidBody, Shape};
use crate::collision::{
    detect_circle_circle, detect_circle_rectangle, detect_rectangle_rectangle, resolve_collision,
    Manifold,
};
use crate::types::Vec2;

/// Simulated frame quota before substeps run.
const FRAME_TIME: f32 = 1.0 / 60.0;
/// Substeps per simulated frame.
const SUBSTEPS: usize = 64;
/// Timestep handed to each body integration.
const SUBSTEP_TIME: f32 = FRAME_TIME / SUBSTEPS as f32;
/// Extra slack beyond a body's half-extent before it is culled.
const CULL_MARGIN: f32 = 20.0;
/// Squared cursor distance within which a body can be grabbed.
const HOLD_RADIUS_SQUARED: f32 = 2500.0;
/// Spring-like pull toward the cursor for held bodies.
const HOLD_PULL_STRENGTH: f32 = 30.0;
/// Velocity damping applied to held bodies.
const HOLD_DAMPING: f32 = 1.5;

/// Upper bounds enforced by the spawn factories.
#[derive(Copy, Clone, Debug)]
pub struct SpawnLimits {
    pub max_radius: f32,
    pub max_mass: f32,
    pub max_restitution: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl Default for SpawnLimits {
    fn default() -> Self {
        Self {
            max_radius: 100.0,
            max_mass: 1_000_000.0,
            max_restitution: 10.0,
            max_width: 2000.0,
            max_height: 1000.0,
        }
    }
}

/// Main simulation container.
///
/// Single-threaded: [`Simulation::step`] and every mutating call must come
/// from one logical thread between frames. Body iteration follows
/// insertion order, so identical inputs replay deterministically.
pub struct Simulation {
    bodies: Vec<RigidBody>,
    limits: SpawnLimits,
    accumulator: f32,
    width_min: f32,
    width_max: f32,
    height_max: f32,
    contact_points: Vec<Vec2>,
    /// Vertical acceleration magnitude, downward positive.
    pub gravitation: f32,
    /// Set by the application each frame to enable drag interaction.
    pub try_hold: bool,
    /// Cursor position in world space, used while `try_hold` is active.
    pub mouse_position: Vec2,
}

impl Simulation {
    /// Create an empty simulation with the given spawn limits.
    #[must_use]
    pub fn new(limits: SpawnLimits) -> Self {
        Self {
            bodies: Vec::new(),
            limits,
            accumulator: 0.0,
            width_min: 0.0,
            width_max: 1600.0,
            height_max: 1000.0,
            contact_points: Vec::new(),
            gravitation: 1000.0,
            try_hold: false,
            mouse_position: Vec2::ZERO,
        }
    }

    /// Advance the simulation by `delta` seconds of wall time.
    ///
    /// Time accumulates until a full frame quota is reached, then the
    /// fixed substep loop runs: cull, detect and resolve, apply forces,
    /// integrate. Contact points from the stepped frame are collected for
    /// debug rendering and cleared on the next call.
    pub fn step(&mut self, delta: f32) {
        self.contact_points.clear();
        self.accumulator += delta;
        if self.accumulator < FRAME_TIME {
            return;
        }

        for _ in 0..SUBSTEPS {
            self.remove_out_of_bounds();
            self.detect_and_resolve();
            self.apply_forces_and_integrate();
        }
        self.accumulator = 0.0;
    }

    /// Read access to the body list for rendering. Callers must not
    /// mutate bodies through other means between frames.
    #[must_use]
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Contact points generated by the most recently stepped frame.
    #[must_use]
    pub fn contact_points(&self) -> &[Vec2] {
        &self.contact_points
    }

    /// Validated circle spawn. `angle_deg` is in degrees and converted at
    /// this boundary; body state is radians throughout.
    ///
    /// Returns false, leaving the simulation untouched, when a parameter
    /// exceeds the configured limits or is not positive.
    #[allow(clippy::too_many_arguments)]
    pub fn add_circle(
        &mut self,
        position: Vec2,
        restitution: f32,
        mass: f32,
        is_static: bool,
        radius: f32,
        angle_deg: f32,
        dynamic_friction: f32,
        static_friction: f32,
    ) -> bool {
        let valid = radius <= self.limits.max_radius
            && mass <= self.limits.max_mass
            && restitution <= self.limits.max_restitution
            && restitution > 0.0
            && mass > 0.0
            && radius > 0.0;
        if !valid {
            tracing::debug!(radius, mass, restitution, "rejected circle spawn");
            return false;
        }

        self.bodies.push(RigidBody::circle(
            position,
            restitution,
            mass,
            is_static,
            angle_deg.to_radians(),
            dynamic_friction,
            static_friction,
            radius,
        ));
        true
    }

    /// Validated rectangle spawn; see [`Simulation::add_circle`].
    #[allow(clippy::too_many_arguments)]
    pub fn add_rectangle(
        &mut self,
        position: Vec2,
        restitution: f32,
        mass: f32,
        is_static: bool,
        width: f32,
        height: f32,
        angle_deg: f32,
        dynamic_friction: f32,
        static_friction: f32,
    ) -> bool {
        let valid = width <= self.limits.max_width
            && height <= self.limits.max_height
            && mass <= self.limits.max_mass
            && restitution <= self.limits.max_restitution
            && restitution > 0.0
            && mass > 0.0
            && width > 0.0
            && height > 0.0;
        if !valid {
            tracing::debug!(width, height, mass, restitution, "rejected rectangle spawn");
            return false;
        }

        self.bodies.push(RigidBody::rectangle(
            position,
            restitution,
            mass,
            is_static,
            angle_deg.to_radians(),
            dynamic_friction,
            static_friction,
            width,
            height,
        ));
        true
    }

    /// Update the cull box from world-space edge points: the x of the
    /// right and left edges, the y of the bottom edge. There is no upper
    /// boundary; bodies may leave through the top and fall back in.
    pub fn edit_boundaries(&mut self, right: Vec2, bottom: Vec2, left: Vec2) {
        self.width_max = right.x;
        self.height_max = bottom.y;
        self.width_min = left.x;
    }

    pub fn remove_all_bodies(&mut self) {
        self.bodies.clear();
    }

    /// Drop non-static bodies that fully left the boundary envelope.
    fn remove_out_of_bounds(&mut self) {
        let (width_min, width_max, height_max) = (self.width_min, self.width_max, self.height_max);
        self.bodies.retain(|body| {
            let out = is_out_of_bounds(body, width_min, width_max, height_max);
            if out {
                tracing::debug!(x = body.position.x, y = body.position.y, "culled body");
            }
            !out
        });
    }

    /// All-pairs narrow phase in insertion order, fused with positional
    /// correction; resolved pairs feed the impulse resolver immediately.
    fn detect_and_resolve(&mut self) {
        let count = self.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                if let Some(manifold) = detect_pair(a, b) {
                    self.contact_points.extend_from_slice(manifold.contacts());
                    resolve_collision(a, b, &manifold);
                }
            }
        }
    }

    /// Gravity, drag interaction, then integration for dynamic bodies.
    fn apply_forces_and_integrate(&mut self) {
        let gravitation = self.gravitation;
        let try_hold = self.try_hold;
        let mouse_position = self.mouse_position;

        for body in &mut self.bodies {
            if body.is_static {
                continue;
            }

            body.apply_force(Vec2::new(0.0, gravitation));
            hold_logic(body, try_hold, mouse_position);
            body.step(SUBSTEP_TIME);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SpawnLimits::default())
    }
}

/// Shape-based narrow-phase dispatch. Detection functions expect the
/// circle first for mixed pairs, so the rectangle-first arm swaps its
/// arguments and flips the reported normal back to point from `a`
/// toward `b`. The resolver's separating-contact test depends on that
/// orientation.
fn detect_pair(a: &mut RigidBody, b: &mut RigidBody) -> Option<Manifold> {
    match (&a.shape, &b.shape) {
        (Shape::Circle { .. }, Shape::Circle { .. }) => detect_circle_circle(a, b),
        (Shape::Circle { .. }, Shape::Rectangle { .. }) => detect_circle_rectangle(a, b),
        (Shape::Rectangle { .. }, Shape::Circle { .. }) => {
            detect_circle_rectangle(b, a).map(|mut manifold| {
                manifold.normal = -manifold.normal;
                manifold
            })
        }
        (Shape::Rectangle { .. }, Shape::Rectangle { .. }) => detect_rectangle_rectangle(a, b),
    }
}

/// Re-evaluated every substep: while the hold is active a body close
/// enough to the cursor is grabbed; releasing the hold clears the flag.
/// Held bodies are pulled toward the cursor against a damping force.
fn hold_logic(body: &mut RigidBody, try_hold: bool, mouse_position: Vec2) {
    if body.is_static {
        return;
    }

    if try_hold {
        if mouse_position.distance_squared(body.position) < HOLD_RADIUS_SQUARED {
            body.is_held = true;
        }
    } else {
        body.is_held = false;
    }

    if body.is_held {
        body.apply_force((mouse_position - body.position) * HOLD_PULL_STRENGTH);
        body.apply_force(body.velocity * -HOLD_DAMPING);
    }
}

/// A body is out once it has fully exited through the sides or the
/// bottom; there is no upward cull. Static bodies are never removed.
fn is_out_of_bounds(body: &RigidBody, width_min: f32, width_max: f32, height_max: f32) -> bool {
    if body.is_static {
        return false;
    }

    let (half_extent_x, half_extent_y) = match body.shape {
        Shape::Circle { radius } => (radius, radius),
        Shape::Rectangle { width, height, .. } => (width / 2.0, height / 2.0),
    };

    body.position.x - half_extent_x - CULL_MARGIN > width_max
        || body.position.x + half_extent_x + CULL_MARGIN < width_min
        || body.position.y - half_extent_y - CULL_MARGIN > height_max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_gates_substeps() {
        let mut sim = Simulation::default();
        sim.add_circle(Vec2::new(800.0, 100.0), 0.5, 1.0, false, 10.0, 0.0, 0.1, 0.2);

        // Below the frame quota nothing moves.
        sim.step(1.0 / 240.0);
        assert_eq!(sim.bodies()[0].position, Vec2::new(800.0, 100.0));

        // Accumulated past the quota the frame runs.
        sim.step(FRAME_TIME);
        assert!(sim.bodies()[0].position.y > 100.0);
    }

    #[test]
    fn rectangle_listed_first_still_bounces_the_circle() {
        // Insertion order picks the rectangle-first dispatch arm; the
        // flipped normal must still drive an upward impulse.
        let mut sim = Simulation::default();
        assert!(sim.add_rectangle(Vec2::new(800.0, 520.0), 1.0, 1.0, true, 400.0, 20.0, 0.0, 0.1, 0.2));
        assert!(sim.add_circle(Vec2::new(800.0, 400.0), 1.0, 1.0, false, 12.0, 0.0, 0.1, 0.2));

        let mut min_vy = f32::MAX;
        for _ in 0..120 {
            sim.step(FRAME_TIME);
            min_vy = min_vy.min(sim.bodies()[1].velocity.y);
        }

        // The elastic impact reverses the fall into upward motion.
        assert!(min_vy < -100.0, "ball never bounced: min vy={min_vy}");
    }

    #[test]
    fn hold_pulls_body_toward_cursor() {
        let mut sim = Simulation::default();
        sim.gravitation = 0.0;
        sim.add_circle(Vec2::new(800.0, 500.0), 0.5, 1.0, false, 10.0, 0.0, 0.1, 0.2);

        sim.try_hold = true;
        sim.mouse_position = Vec2::new(830.0, 500.0);
        sim.step(FRAME_TIME);

        let body = &sim.bodies()[0];
        assert!(body.is_held);
        assert!(body.position.x > 800.0);
    }

    #[test]
    fn releasing_hold_clears_flag() {
        let mut sim = Simulation::default();
        sim.gravitation = 0.0;
        sim.add_circle(Vec2::new(800.0, 500.0), 0.5, 1.0, false, 10.0, 0.0, 0.1, 0.2);

        sim.try_hold = true;
        sim.mouse_position = Vec2::new(810.0, 500.0);
        sim.step(FRAME_TIME);
        assert!(sim.bodies()[0].is_held);

        sim.try_hold = false;
        sim.step(FRAME_TIME);
        assert!(!sim.bodies()[0].is_held);
    }

    #[test]
    fn distant_body_is_not_grabbed() {
        let mut sim = Simulation::default();
        sim.gravitation = 0.0;
        sim.add_circle(Vec2::new(800.0, 500.0), 0.5, 1.0, false, 10.0, 0.0, 0.1, 0.2);

        sim.try_hold = true;
        sim.mouse_position = Vec2::new(900.0, 500.0);
        sim.step(FRAME_TIME);
        assert!(!sim.bodies()[0].is_held);
    }
}
