#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # 2D Rigid Body Physics Engine
//!
//! An impulse-based 2D physics simulator for convex bodies. The engine
//! advances circles and rotatable rectangles through time, detects their
//! collisions with the Separating Axis Theorem, and resolves them with a
//! sequential-impulse solver including Coulomb friction.
//!
//! ## Key Components
//!
//! -   **Rigid Bodies:** [`RigidBody`] carries kinematic and dynamic
//!     state; the [`Shape`] variant adds circle or rectangle geometry and
//!     derived rotational inertia. Defined in the [`body`] module.
//! -   **Collision:** the [`collision`] module holds the pairwise
//!     narrow-phase tests, contact-point generation, and the impulse
//!     resolver. Detection is all-pairs; there is no broad phase.
//! -   **Simulation:** [`Simulation`] owns the body list and runs the
//!     fixed-substep stepping loop with gravity, boundary culling, and
//!     mouse-drag interaction.
//!
//! ## Usage
//!
//! Create a [`Simulation`], spawn bodies through its validated factories,
//! and call `step` once per rendered frame:
//!
//! ```rust
//! use physics2d::{Simulation, Vec2};
//!
//! let mut sim = Simulation::default();
//! sim.add_rectangle(Vec2::new(800.0, 800.0), 0.8, 1.0, true, 1400.0, 80.0, 0.0, 0.1, 0.2);
//! sim.add_circle(Vec2::new(800.0, 100.0), 0.5, 1.0, false, 30.0, 0.0, 0.1, 0.2);
//!
//! sim.step(1.0 / 60.0);
//! assert_eq!(sim.bodies().len(), 2);
//! ```
//!
//! The caller drives `step` and all mutating calls from one logical
//! thread between frames; within that discipline the simulation is
//! deterministic.

pub mod body;
pub mod collision;
pub mod simulation;
pub mod types;

pub use body::{RigidBody, Shape};
pub use collision::Manifold;
pub use simulation::{Simulation, SpawnLimits};
pub use types::Vec2;
