//! Pairwise gravity between a moving body and a black hole.
//!
//! ```text
//! magnitude = G * M * m * k_gravity / d^2
//! force     = (P - p) / d * magnitude
//! ```
//!
//! How a body turns that force into a velocity change is a per-class choice
//! ([`Response`]): stars divide by their own mass, the ship clamps each pull
//! and skips the mass division.

use crate::api::config::PhysicsConfig;
use crate::components::black_hole::BlackHole;
use crate::components::body::Body;
use crate::core::vector::{Vector2, VectorExt};

/// Gravitational constant plus the view-space multiplier for one body class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceLaw {
    pub g: f64,
    pub k_gravity: f64,
}

impl ForceLaw {
    pub fn new(g: f64, k_gravity: f64) -> Self {
        Self { g, k_gravity }
    }

    pub fn for_stars(physics: &PhysicsConfig) -> Self {
        Self::new(physics.g, physics.star_k_gravity)
    }

    pub fn for_ship(physics: &PhysicsConfig) -> Self {
        Self::new(physics.g, physics.ship_k_gravity)
    }

    /// Force pulling a body of `mass` at `pos` toward `hole`.
    ///
    /// Returns `None` when the separation is zero or the result is not finite;
    /// the caller skips that pair so NaN never reaches a velocity.
    pub fn pair_force(&self, pos: Vector2, mass: f64, hole: &BlackHole) -> Option<Vector2> {
        let offset = hole.pos() - pos;
        let distance = offset.length();
        if distance == 0.0 {
            log::warn!("Body sits on a black hole at {:?} - skipping its pull", hole.pos());
            return None;
        }

        let magnitude = self.g * hole.mass() * mass * self.k_gravity / (distance * distance);
        let force = offset.divide(distance).scale(magnitude);
        if !force.is_finite() {
            log::warn!("Non-finite pull at distance {} - skipping", distance);
            return None;
        }
        Some(force)
    }
}

/// How a body class converts a pair force into a velocity change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Massive bodies: acceleration = force / mass.
    Inertial,
    /// Agile bodies: the force is applied directly, each axis clamped to `[-limit, limit]`.
    Capped { limit: f64 },
}

impl Response {
    /// Velocity contribution of one black hole, before any dt scaling.
    pub fn pair_delta(
        self,
        law: &ForceLaw,
        pos: Vector2,
        mass: f64,
        hole: &BlackHole,
    ) -> Option<Vector2> {
        match self {
            // force / m is mass-independent; a massless body takes the unit-mass limit
            Response::Inertial if mass > 0.0 => {
                law.pair_force(pos, mass, hole).map(|f| f.divide(mass))
            }
            Response::Inertial => law.pair_force(pos, 1.0, hole),
            Response::Capped { limit } => law
                .pair_force(pos, mass, hole)
                .map(|f| f.clamp_to(-limit, limit)),
        }
    }

    /// Sum of the contributions of every black hole.
    pub fn total_delta(
        self,
        law: &ForceLaw,
        pos: Vector2,
        mass: f64,
        holes: &[BlackHole],
    ) -> Vector2 {
        holes
            .iter()
            .filter_map(|hole| self.pair_delta(law, pos, mass, hole))
            .fold(Vector2::ZERO, |acc, d| acc + d)
    }
}
