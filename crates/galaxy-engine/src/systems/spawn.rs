//! Star seeding: disk sampling and the orbital-velocity estimator.

use std::f64::consts::TAU;

use rand::Rng;

use crate::api::config::PhysicsConfig;
use crate::components::black_hole::BlackHole;
use crate::components::body::Body;
use crate::components::star::Star;
use crate::core::vector::{Vector2, VectorExt};

/// Point drawn uniformly (by area) from a disk of `radius` around the origin.
pub fn random_disk_position<R: Rng + ?Sized>(rng: &mut R, radius: f64) -> Vector2 {
    let theta = rng.gen::<f64>() * TAU;
    let r = rng.gen::<f64>().sqrt() * radius;
    Vector2::new(theta.sin() * r, theta.cos() * r)
}

/// Tangential velocity approximating a circular orbit around `hole`,
/// with the speed perturbed by up to `±velocity_jitter`.
///
/// A position exactly on the black hole gets zero velocity.
pub fn orbital_velocity<R: Rng + ?Sized>(
    rng: &mut R,
    pos: Vector2,
    hole: &BlackHole,
    physics: &PhysicsConfig,
) -> Vector2 {
    let offset = pos - hole.pos();
    let r = offset.length();
    if r == 0.0 {
        return Vector2::ZERO;
    }

    let speed = (physics.g * hole.mass() / r).sqrt() * physics.init_velocity_factor;
    let delta = (rng.gen::<f64>() * 2.0 - 1.0) * physics.velocity_jitter;
    let tangent = Vector2::new(-offset.y, offset.x).normalized();
    tangent.scale(speed * (1.0 + delta))
}

/// Seeds new stars around a reference black hole.
#[derive(Debug, Clone, Copy)]
pub struct StarSpawner<'a> {
    pub reference: &'a BlackHole,
    pub physics: &'a PhysicsConfig,
    pub disk_radius: f64,
    pub max_size: f64,
}

impl StarSpawner<'_> {
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Star {
        let pos = random_disk_position(rng, self.disk_radius);
        let size = if self.max_size > 0.0 {
            rng.gen_range(0.0..self.max_size)
        } else {
            0.0
        };
        let vel = orbital_velocity(rng, pos, self.reference, self.physics);
        Star::new(pos, size, vel)
    }
}
