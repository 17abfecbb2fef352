use crate::api::types::BodyKind;
use crate::components::black_hole::BlackHole;
use crate::components::body::Body;
use crate::core::vector::{Vector2, VectorExt};
use crate::systems::gravity::{ForceLaw, Response};

/// Light particle falling through the black holes' field.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pos: Vector2,
    vel: Vector2,
    size: f64,
    /// `size^3`, fixed at creation.
    mass: f64,
    destroyed: bool,
}

impl Star {
    pub const RESPONSE: Response = Response::Inertial;

    pub fn new(pos: Vector2, size: f64, vel: Vector2) -> Self {
        Self {
            pos,
            vel,
            size,
            mass: size * size * size,
            destroyed: false,
        }
    }

    /// Set once a black hole captures this star. The galaxy drops it on its next sweep.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// One tick: gravity from every black hole, then position.
    ///
    /// A black hole that captures the star contributes no pull; the others still do.
    /// Gravity is added per tick, only the position step is scaled by `dt`.
    pub fn update(&mut self, holes: &[BlackHole], law: &ForceLaw, dt: f64) {
        for hole in holes {
            if hole.captures(self.pos) {
                self.destroyed = true;
                continue;
            }
            if let Some(accel) = Self::RESPONSE.pair_delta(law, self.pos, self.mass, hole) {
                self.vel += accel;
            }
        }

        self.pos += self.vel.scale(dt);
    }

    /// Speed relative to `max_speed`, in `[0, 1]`. Renderers map this to a color.
    pub fn brightness(&self, max_speed: f64) -> f64 {
        if max_speed <= 0.0 {
            return 0.0;
        }
        (self.speed() / max_speed).clamp(0.0, 1.0)
    }
}

impl Body for Star {
    fn pos(&self) -> Vector2 {
        self.pos
    }

    fn vel(&self) -> Vector2 {
        self.vel
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn kind(&self) -> BodyKind {
        BodyKind::Attracted
    }
}
