use crate::api::config::{PhysicsConfig, ShipConfig, DEFAULT_SHIP_MASS, MAX_PREDICTION_ITERATIONS};
use crate::api::types::{BodyKind, ShipInput, ShipStatus};
use crate::components::black_hole::BlackHole;
use crate::components::body::Body;
use crate::core::vector::{Vector2, VectorExt};
use crate::systems::gravity::{ForceLaw, Response};

/// Ship tuning derived from `PhysicsConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipDynamics {
    pub law: ForceLaw,
    /// Per-axis bound on each black hole's pull.
    pub pull_limit: f64,
    pub thrust_power: f64,
    pub radial_power: f64,
}

impl ShipDynamics {
    pub fn from_physics(physics: &PhysicsConfig) -> Self {
        Self {
            law: ForceLaw::for_ship(physics),
            pull_limit: physics.ship_pull_limit,
            thrust_power: physics.thrust_power,
            radial_power: physics.radial_power,
        }
    }

    pub fn response(&self) -> Response {
        Response::Capped { limit: self.pull_limit }
    }

    /// Velocity change from gravity over one tick of length `dt`.
    /// `mass` enters the force term but is not divided out again.
    pub fn gravity_delta(&self, pos: Vector2, mass: f64, holes: &[BlackHole], dt: f64) -> Vector2 {
        self.response()
            .total_delta(&self.law, pos, mass, holes)
            .scale(dt)
    }

    /// Gravity-only step shared by the live update and the path predictor.
    pub fn ballistic_step(
        &self,
        pos: Vector2,
        vel: Vector2,
        mass: f64,
        holes: &[BlackHole],
        dt: f64,
    ) -> (Vector2, Vector2) {
        let vel = vel + self.gravity_delta(pos, mass, holes, dt);
        (pos + vel.scale(dt), vel)
    }
}

/// Player-controlled body. Feels the same black holes as the stars but is never captured.
#[derive(Debug, Clone)]
pub struct Ship {
    pos: Vector2,
    vel: Vector2,
    /// Heading in radians, 0 = facing up (-y).
    angle: f64,
    angular_vel: f64,
    status: ShipStatus,
    size: f64,
    mass: f64,
    path: Vec<Vector2>,
    prediction_iterations: usize,
    /// Whether the renderer should draw the predicted path.
    pub show_path: bool,
}

impl Ship {
    pub fn new(pos: Vector2, size: f64) -> Self {
        Self {
            pos,
            vel: Vector2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            status: ShipStatus::Idle,
            size,
            mass: DEFAULT_SHIP_MASS,
            path: Vec::new(),
            prediction_iterations: ShipConfig::default().prediction_iterations,
            show_path: false,
        }
    }

    /// Ship placed and tuned by config. Mass comes from the physics constants.
    pub fn from_config(config: &ShipConfig, physics: &PhysicsConfig) -> Self {
        let mut ship = Self::new(Vector2::from_array(config.position), config.size)
            .with_mass(physics.ship_mass);
        ship.set_prediction_iterations(config.prediction_iterations);
        ship.show_path = config.show_path;
        ship
    }

    // -- Builder pattern --

    pub fn with_vel(mut self, vel: Vector2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angular_vel(&self) -> f64 {
        self.angular_vel
    }

    pub fn status(&self) -> ShipStatus {
        self.status
    }

    /// Unit vector the engine pushes along.
    pub fn heading(&self) -> Vector2 {
        Vector2::new(self.angle.sin(), -self.angle.cos())
    }

    pub fn prediction_iterations(&self) -> usize {
        self.prediction_iterations
    }

    /// Set the preview length, clamped to `MAX_PREDICTION_ITERATIONS`.
    pub fn set_prediction_iterations(&mut self, steps: usize) {
        self.prediction_iterations = steps.min(MAX_PREDICTION_ITERATIONS);
    }

    /// Last computed trajectory preview.
    pub fn path(&self) -> &[Vector2] {
        &self.path
    }

    /// One tick driven by the intents held this tick.
    ///
    /// Position advances by `vel * dt`, the heading by `angular_vel` per tick
    /// (unscaled). The trajectory preview is recomputed afterwards.
    pub fn update(&mut self, input: ShipInput, holes: &[BlackHole], dynamics: &ShipDynamics, dt: f64) {
        if input.rotate_right {
            self.angular_vel += dynamics.radial_power;
        }
        if input.rotate_left {
            self.angular_vel -= dynamics.radial_power;
        }

        if input.thrust {
            self.status = ShipStatus::Thrusting;
            self.vel += self.heading().scale(dynamics.thrust_power);
        } else {
            self.status = ShipStatus::Idle;
        }

        let (pos, vel) = dynamics.ballistic_step(self.pos, self.vel, self.mass, holes, dt);
        self.pos = pos;
        self.vel = vel;
        self.angle += self.angular_vel;

        self.predict_path(holes, dynamics, self.prediction_iterations, dt);
    }

    /// Recompute the preview: `steps` gravity-only positions from the current state.
    /// The ship's own position and velocity are left untouched.
    pub fn predict_path(
        &mut self,
        holes: &[BlackHole],
        dynamics: &ShipDynamics,
        steps: usize,
        dt: f64,
    ) -> &[Vector2] {
        let trajectory = Trajectory::new(self.pos, self.vel, self.mass, holes, dynamics, steps, dt);
        self.path.clear();
        self.path.extend(trajectory);
        &self.path
    }

    /// Lazily yield the preview without storing it.
    pub fn trajectory<'a>(
        &self,
        holes: &'a [BlackHole],
        dynamics: &'a ShipDynamics,
        steps: usize,
        dt: f64,
    ) -> Trajectory<'a> {
        Trajectory::new(self.pos, self.vel, self.mass, holes, dynamics, steps, dt)
    }
}

impl Body for Ship {
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

/// Ballistic forward simulation of a ship state. Yields exactly `steps` positions.
pub struct Trajectory<'a> {
    pos: Vector2,
    vel: Vector2,
    mass: f64,
    holes: &'a [BlackHole],
    dynamics: &'a ShipDynamics,
    remaining: usize,
    dt: f64,
}

impl<'a> Trajectory<'a> {
    pub fn new(
        pos: Vector2,
        vel: Vector2,
        mass: f64,
        holes: &'a [BlackHole],
        dynamics: &'a ShipDynamics,
        steps: usize,
        dt: f64,
    ) -> Self {
        Self {
            pos,
            vel,
            mass,
            holes,
            dynamics,
            remaining: steps,
            dt,
        }
    }
}

impl Iterator for Trajectory<'_> {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (pos, vel) = self
            .dynamics
            .ballistic_step(self.pos, self.vel, self.mass, self.holes, self.dt);
        self.pos = pos;
        self.vel = vel;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Trajectory<'_> {}
