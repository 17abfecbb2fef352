use serde::{Deserialize, Serialize};

use crate::api::error::GalaxyError;
use crate::core::vector::Vector2;

/// Upper bound for the trajectory preview slider.
pub const MAX_PREDICTION_ITERATIONS: usize = 10_000;

/// Mass used in the ship's force term unless configured otherwise.
pub const DEFAULT_SHIP_MASS: f64 = 3.0;

/// Disk radius range stars are seeded in.
pub const MIN_DISK_RADIUS: f64 = 0.1;
pub const MAX_DISK_RADIUS: f64 = 2.0;

/// Tuning constants for the force model and the ship controls.
///
/// Body coordinates live in a normalized `[-1, 1]` view space, so the real
/// gravitational constant alone is far too small to move anything visibly;
/// the `k_gravity` multipliers scale it up and are tuned per body class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravitational constant (default: 6.6743e-11).
    pub g: f64,
    /// Gravity multiplier applied to stars (default: 5000).
    pub star_k_gravity: f64,
    /// Gravity multiplier applied to the ship (default: 5000).
    pub ship_k_gravity: f64,
    /// Multiplier on the circular-orbit speed given to new stars (default: 80).
    pub init_velocity_factor: f64,
    /// Relative random perturbation of the initial orbital speed (default: 0.1, i.e. ±10%).
    pub velocity_jitter: f64,
    /// Black hole mass = size / ratio (default: 10).
    pub black_hole_mass_ratio: f64,
    /// Black hole capture radius = size / divisor (default: 600).
    pub capture_divisor: f64,
    /// Mass used in the ship's force term (default: 3).
    pub ship_mass: f64,
    /// Per-axis bound on each black hole's pull on the ship (default: 0.4).
    pub ship_pull_limit: f64,
    /// Velocity added per tick while thrusting (default: 1e-4).
    pub thrust_power: f64,
    /// Angular velocity added per tick while a rotate key is held (default: 0.002).
    pub radial_power: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            g: 6.6743e-11,
            star_k_gravity: 5000.0,
            ship_k_gravity: 5000.0,
            init_velocity_factor: 80.0,
            velocity_jitter: 0.1,
            black_hole_mass_ratio: 10.0,
            capture_divisor: 600.0,
            ship_mass: DEFAULT_SHIP_MASS,
            ship_pull_limit: 0.4,
            thrust_power: 1e-4,
            radial_power: 0.002,
        }
    }
}

/// One black hole placed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackHoleConfig {
    pub position: [f64; 2],
    pub size: f64,
    #[serde(default = "default_show")]
    pub show: bool,
}

fn default_show() -> bool {
    true
}

impl BlackHoleConfig {
    pub fn new(position: Vector2, size: f64) -> Self {
        Self {
            position: position.to_array(),
            size,
            show: true,
        }
    }
}

/// Where and how the ship appears once the renderer attaches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub position: [f64; 2],
    pub size: f64,
    /// Steps in the trajectory preview (default: 3000).
    pub prediction_iterations: usize,
    pub show_path: bool,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            position: [0.8, 0.8],
            size: 50.0,
            prediction_iterations: 3000,
            show_path: false,
        }
    }
}

/// Configuration for a galaxy, loadable from JSON. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Fixed timestep in simulation time units (default: 1/60).
    pub fixed_dt: f64,
    /// Multiplier on wall-clock frame time before it is accumulated (default: 1).
    pub sim_speed: f64,
    /// Stars created at construction (default: 100).
    pub star_count: usize,
    /// Radius of the disk stars are seeded in, clamped to [0.1, 2] (default: 0.7).
    pub disk_radius: f64,
    /// Star sizes are drawn from [0, max_star_size) (default: 5).
    pub max_star_size: f64,
    /// Seed for star placement (default: 42).
    pub seed: u64,
    /// Attractors. The first one is the reference for initial orbital velocities.
    pub black_holes: Vec<BlackHoleConfig>,
    pub ship: ShipConfig,
    pub physics: PhysicsConfig,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            sim_speed: 1.0,
            star_count: 100,
            disk_radius: 0.7,
            max_star_size: 5.0,
            seed: 42,
            black_holes: vec![BlackHoleConfig::new(Vector2::ZERO, 50.0)],
            ship: ShipConfig::default(),
            physics: PhysicsConfig::default(),
        }
    }
}

impl GalaxyConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GalaxyError> {
        let config: GalaxyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Disk radius after clamping into the supported range.
    pub fn clamped_disk_radius(&self) -> f64 {
        self.disk_radius.clamp(MIN_DISK_RADIUS, MAX_DISK_RADIUS)
    }

    /// Reject constants the step cannot work with.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        let p = &self.physics;
        check("fixed_dt", self.fixed_dt, self.fixed_dt > 0.0, "> 0")?;
        check("sim_speed", self.sim_speed, self.sim_speed >= 0.0, ">= 0")?;
        check("disk_radius", self.disk_radius, self.disk_radius.is_finite(), "finite")?;
        check("max_star_size", self.max_star_size, self.max_star_size >= 0.0, ">= 0")?;
        check(
            "black_hole_mass_ratio",
            p.black_hole_mass_ratio,
            p.black_hole_mass_ratio > 0.0,
            "> 0",
        )?;
        check("capture_divisor", p.capture_divisor, p.capture_divisor > 0.0, "> 0")?;
        check(
            "velocity_jitter",
            p.velocity_jitter,
            (0.0..=1.0).contains(&p.velocity_jitter),
            "within [0, 1]",
        )?;
        check("ship_pull_limit", p.ship_pull_limit, p.ship_pull_limit >= 0.0, ">= 0")?;
        for hole in &self.black_holes {
            check("black_holes.size", hole.size, hole.size > 0.0, "> 0")?;
        }
        Ok(())
    }
}

// NaN fails every comparison above, so it is rejected along with out-of-range values.
fn check(name: &'static str, value: f64, ok: bool, expected: &'static str) -> Result<(), GalaxyError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(GalaxyError::InvalidParameter { name, value, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GalaxyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.black_holes.len(), 1);
        assert_eq!(config.physics.radial_power, 0.002);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "star_count": 500,
            "physics": { "star_k_gravity": 8000 }
        }"#;
        let config = GalaxyConfig::from_json(json).unwrap();
        assert_eq!(config.star_count, 500);
        assert_eq!(config.physics.star_k_gravity, 8000.0);
        assert_eq!(config.physics.ship_k_gravity, 5000.0);
        assert_eq!(config.fixed_dt, 1.0 / 60.0);
        assert_eq!(config.ship.prediction_iterations, 3000);
    }

    #[test]
    fn parse_black_holes() {
        let json = r#"{
            "black_holes": [
                { "position": [0.0, 0.0], "size": 50 },
                { "position": [0.5, 0.0], "size": 20, "show": false }
            ]
        }"#;
        let config = GalaxyConfig::from_json(json).unwrap();
        assert_eq!(config.black_holes.len(), 2);
        assert!(config.black_holes[0].show);
        assert!(!config.black_holes[1].show);
        assert_eq!(config.black_holes[1].position, [0.5, 0.0]);
    }

    #[test]
    fn rejects_zero_timestep() {
        let err = GalaxyConfig::from_json(r#"{ "fixed_dt": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            GalaxyError::InvalidParameter { name: "fixed_dt", .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_jitter() {
        let mut config = GalaxyConfig::default();
        config.physics.velocity_jitter = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GalaxyConfig::from_json("{ star_count: }").unwrap_err();
        assert!(matches!(err, GalaxyError::Config(_)));
    }

    #[test]
    fn disk_radius_is_clamped() {
        let mut config = GalaxyConfig::default();
        config.disk_radius = 5.0;
        assert_eq!(config.clamped_disk_radius(), MAX_DISK_RADIUS);
        config.disk_radius = 0.0;
        assert_eq!(config.clamped_disk_radius(), MIN_DISK_RADIUS);
    }
}
