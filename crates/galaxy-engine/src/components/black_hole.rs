use crate::api::config::{BlackHoleConfig, PhysicsConfig};
use crate::api::types::BodyKind;
use crate::components::body::Body;
use crate::core::vector::{Vector2, VectorExt};

/// Stationary attractor. Receives no force and is never destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackHole {
    pos: Vector2,
    size: f64,
    mass: f64,
    capture_radius: f64,
    /// Whether the renderer should draw this black hole. Not read by the simulation.
    pub show: bool,
}

impl BlackHole {
    /// `mass = size / mass_ratio`, `capture_radius = size / capture_divisor`.
    /// The two are independent: the capture radius does not follow the mass.
    pub fn new(pos: Vector2, size: f64, mass_ratio: f64, capture_divisor: f64) -> Self {
        Self {
            pos,
            size,
            mass: size / mass_ratio,
            capture_radius: size / capture_divisor,
            show: true,
        }
    }

    pub fn from_config(config: &BlackHoleConfig, physics: &PhysicsConfig) -> Self {
        let mut hole = Self::new(
            Vector2::from_array(config.position),
            config.size,
            physics.black_hole_mass_ratio,
            physics.capture_divisor,
        );
        hole.show = config.show;
        hole
    }

    pub fn capture_radius(&self) -> f64 {
        self.capture_radius
    }

    /// True when `point` is at or inside the capture radius.
    pub fn captures(&self, point: Vector2) -> bool {
        point.distance_to(self.pos) <= self.capture_radius
    }
}

impl Body for BlackHole {
    fn pos(&self) -> Vector2 {
        self.pos
    }

    fn vel(&self) -> Vector2 {
        Vector2::ZERO
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn kind(&self) -> BodyKind {
        BodyKind::Attractor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_and_capture_radius_from_size() {
        let hole = BlackHole::new(Vector2::ZERO, 50.0, 10.0, 600.0);
        assert_eq!(hole.mass(), 5.0);
        assert_eq!(hole.capture_radius(), 50.0 / 600.0);
        assert_eq!(hole.kind(), BodyKind::Attractor);
        assert_eq!(hole.speed(), 0.0);
    }

    #[test]
    fn capture_boundary_is_inclusive() {
        let hole = BlackHole::new(Vector2::ZERO, 60.0, 10.0, 600.0);
        assert!(hole.captures(Vector2::new(0.1, 0.0)));
        assert!(hole.captures(Vector2::new(0.05, 0.0)));
        assert!(!hole.captures(Vector2::new(0.1001, 0.0)));
    }

    #[test]
    fn from_config_keeps_show_flag() {
        let config = BlackHoleConfig {
            position: [0.5, -0.5],
            size: 20.0,
            show: false,
        };
        let hole = BlackHole::from_config(&config, &PhysicsConfig::default());
        assert_eq!(hole.pos(), Vector2::new(0.5, -0.5));
        assert_eq!(hole.mass(), 2.0);
        assert!(!hole.show);
    }
}
