use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::config::{GalaxyConfig, ShipConfig};
use crate::api::error::GalaxyError;
use crate::api::types::ShipInput;
use crate::components::black_hole::BlackHole;
use crate::components::body::Body;
use crate::components::ship::{Ship, ShipDynamics};
use crate::components::star::Star;
use crate::core::vector::Vector2;
use crate::systems::gravity::ForceLaw;
use crate::systems::spawn::StarSpawner;

/// Owns every body and advances them one fixed step at a time.
///
/// Per tick the ship moves first, destroyed stars are swept, then the
/// surviving stars move. Stars captured during a tick stay in the list until
/// the sweep at the start of the next one.
#[derive(Debug)]
pub struct Galaxy {
    config: GalaxyConfig,
    black_holes: Vec<BlackHole>,
    stars: Vec<Star>,
    ship: Option<Ship>,
    input: ShipInput,
    star_law: ForceLaw,
    ship_dynamics: ShipDynamics,
    rng: StdRng,
    max_velocity: f64,
    ticks: u64,
}

impl Galaxy {
    /// Validate `config`, place its black holes and seed `star_count` stars.
    pub fn new(config: GalaxyConfig) -> Result<Self, GalaxyError> {
        config.validate()?;

        let black_holes = config
            .black_holes
            .iter()
            .map(|hole| BlackHole::from_config(hole, &config.physics))
            .collect();

        let mut galaxy = Self {
            black_holes,
            stars: Vec::with_capacity(config.star_count),
            ship: None,
            input: ShipInput::NONE,
            star_law: ForceLaw::for_stars(&config.physics),
            ship_dynamics: ShipDynamics::from_physics(&config.physics),
            rng: StdRng::seed_from_u64(config.seed),
            max_velocity: 0.0,
            ticks: 0,
            config,
        };
        galaxy.create_stars(galaxy.config.star_count)?;

        log::info!(
            "Galaxy created: {} black holes, {} stars (seed {})",
            galaxy.black_holes.len(),
            galaxy.stars.len(),
            galaxy.config.seed
        );
        Ok(galaxy)
    }

    /// Append `n` stars seeded in the disk around the first black hole.
    pub fn create_stars(&mut self, n: usize) -> Result<(), GalaxyError> {
        if n == 0 {
            return Ok(());
        }
        let reference = self
            .black_holes
            .first()
            .ok_or(GalaxyError::NoReferenceBlackHole { requested: n })?;

        let spawner = StarSpawner {
            reference,
            physics: &self.config.physics,
            disk_radius: self.config.clamped_disk_radius(),
            max_size: self.config.max_star_size,
        };
        let rng = &mut self.rng;
        self.stars.extend((0..n).map(|_| spawner.spawn(rng)));
        log::debug!("Created {} stars ({} total)", n, self.stars.len());
        Ok(())
    }

    /// Add a hand-placed star.
    pub fn add_star(&mut self, star: Star) {
        self.stars.push(star);
    }

    /// Drop every star and repopulate from the configured seed.
    ///
    /// The ship and black holes are left in place.
    pub fn reset(&mut self) -> Result<(), GalaxyError> {
        self.stars.clear();
        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.max_velocity = 0.0;
        self.ticks = 0;
        self.create_stars(self.config.star_count)?;
        log::info!("Galaxy reset: {} stars", self.stars.len());
        Ok(())
    }

    /// Place a ship, replacing any existing one. Mass, preview length and
    /// path visibility come from the config.
    pub fn spawn_ship(&mut self, pos: Vector2, size: f64) -> &mut Ship {
        let config = ShipConfig {
            position: pos.to_array(),
            size,
            ..self.config.ship.clone()
        };
        let mut ship = Ship::from_config(&config, &self.config.physics);
        ship.predict_path(
            &self.black_holes,
            &self.ship_dynamics,
            ship.prediction_iterations(),
            self.config.fixed_dt,
        );
        log::info!("Ship spawned at ({:.3}, {:.3})", pos.x, pos.y);
        self.ship.insert(ship)
    }

    /// Place the ship where the config says.
    pub fn spawn_default_ship(&mut self) -> &mut Ship {
        let pos = Vector2::from_array(self.config.ship.position);
        let size = self.config.ship.size;
        self.spawn_ship(pos, size)
    }

    pub fn remove_ship(&mut self) -> Option<Ship> {
        self.ship.take()
    }

    /// Intents applied to the ship on every following tick until replaced.
    pub fn set_input(&mut self, input: ShipInput) {
        self.input = input;
    }

    /// Advance the whole system by one fixed step of `dt`.
    /// Returns the largest star speed observed this tick.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if let Some(ship) = self.ship.as_mut() {
            ship.update(self.input, &self.black_holes, &self.ship_dynamics, dt);
        }

        let before = self.stars.len();
        self.stars.retain(|star| !star.is_destroyed());
        let removed = before - self.stars.len();
        if removed > 0 {
            log::trace!("Tick {}: swept {} captured stars", self.ticks, removed);
        }

        let mut max_velocity = 0.0_f64;
        for star in &mut self.stars {
            star.update(&self.black_holes, &self.star_law, dt);
            max_velocity = max_velocity.max(star.speed());
        }

        self.max_velocity = max_velocity;
        self.ticks += 1;
        max_velocity
    }

    // -- Accessors --

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn black_holes(&self) -> &[BlackHole] {
        &self.black_holes
    }

    /// Mutable access for the renderer-facing `show` flags.
    pub fn black_holes_mut(&mut self) -> &mut [BlackHole] {
        &mut self.black_holes
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn ship_mut(&mut self) -> Option<&mut Ship> {
        self.ship.as_mut()
    }

    pub fn ship_dynamics(&self) -> &ShipDynamics {
        &self.ship_dynamics
    }

    /// Fastest star speed from the last tick. May rise or fall between ticks.
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::BlackHoleConfig;

    fn empty_config() -> GalaxyConfig {
        GalaxyConfig {
            star_count: 0,
            ..GalaxyConfig::default()
        }
    }

    #[test]
    fn default_galaxy_seeds_configured_stars() {
        let galaxy = Galaxy::new(GalaxyConfig::default()).unwrap();
        assert_eq!(galaxy.star_count(), 100);
        assert_eq!(galaxy.black_holes().len(), 1);
        assert!(galaxy.ship().is_none());
        assert_eq!(galaxy.tick_count(), 0);
    }

    #[test]
    fn stars_without_black_hole_is_an_error() {
        let config = GalaxyConfig {
            black_holes: Vec::new(),
            ..GalaxyConfig::default()
        };
        let err = Galaxy::new(config).err().unwrap();
        assert!(matches!(err, GalaxyError::NoReferenceBlackHole { requested: 100 }));
    }

    #[test]
    fn empty_galaxy_without_black_hole_is_fine() {
        let config = GalaxyConfig {
            black_holes: Vec::new(),
            ..empty_config()
        };
        let mut galaxy = Galaxy::new(config).unwrap();
        assert_eq!(galaxy.advance(1.0 / 60.0), 0.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = GalaxyConfig::default();
        config.physics.capture_divisor = 0.0;
        assert!(Galaxy::new(config).is_err());
    }

    #[test]
    fn same_seed_same_stars() {
        let a = Galaxy::new(GalaxyConfig::default()).unwrap();
        let b = Galaxy::new(GalaxyConfig::default()).unwrap();
        assert_eq!(a.stars(), b.stars());

        let c = Galaxy::new(GalaxyConfig {
            seed: 7,
            ..GalaxyConfig::default()
        })
        .unwrap();
        assert_ne!(a.stars(), c.stars());
    }

    #[test]
    fn reset_restores_initial_field() {
        let mut galaxy = Galaxy::new(GalaxyConfig::default()).unwrap();
        let initial = galaxy.stars().to_vec();
        for _ in 0..10 {
            galaxy.advance(1.0 / 60.0);
        }
        // seeding can place a star inside the capture radius, so some may be gone
        let survivors = galaxy.star_count();
        assert!(survivors <= 100);
        galaxy.create_stars(5).unwrap();
        assert_eq!(galaxy.star_count(), survivors + 5);

        galaxy.reset().unwrap();
        assert_eq!(galaxy.stars(), initial.as_slice());
        assert_eq!(galaxy.tick_count(), 0);
    }

    #[test]
    fn captured_star_is_swept_next_tick() {
        let mut galaxy = Galaxy::new(empty_config()).unwrap();
        // capture radius 50 / 600
        galaxy.add_star(Star::new(Vector2::new(0.01, 0.0), 1.0, Vector2::ZERO));
        galaxy.add_star(Star::new(Vector2::new(0.5, 0.0), 1.0, Vector2::ZERO));

        galaxy.advance(1.0 / 60.0);
        assert_eq!(galaxy.star_count(), 2);
        assert!(galaxy.stars()[0].is_destroyed());
        assert!(!galaxy.stars()[1].is_destroyed());

        galaxy.advance(1.0 / 60.0);
        assert_eq!(galaxy.star_count(), 1);
        assert!(!galaxy.stars()[0].is_destroyed());
    }

    #[test]
    fn sweep_preserves_order() {
        let mut galaxy = Galaxy::new(empty_config()).unwrap();
        let outer = [0.3, 0.4, 0.5];
        galaxy.add_star(Star::new(Vector2::new(outer[0], 0.0), 1.0, Vector2::ZERO));
        galaxy.add_star(Star::new(Vector2::new(0.0, 0.01), 1.0, Vector2::ZERO));
        galaxy.add_star(Star::new(Vector2::new(outer[1], 0.0), 2.0, Vector2::ZERO));
        galaxy.add_star(Star::new(Vector2::new(0.0, -0.01), 1.0, Vector2::ZERO));
        galaxy.add_star(Star::new(Vector2::new(outer[2], 0.0), 3.0, Vector2::ZERO));

        galaxy.advance(1.0 / 60.0);
        galaxy.advance(1.0 / 60.0);

        let sizes: Vec<f64> = galaxy.stars().iter().map(|s| s.size()).collect();
        assert_eq!(sizes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn advance_reports_fastest_star() {
        let mut galaxy = Galaxy::new(GalaxyConfig {
            black_holes: Vec::new(),
            ..empty_config()
        })
        .unwrap();
        galaxy.add_star(Star::new(Vector2::ZERO, 1.0, Vector2::new(0.3, 0.4)));
        galaxy.add_star(Star::new(Vector2::ZERO, 1.0, Vector2::new(0.1, 0.0)));

        let max = galaxy.advance(1.0 / 60.0);
        assert!((max - 0.5).abs() < 1e-12);
        assert_eq!(galaxy.max_velocity(), max);
        assert_eq!(galaxy.tick_count(), 1);
    }

    #[test]
    fn spawn_ship_applies_config() {
        let mut config = empty_config();
        config.ship.prediction_iterations = 40;
        config.ship.show_path = true;
        config.physics.ship_mass = 5.0;
        let mut galaxy = Galaxy::new(config).unwrap();

        let ship = galaxy.spawn_default_ship();
        assert_eq!(ship.pos(), Vector2::new(0.8, 0.8));
        assert_eq!(ship.mass(), 5.0);
        assert_eq!(ship.prediction_iterations(), 40);
        assert!(ship.show_path);
        assert_eq!(ship.path().len(), 40);

        assert!(galaxy.remove_ship().is_some());
        assert!(galaxy.ship().is_none());
    }

    #[test]
    fn spawn_ship_overrides_pose_only() {
        let mut config = empty_config();
        config.ship.prediction_iterations = 12;
        config.physics.ship_mass = 9.0;
        let mut galaxy = Galaxy::new(config).unwrap();

        let ship = galaxy.spawn_ship(Vector2::new(-0.3, 0.2), 25.0);
        assert_eq!(ship.pos(), Vector2::new(-0.3, 0.2));
        assert_eq!(ship.size(), 25.0);
        assert_eq!(ship.mass(), 9.0);
        assert_eq!(ship.path().len(), 12);
    }

    #[test]
    fn held_input_drives_ship() {
        let mut galaxy = Galaxy::new(empty_config()).unwrap();
        galaxy.spawn_ship(Vector2::new(0.5, 0.5), 10.0);
        galaxy.set_input(ShipInput::NONE.with_rotate_right(true));
        galaxy.advance(1.0 / 60.0);
        galaxy.advance(1.0 / 60.0);
        let ship = galaxy.ship().unwrap();
        assert!((ship.angular_vel() - 0.004).abs() < 1e-12);
    }

    #[test]
    fn hidden_black_hole_still_pulls() {
        let mut config = empty_config();
        config.black_holes = vec![BlackHoleConfig {
            show: false,
            ..BlackHoleConfig::new(Vector2::ZERO, 50.0)
        }];
        let mut galaxy = Galaxy::new(config).unwrap();
        galaxy.add_star(Star::new(Vector2::new(0.5, 0.0), 1.0, Vector2::ZERO));
        galaxy.advance(1.0 / 60.0);
        assert!(galaxy.stars()[0].vel().x < 0.0);

        galaxy.black_holes_mut()[0].show = true;
        assert!(galaxy.black_holes()[0].show);
    }
}
