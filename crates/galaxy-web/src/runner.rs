use galaxy_engine::{
    FixedTimestep, Galaxy, GalaxyConfig, GalaxyError, InputEvent, InputQueue, KeyBindings,
    KeyState, SnapshotBuffers, Vector2,
};

/// Custom event kinds sent by the UI controls. `a`, `b`, `c` carry the values.
pub mod events {
    /// `a` = new simulation speed.
    pub const SET_SIM_SPEED: u32 = 1;
    /// `a` = trajectory preview length in steps.
    pub const SET_PREDICTION_ITERATIONS: u32 = 2;
    /// `a` != 0 shows the predicted path.
    pub const SET_SHOW_PATH: u32 = 3;
    /// `a` = black hole index, `b` != 0 makes it visible.
    pub const SET_BLACK_HOLE_VISIBLE: u32 = 4;
    /// `a` = number of stars to add; 0 resets the field from the seed.
    pub const REPOPULATE: u32 = 5;
}

/// Drives a `Galaxy` from browser frames.
///
/// Frame deltas are scaled by the simulation speed and fed to a fixed-step
/// accumulator; the galaxy advances once per whole quantum. Held keys become
/// a `ShipInput` snapshot applied to every step of the frame.
pub struct GalaxyRunner {
    galaxy: Galaxy,
    timestep: FixedTimestep,
    input: InputQueue,
    keys: KeyState,
    bindings: KeyBindings,
    sim_speed: f64,
    snapshot: SnapshotBuffers,
}

impl GalaxyRunner {
    pub fn new(config: GalaxyConfig) -> Result<Self, GalaxyError> {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let sim_speed = config.sim_speed;
        let galaxy = Galaxy::new(config)?;

        let mut snapshot = SnapshotBuffers::new();
        snapshot.rebuild(&galaxy);

        Ok(Self {
            galaxy,
            timestep,
            input: InputQueue::new(),
            keys: KeyState::new(),
            bindings: KeyBindings::default(),
            sim_speed,
            snapshot,
        })
    }

    /// Build from a JSON config string. An empty string means defaults.
    pub fn from_json(json: &str) -> Result<Self, GalaxyError> {
        let config = if json.trim().is_empty() {
            GalaxyConfig::default()
        } else {
            GalaxyConfig::from_json(json)?
        };
        Self::new(config)
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, advance the whole quanta that
    /// fit in `frame_dt * sim_speed`, then rebuild the render snapshot.
    /// Returns the number of steps taken.
    pub fn tick(&mut self, frame_dt: f64) -> u32 {
        if !self.input.is_empty() {
            log::trace!("Applying {} queued events", self.input.len());
        }
        for event in self.input.drain() {
            self.keys.apply(&event);
            if let InputEvent::Custom { kind, a, b, c } = event {
                self.handle_custom(kind, a, b, c);
            }
        }

        let steps = self.timestep.accumulate(frame_dt * self.sim_speed);
        self.galaxy.set_input(self.keys.snapshot(&self.bindings));
        for _ in 0..steps {
            self.galaxy.advance(self.timestep.dt());
        }

        self.snapshot.rebuild(&self.galaxy);
        steps
    }

    fn handle_custom(&mut self, kind: u32, a: f32, b: f32, _c: f32) {
        match kind {
            events::SET_SIM_SPEED => self.set_sim_speed(a as f64),
            events::SET_PREDICTION_ITERATIONS => self.set_prediction_iterations(a.max(0.0) as usize),
            events::SET_SHOW_PATH => self.set_show_path(a != 0.0),
            events::SET_BLACK_HOLE_VISIBLE => {
                self.set_black_hole_visible(a.max(0.0) as usize, b != 0.0);
            }
            events::REPOPULATE => self.repopulate(a.max(0.0) as usize),
            _ => log::warn!("Unknown custom event kind {}", kind),
        }
    }

    // ---- Controls ----

    /// Multiplier on frame time. Negative or non-finite values are ignored.
    pub fn set_sim_speed(&mut self, speed: f64) {
        if speed.is_finite() && speed >= 0.0 {
            self.sim_speed = speed;
            log::debug!("Simulation speed set to {}", speed);
        } else {
            log::warn!("Ignoring simulation speed {}", speed);
        }
    }

    pub fn set_prediction_iterations(&mut self, steps: usize) {
        if let Some(ship) = self.galaxy.ship_mut() {
            ship.set_prediction_iterations(steps);
            log::debug!("Prediction iterations set to {}", ship.prediction_iterations());
        }
    }

    /// Rebind the steering keys. Keys already held stay held under their code.
    pub fn set_key_bindings(&mut self, bindings: KeyBindings) {
        log::debug!("Key bindings set to {:?}", bindings);
        self.bindings = bindings;
    }

    pub fn set_show_path(&mut self, show: bool) {
        if let Some(ship) = self.galaxy.ship_mut() {
            ship.show_path = show;
        }
    }

    /// Returns false when `index` is out of range.
    pub fn set_black_hole_visible(&mut self, index: usize, visible: bool) -> bool {
        match self.galaxy.black_holes_mut().get_mut(index) {
            Some(hole) => {
                hole.show = visible;
                true
            }
            None => {
                log::warn!("No black hole at index {}", index);
                false
            }
        }
    }

    /// Add `count` stars, or reset the field from the seed when `count` is 0.
    /// A reset also drops any partial step carried by the clock.
    pub fn repopulate(&mut self, count: usize) {
        let result = if count == 0 {
            self.timestep.reset();
            self.galaxy.reset()
        } else {
            self.galaxy.create_stars(count)
        };
        match result {
            Ok(()) => log::info!("Repopulated: {} stars", self.galaxy.star_count()),
            Err(err) => log::error!("Repopulate failed: {}", err),
        }
    }

    pub fn spawn_ship(&mut self, x: f64, y: f64, size: f64) {
        self.galaxy.spawn_ship(Vector2::new(x, y), size);
    }

    pub fn spawn_default_ship(&mut self) {
        self.galaxy.spawn_default_ship();
    }

    pub fn remove_ship(&mut self) {
        if self.galaxy.remove_ship().is_some() {
            self.keys.clear();
        }
    }

    // ---- State accessors ----

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn snapshot(&self) -> &SnapshotBuffers {
        &self.snapshot
    }

    pub fn sim_speed(&self) -> f64 {
        self.sim_speed
    }

    pub fn max_velocity(&self) -> f64 {
        self.galaxy.max_velocity()
    }

    pub fn tick_count(&self) -> u64 {
        self.galaxy.tick_count()
    }

    /// Fraction of a step left over after the last tick, for render interpolation.
    pub fn alpha(&self) -> f64 {
        self.timestep.alpha()
    }

    // ---- Pointer accessors for direct wasm memory reads ----

    pub fn stars_ptr(&self) -> *const f32 {
        self.snapshot.stars_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.snapshot.star_count()
    }

    pub fn black_holes_ptr(&self) -> *const f32 {
        self.snapshot.black_holes_ptr()
    }

    pub fn black_hole_count(&self) -> u32 {
        self.snapshot.black_hole_count()
    }

    pub fn ship_ptr(&self) -> *const f32 {
        self.snapshot.ship_ptr()
    }

    pub fn path_ptr(&self) -> *const f32 {
        self.snapshot.path_ptr()
    }

    pub fn path_len(&self) -> u32 {
        self.snapshot.path_len()
    }
}
