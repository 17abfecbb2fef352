/// Fixed timestep accumulator.
/// Decouples the simulation tick rate from variable frame timing: frame deltas
/// are accumulated and consumed one whole quantum at a time. The remainder
/// always carries over to the next frame; there is no per-frame step cap.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f64,
    /// Accumulated time from variable frame deltas.
    accumulator: f64,
}

impl FixedTimestep {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt;
        let mut steps = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    /// Fraction of a tick left in the accumulator (0.0 to 1.0).
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Drop any carried time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q: f64 = 1.0 / 64.0;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(Q);
        assert_eq!(ts.accumulate(Q), 1);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(Q);
        assert_eq!(ts.accumulate(Q / 2.0), 0);
        assert_eq!(ts.accumulate(Q * 0.75), 1);
        assert_eq!(ts.alpha(), 0.25);
    }

    #[test]
    fn slow_frame_is_not_capped() {
        let mut ts = FixedTimestep::new(Q);
        // a full second of frame time runs every quantum in it
        assert_eq!(ts.accumulate(1.0), 64);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn remainder_carries_between_frames() {
        let mut ts = FixedTimestep::new(Q);
        let mut total = 0;
        for _ in 0..8 {
            total += ts.accumulate(Q * 1.5);
        }
        assert_eq!(total, 12);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn alpha_is_between_zero_and_one() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        ts.accumulate(0.008);
        let a = ts.alpha();
        assert!((0.0..1.0).contains(&a), "alpha was {}", a);
    }

    #[test]
    fn reset_drops_carry() {
        let mut ts = FixedTimestep::new(Q);
        ts.accumulate(Q / 2.0);
        ts.reset();
        assert_eq!(ts.accumulate(Q / 2.0), 0);
    }
}
