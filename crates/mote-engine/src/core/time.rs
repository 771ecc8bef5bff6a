//! Frame timing: fixed-step accumulation for the animation loop, the
//! recurring wave clock, and the pointer-idle debounce.

/// Fixed timestep accumulator.
/// The page calls in with variable `requestAnimationFrame` deltas; simulation
/// steps run at a consistent rate regardless of display refresh.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Recurring timer with a fixed period, used for the automatic wave.
pub struct IntervalClock {
    period: f32,
    elapsed: f32,
}

impl IntervalClock {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns how many times the interval elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.period <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let fired = (self.elapsed / self.period) as u32;
        self.elapsed -= fired as f32 * self.period;
        fired
    }
}

/// One-shot countdown re-armed on every pointer event.
/// While armed, the pointer counts as "moving".
pub struct IdleTimer {
    timeout: f32,
    remaining: f32,
}

impl IdleTimer {
    pub fn new(timeout: f32) -> Self {
        Self {
            timeout,
            remaining: 0.0,
        }
    }

    /// Restart the countdown.
    pub fn arm(&mut self) {
        self.remaining = self.timeout;
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    /// Whether the countdown is still running.
    pub fn is_armed(&self) -> bool {
        self.remaining > 0.0
    }
}
