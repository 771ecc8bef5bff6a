//! Delayed per-particle wave impulses.
//!
//! A wave does not hit every particle at once: each particle's impulse is due
//! after a delay proportional to its distance from the epicenter, so the kick
//! propagates outward visually. All pending impulses live in one owned list,
//! polled once per tick; rebuilding the particle collection clears the list,
//! so an impulse can never target a particle that no longer exists.

use glam::Vec2;

/// A velocity kick scheduled for one particle.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledImpulse {
    /// Absolute schedule time at which the impulse applies.
    pub due: f32,
    /// Index into the particle collection at schedule time.
    pub index: usize,
    /// Velocity delta to add.
    pub impulse: Vec2,
}

/// Time-keyed list of pending impulses.
pub struct ImpulseSchedule {
    now: f32,
    pending: Vec<ScheduledImpulse>,
}

impl ImpulseSchedule {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            pending: Vec::new(),
        }
    }

    /// Enqueue an impulse for `index`, due `delay` seconds from now.
    pub fn schedule(&mut self, delay: f32, index: usize, impulse: Vec2) {
        self.pending.push(ScheduledImpulse {
            due: self.now + delay.max(0.0),
            index,
            impulse,
        });
    }

    /// Advance the clock by `dt` and hand every due impulse to `apply`.
    pub fn advance(&mut self, dt: f32, mut apply: impl FnMut(usize, Vec2)) {
        self.now += dt;
        let now = self.now;
        self.pending.retain(|entry| {
            if entry.due <= now {
                apply(entry.index, entry.impulse);
                false
            } else {
                true
            }
        });
    }

    /// Drop all pending impulses. The clock keeps running.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for ImpulseSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_in_due_order_across_ticks() {
        let mut schedule = ImpulseSchedule::new();
        schedule.schedule(0.3, 2, Vec2::X);
        schedule.schedule(0.1, 0, Vec2::X);
        schedule.schedule(0.2, 1, Vec2::X);

        let mut fired = Vec::new();
        for _ in 0..4 {
            schedule.advance(0.1, |index, _| fired.push(index));
        }
        // Nearer due times fire on earlier ticks
        assert_eq!(fired, vec![0, 1, 2]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn zero_delay_fires_next_tick() {
        let mut schedule = ImpulseSchedule::new();
        schedule.schedule(0.0, 5, Vec2::new(1.0, 2.0));
        let mut fired = Vec::new();
        schedule.advance(1.0 / 60.0, |index, impulse| fired.push((index, impulse)));
        assert_eq!(fired, vec![(5, Vec2::new(1.0, 2.0))]);
    }

    #[test]
    fn clear_cancels_everything() {
        let mut schedule = ImpulseSchedule::new();
        schedule.schedule(0.1, 0, Vec2::X);
        schedule.schedule(0.2, 1, Vec2::X);
        schedule.clear();

        let mut count = 0;
        schedule.advance(10.0, |_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn negative_delay_clamped_to_now() {
        let mut schedule = ImpulseSchedule::new();
        schedule.schedule(-1.0, 0, Vec2::X);
        let mut count = 0;
        schedule.advance(0.001, |_, _| count += 1);
        assert_eq!(count, 1);
    }
}
