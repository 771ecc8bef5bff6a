//! The particle field: owns the population, the cursor state, the wave clock
//! and the impulse schedule, and advances everything one fixed step at a time.

pub mod particle;

use glam::Vec2;

use crate::config::FieldConfig;
use crate::core::rng::Rng;
use crate::core::schedule::ImpulseSchedule;
use crate::core::time::{IdleTimer, IntervalClock};
use particle::Particle;

/// All simulation state for one canvas worth of particles.
///
/// The hosting page owns the canvas and the animation loop; the field owns
/// everything else. Dropping the field drops the wave schedule and clocks
/// with it, so there is nothing left to fire after teardown.
pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    cursor: Vec2,
    pointer_idle: IdleTimer,
    wave_clock: IntervalClock,
    schedule: ImpulseSchedule,
    rng: Rng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut field = ParticleField {
            bounds: Vec2::new(width, height),
            particles: Vec::new(),
            cursor: Vec2::ZERO,
            pointer_idle: IdleTimer::new(config.pointer_idle),
            wave_clock: IntervalClock::new(config.wave_interval),
            schedule: ImpulseSchedule::new(),
            rng: Rng::new(seed),
            config,
        };
        field.rebuild();
        field
    }

    /// Discard the population and respawn it at the density-scaled count.
    /// Pending wave impulses target indices of the old population, so they
    /// are dropped wholesale.
    pub fn rebuild(&mut self) {
        self.schedule.clear();
        let count = self.config.population(self.bounds.x, self.bounds.y);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(self.bounds, &self.config, &mut self.rng));
        }
        log::info!(
            "field rebuilt: {} particles in {}x{}",
            count,
            self.bounds.x,
            self.bounds.y
        );
    }

    /// Re-measure the canvas. Particles are recreated, not rescaled in place.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.rebuild();
    }

    /// Update the shared cursor position and re-arm the idle debounce.
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
        self.pointer_idle.arm();
    }

    /// Whether a pointer event arrived within the idle window.
    pub fn pointer_moving(&self) -> bool {
        self.pointer_idle.is_armed()
    }

    /// Launch a wave from a random epicenter.
    pub fn trigger_wave(&mut self) {
        let epicenter = Vec2::new(
            self.rng.range(0.0, self.bounds.x),
            self.rng.range(0.0, self.bounds.y),
        );
        self.trigger_wave_at(epicenter);
    }

    /// Launch a wave from `epicenter`: every particle gets an outward impulse
    /// scheduled after a delay proportional to its distance, so the kick
    /// front propagates outward. Applying an impulse also forces the particle
    /// active, even where the falloff has reached zero.
    pub fn trigger_wave_at(&mut self, epicenter: Vec2) {
        let config = &self.config;
        for (index, p) in self.particles.iter().enumerate() {
            let offset = p.pos - epicenter;
            let distance = offset.length();
            let falloff = ((config.wave_radius - distance) / config.wave_radius).max(0.0);
            let outward = if distance > f32::EPSILON {
                offset / distance
            } else {
                Vec2::X
            };
            self.schedule.schedule(
                distance * config.wave_delay_per_unit,
                index,
                outward * falloff * config.wave_strength,
            );
        }
    }

    /// One fixed simulation step: fire the automatic wave if due, apply due
    /// impulses, then step every particle against the current cursor.
    pub fn tick(&mut self, dt: f32) {
        for _ in 0..self.wave_clock.advance(dt) {
            self.trigger_wave();
        }

        let ParticleField {
            schedule,
            particles,
            ..
        } = self;
        schedule.advance(dt, |index, impulse| {
            if let Some(p) = particles.get_mut(index) {
                p.vel += impulse;
                p.active = true;
            }
        });

        for p in &mut self.particles {
            p.step(self.cursor, self.bounds, &self.config, &mut self.rng);
        }

        self.pointer_idle.advance(dt);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.bounds.x
    }

    pub fn height(&self) -> f32 {
        self.bounds.y
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }
}
