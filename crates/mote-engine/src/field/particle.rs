//! A single animated point: position, velocity, radius, color, opacity and an
//! activation flag. Particles never reference each other; connections and
//! waves are orchestrated by the field.

use glam::Vec2;

use crate::config::FieldConfig;
use crate::core::rng::Rng;

/// What a particle is currently painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    /// The palette slot picked at spawn.
    Palette(usize),
    /// The distinguished color taken right next to the cursor.
    Active,
}

/// A single particle with physics and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Palette slot this particle reverts to.
    pub palette_index: usize,
    pub color: ParticleColor,
    pub opacity: f32,
    pub active: bool,
}

impl Particle {
    /// Per-axis velocity damping per step.
    pub const FRICTION: f32 = 0.98;
    /// Opacity lost per step while settling back down.
    pub const OPACITY_DECAY: f32 = 0.01;
    /// Opacity never decays below this.
    pub const OPACITY_FLOOR: f32 = 0.2;
    /// Radius gained per step while active.
    pub const GROW_STEP: f32 = 0.1;
    /// Radius lost per step while inactive.
    pub const SHRINK_STEP: f32 = 0.05;
    /// Per-step probability of an active particle going dormant.
    pub const DEACTIVATE_CHANCE: f32 = 0.001;
    /// Per-step probability of a dormant particle waking on its own.
    pub const ACTIVATE_CHANCE: f32 = 0.0005;
    /// Probability of spawning already active.
    pub const SPAWN_ACTIVE_CHANCE: f32 = 0.9;

    /// Spawn a particle uniformly at random within `bounds`.
    pub fn spawn(bounds: Vec2, config: &FieldConfig, rng: &mut Rng) -> Self {
        let half_speed = config.speed / 2.0;
        let palette_index = rng.next_int(config.palette.len() as u32) as usize;
        Particle {
            pos: Vec2::new(rng.range(0.0, bounds.x), rng.range(0.0, bounds.y)),
            vel: Vec2::new(
                rng.range(-half_speed, half_speed),
                rng.range(-half_speed, half_speed),
            ),
            radius: rng.range(0.0, config.max_radius),
            palette_index,
            color: ParticleColor::Palette(palette_index),
            opacity: rng.range(Self::OPACITY_FLOOR, 1.0),
            active: rng.chance(Self::SPAWN_ACTIVE_CHANCE),
        }
    }

    /// One simulation step against the current cursor position.
    pub fn step(&mut self, cursor: Vec2, bounds: Vec2, config: &FieldConfig, rng: &mut Rng) {
        self.pos += self.vel;

        // Soft bounce: reflect velocity, position may overshoot for one step.
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }

        let offset = self.pos - cursor;
        let distance = offset.length();

        if distance < config.activation_distance {
            self.active = true;

            let falloff = (config.activation_distance - distance) / config.activation_distance;
            let away = if distance > f32::EPSILON {
                offset / distance
            } else {
                Vec2::NEG_X
            };
            self.vel += away * falloff * config.repel_strength;

            if distance < config.activation_distance * 0.5 {
                self.color = ParticleColor::Active;
                self.opacity = 0.9;
            } else {
                self.color = ParticleColor::Palette(self.palette_index);
                self.opacity = 0.6 + falloff * 0.4;
            }
        } else if self.active {
            // Settle back toward the resting look.
            self.color = ParticleColor::Palette(self.palette_index);
            self.opacity = (self.opacity - Self::OPACITY_DECAY).max(Self::OPACITY_FLOOR);
        }

        self.vel *= Self::FRICTION;

        if self.active {
            // Active particles never stall.
            if self.vel.length() < config.min_speed {
                self.vel = Vec2::from_angle(rng.angle()) * config.min_speed;
            }
            if rng.chance(Self::DEACTIVATE_CHANCE) {
                self.active = false;
            }
        } else if rng.chance(Self::ACTIVATE_CHANCE) {
            self.active = true;
        }

        if self.active {
            self.radius = (self.radius + Self::GROW_STEP).min(config.max_radius);
        } else {
            self.radius = (self.radius - Self::SHRINK_STEP).max(config.min_radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_particle(pos: Vec2) -> Particle {
        Particle {
            pos,
            vel: Vec2::ZERO,
            radius: 2.0,
            palette_index: 0,
            color: ParticleColor::Palette(0),
            opacity: 0.5,
            active: false,
        }
    }

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);
    const FAR: Vec2 = Vec2::new(-10_000.0, -10_000.0);

    #[test]
    fn cursor_within_range_activates() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(400.0, 300.0));

        p.step(Vec2::new(460.0, 300.0), BOUNDS, &config, &mut rng);
        assert!(p.active);

        // Idempotent: staying near the cursor keeps it active
        p.step(Vec2::new(460.0, 300.0), BOUNDS, &config, &mut rng);
        assert!(p.active);
    }

    #[test]
    fn close_cursor_snaps_active_color() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(400.0, 300.0));

        // 60 units away, inside half the activation distance (75)
        p.step(Vec2::new(460.0, 300.0), BOUNDS, &config, &mut rng);
        assert_eq!(p.color, ParticleColor::Active);
        assert_eq!(p.opacity, 0.9);
    }

    #[test]
    fn cursor_on_top_of_particle() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(400.0, 300.0));

        p.step(p.pos, BOUNDS, &config, &mut rng);
        assert!(p.active);
        assert_eq!(p.color, ParticleColor::Active);
        assert_eq!(p.opacity, 0.9);
    }

    #[test]
    fn outer_ring_blends_back_to_palette() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(400.0, 300.0));
        p.color = ParticleColor::Active;

        // 100 units away: inside activation (150), outside the half ring
        p.step(Vec2::new(500.0, 300.0), BOUNDS, &config, &mut rng);
        assert_eq!(p.color, ParticleColor::Palette(0));
        let falloff = (150.0 - 100.0) / 150.0;
        assert!((p.opacity - (0.6 + falloff * 0.4)).abs() < 1e-4);
    }

    #[test]
    fn repulsion_pushes_away_from_cursor() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(450.0, 300.0));
        p.active = true;
        // Moving fast enough that the min-speed kick stays out of the way
        p.vel = Vec2::new(0.2, 0.0);

        // Cursor left of the particle; the impulse should point right.
        p.step(Vec2::new(400.0, 300.0), BOUNDS, &config, &mut rng);
        assert!(p.vel.x > 0.2, "vel.x = {}", p.vel.x);
    }

    #[test]
    fn opacity_decays_to_floor_and_stops() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(400.0, 300.0));
        p.active = true;
        p.opacity = 0.205;

        p.step(FAR, BOUNDS, &config, &mut rng);
        assert_eq!(p.opacity, Particle::OPACITY_FLOOR);
        p.step(FAR, BOUNDS, &config, &mut rng);
        assert_eq!(p.opacity, Particle::OPACITY_FLOOR);
    }

    #[test]
    fn active_particle_keeps_minimum_speed() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(400.0, 300.0));
        p.active = true;
        p.vel = Vec2::new(0.001, 0.0);

        p.step(FAR, BOUNDS, &config, &mut rng);
        if p.active {
            assert!((p.vel.length() - config.min_speed).abs() < 1e-4);
        }
    }

    #[test]
    fn radius_stays_within_configured_band() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(400.0, 300.0));
        p.active = true;
        for _ in 0..200 {
            p.active = true;
            p.step(FAR, BOUNDS, &config, &mut rng);
            assert!(p.radius <= config.max_radius);
        }
        assert_eq!(p.radius, config.max_radius);

        for _ in 0..200 {
            p.active = false;
            p.step(FAR, BOUNDS, &config, &mut rng);
            assert!(p.radius >= config.min_radius);
        }
        assert_eq!(p.radius, config.min_radius);
    }

    #[test]
    fn bounce_reflects_velocity_not_position() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let mut p = test_particle(Vec2::new(799.9, 300.0));
        p.active = true;
        p.vel = Vec2::new(0.5, 0.0);

        p.step(FAR, BOUNDS, &config, &mut rng);
        // Overshot the right edge; velocity flipped, position left alone
        assert!(p.pos.x > BOUNDS.x);
        assert!(p.vel.x < 0.0);
    }

    #[test]
    fn spawn_respects_config_ranges() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            let p = Particle::spawn(BOUNDS, &config, &mut rng);
            assert!(p.pos.x >= 0.0 && p.pos.x < BOUNDS.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < BOUNDS.y);
            assert!(p.vel.x.abs() <= config.speed / 2.0);
            assert!(p.radius >= 0.0 && p.radius < config.max_radius);
            assert!(p.opacity >= 0.2 && p.opacity < 1.0);
            assert!(p.palette_index < config.palette.len());
            assert_eq!(p.color, ParticleColor::Palette(p.palette_index));
        }
    }

    #[test]
    fn spawn_is_deterministic_for_a_seed() {
        let config = FieldConfig::default();
        let mut rng1 = Rng::new(99);
        let mut rng2 = Rng::new(99);
        let a = Particle::spawn(BOUNDS, &config, &mut rng1);
        let b = Particle::spawn(BOUNDS, &config, &mut rng2);
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
        assert_eq!(a.active, b.active);
    }
}
