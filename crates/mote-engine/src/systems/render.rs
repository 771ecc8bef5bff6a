use crate::config::FieldConfig;
use crate::field::particle::{Particle, ParticleColor};
use crate::renderer::instance::{CircleBuffer, CircleInstance};

/// Build the circle buffer from the particle collection.
/// Instances come out in collection order; that order is the z-order.
pub fn build_circle_buffer(particles: &[Particle], config: &FieldConfig, buffer: &mut CircleBuffer) {
    buffer.clear();

    for p in particles {
        let color = match p.color {
            ParticleColor::Active => config.active_color,
            ParticleColor::Palette(index) => config.palette[index],
        };
        buffer.push(CircleInstance {
            x: p.pos.x,
            y: p.pos.y,
            radius: p.radius,
            r: color.r,
            g: color.g,
            b: color.b,
            alpha: p.opacity,
            active: if p.active { 1.0 } else { 0.0 },
        });
    }
}
