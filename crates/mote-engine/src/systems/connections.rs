use crate::config::FieldConfig;
use crate::field::particle::Particle;
use crate::renderer::instance::{ConnectionSegment, SegmentBuffer};

/// Build connection segments for every unordered pair of active particles
/// closer than the connection distance. Segment alpha falls off linearly
/// with distance.
///
/// Naive O(n²) pair scan. The population is clamped to 200, so the worst
/// case is 19 900 pairs per frame; a spatial index would cost more than it
/// saves at this scale.
pub fn build_connection_buffer(
    particles: &[Particle],
    config: &FieldConfig,
    buffer: &mut SegmentBuffer,
) {
    buffer.clear();

    for (i, a) in particles.iter().enumerate() {
        if !a.active {
            continue;
        }
        for b in &particles[i + 1..] {
            if !b.active {
                continue;
            }
            let distance = a.pos.distance(b.pos);
            if distance < config.connection_distance {
                let alpha = (config.connection_distance - distance) / config.connection_distance
                    * config.connection_alpha;
                buffer.push(ConnectionSegment {
                    x1: a.pos.x,
                    y1: a.pos.y,
                    x2: b.pos.x,
                    y2: b.pos.y,
                    alpha,
                });
            }
        }
    }
}
