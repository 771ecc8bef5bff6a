pub mod bridge;
pub mod config;
pub mod core;
pub mod field;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use bridge::protocol::{FieldLayout, CIRCLE_FLOATS, SEGMENT_FLOATS};
pub use config::{ColorParseError, FieldConfig, Rgba};
pub use self::core::rng::Rng;
pub use self::core::schedule::ImpulseSchedule;
pub use self::core::time::{FixedTimestep, IdleTimer, IntervalClock};
pub use field::particle::{Particle, ParticleColor};
pub use field::ParticleField;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{CircleBuffer, CircleInstance, ConnectionSegment, SegmentBuffer};
pub use systems::connections::build_connection_buffer;
pub use systems::render::build_circle_buffer;
