pub mod protocol;

pub use protocol::{FieldLayout, CIRCLE_FLOATS, SEGMENT_FLOATS};
