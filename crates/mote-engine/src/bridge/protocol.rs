/// Wire layout shared with the page's canvas renderer.
/// Must stay in sync with the JavaScript glue that allocates its
/// `Float32Array` views.
///
/// Two flat f32 buffers cross the boundary each frame:
/// ```text
/// [Circles:  up to max_circles  × 8 floats]
/// [Segments: up to max_segments × 5 floats]
/// ```
///
/// Capacities derive from the config's population ceiling; JS reads them
/// once at init through the capacity accessors.

use crate::config::FieldConfig;

/// Floats per circle instance (wire format — never changes).
pub const CIRCLE_FLOATS: usize = 8;

/// Floats per connection segment: x1, y1, x2, y2, alpha (wire format —
/// never changes).
pub const SEGMENT_FLOATS: usize = 5;

/// Runtime-computed buffer capacities for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// Maximum circle instances: the clamped population ceiling.
    pub max_circles: usize,
    /// Maximum connection segments: every unordered pair at the ceiling.
    pub max_segments: usize,
    /// Size of the circle section in floats.
    pub circle_data_floats: usize,
    /// Size of the segment section in floats.
    pub segment_data_floats: usize,
}

impl FieldLayout {
    /// Compute the layout for a population ceiling.
    pub fn new(max_circles: usize) -> Self {
        let max_segments = max_circles * max_circles.saturating_sub(1) / 2;
        Self {
            max_circles,
            max_segments,
            circle_data_floats: max_circles * CIRCLE_FLOATS,
            segment_data_floats: max_segments * SEGMENT_FLOATS,
        }
    }

    /// Compute the layout from a field config.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.max_count)
    }
}
