use bytemuck::{Pod, Zeroable};

/// Per-particle render data read by the page's canvas renderer.
/// Must match the JavaScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CircleInstance {
    /// X position in canvas space.
    pub x: f32,
    /// Y position in canvas space.
    pub y: f32,
    /// Circle radius in canvas units.
    pub radius: f32,
    /// Fill red channel, [0, 1].
    pub r: f32,
    /// Fill green channel, [0, 1].
    pub g: f32,
    /// Fill blue channel, [0, 1].
    pub b: f32,
    /// Fill opacity (the particle's live opacity, replacing the base alpha).
    pub alpha: f32,
    /// 1.0 when the particle is active, 0.0 otherwise.
    pub active: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One connection line between two active particles.
/// Wire format: 5 floats, endpoints plus alpha; the page draws a plain
/// stroked line.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ConnectionSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Stroke alpha, strongest for the closest pairs.
    pub alpha: f32,
}

impl ConnectionSegment {
    pub const FLOATS: usize = 5;
}

/// Render buffer of circle instances, rebuilt after each frame's steps.
pub struct CircleBuffer {
    pub instances: Vec<CircleInstance>,
}

impl CircleBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: CircleInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for CircleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render buffer of connection segments.
pub struct SegmentBuffer {
    pub segments: Vec<ConnectionSegment>,
}

impl SegmentBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn push(&mut self, segment: ConnectionSegment) {
        self.segments.push(segment);
    }

    pub fn segment_count(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Raw pointer to segment data for zero-copy reads from JS.
    pub fn segments_ptr(&self) -> *const f32 {
        self.segments.as_ptr() as *const f32
    }
}

impl Default for SegmentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
        assert_eq!(CircleInstance::FLOATS, 8);
    }

    #[test]
    fn connection_segment_is_5_floats() {
        assert_eq!(std::mem::size_of::<ConnectionSegment>(), 20);
        assert_eq!(ConnectionSegment::FLOATS, 5);
    }

    #[test]
    fn circle_buffer_push_and_count() {
        let mut buf = CircleBuffer::new();
        buf.push(CircleInstance::default());
        buf.push(CircleInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn segment_buffer_push_and_count() {
        let mut buf = SegmentBuffer::new();
        buf.push(ConnectionSegment::default());
        assert_eq!(buf.segment_count(), 1);
    }
}
