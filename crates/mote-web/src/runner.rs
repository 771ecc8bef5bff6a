use mote_engine::{
    build_circle_buffer, build_connection_buffer, CircleBuffer, FieldConfig, FieldLayout,
    FixedTimestep, InputEvent, InputQueue, ParticleField, SegmentBuffer,
};

/// Wires the particle field to the page's animation loop.
///
/// The page calls `tick` once per `requestAnimationFrame` with the elapsed
/// time; input events queue up between frames and drain at the start of the
/// next one. After the accumulated fixed steps run, both wire buffers are
/// rebuilt for the canvas renderer to read.
pub struct FieldRunner {
    field: ParticleField,
    input: InputQueue,
    circles: CircleBuffer,
    segments: SegmentBuffer,
    timestep: FixedTimestep,
    layout: FieldLayout,
}

impl FieldRunner {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let layout = FieldLayout::from_config(&config);
        let timestep = FixedTimestep::new(config.fixed_dt);
        let circles = CircleBuffer::with_capacity(layout.max_circles);
        let segments = SegmentBuffer::with_capacity(layout.max_segments);
        let field = ParticleField::new(config, width, height, seed);

        Self {
            field,
            input: InputQueue::new(),
            circles,
            segments,
            timestep,
            layout,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: drain input, run the accumulated fixed steps, rebuild
    /// both wire buffers.
    pub fn tick(&mut self, dt: f32) {
        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                    self.field.set_cursor(x, y)
                }
                InputEvent::Resize { width, height } => self.field.resize(width, height),
                InputEvent::Wave => self.field.trigger_wave(),
            }
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.field.tick(self.timestep.dt());
        }

        build_circle_buffer(self.field.particles(), self.field.config(), &mut self.circles);
        build_connection_buffer(self.field.particles(), self.field.config(), &mut self.segments);
    }

    // ---- Pointer accessors for JS-side Float32Array reads ----

    pub fn circles_ptr(&self) -> *const f32 {
        self.circles.instances_ptr()
    }

    pub fn circle_count(&self) -> u32 {
        self.circles.instance_count()
    }

    pub fn segments_ptr(&self) -> *const f32 {
        self.segments.segments_ptr()
    }

    pub fn segment_count(&self) -> u32 {
        self.segments.segment_count()
    }

    pub fn field_width(&self) -> f32 {
        self.field.width()
    }

    pub fn field_height(&self) -> f32 {
        self.field.height()
    }

    pub fn particle_count(&self) -> u32 {
        self.field.particle_count() as u32
    }

    pub fn pointer_moving(&self) -> bool {
        self.field.pointer_moving()
    }

    // ---- Capacity accessors ----

    pub fn max_circles(&self) -> u32 {
        self.layout.max_circles as u32
    }

    pub fn max_segments(&self) -> u32 {
        self.layout.max_segments as u32
    }
}
