/// Input event types the field understands.
/// Generic — no page-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The mouse cursor moved to canvas coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The first touch point moved to canvas coordinates (x, y).
    /// Multi-touch reduction happens in the page glue.
    TouchMove { x: f32, y: f32 },
    /// The canvas was re-measured to a new size.
    Resize { width: f32, height: f32 },
    /// The page asked for a wave right now (on top of the automatic ones).
    Wave,
}

/// A queue of input events.
/// JS pushes events at DOM-event time; Rust drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
