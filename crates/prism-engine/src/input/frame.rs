use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyPress};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, modifiers).
/// `InputFrame` provides events and transitions since the last rendered frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys that went down this frame (first press only).
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Every press in arrival order, auto-repeats included.
    pub presses: Vec<KeyPress>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.presses.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
