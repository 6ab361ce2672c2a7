use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyPress, KeyState, Modifiers};

/// Current input state for a single window.
///
/// Holds "is down" information; per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss mid-press would otherwise leave keys stuck down.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                repeat,
                ..
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                        frame.presses.push(KeyPress {
                            key: *key,
                            modifiers: *modifiers,
                            repeat: *repeat,
                        });
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, shift: bool, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers { shift, ..Modifiers::default() },
            code: 0,
            repeat,
        }
    }

    #[test]
    fn repeats_are_recorded_as_presses_only() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::X, KeyState::Pressed, false, false));
        state.apply_event(&mut frame, key(Key::X, KeyState::Pressed, false, true));
        state.apply_event(&mut frame, key(Key::X, KeyState::Pressed, false, true));

        assert_eq!(frame.presses.len(), 3);
        assert_eq!(frame.keys_pressed.len(), 1);
        assert!(state.key_down(Key::X));
        assert!(frame.presses[1].repeat);
    }

    #[test]
    fn release_updates_sets() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::O, KeyState::Pressed, true, false));
        state.apply_event(&mut frame, key(Key::O, KeyState::Released, true, false));

        assert!(!state.key_down(Key::O));
        assert!(frame.keys_released.contains(&Key::O));
        assert!(state.modifiers.shift);
        assert_eq!(frame.presses[0].typed(), Some(('o', true)));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Z, KeyState::Pressed, false, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(state.keys_down.is_empty());
        assert!(!state.focused);
    }

    #[test]
    fn clear_resets_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::K, KeyState::Pressed, false, false));
        assert!(!frame.is_empty());
        frame.clear();
        assert!(frame.is_empty());
        assert!(frame.presses.is_empty());
    }
}
