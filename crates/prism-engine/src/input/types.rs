use std::fmt;

/// Keyboard key identifier.
///
/// The runtime maps platform keycodes into these variants where possible.
/// For unsupported keys, `Key::Unknown(u32)` carries a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not yet represented here.
    Unknown(u32),
}

impl Key {
    const LETTERS: [Key; 26] = [
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
        Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
        Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
    ];

    const DIGITS: [Key; 10] = [
        Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
        Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
    ];

    /// Lowercase character for letter and digit keys.
    ///
    /// Letters are reported unshifted: the shift state travels separately in
    /// [`Modifiers`], so `Shift+X` is `('x', shift = true)`.
    pub fn as_char(self) -> Option<char> {
        if let Some(i) = Self::LETTERS.iter().position(|k| *k == self) {
            return Some((b'a' + i as u8) as char);
        }
        Self::DIGITS
            .iter()
            .position(|k| *k == self)
            .map(|i| (b'0' + i as u8) as char)
    }

    /// Inverse of [`Key::as_char`]; case-insensitive for letters.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            'a'..='z' => Some(Self::LETTERS[(c as u8 - b'a') as usize]),
            'A'..='Z' => Some(Self::LETTERS[(c as u8 - b'A') as usize]),
            '0'..='9' => Some(Self::DIGITS[(c as u8 - b'0') as usize]),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false, meta: false };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// A key press as delivered to the application, auto-repeats included.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    pub repeat: bool,
}

impl KeyPress {
    /// `(char, shift)` pair for letter and digit keys.
    pub fn typed(&self) -> Option<(char, bool)> {
        self.key.as_char().map(|c| (c, self.modifiers.shift))
    }
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Platform keycode, when known.
        code: u32,
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{}", c.to_ascii_uppercase()),
            None => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_to_chars() {
        assert_eq!(Key::A.as_char(), Some('a'));
        assert_eq!(Key::Z.as_char(), Some('z'));
        assert_eq!(Key::Digit0.as_char(), Some('0'));
        assert_eq!(Key::Digit9.as_char(), Some('9'));
        assert_eq!(Key::Escape.as_char(), None);
        assert_eq!(Key::Unknown(7).as_char(), None);
    }

    #[test]
    fn from_char_round_trips_letters() {
        for c in 'a'..='z' {
            let key = Key::from_char(c).unwrap();
            assert_eq!(key.as_char(), Some(c));
        }
        assert_eq!(Key::from_char('X'), Some(Key::X));
        assert_eq!(Key::from_char('-'), None);
    }

    #[test]
    fn typed_carries_shift() {
        let press = KeyPress { key: Key::X, modifiers: Modifiers::SHIFT, repeat: false };
        assert_eq!(press.typed(), Some(('x', true)));

        let press = KeyPress { key: Key::Space, modifiers: Modifiers::default(), repeat: false };
        assert_eq!(press.typed(), None);
    }

    #[test]
    fn display_uses_key_label() {
        assert_eq!(Key::L.to_string(), "L");
        assert_eq!(Key::Escape.to_string(), "Escape");
    }
}
