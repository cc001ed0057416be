//! Keyboard chord that triggers the theme toggle.
//!
//! Chords are written as `+`-separated tokens, modifiers first and a single
//! letter or digit last, e.g. `alt+shift+d`. Matching requires the modifier
//! set to be exact so `ctrl+alt+shift+d` does not fire an `alt+shift+d` chord.

#[cfg(test)]
#[path = "shortcut_test.rs"]
mod shortcut_test;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordError {
    #[error("empty shortcut")]
    Empty,
    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),
    #[error("shortcut key must be a single letter or digit, got {0:?}")]
    InvalidKey(String),
    #[error("shortcut needs at least one modifier")]
    NoModifier,
}

/// Modifier set plus one alphanumeric key.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Lowercase letter or digit.
    pub key: char,
}

impl Default for KeyChord {
    fn default() -> Self {
        Self { ctrl: false, alt: true, shift: true, meta: false, key: 'd' }
    }
}

/// The parts of a keydown event the matcher looks at.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key`, layout dependent.
    pub key: String,
    /// `KeyboardEvent.code`, physical key.
    pub code: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    pub repeat: bool,
    /// Focus is in an input, textarea, select, or contenteditable element.
    pub in_editable: bool,
}

impl KeyChord {
    /// Whether `press` should trigger this chord.
    #[must_use]
    pub fn matches(&self, press: &KeyPress) -> bool {
        if press.repeat || press.in_editable {
            return false;
        }
        if (press.ctrl, press.alt, press.shift, press.meta) != (self.ctrl, self.alt, self.shift, self.meta) {
            return false;
        }
        self.code_matches(&press.code) || self.key_matches(&press.key)
    }

    fn code_matches(&self, code: &str) -> bool {
        let expected = if self.key.is_ascii_digit() {
            format!("Digit{}", self.key)
        } else {
            format!("Key{}", self.key.to_ascii_uppercase())
        };
        code == expected
    }

    fn key_matches(&self, key: &str) -> bool {
        let mut chars = key.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.to_ascii_lowercase() == self.key)
    }
}

impl FromStr for KeyChord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('+').map(str::trim).filter(|t| !t.is_empty()).collect();
        let Some((last, modifiers)) = tokens.split_last() else {
            return Err(ChordError::Empty);
        };

        let mut chord = Self { ctrl: false, alt: false, shift: false, meta: false, key: ' ' };
        for token in modifiers {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "alt" | "option" => chord.alt = true,
                "shift" => chord.shift = true,
                "meta" | "cmd" | "super" => chord.meta = true,
                other => return Err(ChordError::UnknownModifier(other.to_owned())),
            }
        }
        if !(chord.ctrl || chord.alt || chord.meta || chord.shift) {
            return Err(ChordError::NoModifier);
        }

        let mut chars = last.chars();
        chord.key = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
            _ => return Err(ChordError::InvalidKey((*last).to_owned())),
        };
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (held, name) in [(self.ctrl, "ctrl"), (self.alt, "alt"), (self.shift, "shift"), (self.meta, "meta")] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}
