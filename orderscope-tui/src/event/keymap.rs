//! Key binding definitions.
//!
//! Bindings are data rather than hard-coded match arms so a future
//! config file can override them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key binding.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether a key event matches this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings.
///
/// Plain characters are reserved for the search input, so global
/// shortcuts carry a modifier.
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // History
    pub const HISTORY_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const HISTORY_FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);
    pub const RELOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
}
