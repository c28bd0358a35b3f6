//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default less/vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the code and modifiers take part; event kind and state are
    /// ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Line scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);

        // Page navigation
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);

        // Jumps; terminals disagree on whether 'G' carries SHIFT
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::JumpToTop);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::JumpToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::JumpToBottom);
        keys.bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::JumpToBottom);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::JumpToBottom);

        // Display
        keys.bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::ToggleColorize);
        keys.bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::ToggleFollow);
        keys.bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Reload);

        // Application controls
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
