//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted for keys that a focused text input did not consume, so
/// letter bindings apply to the selectors and the result list.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Focus
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::FocusNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::FocusPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            KeyAction::FocusPrev,
        );

        // Vim-style movement
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::MoveDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::OptionPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::OptionNext,
        );

        // Arrow keys
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::MoveDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::OptionPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::OptionNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::OptionNext,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );

        // Activation
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Activate,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Cancel,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
