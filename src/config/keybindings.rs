//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions while the result list has focus.
///
/// Text fields (search, page number, password, registration) consume their
/// own keys before bindings are consulted.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyAction::*;
        const NONE: KeyModifiers = KeyModifiers::NONE;
        const SHIFT: KeyModifiers = KeyModifiers::SHIFT;
        const CTRL: KeyModifiers = KeyModifiers::CONTROL;

        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Queries
        keys.bind(KeyCode::Char('/'), NONE, StartSearch);
        keys.bind(KeyCode::Char('f'), CTRL, StartSearch);
        keys.bind(KeyCode::Char('a'), NONE, ListAll);
        keys.bind(KeyCode::Char('u'), NONE, ListUnapproved);

        // Sorting
        keys.bind(KeyCode::Char('n'), NONE, SortByName);
        keys.bind(KeyCode::Char('d'), NONE, SortByDate);

        // Paging
        keys.bind(KeyCode::Left, NONE, PrevPage);
        keys.bind(KeyCode::Char('h'), NONE, PrevPage);
        keys.bind(KeyCode::PageUp, NONE, PrevPage);
        keys.bind(KeyCode::Right, NONE, NextPage);
        keys.bind(KeyCode::Char('l'), NONE, NextPage);
        keys.bind(KeyCode::PageDown, NONE, NextPage);
        keys.bind(KeyCode::Char(':'), NONE, GotoPage);
        keys.bind(KeyCode::Char('g'), NONE, GotoPage);

        // Result list
        keys.bind(KeyCode::Down, NONE, SelectNext);
        keys.bind(KeyCode::Char('j'), NONE, SelectNext);
        keys.bind(KeyCode::Up, NONE, SelectPrev);
        keys.bind(KeyCode::Char('k'), NONE, SelectPrev);
        keys.bind(KeyCode::Enter, NONE, ToggleDetails);
        keys.bind(KeyCode::Char(' '), NONE, ToggleDetails);

        // Moderation
        keys.bind(KeyCode::Char('A'), SHIFT, Approve);
        keys.bind(KeyCode::Char('X'), SHIFT, Remove);

        // Forms
        keys.bind(KeyCode::Char('L'), SHIFT, ToggleLogin);
        keys.bind(KeyCode::Char('R'), SHIFT, Register);

        // Application controls
        keys.bind(KeyCode::Char('c'), NONE, RefreshCount);
        keys.bind(KeyCode::Esc, NONE, Dismiss);
        keys.bind(KeyCode::Char('?'), NONE, Help);
        keys.bind(KeyCode::Char('q'), NONE, Quit);

        keys
    }
}
