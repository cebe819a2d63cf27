//! Key handling for text prompts and forms (pure state transitions).
//!
//! While a prompt or form has focus it receives every key except Ctrl+C;
//! key bindings are not consulted. Enter submits, Esc returns focus to the
//! result list.

use crate::state::app_state::{AppState, FocusPane};
use crate::state::controller::Outgoing;
use crate::state::registration::RegisterField;
use crate::state::text_input::{self, TextInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route a key to the focused prompt or form. Returns requests to send.
///
/// No-op when the result list has focus.
pub fn handle_field_key(state: &mut AppState, key: KeyEvent) -> Vec<Outgoing> {
    match state.focus {
        FocusPane::Results => Vec::new(),
        FocusPane::SearchInput => handle_search_key(state, key),
        FocusPane::PageInput => handle_page_key(state, key),
        FocusPane::Login => handle_login_key(state, key),
        FocusPane::Register => handle_register_key(state, key),
    }
}

/// Apply an editing key to `input`. Returns `false` for non-editing keys.
pub fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    let current = std::mem::take(input);
    let (next, handled) = match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            (text_input::handle_char_input(current, ch), true)
        }
        KeyCode::Backspace => (text_input::handle_backspace(current), true),
        KeyCode::Left => (text_input::handle_cursor_left(current), true),
        KeyCode::Right => (text_input::handle_cursor_right(current), true),
        _ => (current, false),
    };
    *input = next;
    handled
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Vec<Outgoing> {
    match key.code {
        KeyCode::Esc => {
            state.focus_results();
            Vec::new()
        }
        KeyCode::Enter => {
            let text = state.search_input.value().to_string();
            state.focus_results();
            state.controller_mut().search(&text)
        }
        _ => {
            edit_text(&mut state.search_input, key);
            Vec::new()
        }
    }
}

fn handle_page_key(state: &mut AppState, key: KeyEvent) -> Vec<Outgoing> {
    match key.code {
        KeyCode::Esc => {
            state.focus_results();
            Vec::new()
        }
        KeyCode::Enter => {
            let typed = state.page_input.value().parse::<i64>();
            state.page_input = TextInput::new();
            state.focus_results();
            match typed {
                Ok(page) => state.controller_mut().goto_page(page),
                Err(_) => Vec::new(),
            }
        }
        KeyCode::Char(ch) if !ch.is_ascii_digit() => Vec::new(),
        _ => {
            edit_text(&mut state.page_input, key);
            Vec::new()
        }
    }
}

fn handle_login_key(state: &mut AppState, key: KeyEvent) -> Vec<Outgoing> {
    match key.code {
        KeyCode::Esc => {
            state.password_input = TextInput::new();
            state.focus_results();
            Vec::new()
        }
        KeyCode::Enter => {
            if state.password_input.is_empty() {
                return Vec::new();
            }
            let password = std::mem::take(&mut state.password_input);
            state.controller_mut().login(password.value())
        }
        _ => {
            edit_text(&mut state.password_input, key);
            Vec::new()
        }
    }
}

fn handle_register_key(state: &mut AppState, key: KeyEvent) -> Vec<Outgoing> {
    match key.code {
        KeyCode::Esc => {
            state.focus_results();
            Vec::new()
        }
        KeyCode::Enter => state.controller_mut().register(),
        KeyCode::Tab | KeyCode::BackTab => {
            state.controller_mut().registration_mut().focus_next();
            Vec::new()
        }
        _ => {
            let form = state.controller_mut().registration_mut();
            if form.focus == RegisterField::Location {
                match key.code {
                    KeyCode::Left | KeyCode::Up => form.cycle_location(false),
                    KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                        form.cycle_location(true)
                    }
                    _ => {}
                }
            } else {
                form.edit(|input| edit_text(input, key));
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
