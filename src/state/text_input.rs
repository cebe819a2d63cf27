//! Single-line text input handling (pure state transitions).
//!
//! Used for the search box, the page-number prompt, the password field and
//! the registration form. All functions are pure - no side effects,
//! testable without TUI. The cursor counts characters, not bytes.

/// Text being edited plus cursor position (in chars).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(mut input: TextInput, ch: char) -> TextInput {
    let at = input.byte_offset(input.cursor);
    input.value.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: TextInput) -> TextInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_offset(input.cursor - 1);
    input.value.remove(at);
    input.cursor -= 1;
    input
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut input: TextInput) -> TextInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position. Saturates at the end of the text.
pub fn handle_cursor_right(mut input: TextInput) -> TextInput {
    let max_cursor = input.value.chars().count();
    input.cursor = (input.cursor + 1).min(max_cursor);
    input
}
