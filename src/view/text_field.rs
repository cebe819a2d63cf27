//! Bordered single-line text field widget.

use crate::state::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders a [`TextInput`] with a block cursor when focused.
pub struct TextField<'a> {
    input: &'a TextInput,
    title: &'a str,
    focused: bool,
    masked: bool,
    border_style: Style,
}

impl<'a> TextField<'a> {
    /// Create a field titled `title`.
    pub fn new(input: &'a TextInput, title: &'a str) -> Self {
        Self {
            input,
            title,
            focused: false,
            masked: false,
            border_style: Style::default(),
        }
    }

    /// Show the cursor and use `border_style`.
    pub fn focused(mut self, focused: bool, border_style: Style) -> Self {
        self.focused = focused;
        if focused {
            self.border_style = border_style;
        }
        self
    }

    /// Render every character as `*`.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let chars: Vec<char> = if self.masked {
            vec!['*'; self.input.value().chars().count()]
        } else {
            self.input.value().chars().collect()
        };

        if !self.focused {
            return vec![Span::raw(chars.into_iter().collect::<String>())];
        }

        let cursor = self.input.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let under = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let after: String = chars.iter().skip(cursor + 1).collect();

        vec![
            Span::raw(before),
            Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ]
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.spans());
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title)
                    .border_style(self.border_style),
            )
            .render(area, buf);
    }
}
