//! Modal info/error dialog.

use super::constants::MODAL_WIDTH_PERCENT;
use super::helpers::centered_rect;
use super::styles::Theme;
use crate::state::{Dialog, DialogKind};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render `dialog` centered over the screen.
pub fn render_dialog(frame: &mut Frame, dialog: &Dialog, theme: &Theme) {
    let style = match dialog.kind {
        DialogKind::Info => theme.info,
        DialogKind::Error => theme.error,
    };

    let mut lines: Vec<Line> = dialog
        .lines
        .iter()
        .map(|text| Line::from(Span::styled(text.as_str(), style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press any key", theme.muted)).alignment(Alignment::Center));

    // Borders, blank line and hint around the message; wrapped lines may need more.
    let height = u16::try_from(dialog.lines.len() + 6).unwrap_or(u16::MAX);
    let area = centered_rect(MODAL_WIDTH_PERCENT, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(dialog.title())
                    .borders(Borders::ALL)
                    .border_style(style),
            )
            .wrap(Wrap { trim: false }),
        area,
    );
}
