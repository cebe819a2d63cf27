//! Small rendering helpers shared by widgets.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `"  Key: value"` with separately styled key and value.
pub fn key_value_line(
    key: &str,
    value: impl Into<String>,
    key_style: Style,
    value_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key}: "), key_style),
        Span::styled(value.into(), value_style),
    ])
}

/// Rect centered in `area` with the given width percentage and absolute height.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width * percent_x / 100).max(1);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Rect centered in `area` with width and height given as percentages.
pub fn centered_rect_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    centered_rect(percent_x, area.height * percent_y / 100, area)
}

/// Cut `text` to at most `width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate or right-pad `text` to exactly `width` display columns.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}
