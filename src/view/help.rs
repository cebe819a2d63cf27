//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect_percent, empty_line};
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Queries",
        &[
            ("/ Ctrl+f", "Search modules"),
            ("a", "List all modules"),
            ("u", "List unapproved modules (moderators)"),
            ("c", "Refresh module count"),
        ],
    ),
    (
        "Sorting & Paging",
        &[
            ("n", "Sort by name (again to flip)"),
            ("d", "Sort by date (again to flip)"),
            ("h ← PgUp", "Previous page"),
            ("l → PgDn", "Next page"),
            (": g", "Go to page"),
        ],
    ),
    (
        "Results",
        &[
            ("j ↓", "Select next module"),
            ("k ↑", "Select previous module"),
            ("Enter Space", "Show or hide details"),
        ],
    ),
    (
        "Moderation",
        &[
            ("L", "Log in / log out"),
            ("A", "Approve selected module"),
            ("X", "Remove selected module"),
        ],
    ),
    (
        "Registration",
        &[
            ("R", "Open registration form"),
            ("Tab", "Next field"),
            ("← →", "Change location"),
            ("Enter", "Submit"),
        ],
    ),
    (
        "Application",
        &[
            ("Esc", "Close dialog, form or prompt"),
            ("?", "Toggle this help"),
            ("q Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
///
/// `scroll_offset` is the first content line shown.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16, theme: &Theme) {
    let popup_area = centered_rect_percent(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.border_focused),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        theme.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Number of content lines, for clamping the scroll offset.
pub fn help_line_count() -> u16 {
    let lines: usize = SHORTCUTS.iter().map(|(_, keys)| keys.len() + 2).sum();
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (category, keys) in SHORTCUTS {
        lines.push(Line::from(Span::styled(*category, theme.section)));
        for (key, description) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme.key),
                Span::raw(*description),
            ]));
        }
        lines.push(empty_line());
    }
    lines
}

// ===== Tests =====
