//! Result region: the rendered outcome of the active query.

use super::constants::DATE_COLUMN_WIDTH;
use super::helpers::{fit_to_width, key_value_line};
use super::styles::Theme;
use crate::state::{ModuleRow, ResultList, ResultView, RowAction};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const UNAPPROVED_BADGE: &str = " [unapproved]";

/// Render the result region into `area`.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    view: &ResultView,
    authenticated: bool,
    theme: &Theme,
) {
    let (title, lines, scroll) = match view {
        ResultView::Idle => (String::new(), vec![], 0),
        ResultView::Loading { title } => (
            title.clone(),
            vec![Line::from(Span::styled("Loading ...", theme.muted))],
            0,
        ),
        ResultView::Error { message } => (
            "Error".to_string(),
            vec![Line::from(Span::styled(message.clone(), theme.error))],
            0,
        ),
        ResultView::Empty { title } => (
            title.clone(),
            vec![Line::from(Span::styled("No modules found.", theme.muted))],
            0,
        ),
        ResultView::Malformed => (
            "Error".to_string(),
            vec![Line::from(Span::styled(
                crate::state::results::MALFORMED_MESSAGE,
                theme.error,
            ))],
            0,
        ),
        ResultView::Results(list) => {
            let inner_width = usize::from(area.width.saturating_sub(2));
            let inner_height = usize::from(area.height.saturating_sub(2));
            let (lines, selected) = list_lines(list, inner_width, authenticated, theme);
            (list.title.clone(), lines, scroll_for(selected, inner_height))
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {title} "), theme.title));

    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}

/// Lines for every row plus the line span of the selected row.
fn list_lines(
    list: &ResultList,
    width: usize,
    authenticated: bool,
    theme: &Theme,
) -> (Vec<Line<'static>>, (usize, usize)) {
    let mut lines = Vec::new();
    let mut selected = (0, 0);

    for (index, row) in list.rows.iter().enumerate() {
        let start = lines.len();
        let is_selected = index == list.selected();
        lines.push(row_line(row, width, is_selected, authenticated, theme));

        if row.expanded {
            for detail in row.details() {
                let value_style = if detail.is_link {
                    theme.link
                } else {
                    theme.module_name
                };
                lines.push(key_value_line(detail.key, detail.value, theme.detail_key, value_style));
            }
            if is_selected {
                let actions = row.actions(authenticated);
                if !actions.is_empty() {
                    lines.push(actions_line(&actions, theme));
                }
            }
        }

        if is_selected {
            selected = (start, lines.len());
        }
    }

    (lines, selected)
}

fn row_line(
    row: &ModuleRow,
    width: usize,
    selected: bool,
    authenticated: bool,
    theme: &Theme,
) -> Line<'static> {
    let marker = if row.expanded { "▾ " } else { "▸ " };
    let badge = if authenticated && !row.module.approved {
        UNAPPROVED_BADGE
    } else {
        ""
    };
    let date_width = usize::from(DATE_COLUMN_WIDTH);
    let name_width = width.saturating_sub(2 + badge.len() + 1 + date_width);

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(fit_to_width(&row.module.name, name_width), theme.module_name),
        Span::styled(badge, theme.unapproved),
        Span::raw(" "),
        Span::styled(format!("{:>date_width$}", row.registered), theme.muted),
    ];

    if selected {
        for span in &mut spans {
            span.style = span.style.patch(theme.selected);
        }
    }
    Line::from(spans)
}

fn actions_line(actions: &[RowAction], theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for action in actions {
        let (key, label) = match action {
            RowAction::Approve => ("A", "approve"),
            RowAction::Remove => ("X", "remove"),
        };
        spans.push(Span::styled(format!("[{key}]"), theme.key));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    Line::from(spans)
}

/// Vertical scroll that keeps the selected row visible, preferring its first line.
fn scroll_for((start, end): (usize, usize), height: usize) -> u16 {
    let offset = end.saturating_sub(height).min(start);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
