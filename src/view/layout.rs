//! Screen layout rendering.
//!
//! Header, search prompt, result region, pager and status bar stacked
//! vertically, with forms, dialogs and help drawn over them.

use super::constants::{HEADER_HEIGHT, PAGER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::dialog::render_dialog;
use super::forms::{render_login_form, render_register_form};
use super::help::render_help_overlay;
use super::result_list::render_results;
use super::styles::Theme;
use super::text_field::TextField;
use crate::state::{AppState, FocusPane, PageState, SortState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let [header_area, search_area, results_area, pager_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_INPUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(PAGER_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    let controller = state.controller();

    render_header(frame, header_area, state, theme);

    frame.render_widget(
        TextField::new(&state.search_input, "Search")
            .focused(state.focus == FocusPane::SearchInput, theme.border_focused),
        search_area,
    );

    render_results(
        frame,
        results_area,
        controller.view(),
        controller.is_authenticated(),
        theme,
    );

    if controller.view().shows_controls() {
        render_pager(frame, pager_area, state, theme);
    }

    render_status_bar(frame, status_area, state, theme);

    match state.focus {
        FocusPane::Login => {
            render_login_form(frame, &state.password_input, controller.session(), theme)
        }
        FocusPane::Register => render_register_form(frame, controller.registration(), theme),
        FocusPane::Results | FocusPane::SearchInput | FocusPane::PageInput => {}
    }

    if let Some(dialog) = controller.dialog() {
        render_dialog(frame, dialog, theme);
    }

    if state.help_visible {
        render_help_overlay(frame, state.help_scroll_offset, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let controller = state.controller();
    let count = match controller.module_count() {
        Some(count) => format!("{count} modules"),
        None => "counting modules ...".to_string(),
    };
    let role = if controller.is_authenticated() {
        "moderator"
    } else {
        "anonymous"
    };

    let mut spans = vec![
        Span::styled(" modreg ", theme.header),
        Span::styled(format!(" {count} "), theme.muted),
        Span::styled(format!("· {role}"), theme.muted),
    ];
    if controller.is_loading() {
        spans.push(Span::styled(" · loading ...", theme.key));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_pager(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let controller = state.controller();
    let mut spans = page_spans(controller.page(), theme);
    let sorted = controller
        .last_search()
        .and_then(|spec| spec.sort_key())
        .is_some();
    if sorted {
        spans.push(Span::styled("  Sort: ", theme.muted));
        spans.push(Span::styled(sort_label(controller.sort()), theme.title));
    }

    if state.focus == FocusPane::PageInput {
        spans.push(Span::styled("  Go to page: ", theme.key));
        spans.push(Span::raw(state.page_input.value().to_string()));
        spans.push(Span::styled(" ", theme.selected));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn page_spans(page: &PageState, theme: &Theme) -> Vec<Span<'static>> {
    let prev = if page.has_prev() { "◀ " } else { "  " };
    let next = if page.has_next() { " ▶" } else { "  " };
    vec![
        Span::styled(format!(" {prev}"), theme.key),
        Span::raw(format!(
            "Page {} of {}",
            page.current() + 1,
            page.page_count()
        )),
        Span::styled(next.to_string(), theme.key),
    ]
}

/// Sort key with an arrow for the direction.
fn sort_label(sort: SortState) -> String {
    let arrow = if sort.desc() { "↓" } else { "↑" };
    format!("{} {arrow}", sort.key().label())
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints: &[(&str, &str)] = match state.focus {
        FocusPane::SearchInput => &[("Enter", "search"), ("Esc", "cancel")],
        FocusPane::PageInput => &[("Enter", "go"), ("Esc", "cancel")],
        FocusPane::Login | FocusPane::Register => &[("Esc", "close")],
        FocusPane::Results if state.controller().is_authenticated() => &[
            ("/", "search"),
            ("a", "all"),
            ("u", "unapproved"),
            ("A", "approve"),
            ("X", "remove"),
            ("L", "log out"),
            ("?", "help"),
            ("q", "quit"),
        ],
        FocusPane::Results => &[
            ("/", "search"),
            ("a", "all"),
            ("n/d", "sort"),
            ("h/l", "page"),
            ("R", "register"),
            ("L", "log in"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key}"), theme.key));
        spans.push(Span::styled(format!(" {action} "), theme.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
