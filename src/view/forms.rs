//! Login and registration forms.
//!
//! Both render as centered modals over the result list while they have focus.

use super::constants::MODAL_WIDTH_PERCENT;
use super::helpers::centered_rect;
use super::styles::Theme;
use super::text_field::TextField;
use crate::state::{AuthPhase, ModLocation, RegisterField, RegistrationForm, SessionState, TextInput};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the moderator login form.
pub fn render_login_form(
    frame: &mut Frame,
    password: &TextInput,
    session: &SessionState,
    theme: &Theme,
) {
    let area = centered_rect(MODAL_WIDTH_PERCENT, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Moderator login ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [field_area, message_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    frame.render_widget(
        TextField::new(password, "Password")
            .masked()
            .focused(true, theme.border_focused),
        field_area,
    );

    let message = match (session.phase(), session.login_error()) {
        (AuthPhase::Submitting, _) => Line::from(Span::styled("Logging in ...", theme.muted)),
        (_, Some(error)) => Line::from(Span::styled(error.to_string(), theme.error)),
        _ => Line::from(""),
    };
    frame.render_widget(Paragraph::new(message), message_area);

    frame.render_widget(
        Paragraph::new(hint_line(&[("Enter", "log in"), ("Esc", "cancel")], theme)),
        hint_area,
    );
}

/// Render the module registration form.
pub fn render_register_form(frame: &mut Frame, form: &RegistrationForm, theme: &Theme) {
    let area = centered_rect(MODAL_WIDTH_PERCENT, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Register a module ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, location_area, url_area, submit_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    frame.render_widget(
        TextField::new(&form.name, "Module name")
            .focused(form.focus == RegisterField::Name, theme.border_focused),
        name_area,
    );

    frame.render_widget(
        Paragraph::new(location_line(form, theme)),
        location_area,
    );

    render_additional_field(frame, form, url_area, theme);

    let submit_style = if form.is_submitting() {
        theme.muted
    } else {
        theme.key
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", form.submit_label()),
            submit_style,
        ))),
        submit_area,
    );

    frame.render_widget(
        Paragraph::new(hint_line(
            &[("Tab", "next field"), ("←/→", "location"), ("Enter", "submit"), ("Esc", "close")],
            theme,
        )),
        hint_area,
    );
}

fn location_line(form: &RegistrationForm, theme: &Theme) -> Line<'static> {
    let focused = form.focus == RegisterField::Location;
    let mut spans = vec![Span::styled("Location: ", theme.detail_key)];
    for location in ModLocation::ALL {
        let label = format!(" {} ", location.label());
        if location == form.location {
            let style = if focused { theme.selected } else { theme.title };
            spans.push(Span::styled(format!("<{label}>"), style));
        } else {
            spans.push(Span::styled(label, theme.muted));
        }
    }
    Line::from(spans)
}

fn render_additional_field(frame: &mut Frame, form: &RegistrationForm, area: Rect, theme: &Theme) {
    let label = form.location.additional_label();
    if form.location.requires_url() {
        frame.render_widget(
            TextField::new(&form.url, label)
                .focused(form.focus == RegisterField::Url, theme.border_focused),
            area,
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, theme.muted))).block(
                Block::default().borders(Borders::ALL),
            ),
            area,
        );
    }
}

fn hint_line(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key}"), theme.key));
        spans.push(Span::styled(format!(" {action} "), theme.muted));
    }
    Line::from(spans)
}
