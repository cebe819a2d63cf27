//! Tests for prompt and form key handling.

use super::*;
use crate::api::Endpoint;
use crate::state::controller::Purpose;
use crate::state::registration::ModLocation;
use serde_json::json;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        assert!(handle_field_key(state, key(KeyCode::Char(ch))).is_empty());
    }
}

/// State showing one page of `total` results at page size 2.
fn with_results(total: u64) -> AppState {
    let mut state = AppState::new(2);
    let refresh = state.controller_mut().list_all().remove(0);
    let search = state
        .on_completion(refresh.pending, Ok(json!({"status": "ok", "count": total})))
        .remove(0);
    state.on_completion(
        search.pending,
        Ok(json!({"status": "ok", "modules": [
            {"_id": "1", "name": "a", "timeRegistered": 0}
        ]})),
    );
    state
}

#[test]
fn edit_text_ignores_control_chars() {
    let mut input = TextInput::new();
    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert!(!edit_text(&mut input, ctrl_a));
    assert!(edit_text(&mut input, key(KeyCode::Char('a'))));
    assert_eq!(input.value(), "a");
}

#[test]
fn enter_in_search_prompt_searches_and_returns_focus() {
    let mut state = AppState::new(15);
    state.focus = FocusPane::SearchInput;
    type_text(&mut state, "mongo");

    let out = handle_field_key(&mut state, key(KeyCode::Enter));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].pending.purpose, Purpose::RefreshCount);
    assert_eq!(out[0].request.param("query"), Some("mongo"));
    assert_eq!(state.focus, FocusPane::Results);
    assert_eq!(state.search_input.value(), "mongo", "prompt keeps its text");
}

#[test]
fn esc_in_search_prompt_cancels() {
    let mut state = AppState::new(15);
    state.focus = FocusPane::SearchInput;
    type_text(&mut state, "x");
    assert!(handle_field_key(&mut state, key(KeyCode::Esc)).is_empty());
    assert_eq!(state.focus, FocusPane::Results);
}

#[test]
fn page_prompt_accepts_digits_only_and_jumps() {
    let mut state = with_results(10);
    state.focus = FocusPane::PageInput;
    type_text(&mut state, "x3y");
    assert_eq!(state.page_input.value(), "3");

    let out = handle_field_key(&mut state, key(KeyCode::Enter));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].request.param("skip"), Some("4"));
    assert_eq!(state.controller().page().current(), 2);
    assert_eq!(state.focus, FocusPane::Results);
}

#[test]
fn empty_page_prompt_does_nothing() {
    let mut state = with_results(10);
    state.focus = FocusPane::PageInput;
    assert!(handle_field_key(&mut state, key(KeyCode::Enter)).is_empty());
    assert_eq!(state.focus, FocusPane::Results);
}

#[test]
fn login_submits_password_and_closes_on_success() {
    let mut state = AppState::new(15);
    state.focus = FocusPane::Login;
    assert!(handle_field_key(&mut state, key(KeyCode::Enter)).is_empty(), "empty password");

    type_text(&mut state, "pw");
    let mut out = handle_field_key(&mut state, key(KeyCode::Enter));
    let login = out.remove(0);
    assert_eq!(login.request.endpoint, Endpoint::Login);
    assert_eq!(login.request.param("password"), Some("pw"));

    state.on_completion(login.pending, Ok(json!({"status": "ok", "sessionID": "tok"})));
    assert_eq!(state.focus, FocusPane::Results);
    assert!(state.password_input.is_empty());
}

#[test]
fn failed_login_keeps_form_open() {
    let mut state = AppState::new(15);
    state.focus = FocusPane::Login;
    type_text(&mut state, "bad");
    let login = handle_field_key(&mut state, key(KeyCode::Enter)).remove(0);

    state.on_completion(login.pending, Ok(json!({"status": "denied"})));
    assert_eq!(state.focus, FocusPane::Login);
    assert!(state.controller().session().login_error().is_some());
}

#[test]
fn register_form_cycles_location_and_reveals_url() {
    let mut state = AppState::new(15);
    state.focus = FocusPane::Register;
    type_text(&mut state, "mod");
    handle_field_key(&mut state, key(KeyCode::Tab));
    handle_field_key(&mut state, key(KeyCode::Right));
    handle_field_key(&mut state, key(KeyCode::Tab));
    type_text(&mut state, "http://r");

    let form = state.controller().registration();
    assert_eq!(form.location, ModLocation::MavenOther);
    assert_eq!(form.focus, RegisterField::Url);
    assert_eq!(form.url.value(), "http://r");

    let out = handle_field_key(&mut state, key(KeyCode::Enter));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].request.param("modURL"), Some("http://r"));
    assert_eq!(out[0].request.param("modName"), Some("mod"));
}
