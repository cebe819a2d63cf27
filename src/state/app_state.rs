//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. The registry
//! state proper lives in the [`Controller`]; this layer adds focus, the text
//! fields that feed it and the help overlay.

use crate::model::{ApiError, KeyAction};
use crate::state::controller::{Controller, Outgoing, Pending};
use crate::state::query::SortKey;
use crate::state::text_input::TextInput;
use serde_json::Value;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Focus**: which widget receives keys (result list, one of the text
///   prompts, or a form)
/// - **Dialog**: an info or error message that swallows the next key
/// - **Help**: overlay listing key bindings
///
/// Every transition that needs the registry returns the requests to send;
/// the shell dispatches them and feeds the replies to
/// [`AppState::on_completion`].
#[derive(Debug, Clone)]
pub struct AppState {
    controller: Controller,

    /// Which widget currently has keyboard focus.
    pub focus: FocusPane,

    /// Search prompt. Keeps its text between searches.
    pub search_input: TextInput,

    /// Page-number prompt.
    pub page_input: TextInput,

    /// Moderator password field.
    pub password_input: TextInput,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Scroll offset for the help overlay (lines from top).
    pub help_scroll_offset: u16,
}

impl AppState {
    /// Create state with an idle controller using `page_size`.
    pub fn new(page_size: usize) -> Self {
        Self {
            controller: Controller::new(page_size),
            focus: FocusPane::Results,
            search_input: TextInput::new(),
            page_input: TextInput::new(),
            password_input: TextInput::new(),
            help_visible: false,
            help_scroll_offset: 0,
        }
    }

    /// The registry controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Mutable registry controller.
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Initial requests.
    pub fn startup(&mut self) -> Vec<Outgoing> {
        self.controller.startup()
    }

    /// Toggle the help overlay, resetting its scroll.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll_offset = 0;
    }

    /// Return focus to the result list.
    pub fn focus_results(&mut self) {
        self.focus = FocusPane::Results;
    }

    /// Apply a bound action while the result list has focus.
    ///
    /// Moderator-only actions are ignored unless a session is held. Paging
    /// and sorting are ignored unless results are showing.
    pub fn apply_action(&mut self, action: KeyAction) -> Vec<Outgoing> {
        if action.requires_auth() && !self.controller.is_authenticated() {
            return Vec::new();
        }
        let controls = self.controller.view().shows_controls();

        match action {
            KeyAction::StartSearch => {
                self.focus = FocusPane::SearchInput;
                Vec::new()
            }
            KeyAction::ListAll => self.controller.list_all(),
            KeyAction::ListUnapproved => self.controller.list_unapproved(),
            KeyAction::SortByName if controls => self.controller.sort_by(SortKey::Name),
            KeyAction::SortByDate if controls => {
                self.controller.sort_by(SortKey::TimeRegistered)
            }
            KeyAction::PrevPage if controls => self.controller.change_page(-1),
            KeyAction::NextPage if controls => self.controller.change_page(1),
            KeyAction::GotoPage if controls => {
                self.page_input = TextInput::new();
                self.focus = FocusPane::PageInput;
                Vec::new()
            }
            KeyAction::SelectNext => {
                if let Some(list) = self.controller.view_mut().list_mut() {
                    list.select_next();
                }
                Vec::new()
            }
            KeyAction::SelectPrev => {
                if let Some(list) = self.controller.view_mut().list_mut() {
                    list.select_prev();
                }
                Vec::new()
            }
            KeyAction::ToggleDetails => {
                if let Some(list) = self.controller.view_mut().list_mut() {
                    list.toggle_selected();
                }
                Vec::new()
            }
            KeyAction::Approve => self.controller.approve_selected(),
            KeyAction::Remove => self.controller.remove_selected(),
            KeyAction::ToggleLogin => {
                if self.controller.is_authenticated() {
                    self.controller.logout()
                } else {
                    self.password_input = TextInput::new();
                    self.focus = FocusPane::Login;
                    Vec::new()
                }
            }
            KeyAction::Register => {
                self.focus = FocusPane::Register;
                Vec::new()
            }
            KeyAction::RefreshCount => vec![self.controller.count_modules()],
            KeyAction::Dismiss => {
                self.controller.dismiss_dialog();
                Vec::new()
            }
            KeyAction::Help => {
                self.toggle_help();
                Vec::new()
            }
            KeyAction::SortByName
            | KeyAction::SortByDate
            | KeyAction::PrevPage
            | KeyAction::NextPage
            | KeyAction::GotoPage
            | KeyAction::Quit => Vec::new(),
        }
    }

    /// Feed a reply to the controller.
    ///
    /// A successful login closes the login form and clears the password.
    pub fn on_completion(
        &mut self,
        pending: Pending,
        result: Result<Value, ApiError>,
    ) -> Vec<Outgoing> {
        let out = self.controller.on_completion(pending, result);
        if self.focus == FocusPane::Login && self.controller.is_authenticated() {
            self.password_input = TextInput::new();
            self.focus = FocusPane::Results;
        }
        out
    }
}

// ===== FocusPane =====

/// Which widget has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Result list; key bindings apply.
    #[default]
    Results,

    /// Search prompt. Enter runs a full-text search.
    SearchInput,

    /// Page-number prompt. Enter jumps to the typed page.
    PageInput,

    /// Moderator login form.
    Login,

    /// Module registration form.
    Register,
}

impl FocusPane {
    /// Whether a text field or form captures typed characters.
    pub fn captures_text(self) -> bool {
        !matches!(self, FocusPane::Results)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
