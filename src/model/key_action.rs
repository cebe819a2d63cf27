//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Queries
    /// Focus the search input. Default: / or Ctrl+f
    StartSearch,
    /// List all modules. Default: a
    ListAll,
    /// List unapproved modules (moderators only). Default: u
    ListUnapproved,

    // Sorting
    /// Sort by name, or flip direction if already sorted by name. Default: n
    SortByName,
    /// Sort by registration date, or flip direction if already. Default: d
    SortByDate,

    // Paging
    /// Previous result page. Default: h/←
    PrevPage,
    /// Next result page. Default: l/→
    NextPage,
    /// Type a page number to jump to. Default: :
    GotoPage,

    // Result list
    /// Select next row. Default: j/↓
    SelectNext,
    /// Select previous row. Default: k/↑
    SelectPrev,
    /// Expand or collapse the selected row's details. Default: Enter/Space
    ToggleDetails,

    // Moderation
    /// Approve the selected module. Default: A
    Approve,
    /// Remove the selected module. Default: X
    Remove,

    // Forms
    /// Open the login form, or log out when authenticated. Default: L
    ToggleLogin,
    /// Open the registration form. Default: R
    Register,

    // Application
    /// Re-fetch the total module count. Default: c
    RefreshCount,
    /// Close dialogs, overlays and forms. Default: Esc
    Dismiss,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action is only offered to authenticated moderators.
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            KeyAction::ListUnapproved | KeyAction::Approve | KeyAction::Remove
        )
    }
}
