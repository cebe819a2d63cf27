//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI. Requests to
//! the registry are returned as values ([`Outgoing`]) for the shell to send.

pub mod app_state;
pub mod controller;
pub mod dialog;
pub mod input_handler;
pub mod page;
pub mod query;
pub mod registration;
pub mod results;
pub mod session;
pub mod text_input;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use controller::{Controller, Outgoing, Pending, Purpose, RequestTicket};
pub use dialog::{Dialog, DialogKind};
pub use input_handler::handle_field_key;
pub use page::PageState;
pub use query::{QuerySpec, SortKey, SortState};
pub use registration::{ModLocation, RegisterField, RegistrationForm};
pub use results::{ModuleRow, ResultList, ResultView, RowAction};
pub use session::{AuthPhase, SessionState};
pub use text_input::TextInput;
