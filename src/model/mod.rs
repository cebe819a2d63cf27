//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod module;

// Re-export for convenience
pub use error::{ApiError, AppError};
pub use identifiers::{InvalidModuleId, InvalidSessionToken, ModuleId, SessionToken};
pub use key_action::KeyAction;
pub use module::{format_timestamp, Module, RepoType};
