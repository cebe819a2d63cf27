//! Moderator session state (pure).
//!
//! Authenticated mode is exactly "a session token is held". Everything that is
//! only visible to moderators derives from [`SessionState::is_authenticated`].

use crate::model::SessionToken;
use tracing::info;

/// Phase of the authentication state machine.
///
/// ```text
/// Anonymous --login--> Submitting --granted--> Authenticated
///                      Submitting --denied---> Anonymous (with error text)
/// Authenticated --logout--> Submitting --> Anonymous
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// No session.
    Anonymous,
    /// A login or logout request is in flight.
    Submitting,
    /// A session token is held.
    Authenticated,
}

/// Session token plus the transient state of login/logout requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<SessionToken>,
    submitting: bool,
    login_error: Option<String>,
}

impl SessionState {
    /// Anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> AuthPhase {
        if self.submitting {
            AuthPhase::Submitting
        } else if self.token.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }

    /// Whether moderator controls are shown.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether a login/logout request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The session token, if authenticated.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Inline error from the last failed login.
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// Mark a login or logout request as in flight.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.login_error = None;
    }

    /// Login succeeded.
    pub fn authenticate(&mut self, token: SessionToken) {
        info!("Moderator session started");
        self.token = Some(token);
        self.submitting = false;
        self.login_error = None;
    }

    /// Login failed; stay anonymous and show `message` inline.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.login_error = Some(message.into());
    }

    /// Drop the session. Used on logout whatever the server answered.
    pub fn clear(&mut self) {
        if self.token.is_some() {
            info!("Moderator session ended");
        }
        self.token = None;
        self.submitting = false;
        self.login_error = None;
    }
}
