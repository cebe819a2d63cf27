//! Modal dialogs (pure).

/// Dialog flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Confirmation of a completed action.
    Info,
    /// A failed action.
    Error,
}

/// A modal message. Any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Flavour.
    pub kind: DialogKind,
    /// Message lines.
    pub lines: Vec<String>,
}

impl Dialog {
    /// Informational dialog. Embedded newlines split into lines.
    pub fn info(text: impl AsRef<str>) -> Self {
        Self {
            kind: DialogKind::Info,
            lines: text.as_ref().lines().map(str::to_string).collect(),
        }
    }

    /// Error dialog with a single message.
    pub fn error(text: impl AsRef<str>) -> Self {
        Self {
            kind: DialogKind::Error,
            lines: text.as_ref().lines().map(str::to_string).collect(),
        }
    }

    /// Error dialog listing several messages, one per line.
    pub fn error_list(messages: &[String]) -> Self {
        if messages.len() == 1 {
            return Self::error(&messages[0]);
        }
        Self {
            kind: DialogKind::Error,
            lines: messages.iter().map(|m| format!("• {m}")).collect(),
        }
    }

    /// Title for the dialog frame.
    pub fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::Info => " Info ",
            DialogKind::Error => " Error ",
        }
    }
}
