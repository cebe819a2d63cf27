//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Requests go to a [`ScriptedTransport`] and are executed
//! inline, so every reply has been applied by the time a key call returns.

use crate::api::{Dispatcher, DispatchMode, Endpoint, ScriptedTransport};
use crate::config::keybindings::KeyBindings;
use crate::state::AppState;
use crate::view::{Theme, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use std::sync::Arc;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// A registry module document as the server sends it.
pub fn module_json(id: &str, name: &str, time: i64, approved: bool) -> Value {
    json!({
        "_id": id,
        "name": name,
        "timeRegistered": time,
        "approved": approved,
        "description": format!("{name} description"),
        "author": "alice",
        "licenses": ["MIT"],
        "homepage": format!("https://example.org/{name}"),
        "repoType": "mavenCentral",
    })
}

/// Scripted registry with three approved modules and one pending one.
///
/// Count and listing replies are fallbacks, so any number of refreshes
/// succeed. Login accepts any password.
pub fn sample_registry() -> Arc<ScriptedTransport> {
    let transport = ScriptedTransport::new();
    transport
        .always(Endpoint::Count, json!({"status": "ok", "count": 3}))
        .always(
            Endpoint::List,
            json!({"status": "ok", "modules": [
                module_json("m3", "gamma", 1_700_000_300_000, true),
                module_json("m2", "beta", 1_700_000_200_000, true),
                module_json("m1", "alpha", 1_700_000_100_000, true),
            ]}),
        )
        .always(
            Endpoint::Unapproved,
            json!({"status": "ok", "modules": [
                module_json("p1", "pending-mod", 1_700_000_400_000, false),
            ]}),
        )
        .always(Endpoint::Login, json!({"status": "ok", "sessionID": "s3cr3t"}))
        .always(Endpoint::Logout, json!({"status": "ok"}));
    Arc::new(transport)
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    transport: Arc<ScriptedTransport>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Start the app against `transport` with default terminal size (80x24).
    ///
    /// Startup requests have already been answered when this returns.
    pub fn start(transport: Arc<ScriptedTransport>) -> Self {
        Self::start_with_size(transport, 80, 24)
    }

    /// Start the app with a custom terminal size.
    pub fn start_with_size(transport: Arc<ScriptedTransport>, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let dispatcher = Dispatcher::new(transport.clone(), DispatchMode::Inline);

        let mut app = TuiApp::new_for_test(
            terminal,
            AppState::new(15),
            dispatcher,
            KeyBindings::default(),
            Theme::default(),
        );
        app.start(None);
        app.pump_test();

        Self {
            app,
            transport,
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// The scripted transport, for queueing replies and inspecting requests.
    pub fn transport(&self) -> &ScriptedTransport {
        &self.transport
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
