//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod dialog;
mod forms;
mod help;
mod helpers;
mod layout;
mod result_list;
mod styles;
mod text_field;

pub use help::render_help_overlay;
pub use helpers::{empty_line, key_value_line};
pub use layout::render_layout;
pub use styles::{ColorConfig, Theme};
pub use text_field::TextField;

use crate::api::{Dispatcher, DispatchMode, Transport};
use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{handle_field_key, AppState, Outgoing, Pending};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => AppError::Terminal(e),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    dispatcher: Dispatcher<Pending>,
    key_bindings: KeyBindings,
    theme: Theme,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. Requests run on
    /// background threads through `transport`.
    pub fn new(transport: Arc<dyn Transport>, options: &RunOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state: AppState::new(options.page_size),
            dispatcher: Dispatcher::new(transport, DispatchMode::Background),
            key_bindings: KeyBindings::default(),
            theme: Theme::new(options.colors),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after every key, every
    /// resize and whenever a reply arrives.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.pump();
                        self.draw()?;
                        continue;
                    }
                    Event::Resize(..) => {
                        self.draw()?;
                        continue;
                    }
                    _ => {}
                }
            }

            if self.pump() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Issue the startup requests plus an optional initial search.
    pub fn start(&mut self, initial_search: Option<&str>) {
        let out = self.app_state.startup();
        self.send(out);

        if let Some(text) = initial_search.filter(|t| !t.trim().is_empty()) {
            self.app_state.search_input = crate::state::TextInput::with_value(text);
            let out = self.app_state.controller_mut().search(text);
            self.send(out);
        }
    }

    /// Hand requests to the dispatcher.
    fn send(&mut self, outgoing: Vec<Outgoing>) {
        for Outgoing { pending, request } in outgoing {
            debug!(
                endpoint = %request.endpoint,
                ticket = pending.ticket.get(),
                "Sending request"
            );
            self.dispatcher.dispatch(pending, request);
        }
    }

    /// Feed every finished request to the state, sending any follow-ups.
    ///
    /// Returns true if anything arrived.
    fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(completion) = self.dispatcher.try_next() {
            changed = true;
            match &completion.result {
                Ok(_) => debug!(endpoint = %completion.request.endpoint, "Reply received"),
                Err(e) => warn!(endpoint = %completion.request.endpoint, error = %e, "Request failed"),
            }
            let out = self.app_state.on_completion(completion.tag, completion.result);
            self.send(out);
        }
        changed
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        // An open dialog swallows the next key
        if self.app_state.controller().dialog().is_some() {
            self.app_state.controller_mut().dismiss_dialog();
            return false;
        }

        if self.app_state.focus.captures_text() {
            let out = handle_field_key(&mut self.app_state, key);
            self.send(out);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if action == KeyAction::Quit {
            info!("Quit requested");
            return true;
        }

        let out = self.app_state.apply_action(action);
        self.send(out);
        false
    }

    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        let max_offset = help::help_line_count().saturating_sub(1);
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => self.app_state.toggle_help(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.app_state.help_scroll_offset =
                    (self.app_state.help_scroll_offset + 1).min(max_offset);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.app_state.help_scroll_offset =
                    self.app_state.help_scroll_offset.saturating_sub(1);
            }
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, theme);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        dispatcher: Dispatcher<Pending>,
        key_bindings: KeyBindings,
        theme: Theme,
    ) -> Self {
        Self {
            terminal,
            app_state,
            dispatcher,
            key_bindings,
            theme,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a key, then deliver every reply it caused.
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        let quit = self.handle_key(key);
        self.pump();
        quit
    }

    /// Deliver pending replies (test-only accessor)
    pub(crate) fn pump_test(&mut self) -> bool {
        self.pump()
    }

    /// Render a single frame to the backend (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Startup options for the TUI, resolved from config and CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Modules per page.
    pub page_size: usize,
    /// Search to run right after startup.
    pub initial_search: Option<String>,
    /// Whether to use colors.
    pub colors: ColorConfig,
}

/// Initialize and run the TUI application against `transport`
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by caller before calling this
/// function.
pub fn run_with_transport(
    transport: Arc<dyn Transport>,
    options: RunOptions,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(transport, &options)?;
    app.start(options.initial_search.as_deref());

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
