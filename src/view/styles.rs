//! Color and text styling.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles for every screen element.
///
/// With colors disabled only modifiers (bold, reversed, underlined) remain,
/// so selection and headings stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header line.
    pub header: Style,
    /// Query title above the results.
    pub title: Style,
    /// Selected result row.
    pub selected: Style,
    /// Module name in a row.
    pub module_name: Style,
    /// Unapproved marker.
    pub unapproved: Style,
    /// Detail labels.
    pub detail_key: Style,
    /// URLs.
    pub link: Style,
    /// Error text.
    pub error: Style,
    /// Informational text.
    pub info: Style,
    /// Secondary text (dates, hints).
    pub muted: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Borders of focused widgets and overlays.
    pub border_focused: Style,
    /// Section headers in the help overlay.
    pub section: Style,
}

impl Theme {
    /// Build the theme for the given color configuration.
    pub fn new(colors: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if !colors.colors_enabled() {
            return Self {
                header: bold,
                title: bold,
                selected: Style::default().add_modifier(Modifier::REVERSED),
                module_name: Style::default(),
                unapproved: bold,
                detail_key: bold,
                link: Style::default().add_modifier(Modifier::UNDERLINED),
                error: bold,
                info: Style::default(),
                muted: Style::default(),
                key: bold,
                border_focused: bold,
                section: bold.add_modifier(Modifier::UNDERLINED),
            };
        }

        Self {
            header: bold.fg(Color::Black).bg(Color::Cyan),
            title: bold.fg(Color::Cyan),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            module_name: Style::default().fg(Color::White),
            unapproved: bold.fg(Color::Magenta),
            detail_key: Style::default().fg(Color::Yellow),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            error: bold.fg(Color::Red),
            info: Style::default().fg(Color::Green),
            muted: Style::default().fg(Color::Gray),
            key: bold.fg(Color::Yellow),
            border_focused: Style::default().fg(Color::Cyan),
            section: bold.fg(Color::Cyan),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::new(true))
    }
}

// ===== Tests =====
