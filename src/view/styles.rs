//! Colour palette for the dashboard.
//!
//! Status colours follow the usual traffic-light scheme (success green,
//! error red, warning yellow). Every style collapses to the terminal default
//! when colours are disabled; modifiers such as bold and reverse are kept so
//! the UI stays readable without colour.

use crate::model::Status;
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
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colours on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Colours used for breakdown slices, cycled by position.
const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// Styles for every themed element of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: ColorConfig,
}

impl Palette {
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    pub fn status(self, status: Status) -> Style {
        self.fg(match status {
            Status::Success => Color::Green,
            Status::Error => Color::Red,
            Status::Warning => Color::Yellow,
        })
    }

    /// Titles, section headers and the active sort column.
    pub fn accent(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn muted(self) -> Style {
        self.fg(Color::DarkGray)
    }

    pub fn key_hint(self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Pane border, highlighted when the pane has focus.
    pub fn border(self, focused: bool) -> Style {
        if focused {
            self.fg(Color::Yellow)
        } else {
            self.fg(Color::Gray)
        }
    }

    /// The table row under the cursor.
    pub fn highlight(self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub fn error_text(self) -> Style {
        self.fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Colour of the `index`-th slice in the subcommand breakdown.
    pub fn series(self, index: usize) -> Style {
        self.fg(SERIES_COLORS[index % SERIES_COLORS.len()])
    }

    /// Line and bar colour of the charts.
    pub fn chart(self) -> Style {
        self.fg(Color::Cyan)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}

/// One-glyph status marker used in the table and detail viewer.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
    }
}

// ===== Tests =====
