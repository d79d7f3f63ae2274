//! Color and style configuration.
//!
//! Provides the palette for form, cards, banners and the detail overlay.

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

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== Palette =====

/// Styles for every visual element.
///
/// With colors disabled, only modifiers (bold, reversed, ...) remain, so focus
/// and selection stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Unfocused block borders.
    pub border: Style,
    /// Focused block borders.
    pub focused_border: Style,
    /// Titles and business names.
    pub title: Style,
    /// Selected card highlight.
    pub selected_card: Style,
    /// Star glyphs.
    pub stars: Style,
    /// Secondary text.
    pub muted: Style,
    /// Website links.
    pub link: Style,
    /// "Open Now" badge.
    pub badge_open: Style,
    /// "Closed" badge.
    pub badge_closed: Style,
    /// Buttons and the close control.
    pub button: Style,
    /// Error banner.
    pub error: Style,
    /// Loading indicator.
    pub loading: Style,
    /// Detail section headers.
    pub section_header: Style,
    /// Text cursor cell.
    pub cursor: Style,
}

impl Palette {
    /// Create a palette for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let color = |c: Color| {
            if config.colors_enabled() {
                Style::default().fg(c)
            } else {
                Style::default()
            }
        };

        Self {
            border: color(Color::DarkGray),
            focused_border: color(Color::Cyan).add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            selected_card: color(Color::Yellow).add_modifier(Modifier::BOLD),
            stars: color(Color::Yellow),
            muted: color(Color::Gray).add_modifier(Modifier::DIM),
            link: color(Color::Blue).add_modifier(Modifier::UNDERLINED),
            badge_open: color(Color::Green).add_modifier(Modifier::BOLD),
            badge_closed: color(Color::Red).add_modifier(Modifier::BOLD),
            button: color(Color::Cyan).add_modifier(Modifier::BOLD),
            error: color(Color::Red).add_modifier(Modifier::BOLD),
            loading: color(Color::Cyan).add_modifier(Modifier::ITALIC),
            section_header: color(Color::Magenta).add_modifier(Modifier::BOLD),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Border style for a region depending on focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
