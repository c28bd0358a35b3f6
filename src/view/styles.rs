//! Level styling.
//!
//! Maps each [`LogLevel`] to a terminal style. Lines with `LogLevel::None`
//! (including every line while colouring is off) use the default style.

use crate::model::LogLevel;
use ratatui::style::{Color, Modifier, Style};

/// Whether terminal colours may be used at all.
///
/// Determined by the `--no-color` CLI flag and the `NO_COLOR` environment
/// variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colours are off if `no_color_flag` is set or `NO_COLOR` is present,
    /// whatever its value.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

#[derive(Debug, Clone)]
pub struct LevelStyles {
    colors: bool,
}

impl LevelStyles {
    pub fn with_color_config(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    /// Style for entries of `level`.
    pub fn style_for_level(&self, level: LogLevel) -> Style {
        if !self.colors {
            return Style::default();
        }
        match level {
            LogLevel::None => Style::default(),
            LogLevel::Verbose => Style::default().fg(Color::DarkGray),
            LogLevel::Trace => Style::default().fg(Color::Gray),
            LogLevel::Debug => Style::default().fg(Color::Blue),
            LogLevel::Info => Style::default().fg(Color::Green),
            LogLevel::Warn => Style::default().fg(Color::Yellow),
            LogLevel::Error => Style::default().fg(Color::Red),
            LogLevel::Fail => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Style of the status line.
    pub fn status_bar(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style of an error shown in the status line.
    pub fn status_error(&self) -> Style {
        if self.colors {
            self.status_bar().fg(Color::Red)
        } else {
            self.status_bar()
        }
    }
}

impl Default for LevelStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
