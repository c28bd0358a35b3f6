//! Leveled log entries built from scanned lines.

use std::fmt;

// ===== LogLevel =====

/// Severity classification of a log line.
///
/// Derived from the first character of the line when colouring is on.
/// `None` means the line was not classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LogLevel {
    #[default]
    None,
    Verbose,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fail,
}

impl LogLevel {
    /// Classify a line by its leading character.
    ///
    /// The table is case sensitive:
    /// `V` Verbose, `T` Trace, `D` Debug, `I` Info, `W` Warn, `E` Error,
    /// `F` Fail. Anything else, including an empty line, is `None`.
    pub fn classify(text: &str) -> Self {
        match text.chars().next() {
            Some('V') => LogLevel::Verbose,
            Some('T') => LogLevel::Trace,
            Some('D') => LogLevel::Debug,
            Some('I') => LogLevel::Info,
            Some('W') => LogLevel::Warn,
            Some('E') => LogLevel::Error,
            Some('F') => LogLevel::Fail,
            _ => LogLevel::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Verbose => "verbose",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fail => "fail",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== LogEntry =====

/// One displayable log line: its level and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    level: LogLevel,
    text: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Build an entry, classifying the text only when `colorize` is set.
    pub fn from_text(text: impl Into<String>, colorize: bool) -> Self {
        let text = text.into();
        let level = if colorize {
            LogLevel::classify(&text)
        } else {
            LogLevel::None
        };
        Self { level, text }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }
}
