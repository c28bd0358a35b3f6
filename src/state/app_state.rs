//! Application state for the pager.
//!
//! AppState owns the log source and the display buffer that mirrors its
//! window, plus the viewport and status line. Handlers in
//! [`scroll_handler`](crate::state::scroll_handler) transform it in response
//! to key actions and file change notifications.

use crate::model::{LogEntry, PositionError};
use crate::source::LogLineSource;
use crate::state::DisplayBuffer;
use std::time::{Duration, Instant};

/// Minimum gap between two edge-of-file notices.
pub const EDGE_NOTICE_INTERVAL: Duration = Duration::from_secs(2);

// ===== AppState =====

/// Root UI state.
///
/// # Invariants
///
/// - `buffer.len() == source.effective_spread()`
/// - `top <= buffer.len()`
#[derive(Debug)]
pub struct AppState {
    source: LogLineSource,

    /// Entries currently held in the window, top first.
    pub buffer: DisplayBuffer,

    /// Index into `buffer` of the first visible entry.
    pub top: usize,

    /// Number of rows available for entries.
    pub height: usize,

    /// Jump to the end whenever the file changes.
    pub follow: bool,

    /// One-line message shown under the entries.
    pub status: Option<StatusMessage>,

    last_edge_notice: Option<Instant>,

    pub should_quit: bool,
}

/// Status line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

impl AppState {
    /// Create state over `source` and fill the window from its current
    /// position.
    pub fn new(mut source: LogLineSource, height: usize) -> Self {
        let mut buffer = DisplayBuffer::new();
        if source.effective_spread() == 0 {
            buffer.replace_with(source.fill_down());
        } else {
            buffer.replace_with(source.inner_entries());
        }

        Self {
            source,
            buffer,
            top: 0,
            height: height.max(1),
            follow: false,
            status: None,
            last_edge_notice: None,
            should_quit: false,
        }
    }

    pub fn source(&self) -> &LogLineSource {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut LogLineSource {
        &mut self.source
    }

    /// Split borrow for loads that move the source and the buffer together.
    pub(crate) fn parts_mut(&mut self) -> (&mut LogLineSource, &mut DisplayBuffer) {
        (&mut self.source, &mut self.buffer)
    }

    /// Entries on screen, top first.
    pub fn visible_entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.buffer.visible(self.top, self.height)
    }

    /// Largest `top` that still fills the screen from the buffer.
    pub fn max_top(&self) -> usize {
        self.buffer.len().saturating_sub(self.height)
    }

    /// Rows the viewer keeps loaded beyond the screen in either direction.
    pub fn load_margin(&self) -> usize {
        2 * self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.top = self.top.min(self.max_top());
    }

    // ===== Positioning =====

    /// Start viewing at the beginning of the file.
    pub fn jump_to_top(&mut self) {
        self.source.jump_to_beginning_of_file();
        let entries = self.source.fill_down();
        self.buffer.replace_with(entries);
        self.top = 0;
    }

    /// Start viewing at the end of the file.
    pub fn jump_to_bottom(&mut self) {
        self.source.jump_to_end_of_file();
        let entries = self.source.fill_up();
        self.buffer.replace_with(entries);
        self.top = self.max_top();
    }

    /// Put 1-based `line` at the top of the screen.
    ///
    /// # Errors
    ///
    /// Propagates `PositionError` from the source; state is unchanged then.
    pub fn jump_to_line(&mut self, line: usize) -> Result<(), PositionError> {
        self.source.set_top_line(line)?;
        let entries = self.source.inner_entries();
        self.buffer.replace_with(entries);
        self.top = 0;
        Ok(())
    }

    // ===== Status =====

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Show an edge notice unless one was shown within the last
    /// [`EDGE_NOTICE_INTERVAL`].
    pub fn notify_edge(&mut self, text: &str, now: Instant) {
        let due = self
            .last_edge_notice
            .is_none_or(|last| now.saturating_duration_since(last) >= EDGE_NOTICE_INTERVAL);
        if due {
            self.last_edge_notice = Some(now);
            self.set_status(StatusMessage::info(text));
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
