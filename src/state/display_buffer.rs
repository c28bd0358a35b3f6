//! Display-side mirror of the scrolling window.
//!
//! The window only guarantees that it never holds more than `spread_limit`
//! lines; the buffer here holds the entries themselves and must drop one
//! from the far end every time the window slides. Its length always equals
//! the source's effective spread.

use crate::model::{LogEntry, Scan};
use crate::source::LogLineSource;
use std::collections::VecDeque;

/// Result of a load in one direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Entries pushed onto the near end.
    pub added: usize,
    /// Entries dropped from the far end because the window slid.
    pub evicted: usize,
    /// The load stopped at an edge of the file.
    pub hit_edge: bool,
    /// The load stopped because the file shrank; the source needs a re-sync.
    pub truncated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DisplayBuffer {
    entries: VecDeque<LogEntry>,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Up to `height` entries starting at `top`.
    pub fn visible(&self, top: usize, height: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(top).take(height)
    }

    /// Replace everything, e.g. after a jump refilled the window.
    pub fn replace_with(&mut self, entries: Vec<LogEntry>) {
        self.entries.clear();
        self.entries.extend(entries);
    }

    /// Scroll the source down by up to `count` entries, appending each one.
    pub fn load_down(&mut self, source: &mut LogLineSource, count: usize) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();
        for _ in 0..count {
            let spread = source.effective_spread();
            match source.scroll_down() {
                Scan::Item(entry) => {
                    self.entries.push_back(entry);
                    outcome.added += 1;
                    if source.effective_spread() == spread {
                        self.entries.pop_front();
                        outcome.evicted += 1;
                    }
                }
                Scan::Truncated => {
                    outcome.truncated = true;
                    break;
                }
                _ => {
                    outcome.hit_edge = true;
                    break;
                }
            }
        }
        outcome
    }

    /// Scroll the source up by up to `count` entries, prepending each one.
    pub fn load_up(&mut self, source: &mut LogLineSource, count: usize) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();
        for _ in 0..count {
            let spread = source.effective_spread();
            match source.scroll_up() {
                Scan::Item(entry) => {
                    self.entries.push_front(entry);
                    outcome.added += 1;
                    if source.effective_spread() == spread {
                        self.entries.pop_back();
                        outcome.evicted += 1;
                    }
                }
                Scan::Truncated => {
                    outcome.truncated = true;
                    break;
                }
                _ => {
                    outcome.hit_edge = true;
                    break;
                }
            }
        }
        outcome
    }

    /// Re-classify every held entry under the source's colouring setting.
    pub fn recolor(&mut self, source: &LogLineSource) {
        for entry in self.entries.iter_mut() {
            source.recolor(entry);
        }
    }
}
