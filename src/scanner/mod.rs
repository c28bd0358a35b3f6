//! Line-boundary scanning over a read-only byte view.
//!
//! [`LineScanner`] pairs a borrowed byte slice with one cursor (a byte offset
//! in `0..=len`). Reads and skips move the cursor; to look without moving,
//! build a second scanner at the same offset.
//!
//! Either `\n` or `\r` ends a line, so `\r\n` is two boundaries with an
//! empty line between them. Boundary bytes are never part of returned text.
//! Text is decoded lossily as UTF-8 after boundaries are found on raw bytes.
//!
//! # Backward reads
//!
//! A line's first byte sits right after the previous line's terminator. A
//! backward read from the start of line `n` must therefore step over one
//! terminator (the one ending line `n - 1`) before it collects text, and it
//! stops at the byte after the next boundary it meets, which is where the
//! cursor is left. Forward reads leave the cursor after the terminator they
//! consumed, so `read_forward` then `read_backward` returns the same line.

use crate::model::{Line, Scan};
use std::borrow::Cow;

/// Whether `byte` ends a line.
#[inline]
pub fn is_boundary(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

fn decode(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_owned(),
        Cow::Owned(text) => text,
    }
}

/// Cursor over a byte view with line-aware reads and skips.
///
/// Running off either edge is reported through [`Scan::BeginOfFile`] /
/// [`Scan::EndOfFile`] or a `false` return, never through a panic. Placing
/// the cursor outside `0..=len` is a contract violation and panics.
#[derive(Debug, Clone, Copy)]
pub struct LineScanner<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> LineScanner<'a> {
    /// Scanner positioned at offset 0.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Scanner positioned at `cursor`.
    ///
    /// # Panics
    ///
    /// If `cursor > bytes.len()`.
    pub fn at(bytes: &'a [u8], cursor: usize) -> Self {
        check_cursor(bytes, cursor);
        Self { bytes, cursor }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor.
    ///
    /// # Panics
    ///
    /// If `cursor` is past the end of the view.
    pub fn set_cursor(&mut self, cursor: usize) {
        check_cursor(self.bytes, cursor);
        self.cursor = cursor;
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when no forward data remains.
    pub fn is_at_underflow(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    /// Read from the cursor up to the next boundary or the end of the view.
    ///
    /// The cursor ends up past the boundary, or at `len` if none was found,
    /// in which case the line is [`Line::unterminated`]. At `len` this
    /// returns [`Scan::EndOfFile`] without moving.
    pub fn read_forward(&mut self) -> Scan<Line> {
        if self.is_at_underflow() {
            return Scan::EndOfFile;
        }

        let start = self.cursor;
        let rest = &self.bytes[start..];
        match rest.iter().position(|&b| is_boundary(b)) {
            Some(offset) => {
                self.cursor = start + offset + 1;
                Scan::Item(Line::terminated(decode(&rest[..offset])))
            }
            None => {
                self.cursor = self.bytes.len();
                Scan::Item(Line::unterminated(decode(rest)))
            }
        }
    }

    /// Read the line that ends at the cursor, moving toward offset 0.
    ///
    /// The cursor ends up on the first byte of the line read. At offset 0
    /// this returns [`Scan::BeginOfFile`] without moving.
    pub fn read_backward(&mut self) -> Scan<Line> {
        if self.cursor == 0 {
            return Scan::BeginOfFile;
        }

        let (start, end) = self.line_before(self.cursor);
        self.cursor = start;

        let text = decode(&self.bytes[start..end]);
        if end < self.bytes.len() {
            Scan::Item(Line::terminated(text))
        } else {
            Scan::Item(Line::unterminated(text))
        }
    }

    /// Advance past up to `n` lines.
    ///
    /// An unterminated final line counts as a line. Returns whether all `n`
    /// were passed before the end of the view.
    pub fn skip_forward(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if self.is_at_underflow() {
                return false;
            }
            let rest = &self.bytes[self.cursor..];
            self.cursor = match rest.iter().position(|&b| is_boundary(b)) {
                Some(offset) => self.cursor + offset + 1,
                None => self.bytes.len(),
            };
        }
        true
    }

    /// Move back past up to `n` lines, leaving the cursor on a line start.
    ///
    /// Returns whether all `n` were passed before offset 0.
    pub fn skip_backward(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if self.cursor == 0 {
                return false;
            }
            let (start, _) = self.line_before(self.cursor);
            self.cursor = start;
        }
        true
    }

    /// Number of lines whose first byte lies in `start..end`.
    ///
    /// For a window `[top, bot)` this is the number of lines it holds.
    /// Does not move this scanner's cursor.
    ///
    /// # Panics
    ///
    /// If either offset is past the end of the view.
    pub fn count_lines_between(&self, start: usize, end: usize) -> usize {
        check_cursor(self.bytes, end);
        let mut walker = LineScanner::at(self.bytes, start);
        let mut count = 0;
        while walker.cursor < end && walker.skip_forward(1) {
            count += 1;
        }
        count
    }

    /// Total number of lines in the view.
    pub fn count_lines(&self) -> usize {
        self.count_lines_between(0, self.bytes.len())
    }

    /// Bounds `(start, end)` of the line ending at `cursor`, excluding its
    /// terminator. `cursor` must be positive.
    fn line_before(&self, cursor: usize) -> (usize, usize) {
        let mut end = cursor;
        if is_boundary(self.bytes[end - 1]) {
            end -= 1;
        }
        let start = self.bytes[..end]
            .iter()
            .rposition(|&b| is_boundary(b))
            .map_or(0, |i| i + 1);
        (start, end)
    }
}

fn check_cursor(bytes: &[u8], cursor: usize) {
    assert!(
        cursor <= bytes.len(),
        "cursor {cursor} outside byte view of length {}",
        bytes.len()
    );
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
