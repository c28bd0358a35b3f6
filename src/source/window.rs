//! Bounded window of lines over a file, scrollable in both directions.
//!
//! A [`ScrollingWindow`] never materialises the file. It keeps two byte
//! offsets, `top_line_pos` and `bot_line_pos`, around the lines currently
//! "in view" and reads one line past either edge on demand. Once the window
//! holds `spread_limit` lines, each step in one direction drops a line off
//! the opposite edge, so memory use stays constant no matter how far the
//! caller scrolls.
//!
//! The window holds no text. A caller that displays lines must mirror every
//! step: append (or prepend) the returned line and, whenever the window
//! slid, drop one line from the other end of its own list.
//!
//! # Invariants
//!
//! - `0 <= top_line_pos <= bot_line_pos <= len`
//! - `effective_spread` is the number of lines in `[top_line_pos, bot_line_pos)`
//!   and never exceeds `spread_limit`
//!
//! # Re-sync
//!
//! The window does not watch its file. After the file changes, call
//! [`ScrollingWindow::notify_file_modified`]; it re-maps the file and repairs
//! the markers conservatively (see that method).
//!
//! If the file shrinks below the mapped view, reads stop until that call:
//! steps and peeks return [`Scan::Truncated`], leaps return nothing, and the
//! window is left as it was.

use crate::model::{InputError, Line, PositionError, Scan};
use crate::scanner::LineScanner;
use crate::source::ByteView;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ScrollingWindow {
    path: PathBuf,
    view: ByteView,
    spread_limit: usize,
    top_line_pos: usize,
    bot_line_pos: usize,
    effective_spread: usize,
    /// Memoised total; cleared on re-sync.
    line_count: Option<usize>,
}

impl ScrollingWindow {
    /// Open `path` with an empty window at the beginning of the file.
    ///
    /// # Errors
    ///
    /// - `InputError::InvalidSpreadLimit` if `spread_limit` is 0
    /// - `InputError::FileNotFound` if the file does not exist
    /// - `InputError::Io` if it cannot be opened or mapped
    pub fn open(path: impl AsRef<Path>, spread_limit: usize) -> Result<Self, InputError> {
        let path = path.as_ref();

        if spread_limit == 0 {
            return Err(InputError::InvalidSpreadLimit);
        }
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let view = ByteView::open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            view,
            spread_limit,
            top_line_pos: 0,
            bot_line_pos: 0,
            effective_spread: 0,
            line_count: None,
        })
    }

    // ===== Stepping =====

    /// Read the line below the window and grow the window to include it.
    ///
    /// If that pushes the window past `spread_limit`, its top line is
    /// dropped. Returns [`Scan::EndOfFile`] and leaves the window unchanged
    /// when nothing follows it.
    pub fn step_forward(&mut self) -> Scan<Line> {
        if self.view.is_truncated() {
            return Scan::Truncated;
        }
        let mut scanner = LineScanner::at(&self.view, self.bot_line_pos);
        let result = scanner.read_forward();
        if result.is_sentinel() {
            return result;
        }

        self.bot_line_pos = scanner.cursor();
        self.effective_spread += 1;

        if self.is_effective_spread_invalid() {
            self.move_top_line_pos_forward();
            self.effective_spread -= 1;
        }

        result
    }

    /// Read the line above the window and grow the window to include it.
    ///
    /// If that pushes the window past `spread_limit`, its bottom line is
    /// dropped. Returns [`Scan::BeginOfFile`] and leaves the window
    /// unchanged when nothing precedes it.
    pub fn step_backward(&mut self) -> Scan<Line> {
        if self.view.is_truncated() {
            return Scan::Truncated;
        }
        let mut scanner = LineScanner::at(&self.view, self.top_line_pos);
        let result = scanner.read_backward();
        if result.is_sentinel() {
            return result;
        }

        self.top_line_pos = scanner.cursor();
        self.effective_spread += 1;

        if self.is_effective_spread_invalid() {
            self.move_bot_line_pos_backward();
            self.effective_spread -= 1;
        }

        result
    }

    /// What `step_forward` would return, without moving the window.
    pub fn peek_forward(&self) -> Scan<Line> {
        if self.view.is_truncated() {
            return Scan::Truncated;
        }
        LineScanner::at(&self.view, self.bot_line_pos).read_forward()
    }

    /// What `step_backward` would return, without moving the window.
    pub fn peek_backward(&self) -> Scan<Line> {
        if self.view.is_truncated() {
            return Scan::Truncated;
        }
        LineScanner::at(&self.view, self.top_line_pos).read_backward()
    }

    /// Step forward until the window is full or the file ends.
    ///
    /// Returns the lines read in file order; empty if the window was already
    /// full or nothing follows it.
    pub fn leap_forward(&mut self) -> Vec<Line> {
        let wanted = self.spread_limit - self.effective_spread;
        let mut lines = Vec::with_capacity(wanted);

        for _ in 0..wanted {
            match self.step_forward() {
                Scan::Item(line) => lines.push(line),
                _ => break,
            }
        }

        lines
    }

    /// Step backward until the window is full or the file begins.
    ///
    /// Returns the lines read in file order (topmost first), so the result
    /// can be prepended to a display list as-is.
    pub fn leap_backward(&mut self) -> Vec<Line> {
        let wanted = self.spread_limit - self.effective_spread;
        let mut lines = Vec::with_capacity(wanted);

        for _ in 0..wanted {
            match self.step_backward() {
                Scan::Item(line) => lines.push(line),
                _ => break,
            }
        }

        lines.reverse();
        lines
    }

    // ===== Jumping =====

    /// Collapse the window to zero lines at offset 0.
    ///
    /// Follow with [`leap_forward`](Self::leap_forward) to repopulate.
    pub fn jump_to_beginning_of_file(&mut self) {
        self.top_line_pos = 0;
        self.bot_line_pos = 0;
        self.effective_spread = 0;
    }

    /// Collapse the window to zero lines at the end of the view.
    ///
    /// Follow with [`leap_backward`](Self::leap_backward) to repopulate.
    pub fn jump_to_end_of_file(&mut self) {
        let len = self.view.len();
        self.top_line_pos = len;
        self.bot_line_pos = len;
        self.effective_spread = 0;
    }

    /// Fill the window starting at 1-based line `line`.
    ///
    /// The starting offset is found by scanning from whichever end of the
    /// file is nearer, so at most half the file is walked. The window is
    /// then filled forward up to `spread_limit` lines.
    ///
    /// # Errors
    ///
    /// - `PositionError::NonPositiveLine` for line 0
    /// - `PositionError::LineOutOfRange` past the last line (this counts
    ///   the lines in the file if they are not already known)
    /// - `PositionError::FileTruncated` if the file shrank since it was mapped
    pub fn set_top_line_pos(&mut self, line: usize) -> Result<(), PositionError> {
        if line == 0 {
            return Err(PositionError::NonPositiveLine);
        }
        if self.view.is_truncated() {
            return Err(PositionError::FileTruncated);
        }
        let total = self.line_count();
        if line > total {
            return Err(PositionError::LineOutOfRange { line, total });
        }

        let top = if line < total / 2 {
            let mut scanner = LineScanner::new(&self.view);
            scanner.skip_forward(line - 1);
            scanner.cursor()
        } else {
            // Lines `line..=total` all lie after the target offset.
            let mut scanner = LineScanner::at(&self.view, self.view.len());
            scanner.skip_backward(total - line + 1);
            scanner.cursor()
        };

        let mut scanner = LineScanner::at(&self.view, top);
        let filled = scanner.skip_forward(self.spread_limit);
        let bot = scanner.cursor();

        self.top_line_pos = top;
        self.bot_line_pos = bot;
        self.effective_spread = if filled {
            self.spread_limit
        } else {
            scanner.count_lines_between(top, bot)
        };

        Ok(())
    }

    // ===== Re-sync =====

    /// Re-map the file after it changed out of band.
    ///
    /// The cached line count is dropped. Markers are repaired, not
    /// re-anchored:
    /// - if `top_line_pos` is past the end, the window collapses to offset 0
    /// - otherwise the lines from `top_line_pos` are recounted up to the old
    ///   `bot_line_pos` (or the new end, if that is nearer) and at most
    ///   `spread_limit` of them are kept, since a rewrite may have put more
    ///   lines in the same bytes
    ///
    /// # Errors
    ///
    /// `InputError::FileDeleted` if the file is gone, `InputError::Io` if it
    /// cannot be mapped. On error the previous view and markers are kept.
    pub fn notify_file_modified(&mut self) -> Result<(), InputError> {
        if !self.path.exists() {
            return Err(InputError::FileDeleted {
                path: self.path.clone(),
            });
        }

        self.view = ByteView::open(&self.path)?;
        self.line_count = None;

        let len = self.view.len();
        if self.top_line_pos > len {
            self.jump_to_beginning_of_file();
        } else {
            self.resettle_bottom(self.bot_line_pos.min(len));
        }

        Ok(())
    }

    /// Put the bottom marker at `limit` or earlier, on a line boundary, with
    /// no more than `spread_limit` lines below the top marker.
    fn resettle_bottom(&mut self, limit: usize) {
        let mut scanner = LineScanner::at(&self.view, self.top_line_pos);
        let mut spread = 0;
        while scanner.cursor() < limit && spread < self.spread_limit && scanner.skip_forward(1) {
            spread += 1;
        }
        self.bot_line_pos = scanner.cursor();
        self.effective_spread = spread;
    }

    // ===== Queries =====

    /// Total number of lines in the file, counted once per view.
    ///
    /// Nothing is counted while the file is shorter than the view; the last
    /// known count, or 0, is returned until the next re-sync.
    pub fn line_count(&mut self) -> usize {
        match self.line_count {
            Some(count) => count,
            None if self.view.is_truncated() => 0,
            None => {
                let count = LineScanner::new(&self.view).count_lines();
                self.line_count = Some(count);
                count
            }
        }
    }

    /// Re-read every line currently inside the window, top first.
    ///
    /// Empty while the file is shorter than the view.
    pub fn inner_lines(&self) -> Vec<Line> {
        if self.view.is_truncated() {
            return Vec::new();
        }
        let mut scanner = LineScanner::at(&self.view, self.top_line_pos);
        let mut lines = Vec::with_capacity(self.effective_spread);
        while scanner.cursor() < self.bot_line_pos {
            match scanner.read_forward() {
                Scan::Item(line) => lines.push(line),
                _ => break,
            }
        }
        lines
    }

    pub fn spread_limit(&self) -> usize {
        self.spread_limit
    }

    pub fn effective_spread(&self) -> usize {
        self.effective_spread
    }

    pub fn top_line_pos(&self) -> usize {
        self.top_line_pos
    }

    pub fn bot_line_pos(&self) -> usize {
        self.bot_line_pos
    }

    /// Length of the current byte view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// True when the file shrank below the view and reads are refused.
    pub fn is_truncated(&self) -> bool {
        self.view.is_truncated()
    }

    /// True when the window holds no lines.
    pub fn is_empty(&self) -> bool {
        self.effective_spread == 0
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ===== Internals =====

    fn is_effective_spread_invalid(&self) -> bool {
        self.effective_spread > self.spread_limit
    }

    fn move_top_line_pos_forward(&mut self) {
        let mut scanner = LineScanner::at(&self.view, self.top_line_pos);
        scanner.skip_forward(1);
        self.top_line_pos = scanner.cursor();
    }

    fn move_bot_line_pos_backward(&mut self) {
        let mut scanner = LineScanner::at(&self.view, self.bot_line_pos);
        scanner.skip_backward(1);
        self.bot_line_pos = scanner.cursor();
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
