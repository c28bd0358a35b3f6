//! Log entries on top of a scrolling window.

use crate::model::{InputError, Line, LogEntry, LogLevel, PositionError, Scan};
use crate::source::ScrollingWindow;
use std::path::Path;

/// Adapter that turns window lines into [`LogEntry`] values.
///
/// Every scroll goes straight to the window. The only state added here is
/// whether lines are classified by their leading character.
#[derive(Debug)]
pub struct LogLineSource {
    window: ScrollingWindow,
    colorize: bool,
}

impl LogLineSource {
    /// Open `path` with a window of `spread_limit` lines, colouring off.
    ///
    /// # Errors
    ///
    /// Whatever [`ScrollingWindow::open`] reports.
    pub fn open(path: impl AsRef<Path>, spread_limit: usize) -> Result<Self, InputError> {
        Ok(Self::new(ScrollingWindow::open(path, spread_limit)?))
    }

    pub fn new(window: ScrollingWindow) -> Self {
        Self {
            window,
            colorize: false,
        }
    }

    // ===== Colouring =====

    /// Entries read after this call are classified (or not) accordingly.
    pub fn set_colorized(&mut self, colorize: bool) {
        self.colorize = colorize;
    }

    pub fn is_colorized(&self) -> bool {
        self.colorize
    }

    /// Re-classify an entry read under a different colouring setting.
    pub fn recolor(&self, entry: &mut LogEntry) {
        let level = if self.colorize {
            LogLevel::classify(entry.text())
        } else {
            LogLevel::None
        };
        entry.set_level(level);
    }

    fn entry(&self, line: Line) -> LogEntry {
        LogEntry::from_text(line.into_text(), self.colorize)
    }

    fn entries(&self, lines: Vec<Line>) -> Vec<LogEntry> {
        lines.into_iter().map(|line| self.entry(line)).collect()
    }

    // ===== Scrolling =====

    /// One entry below the window; sentinels pass through.
    pub fn scroll_down(&mut self) -> Scan<LogEntry> {
        let scan = self.window.step_forward();
        scan.map(|line| self.entry(line))
    }

    /// One entry above the window; sentinels pass through.
    pub fn scroll_up(&mut self) -> Scan<LogEntry> {
        let scan = self.window.step_backward();
        scan.map(|line| self.entry(line))
    }

    /// Fill the window downward, returning new entries in file order.
    pub fn fill_down(&mut self) -> Vec<LogEntry> {
        let lines = self.window.leap_forward();
        self.entries(lines)
    }

    /// Fill the window upward, returning new entries in file order.
    pub fn fill_up(&mut self) -> Vec<LogEntry> {
        let lines = self.window.leap_backward();
        self.entries(lines)
    }

    pub fn at_end_of_file(&self) -> bool {
        self.window.peek_forward().is_end_of_file()
    }

    pub fn at_beg_of_file(&self) -> bool {
        self.window.peek_backward().is_begin_of_file()
    }

    // ===== Positioning =====

    pub fn jump_to_beginning_of_file(&mut self) {
        self.window.jump_to_beginning_of_file();
    }

    pub fn jump_to_end_of_file(&mut self) {
        self.window.jump_to_end_of_file();
    }

    /// Refill the window with 1-based `line` at the top.
    ///
    /// # Errors
    ///
    /// See [`ScrollingWindow::set_top_line_pos`].
    pub fn set_top_line(&mut self, line: usize) -> Result<(), PositionError> {
        self.window.set_top_line_pos(line)
    }

    /// Entries currently inside the window, top first.
    pub fn inner_entries(&self) -> Vec<LogEntry> {
        self.entries(self.window.inner_lines())
    }

    /// # Errors
    ///
    /// See [`ScrollingWindow::notify_file_modified`].
    pub fn notify_file_modified(&mut self) -> Result<(), InputError> {
        self.window.notify_file_modified()
    }

    pub fn line_count(&mut self) -> usize {
        self.window.line_count()
    }

    pub fn spread_limit(&self) -> usize {
        self.window.spread_limit()
    }

    pub fn effective_spread(&self) -> usize {
        self.window.effective_spread()
    }

    pub fn window(&self) -> &ScrollingWindow {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.log");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    const LEVELS: &str = "I/start\nW/careful\nE/broken\nplain\n";

    #[test]
    fn fill_down_without_colour_has_no_levels() {
        let (_dir, path) = fixture(LEVELS);
        let mut source = LogLineSource::open(&path, 10).unwrap();
        let entries = source.fill_down();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.level() == LogLevel::None));
        assert_eq!(entries[1].text(), "W/careful");
    }

    #[test]
    fn fill_down_with_colour_classifies_leading_letter() {
        let (_dir, path) = fixture(LEVELS);
        let mut source = LogLineSource::open(&path, 10).unwrap();
        source.set_colorized(true);
        let levels: Vec<_> = source.fill_down().iter().map(LogEntry::level).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error,
                LogLevel::None
            ]
        );
    }

    #[test]
    fn fill_up_returns_file_order() {
        let (_dir, path) = fixture(LEVELS);
        let mut source = LogLineSource::open(&path, 2).unwrap();
        source.jump_to_end_of_file();
        let texts: Vec<_> = source
            .fill_up()
            .into_iter()
            .map(|e| e.text().to_string())
            .collect();
        assert_eq!(texts, vec!["E/broken", "plain"]);
    }

    #[test]
    fn fill_strips_nothing_from_unterminated_last_line() {
        let (_dir, path) = fixture("one\ntwo");
        let mut source = LogLineSource::open(&path, 5).unwrap();
        let entries = source.fill_down();
        assert_eq!(entries[1].text(), "two");
    }

    #[test]
    fn scroll_passes_sentinels_through() {
        let (_dir, path) = fixture("a\n");
        let mut source = LogLineSource::open(&path, 5).unwrap();
        assert_eq!(source.scroll_up(), Scan::BeginOfFile);
        assert_eq!(source.scroll_down().item().map(LogEntry::text), Some("a"));
        assert_eq!(source.scroll_down(), Scan::EndOfFile);
    }

    #[test]
    fn edge_queries_match_peeks() {
        let (_dir, path) = fixture("a\nb\n");
        let mut source = LogLineSource::open(&path, 1).unwrap();
        assert!(source.at_beg_of_file());
        assert!(!source.at_end_of_file());

        source.fill_down();
        source.scroll_down();
        assert!(source.at_end_of_file());
        assert!(!source.at_beg_of_file());
        assert_eq!(
            source.at_end_of_file(),
            source.window().peek_forward().is_end_of_file()
        );
    }

    #[test]
    fn recolor_follows_current_setting() {
        let (_dir, path) = fixture("F/fatal\n");
        let mut source = LogLineSource::open(&path, 1).unwrap();
        let mut entry = source.fill_down().remove(0);
        assert_eq!(entry.level(), LogLevel::None);

        source.set_colorized(true);
        assert!(source.is_colorized());
        source.recolor(&mut entry);
        assert_eq!(entry.level(), LogLevel::Fail);

        source.set_colorized(false);
        source.recolor(&mut entry);
        assert_eq!(entry.level(), LogLevel::None);
    }

    #[test]
    fn set_top_line_and_inner_entries() {
        let (_dir, path) = fixture("a\nb\nc\nd\n");
        let mut source = LogLineSource::open(&path, 2).unwrap();
        source.set_top_line(3).unwrap();
        let texts: Vec<_> = source
            .inner_entries()
            .iter()
            .map(|e| e.text().to_string())
            .collect();
        assert_eq!(texts, vec!["c", "d"]);
        assert_eq!(source.effective_spread(), 2);
        assert_eq!(source.spread_limit(), 2);
        assert_eq!(source.line_count(), 4);
        assert_eq!(
            source.set_top_line(9),
            Err(PositionError::LineOutOfRange { line: 9, total: 4 })
        );
    }

    #[test]
    fn notify_file_modified_delegates() {
        let (_dir, path) = fixture("a\n");
        let mut source = LogLineSource::open(&path, 4).unwrap();
        source.fill_down();
        fs::write(&path, "a\nb\n").unwrap();
        source.notify_file_modified().unwrap();
        assert_eq!(source.scroll_down().item().map(LogEntry::text), Some("b"));
    }
}
