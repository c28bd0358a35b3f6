//! Scan results with explicit file-edge sentinels.
//!
//! Running off either edge of a file is an ordinary outcome of scrolling, so
//! it is modelled as data rather than as an error.

/// Outcome of reading one item from a position in a file.
///
/// `BeginOfFile` and `EndOfFile` are returned instead of an item when the
/// read starts at the respective edge. Callers branch on these variants the
/// same way they would on a sentinel value.
///
/// `Truncated` means nothing was read because the file is now shorter than
/// the view it is being read through. It is not an edge: the reader must be
/// re-synced before it can go on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan<T> {
    /// An item was read.
    Item(T),
    /// Nothing precedes the read position.
    BeginOfFile,
    /// Nothing follows the read position.
    EndOfFile,
    /// The file shrank below the mapped view; re-sync before reading.
    Truncated,
}

impl<T> Scan<T> {
    /// Returns true for anything but an item.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Scan::Item(_))
    }

    pub fn is_begin_of_file(&self) -> bool {
        matches!(self, Scan::BeginOfFile)
    }

    pub fn is_end_of_file(&self) -> bool {
        matches!(self, Scan::EndOfFile)
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Scan::Truncated)
    }

    /// Borrow the item, if any.
    pub fn item(&self) -> Option<&T> {
        match self {
            Scan::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Take the item, if any.
    pub fn into_item(self) -> Option<T> {
        match self {
            Scan::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Map the item, passing sentinels through unchanged.
    pub fn map<U, F>(self, f: F) -> Scan<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Scan::Item(item) => Scan::Item(f(item)),
            Scan::BeginOfFile => Scan::BeginOfFile,
            Scan::EndOfFile => Scan::EndOfFile,
            Scan::Truncated => Scan::Truncated,
        }
    }
}

// ===== Line =====

/// One line of text read from a byte view.
///
/// The text never includes the `\n` / `\r` boundary that ended it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    terminated: bool,
}

impl Line {
    /// A line that ended at a boundary character.
    pub fn terminated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminated: true,
        }
    }

    /// The final line of a view that ran into end-of-view without a boundary.
    pub fn unterminated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminated: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// False only for a trailing line with no boundary after it.
    ///
    /// Such a line may still be growing if a writer is appending to the file.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl From<Line> for String {
    fn from(line: Line) -> Self {
        line.text
    }
}
