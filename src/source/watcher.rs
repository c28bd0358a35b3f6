//! Change notifications for the viewed file.
//!
//! The scrolling window never watches its own file; [`FileWatcher`] is the
//! collaborator that tells the viewer when to re-sync.

use crate::model::InputError;
use notify_debouncer_mini::notify::{self, RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Debounce window for file system events.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Debounced watcher on one file.
pub struct FileWatcher {
    path: PathBuf,
    _debouncer: Debouncer<RecommendedWatcher>,
    event_rx: Receiver<DebounceEventResult>,
}

impl std::fmt::Debug for FileWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWatcher")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl FileWatcher {
    /// Start watching `path`.
    ///
    /// # Errors
    ///
    /// - `InputError::FileNotFound` if the file does not exist
    /// - `InputError::Io` if the watcher cannot be set up
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, tx).map_err(std::io::Error::other)?;
        debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;

        tracing::debug!(path = %path.display(), "watching file");

        Ok(Self {
            path: path.to_path_buf(),
            _debouncer: debouncer,
            event_rx: rx,
        })
    }

    /// Drain pending events without blocking.
    ///
    /// Returns true if the file changed since the last poll.
    ///
    /// # Errors
    ///
    /// `InputError::FileDeleted` once the file is gone.
    pub fn poll_changes(&mut self) -> Result<bool, InputError> {
        let mut has_changes = false;

        while let Ok(result) = self.event_rx.try_recv() {
            match result {
                Ok(events) => {
                    if !events.is_empty() {
                        has_changes = true;
                    }
                }
                Err(error) => {
                    if let notify::ErrorKind::PathNotFound = error.kind {
                        return Err(self.deleted());
                    }
                    tracing::warn!(error = %error, "file watcher error");
                }
            }
        }

        if has_changes && !self.path.exists() {
            return Err(self.deleted());
        }

        Ok(has_changes)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn deleted(&self) -> InputError {
        InputError::FileDeleted {
            path: self.path.clone(),
        }
    }
}
