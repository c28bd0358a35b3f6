//! Error types for logscroll.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary
//!   - [`InputError`] - Opening or re-opening the viewed file failed
//!   - [`PositionError`] - Caller supplied a line number the file cannot satisfy
//!   - [`ConfigError`] - Config file exists but could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - `std::io::Error` - Terminal failures
//!
//! # What is NOT an error
//!
//! Reaching the beginning or end of a file while scrolling happens on every scroll to the
//! edge. It is reported through [`Scan::BeginOfFile`] and [`Scan::EndOfFile`], never
//! through these types.
//!
//! Cursors outside the byte view are contract violations inside the crate and panic;
//! they are not represented here either.
//!
//! [`Scan::BeginOfFile`]: crate::model::Scan::BeginOfFile
//! [`Scan::EndOfFile`]: crate::model::Scan::EndOfFile

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// All domain-specific error types convert into `AppError` via `From`, so `main` can
/// propagate everything with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The log file could not be opened or re-opened.
    #[error("Cannot open log file: {0}")]
    InputRead(#[from] InputError),

    /// A requested start line does not exist in the file.
    #[error("Invalid position: {0}")]
    Position(#[from] PositionError),

    /// The configuration file is present but unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the pager cannot run; this is fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when opening the viewed file.
///
/// Raised at construction of a scrolling window and by an explicit re-sync. No other
/// operation performs I/O, so no other operation can fail this way.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Construction fails; the window is never created
/// - **FileDeleted**: Re-sync fails; the window keeps its previous byte view and markers
/// - **InvalidSpreadLimit**: Construction fails; the caller passed a zero-line window
/// - **Io**: Permissions, mapping failures; surfaced as-is
#[derive(Debug, Error)]
pub enum InputError {
    /// The file does not exist at construction time.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use logscroll::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.log")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.log"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The file disappeared between construction and a re-sync.
    ///
    /// Distinct from `FileNotFound`: the window exists and still holds its last good
    /// snapshot, so a caller may keep displaying it.
    #[error("File deleted during viewing: {path}")]
    FileDeleted {
        /// The path that no longer exists.
        path: PathBuf,
    },

    /// A window must be allowed to hold at least one line.
    #[error("Spread limit must be at least 1 line")]
    InvalidSpreadLimit,

    /// Generic I/O error opening or mapping the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A positioning operation could not be carried out.
///
/// Bad line numbers are caller mistakes and are reported rather than
/// clamped. A truncated file needs a re-sync first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// Line numbers are 1-based.
    #[error("The line number must be positive")]
    NonPositiveLine,

    /// The file has fewer lines than requested.
    #[error("Given line number {line} but there are only {total} lines in the file")]
    LineOutOfRange {
        /// The requested 1-based line.
        line: usize,
        /// Total number of lines in the file.
        total: usize,
    },

    /// The file shrank since it was mapped; re-sync before positioning.
    #[error("The file was truncated; reload before jumping to a line")]
    FileTruncated,
}
