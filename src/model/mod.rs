//! Domain model types (pure).
//!
//! All types in this module are plain data; nothing here performs I/O.

pub mod error;
pub mod key_action;
pub mod log_entry;
pub mod scan;

// Re-export for convenience
pub use error::{AppError, InputError, PositionError};
pub use key_action::KeyAction;
pub use log_entry::{LogEntry, LogLevel};
pub use scan::{Line, Scan};
