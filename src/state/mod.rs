//! UI state (pure).
//!
//! State transitions are functions testable without a terminal. The only
//! I/O they reach is through the log source, against a mapped file.

pub mod app_state;
pub mod display_buffer;
pub mod scroll_handler;

pub use app_state::{AppState, StatusKind, StatusMessage, EDGE_NOTICE_INTERVAL};
pub use display_buffer::{DisplayBuffer, LoadOutcome};
pub use scroll_handler::{handle_file_modified, handle_key_action};
