//! File-backed line sources.
//!
//! - [`ByteView`]: memory-mapped snapshot of the file
//! - [`ScrollingWindow`]: bounded, bidirectional window of lines over a view
//! - [`LogLineSource`]: the window as leveled log entries
//! - [`FileWatcher`]: tells the viewer when the file changed

pub mod byte_view;
pub mod log_source;
pub mod watcher;
pub mod window;

pub use byte_view::ByteView;
pub use log_source::LogLineSource;
pub use watcher::FileWatcher;
pub use window::ScrollingWindow;
