//! logscroll
//!
//! Pager for arbitrarily large log files. Only a bounded window of lines is
//! ever materialised; scrolling in either direction reads one line past the
//! window's edge from a memory-mapped view of the file.
//!
//! Layers, leaf first:
//! - [`scanner`]: line-boundary reads and skips over a byte slice
//! - [`source`]: the scrolling window over a mapped file, and log entries
//! - [`state`] / [`view`]: the pager that keeps a display buffer in step
//!   with the window

pub mod config;
pub mod logging;
pub mod model;
pub mod scanner;
pub mod source;
pub mod state;
pub mod view;
