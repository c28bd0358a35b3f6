//! Key action and file change handlers.
//!
//! Pure functions that transform AppState. The viewport moves within the
//! display buffer; when it reaches either end of the buffer more entries
//! are loaded through the log source, with a margin of `2 × height` so the
//! next few scrolls stay inside the buffer. A load that finds the file
//! truncated re-syncs at once instead of waiting for the watcher.

use crate::model::KeyAction;
use crate::state::{AppState, StatusMessage};
use std::time::Instant;

/// Handle one key action.
///
/// `now` drives the edge-notice throttle.
pub fn handle_key_action(mut state: AppState, action: KeyAction, now: Instant) -> AppState {
    match action {
        KeyAction::ScrollDown => scroll_down(&mut state, 1, now),
        KeyAction::ScrollUp => scroll_up(&mut state, 1, now),
        KeyAction::PageDown => {
            let page = state.height;
            scroll_down(&mut state, page, now);
        }
        KeyAction::PageUp => {
            let page = state.height;
            scroll_up(&mut state, page, now);
        }
        KeyAction::JumpToTop => {
            state.follow = false;
            state.jump_to_top();
        }
        KeyAction::JumpToBottom => state.jump_to_bottom(),
        KeyAction::ToggleColorize => {
            let colorize = !state.source().is_colorized();
            state.source_mut().set_colorized(colorize);
            let (source, buffer) = state.parts_mut();
            buffer.recolor(source);
            state.set_status(StatusMessage::info(if colorize {
                "Colour on"
            } else {
                "Colour off"
            }));
        }
        KeyAction::ToggleFollow => {
            state.follow = !state.follow;
            if state.follow {
                state.jump_to_bottom();
                state.set_status(StatusMessage::info("Following"));
            } else {
                state.set_status(StatusMessage::info("Follow off"));
            }
        }
        KeyAction::Reload => {
            state = handle_file_modified(state);
            if state.status.is_none() {
                state.set_status(StatusMessage::info("Reloaded"));
            }
        }
        KeyAction::Quit => state.should_quit = true,
    }
    state
}

/// Re-sync after the file changed.
///
/// Following jumps to the new end. Otherwise the current window is re-read
/// in place. A failed re-sync keeps everything on screen and reports the
/// error in the status line.
pub fn handle_file_modified(mut state: AppState) -> AppState {
    resync(&mut state);
    state
}

fn resync(state: &mut AppState) {
    state.clear_status();
    match state.source_mut().notify_file_modified() {
        Ok(()) => {
            if state.follow {
                state.jump_to_bottom();
            } else {
                let entries = state.source().inner_entries();
                state.buffer.replace_with(entries);
                state.top = state.top.min(state.max_top());
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "re-sync failed");
            state.set_status(StatusMessage::error(err.to_string()));
        }
    }
}

fn scroll_down(state: &mut AppState, lines: usize, now: Instant) {
    let mut target = state.top + lines;

    let wanted_end = target + state.height;
    if wanted_end > state.buffer.len() {
        let count = wanted_end - state.buffer.len() + state.load_margin();
        let (source, buffer) = state.parts_mut();
        let outcome = buffer.load_down(source, count);
        if outcome.truncated {
            resync(state);
            return;
        }
        target = target.saturating_sub(outcome.evicted);
    }

    let max_top = state.max_top();
    if target > max_top {
        state.notify_edge("End of file", now);
    }
    state.top = target.min(max_top);
}

fn scroll_up(state: &mut AppState, lines: usize, now: Instant) {
    state.follow = false;

    if lines > state.top {
        let count = lines - state.top + state.load_margin();
        let (source, buffer) = state.parts_mut();
        let outcome = buffer.load_up(source, count);
        if outcome.truncated {
            resync(state);
            return;
        }
        state.top += outcome.added;
    }

    if lines > state.top {
        state.notify_edge("Beginning of file", now);
    }
    state.top = state.top.saturating_sub(lines).min(state.max_top());
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
