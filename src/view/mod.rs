//! Terminal front end: draws the pager and feeds it keys and file changes.

mod log_view;
mod styles;

pub use log_view::{entry_rows, render_log_view};
pub use styles::{ColorConfig, LevelStyles};

use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::source::FileWatcher;
use crate::state::{handle_file_modified, handle_key_action, AppState, StatusMessage};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// How long to wait for input before checking the file watcher.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal failures while the pager runs.
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => AppError::Terminal(io),
        }
    }
}

/// The pager bound to a terminal backend, plus the watcher on its file.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: Option<AppState>,
    watcher: Option<FileWatcher>,
    key_bindings: KeyBindings,
    styles: LevelStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Enter raw mode on the alternate screen and start watching the file.
    ///
    /// A watcher that cannot start is logged, not fatal; the pager then
    /// only re-syncs on `r`.
    ///
    /// Raw mode is switched off again if the rest of the setup fails.
    pub fn new(app_state: AppState, styles: LevelStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let terminal = undo_on_err(enter_alternate_screen(), || {
            if let Err(err) = restore_terminal() {
                warn!(error = %err, "terminal restore failed");
            }
        })?;

        let watcher = match FileWatcher::new(app_state.source().window().path()) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                warn!(error = %err, "file changes will not be detected");
                None
            }
        };

        Ok(Self::with_terminal(terminal, app_state, watcher, styles))
    }

    /// Returns when the user quits. Key presses redraw immediately; between
    /// them the file watcher is polled every tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, height) => {
                        self.handle_resize(height);
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.poll_watcher() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        mut app_state: AppState,
        watcher: Option<FileWatcher>,
        styles: LevelStyles,
    ) -> Self {
        if let Ok(size) = terminal.size() {
            app_state.set_height(entry_rows(size.height));
        }

        Self {
            terminal,
            app_state: Some(app_state),
            watcher,
            key_bindings: KeyBindings::default(),
            styles,
        }
    }

    /// Apply a state transition.
    fn update(&mut self, f: impl FnOnce(AppState) -> AppState) {
        if let Some(state) = self.app_state.take() {
            self.app_state = Some(f(state));
        }
    }

    /// Returns true once the pager should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        debug!(?action, "key action");
        let now = Instant::now();
        self.update(|state| handle_key_action(state, action, now));

        if action == KeyAction::ToggleFollow {
            if let Some(state) = &self.app_state {
                info!(follow = state.follow, "follow toggled");
            }
        }

        self.app_state.as_ref().is_none_or(|state| state.should_quit)
    }

    /// Drain watcher events; returns true if the screen needs a redraw.
    fn poll_watcher(&mut self) -> bool {
        let Some(watcher) = self.watcher.as_mut() else {
            return false;
        };

        match watcher.poll_changes() {
            Ok(false) => false,
            Ok(true) => {
                debug!("file changed, re-syncing");
                self.update(handle_file_modified);
                true
            }
            Err(err) => {
                warn!(error = %err, "stopped watching file");
                self.watcher = None;
                let message = StatusMessage::error(err.to_string());
                if let Some(state) = self.app_state.as_mut() {
                    state.set_status(message);
                }
                true
            }
        }
    }

    fn handle_resize(&mut self, height: u16) {
        debug!(height, "resize");
        if let Some(state) = self.app_state.as_mut() {
            state.set_height(entry_rows(height));
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let Some(state) = self.app_state.as_ref() else {
            return Ok(());
        };
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            let area = frame.area();
            render_log_view(frame, area, state, styles);
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI over `app_state`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including after an error.
///
/// Tracing should already be initialised; nothing may print to stdout.
pub fn run(app_state: AppState, styles: LevelStyles) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, styles)?;
    let result = app.run();
    restore_terminal()?;
    result
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `undo` when `result` is an error, then pass `result` on.
fn undo_on_err<T>(result: Result<T, TuiError>, undo: impl FnOnce()) -> Result<T, TuiError> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
