//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll up by one line. Default: k/↑
    ScrollUp,
    /// Scroll down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the beginning of the file. Default: g/Home
    JumpToTop,
    /// Jump to the end of the file. Default: G/End
    JumpToBottom,

    // Display
    /// Toggle level colouring of lines. Default: c
    ToggleColorize,
    /// Toggle following appended data. Default: f
    ToggleFollow,
    /// Re-read the file after an out-of-band change. Default: r
    Reload,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action moves the viewport.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::JumpToTop
                | KeyAction::JumpToBottom
        )
    }
}
