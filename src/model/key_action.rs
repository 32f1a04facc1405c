//! Domain-level keyboard actions independent of key bindings.

/// Viewer actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Scroll up by one step. Default: k/↑
    ScrollUp,
    /// Scroll down by one step. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the listing. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the listing. Default: G/End
    ScrollToBottom,
    /// Exit the viewer. Default: q/Esc
    Quit,
}

impl KeyAction {
    /// Whether this action moves the scroll offset.
    pub fn is_scroll(&self) -> bool {
        !matches!(self, KeyAction::Quit)
    }
}
