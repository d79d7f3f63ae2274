//! Domain-level keyboard actions independent of key bindings.

/// User intents that can be mapped to key bindings.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `KeyBindings`. Printable keys typed into a focused text input never reach
/// this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus
    /// Move focus to the next region. Default: Tab
    FocusNext,
    /// Move focus to the previous region. Default: Shift+Tab
    FocusPrev,

    // Selection and scrolling
    /// Select the previous card or scroll the overlay up. Default: ↑/k
    MoveUp,
    /// Select the next card or scroll the overlay down. Default: ↓/j
    MoveDown,
    /// Move by one page. Default: Page Up
    PageUp,
    /// Move by one page. Default: Page Down
    PageDown,

    // Selectors
    /// Next option of the focused selector. Default: →/Space
    OptionNext,
    /// Previous option of the focused selector. Default: ←
    OptionPrev,

    /// Submit the form, or open details for the selected card. Default: Enter
    Activate,
    /// Close the overlay, or return focus to the form. Default: Esc
    Cancel,

    /// Exit the application. Default: Ctrl+c
    Quit,
}
