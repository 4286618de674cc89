use std::fmt::Debug;

/// Direction of an intra-viewport focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Left,
    Right,
}

/// What the pane strip consumes from the host windowing environment.
///
/// The strip never interprets content or cursor values; it only ferries them
/// between real windows and its own pane sequence. An implementation must
/// keep newly created split windows at the right edge of the screen order so
/// that the strip's window binding reads left to right like the screen does.
pub trait WindowHost {
    /// Handle of a real on-screen window.
    type Window: Copy + Eq + Debug;
    /// Handle of host-owned displayable content. Opaque to the strip.
    type Content: Clone;
    /// Cursor position within a piece of content. Opaque to the strip.
    type Cursor: Clone;

    fn active_window(&self) -> Self::Window;
    fn active_content(&self) -> Self::Content;
    fn active_cursor(&self) -> Self::Cursor;

    fn window_content(&self, window: Self::Window) -> Self::Content;
    fn window_cursor(&self, window: Self::Window) -> Self::Cursor;
    fn set_window_content(&mut self, window: Self::Window, content: Self::Content);
    fn set_window_cursor(&mut self, window: Self::Window, cursor: Self::Cursor);

    /// Creates a window at the right edge of the screen order and returns
    /// its handle.
    fn create_split_window(&mut self) -> Self::Window;
    fn close_all_windows_except_active(&mut self);

    /// Moves host focus to the window with the given handle.
    fn focus_window(&mut self, window: Self::Window);
    /// Moves host focus to the adjacent window in screen space.
    fn move_focus(&mut self, direction: FocusDirection);

    /// Cosmetic. Called after the number of windows changed.
    fn rebalance_window_sizes(&mut self);
}
