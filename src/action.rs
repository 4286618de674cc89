#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Strip(StripAction),
    Cursor(CursorAction),
    Buffer(BufferAction),
    System(SystemAction),
}

/// The user-facing pane strip commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripAction {
    Open,
    GoLeft,
    GoRight,
    MoveLeft,
    MoveRight,
    Reload,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferAction {
    SwitchPrev,
    SwitchNext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    Quit,
}
