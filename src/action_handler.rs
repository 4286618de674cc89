use std::ops::ControlFlow;

use crate::action::{AppAction, BufferAction, CursorAction, StripAction, SystemAction};
use crate::session::Session;
use crate::workspace::BufferCycle;

pub struct ActionHandler;

impl ActionHandler {
    pub fn apply(&self, session: &mut Session, action: AppAction) -> ControlFlow<()> {
        match action {
            AppAction::Strip(StripAction::Toggle) => session.toggle_strip(),
            AppAction::Strip(StripAction::Open) => session.open_pane(),
            AppAction::Strip(StripAction::GoLeft) => session.go_left(),
            AppAction::Strip(StripAction::GoRight) => session.go_right(),
            AppAction::Strip(StripAction::MoveLeft) => session.move_pane_left(),
            AppAction::Strip(StripAction::MoveRight) => session.move_pane_right(),
            AppAction::Strip(StripAction::Reload) => session.reload_layout(),
            AppAction::Cursor(CursorAction::Up) => session.workspace.move_cursor_up(),
            AppAction::Cursor(CursorAction::Down) => session.workspace.move_cursor_down(),
            AppAction::Cursor(CursorAction::Left) => session.workspace.move_cursor_left(),
            AppAction::Cursor(CursorAction::Right) => session.workspace.move_cursor_right(),
            AppAction::Buffer(BufferAction::SwitchPrev) => {
                session.switch_buffer(BufferCycle::Prev)
            }
            AppAction::Buffer(BufferAction::SwitchNext) => {
                session.switch_buffer(BufferCycle::Next)
            }
            AppAction::System(SystemAction::Quit) => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }
}
