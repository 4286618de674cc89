use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::action::{AppAction, BufferAction, CursorAction, StripAction, SystemAction};

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn action(&self, event: &Event) -> Option<AppAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.key_action(key),
            _ => None,
        }
    }

    fn key_action(&self, key: &KeyEvent) -> Option<AppAction> {
        let action = match key.code {
            KeyCode::Char('q') => AppAction::System(SystemAction::Quit),

            KeyCode::Char('t') => AppAction::Strip(StripAction::Toggle),
            KeyCode::Char('o') => AppAction::Strip(StripAction::Open),
            KeyCode::Char('h') => AppAction::Strip(StripAction::GoLeft),
            KeyCode::Char('l') => AppAction::Strip(StripAction::GoRight),
            KeyCode::Char('H') => AppAction::Strip(StripAction::MoveLeft),
            KeyCode::Char('L') => AppAction::Strip(StripAction::MoveRight),
            KeyCode::Char('r') => AppAction::Strip(StripAction::Reload),

            KeyCode::Char('p') => AppAction::Buffer(BufferAction::SwitchPrev),
            KeyCode::Char('n') => AppAction::Buffer(BufferAction::SwitchNext),

            KeyCode::Up | KeyCode::Char('k') => AppAction::Cursor(CursorAction::Up),
            KeyCode::Down | KeyCode::Char('j') => AppAction::Cursor(CursorAction::Down),
            KeyCode::Left => AppAction::Cursor(CursorAction::Left),
            KeyCode::Right => AppAction::Cursor(CursorAction::Right),

            _ => return None,
        };
        Some(action)
    }
}
