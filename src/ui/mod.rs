mod status_bar;
mod terminal_session;
mod top_bar;
mod window_area;

use ratatui::layout::{Constraint, Layout};

use crate::session::Session;
use status_bar::StatusBarWidget;
pub(crate) use terminal_session::TerminalSession;
pub use terminal_session::TerminalSessionError;
use top_bar::TopBarWidget;
use window_area::WindowAreaWidget;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut ratatui::Frame<'_>, session: &Session) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let top_bar = TopBarWidget::from_session(session);
        let (window_area, cursor_position) = WindowAreaWidget::from_session(session, chunks[1]);
        let status_bar = StatusBarWidget::from_session(session);

        frame.render_widget(top_bar, chunks[0]);
        frame.render_widget(window_area, chunks[1]);
        frame.render_widget(status_bar, chunks[2]);
        if let Some(position) = cursor_position {
            frame.set_cursor_position(position);
        }
    }
}
