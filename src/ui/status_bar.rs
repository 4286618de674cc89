use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::session::Session;

pub(super) struct StatusBarWidget {
    mode: &'static str,
    status_line: String,
}

impl StatusBarWidget {
    pub(super) fn from_session(session: &Session) -> Self {
        Self {
            mode: if session.strip.is_some() { "STRIP" } else { "OFF" },
            status_line: session.status_line(),
        }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", self.mode),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", self.status_line)),
        ]))
        .render(area, buf);
    }
}
