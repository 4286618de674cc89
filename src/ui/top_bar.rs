use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::session::Session;

/// One entry per pane when the strip is attached (hidden panes dimmed, the
/// active one highlighted), one entry per buffer otherwise.
pub(super) struct TopBarWidget {
    spans: Vec<Span<'static>>,
}

impl TopBarWidget {
    pub(super) fn from_session(session: &Session) -> Self {
        match &session.strip {
            Some(strip) => {
                let active = strip.active_pane_index(&session.workspace);
                let visible = strip.first_visible()..strip.first_visible() + strip.visible_count();
                let mut spans = Vec::new();
                for (index, pane) in strip.panes().iter().enumerate() {
                    let name = session
                        .workspace
                        .buffers
                        .get(pane.content)
                        .map(|buffer| buffer.name.clone())
                        .unwrap_or_else(|| "?".to_string());
                    let style = if active == Some(index) {
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else if visible.contains(&index) {
                        Style::default().fg(Color::White)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    spans.push(Span::styled(format!(" {} ", name), style));
                    spans.push(Span::raw(" "));
                }
                Self { spans }
            }
            None => {
                let active_buffer = session.workspace.active_view().buffer;
                let mut spans = Vec::new();
                for id in &session.workspace.buffer_order {
                    let Some(buffer) = session.workspace.buffers.get(*id) else {
                        continue;
                    };
                    let style = if *id == active_buffer {
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    spans.push(Span::styled(format!(" {} ", buffer.name), style));
                    spans.push(Span::raw(" "));
                }
                Self { spans }
            }
        }
    }
}

impl Widget for TopBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans)).render(area, buf);
    }
}
