use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::host::WindowHost;
use crate::session::Session;

/// The bound windows side by side, separated by a single rule column. Each
/// window scrolls vertically on its own so its cursor row stays in view.
pub(super) struct WindowAreaWidget {
    views: Vec<PaneView>,
    separators: Vec<u16>,
}

struct PaneView {
    rect: Rect,
    text: String,
    active: bool,
}

impl WindowAreaWidget {
    pub(super) fn from_session(session: &Session, area: Rect) -> (Self, Option<(u16, u16)>) {
        let workspace = &session.workspace;
        let (columns, separators) = split_columns(area, workspace.screen_order.len());
        let mut views = Vec::new();
        let mut cursor_position = None;

        for (window_id, rect) in workspace.screen_order.iter().zip(&columns) {
            let Some(view) = workspace.windows.get(*window_id) else {
                continue;
            };
            let Some(buffer) = workspace.buffers.get(view.buffer) else {
                continue;
            };
            if rect.width == 0 || rect.height == 0 {
                continue;
            }

            let visible_rows = usize::from(rect.height);
            let cursor_row = usize::from(view.cursor.row.max(1)) - 1;
            let scroll_y = cursor_row.saturating_sub(visible_rows - 1);
            let text = buffer
                .text
                .lines()
                .skip(scroll_y)
                .take(visible_rows)
                .map(|line| truncate_to_width(line, usize::from(rect.width)))
                .collect::<Vec<_>>()
                .join("\n");

            let active = *window_id == workspace.active_window();
            if active {
                let line = buffer.text.lines().nth(cursor_row).unwrap_or("");
                let x = rect
                    .x
                    .saturating_add(display_col(line, view.cursor.col))
                    .min(rect.x + rect.width - 1);
                let y = rect.y + (cursor_row - scroll_y) as u16;
                cursor_position = Some((x, y));
            }

            views.push(PaneView {
                rect: *rect,
                text,
                active,
            });
        }

        (Self { views, separators }, cursor_position)
    }
}

impl Widget for WindowAreaWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for view in self.views {
            let style = if view.active {
                Style::default()
            } else {
                Style::default().fg(Color::Gray)
            };
            Paragraph::new(view.text).style(style).render(view.rect, buf);
        }
        for x in self.separators {
            for y in area.y..area.y + area.height {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("│");
                    cell.set_style(Style::default().fg(Color::DarkGray));
                }
            }
        }
    }
}

/// Divides `area` into `count` columns with a one-cell separator between
/// adjacent columns. Leftover cells go to the leftmost columns. Returns the
/// column rects and the separator x positions.
fn split_columns(area: Rect, count: usize) -> (Vec<Rect>, Vec<u16>) {
    let count = count.max(1) as u16;
    let separators = count - 1;
    let usable = area.width.saturating_sub(separators);
    let base = usable / count;
    let extra = usable % count;

    let mut columns = Vec::new();
    let mut separator_xs = Vec::new();
    let mut x = area.x;
    for index in 0..count {
        let width = base + u16::from(index < extra);
        columns.push(Rect {
            x,
            y: area.y,
            width,
            height: area.height,
        });
        x += width;
        if index + 1 < count {
            separator_xs.push(x);
            x += 1;
        }
    }
    (columns, separator_xs)
}

/// Cuts `line` down to at most `width` display cells, never splitting a
/// wide character in half.
fn truncate_to_width(line: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in line.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out
}

/// Display column of the 1-based character index `col` within `line`.
fn display_col(line: &str, col: u16) -> u16 {
    line.chars()
        .take(usize::from(col.saturating_sub(1)))
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0) as u16)
        .sum()
}
