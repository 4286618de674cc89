use std::path::{Path, PathBuf};

use slotmap::{SlotMap, new_key_type};
use tracing::error;

use crate::host::{FocusDirection, WindowHost};

new_key_type! { pub struct BufferId; }
new_key_type! { pub struct WindowId; }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    pub name: String,
    pub path: Option<PathBuf>,
    pub text: String,
}

/// 1-based row/column position inside a buffer. Stored per window and
/// restored verbatim when a pane becomes visible again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub row: u16,
    pub col: u16,
}

impl Default for CursorPos {
    fn default() -> Self {
        Self { row: 1, col: 1 }
    }
}

/// One real on-screen window: the buffer it shows and its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowView {
    pub buffer: BufferId,
    pub cursor: CursorPos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferCycle {
    Prev,
    Next,
}

/// The terminal side of the application: buffers, side-by-side windows in
/// screen order, and the active-window tracking the pane strip derives
/// focus from.
#[derive(Debug)]
pub struct Workspace {
    pub buffers: SlotMap<BufferId, Buffer>,
    pub buffer_order: Vec<BufferId>,
    pub windows: SlotMap<WindowId, WindowView>,
    pub screen_order: Vec<WindowId>,
    active: WindowId,
}

impl Workspace {
    pub fn new() -> Self {
        let mut buffers = SlotMap::with_key();
        let mut windows = SlotMap::with_key();

        let scratch = buffers.insert(Buffer {
            name: "untitled".to_string(),
            path: None,
            text: String::new(),
        });
        let window = windows.insert(WindowView {
            buffer: scratch,
            cursor: CursorPos::default(),
        });

        Self {
            buffers,
            buffer_order: vec![scratch],
            windows,
            screen_order: vec![window],
            active: window,
        }
    }

    pub fn create_buffer(&mut self, path: Option<PathBuf>, text: impl Into<String>) -> BufferId {
        let name = path
            .as_deref()
            .and_then(buffer_name_from_path)
            .unwrap_or_else(|| "untitled".to_string());
        let id = self.buffers.insert(Buffer {
            name,
            path,
            text: text.into(),
        });
        self.buffer_order.push(id);
        id
    }

    pub fn bind_buffer_to_active_window(&mut self, buffer_id: BufferId) {
        if !self.buffers.contains_key(buffer_id) {
            error!("bind failed: buffer {:?} not found", buffer_id);
            return;
        }
        let view = self
            .windows
            .get_mut(self.active)
            .expect("invariant: active window must exist");
        view.buffer = buffer_id;
        view.cursor = CursorPos::default();
    }

    /// Switches the active window to the previous/next buffer in creation
    /// order, wrapping at the ends.
    pub fn cycle_active_buffer(&mut self, direction: BufferCycle) {
        let view = self
            .windows
            .get(self.active)
            .copied()
            .expect("invariant: active window must exist");
        let Some(position) = self.buffer_order.iter().position(|id| *id == view.buffer) else {
            error!("cycle failed: active buffer {:?} not in buffer order", view.buffer);
            return;
        };
        let len = self.buffer_order.len();
        if len < 2 {
            return;
        }
        let target = match direction {
            BufferCycle::Prev => (position + len - 1) % len,
            BufferCycle::Next => (position + 1) % len,
        };
        self.bind_buffer_to_active_window(self.buffer_order[target]);
    }

    pub fn active_view(&self) -> &WindowView {
        self.windows
            .get(self.active)
            .expect("invariant: active window must exist")
    }

    pub fn active_buffer(&self) -> &Buffer {
        self.buffers
            .get(self.active_view().buffer)
            .expect("invariant: window buffer must exist")
    }

    pub fn move_cursor_up(&mut self) {
        let (text, mut cursor) = self.active_text_and_cursor();
        if cursor.row > 1 {
            cursor.row -= 1;
            cursor.col = cursor.col.min(line_len(&text, cursor.row).max(1));
            self.set_active_cursor(cursor);
        }
    }

    pub fn move_cursor_down(&mut self) {
        let (text, mut cursor) = self.active_text_and_cursor();
        if cursor.row < line_count(&text) {
            cursor.row += 1;
            cursor.col = cursor.col.min(line_len(&text, cursor.row).max(1));
            self.set_active_cursor(cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        let (_, mut cursor) = self.active_text_and_cursor();
        if cursor.col > 1 {
            cursor.col -= 1;
            self.set_active_cursor(cursor);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let (text, mut cursor) = self.active_text_and_cursor();
        if cursor.col < line_len(&text, cursor.row) {
            cursor.col += 1;
            self.set_active_cursor(cursor);
        }
    }

    fn active_text_and_cursor(&self) -> (String, CursorPos) {
        let view = self.active_view();
        let text = self
            .buffers
            .get(view.buffer)
            .map(|buffer| buffer.text.clone())
            .unwrap_or_default();
        (text, view.cursor)
    }

    fn set_active_cursor(&mut self, cursor: CursorPos) {
        if let Some(view) = self.windows.get_mut(self.active) {
            view.cursor = cursor;
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowHost for Workspace {
    type Window = WindowId;
    type Content = BufferId;
    type Cursor = CursorPos;

    fn active_window(&self) -> WindowId {
        self.active
    }

    fn active_content(&self) -> BufferId {
        self.window_content(self.active)
    }

    fn active_cursor(&self) -> CursorPos {
        self.window_cursor(self.active)
    }

    fn window_content(&self, window: WindowId) -> BufferId {
        self.windows
            .get(window)
            .expect("invariant: bound window must exist")
            .buffer
    }

    fn window_cursor(&self, window: WindowId) -> CursorPos {
        self.windows
            .get(window)
            .expect("invariant: bound window must exist")
            .cursor
    }

    fn set_window_content(&mut self, window: WindowId, content: BufferId) {
        if let Some(view) = self.windows.get_mut(window) {
            view.buffer = content;
        } else {
            error!("set content failed: window {:?} not found", window);
        }
    }

    fn set_window_cursor(&mut self, window: WindowId, cursor: CursorPos) {
        if let Some(view) = self.windows.get_mut(window) {
            view.cursor = cursor;
        } else {
            error!("set cursor failed: window {:?} not found", window);
        }
    }

    fn create_split_window(&mut self) -> WindowId {
        let view = self
            .windows
            .get(self.active)
            .copied()
            .expect("invariant: active window must exist");
        let id = self.windows.insert(view);
        self.screen_order.push(id);
        self.active = id;
        id
    }

    fn close_all_windows_except_active(&mut self) {
        let active = self.active;
        self.screen_order.retain(|id| *id == active);
        self.windows.retain(|id, _| id == active);
    }

    fn focus_window(&mut self, window: WindowId) {
        if self.windows.contains_key(window) {
            self.active = window;
        } else {
            error!("focus failed: window {:?} not found", window);
        }
    }

    fn move_focus(&mut self, direction: FocusDirection) {
        let Some(position) = self.screen_order.iter().position(|id| *id == self.active) else {
            return;
        };
        let target = match direction {
            FocusDirection::Left => position.checked_sub(1),
            FocusDirection::Right => {
                if position + 1 < self.screen_order.len() {
                    Some(position + 1)
                } else {
                    None
                }
            }
        };
        if let Some(target) = target {
            self.active = self.screen_order[target];
        }
    }

    fn rebalance_window_sizes(&mut self) {
        // The renderer derives equal widths from the screen order on every
        // frame, so there is nothing to recompute here.
    }
}

fn buffer_name_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
}

pub(crate) fn line_count(text: &str) -> u16 {
    if text.is_empty() {
        1
    } else {
        text.lines().count() as u16
    }
}

pub(crate) fn line_len(text: &str, row: u16) -> u16 {
    text.lines()
        .nth(usize::from(row.saturating_sub(1)))
        .map(|line| line.chars().count() as u16)
        .unwrap_or(0)
}
