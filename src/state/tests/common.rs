use std::collections::HashMap;

use crate::host::{FocusDirection, WindowHost};
use crate::state::PaneStrip;

/// In-memory windowing environment: windows are small integers kept in
/// screen order, content is a tag string, cursors are byte offsets.
pub(super) struct FakeHost {
    next_window: u32,
    pub(super) screen_order: Vec<u32>,
    pub(super) active: u32,
    contents: HashMap<u32, String>,
    cursors: HashMap<u32, u64>,
}

impl FakeHost {
    pub(super) fn new() -> Self {
        let mut host = Self {
            next_window: 1,
            screen_order: Vec::new(),
            active: 0,
            contents: HashMap::new(),
            cursors: HashMap::new(),
        };
        let first = host.spawn_window();
        host.active = first;
        host
    }

    fn spawn_window(&mut self) -> u32 {
        let id = self.next_window;
        self.next_window += 1;
        self.screen_order.push(id);
        self.contents.insert(id, String::new());
        self.cursors.insert(id, 0);
        id
    }

    /// The host-side equivalent of switching the buffer shown in the
    /// focused window.
    pub(super) fn set_active_content(&mut self, content: &str) {
        self.contents.insert(self.active, content.to_string());
    }

    pub(super) fn set_active_cursor(&mut self, cursor: u64) {
        self.cursors.insert(self.active, cursor);
    }
}

impl WindowHost for FakeHost {
    type Window = u32;
    type Content = String;
    type Cursor = u64;

    fn active_window(&self) -> u32 {
        self.active
    }

    fn active_content(&self) -> String {
        self.window_content(self.active)
    }

    fn active_cursor(&self) -> u64 {
        self.window_cursor(self.active)
    }

    fn window_content(&self, window: u32) -> String {
        self.contents[&window].clone()
    }

    fn window_cursor(&self, window: u32) -> u64 {
        self.cursors[&window]
    }

    fn set_window_content(&mut self, window: u32, content: String) {
        assert!(self.contents.contains_key(&window), "unknown window");
        self.contents.insert(window, content);
    }

    fn set_window_cursor(&mut self, window: u32, cursor: u64) {
        assert!(self.cursors.contains_key(&window), "unknown window");
        self.cursors.insert(window, cursor);
    }

    fn create_split_window(&mut self) -> u32 {
        let id = self.spawn_window();
        self.active = id;
        id
    }

    fn close_all_windows_except_active(&mut self) {
        let active = self.active;
        self.screen_order.retain(|id| *id == active);
        self.contents.retain(|id, _| *id == active);
        self.cursors.retain(|id, _| *id == active);
    }

    fn focus_window(&mut self, window: u32) {
        assert!(self.screen_order.contains(&window), "unknown window");
        self.active = window;
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

    fn rebalance_window_sizes(&mut self) {}
}

/// Builds a strip whose pane sequence shows `names` left to right, the way
/// a user would: open a pane, then switch the new window's content. The
/// final layout depends on `max_visible`; with more names than slots the
/// viewport ends scrolled to the right and focus sits on the rightmost
/// slot.
pub(super) fn strip_of(
    host: &mut FakeHost,
    names: &[&str],
    max_visible: usize,
) -> PaneStrip<FakeHost> {
    let (first, rest) = names.split_first().expect("at least one pane");
    host.set_active_content(first);
    let mut strip = PaneStrip::attach(host);
    for name in rest {
        strip.open(host, max_visible);
        host.set_active_content(name);
    }
    // Settle the last content switch into the sequence.
    strip.save_visible(host);
    strip
}

pub(super) fn pane_contents(strip: &PaneStrip<FakeHost>) -> Vec<String> {
    strip.panes().iter().map(|pane| pane.content.clone()).collect()
}

/// Contents displayed by the bound windows, slot 0 first.
pub(super) fn visible_contents(host: &FakeHost, strip: &PaneStrip<FakeHost>) -> Vec<String> {
    strip
        .windows()
        .iter()
        .map(|window| host.window_content(*window))
        .collect()
}

pub(super) fn assert_invariants(strip: &PaneStrip<FakeHost>, max_visible: usize) {
    assert!(strip.visible_count() >= 1);
    assert!(strip.visible_count() <= max_visible);
    assert!(strip.first_visible() + strip.visible_count() <= strip.len());
    assert_eq!(strip.windows().len(), strip.visible_count());
}
