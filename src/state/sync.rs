use tracing::trace;

use super::{Pane, PaneStrip};
use crate::host::WindowHost;

impl<H: WindowHost> PaneStrip<H> {
    /// Captures the host's active window as a fresh pane.
    pub(super) fn snapshot_current(host: &H) -> Pane<H::Content, H::Cursor> {
        Pane {
            content: host.active_content(),
            cursor: host.active_cursor(),
        }
    }

    /// Writes the live state of every visible window back into the pane
    /// sequence. Runs before anything that scrolls or reorders, so cursor
    /// motion and buffer switches the host performed are not lost.
    pub fn save_visible(&mut self, host: &H) {
        debug_assert!(self.first_visible + self.windows.len() <= self.panes.len());
        for (slot, window) in self.windows.iter().enumerate() {
            self.panes[self.first_visible + slot] = Pane {
                content: host.window_content(*window),
                cursor: host.window_cursor(*window),
            };
        }
    }

    /// Pushes the visible slice of the pane sequence out to the bound
    /// windows. Final step of every operation.
    pub fn redraw(&self, host: &mut H) {
        debug_assert!(self.first_visible + self.windows.len() <= self.panes.len());
        for (slot, window) in self.windows.iter().enumerate() {
            let pane = &self.panes[self.first_visible + slot];
            host.set_window_content(*window, pane.content.clone());
            host.set_window_cursor(*window, pane.cursor.clone());
        }
        trace!(
            "redraw: first_visible={} visible={}",
            self.first_visible,
            self.windows.len()
        );
    }

    /// Inserts just past the last index that is visible right now, so that a
    /// focus move to the right reveals the pane without extra scrolling.
    /// Returns the insertion index.
    pub(super) fn insert_after_visible_region(
        &mut self,
        pane: Pane<H::Content, H::Cursor>,
    ) -> usize {
        let index = (self.first_visible + self.windows.len()).min(self.panes.len());
        self.panes.insert(index, pane);
        index
    }
}
