use tracing::info;

use super::PaneStrip;
use crate::host::WindowHost;

impl<H: WindowHost> PaneStrip<H> {
    /// Builds a strip around the host's current active window: one pane,
    /// one bound window, viewport at the start of the sequence.
    pub fn attach(host: &H) -> Self {
        let pane = Self::snapshot_current(host);
        Self {
            panes: vec![pane],
            first_visible: 0,
            windows: vec![host.active_window()],
        }
    }

    /// Discards the strip and collapses the host back to a single window.
    /// The pane sequence is dropped; the active window keeps whatever it
    /// currently shows.
    pub fn detach(self, host: &mut H) {
        host.close_all_windows_except_active();
        info!("pane strip detached");
    }

    /// Opens a new pane seeded from the active window.
    ///
    /// The pane is inserted just past the currently visible region. When the
    /// active slot is the rightmost one and the viewport is at its
    /// `max_visible` ceiling the viewport shifts right by one instead of
    /// growing, which leaves the new pane on the rightmost slot. Below the
    /// ceiling the binding grows by a fresh split window. Either way focus
    /// ends on the rightmost slot.
    pub fn open(&mut self, host: &mut H, max_visible: usize) {
        self.save_visible(host);
        let pane = Self::snapshot_current(host);
        let at_capacity = self.windows.len() >= max_visible.max(1);
        let rightmost = self.active_slot(host) == Some(self.windows.len() - 1);

        let inserted = self.insert_after_visible_region(pane);

        if at_capacity && rightmost {
            self.first_visible += 1;
        } else if !at_capacity {
            let window = host.create_split_window();
            self.windows.push(window);
            host.rebalance_window_sizes();
        }

        self.redraw(host);
        let last = *self
            .windows
            .last()
            .expect("invariant: the window binding is never empty");
        host.focus_window(last);
        info!("opened pane at index {}", inserted);
    }

    /// Rebuilds the window binding from scratch to the recorded visible
    /// count, preserving the pane sequence and viewport. The existing
    /// windows are assumed unreliable, so nothing is saved first; whatever
    /// was last saved or redrawn is authoritative. Calling this twice in a
    /// row produces the same slot-to-pane mapping both times.
    pub fn reload(&mut self, host: &mut H) {
        let visible = self.windows.len();
        host.close_all_windows_except_active();
        self.windows.clear();
        self.windows.push(host.active_window());
        while self.windows.len() < visible {
            self.windows.push(host.create_split_window());
        }
        host.rebalance_window_sizes();

        self.redraw(host);
        host.focus_window(self.windows[0]);
        info!("window binding rebuilt with {} slots", visible);
    }
}
