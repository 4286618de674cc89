use tracing::{debug, error};

use super::{NavOutcome, PaneStrip};
use crate::host::{FocusDirection, WindowHost};

impl<H: WindowHost> PaneStrip<H> {
    /// Moves focus one pane to the left. At the leftmost slot this scrolls
    /// the viewport if a hidden pane exists in that direction; at the true
    /// start of the sequence it is a no-op beyond the save and redraw.
    pub fn focus_left(&mut self, host: &mut H) -> NavOutcome {
        self.save_visible(host);
        let Some(slot) = self.active_slot(host) else {
            self.report_lost_focus(host);
            return NavOutcome::AtEdge;
        };

        let outcome = if slot == 0 {
            if self.first_visible > 0 {
                self.first_visible -= 1;
                NavOutcome::Scrolled
            } else {
                NavOutcome::AtEdge
            }
        } else {
            host.move_focus(FocusDirection::Left);
            NavOutcome::Focused
        };

        self.redraw(host);
        if outcome == NavOutcome::AtEdge {
            debug!("focus left: already at the first pane");
        }
        outcome
    }

    /// Mirror of [`Self::focus_left`].
    pub fn focus_right(&mut self, host: &mut H) -> NavOutcome {
        self.save_visible(host);
        let Some(slot) = self.active_slot(host) else {
            self.report_lost_focus(host);
            return NavOutcome::AtEdge;
        };

        let outcome = if slot + 1 == self.windows.len() {
            if self.first_visible + self.windows.len() < self.panes.len() {
                self.first_visible += 1;
                NavOutcome::Scrolled
            } else {
                NavOutcome::AtEdge
            }
        } else {
            host.move_focus(FocusDirection::Right);
            NavOutcome::Focused
        };

        self.redraw(host);
        if outcome == NavOutcome::AtEdge {
            debug!("focus right: already at the last pane");
        }
        outcome
    }

    /// The active window is not part of the binding. Not detected beyond
    /// this point; `reload` is the recovery path.
    pub(super) fn report_lost_focus(&self, host: &mut H) {
        error!(
            "active window {:?} is not bound to the pane strip; reload to recover",
            host.active_window()
        );
        self.redraw(host);
    }
}
