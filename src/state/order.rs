use tracing::debug;

use super::{PaneStrip, ReorderOutcome, StripError};
use crate::host::{FocusDirection, WindowHost};

impl<H: WindowHost> PaneStrip<H> {
    /// Swaps the focused pane with its left neighbour and follows it, so
    /// focus stays on the content that moved.
    pub fn move_left(&mut self, host: &mut H) -> ReorderOutcome {
        self.move_pane(host, FocusDirection::Left)
    }

    /// Mirror of [`Self::move_left`].
    pub fn move_right(&mut self, host: &mut H) -> ReorderOutcome {
        self.move_pane(host, FocusDirection::Right)
    }

    fn move_pane(&mut self, host: &mut H, direction: FocusDirection) -> ReorderOutcome {
        self.save_visible(host);
        let Some(slot) = self.active_slot(host) else {
            self.report_lost_focus(host);
            return ReorderOutcome::AtEdge;
        };

        let index = self.first_visible + slot;
        let neighbour = match direction {
            FocusDirection::Left => index.checked_sub(1),
            FocusDirection::Right => {
                if index + 1 < self.panes.len() {
                    Some(index + 1)
                } else {
                    None
                }
            }
        };
        let Some(neighbour) = neighbour else {
            self.redraw(host);
            debug!("move pane: already at the edge of the sequence");
            return ReorderOutcome::AtEdge;
        };

        self.swap_panes(index, neighbour)
            .expect("invariant: neighbour index is validated before the swap");
        self.redraw(host);

        // Follow the pane. At a viewport boundary this scrolls instead of
        // moving focus, which is exactly what keeps the pane in view.
        match direction {
            FocusDirection::Left => self.focus_left(host),
            FocusDirection::Right => self.focus_right(host),
        };
        ReorderOutcome::Moved
    }

    /// Swaps two pane sequence entries in place. The viewport and the
    /// window binding are untouched by the swap itself.
    pub fn swap_panes(&mut self, a: usize, b: usize) -> Result<(), StripError> {
        let len = self.panes.len();
        for index in [a, b] {
            if index >= len {
                return Err(StripError::OutOfRange { index, len });
            }
        }
        self.panes.swap(a, b);
        Ok(())
    }
}
