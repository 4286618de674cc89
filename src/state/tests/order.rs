use super::common::{FakeHost, pane_contents, strip_of, visible_contents};
use crate::host::WindowHost;
use crate::state::{ReorderOutcome, StripError};

#[test]
fn move_left_swaps_and_follows_the_pane() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C"], 3);
    strip.focus_left(&mut host);
    assert_eq!(strip.active_pane_index(&host), Some(1));

    let outcome = strip.move_left(&mut host);

    assert_eq!(outcome, ReorderOutcome::Moved);
    assert_eq!(pane_contents(&strip), ["B", "A", "C"]);
    assert_eq!(strip.active_pane_index(&host), Some(0));
    assert_eq!(host.active_content(), "B");
    assert_eq!(visible_contents(&host, &strip), ["B", "A", "C"]);
}

#[test]
fn move_left_at_first_pane_is_a_noop() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C"], 3);
    strip.focus_left(&mut host);
    strip.focus_left(&mut host);
    assert_eq!(strip.active_pane_index(&host), Some(0));

    let outcome = strip.move_left(&mut host);

    assert_eq!(outcome, ReorderOutcome::AtEdge);
    assert_eq!(pane_contents(&strip), ["A", "B", "C"]);
    assert_eq!(strip.first_visible(), 0);
    assert_eq!(strip.active_pane_index(&host), Some(0));
}

#[test]
fn move_right_at_last_pane_is_a_noop() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C", "D", "E"], 3);
    assert_eq!(strip.active_pane_index(&host), Some(4));

    let outcome = strip.move_right(&mut host);

    assert_eq!(outcome, ReorderOutcome::AtEdge);
    assert_eq!(pane_contents(&strip), ["A", "B", "C", "D", "E"]);
    assert_eq!(strip.first_visible(), 2);
}

#[test]
fn move_right_across_the_viewport_boundary_scrolls_to_follow() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C", "D", "E"], 3);
    for _ in 0..3 {
        strip.focus_left(&mut host);
    }
    strip.focus_right(&mut host);
    strip.focus_right(&mut host);
    // Rightmost slot, one hidden pane further right.
    assert_eq!(strip.first_visible(), 1);
    assert_eq!(strip.active_pane_index(&host), Some(3));
    assert_eq!(host.active_content(), "D");

    let outcome = strip.move_right(&mut host);

    assert_eq!(outcome, ReorderOutcome::Moved);
    assert_eq!(pane_contents(&strip), ["A", "B", "C", "E", "D"]);
    assert_eq!(strip.first_visible(), 2);
    assert_eq!(strip.active_pane_index(&host), Some(4));
    assert_eq!(host.active_content(), "D");
    assert_eq!(visible_contents(&host, &strip), ["C", "E", "D"]);
}

#[test]
fn reorder_with_a_single_pane_stays_put() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A"], 3);

    assert_eq!(strip.move_left(&mut host), ReorderOutcome::AtEdge);
    assert_eq!(strip.move_right(&mut host), ReorderOutcome::AtEdge);
    assert_eq!(pane_contents(&strip), ["A"]);
}

#[test]
fn swap_panes_validates_bounds() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B"], 3);

    assert_eq!(
        strip.swap_panes(0, 5),
        Err(StripError::OutOfRange { index: 5, len: 2 })
    );
    assert_eq!(pane_contents(&strip), ["A", "B"]);

    assert_eq!(strip.swap_panes(0, 1), Ok(()));
    assert_eq!(pane_contents(&strip), ["B", "A"]);
}
