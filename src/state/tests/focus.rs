use super::common::{FakeHost, pane_contents, strip_of, visible_contents};
use crate::host::WindowHost;
use crate::state::NavOutcome;

#[test]
fn focus_right_inside_viewport_moves_focus_only() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C", "D", "E"], 3);
    for _ in 0..3 {
        strip.focus_left(&mut host);
    }
    strip.focus_right(&mut host);
    assert_eq!(strip.first_visible(), 1);
    assert_eq!(strip.active_pane_index(&host), Some(2));

    let outcome = strip.focus_right(&mut host);

    assert_eq!(outcome, NavOutcome::Focused);
    assert_eq!(strip.first_visible(), 1);
    assert_eq!(strip.active_pane_index(&host), Some(3));
    assert_eq!(visible_contents(&host, &strip), ["B", "C", "D"]);
}

#[test]
fn focus_right_at_rightmost_slot_scrolls_viewport() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C", "D", "E"], 3);
    for _ in 0..3 {
        strip.focus_left(&mut host);
    }
    strip.focus_right(&mut host);
    strip.focus_right(&mut host);
    assert_eq!(strip.first_visible(), 1);
    assert_eq!(strip.active_pane_index(&host), Some(3));

    let window_before = host.active;
    let outcome = strip.focus_right(&mut host);

    assert_eq!(outcome, NavOutcome::Scrolled);
    assert_eq!(strip.first_visible(), 2);
    // Same real window, but the slot now maps to the revealed neighbour.
    assert_eq!(host.active, window_before);
    assert_eq!(strip.active_pane_index(&host), Some(4));
    assert_eq!(visible_contents(&host, &strip), ["C", "D", "E"]);
}

#[test]
fn focus_left_at_leftmost_slot_scrolls_viewport() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C", "D", "E"], 3);
    strip.focus_left(&mut host);
    strip.focus_left(&mut host);
    assert_eq!(strip.active_pane_index(&host), Some(2));

    let outcome = strip.focus_left(&mut host);

    assert_eq!(outcome, NavOutcome::Scrolled);
    assert_eq!(strip.first_visible(), 1);
    assert_eq!(strip.active_pane_index(&host), Some(1));
    assert_eq!(visible_contents(&host, &strip), ["B", "C", "D"]);
}

#[test]
fn focus_right_at_end_of_sequence_is_a_noop() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C", "D", "E"], 3);
    assert_eq!(strip.active_pane_index(&host), Some(4));

    let outcome = strip.focus_right(&mut host);

    assert_eq!(outcome, NavOutcome::AtEdge);
    assert_eq!(strip.first_visible(), 2);
    assert_eq!(strip.active_pane_index(&host), Some(4));
    assert_eq!(pane_contents(&strip), ["A", "B", "C", "D", "E"]);
}

#[test]
fn focus_left_at_start_of_sequence_is_a_noop() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B"], 3);
    strip.focus_left(&mut host);
    assert_eq!(strip.active_pane_index(&host), Some(0));

    let outcome = strip.focus_left(&mut host);

    assert_eq!(outcome, NavOutcome::AtEdge);
    assert_eq!(strip.first_visible(), 0);
    assert_eq!(strip.active_pane_index(&host), Some(0));
}

#[test]
fn scrolling_away_and_back_restores_cursor_state() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B", "C", "D"], 3);
    assert_eq!(strip.first_visible(), 1);
    assert_eq!(host.active_content(), "D");
    host.set_active_cursor(42);

    // Scroll D out of view and back in.
    for _ in 0..3 {
        strip.focus_left(&mut host);
    }
    assert_eq!(strip.first_visible(), 0);
    for _ in 0..3 {
        strip.focus_right(&mut host);
    }

    assert_eq!(host.active_content(), "D");
    assert_eq!(host.active_cursor(), 42);
    assert_eq!(strip.panes()[3].cursor, 42);
}

#[test]
fn focus_with_unbound_active_window_is_reported_not_fatal() {
    let mut host = FakeHost::new();
    let mut strip = strip_of(&mut host, &["A", "B"], 3);
    host.active = 99;

    let outcome = strip.focus_right(&mut host);

    assert_eq!(outcome, NavOutcome::AtEdge);
    assert_eq!(pane_contents(&strip), ["A", "B"]);
    assert_eq!(strip.first_visible(), 0);
}
