use std::cell::RefCell;
use std::rc::Rc;

use rangeband_rs::api::{RangeSelectionConfig, RangeSelectionOverlay};
use rangeband_rs::core::{LinearAxis, Viewport};
use rangeband_rs::interaction::{CursorIcon, PointerButton};

fn identity_axis() -> LinearAxis {
    // value == pixel over the whole plot
    LinearAxis::new(0.0, 500.0, 500.0).expect("valid axis")
}

fn viewport() -> Viewport {
    Viewport::new(500, 60)
}

fn overlay_100_400() -> RangeSelectionOverlay {
    RangeSelectionOverlay::new(RangeSelectionConfig::enabled().with_range(100.0, 400.0))
}

#[test]
fn resize_start_drag_commits_and_fires_callback() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    let committed_ranges = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&committed_ranges);
    overlay.set_callback(move |range| sink.borrow_mut().push(range));

    let cursor = overlay.on_pointer_down(102.0, PointerButton::Primary, &axis, viewport());
    assert_eq!(cursor, CursorIcon::ResizeStart);
    assert!(overlay.is_dragging());

    overlay.on_pointer_move(50.0, 10.0, &axis, viewport());
    let committed = overlay
        .on_pointer_release(50.0, &axis, viewport())
        .expect("commit");

    assert_eq!(committed.start, 50.0);
    assert_eq!(committed.end, 400.0);
    assert!(!overlay.is_dragging());
    assert_eq!(overlay.selected_range(), Some((50.0, 400.0)));

    let ranges = committed_ranges.borrow();
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, 50.0);
    assert_eq!(ranges[0].end, 400.0);
}

#[test]
fn move_drag_translates_band_through_unclamped_branch() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    let cursor = overlay.on_pointer_down(250.0, PointerButton::Primary, &axis, viewport());
    assert_eq!(cursor, CursorIcon::Move);

    overlay.on_pointer_move(300.0, 10.0, &axis, viewport());
    let committed = overlay
        .on_pointer_release(300.0, &axis, viewport())
        .expect("commit");

    // dx = 50 and end = 450 <= 500, so no edge snap applies.
    assert_eq!(committed.start, 150.0);
    assert_eq!(committed.end, 450.0);
}

#[test]
fn preview_band_matches_committed_interval() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    overlay.on_pointer_down(102.0, PointerButton::Primary, &axis, viewport());
    overlay.on_pointer_move(37.0, 10.0, &axis, viewport());

    let frame = overlay
        .build_overlay_frame(&axis, viewport())
        .expect("drag frame");
    let band = frame.band.expect("band while dragging");

    let committed = overlay
        .on_pointer_release(37.0, &axis, viewport())
        .expect("commit");

    assert_eq!(band.x, committed.start);
    assert_eq!(band.x + band.width, committed.end);
}

#[test]
fn disabled_overlay_ignores_every_pointer_event() {
    let axis = identity_axis();
    let mut overlay =
        RangeSelectionOverlay::new(RangeSelectionConfig::default().with_range(100.0, 400.0));

    let cursor = overlay.on_pointer_move(250.0, 10.0, &axis, viewport());
    assert_eq!(cursor, CursorIcon::Default);

    let cursor = overlay.on_pointer_down(250.0, PointerButton::Primary, &axis, viewport());
    assert_eq!(cursor, CursorIcon::Default);
    assert!(!overlay.is_dragging());

    assert!(overlay.on_pointer_release(300.0, &axis, viewport()).is_none());
    assert_eq!(overlay.selected_range(), Some((100.0, 400.0)));
}

#[test]
fn non_primary_button_does_not_open_a_session() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    overlay.on_pointer_down(250.0, PointerButton::Secondary, &axis, viewport());
    assert!(!overlay.is_dragging());

    overlay.on_pointer_down(250.0, PointerButton::Auxiliary, &axis, viewport());
    assert!(!overlay.is_dragging());
}

#[test]
fn negative_coordinates_short_circuit_to_default_cursor() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    assert_eq!(
        overlay.on_pointer_move(-4.0, 10.0, &axis, viewport()),
        CursorIcon::Default
    );
    assert_eq!(
        overlay.on_pointer_move(250.0, -1.0, &axis, viewport()),
        CursorIcon::Default
    );
    assert!(!overlay.is_dragging());
}

#[test]
fn release_without_a_session_is_ignored() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    assert!(overlay.on_pointer_release(250.0, &axis, viewport()).is_none());
    assert_eq!(overlay.selected_range(), Some((100.0, 400.0)));
}

#[test]
fn hover_feedback_matches_handle_zones() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    assert_eq!(
        overlay.on_pointer_move(101.0, 10.0, &axis, viewport()),
        CursorIcon::ResizeStart
    );
    assert_eq!(
        overlay.on_pointer_move(399.0, 10.0, &axis, viewport()),
        CursorIcon::ResizeEnd
    );
    assert_eq!(
        overlay.on_pointer_move(250.0, 10.0, &axis, viewport()),
        CursorIcon::Move
    );
    assert_eq!(
        overlay.on_pointer_move(20.0, 10.0, &axis, viewport()),
        CursorIcon::Default
    );
    assert!(!overlay.is_dragging());
    assert_eq!(overlay.selected_range(), Some((100.0, 400.0)));
}

#[test]
fn moves_during_a_drag_request_coalesced_redraws() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    assert!(!overlay.take_redraw_request());

    overlay.on_pointer_down(250.0, PointerButton::Primary, &axis, viewport());
    overlay.on_pointer_move(260.0, 10.0, &axis, viewport());
    overlay.on_pointer_move(270.0, 10.0, &axis, viewport());

    // Two moves coalesce into one pending request.
    assert!(overlay.take_redraw_request());
    assert!(!overlay.take_redraw_request());

    overlay.on_pointer_release(270.0, &axis, viewport());
    assert!(overlay.take_redraw_request());
}

#[test]
fn release_position_beyond_plot_is_clamped_before_commit() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    overlay.on_pointer_down(398.0, PointerButton::Primary, &axis, viewport());
    let committed = overlay
        .on_pointer_release(900.0, &axis, viewport())
        .expect("commit");

    assert_eq!(committed.start, 100.0);
    assert_eq!(committed.end, 500.0);
}

#[test]
fn hover_exactly_at_tolerance_differs_from_press() {
    let axis = identity_axis();
    let mut overlay = overlay_100_400();

    // 5 px from the left handle: hover reads as inside-band...
    assert_eq!(
        overlay.on_pointer_move(105.0, 10.0, &axis, viewport()),
        CursorIcon::Move
    );
    // ...but a press still grabs the resize handle.
    assert_eq!(
        overlay.on_pointer_down(105.0, PointerButton::Primary, &axis, viewport()),
        CursorIcon::ResizeStart
    );
}
