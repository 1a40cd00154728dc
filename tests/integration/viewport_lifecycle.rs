// =====
// TESTS: 9
// =====
//
// Viewport controller lifecycle against the real scroll surface and input bus.

use chat_viewport::viewport::{
    CENTERING_MARGIN, InputBus, PointerChannel, ScrollSurface, StyleHints, Surface, TextSelection,
    ViewportController, ViewportOptions,
};
use pretty_assertions::assert_eq;

fn mount(enable_pan: bool) -> (ViewportController, InputBus, TextSelection) {
    let bus = InputBus::new();
    let selection = TextSelection::new();
    let options = ViewportOptions { enable_pan, ..ViewportOptions::default() };
    (ViewportController::mount(options, &bus, &selection), bus, selection)
}

fn surface(content_w: i32, content_h: i32, client_w: i32, client_h: i32) -> ScrollSurface {
    let mut s = ScrollSurface::new();
    s.layout(content_w, content_h, client_w, client_h);
    s
}

fn settle(surface: &mut ScrollSurface) {
    for _ in 0..64 {
        surface.tick();
    }
}

// --- teardown ---

#[test]
fn unmount_without_interaction_leaves_nothing_behind() {
    let (mut vc, bus, selection) = mount(true);
    vc.unmount();
    assert!(selection.is_enabled());
    assert_eq!(bus.listener_count(), 0);
    assert!(!bus.has_listeners(PointerChannel::Move));
    assert!(!bus.has_listeners(PointerChannel::Up));
}

#[test]
fn events_after_unmount_change_nothing() {
    let (mut vc, _bus, selection) = mount(true);
    let mut s = surface(400, 400, 100, 100);
    s.set_scroll(50, 50);
    vc.unmount();
    vc.pointer_down(&s, 0, 0);
    vc.pointer_move(&mut s, 20, 20);
    vc.pointer_up();
    assert_eq!(s.offset(), (50, 50));
    assert!(selection.is_enabled());
}

// --- gestures ---

#[test]
fn full_gesture_restores_selection_state() {
    for pan in [false, true] {
        let (mut vc, _bus, selection) = mount(pan);
        let mut s = surface(400, 400, 100, 100);
        let before = selection.is_enabled();
        vc.pointer_down(&s, 10, 10);
        assert!(!selection.is_enabled());
        vc.pointer_move(&mut s, 12, 15);
        vc.pointer_up();
        assert_eq!(selection.is_enabled(), before);
    }
}

#[test]
fn drag_offsets_follow_pointer_exactly() {
    let cases = [((100, 100), (5, 5)), ((100, 100), (-20, 30)), ((250, 10), (0, -7))];
    for ((sx, sy), (dx, dy)) in cases {
        let (mut vc, _bus, _sel) = mount(true);
        let mut s = surface(1000, 1000, 100, 100);
        s.set_scroll(sx, sy);
        vc.pointer_down(&s, 50, 50);
        vc.pointer_move(&mut s, 50 + dx, 50 + dy);
        assert_eq!(s.offset(), (sx - dx, sy - dy));
    }
}

#[test]
fn drag_past_edge_is_clamped_by_surface() {
    let (mut vc, _bus, _sel) = mount(true);
    let mut s = surface(200, 200, 100, 100);
    vc.pointer_down(&s, 0, 0);
    vc.pointer_move(&mut s, -500, -500);
    assert_eq!(s.offset(), (100, 100));
}

// --- first layout ---

#[test]
fn centering_runs_once_per_mount() {
    let (mut vc, _bus, _sel) = mount(true);
    let mut s = surface(300, 400, 100, 100);
    let first = StyleHints::default().with_leading_inset(100);
    vc.first_layout(&mut s, Some(&first));
    assert_eq!(s.offset(), (100, 100 - CENTERING_MARGIN));
    s.set_scroll(0, 0);
    vc.first_layout(&mut s, Some(&first));
    assert_eq!(s.offset(), (0, 0));
}

// --- content replacement ---

#[test]
fn stable_height_scrolls_to_bottom() {
    let (mut vc, _bus, _sel) = mount(false);
    let mut s = surface(100, 1000, 100, 400);
    vc.content_replaced(&mut s);
    vc.content_replaced(&mut s);
    settle(&mut s);
    let metrics = s.metrics().unwrap();
    assert_eq!(s.offset().1, metrics.max_scroll_top());
}

#[test]
fn resize_records_baseline_and_leaves_offset() {
    let (mut vc, _bus, _sel) = mount(false);
    let mut s = surface(100, 1000, 100, 400);
    vc.content_replaced(&mut s);
    s.set_scroll(0, 120);
    s.layout(100, 1000, 100, 350);
    vc.content_replaced(&mut s);
    settle(&mut s);
    assert_eq!(s.offset(), (0, 120));
    assert_eq!(vc.observed_client_height(), 350);
}

#[test]
fn remount_resets_centering_and_baseline() {
    let bus = InputBus::new();
    let selection = TextSelection::new();
    let options = ViewportOptions { enable_pan: true, ..ViewportOptions::default() };
    let mut s = surface(300, 400, 100, 100);

    let mut vc = ViewportController::mount(options.clone(), &bus, &selection);
    vc.first_layout(&mut s, None);
    vc.content_replaced(&mut s);
    vc.unmount();

    let fresh = ViewportController::mount(options, &bus, &selection);
    assert!(!fresh.is_centered());
    assert_eq!(fresh.observed_client_height(), 0);
    assert_eq!(bus.listener_count(), 2);
}
