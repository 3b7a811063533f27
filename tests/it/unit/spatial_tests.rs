//! Unit tests for the spatial engine: click-vs-drag disambiguation,
//! two-phase clamping, commit suppression, and geometry degeneracies.

use crate::helpers::{FakeSpatialSurface, init_tracing};
use planboard::{Intent, Point, SpatialEngine, VisualHint};

fn engine() -> SpatialEngine<Vec<Intent>> {
    init_tracing();
    SpatialEngine::new(Vec::new())
}

#[test]
fn click_without_crossing_threshold_emits_no_intent() {
    let mut surface = FakeSpatialSurface::new(400.0, 400.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"a".into()), &surface);
    // 3px on both axes is still a click; the threshold is strict.
    let hints = engine.on_pointer_move(Point::new(203.0, 197.0), &surface);
    surface.apply(&hints);
    engine.on_pointer_up(&surface);

    assert!(engine.sink().is_empty());
}

#[test]
fn drag_right_by_100px_commits_three_quarters() {
    let mut surface = FakeSpatialSurface::new(400.0, 400.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"a".into()), &surface);
    let hints = engine.on_pointer_move(Point::new(300.0, 200.0), &surface);
    assert_eq!(hints, vec![VisualHint::PlaceItem { id: "a".into(), x: 0.75, y: 0.5 }]);
    surface.apply(&hints);
    engine.on_pointer_up(&surface);

    assert_eq!(
        engine.sink().as_slice(),
        [Intent::MoveItem { id: "a".into(), x: 0.75, y: 0.5 }]
    );
}

#[test]
fn commit_clamps_to_margin_when_dragged_past_the_edge() {
    let mut surface = FakeSpatialSurface::new(400.0, 400.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"a".into()), &surface);
    // Way past the right and top edges; drag feedback clamps loosely to [0, 1].
    let hints = engine.on_pointer_move(Point::new(900.0, -500.0), &surface);
    assert_eq!(hints, vec![VisualHint::PlaceItem { id: "a".into(), x: 1.0, y: 0.0 }]);
    surface.apply(&hints);
    engine.on_pointer_up(&surface);

    assert_eq!(
        engine.sink().as_slice(),
        [Intent::MoveItem { id: "a".into(), x: 0.98, y: 0.02 }]
    );
}

#[test]
fn committed_coordinates_are_rounded_to_four_decimals() {
    let mut surface = FakeSpatialSurface::new(300.0, 300.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    engine.on_pointer_down(Point::new(150.0, 150.0), Some(&"a".into()), &surface);
    // 250/300 = 0.8333...
    let hints = engine.on_pointer_move(Point::new(250.0, 150.0), &surface);
    surface.apply(&hints);
    engine.on_pointer_up(&surface);

    assert_eq!(
        engine.sink().as_slice(),
        [Intent::MoveItem { id: "a".into(), x: 0.8333, y: 0.5 }]
    );
}

#[test]
fn drag_ending_back_at_start_is_suppressed() {
    let mut surface = FakeSpatialSurface::new(400.0, 400.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"a".into()), &surface);
    let out = engine.on_pointer_move(Point::new(260.0, 240.0), &surface);
    surface.apply(&out);
    let back = engine.on_pointer_move(Point::new(200.0, 200.0), &surface);
    surface.apply(&back);
    engine.on_pointer_up(&surface);

    // `moved` was set, but the final value equals the committed one.
    assert!(engine.sink().is_empty());
}

#[test]
fn second_pointer_down_does_not_corrupt_the_active_gesture() {
    let mut surface = FakeSpatialSurface::new(400.0, 400.0)
        .with_item("a", 0.5, 0.5)
        .with_item("b", 0.25, 0.25);
    let mut engine = engine();

    engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"a".into()), &surface);
    let ignored = engine.on_pointer_down(Point::new(100.0, 100.0), Some(&"b".into()), &surface);
    assert!(ignored.is_empty());

    let hints = engine.on_pointer_move(Point::new(300.0, 200.0), &surface);
    surface.apply(&hints);
    engine.on_pointer_up(&surface);

    assert_eq!(
        engine.sink().as_slice(),
        [Intent::MoveItem { id: "a".into(), x: 0.75, y: 0.5 }]
    );
}

#[test]
fn disabled_item_never_starts_a_gesture() {
    let surface = FakeSpatialSurface::new(400.0, 400.0).with_disabled_item("ghost", 0.5, 0.5);
    let mut engine = engine();

    let hints = engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"ghost".into()), &surface);
    assert!(hints.is_empty());
    assert!(engine.on_pointer_move(Point::new(300.0, 200.0), &surface).is_empty());
}

#[test]
fn pointer_down_without_target_is_a_no_op() {
    let surface = FakeSpatialSurface::new(400.0, 400.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    assert!(engine.on_pointer_down(Point::new(10.0, 10.0), None, &surface).is_empty());
    assert!(engine.on_pointer_move(Point::new(50.0, 50.0), &surface).is_empty());
    assert!(engine.on_pointer_up(&surface).is_empty());
    assert!(engine.sink().is_empty());
}

#[test]
fn zero_size_surface_degrades_to_no_movement() {
    let surface = FakeSpatialSurface::new(0.0, 400.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    let hints = engine.on_pointer_down(Point::new(0.0, 200.0), Some(&"a".into()), &surface);
    assert!(hints.is_empty());
    assert!(engine.sink().is_empty());
}

#[test]
fn pointer_cancel_takes_the_pointer_up_path() {
    let mut surface = FakeSpatialSurface::new(400.0, 400.0).with_item("a", 0.5, 0.5);
    let mut engine = engine();

    engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"a".into()), &surface);
    let hints = engine.on_pointer_move(Point::new(300.0, 200.0), &surface);
    surface.apply(&hints);
    let hints = engine.on_pointer_cancel(&surface);
    assert_eq!(hints, vec![VisualHint::SettleItem { id: "a".into() }]);
    assert_eq!(engine.sink().len(), 1);

    // No orphaned state: a fresh gesture starts normally.
    let hints = engine.on_pointer_down(Point::new(200.0, 200.0), Some(&"a".into()), &surface);
    assert_eq!(hints, vec![VisualHint::LiftItem { id: "a".into() }]);
}

#[test]
fn layout_pass_is_idempotent() {
    let surface = FakeSpatialSurface::new(400.0, 400.0)
        .with_item("a", 0.25, 0.75)
        .with_item("b", 0.5, 0.5);
    let engine = engine();

    let first = engine.layout_pass(&surface);
    let second = engine.layout_pass(&surface);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert!(first.contains(&VisualHint::PlaceItem { id: "a".into(), x: 0.25, y: 0.75 }));
}
