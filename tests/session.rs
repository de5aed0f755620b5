//! End-to-end sessions driven through the public API with a recording surface.
#![allow(clippy::float_cmp)]

use linecross::config::Config;
use linecross::engine::{Action, EngineCore};
use linecross::geometry::{Point, Segment};
use linecross::input::{Button, HeldButtons, InputState};
use linecross::surface::{DrawCall, RecordingSurface};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// A core whose surface sits at (8, 8) in client space, like a canvas inside a page margin.
fn session() -> (EngineCore, RecordingSurface) {
    (EngineCore::new().with_offset(pt(8.0, 8.0)), RecordingSurface::new())
}

fn client(x: f64, y: f64) -> Point {
    pt(x + 8.0, y + 8.0)
}

#[test]
fn two_click_drawing_with_drag_preview() {
    let (mut core, mut surface) = session();

    core.on_pointer_down(client(0.0, 0.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(client(10.0, 10.0), Button::Primary, &mut surface).unwrap();

    core.on_pointer_down(client(0.0, 10.0), Button::Primary, &mut surface).unwrap();
    let preview = core
        .on_pointer_move(client(10.0, 0.0), HeldButtons::primary(), &mut surface)
        .unwrap();
    assert_eq!(
        preview,
        vec![Action::Previewed { segment: Segment::new(0.0, 10.0, 10.0, 0.0), hits: vec![pt(5.0, 5.0)] }]
    );
    assert_eq!(core.scene.point_count(), 0);

    core.on_pointer_down(client(10.0, 0.0), Button::Primary, &mut surface).unwrap();

    assert_eq!(core.scene.segment_count(), 2);
    assert_eq!(core.scene.points(), &[pt(5.0, 5.0)]);
    assert_eq!(
        surface.frame(),
        &[
            DrawCall::Segment(Segment::new(0.0, 0.0, 10.0, 10.0)),
            DrawCall::Segment(Segment::new(0.0, 10.0, 10.0, 0.0)),
            DrawCall::Marker { center: pt(5.0, 5.0), radius: 5.0 },
        ]
    );
}

#[test]
fn dragging_off_the_canvas_commits() {
    let (mut core, mut surface) = session();
    core.on_pointer_down(client(0.0, 50.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(client(100.0, 50.0), Button::Primary, &mut surface).unwrap();

    core.on_pointer_down(client(50.0, 0.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_move(client(50.0, 60.0), HeldButtons::primary(), &mut surface)
        .unwrap();
    let actions = core.on_pointer_leave(client(50.0, 120.0), &mut surface).unwrap();

    assert_eq!(
        actions,
        vec![Action::PointAdded(pt(50.0, 50.0)), Action::SegmentAdded(Segment::new(50.0, 0.0, 50.0, 120.0))]
    );
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn right_click_commit_leaves_scene_unchanged() {
    let (mut core, mut surface) = session();
    core.on_pointer_down(client(0.0, 0.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(client(10.0, 10.0), Button::Primary, &mut surface).unwrap();

    core.on_pointer_down(client(0.0, 10.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(client(10.0, 0.0), Button::Secondary, &mut surface).unwrap();

    assert_eq!(core.scene.segment_count(), 1);
    assert_eq!(core.scene.point_count(), 0);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn clear_animation_shrinks_then_empties() {
    let (mut core, mut surface) = session();
    core.on_pointer_down(client(0.0, 0.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(client(200.0, 200.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(client(0.0, 200.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(client(200.0, 0.0), Button::Primary, &mut surface).unwrap();
    assert_eq!(core.scene.points(), &[pt(100.0, 100.0)]);

    assert_eq!(core.start_clear(), vec![Action::ClearStarted]);
    assert_eq!(core.start_clear(), vec![Action::ClearIgnored]);

    core.advance_clear(100, &mut surface).unwrap();
    assert_eq!(
        core.scene.segments(),
        &[Segment::new(10.0, 10.0, 190.0, 190.0), Segment::new(10.0, 190.0, 190.0, 10.0)]
    );
    // Markers are recomputed per tick and flushed once drawn.
    assert_eq!(core.scene.point_count(), 0);
    assert_eq!(surface.frame_markers(), vec![pt(100.0, 100.0), pt(100.0, 100.0)]);

    let actions = core.advance_clear(2900, &mut surface).unwrap();
    assert_eq!(actions, vec![Action::ClearFinished]);
    assert!(core.scene.is_empty());
    assert!(surface.frame().is_empty());

    // A fresh clear is accepted once the previous run is over.
    assert_eq!(core.start_clear(), vec![Action::ClearStarted]);
}

#[test]
fn json_config_drives_style_and_timing() {
    let config = Config::from_json(
        r#"{ "style": { "marker_radius": 3.0 }, "clear": { "tick_ms": 50, "duration_ms": 500 } }"#,
    )
    .unwrap();
    let mut core = EngineCore::with_config(config);
    let mut surface = RecordingSurface::new();

    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(pt(0.0, 10.0), Button::Primary, &mut surface).unwrap();
    core.on_pointer_down(pt(10.0, 0.0), Button::Primary, &mut surface).unwrap();
    assert!(surface.frame().contains(&DrawCall::Marker { center: pt(5.0, 5.0), radius: 3.0 }));

    core.start_clear();
    assert!(core.advance_clear(499, &mut surface).unwrap().is_empty());
    assert_eq!(core.advance_clear(1, &mut surface).unwrap(), vec![Action::ClearFinished]);
}
