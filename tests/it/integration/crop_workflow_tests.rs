//! Pointer-driven crop flows from click to commit.

use cropdock::input::drag;
use cropdock::ops;
use cropdock::types::{CanvasPoint, CropRect};

use crate::helpers::cropping_state;

#[test]
fn drag_new_rect_and_commit_on_letterboxed_canvas() {
    let mut state = cropping_state(800, 600);
    // 400x300 canvas: scale 0.5, no letterbox bars.
    let xform = state.display_transform(400.0, 300.0);

    // Press outside the seeded rectangle: the old one is discarded and a
    // fresh rectangle grows from the click point.
    assert!(drag::pointer_down(
        &mut state.crop,
        CanvasPoint::new(50.0, 50.0),
        &xform
    ));
    assert!(drag::pointer_move(
        &mut state.crop,
        CanvasPoint::new(150.0, 125.0),
        &xform,
        800.0,
        600.0
    ));
    drag::pointer_up(&mut state.crop);
    state.crop_fields.resync(&state.crop);

    assert_eq!(
        state.crop.rect(),
        Some(CropRect::new(100.0, 100.0, 200.0, 150.0))
    );
    assert_eq!(state.crop_fields.w, "200");
    assert_eq!(state.crop_fields.h, "150");

    ops::crop::apply_crop(&mut state).unwrap();

    let img = state.image.as_ref().unwrap();
    assert_eq!((img.current_w, img.current_h), (200, 150));
    assert_eq!(
        state.status,
        "Crop applied: 200×150 (from 200×150 source area)"
    );
}

#[test]
fn arbitrary_drag_sequence_keeps_rect_valid() {
    let mut state = cropping_state(800, 600);
    let xform = state.display_transform(800.0, 600.0);

    // Grab the se corner handle of the seeded rect at canvas (640, 480),
    // then sweep the pointer through hostile positions.
    assert!(drag::pointer_down(
        &mut state.crop,
        CanvasPoint::new(640.0, 480.0),
        &xform
    ));
    let sweep = [
        (2000.0, 2000.0),
        (-500.0, -500.0),
        (160.5, 120.5),
        (0.0, 599.0),
        (799.0, 0.0),
    ];
    for (x, y) in sweep {
        drag::pointer_move(&mut state.crop, CanvasPoint::new(x, y), &xform, 800.0, 600.0);
        let rect = state.crop.rect().unwrap();
        assert!(
            rect.is_valid_for(800.0, 600.0),
            "rect {rect:?} escaped bounds after move to ({x}, {y})"
        );
    }
    drag::pointer_up(&mut state.crop);
    assert!(state.crop.rect().unwrap().is_valid_for(800.0, 600.0));
}

#[test]
fn move_drag_slides_rect_without_resizing() {
    let mut state = cropping_state(800, 600);
    let xform = state.display_transform(800.0, 600.0);

    // Press inside the seeded rect (160,120 480x360), then drag far
    // past the top-left corner.
    assert!(drag::pointer_down(
        &mut state.crop,
        CanvasPoint::new(400.0, 300.0),
        &xform
    ));
    drag::pointer_move(
        &mut state.crop,
        CanvasPoint::new(-1000.0, -1000.0),
        &xform,
        800.0,
        600.0,
    );
    drag::pointer_up(&mut state.crop);

    let rect = state.crop.rect().unwrap();
    assert_eq!((rect.x, rect.y), (0.0, 0.0));
    assert_eq!((rect.w, rect.h), (480.0, 360.0));
}
