//! Overlay geometry on a letterboxed canvas.

use cropdock::input::coords::DisplayTransform;
use cropdock::render::{even_odd_surround, overlay_commands, DrawCmd};
use cropdock::types::{CanvasRect, CropRect};

#[test]
fn window_maps_through_letterbox_transform() {
    // 800x600 image in a 400x400 canvas: scale 0.5, vertical bars of 50px.
    let xform = DisplayTransform::fit(800.0, 600.0, 400.0, 400.0);
    let rect = CropRect::new(160.0, 120.0, 480.0, 360.0);
    let cmds = overlay_commands(400.0, 400.0, &rect, &xform, true);

    let DrawCmd::MaskEvenOdd { outer, window, .. } = &cmds[0] else {
        panic!("first command must be the mask, got {:?}", cmds[0]);
    };
    assert_eq!(*outer, CanvasRect::new(0.0, 0.0, 400.0, 400.0));
    assert_eq!(*window, CanvasRect::new(80.0, 110.0, 240.0, 180.0));

    // The border strokes the same window.
    let DrawCmd::StrokeRect { rect: border, .. } = &cmds[1] else {
        panic!("second command must be the border, got {:?}", cmds[1]);
    };
    assert_eq!(*border, *window);
}

#[test]
fn mask_bands_cover_letterbox_margins() {
    // The dimming mask spans the whole canvas, letterbox bars included,
    // matching a full-surface even-odd fill.
    let outer = CanvasRect::new(0.0, 0.0, 400.0, 400.0);
    let window = CanvasRect::new(80.0, 110.0, 240.0, 180.0);
    let bands = even_odd_surround(&outer, &window);

    let area: f32 = bands.iter().map(|b| b.w * b.h).sum();
    assert_eq!(area, 400.0 * 400.0 - 240.0 * 180.0);
}

#[test]
fn handle_squares_are_centered_on_handle_points() {
    let xform = DisplayTransform::fit(200.0, 200.0, 200.0, 200.0);
    let rect = CropRect::new(40.0, 40.0, 100.0, 100.0);
    let cmds = overlay_commands(200.0, 200.0, &rect, &xform, false);

    // First handle fill is the nw corner: an 8px square centered on (40, 40).
    let fill = cmds
        .iter()
        .find_map(|c| match c {
            DrawCmd::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .unwrap();
    assert_eq!(fill, CanvasRect::new(36.0, 36.0, 8.0, 8.0));
}
