//! Snapshot tests using the insta crate.
//!
//! Inline JSON snapshots pin the serialized shape of the geometry
//! vocabulary; update with `cargo insta test --accept` after an
//! intentional change.

use cropdock::types::{CropRect, Handle};

#[test]
fn seeded_rect_shape() {
    insta::assert_json_snapshot!(CropRect::seeded(800.0, 600.0), @r#"
    {
      "x": 160.0,
      "y": 120.0,
      "w": 480.0,
      "h": 360.0
    }
    "#);
}

#[test]
fn handle_priority_order() {
    insta::assert_json_snapshot!(Handle::ALL, @r#"
    [
      "Nw",
      "N",
      "Ne",
      "E",
      "Se",
      "S",
      "Sw",
      "W"
    ]
    "#);
}
