#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// ShapeKind
// =============================================================

#[test]
fn kind_default_is_rectangle() {
    assert_eq!(ShapeKind::default(), ShapeKind::Rectangle);
}

#[test]
fn kind_parses_picker_values() {
    assert_eq!(ShapeKind::parse("rectangle"), Ok(ShapeKind::Rectangle));
    assert_eq!(ShapeKind::parse("circle"), Ok(ShapeKind::Circle));
    assert_eq!(ShapeKind::parse("ellipse"), Ok(ShapeKind::Ellipse));
}

#[test]
fn kind_parse_rejects_unknown_values() {
    let err = ShapeKind::parse("triangle");
    assert_eq!(err, Err(ShapeKindError("triangle".to_owned())));
}

#[test]
fn kind_parse_is_case_sensitive() {
    assert!(ShapeKind::parse("Rectangle").is_err());
}

#[test]
fn kind_error_names_the_offending_value() {
    let err = ShapeKindError("blob".to_owned());
    assert_eq!(err.to_string(), "unknown shape kind: \"blob\"");
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ShapeKind::Rectangle).unwrap(), json!("rectangle"));
    assert_eq!(serde_json::to_value(ShapeKind::Ellipse).unwrap(), json!("ellipse"));
}

// =============================================================
// BoundingBox
// =============================================================

#[test]
fn bounding_box_from_drag_spans_start_to_current() {
    let b = BoundingBox::from_drag(Point::new(50.0, 50.0), Point::new(150.0, 120.0));
    assert_eq!(b.x, 50.0);
    assert_eq!(b.y, 50.0);
    assert_eq!(b.width, 100.0);
    assert_eq!(b.height, 70.0);
}

#[test]
fn bounding_box_from_drag_goes_negative_up_left() {
    let b = BoundingBox::from_drag(Point::new(0.0, 0.0), Point::new(-40.0, -40.0));
    assert_eq!(b.width, -40.0);
    assert_eq!(b.height, -40.0);
}

#[test]
fn bounding_box_anchor_is_drag_start() {
    let b = BoundingBox::from_drag(Point::new(7.0, 9.0), Point::new(-3.0, 20.0));
    assert_eq!(b.anchor(), Point::new(7.0, 9.0));
}

// =============================================================
// Style
// =============================================================

#[test]
fn style_default_values() {
    let style = Style::default();
    assert_eq!(style.fill, "#D94B4B");
    assert_eq!(style.stroke, "#1F1A17");
    assert_eq!(style.stroke_width, 1.0);
}

// =============================================================
// Shape
// =============================================================

#[test]
fn shape_serde_round_trip() {
    let shape = Shape {
        kind: ShapeKind::Circle,
        bounds: BoundingBox { x: 1.0, y: 2.0, width: -3.0, height: 4.0 },
        style: Style { fill: "#fff".into(), stroke: "#000".into(), stroke_width: 2.5 },
        corner_radius: 0.0,
    };
    let value = serde_json::to_value(&shape).unwrap();
    assert_eq!(value["kind"], json!("circle"));
    let back: Shape = serde_json::from_value(value).unwrap();
    assert_eq!(back, shape);
}
