use serde::{Deserialize, Serialize};
use serde_json::json;

use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Point {
    x: f64,
    y: f64,
}

impl ValueObject for Point {
    const TYPE_NAME: &'static str = "Test.Point";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Shape {
    origin: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    corners: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl ValueObject for Shape {
    const TYPE_NAME: &'static str = "Test.Shape";
}

#[test]
fn test_nested_reconstruction_matches_direct() {
    let raw_origin = json!({"x": 1.0, "y": 2.0});
    let shape = Shape::from_raw(json!({"origin": raw_origin.clone()})).unwrap();
    assert_eq!(shape.origin, Point::from_raw(raw_origin).unwrap());
}

#[test]
fn test_sequence_elements_rebuilt() {
    let shape = Shape::from_raw(json!({
        "origin": {"x": 0.0, "y": 0.0},
        "corners": [{"x": 1.0, "y": 1.0}, {"x": 2.0, "y": 3.0}]
    }))
    .unwrap();
    let corners = shape.corners.unwrap();
    assert_eq!(corners.len(), 2);
    assert_eq!(corners[1], Point { x: 2.0, y: 3.0 });
}

#[test]
fn test_absent_optional_is_none_not_empty() {
    let absent = Shape::from_raw(json!({"origin": {"x": 0.0, "y": 0.0}})).unwrap();
    assert!(absent.corners.is_none());
    assert!(absent.label.is_none());

    let empty = Shape::from_raw(json!({
        "origin": {"x": 0.0, "y": 0.0},
        "corners": [],
        "label": ""
    }))
    .unwrap();
    assert_eq!(empty.corners, Some(vec![]));
    assert_eq!(empty.label.as_deref(), Some(""));
}

#[test]
fn test_unknown_fields_ignored() {
    let point = Point::from_raw(json!({"x": 1.0, "y": 2.0, "z": 3.0})).unwrap();
    assert_eq!(point, Point { x: 1.0, y: 2.0 });
}

#[test]
fn test_missing_required_field_rejected() {
    let err = Point::from_raw(json!({"x": 1.0})).unwrap_err();
    assert!(matches!(err, ProtocolError::Decode { target: "Test.Point", .. }));
}

#[test]
fn test_non_mapping_rejected() {
    let err = Shape::from_raw_ref(&json!("not a mapping")).unwrap_err();
    assert!(err.to_string().contains("Test.Shape"));
}

#[test]
fn test_to_raw_omits_absent_optionals() {
    let shape = Shape {
        origin: Point { x: 0.0, y: 1.0 },
        corners: None,
        label: None,
    };
    let raw = shape.to_raw().unwrap();
    assert_eq!(raw, json!({"origin": {"x": 0.0, "y": 1.0}}));
}
