use cdpwhip_protocol::{Event, FieldKind, ProtocolError, ValueObject};
use serde_json::json;

use super::*;
use crate::dom::Rect;

fn raw_layer() -> serde_json::Value {
    json!({
        "layerId": "7",
        "parentLayerId": "1",
        "offsetX": 0,
        "offsetY": 10.5,
        "width": 800,
        "height": 600,
        "paintCount": 3,
        "drawsContent": true,
        "scrollRects": [
            {"rect": {"x": 0, "y": 0, "width": 100, "height": 50}, "type": "WheelEventHandler"}
        ]
    })
}

#[test]
fn test_layer_from_raw() {
    let layer = Layer::from_raw(raw_layer()).unwrap();
    assert_eq!(layer.layer_id, "7");
    assert!(!layer.is_root());
    assert!(layer.backend_node_id.is_none());
    assert!(layer.transform.is_none());
    assert!(layer.invisible.is_none());

    let rects = layer.scroll_rects.as_ref().unwrap();
    assert_eq!(rects[0].rect_type, "WheelEventHandler");
    assert_eq!(rects[0].rect, Rect::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn test_scroll_rect_matches_direct() {
    let raw = json!({"rect": {"x": 1, "y": 2, "width": 3, "height": 4}, "type": "TouchEventHandler"});
    let direct = ScrollRect::from_raw(raw.clone()).unwrap();
    let via_layer = Layer::from_raw(json!({
        "layerId": "1", "offsetX": 0, "offsetY": 0, "width": 1, "height": 1,
        "paintCount": 0, "drawsContent": false, "scrollRects": [raw]
    }))
    .unwrap();
    assert_eq!(via_layer.scroll_rects.unwrap()[0], direct);
}

#[test]
fn test_layer_serializes_wire_names() {
    let layer = Layer::from_raw(raw_layer()).unwrap();
    let raw = layer.to_raw().unwrap();
    assert_eq!(raw["scrollRects"][0]["type"], json!("WheelEventHandler"));
    assert!(raw.get("anchorX").is_none());
}

#[test]
fn test_compositing_reasons_schema() {
    let cmd = compositing_reasons("7").unwrap();
    assert_eq!(cmd.method(), "LayerTree.compositingReasons");
    let field = cmd.response.unwrap().field("compositingReasons").unwrap();
    assert_eq!(field.kind, FieldKind::Array(&FieldKind::String));
}

#[test]
fn test_make_and_load_snapshot_share_schema() {
    let make = make_snapshot("7").unwrap();
    let load = load_snapshot(&[PictureTile::new(0.0, 0.0, "AAAA")]).unwrap();
    assert_eq!(make.response, load.response);

    let result: SnapshotReturns = load.decode_response_as(&json!({"snapshotId": "s1"})).unwrap();
    assert_eq!(result.snapshot_id, "s1");
    assert_eq!(load.request.params["tiles"][0]["picture"], json!("AAAA"));
}

#[test]
fn test_snapshot_returns_decode_error_is_command_neutral() {
    let err = SnapshotReturns::from_raw(json!({"snapshotId": 5})).unwrap_err();
    let display = err.to_string();
    assert!(display.contains("LayerTree.SnapshotReturns"));
    assert!(!display.contains("makeSnapshot"));
}

#[test]
fn test_profile_snapshot_omits_absent_optionals() {
    let cmd = profile_snapshot("s1", None, None, None).unwrap();
    assert_eq!(cmd.request.params.len(), 1);

    let cmd = profile_snapshot("s1", Some(5), None, Some(&Rect::new(0.0, 0.0, 10.0, 10.0))).unwrap();
    let keys: Vec<&str> = cmd.request.params.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["snapshotId", "minRepeatCount", "clipRect"]);
    assert_eq!(cmd.request.params["clipRect"]["width"], json!(10.0));
}

#[test]
fn test_profile_snapshot_decode() {
    let cmd = profile_snapshot("s1", None, Some(0.5), None).unwrap();
    let result: ProfileSnapshotReturns = cmd
        .decode_response_as(&json!({"timings": [[0.1, 0.2], [0.3]]}))
        .unwrap();
    assert_eq!(result.timings.len(), 2);
    assert_eq!(result.timings[1], vec![0.3]);
}

#[test]
fn test_replay_snapshot() {
    let cmd = replay_snapshot("s1", Some(0), Some(10), None).unwrap();
    assert_eq!(cmd.request.params.len(), 3);
    assert!(!cmd.request.params.contains_key("scale"));

    let result: ReplaySnapshotReturns = cmd
        .decode_response_as(&json!({"dataURL": "data:image/png;base64,AAAA"}))
        .unwrap();
    assert!(result.data_url.starts_with("data:image/png"));
}

#[test]
fn test_non_finite_floats_rejected() {
    let err = replay_snapshot("s", None, None, Some(f64::NAN)).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::InvalidParameter { ref method, ref param }
            if method == "LayerTree.replaySnapshot" && param == "scale"
    ));

    let err = profile_snapshot("s", None, Some(f64::NAN), None).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::InvalidParameter { ref param, .. } if param == "minDuration"
    ));
}

#[test]
fn test_release_and_command_log() {
    let release = release_snapshot("s1").unwrap();
    assert!(release.response.is_none());

    let log = snapshot_command_log("s1").unwrap();
    let result: SnapshotCommandLogReturns = log
        .decode_response_as(&json!({"commandLog": [{"method": "drawRect"}]}))
        .unwrap();
    assert_eq!(result.command_log[0]["method"], json!("drawRect"));
}

#[test]
fn test_layer_tree_did_change_not_hashable() {
    let with_layers = LayerTreeDidChangeEvent::from_params(json!({"layers": [raw_layer()]})).unwrap();
    assert_eq!(with_layers.layers.as_ref().unwrap().len(), 1);

    let without = LayerTreeDidChangeEvent::from_params(json!({})).unwrap();
    assert!(without.layers.is_none());

    for event in [with_layers, without] {
        let err = event.build_hash().unwrap_err();
        assert!(matches!(err, ProtocolError::UnsupportedOperation(_)));
    }
}

#[test]
fn test_layer_painted_hash() {
    let a = LayerPaintedEvent::from_params(json!({
        "layerId": "7",
        "clip": {"x": 0, "y": 0, "width": 10, "height": 10}
    }))
    .unwrap();
    let b = LayerPaintedEvent {
        clip: Rect::new(5.0, 5.0, 1.0, 1.0),
        ..a.clone()
    };
    assert_eq!(a.build_hash().unwrap(), "Layertree.layerPainted:layerId=7");
    assert_eq!(a.build_hash().unwrap(), b.build_hash().unwrap());
}
