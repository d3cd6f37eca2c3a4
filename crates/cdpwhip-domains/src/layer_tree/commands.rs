//! LayerTree command builders.

use cdpwhip_protocol::{
    CommandDescriptor, FieldKind, PayloadBuilder, ProtocolError, ResponseSchema, ResultField,
    ValueObject,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{PaintProfile, PictureTile, SnapshotId};
use super::DOMAIN;
use crate::dom::Rect;

pub const COMPOSITING_REASONS_RESPONSE: ResponseSchema = ResponseSchema::new(&[
    ResultField::required("compositingReasons", FieldKind::Array(&FieldKind::String)),
]);

/// Shared by `makeSnapshot` and `loadSnapshot`.
pub const SNAPSHOT_RESPONSE: ResponseSchema =
    ResponseSchema::new(&[ResultField::required("snapshotId", FieldKind::String)]);

pub const PROFILE_SNAPSHOT_RESPONSE: ResponseSchema = ResponseSchema::new(&[
    ResultField::required("timings", FieldKind::Array(&FieldKind::Array(&FieldKind::Number))),
]);

pub const REPLAY_SNAPSHOT_RESPONSE: ResponseSchema =
    ResponseSchema::new(&[ResultField::required("dataURL", FieldKind::String)]);

pub const SNAPSHOT_COMMAND_LOG_RESPONSE: ResponseSchema = ResponseSchema::new(&[
    ResultField::required("commandLog", FieldKind::Array(&FieldKind::Object("object"))),
]);

/// Enables compositing tree inspection.
pub fn enable() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "enable").build(None)
}

/// Disables compositing tree inspection.
pub fn disable() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "disable").build(None)
}

/// Provides the reasons why the given layer was composited.
pub fn compositing_reasons(layer_id: &str) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "compositingReasons")
        .required("layerId", layer_id)?
        .build(Some(COMPOSITING_REASONS_RESPONSE)))
}

/// Returns the layer snapshot identifier.
pub fn make_snapshot(layer_id: &str) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "makeSnapshot")
        .required("layerId", layer_id)?
        .build(Some(SNAPSHOT_RESPONSE)))
}

/// Returns the snapshot identifier for a snapshot composed of `tiles`.
pub fn load_snapshot(tiles: &[PictureTile]) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "loadSnapshot")
        .required("tiles", tiles)?
        .build(Some(SNAPSHOT_RESPONSE)))
}

/// Releases layer snapshot captured by the back-end.
pub fn release_snapshot(snapshot_id: &str) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "releaseSnapshot")
        .required("snapshotId", snapshot_id)?
        .build(None))
}

/// Profiles a snapshot replay.
///
/// `min_repeat_count` defaults to 1 on the back-end when absent.
pub fn profile_snapshot(
    snapshot_id: &str,
    min_repeat_count: Option<i64>,
    min_duration: Option<f64>,
    clip_rect: Option<&Rect>,
) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "profileSnapshot")
        .required("snapshotId", snapshot_id)?
        .optional("minRepeatCount", min_repeat_count.as_ref())?
        .optional("minDuration", min_duration.as_ref())?
        .optional("clipRect", clip_rect)?
        .build(Some(PROFILE_SNAPSHOT_RESPONSE)))
}

/// Replays the layer snapshot and returns the resulting bitmap.
pub fn replay_snapshot(
    snapshot_id: &str,
    from_step: Option<i64>,
    to_step: Option<i64>,
    scale: Option<f64>,
) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "replaySnapshot")
        .required("snapshotId", snapshot_id)?
        .optional("fromStep", from_step.as_ref())?
        .optional("toStep", to_step.as_ref())?
        .optional("scale", scale.as_ref())?
        .build(Some(REPLAY_SNAPSHOT_RESPONSE)))
}

/// Replays the layer snapshot and returns canvas log.
pub fn snapshot_command_log(snapshot_id: &str) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "snapshotCommandLog")
        .required("snapshotId", snapshot_id)?
        .build(Some(SNAPSHOT_COMMAND_LOG_RESPONSE)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositingReasonsReturns {
    pub compositing_reasons: Vec<String>,
}

impl ValueObject for CompositingReasonsReturns {
    const TYPE_NAME: &'static str = "LayerTree.compositingReasons.Returns";
}

/// Result of `makeSnapshot` and `loadSnapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotReturns {
    pub snapshot_id: SnapshotId,
}

impl ValueObject for SnapshotReturns {
    const TYPE_NAME: &'static str = "LayerTree.SnapshotReturns";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshotReturns {
    pub timings: Vec<PaintProfile>,
}

impl ValueObject for ProfileSnapshotReturns {
    const TYPE_NAME: &'static str = "LayerTree.profileSnapshot.Returns";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaySnapshotReturns {
    #[serde(rename = "dataURL")]
    pub data_url: String,
}

impl ValueObject for ReplaySnapshotReturns {
    const TYPE_NAME: &'static str = "LayerTree.replaySnapshot.Returns";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotCommandLogReturns {
    pub command_log: Vec<Map<String, Value>>,
}

impl ValueObject for SnapshotCommandLogReturns {
    const TYPE_NAME: &'static str = "LayerTree.snapshotCommandLog.Returns";
}
