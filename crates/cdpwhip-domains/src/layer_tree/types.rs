//! LayerTree types.

use cdpwhip_protocol::ValueObject;
use serde::{Deserialize, Serialize};

use crate::dom::{BackendNodeId, Rect};

/// Unique Layer identifier.
pub type LayerId = String;

/// Unique snapshot identifier.
pub type SnapshotId = String;

/// Array of timings, one per paint step.
pub type PaintProfile = Vec<f64>;

/// Rectangle where scrolling happens on the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRect {
    pub rect: Rect,
    /// Reason for rectangle to force scrolling on the main thread.
    #[serde(rename = "type")]
    pub rect_type: String,
}

impl ValueObject for ScrollRect {
    const TYPE_NAME: &'static str = "LayerTree.ScrollRect";
}

/// Serialized fragment of layer picture along with its offset within the layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureTile {
    pub x: f64,
    pub y: f64,
    /// Base64-encoded snapshot data.
    pub picture: String,
}

impl PictureTile {
    pub fn new(x: f64, y: f64, picture: impl Into<String>) -> Self {
        Self {
            x,
            y,
            picture: picture.into(),
        }
    }
}

impl ValueObject for PictureTile {
    const TYPE_NAME: &'static str = "LayerTree.PictureTile";
}

/// Information about a compositing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub layer_id: LayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_layer_id: Option<LayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<BackendNodeId>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
    /// Transformation matrix, 16 values in column-major order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_z: Option<f64>,
    pub paint_count: i64,
    pub draws_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_rects: Option<Vec<ScrollRect>>,
}

impl ValueObject for Layer {
    const TYPE_NAME: &'static str = "LayerTree.Layer";
}

impl Layer {
    /// Whether this is a root layer.
    pub fn is_root(&self) -> bool {
        self.parent_layer_id.is_none()
    }
}
