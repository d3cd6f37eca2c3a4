//! LayerTree events.

use cdpwhip_protocol::{Event, ValueObject};
use serde::{Deserialize, Serialize};

use super::types::{Layer, LayerId};
use crate::dom::Rect;

/// The layer tree changed.
///
/// Carries no field that identifies a logical change, so it cannot be
/// hashed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerTreeDidChangeEvent {
    /// Layer tree, absent if not in the compositing mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<Layer>>,
}

impl ValueObject for LayerTreeDidChangeEvent {
    const TYPE_NAME: &'static str = "LayerTree.layerTreeDidChange";
}

impl Event for LayerTreeDidChangeEvent {
    const NAME: &'static str = "Layertree.layerTreeDidChange";
    const IDENTITY_KEY: &'static [&'static str] = &[];
    const HASHABLE: bool = false;

    fn identity_value(&self, _field: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerPaintedEvent {
    pub layer_id: LayerId,
    pub clip: Rect,
}

impl ValueObject for LayerPaintedEvent {
    const TYPE_NAME: &'static str = "LayerTree.layerPainted";
}

impl Event for LayerPaintedEvent {
    const NAME: &'static str = "Layertree.layerPainted";
    const IDENTITY_KEY: &'static [&'static str] = &["layerId"];
    const HASHABLE: bool = true;

    fn identity_value(&self, field: &str) -> Option<String> {
        match field {
            "layerId" => Some(self.layer_id.clone()),
            _ => None,
        }
    }
}
