//! DOM types referenced by other domains.

use cdpwhip_protocol::ValueObject;
use serde::{Deserialize, Serialize};

/// Unique DOM node identifier used to reference a node that may not have
/// been pushed to the front-end.
pub type BackendNodeId = i64;

/// Rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl ValueObject for Rect {
    const TYPE_NAME: &'static str = "DOM.Rect";
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(x={}, y={}, width={}, height={})",
            self.x, self.y, self.width, self.height
        )
    }
}
