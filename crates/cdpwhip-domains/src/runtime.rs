//! Runtime types referenced by other domains.

use cdpwhip_protocol::ValueObject;
use serde::{Deserialize, Serialize};

/// Number of milliseconds since epoch.
pub type Timestamp = f64;

/// Unique script identifier.
pub type ScriptId = String;

/// Stack entry for runtime errors and assertions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFrame {
    pub function_name: String,
    pub script_id: ScriptId,
    pub url: String,
    /// Zero-based.
    pub line_number: i64,
    /// Zero-based.
    pub column_number: i64,
}

impl ValueObject for CallFrame {
    const TYPE_NAME: &'static str = "Runtime.CallFrame";
}

/// Call frames for assertions or error messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub call_frames: Vec<CallFrame>,
    /// Asynchronous JavaScript stack trace that preceded this stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<StackTrace>>,
}

impl ValueObject for StackTrace {
    const TYPE_NAME: &'static str = "Runtime.StackTrace";
}

impl StackTrace {
    /// Depth of the async parent chain, counting this trace.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent.as_deref();
        while let Some(trace) = current {
            depth += 1;
            current = trace.parent.as_deref();
        }
        depth
    }
}
