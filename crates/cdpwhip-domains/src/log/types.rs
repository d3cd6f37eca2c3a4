//! Log types.

use cdpwhip_protocol::ValueObject;
use serde::{Deserialize, Serialize};

use crate::network::RequestId;
use crate::runtime::{StackTrace, Timestamp};

/// Log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Log entry source, e.g. `javascript` or `network`.
    pub source: String,
    /// Log entry severity, e.g. `verbose` or `error`.
    pub level: String,
    pub text: String,
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<StackTrace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
}

impl ValueObject for LogEntry {
    const TYPE_NAME: &'static str = "Log.LogEntry";
}

/// Violation configuration setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationSetting {
    /// Violation type, e.g. `longTask` or `blockedEvent`.
    pub name: String,
    /// Time threshold to trigger upon.
    pub threshold: f64,
}

impl ViolationSetting {
    pub fn new(name: impl Into<String>, threshold: f64) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }
}

impl ValueObject for ViolationSetting {
    const TYPE_NAME: &'static str = "Log.ViolationSetting";
}
