//! Raw notification envelope.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ProtocolError;

fn empty_params() -> Value {
    Value::Object(Map::new())
}

/// An incoming notification as delivered by the transport.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub method: String,
    #[serde(default = "empty_params")]
    pub params: Value,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

impl Notification {
    /// Parse a notification from message text.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(|e| ProtocolError::decode("Notification", e))
    }

    /// Parse a notification from an already decoded message.
    pub fn from_value(raw: Value) -> Result<Self, ProtocolError> {
        serde_json::from_value(raw).map_err(|e| ProtocolError::decode("Notification", e))
    }

    /// Domain part of the method name.
    pub fn domain(&self) -> &str {
        self.method.split_once('.').map_or(self.method.as_str(), |(domain, _)| domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_parse() {
        let json = r#"{"method": "Log.entryAdded", "params": {"entry": {}}, "sessionId": "s1"}"#;
        let msg = Notification::parse(json).unwrap();
        assert_eq!(msg.method, "Log.entryAdded");
        assert_eq!(msg.domain(), "Log");
        assert_eq!(msg.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_notification_missing_params() {
        let msg = Notification::parse(r#"{"method": "LayerTree.layerTreeDidChange"}"#).unwrap();
        assert!(msg.params.as_object().unwrap().is_empty());
        assert!(msg.session_id.is_none());
    }

    #[test]
    fn test_notification_without_method_rejected() {
        let err = Notification::parse(r#"{"id": 1, "result": {}}"#).unwrap_err();
        assert!(err.to_string().contains("Notification"));
    }

    #[test]
    fn test_domain_without_dot() {
        let msg = Notification::from_value(serde_json::json!({"method": "Odd"})).unwrap();
        assert_eq!(msg.domain(), "Odd");
    }
}
