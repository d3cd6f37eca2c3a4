//! Protocol marshalling errors.

use thiserror::Error;

/// Errors raised while shaping requests or decoding protocol data.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A supplied parameter has no protocol representation, such as a
    /// non-finite number or an absent value passed where one is required.
    #[error("Invalid value for parameter '{param}' of {method}")]
    InvalidParameter { method: String, param: String },

    /// Raw data could not be rebuilt into the target type.
    #[error("Failed to decode {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A required result field is absent from a command response.
    #[error("Response to {method} is missing required field '{field}'")]
    MissingResultField { method: String, field: String },

    /// A result field does not have the declared shape.
    #[error("Response to {method} has field '{field}' that is not {expected}")]
    ResultTypeMismatch {
        method: String,
        field: String,
        expected: String,
    },

    /// The response is not a mapping.
    #[error("Response to {0} is not an object")]
    MalformedResponse(String),

    /// Identity hashing requested for an event type without a key.
    #[error("Unable to build hash for non-hashable type {0}")]
    UnsupportedOperation(&'static str),

    /// An identity key names a field the event does not carry.
    #[error("Identity key of {event} references unknown field '{field}'")]
    UnknownIdentityField { event: &'static str, field: &'static str },

    /// No event type is registered under the given name.
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProtocolError {
    /// Wrap a serde error with the name of the type being rebuilt.
    pub fn decode(target: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { target, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ProtocolError::InvalidParameter {
            method: "LayerTree.replaySnapshot".to_string(),
            param: "scale".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("Invalid value"));
        assert!(display.contains("scale"));
    }

    #[test]
    fn test_unsupported_operation_display() {
        let err = ProtocolError::UnsupportedOperation("Log.entryAdded");
        assert!(err.to_string().contains("non-hashable"));
        assert!(err.to_string().contains("Log.entryAdded"));
    }

    #[test]
    fn test_decode_keeps_target() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = ProtocolError::decode("DOMStorage.StorageId", json_err);
        assert!(err.to_string().contains("DOMStorage.StorageId"));
    }

    #[test]
    fn test_serialization_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ProtocolError::from(json_err);
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ProtocolError::UnknownEvent("Foo.bar".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnknownEvent"));
    }
}
