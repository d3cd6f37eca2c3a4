//! Value objects rebuilt from raw protocol data.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;

/// A structured protocol record.
///
/// Implementors derive `Deserialize`, which gives each type its own
/// field-by-field reconstruction: nested records and sequences of records
/// are rebuilt through their own deserializers, absent optional fields
/// become `None`, and unknown keys are ignored.
pub trait ValueObject: Serialize + DeserializeOwned {
    /// Domain-qualified type name, e.g. `DOMStorage.StorageId`.
    const TYPE_NAME: &'static str;

    /// Rebuild from a raw mapping freshly parsed from the wire.
    fn from_raw(raw: Value) -> Result<Self, ProtocolError> {
        serde_json::from_value(raw).map_err(|e| ProtocolError::decode(Self::TYPE_NAME, e))
    }

    /// Rebuild from a borrowed raw mapping.
    fn from_raw_ref(raw: &Value) -> Result<Self, ProtocolError> {
        <Self as Deserialize>::deserialize(raw).map_err(|e| ProtocolError::decode(Self::TYPE_NAME, e))
    }

    /// Convert back into a raw mapping.
    fn to_raw(&self) -> Result<Value, ProtocolError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
