//! Protocol notifications and identity hashing.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ProtocolError;
use crate::value::ValueObject;

/// Build the canonical identity string of an event.
///
/// Produces `<name>:<field>=<value>,<field>=<value>` with fields in the order
/// given.
pub fn compute_identity(name: &str, fields: &[(&str, String)]) -> String {
    let serialized = fields
        .iter()
        .map(|(field, value)| format!("{}={}", field, value))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}:{}", name, serialized)
}

/// An asynchronous notification pushed by the protocol endpoint.
pub trait Event: ValueObject {
    /// Domain-qualified event name, e.g. `Log.entryAdded`.
    const NAME: &'static str;

    /// Ordered field names that identify "the same" logical event.
    const IDENTITY_KEY: &'static [&'static str];

    /// Whether [`Event::build_hash`] is supported for this type.
    const HASHABLE: bool;

    /// String form of one of this event's identity-key fields, by wire name.
    ///
    /// Returns `None` for names outside `IDENTITY_KEY`.
    fn identity_value(&self, field: &str) -> Option<String>;

    /// Construct from the `params` mapping of a notification.
    ///
    /// A missing `params` (`null`) is treated as an empty mapping.
    fn from_params(params: Value) -> Result<Self, ProtocolError> {
        match params {
            Value::Null => Self::from_raw(Value::Object(Map::new())),
            params => Self::from_raw(params),
        }
    }

    /// Identity hash over every declared identity-key field.
    fn build_hash(&self) -> Result<String, ProtocolError> {
        if !Self::HASHABLE || Self::IDENTITY_KEY.is_empty() {
            return Err(ProtocolError::UnsupportedOperation(Self::NAME));
        }

        let mut fields = Vec::with_capacity(Self::IDENTITY_KEY.len());
        for &field in Self::IDENTITY_KEY {
            let value = self
                .identity_value(field)
                .ok_or(ProtocolError::UnknownIdentityField {
                    event: Self::NAME,
                    field,
                })?;
            fields.push((field, value));
        }

        let hash = compute_identity(Self::NAME, &fields);
        debug!("generated hash = {}", hash);
        Ok(hash)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
