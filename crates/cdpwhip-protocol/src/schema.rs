//! Response schemas declared by command builders.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::ProtocolError;
use crate::value::ValueObject;

/// Target type of a single result field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// Arbitrary JSON value.
    Any,
    /// Nested value object, named by its domain-qualified type name.
    Object(&'static str),
    /// Sequence of the inner kind.
    Array(&'static FieldKind),
}

impl FieldKind {
    /// Whether a raw value has this shape.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Any => true,
            FieldKind::Object(_) => value.is_object(),
            FieldKind::Array(inner) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|item| inner.matches(item))),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Any => write!(f, "any"),
            FieldKind::Object(name) => write!(f, "{}", name),
            FieldKind::Array(inner) => write!(f, "[{}]", inner),
        }
    }
}

/// One declared field of a command result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub optional: bool,
}

impl ResultField {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: true,
        }
    }
}

/// Describes how to decode the reply to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSchema {
    fields: &'static [ResultField],
}

impl ResponseSchema {
    pub const fn new(fields: &'static [ResultField]) -> Self {
        Self { fields }
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &'static [ResultField] {
        self.fields
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&'static ResultField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check a raw response against the schema.
    ///
    /// Returns only the declared fields that are present. Undeclared keys are
    /// dropped; absent optional fields are skipped.
    pub fn decode(&self, method: &str, raw: &Value) -> Result<Map<String, Value>, ProtocolError> {
        let object = raw
            .as_object()
            .ok_or_else(|| ProtocolError::MalformedResponse(method.to_string()))?;

        let mut decoded = Map::new();
        for field in self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) if field.optional => {}
                None | Some(Value::Null) => {
                    return Err(ProtocolError::MissingResultField {
                        method: method.to_string(),
                        field: field.name.to_string(),
                    });
                }
                Some(value) if !field.kind.matches(value) => {
                    return Err(ProtocolError::ResultTypeMismatch {
                        method: method.to_string(),
                        field: field.name.to_string(),
                        expected: field.kind.to_string(),
                    });
                }
                Some(value) => {
                    decoded.insert(field.name.to_string(), value.clone());
                }
            }
        }
        Ok(decoded)
    }

    /// Check a raw response and rebuild it into a typed result.
    pub fn decode_as<T: ValueObject>(&self, method: &str, raw: &Value) -> Result<T, ProtocolError> {
        let decoded = self.decode(method, raw)?;
        T::from_raw(Value::Object(decoded))
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
