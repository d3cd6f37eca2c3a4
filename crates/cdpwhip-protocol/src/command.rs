//! Command payload shaping.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::ProtocolError;
use crate::schema::ResponseSchema;
use crate::value::ValueObject;

/// A protocol-ready request: method name plus parameters.
///
/// Envelope id and session id are assigned by the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRequest {
    pub method: String,
    pub params: Map<String, Value>,
}

/// Request payload paired with the schema of its eventual reply.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub request: CommandRequest,
    /// `None` when the command returns no data.
    pub response: Option<ResponseSchema>,
}

impl CommandDescriptor {
    /// Domain-qualified command name.
    pub fn method(&self) -> &str {
        &self.request.method
    }

    /// Whether the command returns data.
    pub fn expects_result(&self) -> bool {
        self.response.is_some()
    }

    /// The request as a raw `{method, params}` mapping.
    pub fn to_value(&self) -> Result<Value, ProtocolError> {
        Ok(serde_json::to_value(&self.request)?)
    }

    /// Check a raw reply against the declared schema.
    ///
    /// Commands without a schema accept any reply and yield an empty mapping.
    pub fn decode_response(&self, raw: &Value) -> Result<Map<String, Value>, ProtocolError> {
        match &self.response {
            Some(schema) => schema.decode(self.method(), raw),
            None => Ok(Map::new()),
        }
    }

    /// Check a raw reply and rebuild it into a typed result.
    pub fn decode_response_as<T: ValueObject>(&self, raw: &Value) -> Result<T, ProtocolError> {
        match &self.response {
            Some(schema) => schema.decode_as(self.method(), raw),
            None => T::from_raw(Value::Object(Map::new())),
        }
    }
}

/// Accumulates command parameters in declaration order.
#[derive(Debug)]
pub struct PayloadBuilder {
    method: String,
    params: Map<String, Value>,
}

impl PayloadBuilder {
    /// Start a payload for `<domain>.<command>`.
    pub fn new(domain: &str, command: &str) -> Self {
        Self {
            method: format!("{}.{}", domain, command),
            params: Map::new(),
        }
    }

    /// Add a required parameter. A value serializing to `null` is rejected.
    pub fn required<T: Serialize + ?Sized>(
        mut self,
        name: &str,
        value: &T,
    ) -> Result<Self, ProtocolError> {
        let value = self.encode(name, value)?;
        self.params.insert(name.to_string(), value);
        Ok(self)
    }

    /// Add an optional parameter; `None` leaves it out of the payload.
    ///
    /// A supplied value serializing to `null` is rejected like a required one.
    pub fn optional<T: Serialize>(
        mut self,
        name: &str,
        value: Option<&T>,
    ) -> Result<Self, ProtocolError> {
        if let Some(value) = value {
            let value = self.encode(name, value)?;
            self.params.insert(name.to_string(), value);
        }
        Ok(self)
    }

    // serde_json maps non-finite floats to `null`.
    fn encode<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<Value, ProtocolError> {
        let value = serde_json::to_value(value)?;
        if value.is_null() {
            return Err(ProtocolError::InvalidParameter {
                method: self.method.clone(),
                param: name.to_string(),
            });
        }
        Ok(value)
    }

    /// Finish with the reply schema.
    pub fn build(self, response: Option<ResponseSchema>) -> CommandDescriptor {
        trace!(method = %self.method, params = self.params.len(), "built command payload");
        CommandDescriptor {
            request: CommandRequest {
                method: self.method,
                params: self.params,
            },
            response,
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
