//! # cdpwhip protocol
//!
//! The marshalling contract every Chrome DevTools Protocol domain binding
//! follows. Contains no domain definitions and no transport.
//!
//! ## Building blocks
//!
//! - [`ValueObject`] - typed protocol records rebuilt from raw mappings
//! - [`PayloadBuilder`] / [`CommandDescriptor`] - request payload plus the
//!   [`ResponseSchema`] used to check the reply
//! - [`Event`] - notifications with a declared identity key and
//!   [`compute_identity`] for deduplication
//! - [`EventDeduplicator`] - bounded window of recently seen identities

pub mod command;
pub mod dedup;
pub mod error;
pub mod event;
pub mod message;
pub mod schema;
pub mod value;

pub use command::{CommandDescriptor, CommandRequest, PayloadBuilder};
pub use dedup::EventDeduplicator;
pub use error::ProtocolError;
pub use event::{compute_identity, Event};
pub use message::Notification;
pub use schema::{FieldKind, ResponseSchema, ResultField};
pub use value::ValueObject;
