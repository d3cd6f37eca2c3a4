//! # cdpwhip
//!
//! Typed bindings for the DOMStorage, LayerTree and Log domains of the
//! Chrome DevTools Protocol.
//!
//! The crate shapes command payloads, checks replies against declared
//! schemas and decodes notifications into typed events with a stable
//! identity for deduplication. Sending and receiving messages is left to
//! the caller's transport.
//!
//! ```rust,ignore
//! use cdpwhip::domains::dom_storage::{self, StorageId};
//!
//! let cmd = dom_storage::get_dom_storage_items(&StorageId::local("https://a.com"))?;
//! let raw = transport.send(cmd.to_value()?).await?;
//! let items: dom_storage::GetDomStorageItemsReturns = cmd.decode_response_as(&raw)?;
//! ```

pub mod logging;
pub mod pipeline;

pub use cdpwhip_config as config;
pub use cdpwhip_domains as domains;
pub use cdpwhip_protocol as protocol;

pub use cdpwhip_domains::DomainEvent;
pub use cdpwhip_protocol::{
    CommandDescriptor, Event, EventDeduplicator, Notification, ProtocolError, ResponseSchema,
    ValueObject,
};
pub use pipeline::NotificationFilter;
