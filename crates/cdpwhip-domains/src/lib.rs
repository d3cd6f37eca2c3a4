//! # cdpwhip domains
//!
//! Typed bindings for the DOMStorage, LayerTree and Log domains of the
//! Chrome DevTools Protocol, plus the minimal DOM, Runtime and Network types
//! they reference.
//!
//! Every domain module exposes the same three parts:
//!
//! - value types implementing [`ValueObject`](cdpwhip_protocol::ValueObject)
//! - command builders returning a
//!   [`CommandDescriptor`](cdpwhip_protocol::CommandDescriptor)
//! - event types implementing [`Event`](cdpwhip_protocol::Event)
//!
//! [`DomainEvent`] maps an incoming notification to the right event type.

pub mod dom;
pub mod dom_storage;
pub mod layer_tree;
pub mod log;
pub mod network;
pub mod registry;
pub mod runtime;

pub use registry::DomainEvent;
