//! Lookup of event types by notification name.

use cdpwhip_protocol::{Event, Notification, ProtocolError};
use serde_json::Value;
use tracing::debug;

use crate::dom_storage::{
    DomStorageItemAddedEvent, DomStorageItemRemovedEvent, DomStorageItemUpdatedEvent,
    DomStorageItemsClearedEvent,
};
use crate::layer_tree::{LayerPaintedEvent, LayerTreeDidChangeEvent};
use crate::log::EntryAddedEvent;

macro_rules! domain_events {
    ($($variant:ident($event:ty)),+ $(,)?) => {
        /// Every notification these bindings can decode.
        #[derive(Debug, Clone, PartialEq)]
        pub enum DomainEvent {
            $($variant($event),)+
        }

        impl DomainEvent {
            /// Names of all registered events.
            pub const NAMES: &'static [&'static str] = &[$(<$event as Event>::NAME,)+];

            fn decode_by_name(method: &str, params: Value) -> Result<Self, ProtocolError> {
                $(
                    if method.eq_ignore_ascii_case(<$event as Event>::NAME) {
                        return Ok(Self::$variant(<$event as Event>::from_params(params)?));
                    }
                )+
                Err(ProtocolError::UnknownEvent(method.to_string()))
            }

            /// Domain-qualified name of the event.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$event as Event>::NAME,)+
                }
            }

            pub fn is_hashable(&self) -> bool {
                match self {
                    $(Self::$variant(_) => <$event as Event>::HASHABLE,)+
                }
            }

            pub fn identity_key(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant(_) => <$event as Event>::IDENTITY_KEY,)+
                }
            }

            /// Identity hash of the wrapped event.
            pub fn build_hash(&self) -> Result<String, ProtocolError> {
                match self {
                    $(Self::$variant(event) => event.build_hash(),)+
                }
            }
        }

        $(
            impl From<$event> for DomainEvent {
                fn from(event: $event) -> Self {
                    Self::$variant(event)
                }
            }
        )+
    };
}

domain_events! {
    DomStorageItemsCleared(DomStorageItemsClearedEvent),
    DomStorageItemRemoved(DomStorageItemRemovedEvent),
    DomStorageItemAdded(DomStorageItemAddedEvent),
    DomStorageItemUpdated(DomStorageItemUpdatedEvent),
    LayerTreeDidChange(LayerTreeDidChangeEvent),
    LayerPainted(LayerPaintedEvent),
    EntryAdded(EntryAddedEvent),
}

impl DomainEvent {
    /// Construct the event registered under `method` from its params.
    ///
    /// Names match ASCII case-insensitively, so both the wire name
    /// (`DOMStorage.domStorageItemAdded`) and the identity name
    /// (`Domstorage.domStorageItemAdded`) resolve.
    pub fn decode(method: &str, params: Value) -> Result<Self, ProtocolError> {
        let event = Self::decode_by_name(method, params)?;
        debug!(event = event.name(), "decoded event");
        Ok(event)
    }

    /// Construct the event carried by a notification envelope.
    pub fn from_notification(notification: Notification) -> Result<Self, ProtocolError> {
        Self::decode(&notification.method, notification.params)
    }

    /// Whether an event is registered under `method`.
    pub fn is_known(method: &str) -> bool {
        Self::NAMES.iter().any(|name| name.eq_ignore_ascii_case(method))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
