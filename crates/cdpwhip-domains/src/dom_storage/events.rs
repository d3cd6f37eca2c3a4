//! DOMStorage events.
//!
//! All four events are identified by the storage they touch.

use cdpwhip_protocol::{Event, ValueObject};
use serde::{Deserialize, Serialize};

use super::types::StorageId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomStorageItemsClearedEvent {
    pub storage_id: StorageId,
}

impl ValueObject for DomStorageItemsClearedEvent {
    const TYPE_NAME: &'static str = "DOMStorage.domStorageItemsCleared";
}

impl Event for DomStorageItemsClearedEvent {
    const NAME: &'static str = "Domstorage.domStorageItemsCleared";
    const IDENTITY_KEY: &'static [&'static str] = &["storageId"];
    const HASHABLE: bool = true;

    fn identity_value(&self, field: &str) -> Option<String> {
        match field {
            "storageId" => Some(self.storage_id.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomStorageItemRemovedEvent {
    pub storage_id: StorageId,
    pub key: String,
}

impl ValueObject for DomStorageItemRemovedEvent {
    const TYPE_NAME: &'static str = "DOMStorage.domStorageItemRemoved";
}

impl Event for DomStorageItemRemovedEvent {
    const NAME: &'static str = "Domstorage.domStorageItemRemoved";
    const IDENTITY_KEY: &'static [&'static str] = &["storageId"];
    const HASHABLE: bool = true;

    fn identity_value(&self, field: &str) -> Option<String> {
        match field {
            "storageId" => Some(self.storage_id.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomStorageItemAddedEvent {
    pub storage_id: StorageId,
    pub key: String,
    pub new_value: String,
}

impl ValueObject for DomStorageItemAddedEvent {
    const TYPE_NAME: &'static str = "DOMStorage.domStorageItemAdded";
}

impl Event for DomStorageItemAddedEvent {
    const NAME: &'static str = "Domstorage.domStorageItemAdded";
    const IDENTITY_KEY: &'static [&'static str] = &["storageId"];
    const HASHABLE: bool = true;

    fn identity_value(&self, field: &str) -> Option<String> {
        match field {
            "storageId" => Some(self.storage_id.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomStorageItemUpdatedEvent {
    pub storage_id: StorageId,
    pub key: String,
    pub old_value: String,
    pub new_value: String,
}

impl ValueObject for DomStorageItemUpdatedEvent {
    const TYPE_NAME: &'static str = "DOMStorage.domStorageItemUpdated";
}

impl Event for DomStorageItemUpdatedEvent {
    const NAME: &'static str = "Domstorage.domStorageItemUpdated";
    const IDENTITY_KEY: &'static [&'static str] = &["storageId"];
    const HASHABLE: bool = true;

    fn identity_value(&self, field: &str) -> Option<String> {
        match field {
            "storageId" => Some(self.storage_id.to_string()),
            _ => None,
        }
    }
}
