//! DOMStorage command builders.

use cdpwhip_protocol::{
    CommandDescriptor, FieldKind, PayloadBuilder, ProtocolError, ResponseSchema, ResultField,
    ValueObject,
};
use serde::{Deserialize, Serialize};

use super::types::{Item, StorageId};
use super::DOMAIN;

/// Reply schema of `DOMStorage.getDOMStorageItems`.
pub const GET_DOM_STORAGE_ITEMS_RESPONSE: ResponseSchema = ResponseSchema::new(&[
    ResultField::required("entries", FieldKind::Array(&FieldKind::Array(&FieldKind::String))),
]);

/// Enables storage tracking; storage events will now be delivered.
pub fn enable() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "enable").build(None)
}

/// Disables storage tracking; prevents storage events from being sent.
pub fn disable() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "disable").build(None)
}

pub fn clear(storage_id: &StorageId) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "clear")
        .required("storageId", storage_id)?
        .build(None))
}

pub fn get_dom_storage_items(storage_id: &StorageId) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "getDOMStorageItems")
        .required("storageId", storage_id)?
        .build(Some(GET_DOM_STORAGE_ITEMS_RESPONSE)))
}

pub fn set_dom_storage_item(
    storage_id: &StorageId,
    key: &str,
    value: &str,
) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "setDOMStorageItem")
        .required("storageId", storage_id)?
        .required("key", key)?
        .required("value", value)?
        .build(None))
}

pub fn remove_dom_storage_item(
    storage_id: &StorageId,
    key: &str,
) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "removeDOMStorageItem")
        .required("storageId", storage_id)?
        .required("key", key)?
        .build(None))
}

/// Result of `DOMStorage.getDOMStorageItems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDomStorageItemsReturns {
    pub entries: Vec<Item>,
}

impl ValueObject for GetDomStorageItemsReturns {
    const TYPE_NAME: &'static str = "DOMStorage.getDOMStorageItems.Returns";
}

impl GetDomStorageItemsReturns {
    /// Entries as `(key, value)` pairs, skipping malformed items.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|item| match item.as_slice() {
            [key, value] => Some((key.as_str(), value.as_str())),
            _ => None,
        })
    }
}
