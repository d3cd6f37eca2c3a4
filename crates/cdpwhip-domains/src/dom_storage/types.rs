//! DOMStorage types.

use std::fmt;

use cdpwhip_protocol::ValueObject;
use serde::{Deserialize, Serialize};

/// DOM Storage identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageId {
    /// Security origin for the storage.
    pub security_origin: String,
    /// Whether the storage is local storage (not session storage).
    pub is_local_storage: bool,
}

impl StorageId {
    pub fn new(security_origin: impl Into<String>, is_local_storage: bool) -> Self {
        Self {
            security_origin: security_origin.into(),
            is_local_storage,
        }
    }

    pub fn local(security_origin: impl Into<String>) -> Self {
        Self::new(security_origin, true)
    }

    pub fn session(security_origin: impl Into<String>) -> Self {
        Self::new(security_origin, false)
    }
}

impl ValueObject for StorageId {
    const TYPE_NAME: &'static str = "DOMStorage.StorageId";
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StorageId(securityOrigin={}, isLocalStorage={})",
            self.security_origin, self.is_local_storage
        )
    }
}

/// DOM Storage item: a `[key, value]` pair.
pub type Item = Vec<String>;
