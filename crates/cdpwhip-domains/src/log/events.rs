//! Log events.

use cdpwhip_protocol::{Event, ValueObject};
use serde::{Deserialize, Serialize};

use super::types::LogEntry;

/// Issued when a new message was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryAddedEvent {
    pub entry: LogEntry,
}

impl ValueObject for EntryAddedEvent {
    const TYPE_NAME: &'static str = "Log.entryAdded";
}

impl Event for EntryAddedEvent {
    const NAME: &'static str = "Log.entryAdded";
    const IDENTITY_KEY: &'static [&'static str] = &[];
    const HASHABLE: bool = false;

    fn identity_value(&self, _field: &str) -> Option<String> {
        None
    }
}
