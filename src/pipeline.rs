//! Decoding and deduplication of incoming notifications.

use cdpwhip_config::{Config, UnknownEventPolicy};
use cdpwhip_domains::DomainEvent;
use cdpwhip_protocol::{EventDeduplicator, Notification, ProtocolError};
use tracing::{debug, warn};

/// Turns raw notifications into new, typed events.
///
/// Duplicates of a hashable event inside the dedup window are dropped.
/// Events without an identity key always pass.
#[derive(Debug)]
pub struct NotificationFilter {
    dedup: EventDeduplicator,
    unknown_events: UnknownEventPolicy,
}

impl NotificationFilter {
    pub fn new(capacity: usize, unknown_events: UnknownEventPolicy) -> Self {
        Self {
            dedup: EventDeduplicator::new(capacity),
            unknown_events,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dedup.effective_capacity(), config.decoding.unknown_events)
    }

    pub fn dedup(&self) -> &EventDeduplicator {
        &self.dedup
    }

    /// Decode notification text.
    pub fn accept_text(&mut self, text: &str) -> Result<Option<DomainEvent>, ProtocolError> {
        self.accept(Notification::parse(text)?)
    }

    /// Decode a notification.
    ///
    /// Returns `None` for a duplicate or an ignored unknown event.
    pub fn accept(
        &mut self,
        notification: Notification,
    ) -> Result<Option<DomainEvent>, ProtocolError> {
        let event = match DomainEvent::from_notification(notification) {
            Ok(event) => event,
            Err(ProtocolError::UnknownEvent(name))
                if self.unknown_events == UnknownEventPolicy::Ignore =>
            {
                warn!("ignoring unknown event {}", name);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if !event.is_hashable() {
            return Ok(Some(event));
        }

        let hash = event.build_hash()?;
        if self.dedup.observe(&hash) {
            Ok(Some(event))
        } else {
            debug!(event = event.name(), "dropped duplicate");
            Ok(None)
        }
    }
}

impl Default for NotificationFilter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
