//! Suppression of repeated notifications.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::ProtocolError;
use crate::event::Event;

/// Upper bound on the storage reserved up front; larger windows grow on demand.
const INITIAL_RESERVE: usize = 256;

/// Remembers the identity hashes of the most recent events.
///
/// The window is bounded; once full, the oldest hash is forgotten first.
/// A capacity of zero lets every event through.
#[derive(Debug, Default)]
pub struct EventDeduplicator {
    capacity: usize,
    order: VecDeque<String>,
    seen: HashSet<String>,
}

impl EventDeduplicator {
    pub fn new(capacity: usize) -> Self {
        let reserve = capacity.min(INITIAL_RESERVE);
        Self {
            capacity,
            order: VecDeque::with_capacity(reserve),
            seen: HashSet::with_capacity(reserve),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of hashes currently remembered.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Record a hash. Returns `true` if it was not seen inside the window.
    pub fn observe(&mut self, hash: &str) -> bool {
        if self.capacity == 0 {
            return true;
        }
        if self.seen.contains(hash) {
            debug!("duplicate event suppressed: {}", hash);
            return false;
        }

        if self.order.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        self.order.push_back(hash.to_string());
        self.seen.insert(hash.to_string());
        true
    }

    /// Record a typed event. Events without an identity key always pass.
    pub fn observe_event<E: Event>(&mut self, event: &E) -> Result<bool, ProtocolError> {
        if !E::HASHABLE {
            return Ok(true);
        }
        let hash = event.build_hash()?;
        Ok(self.observe(&hash))
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

#[cfg(test)]
#[path = "dedup_tests.rs"]
mod tests;
