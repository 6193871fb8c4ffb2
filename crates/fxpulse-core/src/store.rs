use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{EventDate, EventTimestamp, RawEvent};
use crate::feed::{EventFeed, FeedError};

/// Failures raised by an event store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage boundary for raw events.
pub trait EventStore: Send + Sync {
    /// Upserts by id. Events arriving with an empty id are assigned a
    /// fresh UUID before writing. Returns the number of records written.
    fn store_events(&self, events: &[RawEvent]) -> Result<usize, StoreError>;

    /// Stored events, most recent first by announcement date and time,
    /// optionally capped.
    fn recent_events(&self, limit: Option<usize>) -> Result<Vec<RawEvent>, StoreError>;
}

/// In-memory reference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Mutex<Vec<RawEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<RawEvent>>, StoreError> {
        self.events
            .lock()
            .map_err(|_| StoreError::Unavailable("event store mutex poisoned".to_owned()))
    }
}

impl EventStore for MemoryStore {
    fn store_events(&self, events: &[RawEvent]) -> Result<usize, StoreError> {
        let mut stored = self.lock()?;

        for incoming in events {
            let mut record = incoming.clone();
            if record.id.is_empty() {
                record.id = Uuid::new_v4().to_string();
            }

            match stored.iter_mut().find(|existing| existing.id == record.id) {
                Some(existing) => *existing = record,
                None => stored.push(record),
            }
        }

        Ok(events.len())
    }

    fn recent_events(&self, limit: Option<usize>) -> Result<Vec<RawEvent>, StoreError> {
        let stored = self.lock()?;

        let mut events = stored.clone();
        events.sort_by(|left, right| announced_at(right).cmp(&announced_at(left)));
        if let Some(limit) = limit {
            events.truncate(limit);
        }

        Ok(events)
    }
}

/// Feed over previously persisted events.
///
/// The embedder decides once, at startup, whether the session reads from
/// a live calendar or from storage, and injects the matching feed; nothing
/// downstream probes for storage support.
pub struct StoredEventFeed {
    store: Arc<dyn EventStore>,
}

impl StoredEventFeed {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}

impl EventFeed for StoredEventFeed {
    fn events_between(
        &self,
        start: EventDate,
        end: EventDate,
    ) -> Result<Vec<RawEvent>, FeedError> {
        let mut events = self.store.recent_events(None)?;
        events.retain(|event| event.date >= start && event.date <= end);
        Ok(events)
    }
}

fn announced_at(event: &RawEvent) -> EventTimestamp {
    EventTimestamp::combine(event.date, event.time)
}
