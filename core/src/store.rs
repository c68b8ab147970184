// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod kv;
mod query;

use std::collections::HashSet;
use std::fmt;

use jiff::civil::{Date, Time};

use crate::id::IdGenerator;
use crate::{Event, EventDraft, StorageError, ValidationError, recurrence};

pub use kv::{EVENTS_KEY, JsonFileStore, KeyValueStore, MemoryStore, RECENT_SEARCHES_KEY};
pub use query::DateFilter;

/// Number of recent search terms kept.
pub const MAX_RECENT_SEARCHES: usize = 5;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// The authoritative collection of events.
///
/// Every mutation is written through to the key-value store. A failed write
/// is logged and the in-memory state stays authoritative for the session.
pub struct EventStore {
    events: Vec<Event>,
    recent_searches: Vec<String>,
    kv: Box<dyn KeyValueStore>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for EventStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events.len())
            .field("recent_searches", &self.recent_searches)
            .field("kv", &self.kv)
            .finish_non_exhaustive()
    }
}

impl EventStore {
    /// Loads the store from `kv`, falling back to `seed` when nothing is stored.
    ///
    /// Loading never fails: unreadable or malformed stored data yields an
    /// empty store, and invalid or duplicate records are dropped.
    pub fn load(kv: Box<dyn KeyValueStore>, ids: Box<dyn IdGenerator>, seed: Option<&str>) -> Self {
        let events = match kv.get(EVENTS_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<Vec<Event>>(&text) {
                Ok(events) if events.is_empty() => load_seed(seed),
                Ok(events) => events,
                Err(e) => {
                    tracing::warn!(err = %e, "malformed stored events, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => load_seed(seed),
            Err(e) => {
                tracing::warn!(err = %e, "failed to read stored events, starting empty");
                Vec::new()
            }
        };

        let recent_searches = match kv.get(RECENT_SEARCHES_KEY) {
            Ok(Some(text)) => serde_json::from_str::<Vec<String>>(&text).unwrap_or_else(|e| {
                tracing::warn!(err = %e, "malformed recent searches, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(err = %e, "failed to read recent searches");
                Vec::new()
            }
        };

        let mut store = Self {
            events: sanitize(events),
            recent_searches,
            kv,
            ids,
        };
        store.recent_searches.truncate(MAX_RECENT_SEARCHES);
        tracing::debug!(count = store.events.len(), "event store loaded");
        store
    }

    /// Validates and inserts a new event.
    ///
    /// A recurring draft is expanded into its whole occurrence series, which
    /// is inserted at once. Returns every inserted record, base first.
    pub fn create(&mut self, draft: EventDraft) -> Result<Vec<Event>, ValidationError> {
        draft.validate()?;

        let base = Event::from_draft(self.ids.next_id(), draft);
        let created = recurrence::expand(base, self.ids.as_mut());
        tracing::debug!(id = created[0].id(), count = created.len(), "creating events");

        self.events.extend(created.iter().cloned());
        self.persist_events();
        Ok(created)
    }

    /// Replaces every field of the event except its id and reminder latch.
    ///
    /// Returns `Ok(None)` if no event has this id. Siblings from the same
    /// recurring series are never touched.
    pub fn update(&mut self, id: &str, draft: EventDraft) -> Result<Option<Event>, ValidationError> {
        draft.validate()?;
        Ok(self.modify(id, |event| event.apply(draft)))
    }

    /// Removes the event with this id, if any.
    pub fn delete(&mut self, id: &str) -> Option<Event> {
        let Some(index) = self.events.iter().position(|e| e.id() == id) else {
            tracing::debug!(id, "delete of unknown event ignored");
            return None;
        };

        let removed = self.events.remove(index);
        self.persist_events();
        Some(removed)
    }

    /// Moves an event to a new date and start time, keeping its duration.
    ///
    /// Rejected if the moved event would end after midnight.
    pub fn reschedule(
        &mut self,
        id: &str,
        date: Date,
        start: Time,
    ) -> Result<Option<Event>, ValidationError> {
        let Some(event) = self.get(id) else {
            tracing::debug!(id, "reschedule of unknown event ignored");
            return Ok(None);
        };

        let start_minutes = crate::datetime::minutes_of_day(start);
        let end_minutes = start_minutes + event.time_range().duration();
        if end_minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::OutOfDay { start });
        }

        let end = time_from_minutes(end_minutes).ok_or(ValidationError::OutOfDay { start })?;
        Ok(self.modify(id, |event| {
            event.date = date;
            event.start_time = start;
            event.end_time = end;
        }))
    }

    /// Latches the reminder of the event as delivered.
    ///
    /// Returns `false` if no event has this id.
    pub fn mark_reminder_shown(&mut self, id: &str) -> bool {
        self.modify(id, Event::mark_reminder_shown).is_some()
    }

    /// Records a submitted search term, most recent first.
    ///
    /// Blank terms and terms already in the list are ignored.
    pub fn record_search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() || self.recent_searches.iter().any(|t| t == term) {
            return;
        }

        self.recent_searches.insert(0, term.to_string());
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
        if let Err(e) = self.write_recent_searches() {
            tracing::warn!(err = %e, "failed to persist recent searches");
        }
    }

    /// Recent search terms, most recent first.
    pub fn recent_searches(&self) -> &[String] {
        &self.recent_searches
    }

    /// Writes the whole state to the key-value store, surfacing failures.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.write_events()?;
        self.write_recent_searches()
    }

    fn modify(&mut self, id: &str, f: impl FnOnce(&mut Event)) -> Option<Event> {
        let Some(event) = self.events.iter_mut().find(|e| e.id() == id) else {
            tracing::debug!(id, "update of unknown event ignored");
            return None;
        };

        f(event);
        let updated = event.clone();
        self.persist_events();
        Some(updated)
    }

    fn persist_events(&mut self) {
        if let Err(e) = self.write_events() {
            tracing::warn!(err = %e, "failed to persist events, keeping in-memory state");
        }
    }

    fn write_events(&mut self) -> Result<(), StorageError> {
        let text = serde_json::to_string(&self.events)?;
        self.kv.set(EVENTS_KEY, &text)
    }

    fn write_recent_searches(&mut self) -> Result<(), StorageError> {
        let text = serde_json::to_string(&self.recent_searches)?;
        self.kv.set(RECENT_SEARCHES_KEY, &text)
    }
}

fn load_seed(seed: Option<&str>) -> Vec<Event> {
    let Some(seed) = seed else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Event>>(seed) {
        Ok(events) => {
            tracing::info!(count = events.len(), "loaded seed events");
            events
        }
        Err(e) => {
            tracing::warn!(err = %e, "malformed seed data ignored");
            Vec::new()
        }
    }
}

/// Drops records that break the store invariants.
fn sanitize(events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|e| {
            if let Err(err) = e.to_draft().validate() {
                tracing::warn!(id = e.id(), %err, "dropping invalid stored event");
                return false;
            }
            if !seen.insert(e.id().to_string()) {
                tracing::warn!(id = e.id(), "dropping stored event with duplicate id");
                return false;
            }
            true
        })
        .collect()
}

fn time_from_minutes(minutes: u16) -> Option<Time> {
    let hour = i8::try_from(minutes / 60).ok()?;
    let minute = i8::try_from(minutes % 60).ok()?;
    Time::new(hour, minute, 0, 0).ok()
}
