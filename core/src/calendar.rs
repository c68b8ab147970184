// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::path::Path;

use jiff::ToSpan;
use jiff::civil::{Date, DateTime, Time, time};

use crate::conflict::conflicts_with;
use crate::export::to_ics;
use crate::id::{IdGenerator, UuidGenerator};
use crate::reminder::{Clock, Notifier, ReminderScheduler, SystemClock};
use crate::store::{JsonFileStore, KeyValueStore};
use crate::{
    Config, Event, EventDraft, EventStore, HolidayRegistry, SortKey, SortOrder, StorageError,
    TimeRange, ValidationError, YearSummary,
};

/// Latest end time a default draft may get.
const LAST_MINUTE: Time = time(23, 59, 0, 0);

/// Calendar application core.
pub struct Calendar {
    config: Config,
    store: EventStore,
    clock: Box<dyn Clock>,
    holidays: HolidayRegistry,
    scheduler: ReminderScheduler,
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("clock", &self.clock)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

impl Calendar {
    /// Opens the calendar stored under the configured state directory.
    pub fn open(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let state_dir = config
            .state_dir
            .clone()
            .ok_or("State directory is not configured")?;
        tracing::debug!(state_dir = %state_dir.display(), "opening calendar");

        let kv = JsonFileStore::new(state_dir);
        Ok(Self::with_parts(
            config,
            Box::new(kv),
            Box::new(UuidGenerator),
            Box::new(SystemClock),
        ))
    }

    /// Assembles a calendar from explicit collaborators.
    pub fn with_parts(
        config: Config,
        kv: Box<dyn KeyValueStore>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let seed = read_seed(config.seed_path.as_deref());
        let store = EventStore::load(kv, ids, seed.as_deref());
        Self {
            config,
            store,
            clock,
            holidays: HolidayRegistry::kerala(),
            scheduler: ReminderScheduler::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current local wall-clock time.
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }

    /// The current local date.
    pub fn today(&self) -> Date {
        self.now().date()
    }

    /// A one-hour draft on `date`, starting at `slot` or the current minute.
    pub fn default_draft(&self, date: Date, slot: Option<Time>) -> EventDraft {
        let start = slot.unwrap_or_else(|| {
            let now = self.now().time();
            time(now.hour(), now.minute(), 0, 0)
        });
        let end = match start.checked_add(1.hour()) {
            Ok(end) if end > start => end,
            _ => LAST_MINUTE,
        };
        EventDraft::new(String::new(), date, start, end)
    }

    /// Adds a new event, expanding it if recurring.
    ///
    /// Unlike [`EventStore::create`], this rejects events that already ended.
    pub fn new_event(&mut self, draft: EventDraft) -> Result<Vec<Event>, ValidationError> {
        draft.validate()?;
        if draft.end_instant() < self.now() {
            return Err(ValidationError::EndsInPast);
        }
        self.store.create(draft)
    }

    /// Replaces an existing event. Past events may be edited.
    pub fn update_event(
        &mut self,
        id: &str,
        draft: EventDraft,
    ) -> Result<Option<Event>, ValidationError> {
        self.store.update(id, draft)
    }

    pub fn delete_event(&mut self, id: &str) -> Option<Event> {
        self.store.delete(id)
    }

    /// Drag-to-reschedule: moves an event keeping its duration.
    pub fn reschedule_event(
        &mut self,
        id: &str,
        date: Date,
        start: Time,
    ) -> Result<Option<Event>, ValidationError> {
        self.store.reschedule(id, date, start)
    }

    /// Events overlapping a draft on its date, for a live warning while editing.
    pub fn conflicts_with_draft(&self, draft: &EventDraft, exclude: Option<&str>) -> Vec<&Event> {
        let range = TimeRange::from_times(draft.start_time, draft.end_time);
        conflicts_with(self.store.by_date(draft.date), range, exclude)
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }

    pub fn holidays(&self) -> &HolidayRegistry {
        &self.holidays
    }

    /// Calendar facts about `year`.
    pub fn year_summary(&self, year: i16) -> Option<YearSummary> {
        YearSummary::of(year, &self.holidays)
    }

    pub fn scheduler_mut(&mut self) -> &mut ReminderScheduler {
        &mut self.scheduler
    }

    /// Runs one reminder scan at the current time.
    pub fn tick_reminders(&mut self, notifier: &mut dyn Notifier) -> Vec<String> {
        let now = self.clock.now();
        self.scheduler.tick(&mut self.store, now, notifier)
    }

    /// Every event as an iCalendar document, in date order.
    pub fn export_ics(&self) -> String {
        to_ics(self.store.all_sorted(SortKey::Date, SortOrder::Asc))
    }

    /// Writes the iCalendar export to `path`.
    pub fn export_to_file(&self, path: &Path) -> Result<(), StorageError> {
        std::fs::write(path, self.export_ics())?;
        tracing::info!(path = %path.display(), count = self.store.len(), "exported events");
        Ok(())
    }
}

fn read_seed(path: Option<&Path>) -> Option<String> {
    let path = path?;
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), err = %e, "failed to read seed file");
            None
        }
    }
}
