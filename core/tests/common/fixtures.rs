// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create configurations, drafts,
//! stores and calendars driven by a controllable clock.

use std::path::Path;

use jiff::civil::{Date, DateTime, Time, date, time};
use keracal_core::{
    Calendar, Config, EventDraft, EventStore, JsonFileStore, ManualClock, MemoryStore,
    SequentialIds,
};

/// Shorthand for a whole-minute wall-clock time.
#[must_use]
pub fn t(hour: i8, minute: i8) -> Time {
    time(hour, minute, 0, 0)
}

/// Creates a test configuration rooted at `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        ..Default::default()
    }
}

/// Creates a one-hour draft on 2024-06-10 at 09:00.
///
/// # Example
///
/// ```ignore
/// let draft = test_event_draft("Team Sync");
/// ```
#[must_use]
pub fn test_event_draft(title: &str) -> EventDraft {
    EventDraft::new(title, date(2024, 6, 10), t(9, 0), t(10, 0))
}

/// Creates a draft with explicit date and times.
#[must_use]
pub fn draft_at(title: &str, day: Date, start: Time, end: Time) -> EventDraft {
    EventDraft::new(title, day, start, end)
}

/// Creates an empty in-memory store with reproducible ids.
///
/// The returned [`MemoryStore`] shares state with the store's backend, so it
/// can be used to inspect or reopen what was persisted.
#[must_use]
pub fn memory_store() -> (EventStore, MemoryStore) {
    let kv = MemoryStore::new();
    let store = EventStore::load(Box::new(kv.clone()), Box::new(SequentialIds::new("evt")), None);
    (store, kv)
}

/// Creates an in-memory calendar whose clock reads `now`.
#[must_use]
pub fn memory_calendar(now: DateTime) -> (Calendar, ManualClock, MemoryStore) {
    let kv = MemoryStore::new();
    let clock = ManualClock::new(now);
    let calendar = Calendar::with_parts(
        Config::default(),
        Box::new(kv.clone()),
        Box::new(SequentialIds::new("evt")),
        Box::new(clock.clone()),
    );
    (calendar, clock, kv)
}

/// Creates a file-backed calendar under `state_dir` whose clock reads `now`.
#[must_use]
pub fn file_calendar(state_dir: &Path, now: DateTime) -> (Calendar, ManualClock) {
    let clock = ManualClock::new(now);
    let calendar = Calendar::with_parts(
        test_config(state_dir),
        Box::new(JsonFileStore::new(state_dir)),
        Box::new(SequentialIds::new("evt")),
        Box::new(clock.clone()),
    );
    (calendar, clock)
}
