// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event scheduling engine of the keracal calendar.
//!
//! [`EventStore`] is the single source of truth for events. Conflict
//! detection and recurrence expansion are pure functions it calls on write.
//! [`HolidayRegistry`] and the [`datetime`] helpers are stateless and can be
//! consulted by any view.

mod calendar;
mod config;
mod conflict;
pub mod datetime;
mod error;
mod event;
mod export;
mod holiday;
mod id;
mod recurrence;
mod reminder;
mod store;
mod time_range;
mod types;

pub use crate::calendar::Calendar;
pub use crate::config::{APP_NAME, Config, ReminderInterval};
pub use crate::conflict::{conflicts_with, find_conflicts, pairwise_conflicts};
pub use crate::error::{StorageError, ValidationError};
pub use crate::event::{DEFAULT_REMINDER_MINUTES, Event, EventDraft, Recurrence, RecurrenceKind};
pub use crate::export::to_ics;
pub use crate::holiday::{
    DayClass, Holiday, HolidayClasses, HolidayInfo, HolidayRegistry, HolidayType, UpcomingCount,
    WEEKLY_HOLIDAY, YearSummary, type_classes, type_color,
};
pub use crate::id::{IdGenerator, SequentialIds, UuidGenerator};
pub use crate::recurrence::{MAX_OCCURRENCES, exceeds_limit, expand, occurrence_dates};
pub use crate::reminder::{
    Clock, LogNotifier, ManualClock, Notification, Notifier, ReminderScheduler, SystemClock, due,
};
pub use crate::store::{
    DateFilter, EVENTS_KEY, EventStore, JsonFileStore, KeyValueStore, MAX_RECENT_SEARCHES,
    MemoryStore, RECENT_SEARCHES_KEY,
};
pub use crate::time_range::TimeRange;
pub use crate::types::{Color, Priority, SortKey, SortOrder};
