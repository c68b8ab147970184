// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::ToSpan;
use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use crate::datetime::{serde_hhmm, serde_opt_date, serde_opt_text};
use crate::recurrence::{self, MAX_OCCURRENCES};
use crate::{Color, Priority, TimeRange, ValidationError};

/// Lead time of a reminder when none is given.
pub const DEFAULT_REMINDER_MINUTES: u32 = 15;

/// A single-day calendar event, as persisted.
///
/// Recurring events are materialized as independent records that share every
/// field except `id` and `date`; there is no link back to a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: String,

    /// Title of the event, never empty.
    pub title: String,

    /// Calendar date of the event.
    pub date: Date,

    /// Wall-clock start time, strictly before `end_time`.
    #[serde(with = "serde_hhmm")]
    pub start_time: Time,

    /// Wall-clock end time on the same day.
    #[serde(with = "serde_hhmm")]
    pub end_time: Time,

    /// Display color tag.
    #[serde(default)]
    pub color: Color,

    /// Description of the event, if available.
    #[serde(default, deserialize_with = "serde_opt_text::deserialize")]
    pub description: Option<String>,

    /// Location of the event, if available.
    #[serde(default, deserialize_with = "serde_opt_text::deserialize")]
    pub location: Option<String>,

    /// Free-form notes, if available.
    #[serde(default, deserialize_with = "serde_opt_text::deserialize")]
    pub notes: Option<String>,

    /// Priority of the event.
    #[serde(default)]
    pub priority: Priority,

    /// Whether a reminder should fire before the event starts.
    #[serde(default)]
    pub reminder: bool,

    /// Reminder lead time in minutes.
    #[serde(default = "default_reminder_minutes", deserialize_with = "or_default_minutes")]
    pub reminder_minutes: u32,

    /// Latched once the reminder fired; never reset.
    #[serde(default)]
    pub reminder_shown: bool,

    /// Whether the event was created as part of a recurring series.
    #[serde(default)]
    pub recurring: bool,

    /// Recurrence rule the event was created with.
    #[serde(default)]
    pub recurring_type: Option<RecurrenceKind>,

    /// Last date the recurrence may produce.
    #[serde(default, deserialize_with = "serde_opt_date::deserialize")]
    pub recurring_end_date: Option<Date>,
}

impl Event {
    /// Builds a record from a validated draft.
    pub(crate) fn from_draft(id: String, draft: EventDraft) -> Self {
        let mut event = Self {
            id,
            title: String::new(),
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            color: Color::default(),
            description: None,
            location: None,
            notes: None,
            priority: Priority::default(),
            reminder: false,
            reminder_minutes: DEFAULT_REMINDER_MINUTES,
            reminder_shown: false,
            recurring: false,
            recurring_type: None,
            recurring_end_date: None,
        };
        event.apply(draft);
        event
    }

    /// Replaces every field but `id` and the reminder latch with the draft.
    pub(crate) fn apply(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.date = draft.date;
        self.start_time = draft.start_time;
        self.end_time = draft.end_time;
        self.color = draft.color;
        self.description = draft.description.filter(|s| !s.is_empty());
        self.location = draft.location.filter(|s| !s.is_empty());
        self.notes = draft.notes.filter(|s| !s.is_empty());
        self.priority = draft.priority;

        self.reminder = draft.reminder_minutes.is_some();
        if let Some(minutes) = draft.reminder_minutes {
            self.reminder_minutes = minutes;
        }

        self.recurring = draft.recurrence.is_some();
        self.recurring_type = draft.recurrence.map(|r| r.kind);
        self.recurring_end_date = draft.recurrence.and_then(|r| r.until);
    }

    /// Copy of this event with a fresh id on another date.
    pub(crate) fn occurrence(&self, id: String, date: Date) -> Self {
        Self {
            id,
            date,
            reminder_shown: false,
            ..self.clone()
        }
    }

    pub(crate) fn mark_reminder_shown(&mut self) {
        self.reminder_shown = true;
    }

    /// The unique identifier of the event.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The minute-of-day range of the event.
    pub fn time_range(&self) -> TimeRange {
        TimeRange::from_times(self.start_time, self.end_time)
    }

    /// Start as a local wall-clock instant.
    pub fn start_instant(&self) -> DateTime {
        self.date.to_datetime(self.start_time)
    }

    /// End as a local wall-clock instant.
    pub fn end_instant(&self) -> DateTime {
        self.date.to_datetime(self.end_time)
    }

    /// When the reminder should fire, if the event has one.
    pub fn reminder_instant(&self) -> Option<DateTime> {
        if !self.reminder {
            return None;
        }
        let lead = i64::from(self.reminder_minutes).minutes();
        Some(self.start_instant().saturating_sub(lead))
    }

    /// The recurrence rule, if the event was created as recurring.
    pub fn recurrence(&self) -> Option<Recurrence> {
        match (self.recurring, self.recurring_type) {
            (true, Some(kind)) => Some(Recurrence {
                kind,
                until: self.recurring_end_date,
            }),
            _ => None,
        }
    }

    /// A draft holding the editable fields of this event.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color,
            description: self.description.clone(),
            location: self.location.clone(),
            notes: self.notes.clone(),
            priority: self.priority,
            reminder_minutes: self.reminder.then_some(self.reminder_minutes),
            recurrence: self.recurrence(),
        }
    }
}

fn default_reminder_minutes() -> u32 {
    DEFAULT_REMINDER_MINUTES
}

/// Older records store `null` lead times for events without reminders.
fn or_default_minutes<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_REMINDER_MINUTES))
}

/// Draft for an event, used for creating new events and replacing existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The title of the event.
    pub title: String,

    /// The calendar date of the event.
    pub date: Date,

    /// The wall-clock start time.
    pub start_time: Time,

    /// The wall-clock end time.
    pub end_time: Time,

    /// The display color tag.
    pub color: Color,

    /// The description of the event, if available.
    pub description: Option<String>,

    /// The location of the event, if available.
    pub location: Option<String>,

    /// Free-form notes, if available.
    pub notes: Option<String>,

    /// The priority of the event.
    pub priority: Priority,

    /// Reminder lead time in minutes, `None` for no reminder.
    pub reminder_minutes: Option<u32>,

    /// Recurrence rule, `None` for a one-off event.
    pub recurrence: Option<Recurrence>,
}

impl EventDraft {
    /// Creates a one-off draft with default color, priority and no reminder.
    pub fn new(title: impl Into<String>, date: Date, start_time: Time, end_time: Time) -> Self {
        Self {
            title: title.into(),
            date,
            start_time,
            end_time,
            color: Color::default(),
            description: None,
            location: None,
            notes: None,
            priority: Priority::default(),
            reminder_minutes: None,
            recurrence: None,
        }
    }

    /// Checks the write-time invariants of an event.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if self.start_time >= self.end_time {
            return Err(ValidationError::EndNotAfterStart {
                start: self.start_time,
                end: self.end_time,
            });
        }

        match self.recurrence {
            Some(Recurrence { until: None, .. }) => {
                return Err(ValidationError::MissingRecurringEndDate);
            }
            Some(Recurrence {
                kind,
                until: Some(until),
            }) if recurrence::exceeds_limit(self.date, kind, until) => {
                return Err(ValidationError::TooManyOccurrences {
                    max: MAX_OCCURRENCES,
                });
            }
            _ => {}
        }

        Ok(())
    }

    /// End as a local wall-clock instant.
    pub fn end_instant(&self) -> DateTime {
        self.date.to_datetime(self.end_time)
    }
}

/// How a recurring event repeats and until when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    /// The step between occurrences.
    pub kind: RecurrenceKind,

    /// The last date an occurrence may fall on.
    pub until: Option<Date>,
}

/// Step between occurrences of a recurring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    /// Every day.
    Daily,

    /// Every seven days.
    Weekly,

    /// Every calendar month, on the same day of month where valid.
    Monthly,

    /// Every calendar year, on the same month and day where valid.
    Yearly,
}

const KIND_DAILY: &str = "daily";
const KIND_WEEKLY: &str = "weekly";
const KIND_MONTHLY: &str = "monthly";
const KIND_YEARLY: &str = "yearly";

impl AsRef<str> for RecurrenceKind {
    fn as_ref(&self) -> &str {
        match self {
            RecurrenceKind::Daily => KIND_DAILY,
            RecurrenceKind::Weekly => KIND_WEEKLY,
            RecurrenceKind::Monthly => KIND_MONTHLY,
            RecurrenceKind::Yearly => KIND_YEARLY,
        }
    }
}

impl Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RecurrenceKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KIND_DAILY => Ok(RecurrenceKind::Daily),
            KIND_WEEKLY => Ok(RecurrenceKind::Weekly),
            KIND_MONTHLY => Ok(RecurrenceKind::Monthly),
            KIND_YEARLY => Ok(RecurrenceKind::Yearly),
            _ => Err(()),
        }
    }
}
