// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reminder delivery.
//!
//! Each event with a reminder moves one way through `pending -> fired`. A
//! reminder is due while `start - lead <= now <= start`; once `now` passes the
//! start without a tick landing in that window, the reminder is missed for
//! good and `reminder_shown` stays false.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use jiff::civil::DateTime;

use crate::{Event, EventStore};

/// Source of the current local wall-clock time.
pub trait Clock: Debug {
    fn now(&self) -> DateTime;
}

/// The system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        jiff::Zoned::now().datetime()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime>>,
}

impl ManualClock {
    pub fn new(now: DateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: DateTime) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime {
        self.now.get()
    }
}

/// A reminder ready to be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// Builds the notification for `event`.
    ///
    /// The body states the configured lead time, even when the scan runs late.
    pub fn for_event(event: &Event) -> Self {
        Self {
            title: format!("Reminder: {}", event.title),
            body: format!("Event starts in {} minutes", event.reminder_minutes),
        }
    }
}

/// Presentation side of reminders.
pub trait Notifier {
    /// Presents a notification. Returns `false` when delivery is not permitted.
    fn notify(&mut self, notification: &Notification) -> bool;
}

/// Writes reminders to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) -> bool {
        tracing::info!(title = %notification.title, body = %notification.body, "reminder");
        true
    }
}

/// Events whose reminder is due at `now`, soonest first.
pub fn due(store: &EventStore, now: DateTime) -> Vec<&Event> {
    let mut events: Vec<_> = store.iter().filter(|e| is_due(e, now)).collect();
    events.sort_by_key(|e| e.start_instant());
    events
}

fn is_due(event: &Event, now: DateTime) -> bool {
    if event.reminder_shown {
        return false;
    }
    match event.reminder_instant() {
        Some(at) => at <= now && now <= event.start_instant(),
        None => false,
    }
}

/// Periodic reminder scan with an explicit start/stop lifecycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReminderScheduler {
    running: bool,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        tracing::debug!("reminder scheduler started");
        self.running = true;
    }

    pub fn stop(&mut self) {
        tracing::debug!("reminder scheduler stopped");
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fires every due reminder once and latches it. Does nothing while stopped.
    ///
    /// Returns the ids of the events whose reminders fired, delivered or not.
    pub fn tick(
        &self,
        store: &mut EventStore,
        now: DateTime,
        notifier: &mut dyn Notifier,
    ) -> Vec<String> {
        if !self.running {
            return Vec::new();
        }

        let fired: Vec<(String, Notification)> = due(store, now)
            .into_iter()
            .map(|e| (e.id().to_string(), Notification::for_event(e)))
            .collect();

        for (id, notification) in &fired {
            if notifier.notify(notification) {
                tracing::info!(id, "reminder delivered");
            } else {
                tracing::debug!(id, "reminder delivery not permitted");
            }
            store.mark_reminder_shown(id);
        }

        fired.into_iter().map(|(id, _)| id).collect()
    }
}
