// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reminder scheduling driven by a manual clock.

use jiff::civil::date;
use keracal_core::{Notification, Notifier};

use crate::common::{draft_at, memory_calendar, t};

#[derive(Debug, Default)]
struct Inbox {
    received: Vec<Notification>,
    denied: bool,
}

impl Notifier for Inbox {
    fn notify(&mut self, notification: &Notification) -> bool {
        if self.denied {
            return false;
        }
        self.received.push(notification.clone());
        true
    }
}

#[test]
fn reminder_fires_once_across_ticks() {
    // Arrange
    let day = date(2024, 6, 10);
    let (mut calendar, clock, _) = memory_calendar(day.at(8, 0, 0, 0));
    let mut draft = draft_at("Standup", day, t(9, 0), t(9, 15));
    draft.reminder_minutes = Some(15);
    let id = calendar.new_event(draft).unwrap()[0].id().to_string();
    calendar.scheduler_mut().start();
    let mut inbox = Inbox::default();

    // Act - tick every five minutes through the morning
    let mut fired = Vec::new();
    for minute in (0..=90).step_by(5) {
        clock.set(day.at(8, 0, 0, 0).saturating_add(jiff::Span::new().minutes(minute)));
        fired.extend(calendar.tick_reminders(&mut inbox));
    }

    // Assert
    assert_eq!(fired, vec![id.clone()]);
    assert_eq!(inbox.received.len(), 1);
    assert_eq!(inbox.received[0].title, "Reminder: Standup");
    assert_eq!(inbox.received[0].body, "Event starts in 15 minutes");
    assert!(calendar.store().get(&id).unwrap().reminder_shown);
}

#[test]
fn reminder_permission_denied_still_latches() {
    let day = date(2024, 6, 10);
    let (mut calendar, clock, _) = memory_calendar(day.at(8, 0, 0, 0));
    let mut draft = draft_at("Standup", day, t(9, 0), t(9, 15));
    draft.reminder_minutes = Some(30);
    let id = calendar.new_event(draft).unwrap()[0].id().to_string();
    calendar.scheduler_mut().start();

    clock.set(day.at(8, 40, 0, 0));
    let mut inbox = Inbox {
        denied: true,
        ..Default::default()
    };
    assert_eq!(calendar.tick_reminders(&mut inbox).len(), 1);
    assert!(inbox.received.is_empty());
    assert!(calendar.store().get(&id).unwrap().reminder_shown);
}

#[test]
fn reminder_missed_while_closed_is_never_delivered() {
    let day = date(2024, 6, 10);
    let (mut calendar, clock, _) = memory_calendar(day.at(8, 0, 0, 0));
    let mut draft = draft_at("Standup", day, t(9, 0), t(9, 15));
    draft.reminder_minutes = Some(15);
    let id = calendar.new_event(draft).unwrap()[0].id().to_string();
    calendar.scheduler_mut().start();

    clock.set(day.at(9, 1, 0, 0));
    let mut inbox = Inbox::default();
    assert!(calendar.tick_reminders(&mut inbox).is_empty());
    assert!(!calendar.store().get(&id).unwrap().reminder_shown);
}

#[test]
fn reminder_scheduler_lifecycle() {
    let day = date(2024, 6, 10);
    let (mut calendar, clock, _) = memory_calendar(day.at(8, 0, 0, 0));
    let mut draft = draft_at("Standup", day, t(9, 0), t(9, 15));
    draft.reminder_minutes = Some(15);
    calendar.new_event(draft).unwrap();
    clock.set(day.at(8, 50, 0, 0));
    let mut inbox = Inbox::default();

    assert!(calendar.tick_reminders(&mut inbox).is_empty());

    calendar.scheduler_mut().start();
    assert!(calendar.scheduler_mut().is_running());
    calendar.scheduler_mut().stop();
    assert!(calendar.tick_reminders(&mut inbox).is_empty());

    calendar.scheduler_mut().start();
    assert_eq!(calendar.tick_reminders(&mut inbox).len(), 1);
}
