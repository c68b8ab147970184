// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurring events materialize as independent records.

use jiff::ToSpan;
use jiff::civil::date;
use keracal_core::{MAX_OCCURRENCES, Recurrence, RecurrenceKind, ValidationError, occurrence_dates};

use crate::common::{assert_dates, assert_ids_unique, draft_at, memory_calendar, t};

#[test]
fn recurring_daily_creates_three_records() {
    // Arrange
    let (mut calendar, _, _) = memory_calendar(date(2024, 5, 1).at(8, 0, 0, 0));
    let mut draft = draft_at("Yoga", date(2024, 6, 1), t(7, 0), t(8, 0));
    draft.recurrence = Some(Recurrence {
        kind: RecurrenceKind::Daily,
        until: Some(date(2024, 6, 3)),
    });

    // Act
    let created = calendar.new_event(draft).unwrap();

    // Assert
    assert_eq!(calendar.store().len(), 3);
    assert_dates(&created, &[date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]);
    assert_ids_unique(&created);
    assert!(created
        .iter()
        .all(|e| e.title == "Yoga" && e.start_time == t(7, 0) && e.end_time == t(8, 0)));
}

#[test]
fn recurring_weekly_exact_and_between_steps() {
    let base = date(2024, 6, 3);
    let exact = occurrence_dates(base, RecurrenceKind::Weekly, base.saturating_add(21.days()));
    assert_eq!(exact.len(), 4);

    let between = occurrence_dates(base, RecurrenceKind::Weekly, base.saturating_add(20.days()));
    assert_eq!(between.len(), 3);
}

#[test]
fn recurring_without_end_date_is_rejected_by_form() {
    let (mut calendar, _, _) = memory_calendar(date(2024, 5, 1).at(8, 0, 0, 0));
    let mut draft = draft_at("Yoga", date(2024, 6, 1), t(7, 0), t(8, 0));
    draft.recurrence = Some(Recurrence {
        kind: RecurrenceKind::Monthly,
        until: None,
    });

    let err = calendar.new_event(draft).unwrap_err();
    assert_eq!(err, ValidationError::MissingRecurringEndDate);
    assert_eq!(err.field(), "recurringEndDate");
    assert!(calendar.store().is_empty());
}

#[test]
fn recurring_series_over_the_limit_is_rejected_whole() {
    let (mut calendar, _, _) = memory_calendar(date(2023, 12, 1).at(8, 0, 0, 0));
    let mut draft = draft_at("Walk", date(2024, 1, 1), t(6, 0), t(7, 0));
    draft.recurrence = Some(Recurrence {
        kind: RecurrenceKind::Daily,
        until: Some(date(2034, 12, 31)),
    });

    let err = calendar.new_event(draft.clone()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooManyOccurrences {
            max: MAX_OCCURRENCES
        }
    );
    assert_eq!(err.field(), "recurringEndDate");
    assert!(calendar.store().is_empty());

    draft.recurrence = Some(Recurrence {
        kind: RecurrenceKind::Weekly,
        until: Some(date(2034, 12, 31)),
    });
    let created = calendar.new_event(draft).unwrap();
    assert_eq!(created.last().unwrap().date, date(2034, 12, 25));
}

#[test]
fn recurring_expansion_is_deterministic() {
    let first = occurrence_dates(date(2024, 1, 31), RecurrenceKind::Monthly, date(2024, 12, 31));
    let second = occurrence_dates(date(2024, 1, 31), RecurrenceKind::Monthly, date(2024, 12, 31));
    assert_eq!(first, second);
    assert_eq!(first.len(), 12);
    assert!(first.iter().all(|d| *d <= date(2024, 12, 31)));
}

#[test]
fn recurring_occurrences_are_independent() {
    // Arrange
    let (mut calendar, _, _) = memory_calendar(date(2024, 5, 1).at(8, 0, 0, 0));
    let mut draft = draft_at("Standup", date(2024, 6, 3), t(9, 0), t(9, 15));
    draft.recurrence = Some(Recurrence {
        kind: RecurrenceKind::Weekly,
        until: Some(date(2024, 6, 24)),
    });
    let created = calendar.new_event(draft).unwrap();
    let second = created[1].id().to_string();
    let third = created[2].id().to_string();

    // Act
    let mut edit = created[1].to_draft();
    edit.title = "Standup (moved)".to_string();
    calendar.update_event(&second, edit).unwrap();
    calendar.delete_event(&third);

    // Assert
    let store = calendar.store();
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(created[0].id()).unwrap().title, "Standup");
    assert_eq!(store.get(&second).unwrap().title, "Standup (moved)");
    assert_eq!(store.get(created[3].id()).unwrap().title, "Standup");
}
