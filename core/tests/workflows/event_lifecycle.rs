// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Create, edit, move and delete flows, with conflict checks along the way.

use jiff::civil::date;
use keracal_core::{Color, Priority, ValidationError, find_conflicts};

use crate::common::{assert_event_matches_draft, draft_at, memory_calendar, t, test_event_draft};

#[test]
fn event_lifecycle_create_and_detect_conflict() {
    // Arrange
    let (mut calendar, _, _) = memory_calendar(date(2024, 6, 1).at(8, 0, 0, 0));
    let day = date(2024, 6, 10);

    // Act
    let first = calendar.new_event(test_event_draft("Team Sync")).unwrap();
    assert_eq!(calendar.store().len(), 1);
    let second = calendar
        .new_event(draft_at("Design Review", day, t(9, 30), t(10, 30)))
        .unwrap();

    // Assert
    let a = &first[0];
    let b = &second[0];
    let events: Vec<_> = calendar.store().iter().cloned().collect();

    let for_a = find_conflicts(&events, a, Some(a.id()));
    assert_eq!(for_a.len(), 1);
    assert_eq!(for_a[0].id(), b.id());

    let for_b = find_conflicts(&events, b, Some(b.id()));
    assert_eq!(for_b.len(), 1);
    assert_eq!(for_b[0].id(), a.id());

    assert!(calendar.store().has_conflicts_on(day));
}

#[test]
fn event_lifecycle_back_to_back_is_not_a_conflict() {
    let (mut calendar, _, _) = memory_calendar(date(2024, 6, 1).at(8, 0, 0, 0));
    let day = date(2024, 6, 10);
    calendar.new_event(draft_at("First", day, t(9, 0), t(10, 0))).unwrap();
    calendar.new_event(draft_at("Second", day, t(10, 0), t(11, 0))).unwrap();

    assert!(!calendar.store().has_conflicts_on(day));
    assert!(calendar.store().conflicts_on(day).is_empty());
}

#[test]
fn event_lifecycle_rejects_inverted_times_without_mutation() {
    let (mut calendar, _, kv) = memory_calendar(date(2024, 6, 1).at(8, 0, 0, 0));
    let draft = draft_at("Backwards", date(2024, 6, 10), t(10, 0), t(9, 0));

    let err = calendar.new_event(draft).unwrap_err();

    assert!(matches!(err, ValidationError::EndNotAfterStart { .. }));
    assert_eq!(err.field(), "time");
    assert!(calendar.store().is_empty());
    assert_eq!(kv.raw(keracal_core::EVENTS_KEY), None);
}

#[test]
fn event_lifecycle_edit_move_delete() {
    // Arrange
    let (mut calendar, _, _) = memory_calendar(date(2024, 6, 1).at(8, 0, 0, 0));
    let created = calendar.new_event(test_event_draft("Team Sync")).unwrap();
    let id = created[0].id().to_string();

    // Act - edit
    let mut draft = created[0].to_draft();
    draft.color = Color::Purple;
    draft.priority = Priority::High;
    draft.location = Some("Room 4".to_string());
    let edited = calendar.update_event(&id, draft.clone()).unwrap().unwrap();

    // Assert - id kept, fields replaced
    assert_eq!(edited.id(), id);
    assert_event_matches_draft(&edited, &draft);

    // Act - move by drag
    let moved = calendar
        .reschedule_event(&id, date(2024, 6, 12), t(15, 0))
        .unwrap()
        .unwrap();

    // Assert - duration preserved
    assert_eq!(moved.date, date(2024, 6, 12));
    assert_eq!((moved.start_time, moved.end_time), (t(15, 0), t(16, 0)));
    assert!(calendar.store().by_date(date(2024, 6, 10)).is_empty());

    // Act - delete twice
    assert!(calendar.delete_event(&id).is_some());
    assert!(calendar.delete_event(&id).is_none());
    assert!(calendar.store().is_empty());
}

#[test]
fn event_lifecycle_unknown_ids_are_silent() {
    let (mut calendar, _, _) = memory_calendar(date(2024, 6, 1).at(8, 0, 0, 0));
    calendar.new_event(test_event_draft("Keep")).unwrap();

    assert_eq!(calendar.update_event("ghost", test_event_draft("X")), Ok(None));
    assert_eq!(calendar.reschedule_event("ghost", date(2024, 6, 2), t(9, 0)), Ok(None));
    assert!(calendar.delete_event("ghost").is_none());
    assert_eq!(calendar.store().len(), 1);
}
