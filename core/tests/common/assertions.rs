// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::collections::HashSet;

use jiff::civil::Date;
use keracal_core::{Event, EventDraft};

/// Asserts that an event carries every editable field of a draft.
///
/// # Panics
///
/// Panics if any field doesn't match the expected value.
pub fn assert_event_matches_draft(event: &Event, draft: &EventDraft) {
    assert_eq!(event.title, draft.title, "Title mismatch");
    assert_eq!(event.date, draft.date, "Date mismatch");
    assert_eq!(event.start_time, draft.start_time, "Start time mismatch");
    assert_eq!(event.end_time, draft.end_time, "End time mismatch");
    assert_eq!(event.color, draft.color, "Color mismatch");
    assert_eq!(event.priority, draft.priority, "Priority mismatch");
    assert_eq!(event.description, draft.description, "Description mismatch");
    assert_eq!(event.location, draft.location, "Location mismatch");
}

/// Asserts that no two events share an id.
pub fn assert_ids_unique<'a>(events: impl IntoIterator<Item = &'a Event>) {
    let mut seen = HashSet::new();
    for event in events {
        assert!(seen.insert(event.id().to_string()), "Duplicate id {}", event.id());
    }
}

/// Asserts the dates of events, in order.
pub fn assert_dates(events: &[Event], expected: &[Date]) {
    let dates: Vec<_> = events.iter().map(|e| e.date).collect();
    assert_eq!(dates, expected, "Occurrence dates mismatch");
}
