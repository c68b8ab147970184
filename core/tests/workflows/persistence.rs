// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Write-through persistence, reopening and fail-open loading.

use jiff::civil::date;
use keracal_core::{
    EVENTS_KEY, EventStore, KeyValueStore, MemoryStore, RECENT_SEARCHES_KEY, SequentialIds,
};

use crate::common::{file_calendar, memory_store, setup_temp_dirs, test_event_draft};

fn reopen(kv: &MemoryStore, seed: Option<&str>) -> EventStore {
    EventStore::load(Box::new(kv.clone()), Box::new(SequentialIds::new("re")), seed)
}

#[test]
fn persistence_reopen_sees_every_mutation() {
    // Arrange
    let (mut store, kv) = memory_store();
    let kept = store.create(test_event_draft("Kept")).unwrap()[0].clone();
    let gone = store.create(test_event_draft("Gone")).unwrap()[0].clone();
    store.mark_reminder_shown(kept.id());

    // Act
    store.delete(gone.id());
    store.record_search("kept");
    let reopened = reopen(&kv, None);

    // Assert
    assert_eq!(reopened.len(), 1);
    let event = reopened.get(kept.id()).unwrap();
    assert_eq!(event.title, "Kept");
    assert!(event.reminder_shown);
    assert_eq!(reopened.recent_searches(), ["kept"]);
}

#[test]
fn persistence_malformed_data_loads_empty() {
    let kv = MemoryStore::with(EVENTS_KEY, "{not json");
    let store = reopen(&kv, Some("[]"));
    assert!(store.is_empty());

    let mut kv = MemoryStore::with(EVENTS_KEY, "[]");
    kv.set(RECENT_SEARCHES_KEY, "42").unwrap();
    let store = reopen(&kv, None);
    assert!(store.is_empty());
    assert!(store.recent_searches().is_empty());
}

#[test]
fn persistence_seed_only_when_nothing_stored() {
    let seed = r#"[{"id":"s1","title":"Onam Lunch","date":"2024-09-15","startTime":"12:00","endTime":"14:00"}]"#;

    let fresh = reopen(&MemoryStore::new(), Some(seed));
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh.get("s1").unwrap().title, "Onam Lunch");

    let (mut store, kv) = memory_store();
    store.create(test_event_draft("Mine")).unwrap();
    let existing = reopen(&kv, Some(seed));
    assert_eq!(existing.len(), 1);
    assert!(existing.get("s1").is_none());
}

#[test]
fn persistence_drops_invalid_and_duplicate_records() {
    let stored = r#"[
        {"id":"a","title":"Fine","date":"2024-06-10","startTime":"09:00","endTime":"10:00"},
        {"id":"a","title":"Dup","date":"2024-06-10","startTime":"11:00","endTime":"12:00"},
        {"id":"b","title":"Backwards","date":"2024-06-10","startTime":"12:00","endTime":"11:00"},
        {"id":"c","title":"","date":"2024-06-10","startTime":"09:00","endTime":"10:00"}
    ]"#;
    let store = reopen(&MemoryStore::with(EVENTS_KEY, stored), None);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap().title, "Fine");
}

#[test]
fn persistence_file_store_round_trip_and_export() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let now = date(2024, 6, 1).at(8, 0, 0, 0);
    let (mut calendar, _) = file_calendar(&dirs.state_dir, now);

    // Act
    let id = calendar.new_event(test_event_draft("Team Sync")).unwrap()[0]
        .id()
        .to_string();
    let export = dirs.files_dir.join("calendar.ics");
    calendar.export_to_file(&export).unwrap();
    drop(calendar);

    // Assert
    assert!(dirs.state_dir.join("calendarEvents.json").exists());
    let (reopened, _) = file_calendar(&dirs.state_dir, now);
    assert_eq!(reopened.store().get(&id).unwrap().title, "Team Sync");

    let ics = std::fs::read_to_string(&export).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.contains(&format!("UID:{id}@calendar-app\r\n")));
    assert!(ics.contains("DTSTART:20240610T090000\r\nDTEND:20240610T100000\r\n"));
    assert!(ics.ends_with("END:VCALENDAR"));
}
