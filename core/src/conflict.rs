// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use crate::{Event, TimeRange};

/// Events on the candidate's date whose time ranges overlap it.
///
/// `exclude` skips the event being edited so it never conflicts with itself.
pub fn find_conflicts<'a, I>(events: I, candidate: &Event, exclude: Option<&str>) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let range = candidate.time_range();
    events
        .into_iter()
        .filter(|e| e.date == candidate.date)
        .filter(|e| e.id() != candidate.id() && Some(e.id()) != exclude)
        .filter(|e| e.time_range().overlaps(&range))
        .collect()
}

/// Events overlapping the given range on a single day, ignoring `exclude`.
pub fn conflicts_with<'a, I>(events: I, range: TimeRange, exclude: Option<&str>) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|e| Some(e.id()) != exclude)
        .filter(|e| e.time_range().overlaps(&range))
        .collect()
}

/// Ids of every event on a single day that overlaps at least one other.
pub fn pairwise_conflicts(events: &[&Event]) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for (i, a) in events.iter().enumerate() {
        for b in &events[i + 1..] {
            if a.date == b.date && a.time_range().overlaps(&b.time_range()) {
                ids.insert(a.id().to_string());
                ids.insert(b.id().to_string());
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;
    use crate::EventDraft;

    fn event(id: &str, d: i8, start: (i8, i8), end: (i8, i8)) -> Event {
        let draft = EventDraft::new(
            id,
            date(2024, 6, d),
            time(start.0, start.1, 0, 0),
            time(end.0, end.1, 0, 0),
        );
        Event::from_draft(id.to_string(), draft)
    }

    #[test]
    fn finds_overlaps_on_same_day_only() {
        let events = [
            event("a", 10, (9, 0), (10, 0)),
            event("b", 10, (9, 30), (10, 30)),
            event("c", 11, (9, 30), (10, 30)),
            event("d", 10, (10, 0), (11, 0)),
        ];
        let found = find_conflicts(&events, &events[0], None);
        let ids: Vec<_> = found.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn excludes_edited_event() {
        let events = [event("a", 10, (9, 0), (10, 0)), event("b", 10, (9, 30), (10, 30))];
        let candidate = event("new", 10, (9, 15), (9, 45));
        assert_eq!(find_conflicts(&events, &candidate, None).len(), 2);
        assert_eq!(find_conflicts(&events, &candidate, Some("a")).len(), 1);
    }

    #[test]
    fn conflicts_with_range() {
        let events = [event("a", 10, (9, 0), (10, 0)), event("b", 10, (11, 0), (12, 0))];
        let found = conflicts_with(&events, TimeRange::new(570, 660), None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "a");
    }

    #[test]
    fn pairwise_marks_both_sides() {
        let a = event("a", 10, (9, 0), (10, 0));
        let b = event("b", 10, (9, 30), (10, 30));
        let c = event("c", 10, (10, 30), (11, 0));
        let ids = pairwise_conflicts(&[&a, &b, &c]);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
