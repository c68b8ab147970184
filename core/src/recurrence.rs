// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use jiff::{Span, ToSpan};

use crate::id::IdGenerator;
use crate::{Event, RecurrenceKind};

/// Upper bound on materialized occurrences of one series.
pub const MAX_OCCURRENCES: usize = 3660;

/// Dates of every occurrence from `start` through `until` inclusive.
///
/// Occurrence `n` is computed from `start` directly, so a monthly series
/// anchored on the 31st lands on the last day of shorter months without
/// drifting. An `until` before `start` still yields `start`.
pub fn occurrence_dates(start: Date, kind: RecurrenceKind, until: Date) -> Vec<Date> {
    let mut dates = vec![start];
    for n in 1..MAX_OCCURRENCES {
        let Some(next) = nth_after(start, kind, n as i64) else {
            break;
        };
        if next > until || next <= *dates.last().unwrap_or(&start) {
            break;
        }
        dates.push(next);
    }
    dates
}

/// Whether the series from `start` through `until` has more than
/// [`MAX_OCCURRENCES`] occurrences.
pub fn exceeds_limit(start: Date, kind: RecurrenceKind, until: Date) -> bool {
    nth_after(start, kind, MAX_OCCURRENCES as i64).is_some_and(|d| d <= until)
}

fn nth_after(start: Date, kind: RecurrenceKind, n: i64) -> Option<Date> {
    let step: Span = match kind {
        RecurrenceKind::Daily => n.days(),
        RecurrenceKind::Weekly => (n * 7).days(),
        RecurrenceKind::Monthly => n.months(),
        RecurrenceKind::Yearly => n.years(),
    };
    start.checked_add(step).ok()
}

/// Materializes a recurring event into one record per occurrence.
///
/// The base record comes first and keeps its id. Events without a
/// recurrence, or without an end date, expand to just the base.
pub fn expand(base: Event, ids: &mut dyn IdGenerator) -> Vec<Event> {
    let Some(recurrence) = base.recurrence() else {
        return vec![base];
    };
    let Some(until) = recurrence.until else {
        return vec![base];
    };

    let dates = occurrence_dates(base.date, recurrence.kind, until);
    tracing::debug!(
        kind = %recurrence.kind,
        count = dates.len(),
        "expanding recurring event"
    );

    let mut events = Vec::with_capacity(dates.len());
    for date in dates.iter().skip(1) {
        events.push(base.occurrence(ids.next_id(), *date));
    }
    events.insert(0, base);
    events
}
