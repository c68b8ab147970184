// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::{fmt::Display, str::FromStr};

use jiff::ToSpan;
use jiff::civil::{Date, DateTime, Time};

use super::EventStore;
use crate::conflict::{self, find_conflicts};
use crate::datetime::{end_of_month, end_of_week, minutes_of_day, start_of_month, start_of_week};
use crate::{Event, SortKey, SortOrder};

/// Calendar-date filter of the search panel, relative to today.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DateFilter {
    /// No date restriction.
    #[default]
    All,

    /// Events dated today.
    Today,

    /// Events dated tomorrow.
    Tomorrow,

    /// Events in the Sunday-to-Saturday week containing today.
    Week,

    /// Events in the month containing today.
    Month,

    /// Events dated after today.
    Upcoming,

    /// Events dated before today.
    Past,
}

impl DateFilter {
    /// Whether an event dated `date` passes the filter.
    pub fn matches(&self, date: Date, today: Date) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Today => date == today,
            DateFilter::Tomorrow => date == today.saturating_add(1.day()),
            DateFilter::Week => start_of_week(today) <= date && date <= end_of_week(today),
            DateFilter::Month => start_of_month(today) <= date && date <= end_of_month(today),
            DateFilter::Upcoming => date > today,
            DateFilter::Past => date < today,
        }
    }
}

const FILTER_ALL: &str = "all";
const FILTER_TODAY: &str = "today";
const FILTER_TOMORROW: &str = "tomorrow";
const FILTER_WEEK: &str = "week";
const FILTER_MONTH: &str = "month";
const FILTER_UPCOMING: &str = "upcoming";
const FILTER_PAST: &str = "past";

impl AsRef<str> for DateFilter {
    fn as_ref(&self) -> &str {
        match self {
            DateFilter::All => FILTER_ALL,
            DateFilter::Today => FILTER_TODAY,
            DateFilter::Tomorrow => FILTER_TOMORROW,
            DateFilter::Week => FILTER_WEEK,
            DateFilter::Month => FILTER_MONTH,
            DateFilter::Upcoming => FILTER_UPCOMING,
            DateFilter::Past => FILTER_PAST,
        }
    }
}

impl Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for DateFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            FILTER_ALL => Ok(DateFilter::All),
            FILTER_TODAY => Ok(DateFilter::Today),
            FILTER_TOMORROW => Ok(DateFilter::Tomorrow),
            FILTER_WEEK => Ok(DateFilter::Week),
            FILTER_MONTH => Ok(DateFilter::Month),
            FILTER_UPCOMING => Ok(DateFilter::Upcoming),
            FILTER_PAST => Ok(DateFilter::Past),
            _ => Err(()),
        }
    }
}

impl EventStore {
    /// The event with this id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events on `date`, ordered by start time.
    pub fn by_date(&self, date: Date) -> Vec<&Event> {
        let mut events: Vec<_> = self.events.iter().filter(|e| e.date == date).collect();
        events.sort_by_key(|e| e.start_time);
        events
    }

    /// Events on `date` whose range contains the `slot` minute.
    ///
    /// An event is placed in the cell of every slot it is running at, so one
    /// starting at 09:30 first shows up in the 10:00 cell.
    pub fn by_time_slot(&self, date: Date, slot: Time) -> Vec<&Event> {
        let minute = minutes_of_day(slot);
        self.by_date(date)
            .into_iter()
            .filter(|e| e.time_range().contains(minute))
            .collect()
    }

    /// Events starting in `[start, end)`, ordered by start.
    pub fn by_range(&self, start: DateTime, end: DateTime) -> Vec<&Event> {
        self.sorted_where(|e| {
            let at = e.start_instant();
            start <= at && at < end
        })
    }

    /// Events starting at or after `now`, soonest first.
    pub fn upcoming(&self, now: DateTime) -> Vec<&Event> {
        self.sorted_where(|e| e.start_instant() >= now)
    }

    /// Events that started before `now`, oldest first.
    pub fn past(&self, now: DateTime) -> Vec<&Event> {
        self.sorted_where(|e| e.start_instant() < now)
    }

    /// Case-insensitive substring search over title, description and location.
    ///
    /// An empty term matches every event. Whitespace is matched as typed.
    pub fn search(&self, term: &str) -> Vec<&Event> {
        let needle = term.to_lowercase();
        self.events
            .iter()
            .filter(|e| needle.is_empty() || matches_term(e, &needle))
            .collect()
    }

    /// Search combined with a date filter relative to `today`.
    pub fn filter(&self, term: &str, when: DateFilter, today: Date) -> Vec<&Event> {
        self.search(term)
            .into_iter()
            .filter(|e| when.matches(e.date, today))
            .collect()
    }

    /// Every event, sorted by the given key. Ties keep insertion order.
    pub fn all_sorted(&self, key: SortKey, order: SortOrder) -> Vec<&Event> {
        let mut events: Vec<_> = self.events.iter().collect();
        events.sort_by(|a, b| {
            let ord = compare(a, b, key);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        events
    }

    /// Events on the same date as `candidate` that overlap it.
    pub fn conflicts_for(&self, candidate: &Event, exclude: Option<&str>) -> Vec<&Event> {
        find_conflicts(&self.events, candidate, exclude)
    }

    /// Ids of every event on `date` that overlaps another.
    pub fn conflicts_on(&self, date: Date) -> BTreeSet<String> {
        conflict::pairwise_conflicts(&self.by_date(date))
    }

    /// Whether any two events on `date` overlap.
    pub fn has_conflicts_on(&self, date: Date) -> bool {
        !self.conflicts_on(date).is_empty()
    }

    fn sorted_where(&self, f: impl Fn(&Event) -> bool) -> Vec<&Event> {
        let mut events: Vec<_> = self.events.iter().filter(|e| f(e)).collect();
        events.sort_by_key(|e| e.start_instant());
        events
    }
}

fn matches_term(event: &Event, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&event.title)
        || event.description.as_deref().is_some_and(hit)
        || event.location.as_deref().is_some_and(hit)
}

fn compare(a: &Event, b: &Event, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.start_instant().cmp(&b.start_instant()),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Color => a.color.as_ref().cmp(b.color.as_ref()),
    }
}
