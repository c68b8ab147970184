// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Named holidays and the Sunday weekly-off overlay.
//!
//! Everything here is a pure lookup over a static table. A date may be a
//! Sunday and a named holiday at the same time; both are reported and the
//! caller decides which to show.

mod style;
mod table;
mod year;

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};
use serde::Serialize;

pub use style::{HolidayClasses, HolidayType, type_classes, type_color};
pub use year::YearSummary;

/// A named holiday on a fixed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: Date,

    /// Display name.
    pub name: &'static str,

    /// Category label, such as `"Public Holiday"`.
    #[serde(rename = "type")]
    pub label: &'static str,

    /// One-line description.
    pub description: &'static str,
}

impl Holiday {
    /// The parsed category of the holiday.
    pub fn kind(&self) -> HolidayType {
        HolidayType::from_label(self.label)
    }
}

/// Both classifications of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    /// Whether the date is a Sunday.
    pub is_sunday: bool,

    /// The named holiday on the date, if any.
    pub holiday: Option<&'static Holiday>,
}

impl DayClass {
    /// Whether the date is a Sunday or a named holiday.
    pub fn is_off(&self) -> bool {
        self.is_sunday || self.holiday.is_some()
    }
}

/// Display entry for a date, with Sundays taking precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayInfo {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub label: &'static str,
    pub is_sunday: bool,
}

/// Label used for the weekly Sunday off.
pub const WEEKLY_HOLIDAY: &str = "Weekly Holiday";

/// Counts of days off in an inclusive window.
///
/// A named holiday falling on a Sunday is counted in both buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingCount {
    /// `govt_or_named + sundays`.
    pub total: usize,

    /// Named holidays in the window.
    pub govt_or_named: usize,

    /// Sundays in the window.
    pub sundays: usize,
}

/// Read-only registry over a static holiday table.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRegistry {
    holidays: &'static [Holiday],
}

impl Default for HolidayRegistry {
    fn default() -> Self {
        Self::kerala()
    }
}

impl HolidayRegistry {
    /// Registry over the bundled Kerala government holidays.
    pub fn kerala() -> Self {
        Self::new(table::KERALA)
    }

    /// Registry over a custom table.
    pub fn new(holidays: &'static [Holiday]) -> Self {
        Self { holidays }
    }

    /// Whether the date is a Sunday.
    pub fn is_sunday(date: Date) -> bool {
        date.weekday() == Weekday::Sunday
    }

    /// The named holiday on exactly this date.
    pub fn lookup(&self, date: Date) -> Option<&'static Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Reports both the weekly-off and the named-holiday classification.
    pub fn classify(&self, date: Date) -> DayClass {
        DayClass {
            is_sunday: Self::is_sunday(date),
            holiday: self.lookup(date),
        }
    }

    /// A single display entry: Sundays first, then named holidays.
    pub fn info(&self, date: Date) -> Option<HolidayInfo> {
        if Self::is_sunday(date) {
            return Some(HolidayInfo {
                name: "Sunday",
                label: WEEKLY_HOLIDAY,
                is_sunday: true,
            });
        }

        self.lookup(date).map(|h| HolidayInfo {
            name: h.name,
            label: h.label,
            is_sunday: false,
        })
    }

    /// Every holiday in the table, in date order.
    pub fn all(&self) -> impl Iterator<Item = &'static Holiday> + '_ {
        self.holidays.iter()
    }

    /// Named holidays in the given year.
    pub fn holidays_in_year(&self, year: i16) -> Vec<&'static Holiday> {
        self.holidays.iter().filter(|h| h.date.year() == year).collect()
    }

    /// Named holidays between `start` and `end`, both inclusive.
    pub fn holidays_between(&self, start: Date, end: Date) -> Vec<&'static Holiday> {
        self.holidays
            .iter()
            .filter(|h| start <= h.date && h.date <= end)
            .collect()
    }

    /// Counts named holidays and Sundays in `[from, from + days]`.
    pub fn count_upcoming(&self, from: Date, days: u32) -> UpcomingCount {
        let end = from.saturating_add(i64::from(days).days());
        let named = self.holidays_between(from, end).len();

        let mut sundays = 0;
        let mut day = from;
        while day <= end {
            if Self::is_sunday(day) {
                sundays += 1;
            }
            match day.tomorrow() {
                Ok(next) => day = next,
                Err(_) => break,
            }
        }

        UpcomingCount {
            total: named + sundays,
            govt_or_named: named,
            sundays,
        }
    }
}
