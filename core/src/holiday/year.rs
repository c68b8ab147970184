// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};

use super::{Holiday, HolidayRegistry};

/// Calendar facts about one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSummary {
    pub year: i16,
    pub is_leap_year: bool,

    /// Every Sunday of the year, in order.
    pub sundays: Vec<Date>,

    /// Number of 7-day offsets from Jan 1, at most 53, that stay in the year.
    pub weeks: usize,

    pub first_weekday: Weekday,
    pub last_weekday: Weekday,

    /// Named holidays of the year.
    pub holidays: Vec<&'static Holiday>,
}

impl YearSummary {
    /// Summarizes `year`, or `None` if it is outside the supported range.
    pub fn of(year: i16, registry: &HolidayRegistry) -> Option<Self> {
        let jan1 = Date::new(year, 1, 1).ok()?;
        let dec31 = Date::new(year, 12, 31).ok()?;

        let first_sunday = jan1.nth_weekday_of_month(1, Weekday::Sunday).ok()?;
        let sundays = (0..54_i64)
            .map_while(|i| first_sunday.checked_add((i * 7).days()).ok())
            .take_while(|d| *d <= dec31)
            .collect();

        let weeks = (0..53)
            .map_while(|i: i64| jan1.checked_add((i * 7).days()).ok())
            .take_while(|d| d.year() == year)
            .count();

        Some(Self {
            year,
            is_leap_year: jan1.in_leap_year(),
            sundays,
            weeks,
            first_weekday: jan1.weekday(),
            last_weekday: dec31.weekday(),
            holidays: registry.holidays_in_year(year),
        })
    }
}
