// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Day sequences backing the day, week, month and year views.
//!
//! Weeks always start on Sunday. All functions are total over valid dates and
//! saturate at the edges of the supported date range.

use jiff::ToSpan;
use jiff::civil::{Date, DateTime};

/// Number of cells in a month grid: six full weeks.
pub const MONTH_GRID_LEN: usize = 42;

/// The Sunday on or before `date`.
pub fn start_of_week(date: Date) -> Date {
    let offset = i64::from(date.weekday().to_sunday_zero_offset());
    date.saturating_sub(offset.days())
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: Date) -> Date {
    start_of_week(date).saturating_add(6.days())
}

/// The first day of the month of `date`.
pub fn start_of_month(date: Date) -> Date {
    date.first_of_month()
}

/// The last day of the month of `date`.
pub fn end_of_month(date: Date) -> Date {
    date.last_of_month()
}

/// The seven consecutive days of the week containing `date`.
pub fn week_grid(date: Date) -> [Date; 7] {
    days_from(start_of_week(date))
}

/// Six full weeks starting at the Sunday on or before the first of the month.
///
/// The grid has a fixed size regardless of how many weeks the month spans, so
/// a leading or trailing week may lie entirely outside the month.
pub fn month_grid(date: Date) -> [Date; MONTH_GRID_LEN] {
    days_from(start_of_week(start_of_month(date)))
}

/// The first day of each month in the year of `date`.
pub fn year_months(date: Date) -> [Date; 12] {
    let jan1 = date.first_of_year();
    std::array::from_fn(|i| jan1.saturating_add((i as i64).months()))
}

/// Calendar-date equality.
pub fn is_same_day(a: Date, b: Date) -> bool {
    a == b
}

/// Whether both dates fall in the same month of the same year.
pub fn is_same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Whether `date` is the local calendar date of `now`.
pub fn is_today(date: Date, now: DateTime) -> bool {
    date == now.date()
}

fn days_from<const N: usize>(start: Date) -> [Date; N] {
    std::array::from_fn(|i| start.saturating_add((i as i64).days()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Weekday, date};

    use super::*;

    #[test]
    fn start_of_week_is_previous_sunday() {
        // 2024-06-12 is a Wednesday
        assert_eq!(start_of_week(date(2024, 6, 12)), date(2024, 6, 9));
        assert_eq!(end_of_week(date(2024, 6, 12)), date(2024, 6, 15));
    }

    #[test]
    fn month_bounds() {
        assert_eq!(start_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(end_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2025, 2, 1)), date(2025, 2, 28));
    }

    #[test]
    fn start_of_week_of_sunday_is_itself() {
        assert_eq!(start_of_week(date(2024, 6, 9)), date(2024, 6, 9));
    }

    #[test]
    fn start_of_week_crosses_year_boundary() {
        // 2025-01-01 is a Wednesday
        assert_eq!(start_of_week(date(2025, 1, 1)), date(2024, 12, 29));
    }

    #[test]
    fn week_grid_is_seven_consecutive_days() {
        let week = week_grid(date(2024, 2, 28));
        assert_eq!(week[0], date(2024, 2, 25));
        assert_eq!(week[6], date(2024, 3, 2));
        assert!(week.iter().all(|d| start_of_week(*d) == week[0]));
        assert_eq!(week[0].weekday(), Weekday::Sunday);
    }

    #[test]
    fn month_grid_has_42_days_from_sunday() {
        for month in 1..=12 {
            let grid = month_grid(date(2024, month, 15));
            assert_eq!(grid.len(), MONTH_GRID_LEN);
            assert_eq!(grid[0].weekday(), Weekday::Sunday);
            assert!(grid[0] <= date(2024, month, 1));
            // the 8th cell is always inside the target month
            assert_eq!(grid[7].month(), month);
            for pair in grid.windows(2) {
                assert_eq!(pair[0].tomorrow().unwrap(), pair[1]);
            }
        }
    }

    #[test]
    fn month_grid_may_include_an_entire_trailing_week_outside() {
        // February 2026 starts on Sunday and fits in four weeks
        let grid = month_grid(date(2026, 2, 10));
        assert_eq!(grid[0], date(2026, 2, 1));
        assert!(grid[35..].iter().all(|d| d.month() == 3));
    }

    #[test]
    fn year_months_are_firsts_of_month() {
        let months = year_months(date(2024, 7, 19));
        assert_eq!(months[0], date(2024, 1, 1));
        assert_eq!(months[11], date(2024, 12, 1));
        assert!(months.iter().all(|d| d.day() == 1 && d.year() == 2024));
    }

    #[test]
    fn compares_calendar_dates() {
        assert!(is_same_day(date(2024, 6, 1), date(2024, 6, 1)));
        assert!(!is_same_day(date(2024, 6, 1), date(2023, 6, 1)));
        assert!(is_same_month(date(2024, 6, 1), date(2024, 6, 30)));
        assert!(!is_same_month(date(2024, 6, 1), date(2025, 6, 1)));
        assert!(is_today(date(2024, 6, 1), date(2024, 6, 1).at(23, 59, 0, 0)));
        assert!(!is_today(date(2024, 6, 2), date(2024, 6, 1).at(23, 59, 0, 0)));
    }
}
