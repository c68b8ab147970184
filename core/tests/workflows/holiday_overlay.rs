// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Holiday overlay as a month view would consult it.

use jiff::civil::{Weekday, date};
use keracal_core::datetime::{MONTH_GRID_LEN, is_same_month, month_grid, week_grid};
use keracal_core::{HolidayRegistry, HolidayType, YearSummary};

#[test]
fn holiday_month_grid_overlay() {
    // Arrange
    let registry = HolidayRegistry::kerala();
    let target = date(2024, 9, 20);

    // Act
    let grid = month_grid(target);
    let off: Vec<_> = grid
        .iter()
        .filter(|d| is_same_month(**d, target))
        .map(|d| registry.classify(*d))
        .filter(|c| c.is_off())
        .collect();

    // Assert
    assert_eq!(grid.len(), MONTH_GRID_LEN);
    assert!(is_same_month(grid[7], target));
    let named: Vec<_> = off.iter().filter_map(|c| c.holiday).map(|h| h.name).collect();
    assert_eq!(
        named,
        vec!["Onam (Uthradom)", "Onam (Thiruvonam)", "Milad-un-Nabi"]
    );
    assert_eq!(off.iter().filter(|c| c.is_sunday).count(), 5);
}

#[test]
fn holiday_month_grid_eighth_cell_always_in_month() {
    for year in [2023, 2024, 2025, 2026] {
        for month in 1..=12 {
            let target = date(year, month, 15);
            let grid = month_grid(target);
            assert_eq!(grid.len(), 42);
            assert!(is_same_month(grid[7], target), "{year}-{month}");
            assert_eq!(grid[0].weekday(), Weekday::Sunday);
        }
    }
}

#[test]
fn holiday_week_view_classification() {
    let registry = HolidayRegistry::kerala();
    // week of Vishu 2024, which falls on a Sunday
    let week = week_grid(date(2024, 4, 16));
    let first = registry.classify(week[0]);
    assert_eq!(week[0], date(2024, 4, 14));
    assert!(first.is_sunday);
    assert_eq!(first.holiday.map(|h| h.kind()), Some(HolidayType::Government));
    assert!(week[1..].iter().all(|d| !registry.classify(*d).is_sunday));
}

#[test]
fn holiday_upcoming_counts_are_independent() {
    let registry = HolidayRegistry::kerala();
    let count = registry.count_upcoming(date(2024, 6, 1), 30);
    assert_eq!(count.sundays, 5);
    assert_eq!(count.govt_or_named, 2);
    assert_eq!(count.total, count.sundays + count.govt_or_named);
}

#[test]
fn holiday_year_summary() {
    let summary = YearSummary::of(2025, &HolidayRegistry::kerala()).unwrap();
    assert!(!summary.is_leap_year);
    assert_eq!(summary.first_weekday, Weekday::Wednesday);
    assert_eq!(summary.sundays.len(), 52);
    assert_eq!(summary.holidays.len(), 29);
}
