// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::civil::{Date, Time, time};
use jiff::{Span, ToSpan};

/// Calendar view granularity, which also decides the navigation step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum View {
    /// One day with hourly slots.
    Day,

    /// Seven days with hourly slots.
    #[default]
    Week,

    /// A six-week month grid.
    Month,

    /// Twelve month grids.
    Year,
}

impl View {
    /// The date one period after `date`.
    ///
    /// Month and year steps clamp the day to the last valid day of the target
    /// month, e.g. Jan 31 + 1 month is the last day of February.
    pub fn next(self, date: Date) -> Date {
        date.saturating_add(self.step())
    }

    /// The date one period before `date`.
    pub fn prev(self, date: Date) -> Date {
        date.saturating_sub(self.step())
    }

    fn step(self) -> Span {
        match self {
            View::Day => 1.day(),
            View::Week => 7.days(),
            View::Month => 1.month(),
            View::Year => 1.year(),
        }
    }
}

impl AsRef<str> for View {
    fn as_ref(&self) -> &str {
        match self {
            View::Day => "day",
            View::Week => "week",
            View::Month => "month",
            View::Year => "year",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for View {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "day" => Ok(View::Day),
            "week" => Ok(View::Week),
            "month" => Ok(View::Month),
            "year" => Ok(View::Year),
            _ => Err(()),
        }
    }
}

/// The 24 hourly slot start times of the day and week grids.
pub fn hour_slots() -> [Time; 24] {
    std::array::from_fn(|h| time(h as i8, 0, 0, 0))
}
