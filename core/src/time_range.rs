// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Time;

use crate::datetime::minutes_of_day;

/// A half-open `[start, end)` range of minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Inclusive start, in minutes since midnight.
    pub start: u16,

    /// Exclusive end, in minutes since midnight.
    pub end: u16,
}

impl TimeRange {
    /// Creates a range from raw minute bounds.
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Creates a range from two wall-clock times.
    pub fn from_times(start: Time, end: Time) -> Self {
        Self::new(minutes_of_day(start), minutes_of_day(end))
    }

    /// Whether two ranges share at least one minute. Touching ranges do not.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether the given minute falls in the range.
    pub fn contains(&self, minute: u16) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Length of the range in minutes, zero if empty.
    pub fn duration(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range covers no minute.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
