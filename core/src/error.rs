// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Time;

/// Rejection of an event write, tied to the form field that caused it.
///
/// A rejected write never touches the store.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is empty or whitespace only.
    #[error("Title is required")]
    EmptyTitle,

    /// The end time is not strictly after the start time.
    #[error("End time must be after start time (got {start}-{end})")]
    EndNotAfterStart {
        /// Start time of the rejected event.
        start: Time,
        /// End time of the rejected event.
        end: Time,
    },

    /// A recurring event was submitted without an end date.
    #[error("End date is required for recurring events")]
    MissingRecurringEndDate,

    /// A recurring event would materialize more occurrences than allowed.
    #[error("Recurring event would repeat more than {max} times, choose an earlier end date")]
    TooManyOccurrences {
        /// Largest number of occurrences a series may have.
        max: usize,
    },

    /// A new event would end before the current time.
    #[error("Cannot add events that end in the past")]
    EndsInPast,

    /// Moving the event would push its end past midnight.
    #[error("Event would end after midnight when starting at {start}")]
    OutOfDay {
        /// Requested start time.
        start: Time,
    },

    /// A time-of-day string is not `HH:MM`.
    #[error("Invalid time: {0}, expected HH:MM")]
    InvalidTime(String),

    /// A date string is not `YYYY-MM-DD`.
    #[error("Invalid date: {0}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl ValidationError {
    /// The form field the rejection refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyTitle => "title",
            ValidationError::EndNotAfterStart { .. }
            | ValidationError::EndsInPast
            | ValidationError::OutOfDay { .. }
            | ValidationError::InvalidTime(_) => "time",
            ValidationError::MissingRecurringEndDate
            | ValidationError::TooManyOccurrences { .. } => "recurringEndDate",
            ValidationError::InvalidDate(_) => "date",
        }
    }
}

/// Failure at the key-value persistence boundary.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored payload could not be encoded or decoded.
    #[error("Malformed stored data: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn maps_errors_to_form_fields() {
        assert_eq!(ValidationError::EmptyTitle.field(), "title");
        assert_eq!(ValidationError::MissingRecurringEndDate.field(), "recurringEndDate");
        assert_eq!(ValidationError::EndsInPast.field(), "time");
        assert_eq!(ValidationError::InvalidDate("x".into()).field(), "date");

        let err = ValidationError::EndNotAfterStart {
            start: time(10, 0, 0, 0),
            end: time(9, 0, 0, 0),
        };
        assert_eq!(err.field(), "time");
    }

    #[test]
    fn displays_human_readable_messages() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Title is required");
        assert_eq!(
            ValidationError::MissingRecurringEndDate.to_string(),
            "End date is required for recurring events"
        );
    }
}
