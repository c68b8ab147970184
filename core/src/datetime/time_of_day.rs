// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};

use crate::ValidationError;

/// Parses a wall-clock `HH:MM` time of day. A one-digit hour is accepted.
pub fn parse_time(s: &str) -> Result<Time, ValidationError> {
    let invalid = || ValidationError::InvalidTime(s.to_string());
    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(invalid());
    }

    let hour: i8 = h.parse().map_err(|_| invalid())?;
    let minute: i8 = m.parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

/// Formats a time of day as `HH:MM`, dropping seconds.
pub fn format_time(t: Time) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<Date, ValidationError> {
    s.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Minutes since midnight, `hh * 60 + mm`.
pub fn minutes_of_day(t: Time) -> u16 {
    // hour and minute are always non-negative and bounded
    t.hour().unsigned_abs() as u16 * 60 + t.minute().unsigned_abs() as u16
}

/// Serializes a [`Time`] as `"HH:MM"`.
pub mod serde_hhmm {
    use jiff::civil::Time;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s).map_err(de::Error::custom)
    }
}

/// Optional free text where the empty string means absent.
pub mod serde_opt_text {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Optional date where `null` and the empty string both mean absent.
pub mod serde_opt_date {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => super::parse_date(&s).map(Some).map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}
