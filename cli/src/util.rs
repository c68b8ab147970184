// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::ToSpan;
use jiff::civil::{Date, Time};
use keracal_core::datetime::{parse_date, parse_time};
use keracal_core::{Calendar, Color};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a date argument: `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday`.
pub fn parse_date_arg(today: Date, s: &str) -> Result<Date, Box<dyn Error>> {
    let date = match s.trim().to_lowercase().as_str() {
        "today" => today,
        "tomorrow" => today.checked_add(1.day())?,
        "yesterday" => today.checked_sub(1.day())?,
        _ => parse_date(s)?,
    };
    Ok(date)
}

/// Parses an `HH:MM` time argument.
pub fn parse_time_arg(s: &str) -> Result<Time, Box<dyn Error>> {
    Ok(parse_time(s)?)
}

/// Resolves a full event id from either the id or a unique prefix of it.
pub fn resolve_id(calendar: &Calendar, id: &str) -> Result<String, Box<dyn Error>> {
    if id.trim().is_empty() {
        return Err("Event id must not be empty".into());
    }

    let store = calendar.store();
    if store.get(id).is_some() {
        return Ok(id.to_string());
    }

    let mut candidates = store.iter().map(|e| e.id()).filter(|a| a.starts_with(id));
    match (candidates.next(), candidates.next()) {
        (Some(found), None) => Ok(found.to_string()),
        (Some(_), Some(_)) => Err(format!("Ambiguous event id: {id}").into()),
        (None, _) => Err(format!("No event found with id: {id}").into()),
    }
}

/// Terminal color of an event color tag.
pub fn terminal_color(color: Color) -> colored::Color {
    match color {
        Color::Blue => colored::Color::Blue,
        Color::Green => colored::Color::Green,
        Color::Red => colored::Color::Red,
        Color::Purple => colored::Color::Magenta,
        Color::Yellow => colored::Color::Yellow,
        Color::Indigo => colored::Color::BrightBlue,
        Color::Pink => colored::Color::BrightMagenta,
        Color::Gray => colored::Color::BrightBlack,
    }
}

/// Terminal color of a holiday category color tag.
pub fn holiday_color(tag: &str) -> colored::Color {
    match tag {
        "indigo" => colored::Color::BrightBlue,
        "fuchsia" => colored::Color::Magenta,
        "cyan" => colored::Color::Cyan,
        "amber" => colored::Color::Yellow,
        "slate" => colored::Color::BrightBlack,
        _ => colored::Color::Green,
    }
}

/// Shortens an id to its first eight characters.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((i, _)) => &id[..i],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};
    use keracal_core::{Config, EventDraft, ManualClock, MemoryStore, SequentialIds};

    use super::*;

    #[test]
    fn parses_relative_dates() {
        let today = date(2024, 6, 10);
        assert_eq!(parse_date_arg(today, "today").unwrap(), today);
        assert_eq!(parse_date_arg(today, "Tomorrow").unwrap(), date(2024, 6, 11));
        assert_eq!(parse_date_arg(today, "yesterday").unwrap(), date(2024, 6, 9));
        assert_eq!(parse_date_arg(today, "2024-12-25").unwrap(), date(2024, 12, 25));
        assert!(parse_date_arg(today, "next week").is_err());
    }

    #[test]
    fn parses_times() {
        assert_eq!(parse_time_arg("9:30").unwrap(), time(9, 30, 0, 0));
        assert_eq!(parse_time_arg("23:59").unwrap(), time(23, 59, 0, 0));
        assert!(parse_time_arg("24:00").is_err());
    }

    fn calendar_with(titles: &[&str]) -> Calendar {
        let mut calendar = Calendar::with_parts(
            Config::default(),
            Box::new(MemoryStore::new()),
            Box::new(SequentialIds::new("evt")),
            Box::new(ManualClock::new(date(2024, 6, 1).at(8, 0, 0, 0))),
        );
        for title in titles {
            let draft =
                EventDraft::new(*title, date(2024, 6, 10), time(9, 0, 0, 0), time(10, 0, 0, 0));
            calendar.new_event(draft).unwrap();
        }
        calendar
    }

    #[test]
    fn resolves_ids_by_unique_prefix() {
        let calendar = calendar_with(&["Standup"]);
        assert_eq!(resolve_id(&calendar, "evt-1").unwrap(), "evt-1");
        assert_eq!(resolve_id(&calendar, "evt").unwrap(), "evt-1");
        assert!(resolve_id(&calendar, "other").is_err());

        let calendar = calendar_with(&["Standup", "Review"]);
        let err = resolve_id(&calendar, "evt").unwrap_err();
        assert!(err.to_string().contains("Ambiguous"));
    }

    #[test]
    fn rejects_empty_ids() {
        let calendar = calendar_with(&["Standup"]);
        for id in ["", "  "] {
            let err = resolve_id(&calendar, id).unwrap_err();
            assert!(err.to_string().contains("must not be empty"), "{id:?}: {err}");
        }
    }

    #[test]
    fn shortens_ids() {
        assert_eq!(short_id("0f8fad5b-d9cb-469f"), "0f8fad5b");
        assert_eq!(short_id("evt-1"), "evt-1");
    }
}
