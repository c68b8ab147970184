// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use colored::Color;
use keracal_core::Event;
use keracal_core::datetime::format_time;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{OutputFormat, short_id, terminal_color};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    conflicts: BTreeSet<String>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Id,
                EventColumn::Date,
                EventColumn::TimeRange,
                EventColumn::Flags,
                EventColumn::Title,
            ],
            conflicts: BTreeSet::new(),
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds location, priority and color columns, and shows full ids.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns = vec![
                EventColumn::FullId,
                EventColumn::Date,
                EventColumn::TimeRange,
                EventColumn::Flags,
                EventColumn::Priority,
                EventColumn::Color,
                EventColumn::Title,
                EventColumn::Location,
            ];
        }
        self
    }

    /// Ids of events to mark as overlapping another event.
    pub fn with_conflicts(mut self, conflicts: BTreeSet<String>) -> Self {
        self.conflicts = conflicts;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [&'a Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table if self.events.is_empty() => write!(f, "No events"),
            OutputFormat::Table => {
                let rows: Vec<Row<'_>> = self
                    .events
                    .iter()
                    .map(|event| Row {
                        event,
                        conflict: self.formatter.conflicts.contains(event.id()),
                    })
                    .collect();
                let table = Table::new(&self.formatter.columns, &rows).to_string();
                write!(f, "{}", table.trim_end())
            }
        }
    }
}

#[derive(Debug)]
struct Row<'a> {
    event: &'a Event,
    conflict: bool,
}

#[derive(Debug, Clone, Copy)]
enum EventColumn {
    Id,
    FullId,
    Date,
    TimeRange,
    Flags,
    Title,
    Priority,
    Color,
    Location,
}

impl<'r> Column<Row<'r>> for EventColumn {
    fn name(&self) -> &'static str {
        match self {
            EventColumn::Id | EventColumn::FullId => "ID",
            EventColumn::Date => "Date",
            EventColumn::TimeRange => "Time",
            EventColumn::Flags => "",
            EventColumn::Title => "Title",
            EventColumn::Priority => "Priority",
            EventColumn::Color => "Color",
            EventColumn::Location => "Location",
        }
    }

    fn format<'a>(&self, row: &'a Row<'r>) -> Cow<'a, str> {
        let event = row.event;
        match self {
            EventColumn::Id => short_id(event.id()).into(),
            EventColumn::FullId => event.id().into(),
            EventColumn::Date => event.date.strftime("%Y-%m-%d").to_string().into(),
            EventColumn::TimeRange => format!(
                "{}~{}",
                format_time(event.start_time),
                format_time(event.end_time)
            )
            .into(),
            EventColumn::Flags => flags(row).into(),
            EventColumn::Title => event.title.as_str().into(),
            EventColumn::Priority => event.priority.as_ref().to_string().into(),
            EventColumn::Color => event.color.as_ref().to_string().into(),
            EventColumn::Location => event.location.as_deref().unwrap_or_default().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id | EventColumn::FullId => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &Row<'r>) -> Option<Color> {
        match self {
            EventColumn::TimeRange | EventColumn::Flags if row.conflict => Some(Color::Red),
            EventColumn::Title | EventColumn::Color => Some(terminal_color(row.event.color)),
            _ => None,
        }
    }
}

/// `!` for a conflict, `*` for a pending reminder, `~` for a recurring event.
fn flags(row: &Row<'_>) -> String {
    let mut s = String::new();
    if row.conflict {
        s.push('!');
    }
    if row.event.reminder && !row.event.reminder_shown {
        s.push('*');
    }
    if row.event.recurring {
        s.push('~');
    }
    s
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};
    use keracal_core::{EventDraft, EventStore, MemoryStore, SequentialIds};

    use super::*;

    fn store() -> EventStore {
        let mut store = EventStore::load(
            Box::new(MemoryStore::new()),
            Box::new(SequentialIds::new("evt")),
            None,
        );
        let mut draft = EventDraft::new(
            "Standup",
            date(2024, 6, 10),
            time(9, 0, 0, 0),
            time(9, 30, 0, 0),
        );
        draft.reminder_minutes = Some(10);
        store.create(draft).unwrap();

        let draft = EventDraft::new(
            "Review",
            date(2024, 6, 10),
            time(9, 15, 0, 0),
            time(10, 0, 0, 0),
        );
        store.create(draft).unwrap();
        store
    }

    #[test]
    fn formats_table_rows_with_flags() {
        colored::control::set_override(false);
        let store = store();
        let events = store.by_date(date(2024, 6, 10));
        let conflicts = store.conflicts_on(date(2024, 6, 10));

        let formatter = EventFormatter::new().with_conflicts(conflicts);
        let out = formatter.format(&events).to_string();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("   ID  Date"));
        assert_eq!(lines[1], "evt-1  2024-06-10  09:00~09:30  !*  Standup");
        assert_eq!(lines[2], "evt-2  2024-06-10  09:15~10:00  !   Review");
    }

    #[test]
    fn formats_json_records() {
        let store = store();
        let events = store.by_date(date(2024, 6, 10));

        let formatter = EventFormatter::new().with_output_format(OutputFormat::Json);
        let out = formatter.format(&events).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["title"], "Standup");
        assert_eq!(value[0]["startTime"], "09:00");
        assert_eq!(value[0]["reminderMinutes"], 10);
        assert_eq!(value[1]["id"], "evt-2");
    }

    #[test]
    fn reports_empty_list() {
        colored::control::set_override(false);
        let out = EventFormatter::new().format(&[]).to_string();
        assert_eq!(out, "No events");
    }
}
