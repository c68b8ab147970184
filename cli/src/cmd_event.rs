// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use keracal_core::{
    Calendar, Color, Event, EventDraft, Priority, Recurrence, RecurrenceKind, SortKey, SortOrder,
};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, parse_date_arg, parse_time_arg, resolve_id, short_id};

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: String,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub color: Option<Color>,
    pub priority: Option<Priority>,
    pub reminder: Option<Option<u32>>,
    pub repeat: Option<RecurrenceKind>,
    pub until: Option<String>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new event")
            .arg(EventArgs::title(true))
            .arg(EventArgs::date())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::description())
            .arg(EventArgs::location())
            .arg(EventArgs::notes())
            .arg(EventArgs::color())
            .arg(EventArgs::priority())
            .arg(EventArgs::reminder())
            .arg(EventArgs::repeat())
            .arg(EventArgs::until())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches).unwrap_or_default(),
            date: EventArgs::get_date(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            description: EventArgs::get_description(matches),
            location: EventArgs::get_location(matches),
            notes: EventArgs::get_notes(matches),
            color: EventArgs::get_color(matches),
            priority: EventArgs::get_priority(matches),
            reminder: EventArgs::get_reminder(matches),
            repeat: EventArgs::get_repeat(matches),
            until: EventArgs::get_until(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let today = calendar.today();
        let date = match &self.date {
            Some(date) => parse_date_arg(today, date)?,
            None => today,
        };
        let slot = self.start.as_deref().map(parse_time_arg).transpose()?;

        let mut draft = calendar.default_draft(date, slot);
        draft.title = self.title;
        if let Some(end) = &self.end {
            draft.end_time = parse_time_arg(end)?;
        }
        draft.description = self.description;
        draft.location = self.location;
        draft.notes = self.notes;
        draft.color = self.color.unwrap_or_default();
        draft.priority = self.priority.unwrap_or_default();
        draft.reminder_minutes = self
            .reminder
            .map(|m| m.unwrap_or(calendar.config().default_reminder_minutes));
        draft.recurrence = match self.repeat {
            Some(kind) => Some(Recurrence {
                kind,
                until: self
                    .until
                    .as_deref()
                    .map(|a| parse_date_arg(today, a))
                    .transpose()?,
            }),
            None => None,
        };

        let conflicts = conflict_titles(calendar, &draft, None);
        let events = calendar.new_event(draft)?;
        warn_conflicts(&conflicts);
        print_events(calendar, &events, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub color: Option<Color>,
    pub priority: Option<Priority>,
    pub reminder: Option<Option<u32>>,
    pub no_reminder: bool,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event")
            .arg(EventArgs::id())
            .arg(EventArgs::title(false))
            .arg(EventArgs::date())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::description())
            .arg(EventArgs::location())
            .arg(EventArgs::notes())
            .arg(EventArgs::color())
            .arg(EventArgs::priority())
            .arg(EventArgs::reminder())
            .arg(EventArgs::no_reminder())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            title: EventArgs::get_title(matches),
            date: EventArgs::get_date(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            description: EventArgs::get_description(matches),
            location: EventArgs::get_location(matches),
            notes: EventArgs::get_notes(matches),
            color: EventArgs::get_color(matches),
            priority: EventArgs::get_priority(matches),
            reminder: EventArgs::get_reminder(matches),
            no_reminder: EventArgs::get_no_reminder(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let id = resolve_id(calendar, &self.id)?;
        let mut draft = match calendar.store().get(&id) {
            Some(event) => event.to_draft(),
            None => return Err(format!("No event found with id: {id}").into()),
        };

        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(date) = &self.date {
            draft.date = parse_date_arg(calendar.today(), date)?;
        }
        if let Some(start) = &self.start {
            draft.start_time = parse_time_arg(start)?;
        }
        if let Some(end) = &self.end {
            draft.end_time = parse_time_arg(end)?;
        }
        // an empty value clears the field
        if let Some(description) = self.description {
            draft.description = Some(description);
        }
        if let Some(location) = self.location {
            draft.location = Some(location);
        }
        if let Some(notes) = self.notes {
            draft.notes = Some(notes);
        }
        if let Some(color) = self.color {
            draft.color = color;
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        if let Some(minutes) = self.reminder {
            let fallback = draft
                .reminder_minutes
                .unwrap_or(calendar.config().default_reminder_minutes);
            draft.reminder_minutes = Some(minutes.unwrap_or(fallback));
        }
        if self.no_reminder {
            draft.reminder_minutes = None;
        }

        let conflicts = conflict_titles(calendar, &draft, Some(&id));
        match calendar.update_event(&id, draft)? {
            Some(event) => {
                warn_conflicts(&conflicts);
                print_events(calendar, &[event], self.output_format, self.verbose);
            }
            None => tracing::warn!(id, "event vanished while editing"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventMove {
    pub id: String,
    pub date: String,
    pub start: String,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventMove {
    pub const NAME: &str = "move";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("mv")
            .about("Move an event to another date and start time, keeping its duration")
            .arg(EventArgs::id())
            .arg(arg!(date: <DATE> "New date, YYYY-MM-DD, today, tomorrow or yesterday"))
            .arg(arg!(start: <START> "New start time, HH:MM"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            date: matches.get_one::<String>("date").cloned().unwrap_or_default(),
            start: matches.get_one::<String>("start").cloned().unwrap_or_default(),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "moving event...");
        let id = resolve_id(calendar, &self.id)?;
        let date = parse_date_arg(calendar.today(), &self.date)?;
        let start = parse_time_arg(&self.start)?;

        match calendar.reschedule_event(&id, date, start)? {
            Some(event) => {
                let conflicts: Vec<String> = calendar
                    .store()
                    .conflicts_for(&event, None)
                    .into_iter()
                    .map(|e| e.title.clone())
                    .collect();
                warn_conflicts(&conflicts);
                print_events(calendar, &[event], self.output_format, self.verbose);
            }
            None => tracing::warn!(id, "event vanished while moving"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub ids: Vec<String>,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete events")
            .arg(EventArgs::id().num_args(1..))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let ids = matches
            .get_many::<String>("id")
            .map(|ids| ids.cloned().collect())
            .unwrap_or_default();
        Self { ids }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting events...");
        for id in &self.ids {
            let id = resolve_id(calendar, id)?;
            if let Some(event) = calendar.delete_event(&id) {
                println!("{} {} {}", "Deleted".red(), short_id(event.id()), event.title);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub sort: SortKey,
    pub order: SortOrder,
    pub upcoming: bool,
    pub past: bool,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events")
            .arg(
                arg!(--sort <KEY> "Sort key")
                    .value_parser(value_parser!(SortKey))
                    .default_value("date"),
            )
            .arg(
                arg!(--order <ORDER> "Sort order")
                    .value_parser(value_parser!(SortOrder))
                    .default_value("asc"),
            )
            .arg(arg!(--upcoming "Only events that have not started yet").conflicts_with("past"))
            .arg(arg!(--past "Only events that already started"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            sort: matches.get_one("sort").copied().unwrap_or_default(),
            order: matches.get_one("order").copied().unwrap_or_default(),
            upcoming: matches.get_flag("upcoming"),
            past: matches.get_flag("past"),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let now = calendar.now();
        let store = calendar.store();
        let events: Vec<&Event> = if self.upcoming {
            store.upcoming(now)
        } else if self.past {
            store.past(now)
        } else {
            store.all_sorted(self.sort, self.order)
        };

        let conflicts = events
            .iter()
            .flat_map(|e| store.conflicts_on(e.date))
            .collect();
        let formatter = EventFormatter::new()
            .with_output_format(self.output_format)
            .with_verbose(self.verbose)
            .with_conflicts(conflicts);
        println!("{}", formatter.format(&events));
        Ok(())
    }
}

fn conflict_titles(calendar: &Calendar, draft: &EventDraft, exclude: Option<&str>) -> Vec<String> {
    calendar
        .conflicts_with_draft(draft, exclude)
        .into_iter()
        .map(|e| e.title.clone())
        .collect()
}

fn warn_conflicts(titles: &[String]) {
    if !titles.is_empty() {
        println!(
            "{} overlaps with {}",
            "Warning:".yellow(),
            titles.join(", ")
        );
    }
}

fn print_events(calendar: &Calendar, events: &[Event], output_format: OutputFormat, verbose: bool) {
    let store = calendar.store();
    let conflicts = events
        .iter()
        .flat_map(|e| store.conflicts_on(e.date))
        .collect();
    let events: Vec<&Event> = events.iter().collect();
    let formatter = EventFormatter::new()
        .with_output_format(output_format)
        .with_verbose(verbose)
        .with_conflicts(conflicts);
    println!("{}", formatter.format(&events));
}
