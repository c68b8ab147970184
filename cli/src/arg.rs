// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use keracal_core::{Color, DateFilter, Priority, RecurrenceKind};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    /// Optional positional date, `today` when omitted.
    pub fn date() -> Arg {
        arg!(date: [DATE] "Date to show, YYYY-MM-DD, today, tomorrow or yesterday")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event, or a unique prefix of it")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches.get_one::<String>("id").cloned().unwrap_or_default()
    }

    pub fn title(positional: bool) -> Arg {
        if positional {
            arg!(title: <TITLE> "Title of the event")
        } else {
            arg!(title: -t --title <TITLE> "Title of the event")
        }
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn date() -> Arg {
        arg!(--date <DATE> "Date of the event, YYYY-MM-DD, today, tomorrow or yesterday")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn start() -> Arg {
        arg!(--start <START> "Start time of the event, HH:MM")
    }

    pub fn get_start(matches: &ArgMatches) -> Option<String> {
        matches.get_one("start").cloned()
    }

    pub fn end() -> Arg {
        arg!(--end <END> "End time of the event, HH:MM")
    }

    pub fn get_end(matches: &ArgMatches) -> Option<String> {
        matches.get_one("end").cloned()
    }

    pub fn description() -> Arg {
        arg!(--description <DESCRIPTION> "Description of the event")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn location() -> Arg {
        arg!(--location <LOCATION> "Location of the event")
    }

    pub fn get_location(matches: &ArgMatches) -> Option<String> {
        matches.get_one("location").cloned()
    }

    pub fn notes() -> Arg {
        arg!(--notes <NOTES> "Free-form notes")
    }

    pub fn get_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("notes").cloned()
    }

    pub fn color() -> Arg {
        arg!(--color <COLOR> "Display color of the event").value_parser(value_parser!(Color))
    }

    pub fn get_color(matches: &ArgMatches) -> Option<Color> {
        matches.get_one("color").copied()
    }

    pub fn priority() -> Arg {
        arg!(--priority <PRIORITY> "Priority of the event").value_parser(value_parser!(Priority))
    }

    pub fn get_priority(matches: &ArgMatches) -> Option<Priority> {
        matches.get_one("priority").copied()
    }

    pub fn reminder() -> Arg {
        arg!(--reminder [MINUTES] "Remind before the event starts, in minutes")
            .long_help(
                "\
Remind before the event starts. Without a value the lead time defaults to \
`default_reminder_minutes` from the configuration.",
            )
            .value_parser(value_parser!(u32))
    }

    /// `None` when the flag is absent, `Some(None)` when given without minutes.
    pub fn get_reminder(matches: &ArgMatches) -> Option<Option<u32>> {
        matches
            .contains_id("reminder")
            .then(|| matches.get_one("reminder").copied())
    }

    pub fn no_reminder() -> Arg {
        arg!(--"no-reminder" "Turn the reminder off")
            .action(ArgAction::SetTrue)
            .conflicts_with("reminder")
    }

    pub fn get_no_reminder(matches: &ArgMatches) -> bool {
        matches.get_flag("no-reminder")
    }

    pub fn repeat() -> Arg {
        arg!(--repeat <KIND> "Repeat the event").value_parser(value_parser!(RecurrenceKind))
    }

    pub fn get_repeat(matches: &ArgMatches) -> Option<RecurrenceKind> {
        matches.get_one("repeat").copied()
    }

    pub fn until() -> Arg {
        arg!(--until <DATE> "Last date a repeating event may fall on").requires("repeat")
    }

    pub fn get_until(matches: &ArgMatches) -> Option<String> {
        matches.get_one("until").cloned()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchArgs;

impl SearchArgs {
    pub fn when() -> Arg {
        arg!(--when <FILTER> "Restrict matches to a date range")
            .value_parser(value_parser!(DateFilter))
            .default_value("all")
    }

    pub fn get_when(matches: &ArgMatches) -> DateFilter {
        matches.get_one("when").copied().unwrap_or_default()
    }
}
