// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write as _;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::civil::{Date, Weekday};
use keracal_core::datetime::{
    View, end_of_month, format_time, hour_slots, is_same_month, is_today, month_grid,
    start_of_month, week_grid,
};
use keracal_core::{Calendar, Event, HolidayRegistry, WEEKLY_HOLIDAY};
use serde_json::json;

use crate::arg::CommonArgs;
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, holiday_color, parse_date_arg};

#[derive(Debug, Clone)]
pub struct CmdDay {
    pub date: Option<String>,
    pub shift: Shift,
    pub slots: bool,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the events of a day")
            .arg(CommonArgs::date())
            .args(Shift::args())
            .arg(arg!(--slots "Show the hourly grid of the day"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: CommonArgs::get_date(matches),
            shift: Shift::from(matches),
            slots: matches.get_flag("slots"),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing day view...");
        let date = resolve_date(calendar, self.date.as_deref(), View::Day, self.shift)?;
        let store = calendar.store();
        let events = store.by_date(date);

        if self.output_format == OutputFormat::Json {
            println!("{}", day_json(calendar, date, &events));
            return Ok(());
        }

        println!("{}", day_header(calendar, date));
        if self.slots {
            for slot in hour_slots() {
                let titles: Vec<&str> = store
                    .by_time_slot(date, slot)
                    .into_iter()
                    .map(|e| e.title.as_str())
                    .collect();
                println!("{}  {}", format_time(slot).dimmed(), titles.join(", "));
            }
        } else {
            let formatter = EventFormatter::new()
                .with_verbose(self.verbose)
                .with_conflicts(store.conflicts_on(date));
            println!("{}", formatter.format(&events));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdWeek {
    pub date: Option<String>,
    pub shift: Shift,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the Sunday-to-Saturday week containing a date")
            .arg(CommonArgs::date())
            .args(Shift::args())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: CommonArgs::get_date(matches),
            shift: Shift::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing week view...");
        let date = resolve_date(calendar, self.date.as_deref(), View::Week, self.shift)?;
        let store = calendar.store();
        let days = week_grid(date);

        if self.output_format == OutputFormat::Json {
            let days: Vec<_> = days
                .iter()
                .map(|d| day_json(calendar, *d, &store.by_date(*d)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&days)?);
            return Ok(());
        }

        for (i, day) in days.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", day_header(calendar, *day));
            let events = store.by_date(*day);
            if !events.is_empty() {
                let formatter = EventFormatter::new()
                    .with_verbose(self.verbose)
                    .with_conflicts(store.conflicts_on(*day));
                println!("{}", formatter.format(&events));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdMonth {
    pub date: Option<String>,
    pub shift: Shift,

    pub output_format: OutputFormat,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the six-week grid of a month")
            .arg(CommonArgs::date())
            .args(Shift::args())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: CommonArgs::get_date(matches),
            shift: Shift::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month view...");
        let date = resolve_date(calendar, self.date.as_deref(), View::Month, self.shift)?;
        match self.output_format {
            OutputFormat::Json => {
                let cells: Vec<_> = month_grid(date)
                    .iter()
                    .map(|d| {
                        let mut cell = day_json(calendar, *d, &calendar.store().by_date(*d));
                        cell["inMonth"] = json!(is_same_month(*d, date));
                        cell
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&cells)?);
            }
            OutputFormat::Table => print!("{}", render_month(calendar, date)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdYear {
    pub year: Option<i16>,

    pub output_format: OutputFormat,
}

impl CmdYear {
    pub const NAME: &str = "year";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show calendar facts and holidays of a year")
            .arg(
                arg!(year: [YEAR] "Year to show, the current year when omitted")
                    .value_parser(value_parser!(i16)),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: matches.get_one("year").copied(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing year view...");
        let year = self.year.unwrap_or_else(|| calendar.today().year());
        let summary = calendar
            .year_summary(year)
            .ok_or_else(|| format!("Year out of range: {year}"))?;

        if self.output_format == OutputFormat::Json {
            let value = json!({
                "year": summary.year,
                "isLeapYear": summary.is_leap_year,
                "weeks": summary.weeks,
                "sundays": summary.sundays.len(),
                "firstWeekday": weekday_name(summary.first_weekday),
                "lastWeekday": weekday_name(summary.last_weekday),
                "holidays": summary.holidays,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        println!("{}", year.to_string().bold());
        println!(
            "{} days, {} weeks, {} Sundays, {} to {}",
            if summary.is_leap_year { 366 } else { 365 },
            summary.weeks,
            summary.sundays.len(),
            weekday_name(summary.first_weekday),
            weekday_name(summary.last_weekday),
        );

        let current_year = calendar.today().year() == year;
        for holiday in &summary.holidays {
            let kind = holiday.kind();
            let line = format!(
                "{} {}  {}  {}",
                kind.classes().icon,
                holiday.date.strftime("%Y-%m-%d"),
                holiday.name,
                holiday.label
            );
            if current_year && holiday.date < calendar.today() {
                println!("{}", line.dimmed());
            } else {
                println!("{}", line.color(holiday_color(kind.color())));
            }
        }
        Ok(())
    }
}

/// One period back or forward from the shown date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Prev,
    #[default]
    Stay,
    Next,
}

impl Shift {
    fn args() -> [Arg; 2] {
        [
            arg!(--prev "Show the period before the date"),
            arg!(--next "Show the period after the date").conflicts_with("prev"),
        ]
    }

    fn from(matches: &ArgMatches) -> Self {
        if matches.get_flag("prev") {
            Shift::Prev
        } else if matches.get_flag("next") {
            Shift::Next
        } else {
            Shift::Stay
        }
    }
}

fn resolve_date(
    calendar: &Calendar,
    date: Option<&str>,
    view: View,
    shift: Shift,
) -> Result<Date, Box<dyn Error>> {
    let date = match date {
        Some(date) => parse_date_arg(calendar.today(), date)?,
        None => calendar.today(),
    };
    Ok(match shift {
        Shift::Prev => view.prev(date),
        Shift::Stay => date,
        Shift::Next => view.next(date),
    })
}

fn day_header(calendar: &Calendar, date: Date) -> String {
    let mut header = format!("{} {}", date.strftime("%Y-%m-%d"), weekday_name(date.weekday()))
        .bold()
        .to_string();
    if is_today(date, calendar.now()) {
        header = format!("{header} {}", "(today)".cyan());
    }

    let class = calendar.holidays().classify(date);
    if let Some(holiday) = class.holiday {
        let tag = format!("{} {}", holiday.kind().classes().icon, holiday.name);
        header = format!("{header}  {}", tag.color(holiday_color(holiday.kind().color())));
    } else if class.is_sunday {
        header = format!("{header}  {}", WEEKLY_HOLIDAY.red());
    }

    if calendar.store().has_conflicts_on(date) {
        header = format!("{header}  {}", "conflicts".red());
    }
    header
}

fn day_json(calendar: &Calendar, date: Date, events: &[&Event]) -> serde_json::Value {
    let holidays = calendar.holidays();
    json!({
        "date": date.strftime("%Y-%m-%d").to_string(),
        "isSunday": HolidayRegistry::is_sunday(date),
        "holiday": holidays.info(date),
        "hasConflicts": calendar.store().has_conflicts_on(date),
        "events": events,
    })
}

/// Text grid of the month with holidays in red and busy days marked.
fn render_month(calendar: &Calendar, date: Date) -> String {
    let today = calendar.today();
    let holidays = calendar.holidays();
    let mut out = String::new();

    let _ = writeln!(out, "{}", date.strftime("%B %Y").to_string().bold());
    let _ = writeln!(out, "{}", " Su  Mo  Tu  We  Th  Fr  Sa".bold());

    for week in month_grid(date).chunks(7) {
        for (i, day) in week.iter().enumerate() {
            let store = calendar.store();
            let marker = if store.has_conflicts_on(*day) {
                "!"
            } else if !store.by_date(*day).is_empty() {
                "*"
            } else {
                " "
            };
            let cell = format!("{:>3}", day.day());
            let cell = if !is_same_month(*day, date) {
                cell.dimmed().to_string()
            } else if holidays.classify(*day).is_off() {
                cell.red().to_string()
            } else {
                cell
            };
            let cell = if *day == today {
                cell.reversed().to_string()
            } else {
                cell
            };

            let _ = write!(out, "{cell}{marker}");
            if i == 6 {
                let _ = writeln!(out);
            }
        }
    }

    for holiday in holidays.holidays_between(start_of_month(date), end_of_month(date)) {
        let _ = writeln!(
            out,
            "{:>3} {}",
            holiday.date.day(),
            holiday.name.color(holiday_color(holiday.kind().color()))
        );
    }
    out
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}
