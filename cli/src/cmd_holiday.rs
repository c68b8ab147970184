// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::{Color, Colorize};
use jiff::ToSpan;
use keracal_core::{Calendar, Holiday};
use serde_json::json;

use crate::arg::CommonArgs;
use crate::table::{Column, Table};
use crate::util::{OutputFormat, holiday_color, parse_date_arg};

const DEFAULT_DAYS: u32 = 30;

#[derive(Debug, Clone)]
pub struct CmdHolidays {
    pub from: Option<String>,
    pub days: u32,

    pub output_format: OutputFormat,
}

impl CmdHolidays {
    pub const NAME: &str = "holidays";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("h")
            .about("List upcoming holidays and count the days off")
            .arg(arg!(--from <DATE> "First day of the window, today when omitted"))
            .arg(
                arg!(--days <DAYS> "Number of days after the first day to include")
                    .value_parser(value_parser!(u32))
                    .default_value("30"),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            from: matches.get_one("from").cloned(),
            days: matches.get_one("days").copied().unwrap_or(DEFAULT_DAYS),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing holidays...");
        let from = match &self.from {
            Some(from) => parse_date_arg(calendar.today(), from)?,
            None => calendar.today(),
        };
        let until = from.saturating_add(i64::from(self.days).days());

        let registry = calendar.holidays();
        let count = registry.count_upcoming(from, self.days);
        let holidays = registry.holidays_between(from, until);

        match self.output_format {
            OutputFormat::Json => {
                let value = json!({
                    "from": from.strftime("%Y-%m-%d").to_string(),
                    "until": until.strftime("%Y-%m-%d").to_string(),
                    "count": count,
                    "holidays": holidays,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Table => {
                println!(
                    "{} days off between {} and {}: {} holidays, {} Sundays",
                    count.total.to_string().bold(),
                    from.strftime("%Y-%m-%d"),
                    until.strftime("%Y-%m-%d"),
                    count.govt_or_named,
                    count.sundays,
                );
                if !holidays.is_empty() {
                    let columns = [
                        HolidayColumn::Icon,
                        HolidayColumn::Date,
                        HolidayColumn::Name,
                        HolidayColumn::Type,
                    ];
                    let table = Table::new(&columns, &holidays).to_string();
                    println!("{}", table.trim_end());
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum HolidayColumn {
    Icon,
    Date,
    Name,
    Type,
}

impl Column<&'static Holiday> for HolidayColumn {
    fn name(&self) -> &'static str {
        match self {
            HolidayColumn::Icon => "",
            HolidayColumn::Date => "Date",
            HolidayColumn::Name => "Holiday",
            HolidayColumn::Type => "Type",
        }
    }

    fn format<'a>(&self, holiday: &'a &'static Holiday) -> Cow<'a, str> {
        match self {
            HolidayColumn::Icon => holiday.kind().classes().icon.into(),
            HolidayColumn::Date => holiday.date.strftime("%a %Y-%m-%d").to_string().into(),
            HolidayColumn::Name => holiday.name.into(),
            HolidayColumn::Type => holiday.label.into(),
        }
    }

    fn color(&self, holiday: &&'static Holiday) -> Option<Color> {
        match self {
            HolidayColumn::Name => Some(holiday_color(holiday.kind().color())),
            _ => None,
        }
    }
}
