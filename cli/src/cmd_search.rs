// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use keracal_core::{Calendar, DateFilter};

use crate::arg::{CommonArgs, SearchArgs};
use crate::event_formatter::EventFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdSearch {
    pub term: Option<String>,
    pub when: DateFilter,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Search events by title, description or location")
            .long_about(
                "\
Search events by title, description or location, case-insensitively. \
Without a term and filter, the recent searches are listed.",
            )
            .arg(arg!(term: [TERM] "Text to look for"))
            .arg(SearchArgs::when())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            term: matches.get_one("term").cloned(),
            when: SearchArgs::get_when(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching events...");
        let term = self.term.as_deref().unwrap_or_default();
        if term.trim().is_empty() && self.when == DateFilter::All {
            return Self::print_recent(calendar, self.output_format);
        }

        calendar.store_mut().record_search(term);

        let today = calendar.today();
        let store = calendar.store();
        let events = store.filter(term, self.when, today);
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

    fn print_recent(calendar: &Calendar, output_format: OutputFormat) -> Result<(), Box<dyn Error>> {
        let recent = calendar.store().recent_searches();
        match output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(recent)?),
            OutputFormat::Table if recent.is_empty() => println!("No recent searches"),
            OutputFormat::Table => {
                println!("{}", "Recent searches".bold());
                for term in recent {
                    println!("  {term}");
                }
            }
        }
        Ok(())
    }
}
