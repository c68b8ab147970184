// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use keracal_core::Calendar;

#[derive(Debug, Clone)]
pub struct CmdExport {
    /// Destination file, `None` for standard output.
    pub path: Option<PathBuf>,
}

impl CmdExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export every event as an iCalendar file")
            .arg(
                arg!(path: <PATH> "Destination .ics file, or - for standard output")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let path = matches
            .get_one::<PathBuf>("path")
            .filter(|p| p.as_os_str() != "-")
            .cloned();
        Self { path }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "exporting events...");
        match &self.path {
            Some(path) => {
                calendar.export_to_file(path)?;
                println!(
                    "{} {} events to {}",
                    "Exported".green(),
                    calendar.store().len(),
                    path.display()
                );
            }
            None => print!("{}", calendar.export_ics()),
        }
        Ok(())
    }
}
