// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{
    ArgAction, ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser,
};
use colored::Colorize;
use keracal_core::{APP_NAME, Calendar};

use crate::cmd_event::{CmdEventDelete, CmdEventEdit, CmdEventList, CmdEventMove, CmdEventNew};
use crate::cmd_export::CmdExport;
use crate::cmd_holiday::CmdHolidays;
use crate::cmd_search::CmdSearch;
use crate::cmd_view::{CmdDay, CmdMonth, CmdWeek, CmdYear};
use crate::cmd_watch::CmdWatch;
use crate::config::parse_config;
use crate::logging;

/// Run the keracal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            logging::init(cli.verbosity);
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Number of `-v` flags before the subcommand
    pub verbosity: u8,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("An event calendar with recurrence, conflict warnings and Kerala holidays.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to week view
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/keracal/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/keracal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-v --verbose "Increase logging verbosity, repeat for more")
                    .action(ArgAction::Count),
            )
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventMove::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdWeek::command())
            .subcommand(CmdMonth::command())
            .subcommand(CmdYear::command())
            .subcommand(CmdSearch::command())
            .subcommand(CmdHolidays::command())
            .subcommand(CmdExport::command())
            .subcommand(CmdWatch::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)),
            Some((CmdEventMove::NAME, matches)) => Move(CmdEventMove::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdWeek::NAME, matches)) => Week(CmdWeek::from(matches)),
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdYear::NAME, matches)) => Year(CmdYear::from(matches)),
            Some((CmdSearch::NAME, matches)) => Search(CmdSearch::from(matches)),
            Some((CmdHolidays::NAME, matches)) => Holidays(CmdHolidays::from(matches)),
            Some((CmdExport::NAME, matches)) => Export(CmdExport::from(matches)),
            Some((CmdWatch::NAME, matches)) => Watch(CmdWatch::from(matches)),
            None => {
                let matches = CmdWeek::command().try_get_matches_from([CmdWeek::NAME])?;
                Week(CmdWeek::from(&matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        let verbosity = matches.get_count("verbose");
        Ok(Cli {
            config,
            verbosity,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Add a new event
    New(CmdEventNew),

    /// Edit an event
    Edit(CmdEventEdit),

    /// Move an event keeping its duration
    Move(CmdEventMove),

    /// Delete events
    Delete(CmdEventDelete),

    /// List events
    List(CmdEventList),

    /// Show a day
    Day(CmdDay),

    /// Show a week
    Week(CmdWeek),

    /// Show a month grid
    Month(CmdMonth),

    /// Show a year summary
    Year(CmdYear),

    /// Search events
    Search(CmdSearch),

    /// List upcoming holidays
    Holidays(CmdHolidays),

    /// Export events as iCalendar
    Export(CmdExport),

    /// Watch for due reminders
    Watch(CmdWatch),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut calendar = Calendar::open(config)?;

        use Commands::*;
        match self {
            New(a)      => a.run(&mut calendar).await?,
            Edit(a)     => a.run(&mut calendar).await?,
            Move(a)     => a.run(&mut calendar).await?,
            Delete(a)   => a.run(&mut calendar).await?,
            List(a)     => a.run(&mut calendar).await?,
            Day(a)      => a.run(&mut calendar).await?,
            Week(a)     => a.run(&mut calendar).await?,
            Month(a)    => a.run(&mut calendar).await?,
            Year(a)     => a.run(&mut calendar).await?,
            Search(a)   => a.run(&mut calendar).await?,
            Holidays(a) => a.run(&mut calendar).await?,
            Export(a)   => a.run(&mut calendar).await?,
            Watch(a)    => a.run(&mut calendar).await?,
        }

        calendar.store_mut().flush()?;
        Ok(())
    }
}
