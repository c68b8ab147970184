// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::time::Duration;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use keracal_core::{Calendar, Notification, Notifier, ReminderInterval};
use tokio::time::interval;

#[derive(Debug, Clone)]
pub struct CmdWatch {
    /// Overrides the configured scan period.
    pub interval: Option<ReminderInterval>,
}

impl CmdWatch {
    pub const NAME: &str = "watch";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Watch for due reminders until interrupted")
            .arg(
                arg!(--interval <SECONDS> "Seconds between reminder scans")
                    .value_parser(parse_interval),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            interval: matches.get_one("interval").copied(),
        }
    }

    pub async fn run(self, calendar: &mut Calendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "watching reminders...");
        let period = self
            .interval
            .unwrap_or(calendar.config().reminder_interval)
            .get();

        let mut notifier = TerminalNotifier;
        let mut ticker = interval(period);
        calendar.scheduler_mut().start();
        println!(
            "Watching reminders every {}s, press Ctrl-C to stop",
            period.as_secs()
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let fired = calendar.tick_reminders(&mut notifier);
                    if !fired.is_empty() {
                        tracing::debug!(count = fired.len(), "reminders fired");
                    }
                }
                res = tokio::signal::ctrl_c() => {
                    res?;
                    break;
                }
            }
        }

        calendar.scheduler_mut().stop();
        println!("Stopped watching reminders");
        Ok(())
    }
}

fn parse_interval(s: &str) -> Result<ReminderInterval, String> {
    let secs: u64 = s
        .parse()
        .map_err(|_| format!("invalid number of seconds: {s}"))?;
    ReminderInterval::new(Duration::from_secs(secs))
        .ok_or_else(|| "interval must be positive".to_string())
}

/// Prints reminders to the terminal with a bell.
#[derive(Debug, Default, Clone, Copy)]
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notification: &Notification) -> bool {
        println!(
            "\x07🔔 {} {}",
            notification.title.bold(),
            notification.body.dimmed()
        );
        true
    }
}
