// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of the keracal calendar.

mod arg;
mod cli;
mod cmd_event;
mod cmd_export;
mod cmd_holiday;
mod cmd_search;
mod cmd_view;
mod cmd_watch;
mod config;
mod event_formatter;
mod logging;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::util::OutputFormat;
