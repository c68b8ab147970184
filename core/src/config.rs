// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de;

use crate::event::DEFAULT_REMINDER_MINUTES;

/// The name of the application.
pub const APP_NAME: &str = "keracal";

/// Configuration for the calendar core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory holding the persisted key-value files.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// JSON array of events loaded when nothing has been stored yet.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Reminder lead time suggested for new events.
    #[serde(default = "default_reminder_minutes")]
    pub default_reminder_minutes: u32,

    /// How often the reminder scan runs.
    #[serde(default)]
    pub reminder_interval: ReminderInterval,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            seed_path: None,
            default_reminder_minutes: DEFAULT_REMINDER_MINUTES,
            reminder_interval: ReminderInterval::default(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        if let Some(a) = &self.seed_path {
            self.seed_path =
                Some(expand_path(a).map_err(|e| format!("Failed to expand seed path: {e}"))?);
        }

        Ok(())
    }
}

fn default_reminder_minutes() -> u32 {
    DEFAULT_REMINDER_MINUTES
}

/// Period of the reminder scan, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderInterval(Duration);

impl ReminderInterval {
    /// Default period between scans.
    pub const DEFAULT: Self = Self(Duration::from_secs(60));

    pub fn new(period: Duration) -> Option<Self> {
        (!period.is_zero()).then_some(Self(period))
    }

    pub fn get(&self) -> Duration {
        self.0
    }
}

impl Default for ReminderInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> serde::Deserialize<'de> for ReminderInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IntervalVisitor;

        impl<'de> de::Visitor<'de> for IntervalVisitor {
            type Value = ReminderInterval;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a positive duration like "HH:MM", "1h", "5m", or "30s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let period = parse_duration(value).map_err(|e| de::Error::custom(e.to_string()))?;
                ReminderInterval::new(period)
                    .ok_or_else(|| de::Error::custom("reminder interval must be positive"))
            }
        }

        deserializer.deserialize_str(IntervalVisitor)
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
fn parse_duration(s: &str) -> Result<Duration, Box<dyn Error>> {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    let secs = if let Some((h, m)) = s.split_once(':') {
        let hours: u64 = h.trim().parse()?;
        let minutes: u64 = m.trim().parse()?;
        scale(hours, HOUR, s)?
            .checked_add(scale(minutes, MINUTE, s)?)
            .ok_or_else(|| too_long(s))?
    } else if let Some(rest) = s.strip_suffix('d') {
        scale(rest.trim().parse()?, DAY, s)?
    } else if let Some(rest) = s.strip_suffix('h') {
        scale(rest.trim().parse()?, HOUR, s)?
    } else if let Some(rest) = s.strip_suffix('m') {
        scale(rest.trim().parse()?, MINUTE, s)?
    } else if let Some(rest) = s.strip_suffix('s') {
        rest.trim().parse::<u64>()?
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };
    Ok(Duration::from_secs(secs))
}

fn scale(value: u64, unit: u64, s: &str) -> Result<u64, Box<dyn Error>> {
    value.checked_mul(unit).ok_or_else(|| too_long(s))
}

fn too_long(s: &str) -> Box<dyn Error> {
    format!("Duration too long: {s}").into()
}
