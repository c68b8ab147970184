// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// Sort order, either ascending or descending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,

    /// Descending order.
    Desc,
}

/// Key used when listing every event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SortKey {
    /// Date and start time combined.
    #[default]
    Date,

    /// Title, compared case-insensitively.
    Title,

    /// Display color tag.
    Color,
}

/// Priority of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,

    /// Medium priority.
    #[default]
    Medium,

    /// High priority.
    High,
}

const PRIORITY_LOW: &str = "low";
const PRIORITY_MEDIUM: &str = "medium";
const PRIORITY_HIGH: &str = "high";

impl AsRef<str> for Priority {
    fn as_ref(&self) -> &str {
        match self {
            Priority::Low => PRIORITY_LOW,
            Priority::Medium => PRIORITY_MEDIUM,
            Priority::High => PRIORITY_HIGH,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            PRIORITY_LOW => Ok(Priority::Low),
            PRIORITY_MEDIUM => Ok(Priority::Medium),
            PRIORITY_HIGH => Ok(Priority::High),
            _ => Err(()),
        }
    }
}

/// Display color tag of an event, from a fixed palette.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Red,
    Purple,
    Yellow,
    Indigo,
    Pink,
    Gray,
}

impl Color {
    /// Every color of the palette, in picker order.
    pub const ALL: [Color; 8] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Purple,
        Color::Yellow,
        Color::Indigo,
        Color::Pink,
        Color::Gray,
    ];
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::Indigo => "indigo",
            Color::Pink => "pink",
            Color::Gray => "gray",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_ref() == value)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_new_event_form() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Color::default(), Color::Blue);
    }

    #[test]
    fn parses_priority_and_color_names() {
        assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!("pink".parse::<Color>(), Ok(Color::Pink));
        assert!("teal".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), r#""low""#);
        assert_eq!(serde_json::to_string(&Color::Indigo).unwrap(), r#""indigo""#);
        let c: Color = serde_json::from_str(r#""gray""#).unwrap();
        assert_eq!(c, Color::Gray);
    }
}
