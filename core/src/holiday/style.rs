// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

/// Category of a named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HolidayType {
    /// National holiday.
    National,

    /// Public holiday.
    Public,

    /// State government holiday.
    Government,

    /// Regional holiday.
    Regional,

    /// Restricted holiday.
    Restricted,

    /// Optional holiday.
    Optional,

    /// Any category label not listed above.
    Other(String),
}

const LABEL_NATIONAL: &str = "National Holiday";
const LABEL_PUBLIC: &str = "Public Holiday";
const LABEL_GOVERNMENT: &str = "Government Holiday";
const LABEL_REGIONAL: &str = "Regional Holiday";
const LABEL_RESTRICTED: &str = "Restricted Holiday";
const LABEL_OPTIONAL: &str = "Optional Holiday";

impl HolidayType {
    /// Parses a category label such as `"National Holiday"`.
    pub fn from_label(label: &str) -> Self {
        match label {
            LABEL_NATIONAL => HolidayType::National,
            LABEL_PUBLIC => HolidayType::Public,
            LABEL_GOVERNMENT => HolidayType::Government,
            LABEL_REGIONAL => HolidayType::Regional,
            LABEL_RESTRICTED => HolidayType::Restricted,
            LABEL_OPTIONAL => HolidayType::Optional,
            other => HolidayType::Other(other.to_string()),
        }
    }

    /// Display color tag of the category.
    pub fn color(&self) -> &'static str {
        match self {
            HolidayType::National => "indigo",
            HolidayType::Public => "emerald",
            HolidayType::Regional => "fuchsia",
            HolidayType::Government => "cyan",
            HolidayType::Restricted => "amber",
            HolidayType::Optional => "slate",
            HolidayType::Other(_) => "emerald",
        }
    }

    /// Presentation classes of the category.
    pub fn classes(&self) -> HolidayClasses {
        match self {
            HolidayType::National => HolidayClasses {
                bg: "bg-indigo-100 dark:bg-indigo-900/40",
                text: "text-indigo-800 dark:text-indigo-200",
                border: "border-indigo-500",
                gradient: "from-indigo-500 to-blue-600",
                icon: "🌟",
            },
            HolidayType::Public => HolidayClasses {
                bg: "bg-emerald-100 dark:bg-emerald-900/40",
                text: "text-emerald-800 dark:text-emerald-200",
                border: "border-emerald-500",
                gradient: "from-emerald-500 to-green-600",
                icon: "🏛️",
            },
            HolidayType::Regional => HolidayClasses {
                bg: "bg-fuchsia-100 dark:bg-fuchsia-900/40",
                text: "text-fuchsia-800 dark:text-fuchsia-200",
                border: "border-fuchsia-500",
                gradient: "from-fuchsia-500 to-purple-600",
                icon: "🎭",
            },
            HolidayType::Government => HolidayClasses {
                bg: "bg-cyan-100 dark:bg-cyan-900/40",
                text: "text-cyan-800 dark:text-cyan-200",
                border: "border-cyan-500",
                gradient: "from-cyan-500 to-blue-500",
                icon: "🏢",
            },
            HolidayType::Restricted => HolidayClasses {
                bg: "bg-amber-100 dark:bg-amber-900/40",
                text: "text-amber-800 dark:text-amber-200",
                border: "border-amber-500",
                gradient: "from-amber-500 to-yellow-500",
                icon: "📅",
            },
            HolidayType::Optional => HolidayClasses {
                bg: "bg-slate-100 dark:bg-slate-700",
                text: "text-slate-800 dark:text-slate-200",
                border: "border-slate-500",
                gradient: "from-slate-500 to-gray-600",
                icon: "🔄",
            },
            HolidayType::Other(_) => HolidayClasses {
                bg: "bg-emerald-100 dark:bg-emerald-900/40",
                text: "text-emerald-800 dark:text-emerald-200",
                border: "border-emerald-500",
                gradient: "from-emerald-500 to-green-600",
                icon: "📆",
            },
        }
    }
}

impl AsRef<str> for HolidayType {
    fn as_ref(&self) -> &str {
        match self {
            HolidayType::National => LABEL_NATIONAL,
            HolidayType::Public => LABEL_PUBLIC,
            HolidayType::Government => LABEL_GOVERNMENT,
            HolidayType::Regional => LABEL_REGIONAL,
            HolidayType::Restricted => LABEL_RESTRICTED,
            HolidayType::Optional => LABEL_OPTIONAL,
            HolidayType::Other(label) => label,
        }
    }
}

impl Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for HolidayType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// Display classes for one holiday category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidayClasses {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub gradient: &'static str,
    pub icon: &'static str,
}

/// Display color tag for a category label, `emerald` when unrecognized.
pub fn type_color(label: &str) -> &'static str {
    HolidayType::from_label(label).color()
}

/// Display classes for a category label, a neutral default when unrecognized.
pub fn type_classes(label: &str) -> HolidayClasses {
    HolidayType::from_label(label).classes()
}
