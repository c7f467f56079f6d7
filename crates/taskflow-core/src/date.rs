//! Due date parsing and locale-aware display.
//!
//! Dates are plain calendar dates. No timezone is applied, so a stored
//! `2024-01-25` always displays as the 25th.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TaskflowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    De,
    #[serde(rename = "iso")]
    Iso,
}

impl DateLocale {
    pub const ALL: &[DateLocale] = &[
        DateLocale::EnUs,
        DateLocale::EnGb,
        DateLocale::De,
        DateLocale::Iso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateLocale::EnUs => "en-US",
            DateLocale::EnGb => "en-GB",
            DateLocale::De => "de-DE",
            DateLocale::Iso => "iso",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "en-US" | "en_US" | "en" => Some(DateLocale::EnUs),
            "en-GB" | "en_GB" => Some(DateLocale::EnGb),
            "de-DE" | "de_DE" | "de" => Some(DateLocale::De),
            "iso" => Some(DateLocale::Iso),
            _ => None,
        }
    }

    fn short_pattern(&self) -> &'static str {
        match self {
            DateLocale::EnUs => "%-m/%-d/%Y",
            DateLocale::EnGb => "%d/%m/%Y",
            DateLocale::De => "%-d.%-m.%Y",
            DateLocale::Iso => "%Y-%m-%d",
        }
    }

    fn long_pattern(&self) -> &'static str {
        match self {
            DateLocale::EnUs => "%b %-d, %Y",
            DateLocale::EnGb => "%-d %b %Y",
            DateLocale::De => "%d.%m.%Y",
            DateLocale::Iso => "%Y-%m-%d",
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateLocale {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s).ok_or_else(|| TaskflowError::UnknownLocale(s.to_string()))
    }
}

/// Short date shown on task cards, e.g. `1/25/2024` for `en-US`.
pub fn format_due_date(date: NaiveDate, locale: DateLocale) -> String {
    date.format(locale.short_pattern()).to_string()
}

/// Longer form used on project cards, e.g. `Feb 15, 2024` for `en-US`.
pub fn format_long_date(date: NaiveDate, locale: DateLocale) -> String {
    date.format(locale.long_pattern()).to_string()
}

/// Parses a stored `YYYY-MM-DD` date.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, TaskflowError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| TaskflowError::InvalidInput(format!("due date {s:?}: {e}")))
}
