//! Year-less calendar dates.
//!
//! Transaction files only carry a month and a day. No year is inferred:
//! `07/15` of two different years are the same `MonthDay`, and any grouping
//! done on top of it (transactions per month) merges years together.

use crate::error::ParseError;
use chrono::{Month, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Leap year used only to validate days, so that `02/29` is accepted.
const VALIDATION_YEAR: i32 = 2000;

/// A calendar month and day without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Builds a date, returning `None` if the day does not exist in that month.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day)?;
        Some(MonthDay { month, day })
    }

    /// Month number, 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1 to 31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// ISO 8601 year-less form, e.g. `--07-15`.
    pub fn to_iso(&self) -> String {
        format!("--{:02}-{:02}", self.month, self.day)
    }
}

/// English name of a month number, e.g. `7` -> `"July"`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let number = u8::try_from(month).ok()?;
    Month::try_from(number).ok().map(|m| m.name())
}

impl FromStr for MonthDay {
    type Err = ParseError;

    /// Parses `MM/DD`; single-digit month or day (`7/2`) is also accepted.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDate(s.to_string());

        let (month, day) = s.trim().split_once('/').ok_or_else(invalid)?;
        let number = |part: &str| -> Option<u32> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        };

        let month = number(month).ok_or_else(invalid)?;
        let day = number(day).ok_or_else(invalid)?;
        MonthDay::new(month, day).ok_or_else(invalid)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso())
    }
}
