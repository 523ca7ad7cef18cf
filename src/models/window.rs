//! Calendar windows for aggregation
//!
//! A window restricts transaction aggregation to a year or a year-month.
//! Savings envelopes have no date dimension, so windows never apply to them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar restriction used to filter transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    /// A whole calendar year
    Year(i32),
    /// A single calendar month
    Month { year: i32, month: u32 },
}

impl Window {
    /// Create a year window
    pub fn year(year: i32) -> Self {
        Self::Year(year)
    }

    /// Create a month window
    pub fn month(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self::Month { year, month }
    }

    /// The month window containing the given date
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Check whether a date falls inside this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::Year(year) => date.year() == *year,
            Self::Month { year, month } => date.year() == *year && date.month() == *month,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{}", year),
            Self::Month { year, month } => write!(f, "{}-{:02}", year, month),
        }
    }
}

/// Error type for window parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowParseError(String);

impl fmt::Display for WindowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid window '{}' (expected YYYY or YYYY-MM)", self.0)
    }
}

impl std::error::Error for WindowParseError {}

impl FromStr for Window {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((year_str, month_str)) = s.split_once('-') {
            let year: i32 = year_str
                .parse()
                .map_err(|_| WindowParseError(s.to_string()))?;
            let month: u32 = month_str
                .parse()
                .map_err(|_| WindowParseError(s.to_string()))?;
            if !(1..=12).contains(&month) {
                return Err(WindowParseError(s.to_string()));
            }
            return Ok(Self::Month { year, month });
        }

        let year: i32 = s.parse().map_err(|_| WindowParseError(s.to_string()))?;
        Ok(Self::Year(year))
    }
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 30,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(n) => (n - first).num_days() as u32,
        None => 30,
    }
}
