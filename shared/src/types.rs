//! Common types used across the platform

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar day without a year, used to line up the same date across
/// every year of an archive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// True when `date` falls on this month and day in any year.
    ///
    /// Equivalent to comparing the `MM-DD` tail of the canonical
    /// `YYYY-MM-DD` form, so impossible days (Feb 30, month 13) never match.
    pub fn matches(&self, date: &NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Date range for archive coverage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
