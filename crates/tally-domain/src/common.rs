//! Shared traits and calendar helpers for ledger entities.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Exposes a stable numeric identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> u64;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
/// Identifies a single calendar month used as the reporting window.
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month that contains the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human-readable label such as `November 2025`.
    pub fn long_label(&self) -> String {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key holds a valid month");
        first.format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Error produced when parsing a `YYYY-MM` month key fails.
pub struct ParseMonthKeyError;

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("month must use the YYYY-MM format")
    }
}

impl std::error::Error for ParseMonthKeyError {}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value.trim().split_once('-').ok_or(ParseMonthKeyError)?;
        let year: i32 = year.parse().map_err(|_| ParseMonthKeyError)?;
        let month: u32 = month.parse().map_err(|_| ParseMonthKeyError)?;
        MonthKey::new(year, month).ok_or(ParseMonthKeyError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_key_contains_only_its_own_month() {
        let key = MonthKey::new(2025, 11).unwrap();
        assert!(key.contains(sample_date(2025, 11, 1)));
        assert!(key.contains(sample_date(2025, 11, 30)));
        assert!(!key.contains(sample_date(2025, 12, 1)));
        assert!(!key.contains(sample_date(2024, 11, 15)));
    }

    #[test]
    fn month_key_parses_and_displays_round_trip() {
        let key: MonthKey = "2025-03".parse().expect("valid month");
        assert_eq!(key.to_string(), "2025-03");
        assert!("2025-13".parse::<MonthKey>().is_err());
        assert!("march".parse::<MonthKey>().is_err());
    }
}
