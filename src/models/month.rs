//! Calendar month key
//!
//! Every per-month mapping in the tracker is keyed by `Month`, an integer in
//! 1..=12. Month names typed by a user are resolved here, once, at the
//! boundary.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TrackerError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, 1 (January) through 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    pub const JANUARY: Month = Month(1);
    pub const FEBRUARY: Month = Month(2);
    pub const MARCH: Month = Month(3);
    pub const APRIL: Month = Month(4);
    pub const MAY: Month = Month(5);
    pub const JUNE: Month = Month(6);
    pub const JULY: Month = Month(7);
    pub const AUGUST: Month = Month(8);
    pub const SEPTEMBER: Month = Month(9);
    pub const OCTOBER: Month = Month(10);
    pub const NOVEMBER: Month = Month(11);
    pub const DECEMBER: Month = Month(12);

    /// Create a month from its number
    pub fn new(number: u32) -> Result<Self, TrackerError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TrackerError::InvalidMonth(number.to_string()))
        }
    }

    /// The month containing a date
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self(date.month())
    }

    /// Resolve user-entered month text
    ///
    /// Accepts full names ("January"), three-letter abbreviations ("jan")
    /// and numbers ("1"), case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, TrackerError> {
        let trimmed = name.trim();
        let lower = trimmed.to_lowercase();

        if let Ok(number) = lower.parse::<u32>() {
            return Self::new(number).map_err(|_| TrackerError::InvalidMonth(name.to_string()));
        }

        MONTH_NAMES
            .iter()
            .position(|full| {
                let full = full.to_lowercase();
                lower == full || (lower.len() == 3 && full.starts_with(&lower))
            })
            .map(|index| Self(index as u32 + 1))
            .ok_or_else(|| TrackerError::InvalidMonth(name.to_string()))
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    /// The month number (1-12)
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// Full English name of the month
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// Three-letter abbreviation ("Jan")
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Month {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<u32> for Month {
    type Error = TrackerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Month::new(1).unwrap(), Month::JANUARY);
        assert_eq!(Month::new(12).unwrap(), Month::DECEMBER);
        assert!(Month::new(0).unwrap_err().is_invalid_month());
        assert!(Month::new(13).unwrap_err().is_invalid_month());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Month::from_name("January").unwrap(), Month::JANUARY);
        assert_eq!(Month::from_name("january").unwrap(), Month::JANUARY);
        assert_eq!(Month::from_name("SEPTEMBER").unwrap(), Month::SEPTEMBER);
        assert_eq!(Month::from_name("sep").unwrap(), Month::SEPTEMBER);
        assert_eq!(Month::from_name(" May ").unwrap(), Month::MAY);
        assert_eq!(Month::from_name("4").unwrap(), Month::APRIL);
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        let err = Month::from_name("NotAMonth").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidMonth(ref s) if s == "NotAMonth"));
        assert!(Month::from_name("").is_err());
        assert!(Month::from_name("13").is_err());
        assert!(Month::from_name("ju").is_err());
        assert!(Month::from_name("janu").is_err());
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(Month::of(&date), Month::APRIL);
    }

    #[test]
    fn test_names() {
        assert_eq!(Month::MARCH.to_string(), "March");
        assert_eq!(Month::MARCH.short_name(), "Mar");
        assert_eq!(Month::all().count(), 12);
    }

    #[test]
    fn test_map_key_serialization() {
        let mut map = BTreeMap::new();
        map.insert(Month::APRIL, 1u8);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"4":1}"#);

        let back: BTreeMap<Month, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);

        let out_of_range: Result<BTreeMap<Month, u8>, _> = serde_json::from_str(r#"{"13":1}"#);
        assert!(out_of_range.is_err());
    }
}
