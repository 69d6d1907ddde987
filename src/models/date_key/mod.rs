// Date key module
// Canonical string key used to file events under a calendar day

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::utils::date::format_date_key;

/// Errors raised when building a key from raw calendar fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    #[error("Invalid calendar date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Canonical `dd-mm-yyyy` form of a calendar date.
///
/// Months are always one-based. Two keys are equal iff their strings are
/// byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Build the key for a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format_date_key(date))
    }

    /// Build the key from calendar widget fields.
    ///
    /// `month` is one-based (January = 1); widgets reporting zero-based
    /// months must add one before calling this.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateKeyError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_date)
            .ok_or(DateKeyError::InvalidDate { year, month, day })
    }

    /// Wrap an arbitrary string without validating its format
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_matches_formatter() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(DateKey::from_date(date).as_str(), "05-03-2024");
        assert_eq!(DateKey::from(date), DateKey::from_date(date));
    }

    #[test]
    fn test_from_ymd_valid() {
        let key = DateKey::from_ymd(2024, 3, 6).unwrap();
        assert_eq!(key.to_string(), "06-03-2024");
    }

    #[test]
    fn test_from_ymd_rejects_zero_month() {
        let result = DateKey::from_ymd(2024, 0, 1);
        assert_eq!(
            result.unwrap_err(),
            DateKeyError::InvalidDate {
                year: 2024,
                month: 0,
                day: 1
            }
        );
    }

    #[test]
    fn test_from_ymd_rejects_missing_leap_day() {
        assert!(DateKey::from_ymd(2023, 2, 29).is_err());
        assert!(DateKey::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_raw_key_equality_is_byte_equality() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(DateKey::from_raw("05-03-2024"), DateKey::from_date(date));
        assert_ne!(DateKey::from_raw("5-3-2024"), DateKey::from_date(date));
    }
}
