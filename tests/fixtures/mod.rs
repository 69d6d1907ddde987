// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use calendar_now::models::event::Event;
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns March 5th 2024
    pub fn march_5_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    /// Returns March 6th 2024
    pub fn march_6_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn meeting() -> Event {
        Event::new("Meeting", "Standup").unwrap()
    }

    pub fn lunch() -> Event {
        Event::new("Lunch", "").unwrap()
    }

    pub fn dentist() -> Event {
        Event::new("Dentist", "Bring the insurance card").unwrap()
    }
}
