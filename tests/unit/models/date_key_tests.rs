// Unit tests for date key formatting
// Pins the one-based month convention with fixed calendar inputs

use calendar_now::models::date_key::{DateKey, DateKeyError};
use calendar_now::utils::date::format_date_key;
use chrono::NaiveDate;
use test_case::test_case;

#[test_case(2024, 3, 5, "05-03-2024" ; "early march")]
#[test_case(2024, 1, 1, "01-01-2024" ; "new year uses month one")]
#[test_case(2024, 12, 31, "31-12-2024" ; "new years eve uses month twelve")]
#[test_case(2024, 2, 29, "29-02-2024" ; "leap day")]
fn test_key_from_calendar_fields(year: i32, month: u32, day: u32, expected: &str) {
    let key = DateKey::from_ymd(year, month, day).unwrap();
    assert_eq!(key.as_str(), expected);

    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    assert_eq!(format_date_key(date), expected);
    assert_eq!(DateKey::from_date(date), key);
}

#[test_case(2024, 0, 10 ; "zero based month is rejected")]
#[test_case(2024, 13, 1 ; "month thirteen is rejected")]
#[test_case(2023, 2, 29 ; "missing leap day is rejected")]
#[test_case(2024, 4, 31 ; "april has thirty days")]
fn test_invalid_calendar_fields(year: i32, month: u32, day: u32) {
    assert_eq!(
        DateKey::from_ymd(year, month, day),
        Err(DateKeyError::InvalidDate { year, month, day })
    );
}
