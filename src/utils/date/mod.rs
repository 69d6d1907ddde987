// Date utility functions
// Key formatting and month arithmetic shared by the session and the calendar grid

use chrono::{Datelike, Duration, NaiveDate};

/// Format pattern for date keys: zero-padded day, one-based month, year.
pub const DATE_KEY_FORMAT: &str = "%d-%m-%Y";

/// Convert a calendar date into its canonical `dd-mm-yyyy` key string.
///
/// Every caller that needs a lookup key goes through this function so the
/// initial selection and later date changes always produce identical keys.
///
/// # Examples
/// ```
/// use calendar_now::utils::date::format_date_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(format_date_key(date), "05-03-2024");
/// ```
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// First date shown in a month grid: the week start on or before the first
/// of `viewing`'s month. `first_day_of_week` is 0 for Sunday, 1 for Monday.
pub fn month_grid_start(viewing: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let first_of_month = viewing.with_day(1).unwrap_or(viewing);
    let weekday = first_of_month.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    first_of_month - Duration::days(offset)
}
