use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Full English month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
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

/// Full month name for a 1-based month number. Panics outside 1..=12;
/// callers validate month input before it reaches the engine.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

/// Parses a month path segment: a full month name (any case) or a 1-12
/// number. Returns the 1-based month number.
pub fn parse_month(input: &str) -> Option<u32> {
    if let Ok(n) = input.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(input))
        .map(|idx| idx as u32 + 1)
}

/// Number of days in a calendar month, leap years included. Returns 0 for
/// a month/year combination outside the calendar.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// First and last day of a calendar month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first + Duration::days(days_in_month(year, month) as i64 - 1);
    Some((first, last))
}

/// January 1 and December 31 of a year.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((first, last))
}

/// Full day-of-week name, as the daily records report it.
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
