//! Calendar lookups on bare year, month, and day numbers.
//!
//! Nothing here touches an instant, a time zone, or a locale: these are
//! pure field computations for callers that already hold civil numbers
//! and don’t want to pay for a full date value to answer one question.

use crate::civil::{is_leap_year, Month, Weekday};


/// Fixed English weekday abbreviations, Sunday first.
const WEEKDAY_ABBREVIATIONS: [&str; 7] = [
    "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat",
];

/// Fixed English month abbreviations.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];


/// The day of the week a proleptic Gregorian date falls on, by direct
/// congruence, with no epoch conversion.
///
/// The computation counts months from March, so January and February
/// belong to the tail of the previous year.
///
/// ### Examples
///
/// ```
/// use zonedate::fast::day_of_week;
/// use zonedate::civil::Weekday;
///
/// assert_eq!(day_of_week(2019, 6, 29), Weekday::Saturday);
/// assert_eq!(day_of_week(1970, 1, 1), Weekday::Thursday);
/// ```
pub fn day_of_week(year: i64, month: i64, day: i64) -> Weekday {
    let (year, month) = match month {
        1 | 2 => (year - 1, month + 12),
        _ => (year, month),
    };

    let shifted_month = (month + 10) % 12;
    let shifted_month = if shifted_month == 0 { 12 } else { shifted_month };

    let century = year.div_euclid(100);
    let year_of_century = year.rem_euclid(100);

    let value = day
        + (13 * shifted_month - 1) / 5
        + year_of_century
        + year_of_century / 4
        + century / 4
        - 2 * century;

    // rem_euclid(7) is always in range for from_zero.
    Weekday::from_zero(value.rem_euclid(7)).unwrap_or(Weekday::Sunday)
}

/// The number of days in a month of a proleptic Gregorian year, or the
/// sentinel 0 when the month is out of range or the year negative.
///
/// ### Examples
///
/// ```
/// use zonedate::fast::days_in_month;
///
/// assert_eq!(days_in_month(2020, 2), 29);
/// assert_eq!(days_in_month(2019, 13), 0);
/// ```
pub fn days_in_month(year: i64, month: i64) -> i64 {
    if year < 0 {
        return 0;
    }

    match Month::from_one(month) {
        Some(month) => month.days_in_month(is_leap_year(year)) as i64,
        None => 0,
    }
}

/// A short, fixed-format English description of a date, such as
/// “Sat 29 Jun”. `None` when the month is out of range.
pub fn short_description(year: i64, month: i64, day: i64) -> Option<String> {
    if !(1 ..= 12).contains(&month) {
        return None;
    }

    let weekday = day_of_week(year, month, day);
    Some(format!("{} {} {}",
                 WEEKDAY_ABBREVIATIONS[weekday.days_from_sunday() as usize],
                 day,
                 MONTH_ABBREVIATIONS[month as usize - 1]))
}
