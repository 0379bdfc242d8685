//! Proleptic Gregorian calendar calculations: years, months, days, hours,
//! minutes, seconds, and the conversions between civil fields and the
//! number of days or seconds elapsed since the Unix epoch.

use std::fmt;

use crate::util::{split_cycles, RangeExt};

use self::Month::*;
use self::Weekday::*;


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;


/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// The 1st of March 2000 might seem like an odd reference point, but by
/// having it immediately after a possible leap-year day, and on a year
/// that’s a multiple of 400, the maths needed to calculate the day, week,
/// and month of an instant comes out a *lot* simpler: the Gregorian
/// calendar operates on a 400-year cycle, and the leap day sits at the very
/// end of one of these cycles, so the calculations are reduced to simple
/// division with a bit of date-shifting.
///
/// This value, and any functions that depend on it, are kept internal: as
/// far as callers are concerned, everything is relative to the Unix epoch.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// Returns whether the given year is a leap year, using the standard
/// Gregorian rule: multiples of 400 are leap years, remaining multiples of
/// 100 are not, remaining multiples of 4 are.
pub fn is_leap_year(year: i64) -> bool {
    leap_year_calculations(year).1
}

/// Performs two related calculations for leap years, returning the results
/// as a two-part tuple:
///
/// 1. The number of leap years that have elapsed prior to this year;
/// 2. Whether this year is a leap year or not.
fn leap_year_calculations(year: i64) -> (i64, bool) {
    let years = year - 2000;

    // This calculation is the reverse of CivilDate::from_days_since_epoch.
    let (num_400y_cycles, mut remainder) = split_cycles(years, 400);

    let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

    let num_100y_cycles = remainder / 100;
    remainder -= num_100y_cycles * 100;

    let leap_years_elapsed = remainder / 4
        + 97 * num_400y_cycles  // There are 97 leap years in 400 years
        + 24 * num_100y_cycles  // There are 24 leap years in 100 years
        - if currently_leap_year { 1 } else { 0 };

    (leap_years_elapsed, currently_leap_year)
}

/// The number of days in the given year: 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) { 366 } else { 365 }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i64` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    pub fn from_one(month: i64) -> Option<Self> {
        Some(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return None,
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    pub fn from_zero(month: i64) -> Option<Self> {
        Self::from_one(month + 1)
    }
}


/// A named day of the week.
///
/// Sunday is Day 0, matching the weekday numbering that the fast
/// closed-form calculation in the `fast` module produces. There is no `Ord`
/// instance because there’s no real standard as to whether Sunday should
/// come before Monday or the other way around.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

impl Weekday {

    /// Days from Sunday, with Sunday as 0.
    pub fn days_from_sunday(self) -> i64 {
        match self {
            Sunday   => 0,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Days from Monday, with Monday as 1 and Sunday as 7. This is the
    /// numbering the ISO-8601 week calendar uses.
    pub fn days_from_monday_as_one(self) -> i64 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday
    /// as Day 1, and so on.
    pub fn from_zero(weekday: i64) -> Option<Self> {
        Some(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return None,
        })
    }

    /// Whether this day falls on the default Saturday/Sunday weekend.
    pub fn is_weekend(self) -> bool {
        matches!(self, Saturday | Sunday)
    }
}


/// A **civil date** is a day-long span on the timeline: a year, month, and
/// day, along with the derived day-of-year and day-of-week.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct CivilDate {
    ymd:     Ymd,
    yearday: i16,
    weekday: Weekday,
}

impl CivilDate {

    /// Creates a new civil date from the given year, month, and day fields.
    ///
    /// The values are checked for validity before instantiation: passing a
    /// day out of range for the month (the 30th of February, say) returns
    /// `None`.
    pub fn ymd(year: i64, month: Month, day: i8) -> Option<Self> {
        Ymd { year, month, day }
            .to_unix_days()
            .map(|days| Self::from_days_since_epoch(days - EPOCH_DIFFERENCE))
    }

    /// Creates a new civil date from the given year and day-of-year values.
    ///
    /// Fails if the day-of-year is outside the range 1 to 366, or is 366 in
    /// a year that isn’t a leap year.
    pub fn yd(year: i64, yearday: i64) -> Option<Self> {
        if !yearday.is_within(1..367) || (yearday == 366 && !is_leap_year(year)) {
            return None;
        }

        let jan_1 = Ymd { year, month: January, day: 1 };
        let days = jan_1.to_unix_days()?;
        Some(Self::from_days_since_epoch(days + yearday - 1 - EPOCH_DIFFERENCE))
    }

    /// Creates a civil date from a number of days since the 1st of January,
    /// 1970. Works for any day, earlier or later.
    pub fn from_unix_days(days: i64) -> Self {
        Self::from_days_since_epoch(days - EPOCH_DIFFERENCE)
    }

    /// The number of days between this date and the 1st of January, 1970.
    pub fn to_unix_days(self) -> i64 {
        match self.ymd.to_unix_days() {
            Some(days) => days,

            // Every constructor validates its fields, so a date that exists
            // can always be turned back into a day number.
            None => unreachable!("civil date {:?} failed round-trip", self),
        }
    }

    /// Computes a CivilDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the EPOCH.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        let num_100y_cycles = remainder / DAYS_IN_100Y;
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // Leap year calculation goes thusly:
        //
        // 1. If the year is a multiple of 400, it’s a leap year.
        // 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
        // 3. Else, if the year is a multiple of 4, it’s a leap year again!
        //
        // We already have the values for the numbers of multiples at this
        // point, so it’s safe to re-use them.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // Find out which number day of the year it is.
        // The 306 here refers to the number of days in a year excluding
        // January and February (which are excluded because of the EPOCH)
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        // Turn all those cycles into an actual number of years.
        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Work out the month and number of days into the month by scanning
        // the time triangle, finding the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index as i64, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Need to add 2 to the month in order to compensate for the EPOCH
        // being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        // The check immediately above means the month number is guaranteed
        // to be in the range (0..12), so from_zero can’t fail.
        let month_variant = match Month::from_zero(month) {
            Some(m) => m,
            None => unreachable!("month {} out of range", month),
        };

        // Finally, adjust the day numbers for human reasons: the first day
        // of the month is the 1st, rather than the 0th, and the year needs
        // to be adjusted relative to the EPOCH.
        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: Ymd {
                year:  years + 2000,
                month: month_variant,
                day:   (month_days + 1) as i8,
            },
        }
    }

    /// The year, in absolute human-readable terms: the year 2014 has a year
    /// value of 2014, rather than 14 or 114.
    pub fn year(self) -> i64 { self.ymd.year }

    /// The month of the year.
    pub fn month(self) -> Month { self.ymd.month }

    /// The day of the month, from 1 to 31.
    pub fn day(self) -> i8 { self.ymd.day }

    /// The day of the year, from 1 to 366.
    pub fn yearday(self) -> i16 { self.yearday }

    /// The day of the week.
    pub fn weekday(self) -> Weekday { self.weekday }

    /// The ISO-8601 week of the year, from 1 to 53, along with the
    /// week-numbering year it belongs to.
    ///
    /// Dates early in January can belong to the last week of the previous
    /// year, and dates late in December to the first week of the next, so
    /// the returned year is not always the civil year.
    pub fn iso_week(self) -> (i64, i64) {
        let week = (self.yearday as i64 - self.weekday.days_from_monday_as_one() + 10) / 7;

        if week < 1 {
            (iso_weeks_in_year(self.ymd.year - 1), self.ymd.year - 1)
        }
        else if week > iso_weeks_in_year(self.ymd.year) {
            (1, self.ymd.year + 1)
        }
        else {
            (week, self.ymd.year)
        }
    }
}

impl fmt::Debug for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CivilDate({:04}-{:02}-{:02})",
               self.ymd.year, self.ymd.month as i64, self.ymd.day)
    }
}

/// The number of ISO-8601 weeks in the given year: 52, or 53 for “long”
/// years, which are those that start on a Thursday, or leap years that
/// start on a Wednesday.
fn iso_weeks_in_year(year: i64) -> i64 {
    let jan_1 = Ymd { year, month: January, day: 1 };
    let weekday = match jan_1.to_unix_days() {
        Some(days) => days_to_weekday(days - EPOCH_DIFFERENCE),
        None => unreachable!("the 1st of January exists in every year"),
    };

    if weekday == Thursday || (weekday == Wednesday && is_leap_year(year)) {
        53
    }
    else {
        52
    }
}


/// A **civil time** is a time that recurs once a day: hours, minutes,
/// seconds, and the nanosecond of the second.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct CivilTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
}

impl CivilTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight.
    pub fn from_seconds_since_midnight(seconds: i64, nanosecond: i32) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            nanosecond,
        }
    }

    /// The time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, nanosecond: 0 }
    }

    /// The hour of the day.
    pub fn hour(self) -> i8 { self.hour }

    /// The minute of the hour.
    pub fn minute(self) -> i8 { self.minute }

    /// The second of the minute.
    pub fn second(self) -> i8 { self.second }

    /// The nanosecond of the second.
    pub fn nanosecond(self) -> i32 { self.nanosecond }

    /// The number of seconds since midnight this time is at, ignoring
    /// nanoseconds.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }
}

impl fmt::Debug for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CivilTime({:02}:{:02}:{:02}.{:09})",
               self.hour, self.minute, self.second, self.nanosecond)
    }
}


/// A **civil date-time** is a date paired with a time: the full set of
/// fields a single instant breaks down into.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: CivilTime,
}

impl CivilDateTime {

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, along with the
    /// nanosecond of the second.
    pub fn at_ns(unix_seconds: i64, nanosecond: i32) -> Self {

        // Just split the input value into days and seconds, and let
        // CivilDate and CivilTime do all the hard work.
        let (days, secs) = split_cycles(unix_seconds, SECONDS_IN_DAY);

        Self {
            date: CivilDate::from_unix_days(days),
            time: CivilTime::from_seconds_since_midnight(secs, nanosecond),
        }
    }

    /// The number of seconds between this date-time and the Unix epoch.
    pub fn to_unix_seconds(self) -> i64 {
        self.date.to_unix_days() * SECONDS_IN_DAY + self.time.to_seconds()
    }
}


/// Computes the weekday, given the number of days that have passed since
/// the EPOCH.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    let weekday = (days + 3) % 7;

    // The range is already checked, so from_zero can’t fail.
    match Weekday::from_zero(if weekday < 0 { weekday + 7 } else { weekday }) {
        Some(w) => w,
        None => unreachable!("weekday out of range"),
    }
}


/// A **Ymd** is an implementation detail of `CivilDate`: the raw fields
/// with no validity guarantee. The interface to `CivilDate` ensures that it
/// should be impossible to create an instance of the 74th of March, but
/// you’re free to create such an instance of `Ymd`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct Ymd {
    year:  i64,
    month: Month,
    day:   i8,
}

impl Ymd {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970. Returns the number of days if this datestamp is
    /// valid; `None` otherwise.
    fn to_unix_days(self) -> Option<i64> {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = leap_year_calculations(self.year);

        if !self.is_valid(is_leap_year) {
            return None;
        }

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        let days = years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and instants start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + self.month.days_before_start() as i64

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + (self.day - 1) as i64;

        Some(days)
    }

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    fn is_valid(self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016] {
            assert!(CivilDate::ymd(year, February, 29).is_some());
            assert!(CivilDate::ymd(year + 1, February, 29).is_none());
        }
        assert!(CivilDate::ymd(1600, February, 29).is_some());
        assert!(CivilDate::ymd(1601, February, 29).is_none());
        assert!(CivilDate::ymd(2000, February, 29).is_some());
        assert!(CivilDate::ymd(2100, February, 29).is_none());
    }

    #[test]
    fn to_from_unix_days() {
        for date in [
            CivilDate::ymd(1970, January,  1).unwrap(),
            CivilDate::ymd(   1, January,  1).unwrap(),
            CivilDate::ymd(1971, January,  1).unwrap(),
            CivilDate::ymd(1989, November, 10).unwrap(),
            CivilDate::ymd(1990, July,      8).unwrap(),
            CivilDate::ymd(2014, July,     13).unwrap(),
            CivilDate::ymd(2001, February,  3).unwrap(),
        ] {
            assert_eq!(date, CivilDate::from_unix_days(date.to_unix_days()));
        }
    }

    #[test]
    fn epoch_is_epoch() {
        let date = CivilDate::from_unix_days(0);
        assert_eq!(date.year(), 1970);
        assert_eq!(date.month(), January);
        assert_eq!(date.day(), 1);
        assert_eq!(date.weekday(), Thursday);
        assert_eq!(date.yearday(), 1);
    }

    #[test]
    fn known_weekdays() {
        let date = CivilDate::ymd(2019, June, 29).unwrap();
        assert_eq!(date.weekday(), Saturday);

        let date = CivilDate::ymd(2000, March, 1).unwrap();
        assert_eq!(date.weekday(), Wednesday);
    }

    #[test]
    fn yearday_boundaries() {
        assert!(CivilDate::yd(2019, 366).is_none());
        assert!(CivilDate::yd(2019, 0).is_none());
        assert!(CivilDate::yd(2019, 367).is_none());

        let date = CivilDate::yd(2020, 366).unwrap();
        assert_eq!(date.month(), December);
        assert_eq!(date.day(), 31);
    }

    mod iso_weeks {
        use super::*;

        #[test]
        fn midyear() {
            let date = CivilDate::ymd(2015, September, 11).unwrap();
            assert_eq!(date.iso_week(), (37, 2015));
        }

        #[test]
        fn january_in_last_years_week() {
            let date = CivilDate::ymd(2010, January, 1).unwrap();
            assert_eq!(date.iso_week(), (53, 2009));
        }

        #[test]
        fn december_in_next_years_week() {
            let date = CivilDate::ymd(2008, December, 29).unwrap();
            assert_eq!(date.iso_week(), (1, 2009));
        }

        #[test]
        fn long_years() {
            assert_eq!(iso_weeks_in_year(2009), 53);
            assert_eq!(iso_weeks_in_year(2020), 53);
            assert_eq!(iso_weeks_in_year(2019), 52);
        }
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = CivilDate::ymd(1600, February, 28).unwrap();
            assert_eq!(format!("{:?}", date), "CivilDate(1600-02-28)");
        }

        #[test]
        fn midday() {
            let time = CivilTime::from_seconds_since_midnight(12 * 3600, 0);
            assert_eq!(format!("{:?}", time), "CivilTime(12:00:00.000000000)");
        }
    }
}
