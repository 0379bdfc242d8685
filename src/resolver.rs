//! The calendar resolver contract, and the built-in proleptic Gregorian
//! resolver that implements it on top of the `civil` module.

use log::trace;

use crate::civil::{is_leap_year, CivilDate, CivilDateTime, Month, Weekday, SECONDS_IN_DAY};
use crate::components::{Components, Unit};
use crate::instant::{Instant, NANOS_IN_SECOND};
use crate::region::Region;
use crate::util::split_cycles;


/// A **calendar resolver** converts between instants and named civil
/// components for a given region, and performs component arithmetic on
/// instants.
///
/// The library ships one implementation, [`Gregorian`]; regions carrying
/// another calendar system delegate to an external implementation of this
/// trait through [`crate::region::CalendarKind`].
pub trait CalendarResolver: Sync {

    /// Breaks an instant into its full set of civil components, interpreted
    /// in the region’s time zone.
    ///
    /// Every unit field of the result is populated: a resolver that leaves
    /// one absent is misbehaving, and callers are entitled to treat that as
    /// a contract violation rather than an error.
    fn extract(&self, instant: Instant, region: &Region) -> Components;

    /// Produces the instant described by a components record, interpreted
    /// in the region’s time zone. Out-of-range months and time fields carry
    /// into the next larger field; a day that doesn’t exist in the resolved
    /// month (the 30th of February) is calendrically undefined and returns
    /// `None`.
    fn instant_from_components(&self, components: &Components, region: &Region) -> Option<Instant>;

    /// The elapsed calendar time between two instants, broken into the
    /// requested units in descending order of granularity. A reversed pair
    /// of instants produces negated fields rather than a failure.
    fn components_between(&self, units: &[Unit], from: Instant, to: Instant, region: &Region) -> Components;

    /// Adds a signed components record to an instant. Returns `None` if the
    /// addition is calendrically undefined.
    fn add_components(&self, components: &Components, to: Instant, region: &Region) -> Option<Instant>;

    /// Whether the instant falls on the same calendar day as `now`.
    fn is_in_today(&self, instant: Instant, now: Instant, region: &Region) -> bool;

    /// Whether the instant falls on the calendar day before `now`’s.
    fn is_in_yesterday(&self, instant: Instant, now: Instant, region: &Region) -> bool;

    /// Whether the instant falls on the calendar day after `now`’s.
    fn is_in_tomorrow(&self, instant: Instant, now: Instant, region: &Region) -> bool;

    /// Whether the instant falls on the region’s weekend.
    fn is_in_weekend(&self, instant: Instant, region: &Region) -> bool;

    /// The ordinal position of a unit within a larger unit at the given
    /// instant: the day within its year, say. `None` for pairings the
    /// calendar doesn’t define.
    fn ordinality(&self, unit: Unit, larger: Unit, instant: Instant, region: &Region) -> Option<i64>;
}


/// The proleptic Gregorian calendar: the standard Gregorian rules extended
/// backwards and forwards indefinitely, ignoring historical adoption dates
/// and leap seconds.
#[derive(Debug, Clone, Copy)]
pub struct Gregorian;

impl Gregorian {

    /// The local civil fields of an instant in the region’s time zone.
    fn civil(self, instant: Instant, region: &Region) -> CivilDateTime {
        let local = instant.seconds() + region.time_zone().offset_seconds();
        CivilDateTime::at_ns(local, instant.nanoseconds())
    }

    /// The number of the local calendar day the instant falls in, counted
    /// from the Unix epoch. Day membership tests are comparisons of this.
    fn local_day(self, instant: Instant, region: &Region) -> i64 {
        let local = instant.seconds() + region.time_zone().offset_seconds();
        split_cycles(local, SECONDS_IN_DAY).0
    }

    /// Adds months to a civil date, clamping the day to the length of the
    /// month it lands in: one month after the 31st of January is the 28th
    /// (or 29th) of February.
    fn add_months_clamped(self, date: CivilDate, months: i64) -> Option<CivilDate> {
        let month0 = date.month() as i64 - 1 + months;
        let (year_carry, month0) = split_cycles(month0, 12);
        let year = date.year() + year_carry;

        let month = Month::from_zero(month0)?;
        let limit = month.days_in_month(is_leap_year(year));
        let day = std::cmp::min(date.day(), limit);

        CivilDate::ymd(year, month, day)
    }

    /// How many whole steps of `unit` fit between `cursor` and `to`,
    /// where `cursor <= to`, along with the cursor advanced by that many
    /// steps.
    fn consume_unit(self, unit: Unit, cursor: Instant, to: Instant, region: &Region) -> (i64, Instant) {
        match unit {
            Unit::Year | Unit::Quarter | Unit::Month => {
                let months_per = match unit {
                    Unit::Year => 12,
                    Unit::Quarter => 3,
                    _ => 1,
                };

                let from_civil = self.civil(cursor, region);
                let to_civil = self.civil(to, region);

                // A civil-field estimate can overshoot by one when the
                // day or time of day hasn’t come round yet, so walk it
                // back until the shifted cursor fits.
                let month_span = (to_civil.date.year() - from_civil.date.year()) * 12
                    + (to_civil.date.month() as i64 - from_civil.date.month() as i64);
                let mut count = month_span / months_per;

                while count > 0 {
                    match self.shift_by_months(cursor, count * months_per, region) {
                        Some(shifted) if shifted <= to => break,
                        _ => count -= 1,
                    }
                }

                match self.shift_by_months(cursor, count * months_per, region) {
                    Some(shifted) => (count, shifted),
                    None => (0, cursor),
                }
            },

            Unit::WeekOfYear | Unit::WeekOfMonth => {
                let step = 7 * SECONDS_IN_DAY * NANOS_IN_SECOND;
                let count = to.nanoseconds_since(cursor) / step;
                (count, cursor.plus_seconds(count * 7 * SECONDS_IN_DAY))
            },

            Unit::Day => {
                let count = to.nanoseconds_since(cursor) / (SECONDS_IN_DAY * NANOS_IN_SECOND);
                (count, cursor.plus_seconds(count * SECONDS_IN_DAY))
            },

            Unit::Hour => {
                let count = to.nanoseconds_since(cursor) / (3600 * NANOS_IN_SECOND);
                (count, cursor.plus_seconds(count * 3600))
            },

            Unit::Minute => {
                let count = to.nanoseconds_since(cursor) / (60 * NANOS_IN_SECOND);
                (count, cursor.plus_seconds(count * 60))
            },

            Unit::Second => {
                let count = to.nanoseconds_since(cursor) / NANOS_IN_SECOND;
                (count, cursor.plus_seconds(count))
            },

            Unit::Nanosecond => {
                let count = to.nanoseconds_since(cursor);
                (count, cursor.plus_nanoseconds(count))
            },

            // Weekdays, ordinals, and eras name positions, not lengths.
            _ => (0, cursor),
        }
    }

    /// Shifts an instant by a number of calendar months, preserving the
    /// time of day and clamping the day of the month.
    fn shift_by_months(self, instant: Instant, months: i64, region: &Region) -> Option<Instant> {
        let civil = self.civil(instant, region);
        let date = self.add_months_clamped(civil.date, months)?;

        let local = date.to_unix_days() * SECONDS_IN_DAY + civil.time.to_seconds();
        Some(Instant::at_ns(local - region.time_zone().offset_seconds(),
                            civil.time.nanosecond() as i64))
    }
}

impl CalendarResolver for Gregorian {

    fn extract(&self, instant: Instant, region: &Region) -> Components {
        let civil = self.civil(instant, region);
        let date = civil.date;
        let (week_of_year, week_year) = date.iso_week();

        // Weekday of the first of the month, for the week-of-month count.
        let first_of_month = date.to_unix_days() - (date.day() as i64 - 1);
        let first = CivilDate::from_unix_days(first_of_month).weekday();

        Components {
            era: Some(if date.year() >= 1 { 1 } else { 0 }),
            year: Some(date.year()),
            month: Some(date.month() as i64),
            day: Some(date.day() as i64),
            hour: Some(civil.time.hour() as i64),
            minute: Some(civil.time.minute() as i64),
            second: Some(civil.time.second() as i64),
            nanosecond: Some(civil.time.nanosecond() as i64),
            weekday: Some(date.weekday().days_from_sunday() + 1),
            weekday_ordinal: Some((date.day() as i64 - 1) / 7 + 1),
            quarter: Some((date.month() as i64 - 1) / 3 + 1),
            week_of_month: Some((date.day() as i64 - 1 + first.days_from_sunday()) / 7 + 1),
            week_of_year: Some(week_of_year),
            year_for_week_of_year: Some(week_year),
            calendar: Some(region.calendar()),
            time_zone: Some(region.time_zone().clone()),
            locale: Some(region.locale().clone()),
        }
    }

    fn instant_from_components(&self, components: &Components, region: &Region) -> Option<Instant> {
        let mut year = components.year.unwrap_or(1970);

        // Months outside 1..=12 carry into the year.
        let month0 = components.month.unwrap_or(1) - 1;
        let (year_carry, month0) = split_cycles(month0, 12);
        year += year_carry;
        let month = Month::from_zero(month0)?;

        // The day is validated against the month it resolved to: there is
        // no 30th of February to carry from.
        let day = components.day.unwrap_or(1);
        if day < 1 || day > month.days_in_month(is_leap_year(year)) as i64 {
            trace!("no day {} in {:?} {}", day, month, year);
            return None;
        }

        let date = CivilDate::ymd(year, month, day as i8)?;

        // Time fields carry naturally through absolute seconds.
        let seconds = date.to_unix_days() * SECONDS_IN_DAY
            + components.hour.unwrap_or(0) * 3600
            + components.minute.unwrap_or(0) * 60
            + components.second.unwrap_or(0)
            - region.time_zone().offset_seconds();

        Some(Instant::at_ns(seconds, components.nanosecond.unwrap_or(0)))
    }

    fn components_between(&self, units: &[Unit], from: Instant, to: Instant, region: &Region) -> Components {
        let (start, end, negate) = if to < from { (to, from, true) } else { (from, to, false) };

        // Descending granularity, so a request for hours and minutes
        // splits the span instead of counting it twice.
        const DESCENDING: [Unit; 10] = [
            Unit::Year, Unit::Quarter, Unit::Month,
            Unit::WeekOfYear, Unit::WeekOfMonth,
            Unit::Day, Unit::Hour, Unit::Minute, Unit::Second, Unit::Nanosecond,
        ];

        let mut result = Components::new();
        let mut cursor = start;

        for unit in DESCENDING {
            if !units.contains(&unit) {
                continue;
            }
            let (count, advanced) = self.consume_unit(unit, cursor, end, region);
            cursor = advanced;
            result.set(unit, Some(if negate { -count } else { count }));
        }

        // Position-naming units contribute no length.
        for unit in [Unit::Era, Unit::Weekday, Unit::WeekdayOrdinal, Unit::YearForWeekOfYear] {
            if units.contains(&unit) {
                result.set(unit, Some(0));
            }
        }

        trace!("components between {:?} and {:?}: {:?}", from, to, result.to_map());
        result
    }

    fn add_components(&self, components: &Components, to: Instant, region: &Region) -> Option<Instant> {
        let months = components.year.unwrap_or(0) * 12 + components.month.unwrap_or(0);

        let shifted = if months != 0 {
            self.shift_by_months(to, months, region)?
        }
        else {
            to
        };

        let seconds = (components.week_of_year.unwrap_or(0) * 7 + components.day.unwrap_or(0)) * SECONDS_IN_DAY
            + components.hour.unwrap_or(0) * 3600
            + components.minute.unwrap_or(0) * 60
            + components.second.unwrap_or(0);

        Some(shifted.plus_seconds(seconds)
                    .plus_nanoseconds(components.nanosecond.unwrap_or(0)))
    }

    fn is_in_today(&self, instant: Instant, now: Instant, region: &Region) -> bool {
        self.local_day(instant, region) == self.local_day(now, region)
    }

    fn is_in_yesterday(&self, instant: Instant, now: Instant, region: &Region) -> bool {
        self.local_day(instant, region) == self.local_day(now, region) - 1
    }

    fn is_in_tomorrow(&self, instant: Instant, now: Instant, region: &Region) -> bool {
        self.local_day(instant, region) == self.local_day(now, region) + 1
    }

    fn is_in_weekend(&self, instant: Instant, region: &Region) -> bool {
        self.civil(instant, region).date.weekday().is_weekend()
    }

    fn ordinality(&self, unit: Unit, larger: Unit, instant: Instant, region: &Region) -> Option<i64> {
        let civil = self.civil(instant, region);

        match (unit, larger) {
            (Unit::Day, Unit::Year) => Some(civil.date.yearday() as i64),
            (Unit::Day, Unit::Month) => Some(civil.date.day() as i64),
            (Unit::Day, Unit::WeekOfYear) => Some(civil.date.weekday().days_from_sunday() + 1),
            (Unit::Month, Unit::Year) => Some(civil.date.month() as i64),
            (Unit::Hour, Unit::Day) => Some(civil.time.hour() as i64 + 1),
            (Unit::Minute, Unit::Hour) => Some(civil.time.minute() as i64 + 1),
            (Unit::Second, Unit::Minute) => Some(civil.time.second() as i64 + 1),
            _ => None,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::region::{CalendarKind, Locale, TimeZone};

    fn utc() -> Region {
        Region::new(CalendarKind::Gregorian, TimeZone::utc(), Locale::english())
    }

    fn at_ymd_hms(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Instant {
        let components = Components {
            year: Some(year), month: Some(month), day: Some(day),
            hour: Some(hour), minute: Some(minute), second: Some(second),
            ..Components::default()
        };
        Gregorian.instant_from_components(&components, &utc()).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn epoch() {
            assert_eq!(at_ymd_hms(1970, 1, 1, 0, 0, 0), Instant::at_epoch());
        }

        #[test]
        fn thirtieth_of_february_is_undefined() {
            let components = Components {
                year: Some(2019), month: Some(2), day: Some(30),
                ..Components::default()
            };
            assert_eq!(Gregorian.instant_from_components(&components, &utc()), None);
        }

        #[test]
        fn month_thirteen_carries() {
            assert_eq!(at_ymd_hms(2018, 13, 1, 0, 0, 0), at_ymd_hms(2019, 1, 1, 0, 0, 0));
        }

        #[test]
        fn hour_twenty_four_carries() {
            assert_eq!(at_ymd_hms(2019, 6, 29, 24, 0, 0), at_ymd_hms(2019, 6, 30, 0, 0, 0));
        }

        #[test]
        fn zone_offset_shifts_the_instant() {
            let ahead = Region::new(CalendarKind::Gregorian, TimeZone::fixed("Ahead", 3600), Locale::english());
            let components = Components {
                year: Some(1970), month: Some(1), day: Some(1),
                ..Components::default()
            };
            let instant = Gregorian.instant_from_components(&components, &ahead).unwrap();
            assert_eq!(instant, Instant::at(-3600));
        }
    }

    mod extraction {
        use super::*;

        #[test]
        fn round_trip() {
            let instant = at_ymd_hms(2018, 9, 14, 15, 42, 7);
            let extracted = Gregorian.extract(instant, &utc());
            assert_eq!(extracted.year, Some(2018));
            assert_eq!(extracted.month, Some(9));
            assert_eq!(extracted.day, Some(14));
            assert_eq!(extracted.hour, Some(15));
            assert_eq!(extracted.minute, Some(42));
            assert_eq!(extracted.second, Some(7));
            assert_eq!(extracted.era, Some(1));
            assert_eq!(extracted.quarter, Some(3));
        }

        #[test]
        fn weekday_is_one_based_from_sunday() {
            // The 29th of June 2019 was a Saturday.
            let instant = at_ymd_hms(2019, 6, 29, 12, 0, 0);
            assert_eq!(Gregorian.extract(instant, &utc()).weekday, Some(7));
        }

        #[test]
        fn weekday_ordinal() {
            // The 14th is always the second of its weekdays in the month.
            let instant = at_ymd_hms(2018, 9, 14, 0, 0, 0);
            assert_eq!(Gregorian.extract(instant, &utc()).weekday_ordinal, Some(2));
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn add_days() {
            let start = at_ymd_hms(2019, 12, 31, 23, 0, 0);
            let shifted = Gregorian.add_components(&Components::days(1), start, &utc()).unwrap();
            assert_eq!(shifted, at_ymd_hms(2020, 1, 1, 23, 0, 0));
        }

        #[test]
        fn add_month_clamps_to_end() {
            let start = at_ymd_hms(2019, 1, 31, 0, 0, 0);
            let shifted = Gregorian.add_components(&Components::months(1), start, &utc()).unwrap();
            assert_eq!(shifted, at_ymd_hms(2019, 2, 28, 0, 0, 0));
        }

        #[test]
        fn add_year_to_leap_day_clamps() {
            let start = at_ymd_hms(2020, 2, 29, 0, 0, 0);
            let shifted = Gregorian.add_components(&Components::years(1), start, &utc()).unwrap();
            assert_eq!(shifted, at_ymd_hms(2021, 2, 28, 0, 0, 0));
        }

        #[test]
        fn negative_months() {
            let start = at_ymd_hms(2019, 3, 31, 0, 0, 0);
            let shifted = Gregorian.add_components(&Components::months(-1), start, &utc()).unwrap();
            assert_eq!(shifted, at_ymd_hms(2019, 2, 28, 0, 0, 0));
        }
    }

    mod differences {
        use super::*;

        #[test]
        fn whole_hours() {
            let start = at_ymd_hms(2018, 9, 14, 15, 0, 0);
            let end = at_ymd_hms(2018, 9, 15, 20, 0, 0);
            let between = Gregorian.components_between(&[Unit::Hour], start, end, &utc());
            assert_eq!(between.hour, Some(29));
        }

        #[test]
        fn split_across_units() {
            let start = at_ymd_hms(2018, 9, 14, 15, 0, 0);
            let end = at_ymd_hms(2018, 9, 15, 20, 30, 0);
            let between = Gregorian.components_between(&[Unit::Day, Unit::Hour, Unit::Minute], start, end, &utc());
            assert_eq!(between.day, Some(1));
            assert_eq!(between.hour, Some(5));
            assert_eq!(between.minute, Some(30));
        }

        #[test]
        fn months_respect_day_of_month() {
            // One day short of two whole months.
            let start = at_ymd_hms(2019, 1, 15, 0, 0, 0);
            let end = at_ymd_hms(2019, 3, 14, 0, 0, 0);
            let between = Gregorian.components_between(&[Unit::Month], start, end, &utc());
            assert_eq!(between.month, Some(1));
        }

        #[test]
        fn reversed_instants_negate() {
            let start = at_ymd_hms(2018, 9, 15, 0, 0, 0);
            let end = at_ymd_hms(2018, 9, 14, 0, 0, 0);
            let between = Gregorian.components_between(&[Unit::Day], start, end, &utc());
            assert_eq!(between.day, Some(-1));
        }
    }

    mod membership {
        use super::*;

        #[test]
        fn day_boundaries() {
            let now = at_ymd_hms(2019, 6, 29, 12, 0, 0);
            let earlier_today = at_ymd_hms(2019, 6, 29, 0, 0, 0);
            let tomorrow = at_ymd_hms(2019, 6, 30, 0, 0, 0);
            let yesterday = at_ymd_hms(2019, 6, 28, 23, 59, 59);

            assert!(Gregorian.is_in_today(earlier_today, now, &utc()));
            assert!(Gregorian.is_in_tomorrow(tomorrow, now, &utc()));
            assert!(Gregorian.is_in_yesterday(yesterday, now, &utc()));
            assert!(!Gregorian.is_in_today(tomorrow, now, &utc()));
        }

        #[test]
        fn weekends() {
            assert!(Gregorian.is_in_weekend(at_ymd_hms(2019, 6, 29, 12, 0, 0), &utc()));
            assert!(Gregorian.is_in_weekend(at_ymd_hms(2019, 6, 30, 12, 0, 0), &utc()));
            assert!(!Gregorian.is_in_weekend(at_ymd_hms(2019, 7, 1, 12, 0, 0), &utc()));
        }
    }

    #[test]
    fn ordinality_day_in_year() {
        let instant = at_ymd_hms(2020, 12, 31, 0, 0, 0);
        assert_eq!(Gregorian.ordinality(Unit::Day, Unit::Year, instant, &utc()), Some(366));
    }
}
