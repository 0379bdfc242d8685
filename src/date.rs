//! Absolute dates paired with a region, and the query surface every
//! date-like value shares.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::civil::{self, CivilDate, SECONDS_IN_DAY};
use crate::components::{Components, Unit};
use crate::instant::{Instant, NANOS_IN_SECOND};
use crate::interval::{DateInterval, INTERVAL_UNITS};
use crate::region::Region;
use crate::symbols::{default_provider, SymbolKind, SymbolStyle};


/// Seconds of the earliest instant the library hands out as a sentinel,
/// midnight on the first of January of year 1, UTC.
const DISTANT_PAST_SECONDS: i64 = -62_135_596_800;

/// Seconds of the latest sentinel instant, midnight starting year 4001, UTC.
const DISTANT_FUTURE_SECONDS: i64 = 64_092_211_200;


/// The direction a date is pushed when snapping it to a coarser grid.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Rounding {

    /// Towards the future.
    Up,

    /// Towards the past.
    Down,

    /// Towards the Unix epoch.
    TowardZero,

    /// Away from the Unix epoch.
    AwayFromZero,

    /// To whichever grid point is closer, ties towards the future.
    Nearest,
}

/// Snaps a value to a multiple of `step`, in the requested direction.
fn div_round(value: i128, step: i128, rounding: Rounding) -> i128 {
    let quotient = value.div_euclid(step);
    let remainder = value.rem_euclid(step);

    if remainder == 0 {
        return quotient;
    }

    match rounding {
        Rounding::Down => quotient,
        Rounding::Up => quotient + 1,
        Rounding::TowardZero => if value < 0 { quotient + 1 } else { quotient },
        Rounding::AwayFromZero => if value < 0 { quotient } else { quotient + 1 },
        Rounding::Nearest => if remainder * 2 >= step { quotient + 1 } else { quotient },
    }
}


/// Anything that names an exact instant and a region to read it in.
///
/// The two required methods pin the value down; everything else derives
/// from them and comes for free: the component getters, the membership
/// tests, and the measuring and snapping operations. [`DateInRegion`] is
/// the canonical implementation, and a bare [`Instant`] implements the
/// trait too, read in the default region.
pub trait DateRepresentable: Sized {

    /// The exact instant this value names.
    fn instant(&self) -> Instant;

    /// The region the instant is interpreted in.
    fn region(&self) -> Region;


    // -- components --

    /// Every civil component of this date at once.
    fn extract(&self) -> Components {
        let region = self.region();
        region.resolver().extract(self.instant(), &region)
    }

    /// A single civil component of this date.
    ///
    /// ### Panics
    ///
    /// Panics if the region’s resolver fails to populate the unit, which
    /// the [`crate::resolver::CalendarResolver`] contract forbids.
    fn component(&self, unit: Unit) -> i64 {
        match self.extract().get(unit) {
            Some(value) => value,
            None => panic!("calendar resolver produced no {:?} component", unit),
        }
    }

    /// The era: 1 for the common era, 0 before it.
    fn era(&self) -> i64 { self.component(Unit::Era) }

    /// The year.
    fn year(&self) -> i64 { self.component(Unit::Year) }

    /// The month, from 1 for January.
    fn month(&self) -> i64 { self.component(Unit::Month) }

    /// The day of the month, from 1.
    fn day(&self) -> i64 { self.component(Unit::Day) }

    /// The hour, from 0 to 23.
    fn hour(&self) -> i64 { self.component(Unit::Hour) }

    /// The minute, from 0 to 59.
    fn minute(&self) -> i64 { self.component(Unit::Minute) }

    /// The second, from 0 to 59.
    fn second(&self) -> i64 { self.component(Unit::Second) }

    /// The nanosecond of the second.
    fn nanosecond(&self) -> i64 { self.component(Unit::Nanosecond) }

    /// The day of the week, from 1 for Sunday to 7 for Saturday.
    fn weekday(&self) -> i64 { self.component(Unit::Weekday) }

    /// Which occurrence of its weekday this is within the month: the 15th
    /// is always the third of whatever weekday it falls on.
    fn weekday_ordinal(&self) -> i64 { self.component(Unit::WeekdayOrdinal) }

    /// The quarter of the year, from 1.
    fn quarter(&self) -> i64 { self.component(Unit::Quarter) }

    /// The week of the month, from 1.
    fn week_of_month(&self) -> i64 { self.component(Unit::WeekOfMonth) }

    /// The ISO week of the year, from 1.
    fn week_of_year(&self) -> i64 { self.component(Unit::WeekOfYear) }

    /// The year the ISO week belongs to, which near the turn of the year
    /// can differ from [`year`](DateRepresentable::year).
    fn year_for_week_of_year(&self) -> i64 { self.component(Unit::YearForWeekOfYear) }

    /// Whether this date falls in a leap year.
    fn is_leap_year(&self) -> bool {
        civil::is_leap_year(self.year())
    }

    /// The ordinal position of one unit within a larger one at this date,
    /// or `None` for pairings the calendar doesn’t define.
    fn ordinality(&self, unit: Unit, larger: Unit) -> Option<i64> {
        let region = self.region();
        region.resolver().ordinality(unit, larger, self.instant(), &region)
    }

    /// The day of the year, from 1.
    fn day_of_year(&self) -> i64 {
        match self.ordinality(Unit::Day, Unit::Year) {
            Some(day) => day,
            None => panic!("calendar resolver cannot order days within years"),
        }
    }

    /// The hour this date is closest to: minute 30 and up rounds forward.
    fn nearest_hour(&self) -> i64 {
        let minute = self.minute();
        let shift = if minute >= 30 { (60 - minute) * 60 } else { -(minute * 60) };
        DateInRegion::new_in(self.instant().plus_seconds(shift), self.region()).hour()
    }


    // -- names --

    /// The day of the month in ordinal style: “3rd” in an English locale.
    fn ordinal_day(&self) -> String {
        default_provider().ordinal_string(self.day(), &self.region())
    }

    /// The localized name of this date’s era.
    fn era_name(&self, style: SymbolStyle) -> String {
        default_provider().localized_name(SymbolKind::Era, self.era() as usize, style, &self.region())
    }

    /// The localized name of this date’s month.
    fn month_name(&self, style: SymbolStyle) -> String {
        default_provider().localized_name(SymbolKind::Month, self.month() as usize - 1, style, &self.region())
    }

    /// The localized name of this date’s weekday.
    fn weekday_name(&self, style: SymbolStyle) -> String {
        default_provider().localized_name(SymbolKind::Weekday, self.weekday() as usize - 1, style, &self.region())
    }


    // -- membership --

    /// Whether this date falls on the current calendar day in its region.
    fn is_today(&self) -> bool {
        let region = self.region();
        region.resolver().is_in_today(self.instant(), Instant::now(), &region)
    }

    /// Whether this date falls on the calendar day before the current one.
    fn is_yesterday(&self) -> bool {
        let region = self.region();
        region.resolver().is_in_yesterday(self.instant(), Instant::now(), &region)
    }

    /// Whether this date falls on the calendar day after the current one.
    fn is_tomorrow(&self) -> bool {
        let region = self.region();
        region.resolver().is_in_tomorrow(self.instant(), Instant::now(), &region)
    }

    /// Whether this date falls on the weekend in its region.
    fn is_in_weekend(&self) -> bool {
        let region = self.region();
        region.resolver().is_in_weekend(self.instant(), &region)
    }

    /// Whether this date is later than the current moment.
    fn is_in_future(&self) -> bool {
        self.instant() > Instant::now()
    }

    /// Whether this date is earlier than the current moment.
    fn is_in_past(&self) -> bool {
        self.instant() < Instant::now()
    }

    /// Whether this date is later than another.
    fn is_in_future_relative_to<D: DateRepresentable>(&self, other: &D) -> bool {
        self.instant() > other.instant()
    }

    /// Whether this date is earlier than another.
    fn is_in_past_relative_to<D: DateRepresentable>(&self, other: &D) -> bool {
        self.instant() < other.instant()
    }


    // -- conversion --

    /// The same instant, read in another region. The physical moment never
    /// changes; only the civil fields it reads as do.
    fn in_region(&self, region: Region) -> DateInRegion {
        DateInRegion::new_in(self.instant(), region)
    }

    /// The same instant, read in the default region.
    fn in_default_region(&self) -> DateInRegion {
        self.in_region(Region::default_region())
    }


    // -- measuring --

    /// The elapsed calendar time from this date to another, in the
    /// requested units. A date earlier than this one produces negated
    /// fields.
    fn components_to<D: DateRepresentable>(&self, units: &[Unit], other: &D) -> Components {
        let region = self.region();
        region.resolver().components_between(units, self.instant(), other.instant(), &region)
    }

    /// The elapsed calendar time from this date to another, in one unit.
    fn component_to<D: DateRepresentable>(&self, unit: Unit, other: &D) -> i64 {
        self.components_to(&[unit], other).get(unit).unwrap_or(0)
    }

    /// The time elapsed since an earlier date, as days, hours, minutes,
    /// seconds, and nanoseconds.
    fn date_components_since<D: DateRepresentable>(&self, start: &D) -> Components {
        let region = self.region();
        region.resolver().components_between(&INTERVAL_UNITS, start.instant(), self.instant(), &region)
    }

    /// The time from this date until a later one, in the same units.
    fn date_components_before<D: DateRepresentable>(&self, end: &D) -> Components {
        let region = self.region();
        region.resolver().components_between(&INTERVAL_UNITS, self.instant(), end.instant(), &region)
    }

    /// The time elapsed from the current moment to this date.
    fn date_components_since_now(&self) -> Components {
        self.date_components_since(&Instant::now())
    }

    /// The time from this date until the current moment.
    fn date_components_before_now(&self) -> Components {
        self.date_components_before(&Instant::now())
    }

    /// The interval from an earlier date up to this one.
    fn date_interval_since<D: DateRepresentable>(&self, start: &D) -> DateInterval {
        DateInterval::new(start, self)
    }

    /// The interval from this date up to a later one.
    fn date_interval_before<D: DateRepresentable>(&self, end: &D) -> DateInterval {
        DateInterval::new(self, end)
    }

    /// The interval from the current moment up to this date.
    fn date_interval_since_now(&self) -> DateInterval {
        self.date_interval_since(&DateInRegion::new_in(Instant::now(), self.region()))
    }

    /// The interval from this date up to the current moment.
    fn date_interval_before_now(&self) -> DateInterval {
        self.date_interval_before(&DateInRegion::new_in(Instant::now(), self.region()))
    }


    // -- snapping --

    /// Snaps this date to a grid of the given duration, anchored at the
    /// Unix epoch, in the requested direction: ten past three snapped to
    /// fifteen minutes upwards is quarter past three.
    ///
    /// A record that doesn’t describe a positive duration snaps to whole
    /// seconds instead.
    fn to_nearest(&self, components: &Components, rounding: Rounding) -> DateInRegion {
        let region = self.region();
        let precision = components
            .in_unit_at(Unit::Second, self.instant(), &region)
            .filter(|&seconds| seconds > 0)
            .unwrap_or(1);

        let step = precision as i128 * NANOS_IN_SECOND as i128;
        let total = self.instant().seconds() as i128 * NANOS_IN_SECOND as i128
            + self.instant().nanoseconds() as i128;
        let snapped = div_round(total, step, rounding) * step;

        let seconds = snapped.div_euclid(NANOS_IN_SECOND as i128) as i64;
        let nanoseconds = snapped.rem_euclid(NANOS_IN_SECOND as i128) as i64;
        DateInRegion::new_in(Instant::at_ns(seconds, nanoseconds), region)
    }

    /// Snaps this date forwards to the next grid point.
    fn to_next_nearest(&self, components: &Components) -> DateInRegion {
        self.to_nearest(components, Rounding::Up)
    }


    // -- arithmetic --

    /// This date shifted by a signed components record, or `None` if the
    /// shift is calendrically undefined.
    fn checked_add(&self, components: &Components) -> Option<DateInRegion> {
        let region = self.region();
        let shifted = region.resolver().add_components(components, self.instant(), &region)?;
        Some(DateInRegion::new_in(shifted, region))
    }

    /// This date shifted backwards by a signed components record.
    fn checked_sub(&self, components: &Components) -> Option<DateInRegion> {
        self.checked_add(&-components.clone())
    }
}


/// A **date in a region** is an absolute instant bundled with the region
/// that gives its civil reading: the calendar, the time zone, and the
/// locale.
///
/// Two values are equal when their instants are, whatever their regions:
/// midnight in London and one o’clock in Rome are the same moment, and
/// this type says so. Ordering and hashing follow the same rule.
#[derive(Debug, Clone)]
pub struct DateInRegion {
    instant: Instant,
    region: Region,
}

impl DateInRegion {

    /// A date at the given instant, in the given region.
    pub fn new_in(instant: Instant, region: Region) -> Self {
        Self { instant, region }
    }

    /// The current moment, in the default region.
    pub fn now() -> Self {
        Self::new_in(Instant::now(), Region::default_region())
    }

    /// A date at the given number of seconds since the Unix epoch, in the
    /// UTC region.
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self::new_in(Instant::at(seconds), Region::utc())
    }

    /// A date at the given number of seconds since the Unix epoch, in the
    /// given region.
    pub fn from_unix_seconds_in(seconds: i64, region: Region) -> Self {
        Self::new_in(Instant::at(seconds), region)
    }

    /// A date built from civil fields, which are normalised rather than
    /// validated: a month or time field out of range carries into the next
    /// larger field, and the 30th of February comes out as the 1st or 2nd
    /// of March. This constructor never fails.
    ///
    /// To reject impossible dates instead, go through
    /// [`DateInRegion::from_components`].
    ///
    /// ### Panics
    ///
    /// Panics if the region’s resolver refuses the first of the month,
    /// which the [`crate::resolver::CalendarResolver`] contract forbids.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(year: i64, month: i64, day: i64, hour: i64, minute: i64,
                       second: i64, nanosecond: i64, region: Region) -> Self {
        let first = Components {
            year: Some(year),
            month: Some(month),
            day: Some(1),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            nanosecond: Some(nanosecond),
            ..Components::default()
        };

        // The day is applied as an offset from the first of the month, so
        // an out-of-range day rolls forward instead of failing.
        let instant = match region.resolver().instant_from_components(&first, &region) {
            Some(instant) => instant.plus_seconds((day - 1) * SECONDS_IN_DAY),
            None => panic!("calendar resolver refused {:04}-{:02}-01", year, month),
        };

        Self::new_in(instant, region)
    }

    /// A date built from a components record, validated: a day that does
    /// not exist in its month produces `None`. Absent fields default to
    /// the start of their unit, and the year to 1970.
    ///
    /// With no explicit region, one is derived from the calendar, time
    /// zone, and locale fields the record itself carries.
    pub fn from_components(components: &Components, region: Option<Region>) -> Option<Self> {
        let region = region.unwrap_or_else(|| Region::from_components(components));
        let instant = region.resolver().instant_from_components(components, &region)?;
        Some(Self::new_in(instant, region))
    }

    /// A date at midnight on the given day of a year, counted from 1.
    /// `None` when the year has no such day.
    pub fn from_day_of_year(year: i64, day_of_year: i64, region: Region) -> Option<Self> {
        let date = CivilDate::yd(year, day_of_year)?;
        let seconds = date.to_unix_days() * SECONDS_IN_DAY - region.time_zone().offset_seconds();
        Some(Self::new_in(Instant::at(seconds), region))
    }

    /// A sentinel date in the far past, in the default region.
    pub fn distant_past() -> Self {
        Self::new_in(Instant::at(DISTANT_PAST_SECONDS), Region::default_region())
    }

    /// A sentinel date in the far future, in the default region.
    pub fn distant_future() -> Self {
        Self::new_in(Instant::at(DISTANT_FUTURE_SECONDS), Region::default_region())
    }
}

impl DateRepresentable for DateInRegion {
    fn instant(&self) -> Instant {
        self.instant
    }

    fn region(&self) -> Region {
        self.region.clone()
    }
}

/// A bare instant reads as a date in the default region.
impl DateRepresentable for Instant {
    fn instant(&self) -> Instant {
        *self
    }

    fn region(&self) -> Region {
        Region::default_region()
    }
}


// Equality, ordering, and hashing all go by the instant alone.

impl PartialEq for DateInRegion {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for DateInRegion { }

impl PartialOrd for DateInRegion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateInRegion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for DateInRegion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl PartialEq<Instant> for DateInRegion {
    fn eq(&self, other: &Instant) -> bool {
        self.instant == *other
    }
}

impl PartialEq<DateInRegion> for Instant {
    fn eq(&self, other: &DateInRegion) -> bool {
        *self == other.instant
    }
}

impl PartialOrd<Instant> for DateInRegion {
    fn partial_cmp(&self, other: &Instant) -> Option<Ordering> {
        self.instant.partial_cmp(other)
    }
}

impl PartialOrd<DateInRegion> for Instant {
    fn partial_cmp(&self, other: &DateInRegion) -> Option<Ordering> {
        self.partial_cmp(&other.instant)
    }
}


impl Add<Components> for DateInRegion {
    type Output = Self;

    /// ### Panics
    ///
    /// Panics when the shift is calendrically undefined; use
    /// [`DateRepresentable::checked_add`] to get `None` instead.
    fn add(self, rhs: Components) -> Self {
        match self.checked_add(&rhs) {
            Some(date) => date,
            None => panic!("adding {:?} to {:?} is calendrically undefined", rhs, self),
        }
    }
}

impl Sub<Components> for DateInRegion {
    type Output = Self;

    /// ### Panics
    ///
    /// Panics when the shift is calendrically undefined; use
    /// [`DateRepresentable::checked_sub`] to get `None` instead.
    fn sub(self, rhs: Components) -> Self {
        self + -rhs
    }
}

impl Add<Components> for Instant {
    type Output = DateInRegion;

    /// ### Panics
    ///
    /// Panics when the shift is calendrically undefined; use
    /// [`DateRepresentable::checked_add`] to get `None` instead.
    fn add(self, rhs: Components) -> DateInRegion {
        self.in_default_region() + rhs
    }
}

impl Sub<Components> for Instant {
    type Output = DateInRegion;

    /// ### Panics
    ///
    /// Panics when the shift is calendrically undefined; use
    /// [`DateRepresentable::checked_sub`] to get `None` instead.
    fn sub(self, rhs: Components) -> DateInRegion {
        self.in_default_region() - rhs
    }
}

impl Sub for DateInRegion {

    /// Subtracting one date from another yields the interval between them,
    /// with the subtrahend as the start.
    type Output = DateInterval;

    fn sub(self, rhs: Self) -> DateInterval {
        DateInterval::new(&rhs, &self)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::region::TimeZone;

    fn utc(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> DateInRegion {
        DateInRegion::from_fields(year, month, day, hour, minute, second, 0, Region::utc())
    }

    mod construction {
        use super::*;

        #[test]
        fn fields_round_trip_through_getters() {
            let date = utc(2019, 6, 29, 10, 5, 30);
            assert_eq!(date.year(), 2019);
            assert_eq!(date.month(), 6);
            assert_eq!(date.day(), 29);
            assert_eq!(date.hour(), 10);
            assert_eq!(date.minute(), 5);
            assert_eq!(date.second(), 30);
            assert_eq!(date.nanosecond(), 0);
        }

        #[test]
        fn out_of_range_day_rolls_forward() {
            let date = utc(2019, 2, 30, 0, 0, 0);
            assert_eq!((date.year(), date.month(), date.day()), (2019, 3, 2));
        }

        #[test]
        fn out_of_range_month_carries_into_the_year() {
            let date = utc(2019, 13, 1, 0, 0, 0);
            assert_eq!((date.year(), date.month()), (2020, 1));
        }

        #[test]
        fn components_reject_the_impossible_day() {
            let impossible = Components {
                year: Some(2019), month: Some(2), day: Some(30),
                ..Components::default()
            };
            assert_eq!(DateInRegion::from_components(&impossible, Some(Region::utc())), None);
        }

        #[test]
        fn day_of_year_reaches_the_end_of_a_leap_year() {
            let date = DateInRegion::from_day_of_year(2020, 366, Region::utc()).unwrap();
            assert_eq!((date.month(), date.day()), (12, 31));
            assert_eq!(DateInRegion::from_day_of_year(2019, 366, Region::utc()), None);
        }

        #[test]
        fn unix_epoch() {
            let date = DateInRegion::from_unix_seconds(0);
            assert_eq!((date.year(), date.month(), date.day()), (1970, 1, 1));
            assert_eq!(date.weekday_name(SymbolStyle::Default), "Thursday");
        }

        #[test]
        fn the_sentinels_bracket_everything_practical() {
            assert!(DateInRegion::distant_past() < DateInRegion::from_unix_seconds(0));
            assert!(DateInRegion::distant_future() > DateInRegion::from_unix_seconds(0));
            assert_eq!(DateInRegion::distant_past().year(), 1);
            assert_eq!(DateInRegion::distant_future().year(), 4001);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn derived_positions() {
            let date = utc(2019, 6, 29, 0, 0, 0);
            assert_eq!(date.weekday(), 7);
            assert_eq!(date.quarter(), 2);
            assert_eq!(date.day_of_year(), 180);
            assert_eq!(date.weekday_ordinal(), 5);
            assert!(date.is_in_weekend());
            assert!(!date.is_leap_year());
        }

        #[test]
        fn names() {
            let date = utc(2019, 6, 29, 0, 0, 0);
            assert_eq!(date.month_name(SymbolStyle::Default), "June");
            assert_eq!(date.month_name(SymbolStyle::Short), "Jun");
            assert_eq!(date.weekday_name(SymbolStyle::Short), "Sat");
            assert_eq!(date.era_name(SymbolStyle::Short), "AD");
            assert_eq!(date.ordinal_day(), "29th");
        }

        #[test]
        fn nearest_hour_rounds_at_half_past() {
            assert_eq!(utc(2019, 12, 12, 10, 29, 59).nearest_hour(), 10);
            assert_eq!(utc(2019, 12, 12, 10, 30, 0).nearest_hour(), 11);
        }

        #[test]
        fn reading_in_another_region_keeps_the_instant() {
            let date = utc(2019, 6, 29, 23, 30, 0);
            let rome = Region::new(date.region().calendar(),
                                   TimeZone::fixed("Europe/Rome", 3600),
                                   date.region().locale().clone());
            let shifted = date.in_region(rome);
            assert_eq!(shifted, date);
            assert_eq!((shifted.day(), shifted.hour()), (30, 0));
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn dates_compare_by_instant_only() {
            let london = utc(2019, 6, 29, 12, 0, 0);
            let rome = london.clone().in_region(
                Region::new(london.region().calendar(),
                            TimeZone::fixed("Europe/Rome", 3600),
                            london.region().locale().clone()));
            assert_eq!(london, rome);
            assert!(london < utc(2019, 6, 29, 12, 0, 1));
        }

        #[test]
        fn dates_compare_against_bare_instants() {
            let date = DateInRegion::from_unix_seconds(1000);
            assert!(date == Instant::at(1000));
            assert!(Instant::at(999) < date);
            assert!(date < Instant::at(1001));
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn month_addition_clamps_the_day() {
            let date = utc(2019, 1, 31, 0, 0, 0) + Components::months(1);
            assert_eq!((date.month(), date.day()), (2, 28));
        }

        #[test]
        fn subtracting_components_inverts_addition() {
            let start = utc(2018, 9, 15, 19, 0, 0);
            let end = start.clone() + Components::hours(1);
            assert_eq!(end.clone() - Components::hours(1), start);
            assert_eq!(end.instant().seconds_since(start.instant()), 3600);
        }

        #[test]
        fn subtracting_dates_yields_the_interval() {
            let start = utc(2018, 9, 14, 15, 0, 0);
            let end = utc(2018, 9, 15, 20, 0, 0);
            let interval = end.clone() - start.clone();
            assert_eq!(interval, DateInterval::new(&start, &end));
            assert_eq!(interval.duration(), 29 * 3600);
            assert_eq!(start.component_to(Unit::Hour, &end), 29);
            assert_eq!(end.component_to(Unit::Hour, &start), -29);
        }

        #[test]
        fn elapsed_components_split_across_units() {
            let start = utc(2018, 9, 14, 15, 0, 0);
            let end = utc(2018, 9, 15, 20, 0, 0);
            let elapsed = end.date_components_since(&start);
            assert_eq!(elapsed.day, Some(1));
            assert_eq!(elapsed.hour, Some(5));
            assert_eq!(end.date_components_before(&start).hour, Some(-5));
        }
    }

    mod snapping {
        use super::*;

        #[test]
        fn fifteen_minute_grid() {
            let date = utc(2019, 12, 12, 3, 30, 1);
            let up = date.to_nearest(&Components::minutes(15), Rounding::Up);
            let down = date.to_nearest(&Components::minutes(15), Rounding::Down);
            assert_eq!((up.hour(), up.minute(), up.second()), (3, 45, 0));
            assert_eq!((down.hour(), down.minute(), down.second()), (3, 30, 0));
        }

        #[test]
        fn nearest_prefers_the_closer_point() {
            let date = utc(2019, 12, 12, 3, 7, 0);
            let snapped = date.to_nearest(&Components::minutes(15), Rounding::Nearest);
            assert_eq!((snapped.hour(), snapped.minute()), (3, 0));
        }

        #[test]
        fn next_nearest_always_moves_forward() {
            let date = utc(2019, 12, 12, 3, 0, 1);
            let snapped = date.to_next_nearest(&Components::hours(1));
            assert_eq!((snapped.hour(), snapped.minute(), snapped.second()), (4, 0, 0));
        }

        #[test]
        fn empty_record_snaps_to_whole_seconds() {
            let date = DateInRegion::new_in(Instant::at_ns(100, 400_000_000), Region::utc());
            let snapped = date.to_nearest(&Components::new(), Rounding::Down);
            assert_eq!(snapped, Instant::at(100));
        }
    }
}
