//! Sparse records of signed calendar units, and their algebra.

use std::collections::BTreeMap;
use std::ops::{Add, Neg, Sub};

use thiserror::Error;

use crate::date::DateRepresentable;
use crate::instant::Instant;
use crate::region::{CalendarKind, Locale, Region, TimeZone};


/// A calendar unit that a [`Components`] record can carry a value for.
///
/// The variants are declared in the canonical ascending-granularity order
/// used for iteration and display, so the derived `Ord` matches it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Unit {
    Nanosecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
    YearForWeekOfYear,
    WeekOfYear,
    Weekday,
    Quarter,
    WeekdayOrdinal,
    WeekOfMonth,
    Era,
}

impl Unit {

    /// Every unit that takes part in iteration and arithmetic, in ascending
    /// order of granularity. Eras are deliberately absent: they name a
    /// span, not a length.
    pub const ALL: [Unit; 13] = [
        Unit::Nanosecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Month,
        Unit::Year,
        Unit::YearForWeekOfYear,
        Unit::WeekOfYear,
        Unit::Weekday,
        Unit::Quarter,
        Unit::WeekdayOrdinal,
        Unit::WeekOfMonth,
    ];
}


/// The ways leap-year evaluation of a components record can fail.
#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ComponentsError {

    /// The record has no year field to evaluate.
    #[error("the year is undefined")]
    YearUndefined,

    /// The year field is present but negative.
    #[error("the year is negative")]
    YearNegative,
}


/// A sparse, signed record of calendar units: a duration or offset such as
/// “1 month and 3 days” or “-2 hours”.
///
/// Every field is optional, and an absent field is distinct from a zero
/// one: negating or combining records never invents fields that neither
/// operand carried. The record can also carry a calendar, time zone, and
/// locale, which only participate in [`Region::from_components`].
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Components {
    pub era: Option<i64>,
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
    pub nanosecond: Option<i64>,
    pub weekday: Option<i64>,
    pub weekday_ordinal: Option<i64>,
    pub quarter: Option<i64>,
    pub week_of_month: Option<i64>,
    pub week_of_year: Option<i64>,
    pub year_for_week_of_year: Option<i64>,

    /// Calendar to interpret the fields with, for records that describe a
    /// full civil date rather than a duration.
    pub calendar: Option<CalendarKind>,

    /// Time zone to interpret the fields in.
    pub time_zone: Option<TimeZone>,

    /// Locale to render the fields with.
    pub locale: Option<Locale>,
}

impl Components {

    /// A record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with only the year field set.
    pub fn years(n: i64) -> Self {
        Self { year: Some(n), ..Self::default() }
    }

    /// A record with only the quarter field set.
    pub fn quarters(n: i64) -> Self {
        Self { quarter: Some(n), ..Self::default() }
    }

    /// A record with only the month field set.
    pub fn months(n: i64) -> Self {
        Self { month: Some(n), ..Self::default() }
    }

    /// A record with only the week-of-year field set, which is how a span
    /// of whole weeks is expressed.
    pub fn weeks(n: i64) -> Self {
        Self { week_of_year: Some(n), ..Self::default() }
    }

    /// A record with only the day field set.
    pub fn days(n: i64) -> Self {
        Self { day: Some(n), ..Self::default() }
    }

    /// A record with only the hour field set.
    pub fn hours(n: i64) -> Self {
        Self { hour: Some(n), ..Self::default() }
    }

    /// A record with only the minute field set.
    pub fn minutes(n: i64) -> Self {
        Self { minute: Some(n), ..Self::default() }
    }

    /// A record with only the second field set.
    pub fn seconds(n: i64) -> Self {
        Self { second: Some(n), ..Self::default() }
    }

    /// A record with only the nanosecond field set.
    pub fn nanoseconds(n: i64) -> Self {
        Self { nanosecond: Some(n), ..Self::default() }
    }

    /// The value this record carries for a unit, if present.
    pub fn get(&self, unit: Unit) -> Option<i64> {
        match unit {
            Unit::Era => self.era,
            Unit::Year => self.year,
            Unit::Month => self.month,
            Unit::Day => self.day,
            Unit::Hour => self.hour,
            Unit::Minute => self.minute,
            Unit::Second => self.second,
            Unit::Nanosecond => self.nanosecond,
            Unit::Weekday => self.weekday,
            Unit::WeekdayOrdinal => self.weekday_ordinal,
            Unit::Quarter => self.quarter,
            Unit::WeekOfMonth => self.week_of_month,
            Unit::WeekOfYear => self.week_of_year,
            Unit::YearForWeekOfYear => self.year_for_week_of_year,
        }
    }

    /// Sets the value this record carries for a unit.
    pub fn set(&mut self, unit: Unit, value: Option<i64>) {
        let field = match unit {
            Unit::Era => &mut self.era,
            Unit::Year => &mut self.year,
            Unit::Month => &mut self.month,
            Unit::Day => &mut self.day,
            Unit::Hour => &mut self.hour,
            Unit::Minute => &mut self.minute,
            Unit::Second => &mut self.second,
            Unit::Nanosecond => &mut self.nanosecond,
            Unit::Weekday => &mut self.weekday,
            Unit::WeekdayOrdinal => &mut self.weekday_ordinal,
            Unit::Quarter => &mut self.quarter,
            Unit::WeekOfMonth => &mut self.week_of_month,
            Unit::WeekOfYear => &mut self.week_of_year,
            Unit::YearForWeekOfYear => &mut self.year_for_week_of_year,
        };
        *field = value;
    }

    /// A mapping of every present field, keyed by unit, in canonical order.
    /// Absent fields simply don’t appear; there is no sentinel value.
    pub fn to_map(&self) -> BTreeMap<Unit, i64> {
        let mut map = BTreeMap::new();
        for unit in Unit::ALL {
            if let Some(value) = self.get(unit) {
                let _ = map.insert(unit, value);
            }
        }
        map
    }

    /// Whether every unit field is absent.
    pub fn is_empty(&self) -> bool {
        Unit::ALL.iter().all(|&unit| self.get(unit).is_none())
            && self.era.is_none()
    }

    /// Returns whether the year this record carries is a leap year, using
    /// the Gregorian 400/100/4 rule.
    ///
    /// Evaluation needs a concrete, non-negative year: the two failure
    /// conditions are reported as distinct errors.
    pub fn is_leap_year(&self) -> Result<bool, ComponentsError> {
        let year = self.year.ok_or(ComponentsError::YearUndefined)?;
        if year < 0 {
            return Err(ComponentsError::YearNegative);
        }

        if year % 400 == 0 {
            Ok(true)
        }
        else if year % 100 == 0 {
            Ok(false)
        }
        else if year % 4 == 0 {
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Expresses this record in another unit: the number of whole `unit`s
    /// that elapse between `reference` and `reference` plus this record,
    /// computed with the region’s calendar.
    ///
    /// A calendar duration has no fixed length, so the answer depends on
    /// where the reference instant lands: one month from mid-January is 31
    /// days, one month from mid-February is 28 or 29.
    pub fn in_unit_at(&self, unit: Unit, reference: Instant, region: &Region) -> Option<i64> {
        let resolver = region.resolver();
        let shifted = resolver.add_components(self, reference, region)?;
        resolver.components_between(&[unit], reference, shifted, region).get(unit)
    }

    /// Expresses this record in another unit, relative to the current
    /// moment in the default region.
    pub fn in_unit(&self, unit: Unit) -> Option<i64> {
        self.in_unit_at(unit, Instant::now(), &Region::default_region())
    }

    /// Expresses this record in several units at once. All values derive
    /// from a single shifted instant, so they are consistent with each
    /// other: asking for hours and minutes splits the span rather than
    /// counting it twice.
    pub fn in_units_at(&self, units: &[Unit], reference: Instant, region: &Region) -> Option<BTreeMap<Unit, i64>> {
        let resolver = region.resolver();
        let shifted = resolver.add_components(self, reference, region)?;
        Some(resolver.components_between(units, reference, shifted, region).to_map())
    }

    /// Expresses this record in several units, relative to the current
    /// moment in the default region.
    pub fn in_units(&self, units: &[Unit]) -> Option<BTreeMap<Unit, i64>> {
        self.in_units_at(units, Instant::now(), &Region::default_region())
    }

    /// The current moment minus this record, in the default region.
    pub fn ago(&self) -> Option<crate::date::DateInRegion> {
        self.before(&Instant::now())
    }

    /// The current moment plus this record, in the default region.
    pub fn from_now(&self) -> Option<crate::date::DateInRegion> {
        self.from(&Instant::now())
    }

    /// The date that precedes the given one by this record.
    pub fn before<D: DateRepresentable>(&self, date: &D) -> Option<crate::date::DateInRegion> {
        let region = date.region();
        let shifted = region.resolver().add_components(&-self.clone(), date.instant(), &region)?;
        Some(crate::date::DateInRegion::new_in(shifted, region))
    }

    /// The date that follows the given one by this record.
    pub fn from<D: DateRepresentable>(&self, date: &D) -> Option<crate::date::DateInRegion> {
        let region = date.region();
        let shifted = region.resolver().add_components(self, date.instant(), &region)?;
        Some(crate::date::DateInRegion::new_in(shifted, region))
    }

    /// Applies the transform to both values, treating an absent one as
    /// zero. Both absent stays absent.
    fn bimap(a: Option<i64>, b: Option<i64>, transform: impl Fn(i64, i64) -> i64) -> Option<i64> {
        match (a, b) {
            (None, None) => None,
            _ => Some(transform(a.unwrap_or(0), b.unwrap_or(0))),
        }
    }

    /// Combines two records field-by-field with the given transform.
    fn combine(lhs: &Self, rhs: &Self, transform: impl Fn(i64, i64) -> i64) -> Self {
        let mut result = Self {
            era: Self::bimap(lhs.era, rhs.era, &transform),
            ..Self::default()
        };

        for unit in Unit::ALL {
            result.set(unit, Self::bimap(lhs.get(unit), rhs.get(unit), &transform));
        }

        result
    }
}

impl Neg for Components {
    type Output = Self;

    /// Negates every present field; absent fields stay absent. The
    /// calendar, time zone, and locale are dropped: a negated record is a
    /// pure duration.
    fn neg(self) -> Self {
        let mut result = Self {
            era: self.era.map(i64::neg),
            ..Self::default()
        };

        for unit in Unit::ALL {
            result.set(unit, self.get(unit).map(i64::neg));
        }

        result
    }
}

impl Add for Components {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::combine(&self, &rhs, i64::wrapping_add)
    }
}

impl Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}
