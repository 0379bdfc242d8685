//! Closed spans of time between two instants.

use std::cmp::Ordering;

use crate::components::{Components, Unit};
use crate::date::{DateInRegion, DateRepresentable};
use crate::instant::Instant;
use crate::region::Region;


/// The units an interval’s component breakdown is allowed to contain.
///
/// An interval’s length is a fixed elapsed duration, so months and years,
/// which only have a length relative to where they fall in the calendar,
/// are not meaningful parts of its breakdown.
pub(crate) const INTERVAL_UNITS: [Unit; 5] = [
    Unit::Nanosecond, Unit::Second, Unit::Minute, Unit::Hour, Unit::Day,
];


/// A **date interval** is a closed [start, end] span on the timeline,
/// carrying the region of its start for component extraction.
///
/// The endpoints are stored exactly as given: building an interval from a
/// misordered pair is the caller’s mistake, and shows up as a negative
/// duration rather than a reordering or a failure.
#[derive(Debug, Clone)]
pub struct DateInterval {
    start: Instant,
    end: Instant,
    region: Region,
}

impl DateInterval {

    /// Creates an interval between two dates, in the start’s region.
    pub fn new<S, E>(start: &S, end: &E) -> Self
    where S: DateRepresentable, E: DateRepresentable {
        Self {
            start: start.instant(),
            end: end.instant(),
            region: start.region(),
        }
    }

    /// Creates an interval of a fixed number of seconds from a start date.
    pub fn with_duration<S: DateRepresentable>(start: &S, seconds: i64) -> Self {
        Self {
            start: start.instant(),
            end: start.instant().plus_seconds(seconds),
            region: start.region(),
        }
    }

    /// Creates an interval from a start date to the date a components
    /// record lands on. `None` if the addition is calendrically undefined.
    pub fn with_components<S: DateRepresentable>(start: &S, components: &Components) -> Option<Self> {
        let region = start.region();
        let end = region.resolver().add_components(components, start.instant(), &region)?;
        Some(Self { start: start.instant(), end, region })
    }

    /// The starting instant.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// The ending instant.
    pub fn end(&self) -> Instant {
        self.end
    }

    /// The region the interval extracts components in.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The starting endpoint as a date in the interval’s region.
    pub fn start_date(&self) -> DateInRegion {
        DateInRegion::new_in(self.start, self.region.clone())
    }

    /// The ending endpoint as a date in the interval’s region.
    pub fn end_date(&self) -> DateInRegion {
        DateInRegion::new_in(self.end, self.region.clone())
    }

    /// The length of the interval in whole seconds. Negative when the
    /// endpoints were given in reverse order.
    pub fn duration(&self) -> i64 {
        self.end.seconds_since(self.start)
    }

    /// The length of the interval in nanoseconds.
    pub fn duration_nanoseconds(&self) -> i64 {
        self.end.nanoseconds_since(self.start)
    }

    /// The interval broken into days, hours, minutes, seconds, and
    /// nanoseconds. Larger units never appear: see [`INTERVAL_UNITS`].
    pub fn components(&self) -> Components {
        self.region.resolver().components_between(&INTERVAL_UNITS, self.start, self.end, &self.region)
    }

    /// The seconds-equivalent of a components record, projected at this
    /// interval’s start, for comparing the two.
    fn components_duration(&self, components: &Components) -> Option<i64> {
        components.in_unit_at(Unit::Second, self.start, &self.region)
    }
}

// Intervals compare by endpoints alone, never by region.
impl PartialEq for DateInterval {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for DateInterval { }

// An interval measures against a components record by duration: the span
// in seconds against the record’s seconds-equivalent.
impl PartialEq<Components> for DateInterval {
    fn eq(&self, other: &Components) -> bool {
        self.components_duration(other) == Some(self.duration())
    }
}

impl PartialOrd<Components> for DateInterval {
    fn partial_cmp(&self, other: &Components) -> Option<Ordering> {
        let duration = self.components_duration(other)?;
        self.duration().partial_cmp(&duration)
    }
}

impl PartialEq<DateInterval> for Components {
    fn eq(&self, other: &DateInterval) -> bool {
        other == self
    }
}

impl PartialOrd<DateInterval> for Components {
    fn partial_cmp(&self, other: &DateInterval) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
