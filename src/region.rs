//! Regions: the calendar, time zone, and locale needed to interpret an
//! absolute instant as civil date and time fields.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::components::Components;
use crate::date::DateInRegion;
use crate::instant::Instant;
use crate::resolver::{CalendarResolver, Gregorian};
use crate::system::{sys_timezone, sys_utc_offset};


/// The calendar system a region interprets instants with.
///
/// Only the proleptic Gregorian calendar is implemented by this library;
/// the enum exists so that a region can carry the identity of another
/// calendar system whose computations are delegated to an external
/// [`CalendarResolver`].
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum CalendarKind {
    Gregorian,
}

impl CalendarKind {

    /// The identifier for this calendar kind.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
        }
    }

    /// The resolver that performs this calendar’s computations.
    pub fn resolver(self) -> &'static dyn CalendarResolver {
        match self {
            Self::Gregorian => &Gregorian,
        }
    }
}


/// A **time zone** as this library models it: an identifier plus a fixed
/// offset from UTC in seconds.
///
/// Maintaining the time zone database is explicitly not this library’s
/// job: zones with transition histories belong to an external source, and
/// arrive here flattened to the offset in effect.
#[derive(Debug, Clone)]
pub struct TimeZone {
    id: Cow<'static, str>,
    offset: i64,
}

impl TimeZone {

    /// The UTC time zone, with no offset.
    pub fn utc() -> Self {
        Self { id: Cow::Borrowed("UTC"), offset: 0 }
    }

    /// A time zone at a fixed offset from UTC, in seconds.
    pub fn fixed(id: impl Into<Cow<'static, str>>, offset_seconds: i64) -> Self {
        Self { id: id.into(), offset: offset_seconds }
    }

    /// The system’s current time zone: the name discovered from the OS, at
    /// the offset currently in effect. Falls back to UTC when the system
    /// gives no answer.
    pub fn current() -> Self {
        match sys_timezone() {
            Some(name) => Self { id: Cow::Owned(name), offset: sys_utc_offset() },
            None => Self::utc(),
        }
    }

    /// This zone’s identifier, such as “Europe/London”.
    pub fn identifier(&self) -> &str {
        &self.id
    }

    /// The offset from UTC, in seconds.
    pub fn offset_seconds(&self) -> i64 {
        self.offset
    }
}

// Zones compare by identifier alone: two values for the same zone are the
// same zone, even if one was captured at a different offset.
impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TimeZone { }

impl Hash for TimeZone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}


/// A **locale** identifier, such as “en_GB”. The locale itself (symbol
/// tables, ordinal rules) lives behind the `symbols` module; a region only
/// carries the identity.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Locale {
    id: Cow<'static, str>,
}

impl Locale {

    /// The English locale.
    pub fn english() -> Self {
        Self { id: Cow::Borrowed("en") }
    }

    /// A locale with the given identifier.
    pub fn named(id: impl Into<Cow<'static, str>>) -> Self {
        Self { id: id.into() }
    }

    /// The locale the system reports, read from the `LANG` environment
    /// variable, ignoring any encoding suffix. English when unset.
    pub fn current() -> Self {
        match std::env::var("LANG") {
            Ok(lang) if !lang.is_empty() => {
                let id = lang.split('.').next().unwrap_or(&lang).to_string();
                Self { id: Cow::Owned(id) }
            },
            _ => Self::english(),
        }
    }

    /// This locale’s identifier.
    pub fn identifier(&self) -> &str {
        &self.id
    }
}


static DEFAULT_REGION: OnceLock<Region> = OnceLock::new();

/// A **region** bundles the calendar, time zone, and locale needed to
/// interpret an absolute instant: the same instant reads as different civil
/// fields under different regions, while staying the same physical moment.
///
/// Regions are cheap values: construct them on demand and copy them around.
/// Equality considers only the identifiers of the three parts, never any
/// captured state such as a zone’s current offset.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct Region {
    calendar: CalendarKind,
    time_zone: TimeZone,
    locale: Locale,
}

impl Region {

    /// Creates a region from its three parts.
    pub fn new(calendar: CalendarKind, time_zone: TimeZone, locale: Locale) -> Self {
        Self { calendar, time_zone, locale }
    }

    /// The UTC region: Gregorian calendar, no offset, the system locale.
    pub fn utc() -> Self {
        Self::new(CalendarKind::Gregorian, TimeZone::utc(), Locale::current())
    }

    /// A region with every part set to the live system configuration.
    pub fn current() -> Self {
        Self::new(CalendarKind::Gregorian, TimeZone::current(), Locale::current())
    }

    /// The region assigned to values constructed without an explicit one.
    ///
    /// This is the configured default if [`Region::set_default`] was
    /// called, and the UTC region otherwise.
    pub fn default_region() -> Self {
        DEFAULT_REGION.get().cloned().unwrap_or_else(Self::utc)
    }

    /// Configures the process-wide default region. May be called at most
    /// once, before the default is first used; returns `Err` with the
    /// rejected region if a default has already been fixed.
    pub fn set_default(region: Region) -> Result<(), Region> {
        DEFAULT_REGION.set(region)
    }

    /// Derives a region from the parts a [`Components`] record carries:
    /// the calendar defaults to Gregorian, the time zone to the system’s
    /// current zone, and the locale to the system’s current locale.
    pub fn from_components(components: &Components) -> Self {
        let calendar = components.calendar.unwrap_or(CalendarKind::Gregorian);
        let time_zone = components.time_zone.clone().unwrap_or_else(TimeZone::current);
        let locale = components.locale.clone().unwrap_or_else(Locale::current);
        Self::new(calendar, time_zone, locale)
    }

    /// The calendar kind of this region.
    pub fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    /// The time zone of this region.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// The locale of this region.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The resolver that performs calendar computations for this region.
    pub fn resolver(&self) -> &'static dyn CalendarResolver {
        self.calendar.resolver()
    }

    /// The current moment, expressed in this region.
    pub fn now_in_this_region(&self) -> DateInRegion {
        DateInRegion::new_in(Instant::now(), self.clone())
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{calendar='{}', timezone='{}', locale='{}'}}",
               self.calendar.identifier(),
               self.time_zone.identifier(),
               self.locale.identifier())
    }
}
