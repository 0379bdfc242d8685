#![crate_name = "zonedate"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Region-aware calendar arithmetic: absolute instants, the regions
//! (calendar, time zone, locale) that give them a civil reading, and the
//! signed component records used to measure and shift them.
//!
//! # Examples
//!
//! ```
//! use zonedate::{Components, DateInRegion, DateRepresentable, Region};
//!
//! let date = DateInRegion::from_fields(2019, 6, 29, 10, 0, 0, 0, Region::utc());
//! assert_eq!(date.weekday(), 7);
//! assert!(date.is_in_weekend());
//!
//! let later = date + Components::months(1) + Components::days(2);
//! assert_eq!((later.month(), later.day()), (7, 31));
//! ```

pub mod civil;
pub mod components;
pub mod date;
pub mod fast;
pub mod instant;
pub mod interval;
pub mod region;
pub mod resolver;
pub mod symbols;

mod system;
mod util;

pub use crate::components::{Components, ComponentsError, Unit};
pub use crate::date::{DateInRegion, DateRepresentable, Rounding};
pub use crate::instant::Instant;
pub use crate::interval::DateInterval;
pub use crate::region::{CalendarKind, Locale, Region, TimeZone};
