//! Localized names for eras, months, and weekdays.
//!
//! The tables themselves come from the `locale` crate; this module owns the
//! narrow contract the rest of the library consumes them through, plus a
//! per-thread cache of constructed tables so that repeated lookups don’t
//! rebuild them. The cache is thread-scoped on purpose: no locking, no
//! global singleton.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::region::Region;


/// Which kind of symbol a name is being requested for.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SymbolKind {

    /// Era names. Index 0 is the era before the common one, index 1 the
    /// common one.
    Era,

    /// Month names, indexed from 0 for January.
    Month,

    /// Weekday names, indexed from 0 for Sunday.
    Weekday,
}

/// The style a symbol name is rendered in.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SymbolStyle {

    /// The full name: “January”, “Saturday”.
    Default,

    /// The full name as used standalone, outside a formatted date.
    DefaultStandalone,

    /// The abbreviated name: “Jan”, “Sat”.
    Short,

    /// The abbreviated name as used standalone.
    StandaloneShort,

    /// The narrowest name, usually a single letter: “J”, “S”.
    VeryShort,

    /// The narrowest name as used standalone.
    StandaloneVeryShort,
}

impl SymbolStyle {
    fn is_short(self) -> bool {
        !matches!(self, Self::Default | Self::DefaultStandalone)
    }

    fn is_very_short(self) -> bool {
        matches!(self, Self::VeryShort | Self::StandaloneVeryShort)
    }
}


/// A **symbol provider** returns localized names for the parts of a date,
/// in a requested style, for a given region.
///
/// Indexes follow the conventions on [`SymbolKind`]; passing an index out
/// of range for the kind is a programming error, and implementations are
/// entitled to panic on one.
pub trait SymbolProvider {

    /// The localized name for the symbol at `index`.
    fn localized_name(&self, kind: SymbolKind, index: usize, style: SymbolStyle, region: &Region) -> String;

    /// The day-of-month number rendered in ordinal style: “3rd” in an
    /// English locale.
    fn ordinal_string(&self, number: i64, region: &Region) -> String;
}


/// The provider the library uses unless told otherwise.
pub fn default_provider() -> &'static dyn SymbolProvider {
    &LocaleSymbols
}


thread_local! {
    static TIME_TABLES: RefCell<HashMap<String, Rc<locale::Time>>> = RefCell::new(HashMap::new());
}

/// Runs a closure against the cached symbol tables for a locale,
/// constructing and caching them on first use in this thread.
fn with_tables<R>(region: &Region, f: impl FnOnce(&locale::Time) -> R) -> R {
    TIME_TABLES.with(|cell| {
        let mut cache = cell.borrow_mut();
        let tables = cache
            .entry(region.locale().identifier().to_string())
            .or_insert_with(|| Rc::new(load_tables(region)));
        f(tables)
    })
}

/// Builds the symbol tables for a region’s locale.
///
/// Only the English tables ship with the library; other locales fall back
/// to them here. Localisation for anything else plugs in through the
/// [`SymbolProvider`] trait rather than this function.
fn load_tables(_region: &Region) -> locale::Time {
    locale::Time::english()
}


/// Full weekday names, Sunday first. The `locale` crate exposes no working
/// accessor for its own long day-name table (`long_day_name` reads the
/// short one), so these are served locally.
const LONG_WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];


/// The default, `locale`-crate-backed symbol provider.
#[derive(Debug, Clone, Copy)]
pub struct LocaleSymbols;

impl SymbolProvider for LocaleSymbols {

    fn localized_name(&self, kind: SymbolKind, index: usize, style: SymbolStyle, region: &Region) -> String {
        let name = match kind {
            SymbolKind::Era => {
                let eras = if style.is_short() { ["BC", "AD"] }
                                          else { ["Before Christ", "Anno Domini"] };
                eras[index].to_string()
            },

            SymbolKind::Month => with_tables(region, |tables| {
                if style.is_short() { tables.short_month_name(index) }
                               else { tables.long_month_name(index) }
            }),

            SymbolKind::Weekday => {
                if style.is_short() {
                    with_tables(region, |tables| tables.short_day_name(index))
                }
                else {
                    LONG_WEEKDAY_NAMES[index].to_string()
                }
            },
        };

        if style.is_very_short() && kind != SymbolKind::Era {
            name.chars().next().map(String::from).unwrap_or(name)
        }
        else {
            name
        }
    }

    fn ordinal_string(&self, number: i64, _region: &Region) -> String {
        format!("{}{}", number, ordinal_suffix(number))
    }
}

/// The English ordinal suffix for a number: “st”, “nd”, “rd”, or “th”.
/// The teens are all “th”, 11th to 13th included.
fn ordinal_suffix(number: i64) -> &'static str {
    let number = number.abs();
    match (number % 10, number % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
