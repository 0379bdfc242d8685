//! Exact points on a timeline.

use std::fmt;

use crate::system::sys_time;
use crate::util::split_cycles;


/// Number of nanoseconds in a second.
pub(crate) const NANOS_IN_SECOND: i64 = 1_000_000_000;

/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 32-bit integer for the nanosecond of that second. The
/// nanosecond field is always in the range 0 to 999,999,999, even for
/// instants before the epoch, so ordering derives directly from the fields.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanoseconds: i32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ns(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, along with the number of nanoseconds so far this second.
    ///
    /// A nanosecond value outside the range of a single second gets carried
    /// into the seconds, so the result is always normalised.
    pub fn at_ns(seconds: i64, nanoseconds: i64) -> Self {
        let (carry, nanos) = split_cycles(nanoseconds, NANOS_IN_SECOND);
        Self { seconds: seconds + carry, nanoseconds: nanos as i32 }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, nanoseconds) = unsafe { sys_time() };
        Self { seconds, nanoseconds }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant.
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Returns the nanosecond of the second at this instant.
    pub fn nanoseconds(self) -> i32 {
        self.nanoseconds
    }

    /// Returns this instant shifted forwards (or, for a negative argument,
    /// backwards) by a number of whole seconds.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        Self { seconds: self.seconds + seconds, nanoseconds: self.nanoseconds }
    }

    /// Returns this instant shifted by a number of nanoseconds, carrying
    /// overflow into the seconds.
    pub fn plus_nanoseconds(self, nanoseconds: i64) -> Self {
        Self::at_ns(self.seconds, self.nanoseconds as i64 + nanoseconds)
    }

    /// The number of whole seconds between this instant and another,
    /// truncating towards zero.
    pub fn seconds_since(self, earlier: Self) -> i64 {
        let mut seconds = self.seconds - earlier.seconds;
        let nanos = self.nanoseconds - earlier.nanoseconds;

        // Truncate towards zero, whichever side of the epoch we are on.
        if seconds > 0 && nanos < 0 {
            seconds -= 1;
        }
        else if seconds < 0 && nanos > 0 {
            seconds += 1;
        }

        seconds
    }

    /// The total number of nanoseconds between this instant and another.
    pub fn nanoseconds_since(self, earlier: Self) -> i64 {
        (self.seconds - earlier.seconds) * NANOS_IN_SECOND
            + (self.nanoseconds - earlier.nanoseconds) as i64
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanoseconds)
    }
}


#[cfg(test)]
mod test {
    use super::Instant;

    #[test]
    fn nanosecond_carry() {
        assert_eq!(Instant::at_ns(0, 1_500_000_000), Instant::at_ns(1, 500_000_000));
    }

    #[test]
    fn negative_nanoseconds_normalise() {
        assert_eq!(Instant::at_ns(1, -250_000_000), Instant::at_ns(0, 750_000_000));
    }

    #[test]
    fn ordering() {
        assert!(Instant::at_ns(10, 1) > Instant::at(10));
        assert!(Instant::at(-5) < Instant::at_epoch());
    }

    #[test]
    fn seconds_since_truncates() {
        let start = Instant::at_ns(10, 900_000_000);
        let end = Instant::at_ns(12, 100_000_000);
        assert_eq!(end.seconds_since(start), 1);
        assert_eq!(start.seconds_since(end), -1);
    }
}
