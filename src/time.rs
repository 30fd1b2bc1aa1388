//! Time abstraction traits for platform-agnostic timing.
//!
//! The game never sleeps. Debounce and the intro screens are both driven by
//! comparing instants on later ticks, so all the crate needs from the platform
//! is a monotonic clock.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Returns true once at least `interval` has passed between `since` and `now`.
#[inline]
pub(crate) fn has_elapsed<I: TimeInstant>(since: I, now: I, interval: I::Duration) -> bool {
    now.duration_since(since).as_millis() >= interval.as_millis()
}
