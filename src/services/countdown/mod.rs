//! Countdown calculation
//!
//! Decomposes the time remaining until a movie's release (local midnight of
//! the release date) into days/hours/minutes/seconds. Total-duration
//! arithmetic only; no calendar-aware month/year math, no leap-second
//! handling. The wall clock may jump and the next recomputation simply
//! reflects whatever it reads.

pub mod palette;
pub mod ticker;

pub use ticker::Ticker;

use chrono::{DateTime, Local};

use crate::models::movie::MovieRecord;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * 60;
const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Time remaining until a release, floored at each granularity and clamped
/// to all-zero once the release has passed. Recomputed once per second
/// while a movie is selected; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownValue {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownValue {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total seconds represented by the tuple.
    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

/// Compute the countdown to `target` (local midnight of the movie's
/// release date) as seen from `now`.
pub fn remaining(target: DateTime<Local>, now: DateTime<Local>) -> CountdownValue {
    let diff = target.signed_duration_since(now).num_seconds();
    if diff <= 0 {
        return CountdownValue::ZERO;
    }

    CountdownValue {
        days: diff / SECS_PER_DAY,
        hours: (diff % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (diff % SECS_PER_HOUR) / SECS_PER_MINUTE,
        seconds: diff % SECS_PER_MINUTE,
    }
}

/// Convenience wrapper: countdown to a movie's release midnight.
pub fn remaining_until_release(movie: &MovieRecord, now: DateTime<Local>) -> CountdownValue {
    remaining(movie.release_at_midnight(), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn two_days_out_at_midnight() {
        // releaseDate 2026-03-01, now 2026-02-27T00:00:00
        let target = local(2026, 3, 1, 0, 0, 0);
        let now = local(2026, 2, 27, 0, 0, 0);
        let value = remaining(target, now);
        assert_eq!(
            value,
            CountdownValue { days: 2, hours: 0, minutes: 0, seconds: 0 }
        );
    }

    #[test]
    fn decomposes_mixed_duration() {
        let target = local(2026, 3, 1, 0, 0, 0);
        let now = local(2026, 2, 27, 21, 58, 57);
        let value = remaining(target, now);
        assert_eq!(
            value,
            CountdownValue { days: 1, hours: 2, minutes: 1, seconds: 3 }
        );
    }

    #[test]
    fn clamps_to_zero_once_passed() {
        let target = local(2026, 3, 1, 0, 0, 0);
        let now = local(2026, 3, 1, 0, 0, 1);
        assert!(remaining(target, now).is_zero());
        // Stays zero arbitrarily far past the target
        let much_later = local(2027, 6, 14, 12, 0, 0);
        assert!(remaining(target, much_later).is_zero());
    }

    #[test]
    fn exact_target_instant_is_zero() {
        let target = local(2026, 3, 1, 0, 0, 0);
        assert!(remaining(target, target).is_zero());
    }

    #[test]
    fn one_second_before_target() {
        let target = local(2026, 3, 1, 0, 0, 0);
        let now = local(2026, 2, 28, 23, 59, 59);
        assert_eq!(
            remaining(target, now),
            CountdownValue { days: 0, hours: 0, minutes: 0, seconds: 1 }
        );
    }

    #[test]
    fn non_increasing_over_a_minute_of_ticks() {
        let target = local(2026, 3, 1, 0, 0, 0);
        let mut now = local(2026, 2, 28, 23, 59, 30);
        let mut previous = remaining(target, now).total_seconds();
        for _ in 0..60 {
            now += chrono::Duration::seconds(1);
            let current = remaining(target, now).total_seconds();
            assert!(current <= previous);
            previous = current;
        }
        assert_eq!(previous, 0);
    }
}
