// Property-based tests for countdown decomposition

use chrono::{Duration, NaiveDate, TimeZone};
use movie_countdown::services::countdown::{remaining, CountdownValue};
use proptest::prelude::*;

const SECS_PER_DAY: i64 = 86_400;

/// A fixed, DST-free anchor instant; offsets are applied in whole seconds
/// so every generated case is unambiguous in any local timezone.
fn anchor() -> chrono::DateTime<chrono::Local> {
    chrono::Local
        .with_ymd_and_hms(2026, 6, 15, 12, 0, 0)
        .single()
        .expect("anchor is unambiguous")
}

proptest! {
    /// hours, minutes, and seconds always land in their clock ranges.
    #[test]
    fn prop_decomposition_fields_stay_in_range(diff in -SECS_PER_DAY * 400..SECS_PER_DAY * 400) {
        let now = anchor();
        let target = now + Duration::seconds(diff);
        let value = remaining(target, now);

        prop_assert!(value.days >= 0);
        prop_assert!((0..=23).contains(&value.hours));
        prop_assert!((0..=59).contains(&value.minutes));
        prop_assert!((0..=59).contains(&value.seconds));
    }

    /// Reconstructing the total from the tuple reproduces the true diff
    /// exactly for future targets (whole-second inputs, floor division),
    /// and zero for past ones.
    #[test]
    fn prop_reconstruction_matches_diff_within_flooring_bound(diff in -SECS_PER_DAY * 400..SECS_PER_DAY * 400) {
        let now = anchor();
        let target = now + Duration::seconds(diff);
        let value = remaining(target, now);

        let expected = diff.max(0);
        let reconstructed = value.total_seconds();
        prop_assert!(reconstructed <= expected);
        prop_assert!(expected - reconstructed < 1, "flooring may lose under one second");
    }

    /// For a fixed target, the countdown never increases as `now`
    /// advances, and once it reaches zero it stays there.
    #[test]
    fn prop_non_increasing_until_zero(
        start_offset in 0..SECS_PER_DAY * 30,
        steps in prop::collection::vec(1..3_600i64, 1..40),
    ) {
        let target = anchor() + Duration::seconds(start_offset);
        let mut now = anchor();
        let mut previous = remaining(target, now).total_seconds();
        let mut seen_zero = remaining(target, now).is_zero();

        for step in steps {
            now += Duration::seconds(step);
            let value = remaining(target, now);
            prop_assert!(value.total_seconds() <= previous);
            if seen_zero {
                prop_assert!(value.is_zero(), "countdown must stay frozen at zero");
            }
            seen_zero = seen_zero || value.is_zero();
            previous = value.total_seconds();
        }
    }

    /// Whole-day diffs decompose into days only.
    #[test]
    fn prop_whole_days_have_no_remainder(days in 1..400i64) {
        let now = anchor();
        let target = now + Duration::days(days);
        let value = remaining(target, now);
        prop_assert_eq!(value, CountdownValue { days, hours: 0, minutes: 0, seconds: 0 });
    }
}

#[test]
fn release_date_two_days_out_counts_two_whole_days() {
    // releaseDate 2026-03-01 seen from 2026-02-27T00:00:00 local
    let release: NaiveDate = "2026-03-01".parse().unwrap();
    let target = chrono::Local
        .from_local_datetime(&release.and_hms_opt(0, 0, 0).unwrap())
        .single()
        .expect("midnight is unambiguous on this date");
    let now = chrono::Local
        .with_ymd_and_hms(2026, 2, 27, 0, 0, 0)
        .single()
        .unwrap();

    assert_eq!(
        remaining(target, now),
        CountdownValue { days: 2, hours: 0, minutes: 0, seconds: 0 }
    );
}
