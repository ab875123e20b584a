//! Per-second recomputation schedule
//!
//! A `Ticker` is armed when a movie is selected and disarmed when the
//! selection is cleared, so the recompute cadence is owned by exactly one
//! selection at a time. Disarming drops the schedule outright; a stale
//! tick can never fire for a movie that is no longer showing. The UI loop
//! is single-threaded, so ticks are strictly serialized: one `due` check
//! per frame, one recomputation per elapsed second.

use chrono::{DateTime, Local};

/// Cancellable once-per-second schedule for a single countdown target.
#[derive(Debug, Default)]
pub struct Ticker {
    armed_for: Option<ArmedSchedule>,
}

#[derive(Debug)]
struct ArmedSchedule {
    movie_id: u32,
    next_due: DateTime<Local>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the schedule for `movie_id`. Any previously armed schedule is
    /// replaced; the first tick is due immediately (the countdown must
    /// show a value the moment the modal opens).
    pub fn arm(&mut self, movie_id: u32, now: DateTime<Local>) {
        self.armed_for = Some(ArmedSchedule {
            movie_id,
            next_due: now,
        });
    }

    /// Drop the schedule. Subsequent `due` calls report nothing.
    pub fn disarm(&mut self) {
        self.armed_for = None;
    }

    pub fn is_armed_for(&self, movie_id: u32) -> bool {
        self.armed_for
            .as_ref()
            .is_some_and(|schedule| schedule.movie_id == movie_id)
    }

    /// Report whether a recomputation is due at `now`, and if so advance
    /// the schedule one second. At most one tick is reported per call even
    /// if the clock jumped several seconds forward; the next tick is
    /// anchored to `now` so a jump does not cause a burst of catch-up
    /// ticks.
    pub fn due(&mut self, now: DateTime<Local>) -> bool {
        let Some(schedule) = self.armed_for.as_mut() else {
            return false;
        };
        if now < schedule.next_due {
            return false;
        }
        schedule.next_due = now + chrono::Duration::seconds(1);
        true
    }
}
