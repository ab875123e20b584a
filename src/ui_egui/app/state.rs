//! Application state: catalog load phase and the selection state machine.

use chrono::{DateTime, Local};

use crate::models::movie::MovieRecord;
use crate::services::countdown::{self, CountdownValue, Ticker};

/// Where the session's catalog stands. `Failed` is terminal: no retry,
/// no partial catalog.
pub enum CatalogState {
    Loading,
    Ready(Vec<MovieRecord>),
    Failed(String),
}

/// The movie currently opened in the countdown modal, or none.
///
/// Owns the per-second recompute schedule: opening a selection arms the
/// ticker for that movie, closing (or replacing) a selection disarms it
/// first, so a stale schedule can never outlive the view it belongs to.
pub struct SelectionController {
    selected: Option<MovieRecord>,
    ticker: Ticker,
    countdown: CountdownValue,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            selected: None,
            ticker: Ticker::new(),
            countdown: CountdownValue::ZERO,
        }
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&MovieRecord> {
        self.selected.as_ref()
    }

    pub fn countdown(&self) -> CountdownValue {
        self.countdown
    }

    /// `NoSelection -> Selected(m)`. Any existing schedule is disarmed
    /// before the new one is armed; the countdown is computed immediately
    /// so the modal never opens on a blank value.
    pub fn open(&mut self, movie: MovieRecord, now: DateTime<Local>) {
        self.ticker.disarm();
        self.ticker.arm(movie.id, now);
        // Consume the immediate tick; the next one lands a second from now
        self.ticker.due(now);
        self.countdown = countdown::remaining_until_release(&movie, now);
        self.selected = Some(movie);
    }

    /// `Selected(m) -> NoSelection`. Disarms the schedule.
    pub fn close(&mut self) {
        self.ticker.disarm();
        self.selected = None;
    }

    /// Recompute the countdown if a second has elapsed. Returns true when
    /// the displayed value may have changed and a repaint is warranted.
    pub fn tick(&mut self, now: DateTime<Local>) -> bool {
        let Some(movie) = self.selected.as_ref() else {
            return false;
        };
        if !self.ticker.due(now) {
            return false;
        }
        self.countdown = countdown::remaining_until_release(movie, now);
        true
    }
}
