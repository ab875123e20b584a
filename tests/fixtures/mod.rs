// Test fixtures - reusable test data
// Provides consistent movie records and dates across test files

use chrono::NaiveDate;
use movie_countdown::models::movie::MovieRecord;

/// Build a minimal movie with the given id, title, and release date.
pub fn movie(id: u32, title: &str, release: &str) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        release_date: release.parse().expect("fixture date parses"),
        description: String::new(),
        genres: Vec::new(),
        director: None,
        cast: Vec::new(),
    }
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// The fixed "today" all filter tests run against: Feb 15, 2026.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    /// The day before `today`.
    pub fn yesterday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    }

    /// A week after `today`.
    pub fn next_week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 22).unwrap()
    }

    /// A month after `today`.
    pub fn next_month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }
}
