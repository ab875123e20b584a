//! Upcoming-movie filtering
//!
//! Pure predicate logic shared by the grid view: a movie is shown when it
//! is still ahead of us on the calendar and its title matches the search
//! box. No side effects; the app re-derives the list every frame.

use chrono::NaiveDate;

use crate::models::movie::MovieRecord;

/// Filter `movies` down to the upcoming entries whose titles match `query`.
///
/// A movie is included iff:
/// - its release date is strictly later than `today` (a release date equal
///   to `today` is excluded - the countdown would already read zero), and
/// - its title, case-folded, contains the case-folded `query` as a
///   substring. An empty query matches every title.
///
/// Input order is preserved; no re-sorting happens here.
pub fn upcoming_matching<'a>(
    movies: &'a [MovieRecord],
    query: &str,
    today: NaiveDate,
) -> Vec<&'a MovieRecord> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|movie| movie.release_date > today)
        .filter(|movie| needle.is_empty() || movie.title.to_lowercase().contains(&needle))
        .collect()
}
