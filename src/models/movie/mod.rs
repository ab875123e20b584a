// Movie module
// Wire-contract movie record as delivered by the catalog source

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// An upcoming movie as supplied by the catalog source.
///
/// Records are read-only for the whole session: loaded once, never
/// mutated, discarded on exit. Duplicate `id` values are not
/// deduplicated; `id` is only used for deterministic cosmetic
/// variation (poster gradient selection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: u32,
    pub title: String,
    /// Calendar date with no time component, interpreted as local midnight.
    pub release_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Absent or null genres deserialize to an empty list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub director: Option<String>,
    /// Absent or null cast deserializes to an empty list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<String>,
}

/// Treat an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl MovieRecord {
    /// The release instant the countdown targets: local midnight of the
    /// release date. Around DST transitions where midnight does not
    /// exist, the earliest valid local time on that date is used.
    pub fn release_at_midnight(&self) -> DateTime<Local> {
        let midnight = self.release_date.and_hms_opt(0, 0, 0).expect("valid midnight");
        match Local.from_local_datetime(&midnight) {
            chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => dt,
            chrono::LocalResult::None => {
                // Skipped hour: fall forward to the first representable time
                let mut probe = midnight;
                loop {
                    probe += chrono::Duration::minutes(30);
                    match Local.from_local_datetime(&probe) {
                        chrono::LocalResult::Single(dt)
                        | chrono::LocalResult::Ambiguous(dt, _) => break dt,
                        chrono::LocalResult::None => continue,
                    }
                }
            }
        }
    }

    /// Poster initials: first letter of each title word, at most three,
    /// uppercased. "The Matrix Reloaded" becomes "TMR".
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(3)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
