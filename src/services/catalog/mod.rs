//! Catalog loading and filtering
//!
//! The catalog is loaded exactly once per session, from either the bundled
//! JSON asset or a configured remote endpoint. Remote loads run on a
//! background thread and deliver their result over a channel so the UI
//! thread can keep painting a loading indicator; bundled loads resolve
//! immediately.

pub mod fetcher;
pub mod filter;

use std::sync::mpsc::{self, Receiver};
use std::thread;

pub use fetcher::{CatalogError, CatalogFetcher};
pub use filter::upcoming_matching;

use crate::models::movie::MovieRecord;

/// Movie list compiled into the binary, used when no endpoint is configured.
const BUNDLED_CATALOG: &str = include_str!("../../../data/movies.json");

/// Where the session's movie list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The JSON asset bundled at compile time.
    Bundled,
    /// A single HTTP GET against a movie-listing endpoint.
    Remote(String),
}

/// An in-flight or settled catalog load, polled by the UI each frame.
pub enum CatalogLoad {
    Pending(Receiver<Result<Vec<MovieRecord>, CatalogError>>),
    /// Already settled; `None` once the result has been taken.
    Ready(Option<Result<Vec<MovieRecord>, CatalogError>>),
}

impl CatalogLoad {
    /// Kick off a load for `source`. Bundled catalogs settle immediately;
    /// remote catalogs spawn a fetch thread and settle on a later poll.
    pub fn start(source: CatalogSource) -> Self {
        match source {
            CatalogSource::Bundled => Self::Ready(Some(load_bundled())),
            CatalogSource::Remote(url) => {
                let (tx, rx) = mpsc::channel();
                thread::spawn(move || {
                    let result = CatalogFetcher::new()
                        .and_then(|fetcher| fetcher.fetch_movies(&url));
                    // The receiver is gone if the app exited mid-load
                    let _ = tx.send(result);
                });
                Self::Pending(rx)
            }
        }
    }

    /// Take the settled result if the load has finished. Returns `None`
    /// while a remote fetch is still in flight.
    pub fn poll(&mut self) -> Option<Result<Vec<MovieRecord>, CatalogError>> {
        match self {
            Self::Ready(result) => result.take(),
            Self::Pending(rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(mpsc::TryRecvError::Empty) => None,
                Err(mpsc::TryRecvError::Disconnected) => {
                    // Fetch thread died without reporting
                    Some(Err(CatalogError::Interrupted))
                }
            },
        }
    }
}

fn load_bundled() -> Result<Vec<MovieRecord>, CatalogError> {
    let movies: Vec<MovieRecord> = serde_json::from_str(BUNDLED_CATALOG)?;
    log::info!("Loaded {} movie(s) from the bundled catalog", movies.len());
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses_and_is_non_empty() {
        let movies = load_bundled().expect("bundled catalog must parse");
        assert!(!movies.is_empty());
        // Every bundled record carries a non-empty title
        assert!(movies.iter().all(|m| !m.title.trim().is_empty()));
    }

    #[test]
    fn bundled_load_settles_on_first_poll() {
        let mut load = CatalogLoad::start(CatalogSource::Bundled);
        let result = load.poll().expect("bundled load settles immediately");
        assert!(result.is_ok());
    }

    #[test]
    fn remote_load_against_unroutable_host_reports_http_error() {
        // Reserved TEST-NET-1 address; connection fails fast with no retry
        let mut load = CatalogLoad::start(CatalogSource::Remote(
            "https://192.0.2.1/movies".to_string(),
        ));
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(30);
        loop {
            if let Some(result) = load.poll() {
                let err = result.unwrap_err();
                assert!(matches!(err, CatalogError::Http(_)));
                break;
            }
            assert!(
                std::time::Instant::now() < deadline,
                "fetch thread never settled"
            );
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
    }
}
