//! Remote catalog fetch
//!
//! Single blocking GET against the configured movie-listing endpoint. The
//! caller runs this off the UI thread; a load failure is terminal for the
//! session (no automatic retry, no partial catalog).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::movie::MovieRecord;

/// Why a catalog load failed. Surfaced verbatim on the error screen.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error while fetching the movie catalog: {0}")]
    Http(#[from] reqwest::Error),
    #[error("movie catalog endpoint returned HTTP status {0}")]
    Status(StatusCode),
    #[error("movie catalog response is not a valid movie list: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("movie catalog load was interrupted")]
    Interrupted,
}

pub struct CatalogFetcher {
    client: Client,
}

impl CatalogFetcher {
    pub fn new() -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch and decode the movie list from `url`.
    pub fn fetch_movies(&self, url: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        log::info!("Fetching movie catalog from {}", url);

        let response = self.client.get(url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::Status(status));
        }

        let body = response.text()?;
        let movies: Vec<MovieRecord> = serde_json::from_str(&body)?;

        log::info!("Fetched {} movie(s) from remote catalog", movies.len());
        Ok(movies)
    }
}
