//! Fetching of the two source documents.

use std::time::Duration;

use futures::future::try_join;
use reqwest::Client;
use tracing::{debug, error, info};

use super::{DataSource, LoadError};
use crate::models::Catalog;

/// HTTP request timeout in seconds.
/// A timeout surfaces as a load failure like any other network error.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Reads documents from files or over HTTP.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new() -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(LoadError::Client)?;

        Ok(Self { client })
    }

    /// Read the full text of a document.
    pub async fn fetch_text(&self, source: &DataSource) -> Result<String, LoadError> {
        debug!(%source, "Fetching document");
        match source {
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::Io {
                    path: path.clone(),
                    source: e,
                }),
            DataSource::Url(url) => self.fetch_url(url).await,
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<String, LoadError> {
        let network = |e| LoadError::Network {
            url: url.to_string(),
            source: e,
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let response = Self::check_response(url, response).await?;
        response.text().await.map_err(network)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, LoadError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(LoadError::from_status(url, status, &body))
        }
    }
}

/// Fetch both documents concurrently and build the catalog.
///
/// Either fetch failing, or either document failing to parse, fails the
/// whole load; no partial catalog is ever produced.
pub async fn load_catalog(
    client: &SourceClient,
    roster: &DataSource,
    trips: &DataSource,
) -> Result<Catalog, LoadError> {
    info!(%roster, %trips, "Loading catalog");

    let result = fetch_and_parse(client, roster, trips).await;
    match &result {
        Ok(catalog) => info!(
            students = catalog.roster().len(),
            trips = catalog.trip_count(),
            "Catalog loaded"
        ),
        Err(e) => error!(error = %e, "Failed to load catalog"),
    }

    result
}

async fn fetch_and_parse(
    client: &SourceClient,
    roster: &DataSource,
    trips: &DataSource,
) -> Result<Catalog, LoadError> {
    let (roster_json, trips_json) =
        try_join(client.fetch_text(roster), client.fetch_text(trips)).await?;
    Catalog::from_json(&roster_json, &trips_json)
}
