//! Category fetches against the TMDB list endpoints
//!
//! Every category is fetched by its own task. Tasks never wait on each other
//! and never retry; each one delivers exactly one [`CategoryOutcome`] over the
//! channel, in whatever order the responses arrive.

use crate::endpoints::Endpoint;
use crate::renderer::{render_error, render_posters};
use crate::surface::ViewSurface;
use crate::types::{Category, MediaRecord, ResultsEnvelope};
use reqwest::Url;
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of one category request
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: Category,
    pub redacted_url: String,
    pub result: Result<Vec<MediaRecord>, FetchError>,
}

/// GET `url` and return the `results` list of the envelope
pub async fn fetch_results(client: &reqwest::Client, url: Url) -> Result<Vec<MediaRecord>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    let envelope: ResultsEnvelope = serde_json::from_slice(&body)?;
    Ok(envelope.results)
}

pub async fn fetch_category(client: &reqwest::Client, endpoint: Endpoint) -> CategoryOutcome {
    let redacted_url = endpoint.redacted();
    debug!(category = endpoint.category.container_id(), url = %redacted_url, "Fetching category");
    CategoryOutcome {
        category: endpoint.category,
        redacted_url,
        result: fetch_results(client, endpoint.url).await,
    }
}

/// Spawn one independent task per endpoint. `notify` runs after each
/// outcome is sent so the UI can wake up.
pub fn spawn_category_fetches<F>(
    runtime: &tokio::runtime::Handle,
    client: &reqwest::Client,
    endpoints: Vec<Endpoint>,
    tx: Sender<CategoryOutcome>,
    notify: F,
) where
    F: Fn() + Clone + Send + 'static,
{
    debug!(count = endpoints.len(), "Starting category fetches");
    for endpoint in endpoints {
        let client = client.clone();
        let tx = tx.clone();
        let notify = notify.clone();
        runtime.spawn(async move {
            let outcome = fetch_category(&client, endpoint).await;
            // Receiver gone means the window closed
            if tx.send(outcome).is_ok() {
                notify();
            }
        });
    }
}

/// Render a finished fetch into its container
pub fn apply_outcome<S: ViewSurface + ?Sized>(surface: &mut S, outcome: CategoryOutcome) {
    let category = outcome.category;
    match outcome.result {
        Ok(records) => render_posters(surface, category, records, category.poster_size()),
        Err(e) => {
            error!(
                category = category.container_id(),
                url = %outcome.redacted_url,
                error = %e,
                "Error fetching movies"
            );
            render_error(surface, category);
        }
    }
}
