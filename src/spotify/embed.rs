use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;

use crate::{config, error::MixtapeError};

/// The embed page is public but served for browsers; requests without a
/// plausible client identity can be rejected outright.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Fetches the public embed page for a playlist and returns its HTML.
///
/// A transport-level failure (connection refused, DNS, timeout) is retried
/// once after a short delay; a second failure reports the source as
/// unreachable. HTTP error statuses are never retried: a 404 from the
/// provider is definitive, and so is a 5xx for a single-shot fetch.
///
/// # Arguments
///
/// * `playlist_id` - Bare playlist identifier, already normalized by the
///   import service
///
/// # Returns
///
/// - `Ok(String)` - Raw HTML of the embed page
/// - `Err(MixtapeError::NotFound)` - Unreachable source or non-success status
/// - `Err(MixtapeError::Http)` - Client construction or body read failure
pub async fn fetch_embed_page(playlist_id: &str) -> Result<String, MixtapeError> {
    let url = format!(
        "{base}/playlist/{id}",
        base = config::spotify_embed_url(),
        id = playlist_id
    );

    let client = Client::builder().user_agent(BROWSER_USER_AGENT).build()?;

    let mut retried = false;
    loop {
        match client.get(&url).send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    return Err(MixtapeError::NotFound);
                }
                return Ok(response.text().await?);
            }
            Err(_) if !retried => {
                retried = true;
                sleep(RETRY_DELAY).await;
            }
            Err(_) => return Err(MixtapeError::NotFound),
        }
    }
}
