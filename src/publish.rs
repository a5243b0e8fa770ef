//! Record submission to the storage API.
//!
//! Successful article records are POSTed as JSON to a fixed endpoint. The
//! backend acknowledges with `201 Created`; every other response, including
//! transport failures, counts as a publish failure. One attempt per record,
//! no retry — a failed publish is reported and the run moves on.

use reqwest::{Client, StatusCode};
use tracing::{info, instrument, warn};

use crate::models::ArticleRecord;

/// Submit one article record to the storage API.
///
/// Prints the success or failure line that is part of the console contract
/// and mirrors it into the structured log. Returns whether the backend
/// acknowledged with `201`, so the driver can tally the run summary.
#[instrument(level = "info", skip_all, fields(url = %record.metadata.url))]
pub async fn publish(client: &Client, endpoint: &str, record: &ArticleRecord) -> bool {
    match client.post(endpoint).json(record).send().await {
        Ok(response) if response.status() == StatusCode::CREATED => {
            println!(
                "Successfully sent article {} to backend.",
                record.metadata.url
            );
            info!(endpoint, "Published article");
            true
        }
        Ok(response) => {
            println!(
                "Failed to send article {} to backend. Status code: {}",
                record.metadata.url,
                response.status().as_u16()
            );
            warn!(endpoint, status = %response.status(), "Backend rejected article");
            false
        }
        Err(e) => {
            println!(
                "Failed to send article {} to backend. Error: {}",
                record.metadata.url, e
            );
            warn!(endpoint, error = %e, "Publish request failed");
            false
        }
    }
}
