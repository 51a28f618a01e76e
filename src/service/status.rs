//! Map status fetcher.

use std::time::Duration;

use chrono::Utc;

use crate::{config::Config, error::AppError, model::status::MapStatus};

/// Per-request timeout for the map endpoint. A slow map is retried on the next poll.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Fetches the current player list from the dynamic map.
#[derive(Clone)]
pub struct StatusClient {
    http_client: reqwest::Client,
    status_url: String,
    use_timestamp: bool,
}

impl StatusClient {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            status_url: config.status_url.clone(),
            use_timestamp: config.status_use_timestamp,
        }
    }

    /// URL of the next request; the map caches per URL, so a timestamp suffix forces fresh data.
    pub fn request_url(&self) -> String {
        if self.use_timestamp {
            format!("{}{}", self.status_url, Utc::now().timestamp_millis())
        } else {
            self.status_url.clone()
        }
    }

    /// Requests and decodes the map status.
    ///
    /// # Returns
    /// - `Ok(MapStatus)` - Decoded body
    /// - `Err(AppError::ReqwestErr)` - Connection failure, timeout or non-success status
    /// - `Err(AppError::JsonErr)` - Body is not a map status document
    pub async fn fetch(&self) -> Result<MapStatus, AppError> {
        let body = self
            .http_client
            .get(self.request_url())
            .timeout(STATUS_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
