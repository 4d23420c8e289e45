//! Client for the RIPE Atlas probe endpoint.

use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;
use crate::models::RestAnswer;

const USER_AGENT: &str = concat!("getprobe/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around `reqwest::Client` bound to one API base URL.
///
/// A single page is fetched per call. There is no retry, timeout or
/// authentication.
pub struct AtlasClient {
    client: Client,
    base_url: String,
}

impl AtlasClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn probe_url(&self, id: &str) -> String {
        format!("{}/probe/?id={}", self.base_url, urlencoding::encode(id))
    }

    /// `GET <base>/probe/?id=<id>` and decode the answer.
    pub async fn fetch_probe(&self, id: &str) -> Result<RestAnswer, FetchError> {
        let url = self.probe_url(id);
        debug!("Fetching {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
