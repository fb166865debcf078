use std::{fmt::Debug, sync::Arc};

use riftview_shared::UpstreamError;
use serde::{Deserialize, de::DeserializeOwned};

use crate::metrics::RequestMetrics;

/// Base client performing authenticated GET requests against the Riot
/// hosts. Every call attaches the `X-Riot-Token` header.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    /// Riot API Key
    key: String,
    /// When set, every request goes to this origin instead of the real
    /// Riot hosts. Used to stand a mock server in during tests.
    origin_override: Option<String>,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            key: api_key,
            origin_override: None,
            metrics: RequestMetrics::new("riot"),
        }
    }

    pub fn with_origin(api_key: String, origin: String) -> Self {
        Self {
            origin_override: Some(origin),
            ..Self::new(api_key)
        }
    }

    /// Build the full URL for a call, honoring the origin override.
    pub fn url(&self, origin: String, path_and_query: &str) -> String {
        match &self.origin_override {
            Some(forced) => format!("{forced}{path_and_query}"),
            None => format!("{origin}{path_and_query}"),
        }
    }

    pub async fn get_json<T: DeserializeOwned + Debug>(
        &self,
        url: String,
    ) -> Result<T, UpstreamError> {
        self.metrics.inc();

        let res = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            return res
                .json()
                .await
                .map_err(|e| UpstreamError::Decode(e.to_string()));
        }

        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status.message)
            .unwrap_or_else(|| format!("unknown Riot API error (HTTP {})", status.as_u16()));

        Err(UpstreamError::Status {
            code: status.as_u16(),
            message,
        })
    }
}

/// Error body shape of the Riot API: `{"status": {"message": "..."}}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    status: ErrorStatus,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorStatus {
    #[serde(default)]
    message: Option<String>,
}
