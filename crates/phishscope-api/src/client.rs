use std::future::Future;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::schema::AnalysisResponse;

/// Access to the remote analysis service.
///
/// The session controller only depends on this seam, so tests swap the HTTP
/// client for an in-process stub. One call covers a whole fetch-and-analyze
/// round trip; there is no per-email endpoint at this layer.
pub trait AnalysisApi: Send + Sync + 'static {
    /// Fetch the current email batch and its analysis results.
    fn fetch_and_analyze(&self) -> impl Future<Output = Result<AnalysisResponse>> + Send;
}

/// HTTP implementation backed by `reqwest`.
///
/// No timeout is imposed here; a hung request is bounded only by whatever the
/// transport enforces. The controller suppresses concurrent triggers, so at
/// most one request is in flight per session.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured `reqwest::Client` (proxies, timeouts, TLS).
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/fetch_and_analyze", self.base_url.trim_end_matches('/'))
    }
}

impl AnalysisApi for HttpAnalysisClient {
    async fn fetch_and_analyze(&self) -> Result<AnalysisResponse> {
        let url = self.endpoint();
        debug!(%url, "requesting email analysis batch");

        let response = self.http.get(&url).send().await.map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "analysis service returned non-success status");
            return Err(Error::Status(status.as_u16()));
        }

        let body: AnalysisResponse = response.json().await.map_err(Error::Json)?;
        debug!(results = body.results.len(), "received analysis batch");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = HttpAnalysisClient::new("http://localhost:8000/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:8000/fetch_and_analyze"
        );

        let client = HttpAnalysisClient::new("http://localhost:8000");
        assert_eq!(
            client.endpoint(),
            "http://localhost:8000/fetch_and_analyze"
        );
    }
}
