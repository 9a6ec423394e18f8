//! Typed client for the four service endpoints.

pub mod error;
pub mod types;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::AppConfig;
pub use error::ApiError;
use types::{AnalyzeArgs, CompareArgs};
pub use types::{
    AnalysisEnvelope, AnalysisResult, ComparisonResult, HistoryEntry, HistorySnapshot,
};

/// The scoring service as the UI sees it.
///
/// `analyze` and `compare` expect already-trimmed input; callers skip the
/// call entirely for empty input.
#[allow(async_fn_in_trait)]
pub trait GematriaApi {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError>;

    async fn compare(&self, phrase1: &str, phrase2: &str) -> Result<ComparisonResult, ApiError>;

    async fn fetch_history(&self) -> Result<HistorySnapshot, ApiError>;

    /// Wipe the server-side log. Success carries no data.
    async fn clear_history(&self) -> Result<(), ApiError>;
}

/// `GematriaApi` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            warn!(path, status = status.as_u16(), "service returned an error status");
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(path, error = %e, "response body did not match the expected shape");
            ApiError::from(e)
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        self.read_json(path, response).await
    }
}

impl GematriaApi for HttpApi {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::EmptyInput);
        }
        let envelope: AnalysisEnvelope = self.post_json("/analyze", &AnalyzeArgs { text }).await?;
        AnalysisResult::from_envelope(envelope)
    }

    async fn compare(&self, phrase1: &str, phrase2: &str) -> Result<ComparisonResult, ApiError> {
        let (phrase1, phrase2) = (phrase1.trim(), phrase2.trim());
        if phrase1.is_empty() || phrase2.is_empty() {
            return Err(ApiError::EmptyInput);
        }
        self.post_json("/compare", &CompareArgs { phrase1, phrase2 })
            .await
    }

    async fn fetch_history(&self) -> Result<HistorySnapshot, ApiError> {
        debug!(path = "/history", "GET");
        let response = self
            .client
            .get(self.config.endpoint("/history"))
            .send()
            .await?;
        self.read_json("/history", response).await
    }

    async fn clear_history(&self) -> Result<(), ApiError> {
        debug!(path = "/clear_history", "POST");
        let response = self
            .client
            .post(self.config.endpoint("/clear_history"))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "clear_history was rejected");
            return Err(ApiError::Status(status.as_u16()));
        }
        // Acknowledgment body is not part of the contract.
        let _ = response.bytes().await?;
        Ok(())
    }
}
