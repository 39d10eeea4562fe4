use reqwest::Client as HttpClient;
use serde::Serialize;
use url::Url;

use crate::api::models::{EventRequest, Reply, SubscriptionRequest};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API base URL `{0}`")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request task failed: {0}")]
    Dispatch(String),
}

/// Client for the events API. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_http(HttpClient::new(), base_url)
    }

    pub fn with_http(http: HttpClient, base_url: &str) -> Result<Self, ApiError> {
        let normalized = crate::utils::normalize_url(base_url);
        let base_url =
            Url::parse(&normalized).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), name)
    }

    pub async fn subscribe(&self, request: &SubscriptionRequest) -> Result<Reply, ApiError> {
        self.post("subscribe", request).await
    }

    pub async fn create_event(&self, request: &EventRequest) -> Result<Reply, ApiError> {
        self.post("event", request).await
    }

    /// One attempt, no timeout. Any status counts as a reply; only a request
    /// that never completes (or whose body cannot be read) is an error.
    async fn post<T: Serialize + ?Sized>(&self, name: &str, body: &T) -> Result<Reply, ApiError> {
        let endpoint = self.endpoint(name);
        let resp = self.http.post(&endpoint).json(body).send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        log::debug!("POST {} -> {}: {}", endpoint, status, text);
        Ok(Reply::new(status, text))
    }
}
