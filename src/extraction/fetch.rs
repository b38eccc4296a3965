use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::ExtractorConfig;

/// What the retrieval step produced for one URL.
#[derive(Debug)]
pub enum RawFetchOutcome {
    Html(String),
    Failed(FetchError),
}

#[derive(Debug)]
pub enum FetchError {
    RelayUrl(url::ParseError),
    Http(reqwest::Error),
    Timeout,
    Decode(serde_json::Error),
    MissingContents,
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() { FetchError::Timeout } else { FetchError::Http(err) }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::RelayUrl(err) => write!(f, "invalid relay url: {err}"),
            FetchError::Http(err) => write!(f, "http error: {err}"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Decode(err) => write!(f, "relay returned non-JSON body: {err}"),
            FetchError::MissingContents => write!(f, "relay response has no contents"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::RelayUrl(err) => Some(err),
            FetchError::Http(err) => Some(err),
            FetchError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, target: &Url) -> RawFetchOutcome;
}

#[derive(Deserialize)]
struct RelayPayload {
    #[serde(default)]
    contents: Option<String>,
}

/// Fetches pages through a relay that answers `GET <base>?url=<target>` with
/// `{"contents": "<html>"}`.
#[derive(Clone)]
pub struct RelayRetriever {
    http: Client,
    relay_url: String,
}

impl RelayRetriever {
    pub fn new(cfg: &ExtractorConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.clone())
            .build()?;
        Ok(Self { http, relay_url: cfg.relay_url.clone() })
    }

    fn endpoint(&self, target: &Url) -> Result<Url, FetchError> {
        Url::parse_with_params(&self.relay_url, &[("url", target.as_str())]).map_err(FetchError::RelayUrl)
    }

    async fn fetch_contents(&self, target: &Url) -> Result<String, FetchError> {
        let endpoint = self.endpoint(target)?;
        let response = self.http.get(endpoint).send().await.map_err(FetchError::from_reqwest)?;
        tracing::debug!(status = %response.status(), "relay responded");
        let bytes = response.bytes().await.map_err(FetchError::from_reqwest)?;
        let payload: RelayPayload = serde_json::from_slice(&bytes).map_err(FetchError::Decode)?;
        match payload.contents {
            Some(html) if !html.is_empty() => Ok(html),
            _ => Err(FetchError::MissingContents),
        }
    }
}

#[async_trait]
impl Retriever for RelayRetriever {
    async fn retrieve(&self, target: &Url) -> RawFetchOutcome {
        match self.fetch_contents(target).await {
            Ok(html) => RawFetchOutcome::Html(html),
            Err(err) => RawFetchOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
pub use mock::MockRetriever;
