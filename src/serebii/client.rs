// src/serebii/client.rs
use crate::utils::error::FetchError;
use reqwest::header;

/// Identifies this scraper to the site operator.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; pokedex_scraper/0.1; +https://github.com/pokedex-scraper)";
pub const DEFAULT_BASE_URL: &str = "https://www.serebii.net";

/// Anything that can turn a URL into bytes. The pipeline only sees this seam,
/// so tests can serve pages from memory.
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// URL of the Generation I dex page for an identifier such as `"025"`.
pub fn dex_page_url(base_url: &str, id: &str) -> String {
    format!("{}/pokedex/{}.shtml", base_url.trim_end_matches('/'), id)
}

/// Fetcher backed by a single reqwest client carrying the identifying User-Agent.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()?; // Propagate client build error if any
        tracing::debug!("Using User-Agent: {}", user_agent);
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    /// One-shot GET; no retries.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "text/html,image/png,*/*")
            .send()
            .await?; // Propagates reqwest::Error as FetchError::Network

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::FORBIDDEN {
                tracing::warn!("Received 403 Forbidden - check User-Agent and pacing.");
                return Err(FetchError::RateLimited);
            }
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(FetchError::NotFound(url.to_string()));
            }
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            return Err(FetchError::Http(status));
        }

        let body = response.bytes().await?;
        tracing::debug!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
