//! Airline logo fetch client
//!
//! Downloads PNG logos from the Airhex CDN, one GET per airline. The CDN
//! serves small-resolution PNGs keyed by IATA code without an API key.
//! Missing logos are a normal outcome (`FetchError::NoLogo`), not a
//! transport failure.

use thiserror::Error;
use tracing::debug;

/// Default logo CDN base URL.
pub const DEFAULT_CDN_URL: &str = "https://content.airhex.com/content/logos";

/// Per-request timeout. One shot, no retries.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The CDN has no logo for this airline (non-2xx status or a non-image
    /// response body).
    #[error("No logo available (status {0})")]
    NoLogo(u16),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the logo CDN.
#[derive(Debug, Clone)]
pub struct LogoFetcher {
    http_client: reqwest::Client,
    base_url: String,
}

impl LogoFetcher {
    /// Create a fetcher against the given CDN base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .user_agent(concat!("logowall/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
        }
    }

    /// Fetch a logo PNG for the given IATA code at the given resolution.
    ///
    /// Returns the raw PNG bytes on HTTP success with an image content
    /// type. A 404 or a non-image body maps to [`FetchError::NoLogo`]
    /// because most cargo and regional airlines simply have no logo on the
    /// CDN.
    pub async fn fetch(&self, iata: &str, width: u32, height: u32) -> Result<Vec<u8>, FetchError> {
        let url = format!(
            "{}/airlines_{}_{}_{}_r.png?theme=dark",
            self.base_url, iata, width, height
        );

        debug!("Fetching logo: {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        let is_image = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("image"));

        if !status.is_success() || !is_image {
            return Err(FetchError::NoLogo(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl Default for LogoFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_CDN_URL.to_string())
    }
}
