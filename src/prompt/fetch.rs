//! Remote prompt transport.
//!
//! `PromptFetcher` is the seam between the loader and the network; the
//! production implementation rides `reqwest`, tests substitute the
//! scriptable fetcher from [`crate::prompt::testing`].

use crate::error::{DirectoryError, PromptError};
use async_trait::async_trait;
use std::time::Duration;

/// Transport port for retrieving one prompt file by category and id.
#[async_trait]
pub trait PromptFetcher: Send + Sync {
    /// Fetch the markdown body at `{category}/{id}.md`.
    async fn fetch(&self, category: &str, id: &str) -> Result<String, PromptError>;
}

/// HTTP implementation over a configured base URL.
pub struct HttpPromptFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPromptFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DirectoryError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PromptFetcher for HttpPromptFetcher {
    async fn fetch(&self, category: &str, id: &str) -> Result<String, PromptError> {
        let url = format!("{}/{}/{}.md", self.base_url, category, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PromptError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PromptError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| PromptError::Request(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let fetcher =
            HttpPromptFetcher::new("https://example.test/prompts/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(fetcher.base_url(), "https://example.test/prompts");
    }
}
