use std::time::Duration;

use futures_util::StreamExt;

use crate::{FetchError, FetchMetadata, FetchOutput};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The network boundary. Runners only see this trait, so tests inject
/// scripted fetchers instead of touching the network.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

/// `reqwest`-backed fetcher. One client is built up front and shared by
/// every request; redirects follow reqwest's default policy.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            return FetchError::Timeout(self.settings.request_timeout);
        }
        FetchError::Network(err.to_string())
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|err| self.map_reqwest_error(err))?;

        // Error statuses are recorded in the metadata, not treated as
        // failures; their bodies get title-scanned like any other page.
        let status = response.status().as_u16();

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let final_url = response.url().to_string();

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| self.map_reqwest_error(err))?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(next_len),
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = FetchMetadata {
            original_url: url.to_string(),
            final_url,
            status,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput {
            body: String::from_utf8_lossy(&bytes).into_owned(),
            metadata,
        })
    }
}
