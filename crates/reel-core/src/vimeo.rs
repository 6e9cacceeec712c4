//! Vimeo player config resolution
//!
//! The player config document lists the HLS manifest once per CDN:
//!
//! ```text
//! { "request": { "files": { "hls": {
//!     "default_cdn": "akfire_interconnect_quic",
//!     "cdns": { "akfire_interconnect_quic": { "url": "https://.../playlist.m3u8" } }
//! } } } }
//! ```
//!
//! The entry named by `default_cdn` is the playback source. One request,
//! no authentication, no retry.

use crate::{
    config::{config_url, PlayerConfig, DEFAULT_CONFIG_ENDPOINT},
    types::VideoId,
    Error, Result,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Something that can turn a video id into a playable stream URL
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch_stream_url(&self, video_id: &VideoId) -> Result<Url>;
}

/// Player config document, reduced to the fields the player reads
#[derive(Debug, Clone, Deserialize)]
pub struct VimeoPlayerConfig {
    pub request: ConfigRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigRequest {
    pub files: ConfigFiles,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFiles {
    pub hls: HlsFiles,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HlsFiles {
    pub default_cdn: String,
    pub cdns: HashMap<String, CdnEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CdnEntry {
    pub url: String,
}

impl VimeoPlayerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// URL served by the default CDN
    pub fn stream_url(&self) -> Result<Url> {
        let hls = &self.request.files.hls;
        let entry = hls.cdns.get(&hls.default_cdn).ok_or_else(|| Error::MissingCdn {
            cdn: hls.default_cdn.clone(),
        })?;
        Ok(Url::parse(&entry.url)?)
    }
}

/// HTTP client for the Vimeo player config endpoint
pub struct VimeoConfigClient {
    client: Client,
    endpoint: String,
}

impl VimeoConfigClient {
    /// Client for the public endpoint, without a request timeout
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(Client::builder().build()?, DEFAULT_CONFIG_ENDPOINT))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Client honouring the endpoint and timeout of a [`PlayerConfig`]
    pub fn from_config(config: &PlayerConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(Self::with_client(builder.build()?, config.config_endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the player config document
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_config(&self, video_id: &VideoId) -> Result<VimeoPlayerConfig> {
        let url = config_url(&self.endpoint, video_id)?;
        debug!(url = %url, "Requesting player config");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::ConfigStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Player config received");
        VimeoPlayerConfig::from_json(&body)
    }
}

#[async_trait]
impl ConfigSource for VimeoConfigClient {
    async fn fetch_stream_url(&self, video_id: &VideoId) -> Result<Url> {
        let config = self.fetch_config(video_id).await?;
        let url = config.stream_url()?;
        info!(
            video_id = %video_id,
            cdn = %config.request.files.hls.default_cdn,
            "Stream URL resolved"
        );
        Ok(url)
    }
}

/// A fixed stream URI, bypassing config resolution
#[derive(Debug, Clone)]
pub struct StaticSource(pub Url);

#[async_trait]
impl ConfigSource for StaticSource {
    async fn fetch_stream_url(&self, _video_id: &VideoId) -> Result<Url> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "request": {
            "files": {
                "hls": {
                    "default_cdn": "akfire_interconnect_quic",
                    "separate_av": true,
                    "cdns": {
                        "akfire_interconnect_quic": { "url": "https://example/stream.m3u8", "origin": "gcs" },
                        "fastly_skyfire": { "url": "https://fastly.example/stream.m3u8" }
                    }
                },
                "dash": {}
            },
            "timestamp": 1700000000
        },
        "video": { "id": 253989945 }
    }"#;

    #[test]
    fn test_default_cdn_selected() {
        let config = VimeoPlayerConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.stream_url().unwrap().as_str(), "https://example/stream.m3u8");
    }

    #[test]
    fn test_missing_default_cdn() {
        let json = r#"{"request":{"files":{"hls":{"default_cdn":"gone","cdns":{"other":{"url":"https://x/y.m3u8"}}}}}}"#;
        let err = VimeoPlayerConfig::from_json(json).unwrap().stream_url().unwrap_err();
        assert!(matches!(err, Error::MissingCdn { ref cdn } if cdn == "gone"));
    }

    #[test]
    fn test_missing_nested_field() {
        let err = VimeoPlayerConfig::from_json(r#"{"request":{"files":{}}}"#).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE");
    }

    #[test]
    fn test_bad_url() {
        let json = r#"{"request":{"files":{"hls":{"default_cdn":"a","cdns":{"a":{"url":"::::"}}}}}}"#;
        let err = VimeoPlayerConfig::from_json(json).unwrap().stream_url().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_URL");
    }

    #[test]
    fn test_static_source() {
        let url = Url::parse("http://d23dyxeqlo5psv.cloudfront.net/big_buck_bunny.mp4").unwrap();
        let source = StaticSource(url.clone());
        let resolved = tokio_test::block_on(source.fetch_stream_url(&VideoId::new("ignored")));
        assert_eq!(resolved.unwrap(), url);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // nothing listens on port 1
        let client = VimeoConfigClient::with_client(Client::new(), "http://127.0.0.1:1/video");
        let err = client.fetch_stream_url(&VideoId::new("1")).await.unwrap_err();
        assert_eq!(err.error_code(), "NETWORK");
    }
}
