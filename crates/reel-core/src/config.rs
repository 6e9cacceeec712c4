//! Player configuration

use crate::{types::VideoId, Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Vimeo content played when nothing else is configured
pub const DEFAULT_VIDEO_ID: &str = "253989945";

/// Base of the Vimeo player config endpoint
pub const DEFAULT_CONFIG_ENDPOINT: &str = "https://player.vimeo.com/video";

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Content to resolve
    pub video_id: VideoId,
    /// Endpoint base; `/{video_id}/config` is appended
    pub config_endpoint: String,
    /// Request timeout in milliseconds (None = wait indefinitely)
    pub request_timeout_ms: Option<u64>,
    /// Loop the stream on the surface
    pub repeat: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            video_id: VideoId::new(DEFAULT_VIDEO_ID),
            config_endpoint: DEFAULT_CONFIG_ENDPOINT.to_string(),
            request_timeout_ms: None,
            repeat: false,
        }
    }
}

impl PlayerConfig {
    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlayerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.video_id.as_str().trim().is_empty() {
            return Err(Error::InvalidConfig("video_id must not be empty".into()));
        }
        let endpoint = Url::parse(&self.config_endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "config_endpoint must be http(s), got {}",
                endpoint.scheme()
            )));
        }
        Ok(())
    }

    /// Full config URL for the configured video
    pub fn config_url(&self) -> Result<Url> {
        config_url(&self.config_endpoint, &self.video_id)
    }
}

/// `{endpoint}/{id}/config`
pub fn config_url(endpoint: &str, video_id: &VideoId) -> Result<Url> {
    let base = endpoint.trim_end_matches('/');
    Ok(Url::parse(&format!("{}/{}/config", base, video_id))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.video_id.as_str(), "253989945");
        assert_eq!(config.request_timeout_ms, None);
        assert!(!config.repeat);
        assert_eq!(
            config.config_url().unwrap().as_str(),
            "https://player.vimeo.com/video/253989945/config"
        );
    }

    #[test]
    fn test_partial_json() {
        let config = PlayerConfig::from_json_str(r#"{"video_id":"347119375"}"#).unwrap();
        assert_eq!(config.video_id, VideoId::new("347119375"));
        assert_eq!(config.config_endpoint, DEFAULT_CONFIG_ENDPOINT);
    }

    #[test]
    fn test_trailing_slash_endpoint() {
        let url = config_url("http://127.0.0.1:8080/video/", &VideoId::new("42")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/video/42/config");
    }

    #[test]
    fn test_validation() {
        assert!(PlayerConfig::from_json_str(r#"{"video_id":"  "}"#).is_err());
        assert!(PlayerConfig::from_json_str(r#"{"config_endpoint":"ftp://host/video"}"#).is_err());
        assert!(PlayerConfig::from_json_str(r#"{"config_endpoint":"not a url"}"#).is_err());
    }
}
