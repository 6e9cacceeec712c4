//! Core types for Reel

use crate::Error;
use serde::{Deserialize, Serialize};

/// Vimeo content identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Playback speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum PlaybackRate {
    Quarter,
    Half,
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    /// Candidate rates, in display order
    pub const ALL: [PlaybackRate; 5] = [
        PlaybackRate::Quarter,
        PlaybackRate::Half,
        PlaybackRate::Normal,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    pub fn as_f64(&self) -> f64 {
        match self {
            PlaybackRate::Quarter => 0.25,
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Option label, e.g. `0.25x` or `1x`
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackRate::Quarter => "0.25x",
            PlaybackRate::Half => "0.5x",
            PlaybackRate::Normal => "1x",
            PlaybackRate::OneAndHalf => "1.5x",
            PlaybackRate::Double => "2x",
        }
    }
}

impl From<PlaybackRate> for f64 {
    fn from(rate: PlaybackRate) -> Self {
        rate.as_f64()
    }
}

impl TryFrom<f64> for PlaybackRate {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        PlaybackRate::ALL
            .into_iter()
            .find(|r| r.as_f64() == value)
            .ok_or_else(|| Error::InvalidConfig(format!("unsupported playback rate {value}")))
    }
}

impl std::fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Output volume; values above 1.0 amplify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum Volume {
    Half,
    #[default]
    Full,
    Boost,
}

impl Volume {
    /// Candidate volumes, in display order
    pub const ALL: [Volume; 3] = [Volume::Half, Volume::Full, Volume::Boost];

    pub fn as_f64(&self) -> f64 {
        match self {
            Volume::Half => 0.5,
            Volume::Full => 1.0,
            Volume::Boost => 1.5,
        }
    }

    /// Option label as a percentage
    pub fn label(&self) -> &'static str {
        match self {
            Volume::Half => "50%",
            Volume::Full => "100%",
            Volume::Boost => "150%",
        }
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> Self {
        volume.as_f64()
    }
}

impl TryFrom<f64> for Volume {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Volume::ALL
            .into_iter()
            .find(|v| v.as_f64() == value)
            .ok_or_else(|| Error::InvalidConfig(format!("unsupported volume {value}")))
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How the video frame is fitted into the surface bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Fill the bounds, cropping overflow
    Cover,
    /// Fit inside the bounds, letterboxing
    #[default]
    Contain,
    /// Fill the bounds, ignoring aspect ratio
    Stretch,
}

impl ResizeMode {
    pub const ALL: [ResizeMode; 3] = [ResizeMode::Cover, ResizeMode::Contain, ResizeMode::Stretch];

    pub fn label(&self) -> &'static str {
        match self {
            ResizeMode::Cover => "cover",
            ResizeMode::Contain => "contain",
            ResizeMode::Stretch => "stretch",
        }
    }

    /// Whether the frame keeps its aspect ratio
    pub fn keeps_aspect_ratio(&self) -> bool {
        !matches!(self, ResizeMode::Stretch)
    }
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_labels() {
        let labels: Vec<_> = PlaybackRate::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["0.25x", "0.5x", "1x", "1.5x", "2x"]);
        assert_eq!(PlaybackRate::default().as_f64(), 1.0);
    }

    #[test]
    fn test_volume_labels() {
        let labels: Vec<_> = Volume::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, ["50%", "100%", "150%"]);
    }

    #[test]
    fn test_rate_from_f64() {
        assert_eq!(PlaybackRate::try_from(1.5).unwrap(), PlaybackRate::OneAndHalf);
        assert!(PlaybackRate::try_from(3.0).is_err());
    }

    #[test]
    fn test_serde_forms() {
        assert_eq!(serde_json::to_string(&PlaybackRate::Quarter).unwrap(), "0.25");
        assert_eq!(serde_json::to_string(&Volume::Boost).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&ResizeMode::Contain).unwrap(), "\"contain\"");
        let mode: ResizeMode = serde_json::from_str("\"stretch\"").unwrap();
        assert_eq!(mode, ResizeMode::Stretch);
        let volume: Volume = serde_json::from_str("0.5").unwrap();
        assert_eq!(volume, Volume::Half);
    }
}
