//! Typed callbacks emitted by a playback surface

use serde::{Deserialize, Serialize};

/// Media finished loading and reported its duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadEvent {
    /// Total duration in seconds
    pub duration: f64,
}

/// Periodic position report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    /// Current position in seconds
    pub current_time: f64,
}

/// The platform granted or revoked audio focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFocusEvent {
    pub has_audio_focus: bool,
}

/// Everything a surface can report back to the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    Load(LoadEvent),
    Progress(ProgressEvent),
    /// Stream reached its end
    End,
    /// Audio output is about to become noisy (e.g. headphones unplugged)
    AudioBecomingNoisy,
    AudioFocusChanged(AudioFocusEvent),
}

impl SurfaceEvent {
    pub fn load(duration: f64) -> Self {
        SurfaceEvent::Load(LoadEvent { duration })
    }

    pub fn progress(current_time: f64) -> Self {
        SurfaceEvent::Progress(ProgressEvent { current_time })
    }

    pub fn audio_focus(has_audio_focus: bool) -> Self {
        SurfaceEvent::AudioFocusChanged(AudioFocusEvent { has_audio_focus })
    }

    /// Short name for log fields
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceEvent::Load(_) => "load",
            SurfaceEvent::Progress(_) => "progress",
            SurfaceEvent::End => "end",
            SurfaceEvent::AudioBecomingNoisy => "audio_becoming_noisy",
            SurfaceEvent::AudioFocusChanged(_) => "audio_focus_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload_json() {
        let json = serde_json::to_value(SurfaceEvent::audio_focus(false)).unwrap();
        assert_eq!(json["type"], "audio_focus_changed");
        assert_eq!(json["hasAudioFocus"], false);

        let progress: SurfaceEvent =
            serde_json::from_str(r#"{"type":"progress","currentTime":12.5}"#).unwrap();
        assert_eq!(progress, SurfaceEvent::progress(12.5));
    }
}
