//! Playback settings and the reducer that updates them
//!
//! Every mutation goes through [`PlaybackSettings::reduce`], which copies the
//! previous record and overrides the fields the action touches.

use crate::{
    events::{AudioFocusEvent, LoadEvent, ProgressEvent, SurfaceEvent},
    types::{PlaybackRate, ResizeMode, Volume},
};
use serde::{Deserialize, Serialize};

/// The player's entire local state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSettings {
    pub rate: PlaybackRate,
    pub volume: Volume,
    pub muted: bool,
    pub resize_mode: ResizeMode,
    /// Seconds; 0 until the surface reports it
    pub duration: f64,
    /// Seconds
    pub current_time: f64,
    pub paused: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            rate: PlaybackRate::Normal,
            volume: Volume::Full,
            muted: false,
            resize_mode: ResizeMode::Contain,
            duration: 0.0,
            current_time: 0.0,
            paused: true,
        }
    }
}

/// Inputs to the reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Tap on the playback surface
    TogglePaused,
    SelectRate(PlaybackRate),
    SelectVolume(Volume),
    SelectResizeMode(ResizeMode),
    Surface(SurfaceEvent),
}

impl From<SurfaceEvent> for Action {
    fn from(event: SurfaceEvent) -> Self {
        Action::Surface(event)
    }
}

/// Reducer output: the next settings plus an optional imperative seek
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduced {
    pub settings: PlaybackSettings,
    /// Position in seconds the surface must seek to
    pub seek_to: Option<f64>,
}

impl PlaybackSettings {
    /// Whether the surface has reported a duration yet
    pub fn duration_known(&self) -> bool {
        self.duration > 0.0
    }

    /// Apply one action, returning the next state
    pub fn reduce(self, action: Action) -> Reduced {
        let mut seek_to = None;

        let settings = match action {
            Action::TogglePaused => Self { paused: !self.paused, ..self },
            Action::SelectRate(rate) => Self { rate, ..self },
            Action::SelectVolume(volume) => Self { volume, ..self },
            Action::SelectResizeMode(resize_mode) => Self { resize_mode, ..self },
            Action::Surface(SurfaceEvent::Load(LoadEvent { duration })) => {
                let loaded = Self { duration: duration.max(0.0), ..self };
                // a position may have been reported before the duration
                Self { current_time: loaded.clamp_position(self.current_time), ..loaded }
            }
            Action::Surface(SurfaceEvent::Progress(ProgressEvent { current_time })) => Self {
                current_time: self.clamp_position(current_time),
                ..self
            },
            Action::Surface(SurfaceEvent::End) => {
                seek_to = Some(0.0);
                Self { paused: true, current_time: 0.0, ..self }
            }
            Action::Surface(SurfaceEvent::AudioBecomingNoisy) => Self { paused: true, ..self },
            Action::Surface(SurfaceEvent::AudioFocusChanged(AudioFocusEvent { has_audio_focus })) => {
                Self { paused: !has_audio_focus, ..self }
            }
        };

        Reduced { settings, seek_to }
    }

    /// Keep a reported position inside `0..=duration`
    fn clamp_position(&self, position: f64) -> f64 {
        if self.duration_known() {
            position.clamp(0.0, self.duration)
        } else {
            position.max(0.0)
        }
    }
}
