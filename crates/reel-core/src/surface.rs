//! Playback surface seam
//!
//! The surface is the embedded media engine. It receives declarative props
//! after every state change and reports back through an [`EventSink`].

use crate::{
    events::SurfaceEvent,
    settings::PlaybackSettings,
    types::{PlaybackRate, ResizeMode, Volume},
    Result,
};
use serde::Serialize;
use tokio::sync::mpsc;
use url::Url;

/// Sender half handed to surfaces; safe to use from engine threads
pub type EventSink = mpsc::UnboundedSender<SurfaceEvent>;

/// Receiver half drained by the event loop
pub type EventStream = mpsc::UnboundedReceiver<SurfaceEvent>;

pub fn event_channel() -> (EventSink, EventStream) {
    mpsc::unbounded_channel()
}

/// Props passed to the surface on every render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceProps {
    pub source: Url,
    pub rate: PlaybackRate,
    pub paused: bool,
    pub volume: Volume,
    pub muted: bool,
    pub resize_mode: ResizeMode,
    pub repeat: bool,
}

impl SurfaceProps {
    pub fn new(source: Url, settings: &PlaybackSettings, repeat: bool) -> Self {
        Self {
            source,
            rate: settings.rate,
            paused: settings.paused,
            volume: settings.volume,
            muted: settings.muted,
            resize_mode: settings.resize_mode,
            repeat,
        }
    }
}

/// Embedded playback capability
pub trait PlaybackSurface: Send {
    /// Bring the engine in line with `props`
    fn apply(&mut self, props: &SurfaceProps) -> Result<()>;

    /// Jump to `position` seconds
    fn seek(&mut self, position: f64) -> Result<()>;
}
