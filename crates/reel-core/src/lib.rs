//! Reel Core - single-screen video player library
//!
//! This crate provides everything except pixels and input devices:
//! - Vimeo player config resolution to a playable HLS URL
//! - Playback settings and the reducer that mutates them
//! - Typed playback surface events
//! - Control strip and progress bar view model
//! - The [`VideoPlayer`] component rendering a declarative [`Screen`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Reel Core                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────┐        ┌──────────────┐                    │
//! │  │ Vimeo Config │  url   │    Video     │   props / seek     │
//! │  │   Fetcher    ├───────►│    Player    ├──────────────────► │ surface
//! │  └──────────────┘        └──────┬───────┘                    │
//! │                                 │ reduce          events     │
//! │                          ┌──────┴───────┐ ◄───────────────── │ surface
//! │                          │   Playback   │                    │
//! │                          │   Settings   │                    │
//! │                          └──────┬───────┘                    │
//! │                                 │                            │
//! │                          ┌──────┴───────┐                    │
//! │                          │ Control Strip│ ─────────► Screen  │
//! │                          │  + Progress  │                    │
//! │                          └──────────────┘                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod controls;
pub mod error;
pub mod events;
pub mod player;
pub mod progress;
pub mod settings;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;
pub mod vimeo;

pub use config::PlayerConfig;
pub use controls::{ControlGroup, ControlGroupKind, ControlOption, ControlStrip};
pub use error::{Error, Result};
pub use events::{AudioFocusEvent, LoadEvent, ProgressEvent, SurfaceEvent};
pub use player::VideoPlayer;
pub use progress::{completion_fraction, ProgressBar};
pub use settings::{Action, PlaybackSettings};
pub use surface::{event_channel, EventSink, EventStream, PlaybackSurface, SurfaceProps};
pub use theme::ReelColors;
pub use types::*;
pub use view::{PlayerView, Screen};
pub use vimeo::{ConfigSource, StaticSource, VimeoConfigClient, VimeoPlayerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library start-up
pub fn init() {
    tracing::info!(version = VERSION, "Reel Core initialized");
}
