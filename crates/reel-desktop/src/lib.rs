//! Reel Desktop - native front end for the Reel player
//!
//! - GStreamer playback via [`GstSurface`]
//! - Terminal control overlay (ratatui) with mouse and keyboard input
//! - A tokio event loop owning the [`reel_core::VideoPlayer`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use reel_core::{event_channel, PlayerConfig, VideoPlayer, VimeoConfigClient};
//! use reel_desktop::GstSurface;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = PlayerConfig::default();
//! let client = Arc::new(VimeoConfigClient::from_config(&config)?);
//! let (sink, events) = event_channel();
//!
//! let mut player = VideoPlayer::new(config, client);
//! player.attach_surface(Box::new(GstSurface::new(sink)?))?;
//! reel_desktop::app::run(player, events).await
//! # }
//! ```

pub mod app;
pub mod controls;
pub mod overlay;
pub mod surface;

pub use surface::{check_gstreamer_installation, GstSurface};
