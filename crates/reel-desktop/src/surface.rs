//! GStreamer playback surface
//!
//! Wraps `gstreamer-player`. Engine signals arrive on GStreamer threads and
//! are forwarded as [`SurfaceEvent`]s; props are applied on the caller's
//! thread. Desktop platforms have no audio-focus or becoming-noisy signals.

use anyhow::{Context, Result};
use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_player as gst_player;
use reel_core::{EventSink, PlaybackSurface, ResizeMode, SurfaceEvent, SurfaceProps};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Sinks tried in order; the first installed one renders the video
const VIDEO_SINKS: [&str; 6] = [
    "glimagesink",
    "xvimagesink",
    "osxvideosink",
    "d3d11videosink",
    "ximagesink",
    "autovideosink",
];

/// Playback surface backed by a GStreamer player
pub struct GstSurface {
    player: gst_player::Player,
    /// Sink installed on the pipeline, when one could be created
    video_sink: Option<gst::Element>,
    /// Last props applied, to skip redundant engine calls
    applied: Option<SurfaceProps>,
    /// Whether the current source already reported its duration
    load_reported: Arc<AtomicBool>,
    repeat: Arc<AtomicBool>,
}

impl GstSurface {
    /// Create the engine and wire its signals into `events`
    pub fn new(events: EventSink) -> Result<Self> {
        gst::init().context("Failed to initialize GStreamer")?;

        let player = gst_player::Player::new(
            None::<gst_player::PlayerVideoRenderer>,
            None::<gst_player::PlayerSignalDispatcher>,
        );

        let video_sink = install_video_sink(&player);
        let load_reported = Arc::new(AtomicBool::new(false));
        let repeat = Arc::new(AtomicBool::new(false));

        let sink = events.clone();
        let reported = load_reported.clone();
        player.connect_duration_changed(move |_player, duration| {
            let Some(duration) = duration else { return };
            if duration.nseconds() == 0 || reported.swap(true, Ordering::SeqCst) {
                return;
            }
            let _ = sink.send(SurfaceEvent::load(duration.nseconds() as f64 / 1_000_000_000.0));
        });

        let sink = events.clone();
        player.connect_position_updated(move |_player, position| {
            if let Some(position) = position {
                let _ = sink.send(SurfaceEvent::progress(position.nseconds() as f64 / 1_000_000_000.0));
            }
        });

        let sink = events;
        let looping = repeat.clone();
        player.connect_end_of_stream(move |player| {
            if looping.load(Ordering::SeqCst) {
                debug!("End of stream, looping");
                player.seek(gst::ClockTime::ZERO);
                player.play();
                return;
            }
            let _ = sink.send(SurfaceEvent::End);
        });

        player.connect_error(|_player, error| {
            error!("Player error: {}", error);
        });

        player.connect_warning(|_player, warning| {
            warn!("Player warning: {}", warning);
        });

        Ok(Self {
            player,
            video_sink,
            applied: None,
            load_reported,
            repeat,
        })
    }

    fn apply_resize_mode(&self, mode: ResizeMode) {
        let Some(sink) = &self.video_sink else {
            debug!(mode = %mode, "No video sink to configure");
            return;
        };
        if sink.find_property("force-aspect-ratio").is_none() {
            debug!(mode = %mode, sink = %sink.name(), "Sink cannot change fit mode");
            return;
        }
        if mode == ResizeMode::Cover {
            // no cropping sink available; keep the aspect ratio like contain
            debug!("Cover rendered as contain");
        }
        sink.set_property("force-aspect-ratio", mode.keeps_aspect_ratio());
    }
}

impl PlaybackSurface for GstSurface {
    fn apply(&mut self, props: &SurfaceProps) -> reel_core::Result<()> {
        let previous = self.applied.take();
        let prev = previous.as_ref();

        if differs(prev, props, |p| p.source.clone()) {
            info!(uri = %props.source, "Loading");
            self.load_reported.store(false, Ordering::SeqCst);
            self.player.set_uri(Some(props.source.as_str()));
        }
        if differs(prev, props, |p| p.rate) {
            self.player.set_rate(props.rate.as_f64());
        }
        if differs(prev, props, |p| p.volume) {
            self.player.set_volume(props.volume.as_f64());
        }
        if differs(prev, props, |p| p.muted) {
            self.player.set_mute(props.muted);
        }
        if differs(prev, props, |p| p.resize_mode) {
            self.apply_resize_mode(props.resize_mode);
        }
        self.repeat.store(props.repeat, Ordering::SeqCst);

        // a new source always needs an explicit play/pause
        if differs(prev, props, |p| (p.paused, p.source.clone())) {
            if props.paused {
                self.player.pause();
            } else {
                self.player.play();
            }
        }

        self.applied = Some(props.clone());
        Ok(())
    }

    fn seek(&mut self, position: f64) -> reel_core::Result<()> {
        if !position.is_finite() || position < 0.0 {
            return Err(reel_core::Error::surface(format!("invalid seek position {position}")));
        }
        self.player
            .seek(gst::ClockTime::from_nseconds((position * 1_000_000_000.0) as u64));
        Ok(())
    }
}

impl Drop for GstSurface {
    fn drop(&mut self) {
        self.player.stop();
    }
}

/// True when there is nothing to compare against or `field` changed
fn differs<T: PartialEq>(
    previous: Option<&SurfaceProps>,
    next: &SurfaceProps,
    field: impl Fn(&SurfaceProps) -> T,
) -> bool {
    previous.map_or(true, |p| field(p) != field(next))
}

/// Put the first available sink on the pipeline
fn install_video_sink(player: &gst_player::Player) -> Option<gst::Element> {
    let name = VIDEO_SINKS
        .iter()
        .copied()
        .find(|name| gst::ElementFactory::find(name).is_some())?;

    match gst::ElementFactory::make(name).build() {
        Ok(sink) => {
            player.pipeline().set_property("video-sink", &sink);
            info!(sink = name, "Video sink selected");
            Some(sink)
        }
        Err(e) => {
            warn!(sink = name, error = %e, "Could not create video sink");
            None
        }
    }
}

/// Check that GStreamer can play HLS
pub fn check_gstreamer_installation() -> Result<Vec<String>> {
    gst::init().context("Failed to initialize GStreamer")?;

    let required_elements = [
        ("playbin", "Core playback"),
        ("hlsdemux", "HLS support"),
        ("decodebin", "Auto decoding"),
    ];

    Ok(required_elements
        .iter()
        .filter(|(element, _)| gst::ElementFactory::find(element).is_none())
        .map(|(element, desc)| format!("{} ({})", element, desc))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::{PlaybackRate, PlaybackSettings};
    use url::Url;

    fn props(uri: &str, settings: &PlaybackSettings) -> SurfaceProps {
        SurfaceProps::new(Url::parse(uri).unwrap(), settings, false)
    }

    #[test]
    fn test_first_apply_sets_everything() {
        let next = props("https://example/a.m3u8", &PlaybackSettings::default());
        assert!(differs(None, &next, |p| p.rate));
        assert!(differs(None, &next, |p| p.muted));
        assert!(differs(None, &next, |p| (p.paused, p.source.clone())));
    }

    #[test]
    fn test_only_changed_fields_differ() {
        let settings = PlaybackSettings::default();
        let prev = props("https://example/a.m3u8", &settings);
        let next = props(
            "https://example/a.m3u8",
            &PlaybackSettings { rate: PlaybackRate::Double, ..settings },
        );

        assert!(differs(Some(&prev), &next, |p| p.rate));
        assert!(!differs(Some(&prev), &next, |p| p.volume));
        assert!(!differs(Some(&prev), &next, |p| p.resize_mode));
        assert!(!differs(Some(&prev), &next, |p| (p.paused, p.source.clone())));
    }

    #[test]
    fn test_new_source_needs_play_state() {
        let settings = PlaybackSettings::default();
        let prev = props("https://example/a.m3u8", &settings);
        let next = props("https://example/b.m3u8", &settings);

        // paused is unchanged but the new source still needs an explicit pause
        assert!(!differs(Some(&prev), &next, |p| p.paused));
        assert!(differs(Some(&prev), &next, |p| (p.paused, p.source.clone())));
    }
}
