//! Video player component
//!
//! Owns the playback settings and the resolved stream source, and keeps an
//! attached [`PlaybackSurface`] in sync with them:
//! - one config fetch on mount
//! - every mutation funnelled through [`VideoPlayer::dispatch`]
//! - declarative [`Screen`] output for the front end

use crate::{
    config::PlayerConfig,
    controls::ControlStrip,
    events::SurfaceEvent,
    settings::{Action, PlaybackSettings, Reduced},
    surface::{PlaybackSurface, SurfaceProps},
    types::{PlaybackRate, ResizeMode, Volume},
    view::{PlayerView, Screen},
    vimeo::ConfigSource,
    Result,
};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Single-screen player
pub struct VideoPlayer {
    config: PlayerConfig,
    config_source: Arc<dyn ConfigSource>,
    settings: PlaybackSettings,
    settings_tx: watch::Sender<PlaybackSettings>,
    /// Set once, when the config fetch resolves
    source: Option<Url>,
    mounted: bool,
    surface: Option<Box<dyn PlaybackSurface>>,
}

impl VideoPlayer {
    pub fn new(config: PlayerConfig, config_source: Arc<dyn ConfigSource>) -> Self {
        let settings = PlaybackSettings::default();
        let (settings_tx, _) = watch::channel(settings);

        Self {
            config,
            config_source,
            settings,
            settings_tx,
            source: None,
            mounted: false,
            surface: None,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Current settings snapshot
    pub fn settings(&self) -> PlaybackSettings {
        self.settings
    }

    /// Resolved stream URL, if the fetch has succeeded
    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Subscribe to settings changes
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSettings> {
        self.settings_tx.subscribe()
    }

    /// Mark the component mounted and hand out the config fetch.
    ///
    /// Returns `None` after the first call. The future owns everything it
    /// needs, so callers may spawn it and feed the outcome to
    /// [`VideoPlayer::resolve_source`].
    pub fn fetch_task(&mut self) -> Option<impl Future<Output = Result<Url>> + Send + 'static> {
        if self.mounted {
            debug!("Already mounted, skipping config fetch");
            return None;
        }
        self.mounted = true;

        let config_source = Arc::clone(&self.config_source);
        let video_id = self.config.video_id.clone();
        info!(video_id = %video_id, "Mounting player");

        Some(async move { config_source.fetch_stream_url(&video_id).await })
    }

    /// Fetch the stream source and store it; a no-op when already mounted.
    ///
    /// A failed fetch is logged and leaves the screen empty.
    #[instrument(skip(self), fields(video_id = %self.config.video_id))]
    pub async fn mount(&mut self) -> Result<()> {
        match self.fetch_task() {
            Some(fetch) => {
                let result = fetch.await;
                self.resolve_source(result)
            }
            None => Ok(()),
        }
    }

    /// Record the outcome of the config fetch
    pub fn resolve_source(&mut self, result: Result<Url>) -> Result<()> {
        match result {
            Ok(url) => {
                if let Some(existing) = &self.source {
                    warn!(existing = %existing, ignored = %url, "Stream source already set");
                    return Ok(());
                }
                info!(source = %url, "Stream source set");
                self.source = Some(url);
                self.sync_surface(None)
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "Config fetch failed, nothing to play");
                Ok(())
            }
        }
    }

    /// Hand the player its playback engine
    pub fn attach_surface(&mut self, surface: Box<dyn PlaybackSurface>) -> Result<()> {
        self.surface = Some(surface);
        self.sync_surface(None)
    }

    /// Apply one action and push the result to the surface
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, "Dispatch");

        let Reduced { settings, seek_to } = self.settings.reduce(action);
        if settings.paused != self.settings.paused {
            info!(paused = settings.paused, position = settings.current_time, "Playback toggled");
        }

        self.settings = settings;
        self.settings_tx.send_replace(settings);
        self.sync_surface(seek_to)
    }

    /// Tap on the surface
    pub fn tap(&mut self) -> Result<()> {
        self.dispatch(Action::TogglePaused)
    }

    pub fn select_rate(&mut self, rate: PlaybackRate) -> Result<()> {
        self.dispatch(Action::SelectRate(rate))
    }

    pub fn select_volume(&mut self, volume: Volume) -> Result<()> {
        self.dispatch(Action::SelectVolume(volume))
    }

    pub fn select_resize_mode(&mut self, resize_mode: ResizeMode) -> Result<()> {
        self.dispatch(Action::SelectResizeMode(resize_mode))
    }

    pub fn handle_surface_event(&mut self, event: SurfaceEvent) -> Result<()> {
        if !matches!(event, SurfaceEvent::Progress(_)) {
            info!(event = event.name(), "Surface event");
        }
        self.dispatch(Action::Surface(event))
    }

    /// Props the surface would receive right now
    pub fn surface_props(&self) -> Option<SurfaceProps> {
        self.source
            .as_ref()
            .map(|source| SurfaceProps::new(source.clone(), &self.settings, self.config.repeat))
    }

    pub fn render(&self) -> Screen {
        match self.surface_props() {
            Some(surface) => Screen::Player(PlayerView {
                surface,
                controls: ControlStrip::from_settings(&self.settings),
            }),
            None => Screen::Empty,
        }
    }

    fn sync_surface(&mut self, seek_to: Option<f64>) -> Result<()> {
        let Some(props) = self.surface_props() else {
            return Ok(());
        };
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        surface.apply(&props)?;
        if let Some(position) = seek_to {
            debug!(position, "Seeking surface");
            surface.seek(position)?;
        }
        Ok(())
    }
}
