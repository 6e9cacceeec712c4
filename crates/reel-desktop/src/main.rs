//! Reel - single-screen Vimeo player for the desktop

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use clap::Parser;
use reel_core::{
    event_channel, ConfigSource, PlayerConfig, StaticSource, VideoId, VideoPlayer,
    VimeoConfigClient,
};
use reel_desktop::{app, check_gstreamer_installation, GstSurface};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Reel - play one Vimeo video with rate, volume and fit controls
#[derive(Parser)]
#[command(name = "reel")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(about = "Single-screen Vimeo player", long_about = None)]
struct Args {
    /// Vimeo video id to resolve
    #[arg(long)]
    video_id: Option<String>,

    /// Play this stream directly instead of resolving a Vimeo config
    #[arg(long)]
    uri: Option<Url>,

    /// Config endpoint base (`/{id}/config` is appended)
    #[arg(long)]
    endpoint: Option<String>,

    /// Config request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Loop the video
    #[arg(long)]
    repeat: bool,

    /// JSON player config; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write logs (the terminal is used by the overlay)
    #[arg(long, default_value = "reel.log")]
    log_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn player_config(&self) -> Result<PlayerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("read config {}", path.display()))?;
                PlayerConfig::from_json_str(&json)
                    .with_context(|| format!("parse config {}", path.display()))?
            }
            None => PlayerConfig::default(),
        };

        if let Some(id) = &self.video_id {
            config.video_id = VideoId::new(id.as_str());
        }
        if let Some(endpoint) = &self.endpoint {
            config.config_endpoint = endpoint.clone();
        }
        if self.timeout_ms.is_some() {
            config.request_timeout_ms = self.timeout_ms;
        }
        config.repeat |= self.repeat;

        config.validate().context("invalid player config")?;
        Ok(config)
    }
}

fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file, args.verbose)?;
    reel_core::init();

    let config = args.player_config()?;

    let missing = check_gstreamer_installation()?;
    if missing.iter().any(|m| m.starts_with("playbin")) {
        bail!("GStreamer is missing required elements: {}", missing.join(", "));
    }
    for element in &missing {
        warn!(element = %element, "GStreamer element not found");
    }

    let source: Arc<dyn ConfigSource> = match &args.uri {
        Some(uri) => {
            info!(uri = %uri, "Playing stream directly");
            Arc::new(StaticSource(uri.clone()))
        }
        None => Arc::new(VimeoConfigClient::from_config(&config)?),
    };

    let (sink, events) = event_channel();
    let surface = GstSurface::new(sink)?;

    let mut player = VideoPlayer::new(config, source);
    player.attach_surface(Box::new(surface))?;

    app::run(player, events).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "reel",
            "--video-id",
            "347119375",
            "--endpoint",
            "http://127.0.0.1:8080/video",
            "--timeout-ms",
            "1500",
            "--repeat",
        ]);
        let config = args.player_config().unwrap();
        assert_eq!(config.video_id.as_str(), "347119375");
        assert_eq!(config.config_endpoint, "http://127.0.0.1:8080/video");
        assert_eq!(config.request_timeout_ms, Some(1500));
        assert!(config.repeat);
    }

    #[test]
    fn test_default_video() {
        let args = Args::parse_from(["reel"]);
        let config = args.player_config().unwrap();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(args.log_file, PathBuf::from("reel.log"));
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let args = Args::parse_from(["reel", "--endpoint", "ftp://example/video"]);
        assert!(args.player_config().is_err());
    }
}
