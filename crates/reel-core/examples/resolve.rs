//! Stream resolution example
//!
//! Resolves a Vimeo video id to its HLS URL and prints the initial screen.
//!
//! Run with: cargo run -p reel-core --example resolve -- 253989945

use reel_core::{PlayerConfig, Screen, VideoId, VideoPlayer, VimeoConfigClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    reel_core::init();

    let mut config = PlayerConfig::default();
    if let Some(id) = std::env::args().nth(1) {
        config.video_id = VideoId::new(id);
    }

    println!("Reel Core - Stream Resolution Example");
    println!("=====================================\n");
    println!("Video: {}", config.video_id);
    println!("Config URL: {}\n", config.config_url()?);

    let client = VimeoConfigClient::from_config(&config)?;
    let mut player = VideoPlayer::new(config, Arc::new(client));
    player.mount().await?;

    match player.render() {
        Screen::Empty => println!("Nothing to play (config fetch failed)"),
        Screen::Player(view) => {
            println!("Source: {}", view.surface.source);
            for group in view.controls.groups() {
                let labels: Vec<String> = group
                    .options
                    .iter()
                    .map(|o| if o.selected { format!("[{}]", o.label) } else { o.label.to_string() })
                    .collect();
                println!("  {:?}: {}", group.kind, labels.join(" "));
            }
        }
    }

    Ok(())
}
