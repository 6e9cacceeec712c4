//! Desktop event loop
//!
//! One task owns the [`VideoPlayer`]. It is fed by the spawned config fetch,
//! the surface event channel and terminal input, and redraws on every tick.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use reel_core::{Action, EventStream, ReelColors, SurfaceEvent, VideoPlayer};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use crate::controls::{translate, ControlAction};
use crate::overlay::{self, HitMap};

/// Redraw and input polling period
const TICK: Duration = Duration::from_millis(50);

type Fetch = JoinHandle<reel_core::Result<Url>>;

/// Player plus what the last frame drew
pub struct App {
    player: VideoPlayer,
    hits: HitMap,
    colors: ReelColors,
}

impl App {
    pub fn new(player: VideoPlayer) -> Self {
        Self {
            player,
            hits: HitMap::default(),
            colors: ReelColors::default(),
        }
    }

    pub fn player(&self) -> &VideoPlayer {
        &self.player
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.hits = overlay::draw(frame, &self.player.render(), &self.colors);
    }

    /// Handle a terminal event; returns false when the user asked to quit
    pub fn on_input(&mut self, event: &Event) -> bool {
        match translate(event, &self.hits) {
            Some(ControlAction::Quit) => false,
            Some(ControlAction::Dispatch(action)) => {
                self.dispatch(action);
                true
            }
            None => true,
        }
    }

    pub fn on_surface_event(&mut self, event: SurfaceEvent) {
        if let Err(e) = self.player.handle_surface_event(event) {
            warn!(error = %e, "Surface rejected update");
        }
    }

    pub fn on_fetch(&mut self, result: reel_core::Result<Url>) {
        if let Err(e) = self.player.resolve_source(result) {
            warn!(error = %e, "Surface rejected source");
        }
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.player.dispatch(action) {
            warn!(error = %e, ?action, "Surface rejected update");
        }
    }
}

/// Take over the terminal and run until the user quits
pub async fn run(player: VideoPlayer, events: EventStream) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, App::new(player), events).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    mut events: EventStream,
) -> Result<()> {
    let mut fetch: Option<Fetch> = app.player.fetch_task().map(tokio::spawn);
    let mut ticker = tokio::time::interval(TICK);

    let outcome = loop {
        tokio::select! {
            Some(event) = events.recv() => app.on_surface_event(event),
            result = join_fetch(&mut fetch), if fetch.is_some() => {
                fetch = None;
                app.on_fetch(result);
            }
            _ = ticker.tick() => {
                if let Err(e) = terminal.draw(|f| app.draw(f)) {
                    break Err(e).context("draw frame");
                }
                match drain_input(&mut app) {
                    Ok(true) => {}
                    Ok(false) => break Ok(()),
                    Err(e) => break Err(e),
                }
            }
        }
    };

    if let Some(handle) = fetch {
        debug!("Aborting config fetch");
        handle.abort();
    }
    info!("Player closed");
    outcome
}

async fn join_fetch(fetch: &mut Option<Fetch>) -> reel_core::Result<Url> {
    match fetch {
        Some(handle) => match handle.await {
            Ok(result) => result,
            Err(e) => Err(io::Error::other(e).into()),
        },
        None => std::future::pending().await,
    }
}

/// Handle every pending terminal event without blocking
fn drain_input(app: &mut App) -> Result<bool> {
    while event::poll(Duration::ZERO).context("poll terminal events")? {
        let event = event::read().context("read terminal event")?;
        if !app.on_input(&event) {
            return Ok(false);
        }
    }
    Ok(true)
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    undo_on_error(enter_screen, leave_screen)
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("create terminal")?;
    Ok(terminal)
}

/// Leave raw mode and the alternate screen after a failed setup
fn leave_screen() {
    disable_raw_mode().ok();
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen).ok();
}

/// Run `setup`, calling `undo` only when it fails
fn undo_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| undo())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;
    use reel_core::{PlaybackRate, PlayerConfig, StaticSource};
    use std::sync::Arc;

    fn stream() -> Url {
        Url::parse("https://example/stream.m3u8").unwrap()
    }

    fn app() -> App {
        let source = Arc::new(StaticSource(stream()));
        App::new(VideoPlayer::new(PlayerConfig::default(), source))
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_on_option() {
        let mut app = app();
        app.on_fetch(Ok(stream()));
        draw(&mut app);

        let target = app
            .hits()
            .targets()
            .iter()
            .find(|t| t.label == "2x")
            .copied()
            .unwrap();
        assert!(app.on_input(&click(target.rect.x, target.rect.y)));
        assert_eq!(app.player().settings().rate, PlaybackRate::Double);
    }

    #[test]
    fn test_click_on_surface_plays() {
        let mut app = app();
        app.on_fetch(Ok(stream()));
        draw(&mut app);

        assert!(app.on_input(&click(45, 1)));
        assert!(!app.player().settings().paused);
    }

    #[test]
    fn test_failed_fetch_draws_nothing() {
        let mut app = app();
        app.on_fetch(Err(reel_core::Error::MissingCdn { cdn: "akfire_interconnect_quic".into() }));
        draw(&mut app);

        assert!(app.hits().targets().is_empty());
        assert!(app.on_input(&click(45, 1)));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.on_input(&quit));
    }

    #[test]
    fn test_surface_end_rewinds() {
        let mut app = app();
        app.on_fetch(Ok(stream()));
        app.on_surface_event(SurfaceEvent::load(10.0));
        app.on_surface_event(SurfaceEvent::progress(9.5));
        app.on_surface_event(SurfaceEvent::End);

        let settings = app.player().settings();
        assert!(settings.paused);
        assert_eq!(settings.current_time, 0.0);
    }

    #[test]
    fn test_failed_setup_is_undone() {
        let mut undone = false;
        let result: Result<()> = undo_on_error(|| Err(anyhow::anyhow!("no tty")), || undone = true);
        assert!(result.is_err());
        assert!(undone);

        let mut undone = false;
        let result = undo_on_error(|| Ok(7), || undone = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!undone);
    }

    #[tokio::test]
    async fn test_join_fetch() {
        let mut fetch: Option<Fetch> = Some(tokio::spawn(async { Ok(stream()) }));
        assert_eq!(join_fetch(&mut fetch).await.unwrap(), stream());
    }
}
