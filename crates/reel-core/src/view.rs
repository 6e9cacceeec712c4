//! Declarative render output

use crate::{controls::ControlStrip, surface::SurfaceProps};

/// What the screen shows for one render
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// No stream source yet (or the config fetch failed)
    Empty,
    Player(PlayerView),
}

/// Full-screen surface with the control strip on top
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub surface: SurfaceProps,
    pub controls: ControlStrip,
}

impl Screen {
    pub fn is_empty(&self) -> bool {
        matches!(self, Screen::Empty)
    }

    pub fn player(&self) -> Option<&PlayerView> {
        match self {
            Screen::Player(view) => Some(view),
            Screen::Empty => None,
        }
    }
}
