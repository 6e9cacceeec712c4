//! Keyboard and mouse handling for the desktop player

use crate::overlay::HitMap;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use reel_core::{Action, PlaybackRate, ResizeMode, Volume};

/// What an input event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    Dispatch(Action),
    Quit,
}

/// Translate a terminal event; `hits` comes from the last drawn frame
pub fn translate(event: &Event, hits: &HitMap) -> Option<ControlAction> {
    match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(mouse) => mouse_action(mouse, hits),
        _ => None,
    }
}

/// Keyboard shortcuts:
/// - space: tap the video
/// - 1-5: 0.25x / 0.5x / 1x / 1.5x / 2x
/// - v/b/n: 50% / 100% / 150% volume
/// - c/o/s: cover / contain / stretch
/// - q, Esc: quit
pub fn key_action(key: &KeyEvent) -> Option<ControlAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(ControlAction::Quit),
        KeyCode::Char(' ') => Action::TogglePaused,
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Action::SelectRate(PlaybackRate::ALL[index])
        }
        KeyCode::Char('v') => Action::SelectVolume(Volume::Half),
        KeyCode::Char('b') => Action::SelectVolume(Volume::Full),
        KeyCode::Char('n') => Action::SelectVolume(Volume::Boost),
        KeyCode::Char('c') => Action::SelectResizeMode(ResizeMode::Cover),
        KeyCode::Char('o') => Action::SelectResizeMode(ResizeMode::Contain),
        KeyCode::Char('s') => Action::SelectResizeMode(ResizeMode::Stretch),
        _ => return None,
    };

    Some(ControlAction::Dispatch(action))
}

/// Left clicks are taps
pub fn mouse_action(mouse: &MouseEvent, hits: &HitMap) -> Option<ControlAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hits
            .action_at(mouse.column, mouse.row)
            .map(ControlAction::Dispatch),
        _ => None,
    }
}
