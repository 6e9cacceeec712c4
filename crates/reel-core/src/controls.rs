//! Control strip view model
//!
//! Options come from closed candidate sets, so every tap is valid by
//! construction and simply overwrites its field.

use crate::{
    progress::ProgressBar,
    settings::{Action, PlaybackSettings},
    types::{PlaybackRate, ResizeMode, Volume},
};

/// Which setting a group of options controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlGroupKind {
    Rate,
    Volume,
    ResizeMode,
}

/// A single tap target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlOption {
    pub label: &'static str,
    /// Rendered with emphasis when true
    pub selected: bool,
    /// Dispatched on tap
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlGroup {
    pub kind: ControlGroupKind,
    pub options: Vec<ControlOption>,
}

impl ControlGroup {
    fn build<T: Copy + PartialEq>(
        kind: ControlGroupKind,
        candidates: &[T],
        current: T,
        label: impl Fn(&T) -> &'static str,
        action: impl Fn(T) -> Action,
    ) -> Self {
        let options = candidates
            .iter()
            .map(|candidate| ControlOption {
                label: label(candidate),
                selected: *candidate == current,
                action: action(*candidate),
            })
            .collect();
        Self { kind, options }
    }

    /// The emphasized option
    pub fn selected(&self) -> Option<&ControlOption> {
        self.options.iter().find(|o| o.selected)
    }
}

/// Everything drawn over the video
#[derive(Debug, Clone, PartialEq)]
pub struct ControlStrip {
    pub rate: ControlGroup,
    pub volume: ControlGroup,
    pub resize_mode: ControlGroup,
    pub progress: ProgressBar,
}

impl ControlStrip {
    pub fn from_settings(settings: &PlaybackSettings) -> Self {
        Self {
            rate: ControlGroup::build(
                ControlGroupKind::Rate,
                &PlaybackRate::ALL,
                settings.rate,
                PlaybackRate::label,
                Action::SelectRate,
            ),
            volume: ControlGroup::build(
                ControlGroupKind::Volume,
                &Volume::ALL,
                settings.volume,
                Volume::label,
                Action::SelectVolume,
            ),
            resize_mode: ControlGroup::build(
                ControlGroupKind::ResizeMode,
                &ResizeMode::ALL,
                settings.resize_mode,
                ResizeMode::label,
                Action::SelectResizeMode,
            ),
            progress: ProgressBar::from_settings(settings),
        }
    }

    /// Groups in left-to-right order
    pub fn groups(&self) -> [&ControlGroup; 3] {
        [&self.rate, &self.volume, &self.resize_mode]
    }
}
