//! Progress indicator math

use crate::settings::PlaybackSettings;
use serde::Serialize;

/// Fraction of the stream already played.
///
/// Returns 0 whenever `current_time` is not positive. That guard also covers
/// `duration == 0` before the surface has loaded.
pub fn completion_fraction(current_time: f64, duration: f64) -> f64 {
    if current_time > 0.0 {
        current_time / duration
    } else {
        0.0
    }
}

/// Two adjacent segments sized by flex weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressBar {
    /// Flex weight of the played segment (0-100)
    pub completed: f64,
    /// Flex weight of the remaining segment (0-100)
    pub remaining: f64,
}

impl ProgressBar {
    pub fn new(current_time: f64, duration: f64) -> Self {
        let fraction = completion_fraction(current_time, duration);
        Self {
            completed: fraction * 100.0,
            remaining: (1.0 - fraction) * 100.0,
        }
    }

    pub fn from_settings(settings: &PlaybackSettings) -> Self {
        Self::new(settings.current_time, settings.duration)
    }

    /// Split `total` cells between the two segments
    pub fn split(&self, total: u16) -> (u16, u16) {
        let weight = self.completed + self.remaining;
        if !self.completed.is_finite() || !self.remaining.is_finite() || weight <= 0.0 {
            return (0, total);
        }
        let completed = ((self.completed / weight) * f64::from(total)).round();
        let completed = completed.clamp(0.0, f64::from(total)) as u16;
        (completed, total - completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_within_range() {
        for (t, d) in [(0.5, 1.0), (30.0, 120.0), (120.0, 120.0), (0.001, 7.0)] {
            let bar = ProgressBar::new(t, d);
            assert!((completion_fraction(t, d) - t / d).abs() < 1e-12);
            assert!((bar.completed + bar.remaining - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_positive_position_is_zero() {
        assert_eq!(completion_fraction(0.0, 60.0), 0.0);
        assert_eq!(completion_fraction(-2.0, 60.0), 0.0);
        assert_eq!(completion_fraction(0.0, 0.0), 0.0);

        let bar = ProgressBar::new(0.0, 0.0);
        assert_eq!(bar.completed, 0.0);
        assert_eq!(bar.remaining, 100.0);
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(ProgressBar::new(25.0, 100.0).split(40), (10, 30));
        assert_eq!(ProgressBar::new(0.0, 0.0).split(40), (0, 40));
        assert_eq!(ProgressBar::new(100.0, 100.0).split(40), (40, 0));
    }

    #[test]
    fn test_split_survives_unloaded_duration() {
        // a position reported before the duration yields an infinite weight
        let bar = ProgressBar::new(3.0, 0.0);
        assert_eq!(bar.split(20), (0, 20));
    }
}
