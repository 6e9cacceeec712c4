//! Reel colour palette
//!
//! Single source of truth for the overlay colours. Front ends convert the hex
//! strings with [`hex_to_rgb`].
//!
//! # Usage
//!
//! ```rust
//! use reel_core::theme::{hex_to_rgb, ReelColors};
//!
//! let colors = ReelColors::default();
//! assert_eq!(hex_to_rgb(colors.progress_completed), Some((204, 204, 204)));
//! ```

use serde::Serialize;

/// Player colour palette
#[derive(Debug, Clone, Serialize)]
pub struct ReelColors {
    /// Behind the video - #000000
    pub background: &'static str,
    /// Control option text - #ffffff
    pub control_text: &'static str,
    /// Played part of the progress bar - #cccccc
    pub progress_completed: &'static str,
    /// Unplayed part of the progress bar - #2C2C2C
    pub progress_remaining: &'static str,
}

impl Default for ReelColors {
    fn default() -> Self {
        Self {
            background: "#000000",
            control_text: "#ffffff",
            progress_completed: "#cccccc",
            progress_remaining: "#2C2C2C",
        }
    }
}

/// Parse `#rrggbb` (case-insensitive) into an RGB tuple
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let colors = ReelColors::default();
        assert_eq!(hex_to_rgb(colors.background), Some((0, 0, 0)));
        assert_eq!(hex_to_rgb(colors.control_text), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb(colors.progress_remaining), Some((44, 44, 44)));
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert_eq!(hex_to_rgb("cccccc"), None);
        assert_eq!(hex_to_rgb("#ccc"), None);
        assert_eq!(hex_to_rgb("#gggggg"), None);
        assert_eq!(hex_to_rgb("#+f+f+f"), None);
        assert_eq!(hex_to_rgb("#-1ffff"), None);
    }
}
