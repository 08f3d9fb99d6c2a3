//! Render configuration for signature capture and replay
//!
//! The pen style is captured into every exported [`SignatureRecord`] so a
//! replay looks identical to the live recording, whatever the current
//! configuration happens to be.
//!
//! [`SignatureRecord`]: crate::types::SignatureRecord

use serde::{Deserialize, Serialize};

use crate::render::RenderError;

/// Default pen color (midnight blue)
pub const DEFAULT_PEN_COLOR: &str = "#191970";

/// Default pen width in pixels
pub const DEFAULT_PEN_WIDTH: f32 = 3.0;

/// Pen appearance for live drawing and replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenStyle {
    /// Stroke color as a CSS-style hex string (`#rgb` or `#rrggbb`)
    pub color: String,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_PEN_COLOR.to_string(),
            width: DEFAULT_PEN_WIDTH,
        }
    }
}

impl PenStyle {
    /// Create a pen style with the given color and width
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Parse a `#rgb` or `#rrggbb` hex color into RGBA components in 0.0..=1.0.
///
/// Alpha is always 1.0. Anything unparseable is a setup-time error; pen
/// colors are never silently substituted mid-replay.
pub fn parse_hex_color(color: &str) -> Result<[f32; 4], RenderError> {
    let err = || RenderError::PenColor(color.to_string());

    let hex = color.strip_prefix('#').ok_or_else(err)?;
    // Records can arrive from storage; slicing a non-ASCII string by byte
    // index would panic on a char boundary, so reject it up front.
    if !hex.is_ascii() {
        return Err(err());
    }
    let (r, g, b) = match hex.len() {
        3 => {
            let digit = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .map(|d| d * 17)
                    .map_err(|_| err())
            };
            (digit(0)?, digit(1)?, digit(2)?)
        }
        6 => {
            let pair =
                |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            (pair(0)?, pair(2)?, pair(4)?)
        }
        _ => return Err(err()),
    };

    Ok([
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = PenStyle::default();
        assert_eq!(style.color, DEFAULT_PEN_COLOR);
        assert_eq!(style.width, DEFAULT_PEN_WIDTH);
    }

    #[test]
    fn test_parse_long_form() {
        let rgba = parse_hex_color("#191970").unwrap();
        assert!((rgba[0] - 0x19 as f32 / 255.0).abs() < 1e-6);
        assert!((rgba[1] - 0x19 as f32 / 255.0).abs() < 1e-6);
        assert!((rgba[2] - 0x70 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(rgba[3], 1.0);
    }

    #[test]
    fn test_parse_short_form() {
        // #abc expands to #aabbcc
        let short = parse_hex_color("#abc").unwrap();
        let long = parse_hex_color("#aabbcc").unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_hex_color("191970").is_err());
        assert!(parse_hex_color("#19197").is_err());
        assert!(parse_hex_color("#19197g").is_err());
        assert!(parse_hex_color("blue").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        // Multi-byte characters must come back as errors, not slice panics
        assert!(parse_hex_color("#\u{e9}9").is_err());
        assert!(parse_hex_color("#ﬀﬀﬀ").is_err());
        assert!(parse_hex_color("#19197é").is_err());
    }
}
