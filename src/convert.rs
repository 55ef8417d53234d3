//! Conversions between `#rrggbb` strings, RGB and HSL.

use std::fmt;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A color in the HSL cylindrical model.
///
/// `h` is in degrees, `s` and `l` are percentages.  Values produced by
/// [`hex_to_hsl`] are rounded to integers with `h` ∈ \[0, 360) and
/// `s`, `l` ∈ \[0, 100\].  Values fed to [`hsl_to_hex`] may be anything:
/// the hue is wrapped and the resulting channels are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Returned by [`hex_to_hsl`] when the input is not a color.
pub const FALLBACK_HSL: Hsl = Hsl { h: 0., s: 50., l: 50. };

/// Returned by [`hex_to_rgb`] when the input is not a color.
pub const FALLBACK_RGB: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self { Hsl { h, s, l } }

    #[inline]
    pub fn to_rgb(&self) -> RGB8 { hsl_to_rgb(self.h, self.s, self.l) }

    #[inline]
    pub fn to_hex(&self) -> String { to_hex(self.to_rgb()) }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)",
               self.h.round(), self.s.round(), self.l.round())
    }
}

/// Reasons a string is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    #[error("empty color string")]
    Empty,
    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Parse a 6-digit hex triplet.  The `#` prefix is optional, digits
/// are case-insensitive and surrounding whitespace is ignored.
///
/// ```
/// use color_harmony::parse_hex;
/// assert_eq!(parse_hex("#FF8000").unwrap(), rgb::RGB8::new(255, 128, 0));
/// assert!(parse_hex("#ff80").is_err());
/// ```
pub fn parse_hex(hex: &str) -> Result<RGB8, ParseHexError> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.is_empty() { return Err(ParseHexError::Empty) }
    if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseHexError::InvalidDigit(c))
    }
    // All chars are ASCII from here on, so byte slicing is safe.
    if s.len() != 6 { return Err(ParseHexError::InvalidLength(s.len())) }
    let channel = |i: usize| {
        u8::from_str_radix(&s[i .. i + 2], 16)
            .map_err(|_| ParseHexError::InvalidDigit(s.as_bytes()[i] as char))
    };
    Ok(RGB8 { r: channel(0)?, g: channel(2)?, b: channel(4)? })
}

/// Format a color as a lowercase `#rrggbb` string.
#[inline]
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Convert RGB to HSL, every component rounded to an integer.
pub fn rgb_to_hsl(c: RGB8) -> Hsl {
    let r = c.r as f64 / 255.;
    let g = c.g as f64 / 255.;
    let b = c.b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    if max == min {
        return Hsl { h: 0., s: 0., l: (l * 100.).round() }
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
    let h = {
        if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
        else if max == g { (b - r) / d + 2. }
        else { (r - g) / d + 4. } };
    Hsl { h: (h * 60.).round().rem_euclid(360.),
          s: (s * 100.).round(),
          l: (l * 100.).round() }
}

/// Convert HSL to RGB.  The hue is taken modulo 360; saturation and
/// lightness outside \[0, 100\] give channels that are clamped.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RGB8 {
    let h = h.rem_euclid(360.);
    let s = s / 100.;
    let l = l / 100.;
    let a = s * l.min(1. - l);
    let channel = |n: f64| {
        let k = (n + h / 30.) % 12.;
        let c = l - a * (k - 3.).min(9. - k).min(1.).max(-1.);
        // NaN saturates to 0 in the cast.
        (255. * c).round().clamp(0., 255.) as u8
    };
    RGB8 { r: channel(0.), g: channel(8.), b: channel(4.) }
}

/// Parse `hex` and convert it to HSL.  Malformed input yields
/// [`FALLBACK_HSL`] instead of an error.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match parse_hex(hex) {
        Ok(c) => rgb_to_hsl(c),
        Err(e) => {
            debug!(hex, error = %e, "malformed hex color, using fallback HSL");
            FALLBACK_HSL
        }
    }
}

/// Parse `hex` into RGB channels.  Malformed input yields
/// [`FALLBACK_RGB`] (black).
pub fn hex_to_rgb(hex: &str) -> RGB8 {
    parse_hex(hex).unwrap_or_else(|e| {
        debug!(hex, error = %e, "malformed hex color, using fallback RGB");
        FALLBACK_RGB
    })
}

/// Convert HSL to a `#rrggbb` string.
#[inline]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    to_hex(hsl_to_rgb(h, s, l))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_case_and_prefix() {
        let c = RGB8::new(0xab, 0xcd, 0xef);
        assert_eq!(parse_hex("#abcdef"), Ok(c));
        assert_eq!(parse_hex("ABCDEF"), Ok(c));
        assert_eq!(parse_hex("  #AbCdEf "), Ok(c));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_hex(""), Err(ParseHexError::Empty));
        assert_eq!(parse_hex("#"), Err(ParseHexError::Empty));
        assert_eq!(parse_hex("#fff"), Err(ParseHexError::InvalidLength(3)));
        assert_eq!(parse_hex("#12345g"), Err(ParseHexError::InvalidDigit('g')));
        assert_eq!(parse_hex("#12é456"), Err(ParseHexError::InvalidDigit('é')));
    }

    #[test]
    fn extremes() {
        assert_eq!(hex_to_hsl("#FFFFFF"), Hsl::new(0., 0., 100.));
        assert_eq!(hex_to_hsl("#000000"), Hsl::new(0., 0., 0.));
        assert_eq!(hex_to_hsl("#ff0000"), Hsl::new(0., 100., 50.));
        assert_eq!(hex_to_hsl("#00ff00"), Hsl::new(120., 100., 50.));
        assert_eq!(hex_to_hsl("#0000ff"), Hsl::new(240., 100., 50.));
    }

    #[test]
    fn hue_wraps_below_360() {
        // Hue 359.53 rounds to 360 and must wrap to 0.
        let hsl = hex_to_hsl("#ff0002");
        assert!(hsl.h >= 0. && hsl.h < 360., "{:?}", hsl);
    }

    #[test]
    fn fallbacks() {
        assert_eq!(hex_to_hsl("not a color"), FALLBACK_HSL);
        assert_eq!(hex_to_rgb("#12"), FALLBACK_RGB);
    }

    #[test]
    fn hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0., 100., 50.), "#ff0000");
        assert_eq!(hsl_to_hex(120., 100., 50.), "#00ff00");
        assert_eq!(hsl_to_hex(240., 100., 50.), "#0000ff");
        assert_eq!(hsl_to_hex(0., 0., 100.), "#ffffff");
        assert_eq!(hsl_to_hex(600., 100., 50.), "#0000ff");
        assert_eq!(hsl_to_hex(-120., 100., 50.), "#0000ff");
        assert_eq!(hsl_to_hex(0., 0., 120.), "#ffffff");
    }

    #[test]
    fn round_trip_drift_is_small() {
        for hex in ["#1a1a2e", "#e94560", "#0f3460", "#16213e", "#f5f5dc",
                    "#808080", "#123456"] {
            let c0 = hex_to_rgb(hex);
            let Hsl { h, s, l } = hex_to_hsl(hex);
            let c1 = hsl_to_rgb(h, s, l);
            for (a, b) in [(c0.r, c1.r), (c0.g, c1.g), (c0.b, c1.b)] {
                // One unit of rounding per component adds up to a few
                // units per channel.
                assert!((a as i32 - b as i32).abs() <= 4,
                        "{hex}: {c0:?} vs {c1:?}");
            }
        }
    }
}
