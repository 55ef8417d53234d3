//! WCAG luminance, contrast ratio and legible text colors.

use rgb::RGB8;
use serde::{Deserialize, Serialize};
use crate::convert::{hex_to_hsl, hex_to_rgb, rgb_to_hsl};
use crate::options::ContrastOptions;

/// Text color used over light backgrounds.
pub const DARK_TEXT: &str = "#1a1a2e";
/// Text color used over dark backgrounds.
pub const LIGHT_TEXT: &str = "#ffffff";
/// Backgrounds with an HSL lightness strictly above this get dark text.
pub const LIGHTNESS_THRESHOLD: f64 = 55.;

/// Linearize an sRGB channel in \[0, 255\].
#[inline]
fn linear(c: u8) -> f64 {
    let c = c as f64 / 255.;
    if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// WCAG relative luminance, in \[0, 1\].
pub fn relative_luminance(c: RGB8) -> f64 {
    0.2126 * linear(c.r) + 0.7152 * linear(c.g) + 0.0722 * linear(c.b)
}

/// WCAG contrast ratio of two colors, from 1 (identical luminance) to
/// 21 (black on white).  The order of the arguments does not matter.
pub fn rgb_contrast_ratio(c1: RGB8, c2: RGB8) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Contrast ratio of two `#rrggbb` strings.  Malformed strings count
/// as black.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> f64 {
    rgb_contrast_ratio(hex_to_rgb(hex1), hex_to_rgb(hex2))
}

/// Near-black or white, whichever reads better over `hex`.
///
/// ```
/// use color_harmony::contrast_color;
/// assert_eq!(contrast_color("#f5f5dc"), "#1a1a2e");
/// assert_eq!(contrast_color("#0f3460"), "#ffffff");
/// ```
pub fn contrast_color(hex: &str) -> &'static str {
    if hex_to_hsl(hex).l > LIGHTNESS_THRESHOLD { DARK_TEXT } else { LIGHT_TEXT }
}

/// Same as [`contrast_color`] with configurable threshold and text
/// colors.
pub fn contrast_color_with<'a>(opts: &'a ContrastOptions, c: RGB8) -> &'a str {
    if rgb_to_hsl(c).l > opts.threshold { &opts.dark } else { &opts.light }
}

/// WCAG 2 conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
         Serialize, Deserialize)]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// At least 3:1, enough for large text only.
    AALarge,
    /// At least 4.5:1.
    AA,
    /// At least 7:1.
    AAA,
}

impl WcagLevel {
    pub fn of_ratio(ratio: f64) -> Self {
        if ratio >= 7. { WcagLevel::AAA }
        else if ratio >= 4.5 { WcagLevel::AA }
        else if ratio >= 3. { WcagLevel::AALarge }
        else { WcagLevel::Fail }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors() {
        for hex in ["#000000", "#ffffff", "#e94560", "#808080"] {
            assert!((contrast_ratio(hex, hex) - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn black_on_white() {
        let r = contrast_ratio("#000000", "#FFFFFF");
        assert!((r - 21.).abs() < 1e-9, "{r}");
        assert_eq!(WcagLevel::of_ratio(r), WcagLevel::AAA);
    }

    #[test]
    fn symmetric() {
        let a = contrast_ratio("#e94560", "#16213e");
        let b = contrast_ratio("#16213e", "#e94560");
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_is_black() {
        assert_eq!(contrast_ratio("oops", "#000000"), 1.);
    }

    #[test]
    fn contrast_color_threshold() {
        // #8c8c8c has lightness 55 exactly, #8f8f8f has 56.
        assert_eq!(hex_to_hsl("#8c8c8c").l, 55.);
        assert_eq!(contrast_color("#8c8c8c"), LIGHT_TEXT);
        assert_eq!(hex_to_hsl("#8f8f8f").l, 56.);
        assert_eq!(contrast_color("#8f8f8f"), DARK_TEXT);
        assert_eq!(contrast_color("#ffffff"), DARK_TEXT);
        assert_eq!(contrast_color("#000000"), LIGHT_TEXT);
    }

    #[test]
    fn contrast_color_options() {
        let opts = ContrastOptions { threshold: 90., ..Default::default() };
        assert_eq!(contrast_color_with(&opts, RGB8::new(200, 200, 200)),
                   LIGHT_TEXT);
        let opts = ContrastOptions::default();
        assert_eq!(contrast_color_with(&opts, RGB8::new(200, 200, 200)),
                   DARK_TEXT);
    }

    #[test]
    fn levels() {
        assert_eq!(WcagLevel::of_ratio(1.), WcagLevel::Fail);
        assert_eq!(WcagLevel::of_ratio(3.), WcagLevel::AALarge);
        assert_eq!(WcagLevel::of_ratio(4.5), WcagLevel::AA);
        assert!(WcagLevel::AAA > WcagLevel::AA);
    }
}
