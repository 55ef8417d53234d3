//! Approximate, human readable color names.

use lazy_static::lazy_static;
use crate::convert::{hex_to_hsl, Hsl};

lazy_static! {
    /// Hue bands: a hue strictly below the bound gets the name.
    static ref HUE_BANDS: Vec<(f64, &'static str)> = vec![
        (15., "Red"), (45., "Orange"), (70., "Yellow"), (90., "Lime"),
        (150., "Green"), (180., "Teal"), (200., "Cyan"), (250., "Blue"),
        (285., "Purple"), (320., "Magenta"), (345., "Pink"), (360., "Red"),
    ];

    /// Names of desaturated colors: lightness strictly above the bound.
    static ref GRAY_BANDS: Vec<(f64, &'static str)> = vec![
        (90., "White"), (70., "Light Gray"), (40., "Gray"),
        (15., "Dark Gray"), (f64::NEG_INFINITY, "Black"),
    ];
}

const GRAY_SATURATION: f64 = 10.;
const LIGHT: f64 = 75.;
const DARK: f64 = 25.;
const MUTED: f64 = 35.;

/// Name of a color given in HSL.
pub fn hsl_name(Hsl { h, s, l }: Hsl) -> String {
    if s < GRAY_SATURATION {
        let name = GRAY_BANDS.iter().find(|(b, _)| l > *b)
            .map_or("Black", |&(_, n)| n);
        return name.to_string()
    }
    let h = h.rem_euclid(360.);
    let hue = HUE_BANDS.iter().find(|(b, _)| h < *b)
        .map_or("Red", |&(_, n)| n);
    let mut name = String::new();
    if l > LIGHT { name.push_str("Light ") }
    else if l < DARK { name.push_str("Dark ") }
    if s < MUTED { name.push_str("Muted ") }
    name.push_str(hue);
    name
}

/// Coarse name of a `#rrggbb` color, e.g. `"Dark Blue"`.  The
/// classification is lossy; malformed input is named after the
/// fallback HSL value.
///
/// ```
/// use color_harmony::color_name;
/// assert_eq!(color_name("#ff0000"), "Red");
/// assert_eq!(color_name("#ffffff"), "White");
/// ```
pub fn color_name(hex: &str) -> String { hsl_name(hex_to_hsl(hex)) }


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grays() {
        assert_eq!(color_name("#ffffff"), "White");
        assert_eq!(color_name("#cccccc"), "Light Gray");
        assert_eq!(color_name("#808080"), "Gray");
        assert_eq!(color_name("#333333"), "Dark Gray");
        assert_eq!(color_name("#000000"), "Black");
    }

    #[test]
    fn hues() {
        assert_eq!(color_name("#ff0000"), "Red");
        assert_eq!(color_name("#ff8000"), "Orange");
        assert_eq!(color_name("#ffff00"), "Yellow");
        assert_eq!(color_name("#00ff00"), "Green");
        assert_eq!(color_name("#00ffff"), "Cyan");
        assert_eq!(color_name("#0000ff"), "Blue");
        assert_eq!(color_name("#ff00ff"), "Magenta");
        assert_eq!(color_name("#ff0040"), "Red");
    }

    #[test]
    fn modifiers() {
        assert_eq!(color_name("#000066"), "Dark Blue");
        assert_eq!(color_name("#add8e6"), "Light Cyan");
        assert_eq!(hsl_name(Hsl::new(210., 20., 50.)), "Muted Blue");
        assert_eq!(hsl_name(Hsl::new(210., 20., 85.)), "Light Muted Blue");
    }

    #[test]
    fn fallback_is_named() {
        // Fallback HSL is (0, 50, 50).
        assert_eq!(color_name("zzz"), "Red");
    }
}
