//! Color-space conversions, contrast helpers and harmony palettes.
//!
//! - Conversions between `#rrggbb` strings, RGB and [`Hsl`]:
//!   [`hex_to_hsl`], [`hex_to_rgb`], [`hsl_to_hex`].
//! - Legibility: [`contrast_color`], [`contrast_ratio`], [`WcagLevel`].
//! - A coarse [`color_name`].
//! - Harmonies: [`generate_harmony`] for every [`HarmonyScheme`].
//! - Sampling of the color wheel: [`Wheel`] and the [`ColorRange`]
//!   trait.
//! - Code snippets of a [`Palette`]: [`export`].
//!
//! String-based functions never fail: a malformed color is replaced
//! by a fixed fallback.  Use [`parse_hex`] to detect bad input.  All
//! the RGB types of the [`rgb`] crate get the same helpers as methods
//! through [`RGBColor`].

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod contrast;
mod convert;
mod export;
mod harmony;
mod names;
mod options;
mod palette;

pub use contrast::{contrast_color, contrast_color_with, contrast_ratio,
                   relative_luminance, rgb_contrast_ratio, WcagLevel,
                   DARK_TEXT, LIGHT_TEXT, LIGHTNESS_THRESHOLD};
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, parse_hex,
                  rgb_to_hsl, to_hex, Hsl, ParseHexError,
                  FALLBACK_HSL, FALLBACK_RGB};
pub use export::{export, ParseSnippetError, Snippet};
pub use harmony::{generate_harmony, generate_harmony_with, harmony_hsl,
                  harmony_hsl_with, HarmonyScheme, ParseSchemeError};
pub use names::{color_name, hsl_name};
pub use options::{ContrastOptions, ExportOptions, HarmonyOptions};
pub use palette::Palette;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding `n` points evenly spaced between
    /// `a` and `b` (both included) together with their colors.  It is
    /// not required that `a <= b`.
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        let a = a.clamp(f64::MIN, f64::MAX);
        let b = b.clamp(f64::MIN, f64::MAX);
        Range { range: self, color: PhantomData, a, b,
                last: n.saturating_sub(1), front: 0, back: n }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    last: usize,
    front: usize, // next position from the front
    back: usize,  // one past the next position from the back
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    fn at(&self, k: usize) -> (f64, Color) {
        if k == 0 { return (self.a, self.range.rgb(0.)) }
        if k == self.last { return (self.b, self.range.rgb(1.)) }
        let t = k as f64 / self.last as f64;
        let mut x = ((self.last - k) as f64 * self.a + k as f64 * self.b)
            / self.last as f64;
        if x.is_infinite() { x = (1. - t) * self.a + t * self.b }
        (x, self.range.rgb(t))
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back { return None }
        let item = self.at(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back { return None }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

/// The hue circle at a fixed saturation and lightness: `t` ∈ \[0, 1\]
/// maps to the hue `360·t`.
///
/// Created by [`RGBColor::wheel`].
pub struct Wheel<Color> {
    saturation: f64,
    lightness: f64,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> ColorRange<Color> for Wheel<Color> {
    fn rgb(&self, t: f64) -> Color {
        Color::from_hsl(Hsl::new(360. * t, self.saturation, self.lightness))
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// The color rounded to 8 bits per channel, alpha dropped.
    fn to_rgb8(&self) -> RGB8 {
        let c = Self::to_rgba(self);
        RGB8 { r: q8(c.r), g: q8(c.g), b: q8(c.b) }
    }

    /// Opaque color from HSL.
    fn from_hsl(hsl: Hsl) -> Self {
        let c = hsl.to_rgb();
        Self::from_rgba(RGBA { r: c.r as f64, g: c.g as f64, b: c.b as f64,
                               a: 255. })
    }

    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_harmony::RGBColor;
    /// assert_eq!(RGB8::new(233, 69, 96).to_hex(), "#e94560");
    /// ```
    fn to_hex(&self) -> String { to_hex(self.to_rgb8()) }

    fn to_hsl(&self) -> Hsl { rgb_to_hsl(self.to_rgb8()) }

    /// WCAG relative luminance in \[0, 1\].
    fn luminance(&self) -> f64 { relative_luminance(self.to_rgb8()) }

    /// WCAG contrast ratio with `other`.
    fn contrast_ratio(&self, other: &Self) -> f64 {
        rgb_contrast_ratio(self.to_rgb8(), other.to_rgb8())
    }

    /// Near-black or white text color legible over this color.
    fn contrast_color(&self) -> Self {
        let text = hex_to_rgb(contrast_color(&self.to_hex()));
        Self::from_rgba(<RGB8 as RGBColor>::to_rgba(&text))
    }

    fn name(&self) -> String { hsl_name(self.to_hsl()) }

    /// Harmony of `count` colors built around this color.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_harmony::{HarmonyScheme, RGBColor};
    /// let red = RGB8::new(255, 0, 0);
    /// let p = red.harmony(HarmonyScheme::Complementary, 2);
    /// assert_eq!(p.hex(), ["#ff0000", "#00ffff"]);
    /// ```
    fn harmony(&self, scheme: HarmonyScheme, count: usize) -> Palette {
        let Hsl { h, s, l } = self.to_hsl();
        generate_harmony(h, s, l, scheme, count)
    }

    /// The color wheel at the given saturation and lightness.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_harmony::{RGBColor, ColorRange};
    /// let wheel = RGB8::wheel(100., 50.);
    /// assert_eq!(wheel.rgb(0.5), RGB8::new(0, 255, 255));
    /// ```
    fn wheel(saturation: f64, lightness: f64) -> Wheel<Self> {
        Wheel { saturation, lightness, color: PhantomData }
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

#[inline]
fn q8(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

// 16 bit channels span [0, 65535]; 257 = 65535 / 255.
#[inline]
fn q16(x: f64) -> u16 { (257. * x).round().clamp(0., 65535.) as u16 }

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: q8(c.r), g: q8(c.g), b: q8(c.b) }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: q16(c.r), g: q16(c.g), b: q16(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: q8(c.r), g: q8(c.g), b: q8(c.b), a: q8(c.a) }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: self.a as f64 / 257. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: q16(c.r), g: q16(c.g), b: q16(c.b), a: q16(c.a) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_range() {
        for (i, (x, c)) in RGB8::wheel(100., 50.).range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(RGB8::wheel(100., 50.).rgb(x), c);
        }
    }

    #[test]
    fn range_ends_and_reverse() {
        let w = RGB8::wheel(100., 50.);
        let v: Vec<_> = w.range(0., 360., 5).rev().map(|(x, _)| x).collect();
        assert_eq!(v, [360., 270., 180., 90., 0.]);
        assert_eq!(RGB8::wheel(100., 50.).range(0., 1., 0).count(), 0);
        let one: Vec<_> = RGB8::wheel(100., 50.).range(3., 7., 1).collect();
        assert_eq!(one, [(3., RGB8::new(255, 0, 0))]);
        assert_eq!(RGB8::wheel(100., 50.).range(0., 1., 7).len(), 7);
    }

    #[test]
    fn trait_helpers() {
        let navy = RGB8::new(0x0f, 0x34, 0x60);
        assert_eq!(navy.to_hex(), "#0f3460");
        assert_eq!(navy.to_hsl(), hex_to_hsl("#0f3460"));
        assert_eq!(navy.contrast_color(), RGB8::new(255, 255, 255));
        assert_eq!(RGB8::new(255, 255, 255).contrast_color(),
                   RGB8::new(0x1a, 0x1a, 0x2e));
        let white = RGB8::new(255, 255, 255);
        let black = RGB8::new(0, 0, 0);
        assert!((white.contrast_ratio(&black) - 21.).abs() < 1e-9);
        assert_eq!(navy.name(), color_name("#0f3460"));
    }

    #[test]
    fn sixteen_bits() {
        let c = RGB16::from_hsl(Hsl::new(0., 100., 50.));
        assert_eq!(c, RGB16 { r: 65535, g: 0, b: 0 });
        assert_eq!(c.to_hex(), "#ff0000");
        let c = RGBA8::from_hsl(Hsl::new(120., 100., 50.));
        assert_eq!(c, RGBA8 { r: 0, g: 255, b: 0, a: 255 });
    }
}
