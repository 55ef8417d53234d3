//! Ordered sequences of colors.

use std::ops::Index;
use std::slice;
use rgb::RGB8;
use crate::contrast::{contrast_color, rgb_contrast_ratio};
use crate::convert::{hex_to_rgb, to_hex};
use crate::names::color_name;

/// An ordered list of colors.  Order is meaningful (display position,
/// index labels) and duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<RGB8>,
}

impl Palette {
    pub fn new(colors: Vec<RGB8>) -> Self { Palette { colors } }

    /// Build a palette from `#rrggbb` strings.  Malformed entries
    /// become black, so the length is always preserved.
    pub fn from_hex<I, S>(hex: I) -> Self
    where I: IntoIterator<Item = S>, S: AsRef<str> {
        hex.into_iter().map(|h| hex_to_rgb(h.as_ref())).collect()
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn get(&self, i: usize) -> Option<RGB8> { self.colors.get(i).copied() }

    pub fn iter(&self) -> slice::Iter<'_, RGB8> { self.colors.iter() }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> &[RGB8] { &self.colors }

    /// The colors as lowercase `#rrggbb` strings.
    pub fn hex(&self) -> Vec<String> {
        self.colors.iter().map(|&c| to_hex(c)).collect()
    }

    /// A legible text color for each entry.
    pub fn contrast_colors(&self) -> Vec<&'static str> {
        self.colors.iter().map(|&c| contrast_color(&to_hex(c))).collect()
    }

    /// Approximate name of each entry.
    pub fn names(&self) -> Vec<String> {
        self.colors.iter().map(|&c| color_name(&to_hex(c))).collect()
    }

    /// Lowest contrast ratio between two distinct positions, or `None`
    /// with fewer than two colors.  Useful to check a palette used for
    /// adjacent swatches or text on background.
    pub fn min_contrast_ratio(&self) -> Option<f64> {
        let c = &self.colors;
        (0 .. c.len())
            .flat_map(|i| (i + 1 .. c.len()).map(move |j| (i, j)))
            .map(|(i, j)| rgb_contrast_ratio(c[i], c[j]))
            .reduce(f64::min)
    }
}

impl Index<usize> for Palette {
    type Output = RGB8;
    fn index(&self, i: usize) -> &RGB8 { &self.colors[i] }
}

impl FromIterator<RGB8> for Palette {
    fn from_iter<T: IntoIterator<Item = RGB8>>(iter: T) -> Self {
        Palette { colors: iter.into_iter().collect() }
    }
}

impl IntoIterator for Palette {
    type Item = RGB8;
    type IntoIter = std::vec::IntoIter<RGB8>;
    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a RGB8;
    type IntoIter = slice::Iter<'a, RGB8>;
    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}

impl From<Vec<RGB8>> for Palette {
    fn from(colors: Vec<RGB8>) -> Self { Palette { colors } }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_keeps_length_and_order() {
        let p = Palette::from_hex(["#FF0000", "bogus", "#ff0000", "00ff00"]);
        assert_eq!(p.len(), 4);
        assert_eq!(p.hex(), ["#ff0000", "#000000", "#ff0000", "#00ff00"]);
        assert_eq!(p[3], RGB8::new(0, 255, 0));
        assert_eq!(p.get(4), None);
    }

    #[test]
    fn per_entry_helpers() {
        let p = Palette::from_hex(["#ffffff", "#000000"]);
        assert_eq!(p.contrast_colors(), ["#1a1a2e", "#ffffff"]);
        assert_eq!(p.names(), ["White", "Black"]);
    }

    #[test]
    fn min_contrast() {
        assert_eq!(Palette::default().min_contrast_ratio(), None);
        assert_eq!(Palette::from_hex(["#123456"]).min_contrast_ratio(), None);
        let p = Palette::from_hex(["#000000", "#ffffff", "#000000"]);
        assert_eq!(p.min_contrast_ratio(), Some(1.));
    }
}
