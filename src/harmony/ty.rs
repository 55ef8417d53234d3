use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule relating the hues of a harmony to its base hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyScheme {
    /// A single hue; entries step from light to dark.
    Monochromatic,
    /// Neighbouring hues, 30° apart, centered on the base hue.
    Analogous,
    /// The base hue and its opposite.
    Complementary,
    /// Two complementary pairs 30° apart.
    DoubleComplementary,
    /// The base hue and the two neighbours of its opposite.
    SplitComplementary,
    /// Three hues evenly spaced on the wheel.
    Triadic,
    /// Two complementary pairs 60° apart (a rectangle on the wheel).
    Tetradic,
    /// Four hues evenly spaced on the wheel.
    Square,
}

impl HarmonyScheme {
    pub const ALL: [HarmonyScheme; 8] = [
        HarmonyScheme::Monochromatic, HarmonyScheme::Analogous,
        HarmonyScheme::Complementary, HarmonyScheme::DoubleComplementary,
        HarmonyScheme::SplitComplementary, HarmonyScheme::Triadic,
        HarmonyScheme::Tetradic, HarmonyScheme::Square,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        use HarmonyScheme::*;
        match self {
            Monochromatic => "monochromatic",
            Analogous => "analogous",
            Complementary => "complementary",
            DoubleComplementary => "double-complementary",
            SplitComplementary => "split-complementary",
            Triadic => "triadic",
            Tetradic => "tetradic",
            Square => "square",
        }
    }

    /// Hue offsets, in degrees, of the anchor colors of fixed-shape
    /// schemes.  The first offset is always 0 (the base hue).
    /// Analogous and monochromatic harmonies depend on the requested
    /// count and return `None`.
    pub fn offsets(&self) -> Option<&'static [f64]> {
        use HarmonyScheme::*;
        match self {
            Complementary => Some(&[0., 180.]),
            SplitComplementary => Some(&[0., 150., 210.]),
            Triadic => Some(&[0., 120., 240.]),
            DoubleComplementary => Some(&[0., 30., 180., 210.]),
            Tetradic => Some(&[0., 60., 180., 240.]),
            Square => Some(&[0., 90., 180., 270.]),
            Analogous | Monochromatic => None,
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony scheme {0:?}")]
pub struct ParseSchemeError(pub String);

impl FromStr for HarmonyScheme {
    type Err = ParseSchemeError;

    /// Case-insensitive; `_` and spaces are accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s.trim().chars()
            .map(|c| if c == '_' || c == ' ' { '-' }
                     else { c.to_ascii_lowercase() })
            .collect();
        HarmonyScheme::ALL.into_iter().find(|h| h.name() == norm)
            .ok_or_else(|| ParseSchemeError(s.to_string()))
    }
}
