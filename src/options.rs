//! Tunable parameters.
//!
//! Every options struct implements [`Default`] with the built-in
//! behavior and deserializes with missing fields filled from the
//! default, so a partial JSON or TOML document is enough:
//!
//! ```
//! use color_harmony::HarmonyOptions;
//! let opts: HarmonyOptions =
//!     serde_json::from_str(r#"{ "variant_lightness_step": 5 }"#).unwrap();
//! assert_eq!(opts.variant_lightness_step, 5.);
//! assert_eq!(opts.variant_saturation_step, 10.);
//! ```

use serde::{Deserialize, Serialize};
use crate::contrast::{DARK_TEXT, LIGHT_TEXT, LIGHTNESS_THRESHOLD};

/// Heuristics of the harmony generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyOptions {
    /// Saturation removed per extra round of tonal variants.
    pub variant_saturation_step: f64,
    /// Lightness added per extra round of tonal variants.
    pub variant_lightness_step: f64,
    /// Tonal variants never get lighter than this.
    pub variant_lightness_ceiling: f64,
    /// Lightness of the first monochromatic entry.
    pub mono_lightest: f64,
    /// Lightness of the last monochromatic entry.
    pub mono_darkest: f64,
    /// Saturation removed per monochromatic step.
    pub mono_saturation_step: f64,
    /// Most hues an analogous harmony spreads over before repeating.
    pub analogous_max_hues: usize,
    /// Distance between analogous hues, in degrees.
    pub analogous_step: f64,
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        HarmonyOptions {
            variant_saturation_step: 10.,
            variant_lightness_step: 10.,
            variant_lightness_ceiling: 95.,
            mono_lightest: 80.,
            mono_darkest: 20.,
            mono_saturation_step: 5.,
            analogous_max_hues: 5,
            analogous_step: 30.,
        }
    }
}

/// Choice of a legible text color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastOptions {
    /// Backgrounds lighter than this (HSL lightness) get `dark` text.
    pub threshold: f64,
    pub dark: String,
    pub light: String,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        ContrastOptions { threshold: LIGHTNESS_THRESHOLD,
                          dark: DARK_TEXT.to_string(),
                          light: LIGHT_TEXT.to_string() }
    }
}

/// Code snippet generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Variable names are `{prefix}-1`, `{prefix}-2`,…
    pub prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self { ExportOptions { prefix: "color".to_string() } }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let h: HarmonyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(h, HarmonyOptions::default());
        let c: ContrastOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(c, ContrastOptions::default());
        let e: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(e.prefix, "color");
    }

    #[test]
    fn partial_contrast_options() {
        let c: ContrastOptions =
            serde_json::from_str(r##"{ "dark": "#000000" }"##).unwrap();
        assert_eq!(c.dark, "#000000");
        assert_eq!(c.light, LIGHT_TEXT);
        assert_eq!(c.threshold, 55.);
    }
}
