//! Harmony palettes: colors related by a geometric rule on the hue
//! circle.

use tracing::trace;
use crate::convert::Hsl;
use crate::options::HarmonyOptions;
use crate::palette::Palette;

pub(crate) mod ty;
pub use ty::{HarmonyScheme, ParseSchemeError};

/// Anchor hue offsets of an analogous harmony of `count` colors: the
/// base first, then alternating ±step, ±2·step,…
fn analogous_offsets(opts: &HarmonyOptions, count: usize) -> Vec<f64> {
    let n = count.min(opts.analogous_max_hues).max(1);
    (0 .. n).map(|i| {
        let k = ((i + 1) / 2) as f64;
        if i % 2 == 1 { k * opts.analogous_step }
        else { -k * opts.analogous_step } })
        .collect()
}

/// Tonal variant of an anchor for the `round`-th repetition of the
/// anchor set (`round` ≥ 1): less saturated and lighter.
fn variant(opts: &HarmonyOptions, h: f64, s: f64, l: f64, round: usize)
           -> Hsl {
    let r = round as f64;
    let s = (s - opts.variant_saturation_step * r).max(0.);
    let l = {
        if l >= opts.variant_lightness_ceiling { l }
        else { (l + opts.variant_lightness_step * r)
               .min(opts.variant_lightness_ceiling) } };
    Hsl { h, s, l }
}

fn monochromatic(opts: &HarmonyOptions, h: f64, s: f64, l: f64,
                 count: usize) -> Vec<Hsl> {
    if count == 1 { return vec![Hsl { h, s, l }] }
    let last = (count - 1) as f64;
    let span = opts.mono_darkest - opts.mono_lightest;
    (0 .. count).map(|i| {
        let i = i as f64;
        Hsl { h,
              s: (s - opts.mono_saturation_step * i).max(0.),
              l: opts.mono_lightest + span * i / last } })
        .collect()
}

/// Same as [`harmony_hsl`] with explicit heuristics.
pub fn harmony_hsl_with(
    opts: &HarmonyOptions,
    base_hue: f64, base_sat: f64, base_light: f64,
    scheme: HarmonyScheme, count: usize,
) -> Vec<Hsl> {
    trace!(base_hue, base_sat, base_light, %scheme, count,
           "generating harmony");
    if count == 0 { return vec![] }
    let h0 = base_hue.rem_euclid(360.);
    if scheme == HarmonyScheme::Monochromatic {
        return monochromatic(opts, h0, base_sat, base_light, count)
    }
    let analogous;
    let offsets = match scheme.offsets() {
        Some(o) => o,
        None => { analogous = analogous_offsets(opts, count);
                  &analogous[..] }
    };
    let n = offsets.len();
    (0 .. count).map(|i| {
        let h = (h0 + offsets[i % n]).rem_euclid(360.);
        let round = i / n;
        if round == 0 { Hsl { h, s: base_sat, l: base_light } }
        else { variant(opts, h, base_sat, base_light, round) } })
        .collect()
}

/// The `count` colors of a harmony, in HSL, before rounding to hex.
///
/// Each scheme defines anchor hues relative to `base_hue`.  When
/// `count` exceeds the number of anchors, the anchors are repeated as
/// lighter, less saturated variants; when it is smaller, the first
/// `count` anchors are kept.  Hues are wrapped modulo 360, saturation
/// and lightness are taken as given.
///
/// ```
/// use color_harmony::{harmony_hsl, HarmonyScheme};
/// let hues: Vec<f64> = harmony_hsl(300., 70., 50., HarmonyScheme::Square, 4)
///     .iter().map(|c| c.h).collect();
/// assert_eq!(hues, [300., 30., 120., 210.]);
/// ```
pub fn harmony_hsl(base_hue: f64, base_sat: f64, base_light: f64,
                   scheme: HarmonyScheme, count: usize) -> Vec<Hsl> {
    harmony_hsl_with(&HarmonyOptions::default(),
                     base_hue, base_sat, base_light, scheme, count)
}

/// Generate a palette of exactly `count` colors following `scheme`.
/// See [`harmony_hsl`].
pub fn generate_harmony(base_hue: f64, base_sat: f64, base_light: f64,
                        scheme: HarmonyScheme, count: usize) -> Palette {
    generate_harmony_with(&HarmonyOptions::default(),
                          base_hue, base_sat, base_light, scheme, count)
}

/// Same as [`generate_harmony`] with explicit heuristics.
pub fn generate_harmony_with(
    opts: &HarmonyOptions,
    base_hue: f64, base_sat: f64, base_light: f64,
    scheme: HarmonyScheme, count: usize,
) -> Palette {
    harmony_hsl_with(opts, base_hue, base_sat, base_light, scheme, count)
        .iter().map(Hsl::to_rgb).collect()
}
