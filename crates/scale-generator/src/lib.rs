//! Contextual 12-step color scale generation.
//!
//! From three seed colors (accent, gray, background) and a light or dark
//! appearance, [`generate`] synthesizes the full palette layer a UI theme
//! sits on: two 12-step scales, their pre-blended translucent variants, a
//! contrast color for text on the solid accent step, and a translucent
//! surface tint. Seeds are matched against a built-in catalog of template
//! scales, blended, re-tinted with the seed's own hue and chroma, and
//! anchored to the chosen background's lightness.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

pub mod color;

mod alpha;
mod catalog;
mod contrast;
mod css;
mod easing;

pub use color::{Hue, Oklch, Rgb, Rgba};
pub use contrast::contrast_lc;

use alpha::alpha_color;
use catalog::{is_gray, Catalog, TemplateScale};
use color::{delta_e_ok, mix, oklch_to_rgb, rgb_to_oklch};
use contrast::text_color_for;
use easing::{transpose_progression_start, Curve};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("invalid display-p3 color token `{0}`")]
    InvalidP3Token(String),
    #[error("unknown appearance `{0}`, expected `light` or `dark`")]
    InvalidAppearance(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl FromStr for Appearance {
    type Err = Error;

    fn from_str(text: &str) -> Result<Appearance> {
        match text.to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(Error::InvalidAppearance(text.to_string())),
        }
    }
}

/// A seed color argument: either an already-typed value or hex text.
/// Hex is validated once, at the API boundary.
#[derive(Debug, Clone)]
pub enum ColorInput {
    Rgb(Rgb),
    Hex(String),
}

impl ColorInput {
    fn resolve(&self) -> Result<Rgb> {
        match self {
            ColorInput::Rgb(rgb) => Ok(*rgb),
            ColorInput::Hex(text) => Rgb::from_hex(text),
        }
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> ColorInput {
        ColorInput::Rgb(rgb)
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> ColorInput {
        ColorInput::Hex(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> ColorInput {
        ColorInput::Hex(text)
    }
}

/// The generated palette: opaque and translucent 12-step scales for the
/// accent and gray seeds, plus the step-9 text color, the surface tint, and
/// the background echo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub accent_scale: [Rgb; 12],
    pub accent_scale_alpha: [Rgba; 12],
    pub gray_scale: [Rgb; 12],
    pub gray_scale_alpha: [Rgba; 12],
    pub accent_contrast: Rgb,
    pub accent_surface: Rgba,
    pub background: Rgb,
}

impl Palette {
    /// Keyed string mapping of the palette. Translucent entries are reduced
    /// to their opaque part; use [`Rgba::to_hex`] on the fields themselves
    /// for `#RRGGBBAA` forms.
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        use serde_json::{json, Value};

        let opaque = |scale: &[Rgb; 12]| -> Value {
            json!(scale.iter().map(|c| c.to_hex()).collect::<Vec<_>>())
        };
        let flattened = |scale: &[Rgba; 12]| -> Value {
            json!(scale.iter().map(|c| c.rgb().to_hex()).collect::<Vec<_>>())
        };

        let mut map = serde_json::Map::new();
        map.insert("accentScale".into(), opaque(&self.accent_scale));
        map.insert("accentScaleAlpha".into(), flattened(&self.accent_scale_alpha));
        map.insert("grayScale".into(), opaque(&self.gray_scale));
        map.insert("grayScaleAlpha".into(), flattened(&self.gray_scale_alpha));
        map.insert("accentContrast".into(), json!(self.accent_contrast.to_hex()));
        map.insert("accentSurface".into(), json!(self.accent_surface.rgb().to_hex()));
        map.insert("background".into(), json!(self.background.to_hex()));
        map
    }
}

/// Palette generator over the built-in template catalog.
pub struct PaletteGenerator {
    light: &'static Catalog,
    dark: &'static Catalog,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    pub fn new() -> PaletteGenerator {
        PaletteGenerator {
            light: catalog::catalog(Appearance::Light),
            dark: catalog::catalog(Appearance::Dark),
        }
    }

    pub fn generate(
        &self,
        appearance: Appearance,
        accent: impl Into<ColorInput>,
        gray: impl Into<ColorInput>,
        background: impl Into<ColorInput>,
    ) -> Result<Palette> {
        let accent = accent.into().resolve()?;
        let gray = gray.into().resolve()?;
        let background = background.into().resolve()?;

        let catalog = match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        };

        let accent_oklch = rgb_to_oklch(accent);
        let gray_oklch = rgb_to_oklch(gray);
        let background_oklch = rgb_to_oklch(background);

        let gray_scale = scale_from_color(gray_oklch, &catalog.gray_scales, background_oklch);
        let mut accent_scale = scale_from_color(accent_oklch, &catalog.scales, background_oklch);

        // A pure white or black accent means "no accent color": reuse the
        // gray scale wholesale before any step-9 processing.
        if accent == Rgb::new(0, 0, 0) || accent == Rgb::new(255, 255, 255) {
            accent_scale = gray_scale;
        }

        let (step9, contrast) = step9_colors(&accent_scale, accent_oklch);
        accent_scale[8] = oklch_to_rgb(step9);
        accent_scale[9] = oklch_to_rgb(button_hover_color(step9, &accent_scale));
        cap_text_chroma(&mut accent_scale);

        let accent_scale_alpha: [Rgba; 12] =
            core::array::from_fn(|i| alpha_color(accent_scale[i], background, None));
        let gray_scale_alpha: [Rgba; 12] =
            core::array::from_fn(|i| alpha_color(gray_scale[i], background, None));

        let surface_alpha = match appearance {
            Appearance::Light => 0.8,
            Appearance::Dark => 0.5,
        };
        let accent_surface = alpha_color(accent_scale[1], background, Some(surface_alpha));

        Ok(Palette {
            accent_scale,
            accent_scale_alpha,
            gray_scale,
            gray_scale_alpha,
            accent_contrast: oklch_to_rgb(contrast),
            accent_surface,
            background,
        })
    }
}

/// Generates a palette with the built-in template catalog.
pub fn generate(
    appearance: Appearance,
    accent: impl Into<ColorInput>,
    gray: impl Into<ColorInput>,
    background: impl Into<ColorInput>,
) -> Result<Palette> {
    PaletteGenerator::new().generate(appearance, accent, gray, background)
}

fn nearest_in_scale(source: Oklch, scale: &TemplateScale) -> (Oklch, f64) {
    let mut best = (scale[0], delta_e_ok(source, scale[0]));
    for &color in &scale[1..] {
        let distance = delta_e_ok(source, color);
        if distance < best.1 {
            best = (color, distance);
        }
    }
    best
}

/// Synthesizes a 12-step scale for `source` out of the template catalog,
/// anchored to the background's lightness.
fn scale_from_color(
    source: Oklch,
    scales: &IndexMap<&'static str, TemplateScale>,
    background: Oklch,
) -> [Rgb; 12] {
    // The nearest entry within every template scale, closest template first.
    // The sort is stable, so distance ties keep catalog order.
    let mut closest: Vec<(&str, Oklch, f64)> = scales
        .iter()
        .map(|(name, scale)| {
            let (color, distance) = nearest_in_scale(source, scale);
            (*name, color, distance)
        })
        .collect();
    closest.sort_by(|a, b| a.2.total_cmp(&b.2));

    // A gray-closest seed must not blend with the next, visually
    // indistinguishable gray; its partner has to bring a hue.
    let all_grays = closest.iter().all(|(name, _, _)| is_gray(name));
    if !all_grays && is_gray(closest[0].0) {
        while closest.len() > 1 && is_gray(closest[1].0) {
            closest.remove(1);
        }
    }

    let (name_a, color_a, distance_a) = closest[0];
    let scale_a = &scales[name_a];
    if closest.len() < 2 {
        return scale_a.map(oklch_to_rgb);
    }
    let (name_b, color_b, distance_b) = closest[1];

    // Blend weight via the law of cosines on the seed/template triangle:
    // when the seed projects outside the A-B segment the weight collapses
    // to zero and template A stands alone.
    let a = distance_b;
    let b = distance_a;
    let c = delta_e_ok(color_a, color_b);
    if a == 0.0 || b == 0.0 || c == 0.0 {
        return scale_a.map(oklch_to_rgb);
    }

    let cos_a = ((b * b + c * c - a * a) / (2.0 * b * c)).clamp(-1.0, 1.0);
    let sin_a = cos_a.acos().sin();
    let cos_b = ((a * a + c * c - b * b) / (2.0 * a * c)).clamp(-1.0, 1.0);
    let sin_b = cos_b.acos().sin();
    if sin_a == 0.0 || sin_b == 0.0 {
        return scale_a.map(oklch_to_rgb);
    }

    let tan_c1 = cos_a / sin_a;
    let tan_c2 = cos_b / sin_b;
    let ratio = (tan_c1 / tan_c2).max(0.0) * 0.5;

    let scale_b = &scales[name_b];
    let mut mixed: TemplateScale = core::array::from_fn(|i| mix(scale_a[i], scale_b[i], ratio));

    // The seed's own position inside the mixed scale.
    let (base, _) = nearest_in_scale(source, &mixed);

    // Re-identify the whole scale with the seed's hue, scaling chroma by the
    // seed/base ratio but never past 1.5x the seed's own chroma.
    let chroma_ratio = source.c / base.c.max(1e-3);
    for color in &mut mixed {
        color.c = (color.c * chroma_ratio).min(source.c * 1.5);
        color.h = source.h;
    }

    let background_l = background.l.clamp(0.0, 1.0);
    let new_lightness: Vec<f64> = if mixed[0].l > 0.5 {
        // Light scales transpose through a prepended pure-white anchor so
        // step 1 inherits the background lightness smoothly.
        let mut levels = vec![1.0];
        levels.extend(mixed.iter().map(|color| color.l));
        let transposed = transpose_progression_start(background_l, &levels, [0.0, 2.0, 0.0, 2.0]);
        transposed[1..].to_vec()
    } else {
        let mut curve: Curve = [1.0, 0.0, 1.0, 0.0];
        let reference_l = mixed[0].l;
        let ratio_l = background_l / reference_l.max(1e-3);

        // Backgrounds lighter than the template's own soften the curve
        // toward linear, vanishing entirely past 1.5x.
        if ratio_l > 1.0 {
            let max_ratio = 1.5;
            let meta_ratio = (ratio_l - 1.0) * (max_ratio / (max_ratio - 1.0));
            for entry in &mut curve {
                *entry = if ratio_l > max_ratio {
                    0.0
                } else {
                    (*entry * (1.0 - meta_ratio)).clamp(0.0, 1.0)
                };
            }
        }

        let levels: Vec<f64> = mixed.iter().map(|color| color.l).collect();
        transpose_progression_start(background_l, &levels, curve)
    };

    core::array::from_fn(|i| {
        oklch_to_rgb(Oklch::new(
            new_lightness[i].clamp(0.0, 1.0),
            mixed[i].c,
            mixed[i].h,
        ))
    })
}

/// The solid step-9 color and its text color. An accent closer than the
/// visibility threshold to the scale's own background keeps the template's
/// step 9; otherwise the seed itself becomes step 9.
fn step9_colors(scale: &[Rgb; 12], accent: Oklch) -> (Oklch, Oklch) {
    let reference_background = rgb_to_oklch(scale[0]);
    let distance = delta_e_ok(accent, reference_background) * 100.0;

    if distance < 25.0 {
        let step9 = rgb_to_oklch(scale[8]);
        return (step9, text_color_for(step9));
    }

    (accent, text_color_for(accent))
}

/// Button-hover derivative of step 9: a lightness nudge away from the
/// resting color, re-tinted with the chroma and hue of whichever entry of
/// the (already step-9-patched) scale lands nearest.
fn button_hover_color(step9: Oklch, scale: &[Rgb; 12]) -> Oklch {
    let l = if step9.l > 0.4 {
        step9.l - 0.03 / (step9.l + 0.1)
    } else {
        step9.l + 0.03 / (step9.l + 0.1)
    };
    let c = if step9.l > 0.4 && step9.h.degrees().is_some() {
        step9.c * 0.93
    } else {
        step9.c
    };
    let candidate = Oklch::new(l, c, step9.h);

    let mut stolen = candidate;
    let mut best = f64::INFINITY;
    for &entry in scale {
        let entry = rgb_to_oklch(entry);
        let distance = delta_e_ok(candidate, entry);
        if distance < best {
            best = distance;
            stolen = entry;
        }
    }

    Oklch::new(candidate.l, stolen.c, stolen.h)
}

/// Text steps must not out-saturate the solid colors they sit next to.
fn cap_text_chroma(scale: &mut [Rgb; 12]) {
    let chroma_cap = rgb_to_oklch(scale[7]).c.max(rgb_to_oklch(scale[8]).c);
    for i in [10, 11] {
        let step = rgb_to_oklch(scale[i]);
        if step.c > chroma_cap {
            scale[i] = oklch_to_rgb(Oklch::new(step.l, chroma_cap, step.h));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn blend(foreground: Rgba, background: Rgb) -> Rgb {
        let alpha = foreground.alpha();
        let channel = |f: u8, b: u8| {
            ((f64::from(b) * (1.0 - alpha)).round() + (f64::from(f) * alpha).round())
                .clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            channel(foreground.r, background.r),
            channel(foreground.g, background.g),
            channel(foreground.b, background.b),
        )
    }

    #[test]
    fn far_accent_becomes_step_9_verbatim() {
        let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();

        let source = rgb_to_oklch(Rgb::new(61, 99, 221));
        let step9 = rgb_to_oklch(palette.accent_scale[8]);
        assert!(delta_e_ok(step9, source) < 0.02);
        assert_eq!(palette.accent_contrast.to_hex(), "#FFFFFF");
        assert_eq!(palette.background.to_hex(), "#FFFFFF");
    }

    #[test]
    fn white_accent_adopts_the_gray_scale() {
        let palette = generate(Appearance::Light, "#FFFFFF", "#8B8D98", "#FFFFFF").unwrap();

        // Post-processing rewrites the hover and text steps, but everything
        // through step 9 is the gray scale byte for byte.
        assert_eq!(palette.accent_scale[..9], palette.gray_scale[..9]);
    }

    #[test]
    fn black_accent_adopts_the_gray_scale() {
        let palette = generate(Appearance::Light, "#000000", "#8B8D98", "#FFFFFF").unwrap();

        assert_eq!(palette.accent_scale[..8], palette.gray_scale[..8]);
        // Black stays visible against the near-white scale background, so it
        // becomes step 9 itself.
        assert_eq!(palette.accent_scale[8].to_hex(), "#000000");
    }

    #[test]
    fn accent_matching_the_background_keeps_the_template_step_9() {
        let palette = generate(Appearance::Light, "#FDFDFE", "#8B8D98", "#FDFDFE").unwrap();

        // The seed is indistinguishable from the scale background, so step 9
        // must not become the seed itself.
        assert_ne!(palette.accent_scale[8].to_hex(), "#FDFDFE");
        let step9 = rgb_to_oklch(palette.accent_scale[8]);
        assert!(step9.l < 0.9);
    }

    #[test]
    fn dark_appearance_anchors_to_a_dark_background() {
        let palette = generate(Appearance::Dark, "#0090FF", "#8B8D98", "#111111").unwrap();

        let step1 = rgb_to_oklch(palette.accent_scale[0]);
        assert!(step1.l < 0.2, "step 1 lightness {}", step1.l);

        let cap = rgb_to_oklch(palette.accent_scale[7])
            .c
            .max(rgb_to_oklch(palette.accent_scale[8]).c);
        for i in [10, 11] {
            let step = rgb_to_oklch(palette.accent_scale[i]);
            assert!(step.c <= cap + 5e-3, "step {} chroma {}", i + 1, step.c);
        }
    }

    #[test]
    fn light_transposition_tracks_an_off_white_background() {
        let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#F0F0F0").unwrap();

        let background_l = rgb_to_oklch(Rgb::new(240, 240, 240)).l;
        let step1_l = rgb_to_oklch(palette.accent_scale[0]).l;
        assert!((step1_l - background_l).abs() < 0.05);
        // Step 1 sits between the background and the rest of the ramp.
        assert!(step1_l < 1.0);
    }

    #[test]
    fn black_background_pins_the_dark_ramp_start() {
        let palette = generate(Appearance::Dark, "#0091FF", "#8B8D98", "#000000").unwrap();
        assert_eq!(palette.accent_scale[0].to_hex(), "#000000");
    }

    #[test]
    fn neutral_accent_stays_neutral_throughout() {
        let palette = generate(Appearance::Light, "#777777", "#777777", "#FFFFFF").unwrap();

        for step in &palette.accent_scale {
            let spread = step.r.max(step.g).max(step.b) - step.r.min(step.g).min(step.b);
            assert!(spread <= 1, "step {} is tinted", step.to_hex());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let first = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
        let second = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn alpha_scales_composite_back_onto_the_background() {
        for (appearance, background) in [
            (Appearance::Light, "#FFFFFF"),
            (Appearance::Light, "#F0F0F0"),
            (Appearance::Dark, "#111111"),
        ] {
            let palette = generate(appearance, "#3D63DD", "#8B8D98", background).unwrap();

            for i in 0..12 {
                for (translucent, opaque) in [
                    (palette.accent_scale_alpha[i], palette.accent_scale[i]),
                    (palette.gray_scale_alpha[i], palette.gray_scale[i]),
                ] {
                    let recovered = blend(translucent, palette.background);
                    for (want, got) in [
                        (opaque.r, recovered.r),
                        (opaque.g, recovered.g),
                        (opaque.b, recovered.b),
                    ] {
                        assert!(
                            (i16::from(want) - i16::from(got)).abs() <= 1,
                            "step {} of {:?}: {} composites to {}",
                            i + 1,
                            appearance,
                            translucent.to_hex(),
                            recovered.to_hex()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn surface_alpha_is_forced_per_appearance() {
        let light = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
        let dark = generate(Appearance::Dark, "#3D63DD", "#8B8D98", "#111111").unwrap();

        assert_eq!(light.accent_surface.a, 204);
        assert_eq!(dark.accent_surface.a, 128);
    }

    #[test]
    fn contrast_color_is_legible_or_the_documented_tint() {
        for accent in ["#3D63DD", "#FFE629", "#E54D2E", "#86EAD4", "#113264"] {
            let palette = generate(Appearance::Light, accent, "#8B8D98", "#FFFFFF").unwrap();

            let lc = contrast_lc(palette.accent_contrast, palette.accent_scale[8]);
            if palette.accent_contrast != Rgb::new(255, 255, 255) {
                // The dark tint keeps a fixed lightness.
                let tint = rgb_to_oklch(palette.accent_contrast);
                assert!((tint.l - 0.25).abs() < 0.02);
            } else {
                assert!(lc.abs() >= 40.0);
            }
        }
    }

    #[test]
    fn hover_step_shifts_away_from_step_9() {
        let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();

        let step9 = rgb_to_oklch(palette.accent_scale[8]);
        let hover = rgb_to_oklch(palette.accent_scale[9]);
        // Light-mode hover darkens.
        assert!(hover.l < step9.l);
    }

    #[test]
    fn rejects_bad_inputs_without_partial_results() {
        assert_eq!(
            generate(Appearance::Light, "#GGGGGG", "#8B8D98", "#FFFFFF"),
            Err(Error::InvalidHex("#GGGGGG".to_string()))
        );
        assert_eq!(
            generate(Appearance::Light, "#3D63DD", "#12345", "#FFFFFF"),
            Err(Error::InvalidHex("#12345".to_string()))
        );
        assert!("dusk".parse::<Appearance>().is_err());
        assert_eq!("DARK".parse::<Appearance>().unwrap(), Appearance::Dark);
    }

    #[test]
    fn typed_and_hex_inputs_agree() {
        let by_hex = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
        let by_value = generate(
            Appearance::Light,
            Rgb::new(61, 99, 221),
            Rgb::new(139, 141, 152),
            Rgb::new(255, 255, 255),
        )
        .unwrap();
        assert_eq!(by_hex, by_value);
    }

    #[test]
    fn to_map_exposes_the_documented_keys() {
        let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
        let map = palette.to_map();

        for key in [
            "accentScale",
            "accentScaleAlpha",
            "grayScale",
            "grayScaleAlpha",
            "accentContrast",
            "accentSurface",
            "background",
        ] {
            assert!(map.contains_key(key), "missing {key}");
        }

        let accent = map["accentScale"].as_array().unwrap();
        assert_eq!(accent.len(), 12);
        assert_eq!(map["background"], serde_json::json!("#FFFFFF"));
        // The map flattens alpha entries to their opaque part.
        let alpha_entry = map["accentScaleAlpha"][0].as_str().unwrap();
        assert_eq!(alpha_entry.len(), 7);
    }

    #[test]
    fn serializes_with_alpha_fidelity() {
        let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
        let value = serde_json::to_value(&palette).unwrap();

        assert_eq!(value["background"], serde_json::json!("#FFFFFF"));
        let alpha_hex = value["accentScaleAlpha"][8].as_str().unwrap();
        assert_eq!(alpha_hex.len(), 9);
    }
}
