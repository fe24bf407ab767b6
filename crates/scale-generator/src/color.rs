//! Color representations and conversions.
//!
//! Everything downstream works in OKLCH, the cylindrical form of Björn
//! Ottosson's OKLab space. Conversions in and out of 8-bit sRGB live here,
//! together with hex and `color(display-p3 ...)` parsing, the ΔE_OK metric,
//! and OKLCH interpolation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// Opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 8-bit sRGB color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive, leading
    /// `#` optional), dropping any alpha digits.
    pub fn from_hex(text: &str) -> Result<Rgb> {
        Rgba::from_hex(text).map(Rgba::rgb)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl Rgba {
    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The short form expands by
    /// doubling each nibble; a missing alpha reads as fully opaque.
    pub fn from_hex(text: &str) -> Result<Rgba> {
        let invalid = || Error::InvalidHex(text.to_string());

        let digits = text.strip_prefix('#').unwrap_or(text);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let pair = |offset: usize| {
            u8::from_str_radix(&digits[offset..offset + 2], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let nibble = |offset: usize| {
                    u8::from_str_radix(&digits[offset..offset + 1], 16).map_err(|_| invalid())
                };
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Ok(Rgba {
                    r: r << 4 | r,
                    g: g << 4 | g,
                    b: b << 4 | b,
                    a: 255,
                })
            }
            6 => Ok(Rgba {
                r: pair(0)?,
                g: pair(2)?,
                b: pair(4)?,
                a: 255,
            }),
            8 => Ok(Rgba {
                r: pair(0)?,
                g: pair(2)?,
                b: pair(4)?,
                a: pair(6)?,
            }),
            _ => Err(invalid()),
        }
    }

    pub fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Alpha as a fraction of full opacity.
    pub fn alpha(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Hue angle in degrees, or the sentinel for "no hue" used when chroma is
/// effectively zero.
///
/// Keeping the sentinel out of the numeric domain means mixing and distance
/// never see NaN; consumers that need a number substitute 0 explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hue {
    Defined(f64),
    Undefined,
}

impl Hue {
    pub fn degrees(self) -> Option<f64> {
        match self {
            Hue::Defined(deg) => Some(deg),
            Hue::Undefined => None,
        }
    }

    /// Numeric hue with 0 standing in for the undefined sentinel.
    pub fn or_zero(self) -> f64 {
        self.degrees().unwrap_or(0.0)
    }
}

/// A color in OKLCH: lightness in `[0,1]`, non-negative chroma, hue angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: Hue,
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: Hue) -> Oklch {
        Oklch { l, c, h }
    }
}

static P3_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^color\(display-p3 ([0-9]*\.?[0-9]+) ([0-9]*\.?[0-9]+) ([0-9]*\.?[0-9]+)\)$")
        .unwrap()
});

/// Parses a CSS Color 4 `color(display-p3 r g b)` token.
///
/// Components are scaled straight to 8-bit sRGB without gamut mapping; the
/// built-in template tables were authored to survive this.
pub fn parse_p3_token(text: &str) -> Result<Rgb> {
    let invalid = || Error::InvalidP3Token(text.to_string());

    let caps = P3_TOKEN.captures(text).ok_or_else(invalid)?;
    let channel = |i: usize| -> Result<u8> {
        let value: f64 = caps[i].parse().map_err(|_| invalid())?;
        Ok((value * 255.0).round().clamp(0.0, 255.0) as u8)
    };

    Ok(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(channel: f64) -> f64 {
    if channel <= 0.003_130_8 {
        channel * 12.92
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);

    let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
    let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
    let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

    let lab_l = 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s;
    let lab_a = 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s;
    let lab_b = 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s;

    let chroma = (lab_a * lab_a + lab_b * lab_b).sqrt();
    let hue = if chroma < 1e-9 {
        Hue::Undefined
    } else {
        Hue::Defined(lab_b.atan2(lab_a).to_degrees().rem_euclid(360.0))
    };

    Oklch {
        l: lab_l.clamp(0.0, 1.0),
        c: chroma,
        h: hue,
    }
}

pub fn oklch_to_rgb(color: Oklch) -> Rgb {
    let hue_rad = color.h.or_zero().to_radians();
    let lab_a = color.c * hue_rad.cos();
    let lab_b = color.c * hue_rad.sin();

    let l = color.l + 0.396_337_777_4 * lab_a + 0.215_803_757_3 * lab_b;
    let m = color.l - 0.105_561_345_8 * lab_a - 0.063_854_172_8 * lab_b;
    let s = color.l - 0.089_484_177_5 * lab_a - 1.291_485_548_0 * lab_b;

    let (l, m, s) = (l * l * l, m * m * m, s * s * s);

    let r = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
    let g = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
    let b = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s;

    let byte = |linear: f64| (linear_to_srgb(linear).clamp(0.0, 1.0) * 255.0).round() as u8;

    Rgb {
        r: byte(r),
        g: byte(g),
        b: byte(b),
    }
}

/// Perceptual distance between two OKLCH colors.
///
/// LCh form of the OKLab Euclidean distance: the hue term is weighted by the
/// chroma of both colors, and an undefined hue on either side contributes
/// nothing.
pub fn delta_e_ok(a: Oklch, b: Oklch) -> f64 {
    let dl = a.l - b.l;
    let dc = a.c - b.c;

    let dh_deg = match (a.h, b.h) {
        (Hue::Defined(h1), Hue::Defined(h2)) => {
            // Wrap into (-180, 180].
            let mut d = (h1 - h2).rem_euclid(360.0);
            if d > 180.0 {
                d -= 360.0;
            }
            d
        }
        _ => 0.0,
    };
    let dh = 2.0 * (a.c * b.c).sqrt() * (dh_deg * std::f64::consts::PI / 360.0).sin();

    (dl * dl + dc * dc + dh * dh).sqrt()
}

/// Interpolates component-wise, taking the shortest arc between defined
/// hues. A single undefined hue defers to the defined one.
pub fn mix(a: Oklch, b: Oklch, t: f64) -> Oklch {
    let hue = match (a.h, b.h) {
        (Hue::Defined(ha), Hue::Defined(hb)) => {
            let mut dh = hb - ha;
            if dh > 180.0 {
                dh -= 360.0;
            } else if dh < -180.0 {
                dh += 360.0;
            }
            Hue::Defined((ha + dh * t).rem_euclid(360.0))
        }
        (Hue::Defined(ha), Hue::Undefined) => Hue::Defined(ha),
        (Hue::Undefined, Hue::Defined(hb)) => Hue::Defined(hb),
        (Hue::Undefined, Hue::Undefined) => Hue::Undefined,
    };

    Oklch {
        l: a.l + (b.l - a.l) * t,
        c: (a.c + (b.c - a.c) * t).max(0.0),
        h: hue,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_all_hex_forms() {
        assert_eq!(Rgb::from_hex("#3D63DD").unwrap(), Rgb::new(61, 99, 221));
        assert_eq!(Rgb::from_hex("3d63dd").unwrap(), Rgb::new(61, 99, 221));
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from_hex("#C4F").unwrap(), Rgb::new(204, 68, 255));
        assert_eq!(
            Rgba::from_hex("#3D63DD80").unwrap(),
            Rgba { r: 61, g: 99, b: 221, a: 128 }
        );
        assert_eq!(Rgba::from_hex("#abc").unwrap().a, 255);
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#1234567", "#ggg", "nope", "#3D63DD8"] {
            assert!(Rgb::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn formats_uppercase_hex() {
        assert_eq!(Rgb::new(61, 99, 221).to_hex(), "#3D63DD");
        assert_eq!(Rgb::new(0, 144, 255).with_alpha(128).to_hex(), "#0090FF80");
    }

    #[test]
    fn parses_p3_tokens() {
        assert_eq!(
            parse_p3_token("color(display-p3 0.2392 0.3882 0.8667)").unwrap(),
            Rgb::new(61, 99, 221)
        );
        assert_eq!(
            parse_p3_token("color(display-p3 1 1 1)").unwrap(),
            Rgb::new(255, 255, 255)
        );
        assert_eq!(
            parse_p3_token("color(display-p3 0 .5 1)").unwrap(),
            Rgb::new(0, 128, 255)
        );
    }

    #[test]
    fn rejects_malformed_p3_tokens() {
        for bad in [
            "color(display-p3 1 1)",
            "color(display-p3 1 1 1 1)",
            "color(srgb 1 1 1)",
            "color(display-p3 1 1 x)",
            "display-p3 1 1 1",
        ] {
            assert!(parse_p3_token(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rgb_oklch_round_trip_is_lossless_within_a_step() {
        // Deterministic sweep over the sRGB cube.
        let mut state: u32 = 0x1234_5678;
        let mut next = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };

        for _ in 0..2000 {
            let rgb = Rgb::new(next(), next(), next());
            let back = oklch_to_rgb(rgb_to_oklch(rgb));
            for (a, b) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
                assert!(
                    (i16::from(a) - i16::from(b)).abs() <= 1,
                    "{} round-tripped to {}",
                    rgb.to_hex(),
                    back.to_hex()
                );
            }
        }
    }

    #[test]
    fn neutral_grays_have_undefined_hue() {
        let gray = rgb_to_oklch(Rgb::new(119, 119, 119));
        assert_eq!(gray.h, Hue::Undefined);
        assert!(gray.c < 1e-9);

        // White and black are the extremes of the lightness axis.
        assert!(rgb_to_oklch(Rgb::new(255, 255, 255)).l > 0.999_999);
        assert!(rgb_to_oklch(Rgb::new(0, 0, 0)).l < 1e-9);
    }

    #[test]
    fn delta_e_is_a_symmetric_premetric() {
        let a = rgb_to_oklch(Rgb::new(61, 99, 221));
        let b = rgb_to_oklch(Rgb::new(229, 72, 77));

        assert_eq!(delta_e_ok(a, a), 0.0);
        assert_eq!(delta_e_ok(a, b), delta_e_ok(b, a));
        assert!(delta_e_ok(a, b) > 0.0);
    }

    #[test]
    fn delta_e_ignores_hue_against_undefined() {
        let colored = Oklch::new(0.5, 0.2, Hue::Defined(120.0));
        let gray = Oklch::new(0.5, 0.0, Hue::Undefined);
        // Only the chroma term remains.
        assert!((delta_e_ok(colored, gray) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn mix_endpoints_are_exact() {
        let a = Oklch::new(0.25, 0.125, Hue::Defined(40.0));
        let b = Oklch::new(0.75, 0.25, Hue::Defined(200.0));

        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn mix_takes_the_shortest_hue_arc() {
        let a = Oklch::new(0.5, 0.1, Hue::Defined(350.0));
        let b = Oklch::new(0.5, 0.1, Hue::Defined(10.0));

        // Crosses 0 instead of sweeping through 180.
        assert_eq!(mix(a, b, 0.5).h, Hue::Defined(0.0));
        assert_eq!(mix(b, a, 0.25).h, Hue::Defined(5.0));
    }

    #[test]
    fn mix_with_one_undefined_hue_inherits_the_other() {
        let colored = Oklch::new(0.5, 0.2, Hue::Defined(120.0));
        let gray = Oklch::new(0.9, 0.0, Hue::Undefined);

        assert_eq!(mix(colored, gray, 0.5).h, Hue::Defined(120.0));
        assert_eq!(mix(gray, colored, 0.5).h, Hue::Defined(120.0));
        assert_eq!(mix(gray, gray, 0.5).h, Hue::Undefined);
    }
}
