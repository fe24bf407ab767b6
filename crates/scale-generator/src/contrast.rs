//! Text contrast in the APCA style, and the foreground pick for step 9.

use crate::color::{oklch_to_rgb, Hue, Oklch, Rgb};

/// Screen luminance of an sRGB color, with the APCA soft clamp for very
/// dark values.
fn luminance(color: Rgb) -> f64 {
    let channel = |value: u8| (f64::from(value) / 255.0).powf(2.4);

    let y = 0.2126 * channel(color.r) + 0.7152 * channel(color.g) + 0.0722 * channel(color.b);
    if y < 0.022 {
        y + (0.022 - y).powf(1.414) * 1e-9
    } else {
        y
    }
}

/// Signed Lc contrast of `text` over `background`.
///
/// Positive for dark-on-light, negative for light-on-dark; the absolute
/// magnitude predicts legibility. Values inside the 0.1 raw deadband read
/// as zero.
pub fn contrast_lc(text: Rgb, background: Rgb) -> f64 {
    let yt = luminance(text);
    let yb = luminance(background);

    if yb > yt {
        let raw = yb.powf(0.56) - yt.powf(0.57);
        if raw < 0.1 {
            0.0
        } else {
            raw * 100.0 - 2.7
        }
    } else {
        let raw = yb.powf(0.62) - yt.powf(0.65);
        if raw.abs() < 0.1 {
            0.0
        } else {
            -raw.abs() * 100.0 + 2.7
        }
    }
}

/// Foreground color for text sitting on the solid step-9 color: white
/// wherever it is legible, otherwise a dark tint of the step's own hue.
///
/// Contrast is judged on the 8-bit quantized colors; the `40` threshold is
/// calibrated against those quantized values.
pub(crate) fn text_color_for(step9: Oklch) -> Oklch {
    let white = Oklch::new(1.0, 0.0, Hue::Defined(0.0));

    if contrast_lc(oklch_to_rgb(white), oklch_to_rgb(step9)).abs() >= 40.0 {
        white
    } else {
        Oklch::new(
            0.25,
            (0.08 * step9.c).max(0.04),
            Hue::Defined(step9.h.or_zero()),
        )
    }
}
