//! Reverse alpha blending.
//!
//! Given a target color and the background it sits on, recover a foreground
//! and opacity that composite back to the target under 8-bit rounding. The
//! foreground is pushed to whichever channel extreme (black or white) lets
//! the smallest alpha reproduce the target, then each channel is solved and
//! nudged to cancel per-channel rounding drift.

use crate::color::{Rgb, Rgba};

pub(crate) fn alpha_color(target: Rgb, background: Rgb, forced_alpha: Option<f64>) -> Rgba {
    if target == background {
        return Rgba { r: 0, g: 0, b: 0, a: 0 };
    }

    let t = [f64::from(target.r), f64::from(target.g), f64::from(target.b)];
    let b = [
        f64::from(background.r),
        f64::from(background.g),
        f64::from(background.b),
    ];

    let desired = if t[0] > b[0] || t[1] > b[1] || t[2] > b[2] {
        255.0
    } else {
        0.0
    };

    let channel_alpha: [f64; 3] = core::array::from_fn(|i| {
        if desired - b[i] != 0.0 {
            (t[i] - b[i]) / (desired - b[i])
        } else {
            0.0
        }
    });

    // A uniformly tinted target needs no per-channel gymnastics: the extreme
    // itself at the common alpha is exact.
    if forced_alpha.is_none()
        && channel_alpha[0] == channel_alpha[1]
        && channel_alpha[1] == channel_alpha[2]
    {
        let extreme = desired as u8;
        let alpha = channel_alpha[0].clamp(0.0, 1.0);
        return Rgba {
            r: extreme,
            g: extreme,
            b: extreme,
            a: (alpha * 255.0).round() as u8,
        };
    }

    let alpha = match forced_alpha {
        Some(forced) => forced.clamp(0.0, 1.0),
        None => {
            let max_alpha = channel_alpha[0].max(channel_alpha[1]).max(channel_alpha[2]);
            // Snap up to the 8-bit alpha grid, so the serialized alpha byte
            // is the alpha the correction below actually solved against.
            ((max_alpha * 255.0).ceil() / 255.0).clamp(0.0, 1.0)
        }
    };
    if alpha == 0.0 {
        return Rgba { r: 0, g: 0, b: 0, a: 0 };
    }

    let mut foreground: [f64; 3] =
        core::array::from_fn(|i| ((t[i] - b[i] * (1.0 - alpha)) / alpha).round().clamp(0.0, 255.0));

    for i in 0..3 {
        // Composite the way a renderer does, rounding each term separately.
        let blended = (b[i] * (1.0 - alpha)).round() + (foreground[i] * alpha).round();
        let correctable = if desired == 0.0 { t[i] <= b[i] } else { t[i] >= b[i] };
        if correctable && t[i] != blended {
            foreground[i] += if t[i] > blended { 1.0 } else { -1.0 };
        }
        foreground[i] = foreground[i].clamp(0.0, 255.0);
    }

    Rgba {
        r: foreground[0] as u8,
        g: foreground[1] as u8,
        b: foreground[2] as u8,
        a: (alpha * 255.0).round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(fg: Rgba, bg: Rgb) -> Rgb {
        let alpha = fg.alpha();
        let blend = |f: u8, b: u8| {
            ((f64::from(b) * (1.0 - alpha)).round() + (f64::from(f) * alpha).round())
                .clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            blend(fg.r, bg.r),
            blend(fg.g, bg.g),
            blend(fg.b, bg.b),
        )
    }

    fn assert_recovers(target: Rgb, background: Rgb) {
        let solved = alpha_color(target, background, None);
        let blended = composite(solved, background);
        for (want, got) in [
            (target.r, blended.r),
            (target.g, blended.g),
            (target.b, blended.b),
        ] {
            assert!(
                (i16::from(want) - i16::from(got)).abs() <= 1,
                "{} over {} solved to {} which blends to {}",
                target.to_hex(),
                background.to_hex(),
                solved.to_hex(),
                blended.to_hex()
            );
        }
    }

    #[test]
    fn identical_target_is_transparent_black() {
        let c = Rgb::new(240, 240, 240);
        assert_eq!(alpha_color(c, c, None), Rgba { r: 0, g: 0, b: 0, a: 0 });
    }

    #[test]
    fn pure_gray_over_gray_matches_the_closed_form() {
        let solved = alpha_color(Rgb::new(64, 64, 64), Rgb::new(128, 128, 128), None);

        // Darkening: foreground collapses to black at alpha (t - b)/(0 - b).
        assert_eq!((solved.r, solved.g, solved.b), (0, 0, 0));
        let expected = (64.0 - 128.0) / (0.0 - 128.0);
        assert_eq!(solved.a, (expected * 255.0_f64).round() as u8);
    }

    #[test]
    fn lightening_grays_push_to_white() {
        let solved = alpha_color(Rgb::new(192, 192, 192), Rgb::new(128, 128, 128), None);
        assert_eq!((solved.r, solved.g, solved.b), (255, 255, 255));
    }

    #[test]
    fn solved_colors_composite_back_within_one_step() {
        let backgrounds = [
            Rgb::new(255, 255, 255),
            Rgb::new(17, 17, 17),
            Rgb::new(240, 240, 240),
        ];
        // Deterministic pseudo-random targets.
        let mut state: u32 = 0xDEAD_BEEF;
        let mut next = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };

        for background in backgrounds {
            for _ in 0..300 {
                let target = Rgb::new(next(), next(), next());
                let lighter = target.r > background.r
                    || target.g > background.g
                    || target.b > background.b;
                let darker = target.r < background.r
                    || target.g < background.g
                    || target.b < background.b;
                // The correction budget only covers targets on one side of
                // the background.
                if lighter && darker {
                    continue;
                }
                assert_recovers(target, background);
            }
        }
    }

    #[test]
    fn forced_alpha_serializes_to_the_expected_byte() {
        let background = Rgb::new(255, 255, 255);
        let surface = alpha_color(Rgb::new(237, 242, 254), background, Some(0.8));
        assert_eq!(surface.a, 204);

        let dark_surface = alpha_color(Rgb::new(24, 36, 73), Rgb::new(17, 17, 17), Some(0.5));
        assert_eq!(dark_surface.a, 128);
    }
}
