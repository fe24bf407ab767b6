//! Cubic-bezier easing and the lightness transposition built on it.

pub(crate) type Curve = [f64; 4];

/// Evaluates the cubic bezier through `(0,0)`, `p1`, `p2`, `(1,1)` at
/// horizontal position `x`, recovering the curve parameter with Newton's
/// method.
pub(crate) fn bezier_ease(x: f64, curve: Curve) -> f64 {
    let [p1x, p1y, p2x, p2y] = curve;

    let cx = 3.0 * p1x;
    let bx = 3.0 * (p2x - p1x) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * p1y;
    let by = 3.0 * (p2y - p1y) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |t: f64| ((ax * t + bx) * t + cx) * t;
    let sample_dx = |t: f64| (3.0 * ax * t + 2.0 * bx) * t + cx;

    let mut t = x;
    for _ in 0..8 {
        let dx = sample_dx(t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - (sample_x(t) - x) / dx).clamp(0.0, 1.0);
    }

    ((ay * t + by) * t + cy) * t
}

/// Shifts a lightness progression so its first entry lands exactly on `to`,
/// with the shift easing out toward the far end of the array.
pub(crate) fn transpose_progression_start(to: f64, levels: &[f64], curve: Curve) -> Vec<f64> {
    let last = levels.len() - 1;
    let diff = levels[0] - to;

    levels
        .iter()
        .enumerate()
        .map(|(i, &level)| level - diff * bezier_ease(1.0 - i as f64 / last as f64, curve))
        .collect()
}
