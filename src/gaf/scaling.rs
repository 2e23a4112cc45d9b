//! Sequence scaling and polar coordinates
//!
//! Each (batch, channel) sequence is min-max scaled to `[-1, 1]` and read as
//! the cosine of an angle `φ ∈ [0, π]`. The matching sine is the non-negative
//! root `sqrt(1 - cos²)`.

use ndarray::{Array3, ArrayView3, Axis};

/// Min-max scale each sequence along the last axis to `[-1, 1]`
///
/// Computes `2 * (v - min) / (max - min + epsilon) - 1` per (batch, channel).
/// A constant sequence maps to exactly `-1` everywhere. A NaN anywhere in a
/// sequence turns the whole scaled sequence into NaN.
pub fn min_max_scale(x: &ArrayView3<f64>, epsilon: f64) -> Array3<f64> {
    let mut scaled = x.to_owned();

    for mut lane in scaled.lanes_mut(Axis(2)) {
        let min = lane.iter().cloned().fold(f64::INFINITY, nan_min);
        let max = lane.iter().cloned().fold(f64::NEG_INFINITY, nan_max);

        // Work at half scale so `max - min` cannot overflow for finite input
        let half_min = min / 2.0;
        let half_denom = max / 2.0 - half_min + epsilon / 2.0;

        lane.mapv_inplace(|v| (v / 2.0 - half_min) / half_denom * 2.0 - 1.0);
    }

    scaled
}

fn nan_min(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.min(v)
    }
}

fn nan_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.max(v)
    }
}

/// Split scaled values into `(cos φ, sin φ)`
///
/// The argument of the square root is clamped at zero so values that drift
/// just outside `[-1, 1]` give `sin φ = 0` instead of NaN.
pub fn polar_components(x_cos: Array3<f64>) -> (Array3<f64>, Array3<f64>) {
    let x_sin = x_cos.mapv(|c| (1.0 - c * c).max(0.0).sqrt());
    (x_cos, x_sin)
}
