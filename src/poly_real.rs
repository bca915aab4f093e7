use crate::math::{cos, sin, sqrt};
use alloc::{vec, vec::Vec};
use core::cmp::min;

/// Multiplies two real polynomials.
/// Coefficients are ordered in ascending powers; both inputs must be non-empty.
pub(crate) fn multiply(a1: &[f64], a2: &[f64]) -> Vec<f64> {
    debug_assert!(!a1.is_empty() && !a2.is_empty());
    let n1 = a1.len() - 1;
    let n2 = a2.len() - 1;
    let n3 = n1 + n2;
    let mut a3 = vec![0.0; n3 + 1];
    for (i, out) in a3.iter_mut().enumerate() {
        let p1 = i.saturating_sub(n2);
        let p2 = min(n1, i);
        *out = (p1..=p2).map(|j| a1[j] * a2[i - j]).sum();
    }
    a3
}

/// Evaluates a polynomial in `z^-1` on the unit circle at angle `w` and returns its magnitude.
///
/// ```text
///    |sum(a[k] * e^(-jkw))|
/// ```
pub(crate) fn magnitude_on_unit_circle(a: &[f64], w: f64) -> f64 {
    let (re, im) = a
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(re, im), (k, c)| {
            let kw = k as f64 * w;
            (re + c * cos(kw), im - c * sin(kw))
        });
    sqrt(re * re + im * im)
}
