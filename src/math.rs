//! Core math functions for the synthesis.
//! If the `libm` feature is enabled, this just exports the required functions.
//! If the `std` feature is enabled, this converts the syntax from the std variety: `f.cos()` into
//! the `libm` equiv. `cos(f)`.

#[cfg(feature = "libm")]
pub(crate) use libm::{cos, exp, round, sin, sqrt};

#[cfg(feature = "std")]
pub(crate) fn sqrt(f: f64) -> f64 {
    f.sqrt()
}
#[cfg(feature = "std")]
pub(crate) fn cos(f: f64) -> f64 {
    f.cos()
}
#[cfg(feature = "std")]
pub(crate) fn sin(f: f64) -> f64 {
    f.sin()
}
#[cfg(feature = "std")]
pub(crate) fn exp(f: f64) -> f64 {
    f.exp()
}
#[cfg(feature = "std")]
pub(crate) fn round(f: f64) -> f64 {
    f.round()
}

#[cfg(test)]
mod tests {
    use super::{cos, exp, round, sin, sqrt};
    use core::f64::consts::PI;

    #[test]
    fn round_is_half_away_from_zero() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(133.333), 133.0);
        assert_eq!(round(0.49), 0.0);
    }

    #[test]
    fn trig_and_exp() {
        assert!((sin(PI / 2.0) - 1.0).abs() < 1e-15);
        assert!((cos(PI) + 1.0).abs() < 1e-15);
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(sqrt(16.0), 4.0);
    }
}
