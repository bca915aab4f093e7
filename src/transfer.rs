//! z-plane transfer functions of the resonator cascade.

use crate::error::{Parameter, Result, Stage, require_positive};
use crate::poly_real;
use crate::resonator::Resonator;
use crate::traits::BasicFilter;
use crate::vowel::FormantTable;
use alloc::{vec, vec::Vec};
use core::f64::consts::PI;

/// A rational transfer function `H(z) = N(z^-1) / D(z^-1)`.
/// Both polynomials are ordered in ascending powers of `z^-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
}

impl TransferFunction {
    /// # Panics
    ///
    /// If either polynomial has no coefficients.
    #[must_use]
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> Self {
        assert!(
            !numerator.is_empty() && !denominator.is_empty(),
            "Zero len() arrays."
        );
        TransferFunction {
            numerator,
            denominator,
        }
    }

    /// The identity transfer function `1 / 1`.
    #[must_use]
    pub fn identity() -> Self {
        TransferFunction::new(vec![1.0], vec![1.0])
    }

    /// Transfer function of two filters in series.
    #[must_use]
    pub fn cascade(&self, other: &TransferFunction) -> TransferFunction {
        TransferFunction {
            numerator: poly_real::multiply(&self.numerator, &other.numerator),
            denominator: poly_real::multiply(&self.denominator, &other.denominator),
        }
    }

    /// Magnitude response `|H(e^jw)|` at `f` Hz, with `w = 2 * PI * f / sample_rate`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidParameter`] if `sample_rate` is not positive or `f` is negative or not finite.
    pub fn magnitude_at(&self, f: f64, sample_rate: f64) -> Result<f64> {
        require_positive(Stage::TransferFunction, Parameter::SampleRate, sample_rate)?;
        if !f.is_finite() || f < 0.0 {
            return Err(crate::Error::invalid(
                Stage::TransferFunction,
                Parameter::Frequency,
                f,
            ));
        }
        let w = 2.0 * PI * f / sample_rate;
        Ok(poly_real::magnitude_on_unit_circle(&self.numerator, w)
            / poly_real::magnitude_on_unit_circle(&self.denominator, w))
    }
}

/// Returns the transfer function of the four-resonator cascade for `formants`.
///
/// # Errors
///
/// [`crate::Error::InvalidParameter`] tagged with the failing formant stage.
pub fn cascade_transfer_function(
    formants: &FormantTable,
    sample_rate: f64,
) -> Result<TransferFunction> {
    let mut out = TransferFunction::identity();
    for (i, formant) in formants.iter().enumerate() {
        let resonator = Resonator::new(formant.frequency, formant.bandwidth, sample_rate)
            .map_err(|e| e.at(Stage::Formant(i + 1)))?;
        out = out.cascade(&resonator.transfer_function());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::presets::Vowel;
    use crate::vowel::Formant;

    fn table() -> FormantTable {
        FormantTable::new([
            Formant::new(700.0, 130.0),
            Formant::new(1220.0, 70.0),
            Formant::new(2600.0, 160.0),
            Formant::new(3400.0, 180.0),
        ])
    }

    #[test]
    fn cascade_is_eighth_order() {
        let h = cascade_transfer_function(&table(), 16000.0).unwrap();
        assert_eq!(h.numerator.len(), 1);
        assert_eq!(h.denominator.len(), 9);
        assert_eq!(h.denominator[0], 1.0);
    }

    #[test]
    fn cascade_has_unit_dc_gain() {
        for vowel in Vowel::ALL {
            let h = cascade_transfer_function(&vowel.formants(), 16000.0).unwrap();
            let dc = h.magnitude_at(0.0, 16000.0).unwrap();
            assert!((dc - 1.0).abs() < 1e-9, "{vowel:?}: {dc}");
        }
    }

    #[test]
    fn peaks_at_formants() {
        let h = cascade_transfer_function(&table(), 16000.0).unwrap();
        let f1 = h.magnitude_at(700.0, 16000.0).unwrap();
        let f2 = h.magnitude_at(1220.0, 16000.0).unwrap();
        let valley = h.magnitude_at(1900.0, 16000.0).unwrap();
        assert!(f1 > valley * 2.0);
        assert!(f2 > valley * 2.0);
    }

    #[test]
    fn single_stage_matches_coefficients() {
        let r = Resonator::new(500.0, 60.0, 10000.0).unwrap();
        let c = r.coefficients();
        let h = r.transfer_function();
        assert_eq!(h.numerator, vec![c.a()]);
        assert_eq!(h.denominator, vec![1.0, -c.b(), -c.c()]);
    }

    #[test]
    fn reports_failing_formant() {
        let mut formants = table();
        formants[2].bandwidth = 0.0;
        assert_eq!(
            cascade_transfer_function(&formants, 16000.0),
            Err(Error::InvalidParameter {
                stage: Stage::Formant(3),
                parameter: Parameter::Bandwidth,
                value: 0.0
            })
        );
    }

    #[test]
    fn magnitude_rejects_bad_frequency() {
        let h = TransferFunction::identity();
        assert!(h.magnitude_at(-1.0, 16000.0).is_err());
        assert!(h.magnitude_at(100.0, 0.0).is_err());
        assert_eq!(h.magnitude_at(100.0, 16000.0), Ok(1.0));
    }
}
