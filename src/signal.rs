use crate::error::{Error, Parameter, Result, Stage, require_positive};
use crate::math::sqrt;
use alloc::vec::Vec;
use core::ops::Deref;

/// A fixed-length run of samples at an implicit sample rate.
///
/// Every stage of the pipeline allocates a fresh `Signal`; the samples of an
/// existing one are never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    /// An empty signal.
    #[must_use]
    pub fn empty() -> Self {
        Signal {
            samples: Vec::new(),
        }
    }

    /// Consumes the signal and returns its samples.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }

    /// Returns `true` if no sample is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|s| s.is_finite())
    }

    /// Root mean square level of the signal.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if the signal has no samples.
    pub fn rms(&self) -> Result<f64> {
        if self.samples.is_empty() {
            return Err(Error::EmptyInput {
                stage: Stage::GainControl,
            });
        }
        Ok(compute_rms(&self.samples))
    }

    /// Automatic gain control: returns a copy scaled to the RMS level `target_rms`.
    /// A silent signal is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if the signal has no samples,
    /// [`Error::InvalidParameter`] if `target_rms` is not positive,
    /// [`Error::Overflow`] if a scaled sample leaves the `f64` range.
    pub fn normalize_rms(&self, target_rms: f64) -> Result<Signal> {
        require_positive(Stage::GainControl, Parameter::TargetLevel, target_rms)?;
        let rms = self.rms()?;
        // silence, or too quiet to scale without overflowing
        if rms < f64::MIN_POSITIVE {
            return Ok(self.clone());
        }
        let r = target_rms / rms;
        log::debug!("gain control: rms {rms} -> {target_rms} (x{r})");
        let scaled: Signal = self.samples.iter().map(|s| s * r).collect();
        if let Some(index) = scaled.iter().position(|s| !s.is_finite()) {
            return Err(Error::Overflow {
                stage: Stage::GainControl,
                index,
            });
        }
        Ok(scaled)
    }
}

fn compute_rms(buf: &[f64]) -> f64 {
    sqrt(buf.iter().map(|f| f * f).sum::<f64>() / buf.len() as f64)
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Signal { samples }
    }
}

impl From<Signal> for Vec<f64> {
    fn from(signal: Signal) -> Self {
        signal.samples
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Signal {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rms_of_square_wave() {
        let signal = Signal::from(vec![1.0, -1.0, 1.0, -1.0]);
        assert_eq!(signal.rms(), Ok(1.0));
    }

    #[test]
    fn empty_signal_has_no_level() {
        let empty = Signal::empty();
        assert_eq!(
            empty.rms(),
            Err(Error::EmptyInput {
                stage: Stage::GainControl
            })
        );
        assert!(empty.normalize_rms(0.18).is_err());
    }

    #[test]
    fn normalize_reaches_target() {
        let signal = Signal::from(vec![0.5, -0.25, 2.0, 0.0, -1.5]);
        let scaled = signal.normalize_rms(0.18).unwrap();
        assert_eq!(scaled.len(), signal.len());
        assert!((scaled.rms().unwrap() - 0.18).abs() < 1e-12);
        // input left untouched
        assert_eq!(signal[2], 2.0);
    }

    #[test]
    fn normalize_leaves_silence_alone() {
        let silence = Signal::from(vec![0.0; 16]);
        assert_eq!(silence.normalize_rms(0.18), Ok(silence.clone()));
    }

    #[test]
    fn normalize_leaves_subnormal_level_alone() {
        let quiet = Signal::from(vec![f64::MIN_POSITIVE / 4.0; 4]);
        let scaled = quiet.normalize_rms(0.18).unwrap();
        assert_eq!(scaled, quiet);
        assert!(scaled.is_finite());
    }

    #[test]
    fn normalize_reports_overflow() {
        let signal = Signal::from(vec![1.0, 0.0, 1e300, 0.0]);
        assert_eq!(
            signal.normalize_rms(1e300),
            Err(Error::Overflow {
                stage: Stage::GainControl,
                index: 2
            })
        );
    }

    #[test]
    fn normalize_rejects_bad_target() {
        let signal = Signal::from(vec![1.0]);
        assert_eq!(
            signal.normalize_rms(0.0),
            Err(Error::InvalidParameter {
                stage: Stage::GainControl,
                parameter: Parameter::TargetLevel,
                value: 0.0
            })
        );
    }
}
