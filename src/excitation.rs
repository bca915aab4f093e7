//! Voiced excitation: a train of negative glottal pulses, one per pitch period.

use crate::error::{Error, Parameter, Result, Stage, require_positive};
use crate::math::round;
use crate::signal::Signal;

/// Returns the pitch period `T0 = round(Fs / F0)` in samples.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `f0` or `sample_rate` is not a positive finite number,
/// or if the period rounds down to zero samples.
// the ratio has been checked to be positive above.
#[allow(clippy::cast_sign_loss)]
pub fn pitch_period(f0: f64, sample_rate: f64) -> Result<usize> {
    require_positive(Stage::Excitation, Parameter::PitchFrequency, f0)?;
    require_positive(Stage::Excitation, Parameter::SampleRate, sample_rate)?;
    let period = round(sample_rate / f0);
    if period < 1.0 {
        return Err(Error::invalid(Stage::Excitation, Parameter::PitchPeriod, period));
    }
    Ok(period as usize)
}

/// Generates `duration` samples of voiced excitation.
///
/// Sample `n` is `-1` when `n` is a multiple of the pitch period (including `n = 0`)
/// and `0` otherwise.
///
/// # Errors
///
/// See [`pitch_period`].
pub fn generate(duration: usize, f0: f64, sample_rate: f64) -> Result<Signal> {
    let train = PulseTrain::new(f0, sample_rate)?;
    log::debug!(
        "excitation: {duration} samples, T0 = {} at f0 = {f0} Hz",
        train.period()
    );
    Ok(train.take(duration).collect())
}

/// Streaming form of [`generate`]: an endless pulse train, one sample per call.
#[derive(Debug, Clone)]
pub struct PulseTrain {
    /// period length in samples
    period: usize,
    /// current sample position within the period
    position_in_period: usize,
}

impl PulseTrain {
    /// # Errors
    ///
    /// See [`pitch_period`].
    pub fn new(f0: f64, sample_rate: f64) -> Result<Self> {
        Ok(PulseTrain {
            period: pitch_period(f0, sample_rate)?,
            position_in_period: 0,
        })
    }

    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn get_next(&mut self) -> f64 {
        let pulse = if self.position_in_period == 0 { -1.0 } else { 0.0 };
        self.position_in_period += 1;
        if self.position_in_period >= self.period {
            self.position_in_period = 0;
        }
        pulse
    }
}

impl Iterator for PulseTrain {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.get_next())
    }
}
