use crate::error::{Error, Parameter, Result, Stage};
use crate::excitation;
use crate::resonator;
use crate::signal::Signal;
use core::ops::{Deref, DerefMut};

/// Number of resonators in the cascade.
pub const FORMANT_COUNT: usize = 4;

/// One resonance of the vocal tract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formant {
    /// formant frequency in Hz
    pub frequency: f64,
    /// formant bandwidth in Hz
    pub bandwidth: f64,
}

impl Formant {
    #[must_use]
    pub const fn new(frequency: f64, bandwidth: f64) -> Self {
        Formant {
            frequency,
            bandwidth,
        }
    }
}

impl From<(f64, f64)> for Formant {
    fn from((frequency, bandwidth): (f64, f64)) -> Self {
        Formant::new(frequency, bandwidth)
    }
}

/// Formants F1 to F4, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormantTable([Formant; FORMANT_COUNT]);

impl FormantTable {
    #[must_use]
    pub const fn new(formants: [Formant; FORMANT_COUNT]) -> Self {
        FormantTable(formants)
    }
}

impl Deref for FormantTable {
    type Target = [Formant; FORMANT_COUNT];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FormantTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&[(f64, f64)]> for FormantTable {
    type Error = Error;

    /// Builds a table from `(frequency, bandwidth)` pairs; exactly four are required.
    fn try_from(pairs: &[(f64, f64)]) -> Result<Self> {
        let formants: [(f64, f64); FORMANT_COUNT] = pairs.try_into().map_err(|_| {
            Error::invalid(Stage::FormantTable, Parameter::FormantCount, pairs.len() as f64)
        })?;
        Ok(FormantTable(formants.map(Formant::from)))
    }
}

/// Parameters for one synthesized vowel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VowelParms {
    /// duration in samples
    pub duration: usize,
    /// fundamental frequency in Hz
    pub f0: f64,
    /// oral formants F1 to F4
    pub formants: FormantTable,
    /// sample rate in Hz
    pub sample_rate: f64,
}

impl VowelParms {
    /// # Errors
    ///
    /// See [`synthesize`].
    pub fn synthesize(&self) -> Result<Signal> {
        synthesize(self.duration, self.f0, &self.formants, self.sample_rate)
    }
}

/// Synthesizes `duration` samples of a vowel.
///
/// The pulse train at `f0` is passed through the resonators for F1, F2, F3 and F4 in
/// that order; the output of F4 is returned.
///
/// # Errors
///
/// [`Error::InvalidParameter`] from the excitation or from the first formant stage
/// whose frequency or bandwidth is rejected, tagged with [`Stage::Formant`].
/// Nothing is returned for a partially filtered signal.
pub fn synthesize(
    duration: usize,
    f0: f64,
    formants: &FormantTable,
    sample_rate: f64,
) -> Result<Signal> {
    log::debug!("synthesizing {duration} samples at f0 = {f0} Hz, fs = {sample_rate} Hz");
    let mut v = excitation::generate(duration, f0, sample_rate)?;
    for (i, formant) in formants.iter().enumerate() {
        log::debug!(
            "F{}: {} Hz, bw {} Hz",
            i + 1,
            formant.frequency,
            formant.bandwidth
        );
        v = resonator::apply(&v, formant.frequency, formant.bandwidth, sample_rate)
            .map_err(|e| e.at(Stage::Formant(i + 1)))?;
    }
    Ok(v)
}
