//! Error types for the synthesis pipeline.

use core::fmt;
use thiserror::Error;

/// Result type for synthesis operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Glottal pulse train generation.
    Excitation,
    /// A standalone resonator.
    Resonator,
    /// Resonator `n` (1-based) of the formant cascade.
    Formant(usize),
    /// Construction of a formant table.
    FormantTable,
    /// Automatic gain control.
    GainControl,
    /// Transfer function evaluation.
    TransferFunction,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Excitation => f.write_str("excitation"),
            Stage::Resonator => f.write_str("resonator"),
            Stage::Formant(n) => write!(f, "formant F{n}"),
            Stage::FormantTable => f.write_str("formant table"),
            Stage::GainControl => f.write_str("gain control"),
            Stage::TransferFunction => f.write_str("transfer function"),
        }
    }
}

/// The parameter that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Fundamental frequency F0, in Hz.
    PitchFrequency,
    /// Pitch period T0, in samples.
    PitchPeriod,
    /// Sampling rate Fs, in samples/second.
    SampleRate,
    /// Resonance frequency, in Hz.
    Frequency,
    /// Resonance bandwidth, in Hz.
    Bandwidth,
    /// Number of entries in a formant table.
    FormantCount,
    /// Target RMS level.
    TargetLevel,
    /// An input signal sample.
    Sample,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Parameter::PitchFrequency => "pitch frequency",
            Parameter::PitchPeriod => "pitch period",
            Parameter::SampleRate => "sample rate",
            Parameter::Frequency => "frequency",
            Parameter::Bandwidth => "bandwidth",
            Parameter::FormantCount => "formant count",
            Parameter::TargetLevel => "target level",
            Parameter::Sample => "input sample",
        })
    }
}

/// Errors that can occur while synthesizing.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A parameter was non-positive, non-finite or otherwise unusable.
    #[error("invalid {parameter} for {stage}: {value}")]
    InvalidParameter {
        /// Stage that rejected the parameter.
        stage: Stage,
        /// Which parameter was rejected.
        parameter: Parameter,
        /// The rejected value.
        value: f64,
    },

    /// A signal was empty where samples are required.
    #[error("{stage} requires a non-empty signal")]
    EmptyInput {
        /// Stage that required the samples.
        stage: Stage,
    },

    /// The output left the range of `f64` at sample `index`.
    #[error("{stage} overflowed at sample {index}")]
    Overflow {
        /// Stage whose output overflowed.
        stage: Stage,
        /// First non-finite output sample.
        index: usize,
    },
}

impl Error {
    pub(crate) fn invalid(stage: Stage, parameter: Parameter, value: f64) -> Self {
        Error::InvalidParameter {
            stage,
            parameter,
            value,
        }
    }

    /// Returns the stage the error was raised in.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Error::InvalidParameter { stage, .. }
            | Error::EmptyInput { stage }
            | Error::Overflow { stage, .. } => *stage,
        }
    }

    /// Re-attributes the error to `stage`.
    #[must_use]
    pub(crate) fn at(self, stage: Stage) -> Self {
        match self {
            Error::InvalidParameter {
                parameter, value, ..
            } => Error::InvalidParameter {
                stage,
                parameter,
                value,
            },
            Error::EmptyInput { .. } => Error::EmptyInput { stage },
            Error::Overflow { index, .. } => Error::Overflow { stage, index },
        }
    }
}

/// Fails with [`Error::InvalidParameter`] unless `value` is finite and strictly positive.
pub(crate) fn require_positive(stage: Stage, parameter: Parameter, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(stage, parameter, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_stage_and_parameter() {
        let err = Error::invalid(Stage::Formant(3), Parameter::Bandwidth, 0.0);
        assert_eq!(err.to_string(), "invalid bandwidth for formant F3: 0");
        let err = Error::EmptyInput {
            stage: Stage::GainControl,
        };
        assert_eq!(err.to_string(), "gain control requires a non-empty signal");
    }

    #[test]
    fn require_positive_rejects_zero_negative_and_nan() {
        assert_eq!(
            require_positive(Stage::Resonator, Parameter::Frequency, 440.0),
            Ok(440.0)
        );
        for bad in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            assert!(require_positive(Stage::Resonator, Parameter::Frequency, bad).is_err());
        }
    }

    #[test]
    fn at_keeps_parameter_and_value() {
        let err = Error::invalid(Stage::Resonator, Parameter::Frequency, -100.0).at(Stage::Formant(2));
        assert_eq!(err, Error::invalid(Stage::Formant(2), Parameter::Frequency, -100.0));
        assert_eq!(err.stage(), Stage::Formant(2));
        let err = Error::Overflow {
            stage: Stage::Resonator,
            index: 7,
        }
        .at(Stage::Formant(4));
        assert_eq!(
            err,
            Error::Overflow {
                stage: Stage::Formant(4),
                index: 7
            }
        );
        assert_eq!(err.to_string(), "formant F4 overflowed at sample 7");
    }
}
