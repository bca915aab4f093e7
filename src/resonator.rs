//! A single Klatt formant resonator.

use crate::error::{Error, Parameter, Result, Stage, require_positive};
use crate::math::{cos, exp};
use crate::signal::Signal;
use crate::traits::BasicFilter;
use crate::transfer::TransferFunction;
use alloc::vec;
use core::f64::consts::PI;

/// Filter coefficients of a Klatt resonator.
///
/// # Formulas:
/// ## Variables:
/// ```text
///    f = resonator frequency in Hz
///    bw = bandwidth in Hz
///    fs = sample rate in Hz
///    r = exp(-PI * bw / fs)
/// ```
/// ## Coefficients:
/// ```text
///    c = -exp(-2 * PI * bw / fs) = -r^2
///    b = 2 * r * cos(2 * PI * f / fs)
///    a = 1 - b - c
/// ```
/// ## Gain at DC:
/// ```text
///    |H(0)| = a / (1 - b - c) = 1
/// ```
/// The pole radius `r` is below 1 for every positive bandwidth, so the filter is stable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// filter coefficient a (input gain)
    a: f64,
    /// filter coefficient b (weight of y[n-1])
    b: f64,
    /// filter coefficient c (weight of y[n-2])
    c: f64,
    /// pole radius
    r: f64,
}

impl Coefficients {
    /// ### params
    /// ```text
    /// f = Frequency of resonator in Hz.
    /// bw = Bandwidth of resonator in Hz.
    /// sample_rate = Sample rate in Hz.
    /// ```
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidParameter`] unless all three are positive and finite.
    pub fn new(f: f64, bw: f64, sample_rate: f64) -> Result<Self> {
        require_positive(Stage::Resonator, Parameter::SampleRate, sample_rate)?;
        require_positive(Stage::Resonator, Parameter::Frequency, f)?;
        require_positive(Stage::Resonator, Parameter::Bandwidth, bw)?;
        if f >= sample_rate / 2.0 {
            log::warn!("resonator at {f} Hz is above Nyquist for {sample_rate} Hz and will alias");
        }
        let r = exp(-PI * bw / sample_rate);
        let c = -exp(-2.0 * PI * bw / sample_rate);
        let b = 2.0 * r * cos(2.0 * PI * f / sample_rate);
        let a = 1.0 - b - c;
        log::trace!("resonator f = {f} bw = {bw}: a = {a}, b = {b}, c = {c}");
        Ok(Coefficients { a, b, c, r })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Pole radius `exp(-PI * bw / fs)`, always in `(0, 1)`.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }
}

/// A Klatt resonator.
/// This is a second order IIR filter.
///
/// ## Filter function:
/// ```text
///    y[n] = a * x[n] + b * y[n-1] + c * y[n-2]
/// ```
/// With zeroed memory the first two outputs are `a * x[0]` and `a * x[1] + b * y[0]`.
#[derive(Debug, Clone)]
pub struct Resonator {
    coefficients: Coefficients,
    /// y[n-1], last output value
    y1: f64,
    /// y[n-2], second-last output value
    y2: f64,
}

impl Resonator {
    /// # Errors
    ///
    /// See [`Coefficients::new`].
    pub fn new(f: f64, bw: f64, sample_rate: f64) -> Result<Self> {
        Ok(Resonator {
            coefficients: Coefficients::new(f, bw, sample_rate)?,
            y1: 0.0,
            y2: 0.0,
        })
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}

impl BasicFilter for Resonator {
    fn transfer_function(&self) -> TransferFunction {
        let Coefficients { a, b, c, .. } = self.coefficients;
        TransferFunction::new(vec![a], vec![1.0, -b, -c])
    }

    fn step(&mut self, x: f64) -> f64 {
        let Coefficients { a, b, c, .. } = self.coefficients;
        let y = a * x + b * self.y1 + c * self.y2;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }

    fn reset(&mut self) {
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

/// Filters `x` through a fresh resonator at `f` Hz with bandwidth `bw` Hz.
/// The output has the same length as the input.
///
/// # Errors
///
/// See [`Coefficients::new`]. Parameters are checked even for an empty input.
/// A NaN or infinite input sample is rejected as [`Parameter::Sample`], and an output
/// that leaves the `f64` range fails with [`Error::Overflow`].
pub fn apply(x: &Signal, f: f64, bw: f64, sample_rate: f64) -> Result<Signal> {
    let mut resonator = Resonator::new(f, bw, sample_rate)?;
    if let Some(&s) = x.iter().find(|s| !s.is_finite()) {
        return Err(Error::invalid(Stage::Resonator, Parameter::Sample, s));
    }
    let y: Signal = x.iter().map(|&s| resonator.step(s)).collect();
    if let Some(index) = y.iter().position(|s| !s.is_finite()) {
        return Err(Error::Overflow {
            stage: Stage::Resonator,
            index,
        });
    }
    Ok(y)
}
