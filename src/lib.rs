//! Cascade formant vowel synthesis in Rust, after Klatt.
//!
//! *NOTE*: This is _not_ a text-to-speech engine.
//! A voiced pulse train is passed through four two-pole resonators (F1 to F4)
//! in series, which is enough to approximate steady vowels.
//!
//! ```
//! use klatt_vowel::{Vowel, synthesize};
//!
//! let vowel = synthesize(8000, 120.0, &Vowel::A.formants(), 16000.0)?;
//! assert_eq!(vowel.len(), 8000);
//! assert!(vowel.is_finite());
//! # Ok::<(), klatt_vowel::Error>(())
//! ```
//!
//! ## `no_std`
//!
//! Disable default features and enable `libm` to build without the standard library.
//! `alloc` is still required, since every stage allocates its output signal.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    clippy::all,
    clippy::pedantic,
    unsafe_code,
    rustdoc::all
)]
// sample counts and periods are far below 2^52.
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

#[cfg(all(feature = "std", feature = "libm"))]
compile_error!("Features \"std\" and \"libm\" are mutually exclusive.");

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("Must specify a math feature: either \"std\" or \"libm\".");

extern crate alloc;

mod error;
pub use error::{Error, Parameter, Result, Stage};
pub mod excitation;
pub use excitation::{PulseTrain, pitch_period};
mod math;
mod poly_real;
mod presets;
pub use presets::Vowel;
pub mod resonator;
pub use resonator::{Coefficients, Resonator};
mod signal;
pub use signal::Signal;
mod traits;
pub use traits::BasicFilter;
pub mod transfer;
pub use transfer::{TransferFunction, cascade_transfer_function};
mod vowel;
pub use vowel::{FORMANT_COUNT, Formant, FormantTable, VowelParms, synthesize};
