#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Radix-2 spectral analysis for real- and complex-valued frames.
//!
//! The crate is organised as three ladders:
//!
//! - **One call**: [`spectrum`] turns a real frame into frequencies,
//!   amplitude, phase, and the dominant spectral peak.
//! - **Reusable pieces**: [`FftPlan`], [`WindowKind`], [`apply_window`],
//!   [`magnitude`], [`phase`], [`fft_shift`], [`bin_frequencies`], and
//!   [`SpectrumAnalyzer`] for repeated frames at one configuration.
//! - **Kernel access**: the split-buffer [`ComplexBuffer`] with its
//!   elementwise arithmetic in allocating, write-into, and in-place forms,
//!   plus the `_into` transform entrypoints on [`FftPlan`].
//!
//! Transform lengths are restricted to powers of two; the forward transform
//! is unnormalized and the inverse carries the single `1/N` scaling, matching
//! the usual numpy/scipy convention.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod kernel;

#[cfg(feature = "alloc")]
pub mod complex;
#[cfg(feature = "alloc")]
pub mod fft;
#[cfg(feature = "alloc")]
pub mod signal;

#[cfg(feature = "alloc")]
pub use complex::arithmetic::{magnitude, phase};
#[cfg(feature = "alloc")]
pub use complex::ComplexBuffer;
#[cfg(feature = "alloc")]
pub use fft::chain::{NonZeroScalar, SpectrumChain};
#[cfg(feature = "alloc")]
pub use fft::helpers::{fft_shift, fft_shift_complex};
#[cfg(feature = "alloc")]
pub use fft::plan::FftPlan;
#[cfg(feature = "alloc")]
pub use signal::peak::SpectrumPeak;
#[cfg(feature = "alloc")]
pub use signal::spectral::{
    bin_frequencies, spectrum, Sides, SpectrumAnalyzer, SpectrumConfig, SpectrumOptions,
    SpectrumResult,
};
#[cfg(feature = "alloc")]
pub use signal::windows::{apply_window, WindowKind};
