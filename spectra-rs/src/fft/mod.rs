//! Radix-2 transform kernel and its frequency-domain companions.
//!
//! [`plan::FftPlan`] owns the precomputed bit-reversal permutation and
//! per-stage twiddle tables for one power-of-two length; [`chain`] layers a
//! maybe-invertible processing chain on top, and [`helpers`] holds the
//! circular half-shift.

pub mod chain;
pub mod helpers;
pub mod plan;

pub use chain::{NonZeroScalar, SpectrumChain};
pub use helpers::{fft_shift, fft_shift_complex};
pub use plan::FftPlan;
