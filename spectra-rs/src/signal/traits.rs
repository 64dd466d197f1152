//! Trait interfaces for signal-processing capabilities.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};
use crate::signal::spectral::SpectrumResult;

use alloc::vec::Vec;

/// Window generation capability.
pub trait WindowGenerate<T> {
    /// Run window generation into a caller-provided output buffer.
    fn run_into<O>(&self, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        O: Write1D<T> + ?Sized;

    /// Run window generation and allocate output samples.
    fn run_alloc(&self) -> Result<Vec<T>, ExecInvariantViolation>;
}

/// Amplitude-spectrum analysis capability over real frames.
pub trait SpectrumAnalyze {
    /// Analyze one frame and allocate the result bundle.
    fn run_alloc<I>(&self, input: &I) -> Result<SpectrumResult, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized;
}
