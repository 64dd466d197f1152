//! Trait-first window generation kernel.

use super::WindowKind;
use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Write1D};
use crate::signal::traits::WindowGenerate;

use alloc::vec::Vec;
use num_traits::{Float, FromPrimitive};

/// Constructor config for [`WindowKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window family.
    pub kind: WindowKind,
    /// Output length.
    pub len: usize,
}

/// Validated window generator for one `(family, length)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowKernel {
    kind: WindowKind,
    len: usize,
}

impl KernelLifecycle for WindowKernel {
    type Config = WindowConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.len == 0 {
            return Err(ConfigError::InvalidSize {
                arg: "len",
                got: 0,
                reason: "window length must be greater than zero",
            });
        }
        Ok(Self {
            kind: config.kind,
            len: config.len,
        })
    }
}

impl<F> WindowGenerate<F> for WindowKernel
where
    F: Float + FromPrimitive,
{
    fn run_into<O>(&self, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        O: Write1D<F> + ?Sized,
    {
        let generated: Vec<F> = self.run_alloc()?;
        let out_slice = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        if out_slice.len() != generated.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: generated.len(),
                got: out_slice.len(),
            });
        }
        out_slice.copy_from_slice(&generated);
        Ok(())
    }

    fn run_alloc(&self) -> Result<Vec<F>, ExecInvariantViolation> {
        self.kind
            .coefficients(self.len)
            .map_err(ExecInvariantViolation::from)
    }
}
