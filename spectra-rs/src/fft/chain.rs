//! Frequency-domain processing chains with invertibility tracking.
//!
//! A [`SpectrumChain`] runs a forward transform and applies elementwise
//! operations to the spectrum. Operations whose pointwise inverse is
//! undefined (multiplying by a vector with zero entries, scaling by zero,
//! dividing by a zero-containing vector) downgrade the chain, and
//! [`SpectrumChain::inverse`] then reports the ill-defined inverse instead
//! of producing a silently corrupted signal.

use super::plan::FftPlan;
use crate::complex::ComplexBuffer;
use crate::kernel::ExecInvariantViolation;

/// A finite, non-zero real factor.
///
/// Scaling by a held value never destroys information, so chains scaled
/// through [`SpectrumChain::scale_nonzero`] stay invertible by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonZeroScalar(f64);

impl NonZeroScalar {
    /// Accept `value` when it is finite and non-zero.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value != 0.0 && value.is_finite()).then_some(Self(value))
    }

    /// The wrapped factor.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// A mutating builder over one spectrum.
#[derive(Debug, Clone)]
pub struct SpectrumChain<'p> {
    plan: &'p FftPlan,
    buf: ComplexBuffer,
    lossy: Option<&'static str>,
}

impl<'p> SpectrumChain<'p> {
    /// Start a chain from a real frame.
    pub fn forward(plan: &'p FftPlan, samples: &[f64]) -> Result<Self, ExecInvariantViolation> {
        Ok(Self {
            plan,
            buf: plan.forward(samples)?,
            lossy: None,
        })
    }

    /// Start a chain from a complex frame.
    pub fn forward_complex(
        plan: &'p FftPlan,
        input: &ComplexBuffer,
    ) -> Result<Self, ExecInvariantViolation> {
        Ok(Self {
            plan,
            buf: plan.forward_complex(input)?,
            lossy: None,
        })
    }

    /// Hadamard-multiply the spectrum by `rhs`.
    ///
    /// A zero entry in `rhs` zeroes the corresponding bin for good, so such
    /// a multiply downgrades the chain.
    pub fn mul(mut self, rhs: &ComplexBuffer) -> Result<Self, ExecInvariantViolation> {
        if has_zero_entry(rhs) {
            self.mark_lossy("multiplied by a vector with zero entries");
        }
        self.buf.mul_in_place(rhs)?;
        Ok(self)
    }

    /// Elementwise-divide the spectrum by `rhs`.
    ///
    /// Zero divisors produce non-finite bins per IEEE-754 and downgrade the
    /// chain.
    pub fn div(mut self, rhs: &ComplexBuffer) -> Result<Self, ExecInvariantViolation> {
        if has_zero_entry(rhs) {
            self.mark_lossy("divided by a vector with zero entries");
        }
        self.buf.div_in_place(rhs)?;
        Ok(self)
    }

    /// Add `rhs` to the spectrum.
    pub fn add(mut self, rhs: &ComplexBuffer) -> Result<Self, ExecInvariantViolation> {
        self.buf.add_in_place(rhs)?;
        Ok(self)
    }

    /// Subtract `rhs` from the spectrum.
    pub fn sub(mut self, rhs: &ComplexBuffer) -> Result<Self, ExecInvariantViolation> {
        self.buf.sub_in_place(rhs)?;
        Ok(self)
    }

    /// Scale the spectrum by an arbitrary real factor.
    ///
    /// Zero or non-finite factors downgrade the chain; use
    /// [`SpectrumChain::scale_nonzero`] to keep invertibility checked at
    /// the type level.
    #[must_use]
    pub fn scale(mut self, s: f64) -> Self {
        if s == 0.0 || !s.is_finite() {
            self.mark_lossy("scaled by a zero or non-finite factor");
        }
        self.buf.scale_in_place(s);
        self
    }

    /// Scale the spectrum by a checked non-zero factor.
    #[must_use]
    pub fn scale_nonzero(mut self, s: NonZeroScalar) -> Self {
        self.buf.scale_in_place(s.get());
        self
    }

    /// Conjugate the spectrum.
    #[must_use]
    pub fn conj(mut self) -> Self {
        self.buf.conj_in_place();
        self
    }

    /// The current spectrum.
    #[must_use]
    pub fn spectrum(&self) -> &ComplexBuffer {
        &self.buf
    }

    /// Whether an inverse is still well-defined.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.lossy.is_none()
    }

    /// Give up on inverting and take the spectrum as-is.
    #[must_use]
    pub fn into_spectrum(self) -> ComplexBuffer {
        self.buf
    }

    /// Run the inverse transform, or report why it is ill-defined.
    pub fn inverse(self) -> Result<ComplexBuffer, ExecInvariantViolation> {
        if let Some(reason) = self.lossy {
            return Err(ExecInvariantViolation::InvalidState { reason });
        }
        self.plan.inverse(&self.buf)
    }

    fn mark_lossy(&mut self, reason: &'static str) {
        // The first downgrade wins; later ones cannot restore information.
        if self.lossy.is_none() {
            self.lossy = Some(reason);
        }
    }
}

fn has_zero_entry(buf: &ComplexBuffer) -> bool {
    buf.re()
        .iter()
        .zip(buf.im())
        .any(|(&re, &im)| re == 0.0 && im == 0.0)
}
