//! Split-buffer complex vectors.
//!
//! A [`ComplexBuffer`] stores the real and imaginary parts of a complex
//! sequence in two separate `f64` buffers of equal length. The split layout
//! keeps the pairwise arithmetic in [`arithmetic`] cache-friendly and lets
//! real-only consumers borrow a single plane without copying.

use crate::kernel::{ConfigError, ExecInvariantViolation, ReadComplex1D, WriteComplex1D};

use alloc::vec;
use alloc::vec::Vec;

pub mod arithmetic;

/// An owned complex vector in split `{re, im}` representation.
///
/// Both parts always have the same length; constructors and mutators uphold
/// this, so any held buffer satisfies `re.len() == im.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer {
    re: Vec<f64>,
    im: Vec<f64>,
}

impl ComplexBuffer {
    /// A length-`n` buffer with both parts zero.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            re: vec![0.0; n],
            im: vec![0.0; n],
        }
    }

    /// A length-`n` buffer with every element set to `re + i*im`.
    #[must_use]
    pub fn splat(n: usize, re: f64, im: f64) -> Self {
        Self {
            re: vec![re; n],
            im: vec![im; n],
        }
    }

    /// A buffer holding `input` as its real part with zero imaginary part.
    #[must_use]
    pub fn from_real(input: &[f64]) -> Self {
        Self {
            re: input.to_vec(),
            im: vec![0.0; input.len()],
        }
    }

    /// Assemble a buffer from owned parts, rejecting ragged input.
    pub fn from_parts(re: Vec<f64>, im: Vec<f64>) -> Result<Self, ExecInvariantViolation> {
        if re.len() != im.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "im",
                expected: re.len(),
                got: im.len(),
            });
        }
        Ok(Self { re, im })
    }

    /// Logical length shared by both parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// Whether the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// The real part.
    #[must_use]
    pub fn re(&self) -> &[f64] {
        &self.re
    }

    /// The imaginary part.
    #[must_use]
    pub fn im(&self) -> &[f64] {
        &self.im
    }

    /// Both parts at once.
    #[must_use]
    pub fn parts(&self) -> (&[f64], &[f64]) {
        (&self.re, &self.im)
    }

    /// Both parts at once, mutably.
    pub fn parts_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.re, &mut self.im)
    }

    /// Reset both parts to zero, keeping the length.
    pub fn fill_zero(&mut self) {
        self.re.fill(0.0);
        self.im.fill(0.0);
    }

    /// Overwrite this buffer with the contents of `src`.
    pub fn copy_from(&mut self, src: &Self) -> Result<(), ExecInvariantViolation> {
        if src.len() != self.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "src",
                expected: self.len(),
                got: src.len(),
            });
        }
        self.re.copy_from_slice(&src.re);
        self.im.copy_from_slice(&src.im);
        Ok(())
    }
}

impl ReadComplex1D for ComplexBuffer {
    fn read_parts(&self) -> Result<(&[f64], &[f64]), ConfigError> {
        Ok(self.parts())
    }
}

impl WriteComplex1D for ComplexBuffer {
    fn write_parts_mut(&mut self) -> Result<(&mut [f64], &mut [f64]), ConfigError> {
        Ok(self.parts_mut())
    }
}
