//! Precomputed radix-2 Cooley-Tukey transform plans.

use crate::complex::ComplexBuffer;
use crate::kernel::{ConfigError, ExecInvariantViolation, Read1D, ReadComplex1D, WriteComplex1D};

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

/// Twiddle factors for one butterfly stage, split like the buffers they
/// multiply. Stage `s` (1-indexed) covers blocks of `m = 2^s` and holds
/// `m/2` entries of `(cos(-2*pi*k/m), sin(-2*pi*k/m))`.
#[derive(Debug, Clone)]
struct TwiddleStage {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

/// An immutable transform plan for one power-of-two length.
///
/// A plan is built once per size and reused across transforms; it holds no
/// mutable state, so shared references may cross threads freely. The forward
/// transform is unnormalized; the inverse applies the single `1/N` scaling.
#[derive(Debug, Clone)]
pub struct FftPlan {
    size: usize,
    rev: Vec<usize>,
    stages: Vec<TwiddleStage>,
}

impl FftPlan {
    /// Build a plan for `size` points.
    ///
    /// `size` must be a positive power of two.
    pub fn try_new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(ConfigError::InvalidSize {
                arg: "size",
                got: size,
                reason: "transform length must be a positive power of two",
            });
        }
        Ok(Self {
            size,
            rev: bit_reversal_table(size),
            stages: twiddle_stages(size),
        })
    }

    /// The transform length this plan was built for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward transform of a real input, interpreted with zero imaginary
    /// part.
    pub fn forward<I>(&self, input: &I) -> Result<ComplexBuffer, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let mut out = ComplexBuffer::zeros(self.size);
        self.forward_into(input, &mut out)?;
        Ok(out)
    }

    /// Write-into form of [`FftPlan::forward`]. `out` is overwritten on
    /// success and untouched on error.
    pub fn forward_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
        O: WriteComplex1D + ?Sized,
    {
        let x = input.read_slice().map_err(ExecInvariantViolation::from)?;
        self.ensure_len("input", x.len())?;
        let (re, im) = out
            .write_parts_mut()
            .map_err(ExecInvariantViolation::from)?;
        self.ensure_len("out", re.len())?;

        for (i, &value) in x.iter().enumerate() {
            re[self.rev[i]] = value;
        }
        im.fill(0.0);
        self.butterflies(re, im, 1.0);
        Ok(())
    }

    /// Forward transform of a complex input.
    pub fn forward_complex<C>(&self, input: &C) -> Result<ComplexBuffer, ExecInvariantViolation>
    where
        C: ReadComplex1D + ?Sized,
    {
        let mut out = ComplexBuffer::zeros(self.size);
        self.forward_complex_into(input, &mut out)?;
        Ok(out)
    }

    /// Write-into form of [`FftPlan::forward_complex`].
    pub fn forward_complex_into<C, O>(
        &self,
        input: &C,
        out: &mut O,
    ) -> Result<(), ExecInvariantViolation>
    where
        C: ReadComplex1D + ?Sized,
        O: WriteComplex1D + ?Sized,
    {
        self.scatter_and_run(input, out, 1.0)?;
        Ok(())
    }

    /// Inverse transform, normalized by `1/N`.
    ///
    /// `inverse(forward(x))` recovers `x` to within floating-point error,
    /// with near-zero imaginary part for real `x`.
    pub fn inverse<C>(&self, input: &C) -> Result<ComplexBuffer, ExecInvariantViolation>
    where
        C: ReadComplex1D + ?Sized,
    {
        let mut out = ComplexBuffer::zeros(self.size);
        self.inverse_into(input, &mut out)?;
        Ok(out)
    }

    /// Write-into form of [`FftPlan::inverse`].
    pub fn inverse_into<C, O>(&self, input: &C, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        C: ReadComplex1D + ?Sized,
        O: WriteComplex1D + ?Sized,
    {
        let (re, im) = self.scatter_and_run(input, out, -1.0)?;
        let norm = 1.0 / self.size as f64;
        for v in re.iter_mut() {
            *v *= norm;
        }
        for v in im.iter_mut() {
            *v *= norm;
        }
        Ok(())
    }

    fn ensure_len(&self, arg: &'static str, got: usize) -> Result<(), ExecInvariantViolation> {
        if got != self.size {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg,
                expected: self.size,
                got,
            });
        }
        Ok(())
    }

    /// Bit-reverse the input into `out` and run the butterfly stages with
    /// the given twiddle sign, returning the output planes for any final
    /// scaling pass.
    fn scatter_and_run<'o, C, O>(
        &self,
        input: &C,
        out: &'o mut O,
        sign: f64,
    ) -> Result<(&'o mut [f64], &'o mut [f64]), ExecInvariantViolation>
    where
        C: ReadComplex1D + ?Sized,
        O: WriteComplex1D + ?Sized,
    {
        let (xr, xi) = input.read_parts().map_err(ExecInvariantViolation::from)?;
        self.ensure_len("input", xr.len())?;
        let (re, im) = out
            .write_parts_mut()
            .map_err(ExecInvariantViolation::from)?;
        self.ensure_len("out", re.len())?;

        for (i, &target) in self.rev.iter().enumerate() {
            re[target] = xr[i];
            im[target] = xi[i];
        }
        self.butterflies(re, im, sign);
        Ok((re, im))
    }

    /// Iterative butterflies over bit-reversed data.
    ///
    /// The stored twiddles carry the forward `exp(-2*pi*i*k/m)` convention;
    /// `sign` flips the sine term for the inverse transform.
    fn butterflies(&self, re: &mut [f64], im: &mut [f64], sign: f64) {
        for (stage_index, stage) in self.stages.iter().enumerate() {
            let half = 1usize << stage_index;
            let m = half << 1;
            for block in (0..self.size).step_by(m) {
                for j in 0..half {
                    let wr = stage.cos[j];
                    let wi = sign * stage.sin[j];
                    let a = block + j;
                    let b = a + half;
                    let tr = wr * re[b] - wi * im[b];
                    let ti = wr * im[b] + wi * re[b];
                    re[b] = re[a] - tr;
                    im[b] = im[a] - ti;
                    re[a] += tr;
                    im[a] += ti;
                }
            }
        }
    }
}

fn bit_reversal_table(n: usize) -> Vec<usize> {
    let mut rev = vec![0usize; n];
    let mut j = 0usize;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        rev[i] = j;
    }
    rev
}

fn twiddle_stages(n: usize) -> Vec<TwiddleStage> {
    let log2 = n.trailing_zeros() as usize;
    let mut stages = Vec::with_capacity(log2);
    for s in 1..=log2 {
        let m = 1usize << s;
        let half = m >> 1;
        let mut cos = Vec::with_capacity(half);
        let mut sin = Vec::with_capacity(half);
        for k in 0..half {
            let angle = -2.0 * PI * k as f64 / m as f64;
            cos.push(angle.cos());
            sin.push(angle.sin());
        }
        stages.push(TwiddleStage { cos, sin });
    }
    stages
}
