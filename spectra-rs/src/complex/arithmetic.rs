//! Elementwise arithmetic over split complex buffers.
//!
//! Every operation comes in three forms:
//!
//! - allocating (`add`), returning a fresh [`ComplexBuffer`];
//! - write-into (`add_into`), overwriting a caller-supplied output after all
//!   length checks pass;
//! - in-place (`ComplexBuffer::add_in_place`), mutating the left operand.
//!
//! The three forms agree bit-for-bit: each loop computes the i-th result
//! from the i-th inputs before writing the i-th output. Division by a
//! complex zero is not guarded and yields IEEE-754 infinities or NaNs.

use super::ComplexBuffer;
use crate::kernel::{ExecInvariantViolation, Write1D};

use alloc::vec::Vec;

fn ensure_matched(arg: &'static str, expected: usize, got: usize) -> Result<(), ExecInvariantViolation> {
    if expected != got {
        return Err(ExecInvariantViolation::LengthMismatch {
            arg,
            expected,
            got,
        });
    }
    Ok(())
}

/// `out[i] = a[i] * s` for a real scalar `s`.
#[must_use]
pub fn scale(a: &ComplexBuffer, s: f64) -> ComplexBuffer {
    let mut out = ComplexBuffer::zeros(a.len());
    scale_into(a, s, &mut out).expect("freshly allocated output has matching length");
    out
}

/// Write-into form of [`scale`].
pub fn scale_into(
    a: &ComplexBuffer,
    s: f64,
    out: &mut ComplexBuffer,
) -> Result<(), ExecInvariantViolation> {
    ensure_matched("out", a.len(), out.len())?;
    let (or, oi) = out.parts_mut();
    for i in 0..a.len() {
        or[i] = a.re()[i] * s;
        oi[i] = a.im()[i] * s;
    }
    Ok(())
}

/// `out[i] = a[i] + b[i]`.
pub fn add(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, ExecInvariantViolation> {
    let mut out = ComplexBuffer::zeros(a.len());
    add_into(a, b, &mut out)?;
    Ok(out)
}

/// Write-into form of [`add`].
pub fn add_into(
    a: &ComplexBuffer,
    b: &ComplexBuffer,
    out: &mut ComplexBuffer,
) -> Result<(), ExecInvariantViolation> {
    ensure_matched("b", a.len(), b.len())?;
    ensure_matched("out", a.len(), out.len())?;
    let (or, oi) = out.parts_mut();
    for i in 0..a.len() {
        or[i] = a.re()[i] + b.re()[i];
        oi[i] = a.im()[i] + b.im()[i];
    }
    Ok(())
}

/// `out[i] = a[i] - b[i]`.
pub fn sub(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, ExecInvariantViolation> {
    let mut out = ComplexBuffer::zeros(a.len());
    sub_into(a, b, &mut out)?;
    Ok(out)
}

/// Write-into form of [`sub`].
pub fn sub_into(
    a: &ComplexBuffer,
    b: &ComplexBuffer,
    out: &mut ComplexBuffer,
) -> Result<(), ExecInvariantViolation> {
    ensure_matched("b", a.len(), b.len())?;
    ensure_matched("out", a.len(), out.len())?;
    let (or, oi) = out.parts_mut();
    for i in 0..a.len() {
        or[i] = a.re()[i] - b.re()[i];
        oi[i] = a.im()[i] - b.im()[i];
    }
    Ok(())
}

/// Hadamard product `out[i] = a[i] * b[i]`.
pub fn mul(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, ExecInvariantViolation> {
    let mut out = ComplexBuffer::zeros(a.len());
    mul_into(a, b, &mut out)?;
    Ok(out)
}

/// Write-into form of [`mul`].
pub fn mul_into(
    a: &ComplexBuffer,
    b: &ComplexBuffer,
    out: &mut ComplexBuffer,
) -> Result<(), ExecInvariantViolation> {
    ensure_matched("b", a.len(), b.len())?;
    ensure_matched("out", a.len(), out.len())?;
    let (or, oi) = out.parts_mut();
    for i in 0..a.len() {
        let (ar, ai) = (a.re()[i], a.im()[i]);
        let (br, bi) = (b.re()[i], b.im()[i]);
        or[i] = ar * br - ai * bi;
        oi[i] = ar * bi + ai * br;
    }
    Ok(())
}

/// Multiply every element by the complex scalar `re + i*im`.
#[must_use]
pub fn mul_scalar(a: &ComplexBuffer, re: f64, im: f64) -> ComplexBuffer {
    let mut out = ComplexBuffer::zeros(a.len());
    mul_scalar_into(a, re, im, &mut out).expect("freshly allocated output has matching length");
    out
}

/// Write-into form of [`mul_scalar`].
pub fn mul_scalar_into(
    a: &ComplexBuffer,
    re: f64,
    im: f64,
    out: &mut ComplexBuffer,
) -> Result<(), ExecInvariantViolation> {
    ensure_matched("out", a.len(), out.len())?;
    let (or, oi) = out.parts_mut();
    for i in 0..a.len() {
        let (ar, ai) = (a.re()[i], a.im()[i]);
        or[i] = ar * re - ai * im;
        oi[i] = ar * im + ai * re;
    }
    Ok(())
}

/// Elementwise quotient `out[i] = a[i] / b[i]`.
///
/// Zero divisors are not guarded; the quotient follows IEEE-754.
pub fn div(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, ExecInvariantViolation> {
    let mut out = ComplexBuffer::zeros(a.len());
    div_into(a, b, &mut out)?;
    Ok(out)
}

/// Write-into form of [`div`].
pub fn div_into(
    a: &ComplexBuffer,
    b: &ComplexBuffer,
    out: &mut ComplexBuffer,
) -> Result<(), ExecInvariantViolation> {
    ensure_matched("b", a.len(), b.len())?;
    ensure_matched("out", a.len(), out.len())?;
    let (or, oi) = out.parts_mut();
    for i in 0..a.len() {
        let (ar, ai) = (a.re()[i], a.im()[i]);
        let (br, bi) = (b.re()[i], b.im()[i]);
        let denom = br * br + bi * bi;
        or[i] = (ar * br + ai * bi) / denom;
        oi[i] = (ai * br - ar * bi) / denom;
    }
    Ok(())
}

/// Divide every element by the complex scalar `re + i*im`.
#[must_use]
pub fn div_scalar(a: &ComplexBuffer, re: f64, im: f64) -> ComplexBuffer {
    let mut out = ComplexBuffer::zeros(a.len());
    div_scalar_into(a, re, im, &mut out).expect("freshly allocated output has matching length");
    out
}

/// Write-into form of [`div_scalar`].
pub fn div_scalar_into(
    a: &ComplexBuffer,
    re: f64,
    im: f64,
    out: &mut ComplexBuffer,
) -> Result<(), ExecInvariantViolation> {
    let denom = re * re + im * im;
    mul_scalar_into(a, re / denom, -im / denom, out)
}

/// Elementwise conjugate.
#[must_use]
pub fn conj(a: &ComplexBuffer) -> ComplexBuffer {
    let mut out = ComplexBuffer::zeros(a.len());
    conj_into(a, &mut out).expect("freshly allocated output has matching length");
    out
}

/// Write-into form of [`conj`].
pub fn conj_into(a: &ComplexBuffer, out: &mut ComplexBuffer) -> Result<(), ExecInvariantViolation> {
    ensure_matched("out", a.len(), out.len())?;
    let (or, oi) = out.parts_mut();
    for i in 0..a.len() {
        or[i] = a.re()[i];
        oi[i] = -a.im()[i];
    }
    Ok(())
}

/// Elementwise magnitude `hypot(re, im)`.
///
/// `hypot` keeps intermediate squares from overflowing prematurely, so
/// magnitudes stay finite wherever the true result is representable.
#[must_use]
pub fn magnitude(a: &ComplexBuffer) -> Vec<f64> {
    a.re()
        .iter()
        .zip(a.im())
        .map(|(&re, &im)| re.hypot(im))
        .collect()
}

/// Write-into form of [`magnitude`].
pub fn magnitude_into<O>(a: &ComplexBuffer, out: &mut O) -> Result<(), ExecInvariantViolation>
where
    O: Write1D<f64> + ?Sized,
{
    let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
    ensure_matched("out", a.len(), out.len())?;
    for i in 0..a.len() {
        out[i] = a.re()[i].hypot(a.im()[i]);
    }
    Ok(())
}

/// Elementwise argument `atan2(im, re)`, in `(-pi, pi]`.
#[must_use]
pub fn phase(a: &ComplexBuffer) -> Vec<f64> {
    a.re()
        .iter()
        .zip(a.im())
        .map(|(&re, &im)| im.atan2(re))
        .collect()
}

/// Write-into form of [`phase`].
pub fn phase_into<O>(a: &ComplexBuffer, out: &mut O) -> Result<(), ExecInvariantViolation>
where
    O: Write1D<f64> + ?Sized,
{
    let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
    ensure_matched("out", a.len(), out.len())?;
    for i in 0..a.len() {
        out[i] = a.im()[i].atan2(a.re()[i]);
    }
    Ok(())
}

/// In-place forms, where the output aliases the left operand.
impl ComplexBuffer {
    /// In-place form of [`scale`].
    pub fn scale_in_place(&mut self, s: f64) {
        for v in self.re.iter_mut() {
            *v *= s;
        }
        for v in self.im.iter_mut() {
            *v *= s;
        }
    }

    /// In-place form of [`add`].
    pub fn add_in_place(&mut self, rhs: &Self) -> Result<(), ExecInvariantViolation> {
        ensure_matched("rhs", self.len(), rhs.len())?;
        for i in 0..self.len() {
            self.re[i] += rhs.re[i];
            self.im[i] += rhs.im[i];
        }
        Ok(())
    }

    /// In-place form of [`sub`].
    pub fn sub_in_place(&mut self, rhs: &Self) -> Result<(), ExecInvariantViolation> {
        ensure_matched("rhs", self.len(), rhs.len())?;
        for i in 0..self.len() {
            self.re[i] -= rhs.re[i];
            self.im[i] -= rhs.im[i];
        }
        Ok(())
    }

    /// In-place form of [`mul`].
    pub fn mul_in_place(&mut self, rhs: &Self) -> Result<(), ExecInvariantViolation> {
        ensure_matched("rhs", self.len(), rhs.len())?;
        for i in 0..self.len() {
            let (ar, ai) = (self.re[i], self.im[i]);
            let (br, bi) = (rhs.re[i], rhs.im[i]);
            self.re[i] = ar * br - ai * bi;
            self.im[i] = ar * bi + ai * br;
        }
        Ok(())
    }

    /// In-place form of [`mul_scalar`].
    pub fn mul_scalar_in_place(&mut self, re: f64, im: f64) {
        for i in 0..self.len() {
            let (ar, ai) = (self.re[i], self.im[i]);
            self.re[i] = ar * re - ai * im;
            self.im[i] = ar * im + ai * re;
        }
    }

    /// In-place form of [`div`].
    pub fn div_in_place(&mut self, rhs: &Self) -> Result<(), ExecInvariantViolation> {
        ensure_matched("rhs", self.len(), rhs.len())?;
        for i in 0..self.len() {
            let (ar, ai) = (self.re[i], self.im[i]);
            let (br, bi) = (rhs.re[i], rhs.im[i]);
            let denom = br * br + bi * bi;
            self.re[i] = (ar * br + ai * bi) / denom;
            self.im[i] = (ai * br - ar * bi) / denom;
        }
        Ok(())
    }

    /// In-place form of [`div_scalar`].
    pub fn div_scalar_in_place(&mut self, re: f64, im: f64) {
        let denom = re * re + im * im;
        self.mul_scalar_in_place(re / denom, -im / denom);
    }

    /// In-place form of [`conj`].
    pub fn conj_in_place(&mut self) {
        for v in self.im.iter_mut() {
            *v = -*v;
        }
    }
}
