//! Axis helpers around the transform kernel.

use crate::complex::ComplexBuffer;

use alloc::vec::Vec;

/// Circularly shift a sequence by half its length, moving the zero-frequency
/// bin to the centre: `out[i] = input[(i + N/2) mod N]`.
#[must_use]
pub fn fft_shift<T: Clone>(input: &[T]) -> Vec<T> {
    if input.is_empty() {
        return Vec::new();
    }
    let split = input.len() / 2;
    input[split..]
        .iter()
        .cloned()
        .chain(input[..split].iter().cloned())
        .collect()
}

/// [`fft_shift`] over both planes of a split complex buffer.
#[must_use]
pub fn fft_shift_complex(input: &ComplexBuffer) -> ComplexBuffer {
    ComplexBuffer::from_parts(fft_shift(input.re()), fft_shift(input.im()))
        .expect("shifting preserves the plane lengths")
}
