use super::ConfigError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use ndarray::{Array1, ArrayView1, ArrayViewMut1};

/// Adapter trait for reading contiguous 1D input.
pub trait Read1D<T> {
    /// Borrow the underlying input as a contiguous slice.
    fn read_slice(&self) -> Result<&[T], ConfigError>;
}

/// Adapter trait for writing contiguous 1D output.
pub trait Write1D<T> {
    /// Borrow the underlying output as a mutable contiguous slice.
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError>;
}

/// Adapter trait for reading a split complex buffer as `(re, im)` slices.
///
/// The two parts are guaranteed equal length by the implementor.
pub trait ReadComplex1D {
    /// Borrow the real and imaginary parts as contiguous slices.
    fn read_parts(&self) -> Result<(&[f64], &[f64]), ConfigError>;
}

/// Adapter trait for writing a split complex buffer as `(re, im)` slices.
pub trait WriteComplex1D {
    /// Borrow the real and imaginary parts as mutable contiguous slices.
    fn write_parts_mut(&mut self) -> Result<(&mut [f64], &mut [f64]), ConfigError>;
}

impl<T> Read1D<T> for [T] {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T> Write1D<T> for [T] {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> Read1D<T> for [T; N] {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> Write1D<T> for [T; N] {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

#[cfg(feature = "alloc")]
impl<T> Read1D<T> for Vec<T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T> Write1D<T> for Vec<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self.as_mut_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T> Read1D<T> for Array1<T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

#[cfg(feature = "alloc")]
impl<T> Write1D<T> for Array1<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> Read1D<T> for ArrayView1<'a, T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array_view" })
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> Write1D<T> for ArrayViewMut1<'a, T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut().ok_or(ConfigError::NonContiguous {
            arg: "array_view_mut",
        })
    }
}

impl<'a> ReadComplex1D for (&'a [f64], &'a [f64]) {
    fn read_parts(&self) -> Result<(&[f64], &[f64]), ConfigError> {
        if self.0.len() != self.1.len() {
            return Err(ConfigError::InvalidArgument {
                arg: "parts",
                reason: "real and imaginary parts must have equal lengths",
            });
        }
        Ok((self.0, self.1))
    }
}

impl<'a> WriteComplex1D for (&'a mut [f64], &'a mut [f64]) {
    fn write_parts_mut(&mut self) -> Result<(&mut [f64], &mut [f64]), ConfigError> {
        if self.0.len() != self.1.len() {
            return Err(ConfigError::InvalidArgument {
                arg: "parts",
                reason: "real and imaginary parts must have equal lengths",
            });
        }
        Ok((&mut *self.0, &mut *self.1))
    }
}
