//! Window tables and elementwise windowing.
//!
//! All families use their symmetric closed forms (denominator `N - 1`), so
//! the endpoints of the tapered windows land on the analytic zeros. A
//! length-1 window of any family is `[1]`.

use crate::kernel::{ConfigError, ExecInvariantViolation, Write1D};

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use num_traits::{Float, FromPrimitive};

mod kernels;
pub use kernels::*;

/// Supported window families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowKind {
    /// All-ones window.
    #[default]
    Rectangular,
    /// Hann window, `0.5 - 0.5*cos(2*pi*i/(N-1))`.
    Hann,
    /// Hamming window, `0.54 - 0.46*cos(2*pi*i/(N-1))`.
    Hamming,
    /// Blackman window, `0.42 - 0.5*cos(2*pi*i/(N-1)) + 0.08*cos(4*pi*i/(N-1))`.
    Blackman,
}

impl WindowKind {
    /// Resolve a window family from its configuration name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "rect" => Ok(Self::Rectangular),
            "hann" => Ok(Self::Hann),
            "hamming" => Ok(Self::Hamming),
            "blackman" => Ok(Self::Blackman),
            other => Err(ConfigError::UnknownWindow {
                name: other.to_string(),
            }),
        }
    }

    /// The configuration name of this family.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangular => "rect",
            Self::Hann => "hann",
            Self::Hamming => "hamming",
            Self::Blackman => "blackman",
        }
    }

    /// Generate the length-`n` coefficient table for this family.
    pub fn coefficients<F>(self, n: usize) -> Result<Vec<F>, ConfigError>
    where
        F: Float + FromPrimitive,
    {
        if n == 0 {
            return Err(ConfigError::InvalidSize {
                arg: "n",
                got: 0,
                reason: "window length must be greater than zero",
            });
        }
        Ok(match self {
            Self::Rectangular => vec![F::one(); n],
            _ if n == 1 => vec![F::one(); 1],
            Self::Hann => general_cosine(n, &[0.5, -0.5]),
            Self::Hamming => general_cosine(n, &[0.54, -0.46]),
            Self::Blackman => general_cosine(n, &[0.42, -0.5, 0.08]),
        })
    }
}

/// Weighted cosine-sum window `w[i] = sum_j a_j * cos(j * 2*pi*i/(N-1))`.
fn general_cosine<F>(n: usize, weights: &[f64]) -> Vec<F>
where
    F: Float + FromPrimitive,
{
    let tau = F::from_f64(core::f64::consts::TAU).expect("constant conversion");
    let nm1 = F::from_usize(n - 1).expect("length conversion");
    (0..n)
        .map(|i| {
            let base = tau * F::from_usize(i).expect("index conversion") / nm1;
            weights
                .iter()
                .enumerate()
                .fold(F::zero(), |acc, (j, &weight)| {
                    let harmonic = F::from_usize(j).expect("harmonic conversion");
                    acc + F::from_f64(weight).expect("weight conversion") * (base * harmonic).cos()
                })
        })
        .collect()
}

/// Multiply a frame elementwise by a window table.
pub fn apply_window(input: &[f64], window: &[f64]) -> Result<Vec<f64>, ExecInvariantViolation> {
    if input.len() != window.len() {
        return Err(ExecInvariantViolation::LengthMismatch {
            arg: "window",
            expected: input.len(),
            got: window.len(),
        });
    }
    Ok(input.iter().zip(window).map(|(&x, &w)| x * w).collect())
}

/// Write-into form of [`apply_window`].
pub fn apply_window_into<O>(
    input: &[f64],
    window: &[f64],
    out: &mut O,
) -> Result<(), ExecInvariantViolation>
where
    O: Write1D<f64> + ?Sized,
{
    if input.len() != window.len() {
        return Err(ExecInvariantViolation::LengthMismatch {
            arg: "window",
            expected: input.len(),
            got: window.len(),
        });
    }
    let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
    if out.len() != input.len() {
        return Err(ExecInvariantViolation::LengthMismatch {
            arg: "out",
            expected: input.len(),
            got: out.len(),
        });
    }
    for i in 0..input.len() {
        out[i] = input[i] * window[i];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_window, apply_window_into, WindowKind};
    use crate::kernel::ConfigError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_name_resolves_all_families() {
        assert_eq!(
            WindowKind::from_name("rect").expect("known name"),
            WindowKind::Rectangular
        );
        assert_eq!(
            WindowKind::from_name("hann").expect("known name"),
            WindowKind::Hann
        );
        assert_eq!(
            WindowKind::from_name("hamming").expect("known name"),
            WindowKind::Hamming
        );
        assert_eq!(
            WindowKind::from_name("blackman").expect("known name"),
            WindowKind::Blackman
        );

        let err = WindowKind::from_name("kaiser").expect_err("unknown name");
        assert!(matches!(err, ConfigError::UnknownWindow { name } if name == "kaiser"));
    }

    #[test]
    fn zero_length_windows_are_rejected() {
        for kind in [
            WindowKind::Rectangular,
            WindowKind::Hann,
            WindowKind::Hamming,
            WindowKind::Blackman,
        ] {
            assert!(kind.coefficients::<f64>(0).is_err());
        }
    }

    #[test]
    fn length_one_windows_are_unity() {
        for kind in [
            WindowKind::Rectangular,
            WindowKind::Hann,
            WindowKind::Hamming,
            WindowKind::Blackman,
        ] {
            assert_eq!(kind.coefficients::<f64>(1).expect("length 1"), vec![1.0]);
        }
    }

    #[test]
    fn rectangular_is_all_ones() {
        let w = WindowKind::Rectangular
            .coefficients::<f64>(16)
            .expect("valid length");
        assert!(w.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn hann_endpoints_and_midpoint_match_the_closed_form() {
        let w = WindowKind::Hann.coefficients::<f64>(9).expect("valid length");
        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(w[8], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w[4], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn hamming_keeps_its_pedestal_at_the_edges() {
        let w = WindowKind::Hamming
            .coefficients::<f64>(17)
            .expect("valid length");
        assert_abs_diff_eq!(w[0], 0.08, epsilon = 1e-12);
        assert_abs_diff_eq!(w[16], 0.08, epsilon = 1e-12);
        assert_abs_diff_eq!(w[8], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn blackman_sums_its_three_terms() {
        let w = WindowKind::Blackman
            .coefficients::<f64>(11)
            .expect("valid length");
        // 0.42 - 0.5 + 0.08 at the edges.
        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w[10], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w[5], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn tapered_windows_are_symmetric() {
        for kind in [WindowKind::Hann, WindowKind::Hamming, WindowKind::Blackman] {
            let w = kind.coefficients::<f64>(32).expect("valid length");
            for i in 0..16 {
                assert_abs_diff_eq!(w[i], w[31 - i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn apply_window_multiplies_elementwise() {
        let out = apply_window(&[1.0, 2.0, 3.0], &[0.5, 1.0, 2.0]).expect("matched lengths");
        assert_eq!(out, vec![0.5, 2.0, 6.0]);
    }

    #[test]
    fn apply_window_rejects_mismatched_lengths() {
        assert!(apply_window(&[1.0, 2.0], &[1.0]).is_err());

        let mut out = [0.0f64; 3];
        assert!(apply_window_into(&[1.0, 2.0], &[1.0, 1.0], &mut out).is_err());

        let mut out = [0.0f64; 2];
        apply_window_into(&[1.0, 2.0], &[2.0, 0.5], &mut out).expect("matched lengths");
        assert_eq!(out, [2.0, 1.0]);
    }
}
