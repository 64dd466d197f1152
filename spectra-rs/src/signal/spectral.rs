//! One-shot and reusable amplitude-spectrum analysis.
//!
//! The pipeline assembles a power-of-two frame from the input (zero-padding
//! or truncating), windows it, runs the forward transform, and projects the
//! spectrum into amplitude, phase, frequency axis, and dominant peak.
//!
//! [`spectrum`] does all of that for a single call; [`SpectrumAnalyzer`]
//! holds the transform plan and window table so repeated frames at one
//! configuration skip the precomputation.

use crate::complex::{arithmetic, ComplexBuffer};
use crate::fft::plan::FftPlan;
use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D};
use crate::signal::peak::{dominant_bin, SpectrumPeak};
use crate::signal::traits::SpectrumAnalyze;
use crate::signal::windows::WindowKind;

use alloc::vec;
use alloc::vec::Vec;

/// Which half of the spectrum an analysis reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sides {
    /// Non-negative frequencies only, `N/2 + 1` bins, folded-in energy
    /// doubled away from DC and Nyquist.
    #[default]
    One,
    /// All `N` bins, no doubling.
    Two,
}

impl Sides {
    /// Resolve a sidedness mode from its configuration name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            _ => Err(ConfigError::InvalidArgument {
                arg: "sides",
                reason: "expected \"one\" or \"two\"",
            }),
        }
    }

    /// The configuration name of this mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
        }
    }

    fn bin_count(self, fft_size: usize) -> usize {
        match self {
            Self::One => fft_size / 2 + 1,
            Self::Two => fft_size,
        }
    }
}

/// Options for the one-shot [`spectrum`] entrypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumOptions {
    /// Sampling rate of the input, in Hz.
    pub sample_rate: f64,
    /// Transform length; defaults to the next power of two at or above the
    /// input length (minimum 1).
    pub fft_size: Option<usize>,
    /// Window family applied before the transform.
    pub window: WindowKind,
    /// Reported spectrum half.
    pub sides: Sides,
}

impl Default for SpectrumOptions {
    fn default() -> Self {
        Self {
            sample_rate: 1.0,
            fft_size: None,
            window: WindowKind::Rectangular,
            sides: Sides::One,
        }
    }
}

/// The analyzed bundle for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumResult {
    /// Bin centre frequencies, `k * sample_rate / N`.
    pub frequencies: Vec<f64>,
    /// Amplitude per bin, scaled by sidedness.
    pub amplitude: Vec<f64>,
    /// Phase per bin, in `(-pi, pi]`.
    pub phase: Vec<f64>,
    /// The dominant peak per the non-DC-preferred rule.
    pub peak: SpectrumPeak,
}

/// Constructor config for [`SpectrumAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumConfig {
    /// Transform length; must be a positive power of two.
    pub fft_size: usize,
    /// Sampling rate of the input, in Hz.
    pub sample_rate: f64,
    /// Window family applied before the transform.
    pub window: WindowKind,
    /// Reported spectrum half.
    pub sides: Sides,
}

/// Reusable spectrum pipeline holding an immutable plan and window table.
///
/// The analyzer itself is stateless across calls; sharing one analyzer
/// between threads for read-only analysis is sound.
#[derive(Debug, Clone)]
pub struct SpectrumAnalyzer {
    plan: FftPlan,
    window: Vec<f64>,
    sample_rate: f64,
    sides: Sides,
}

impl KernelLifecycle for SpectrumAnalyzer {
    type Config = SpectrumConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if !(config.sample_rate.is_finite() && config.sample_rate > 0.0) {
            return Err(ConfigError::InvalidArgument {
                arg: "sample_rate",
                reason: "sample rate must be finite and greater than zero",
            });
        }
        let plan = FftPlan::try_new(config.fft_size)?;
        let window = config.window.coefficients::<f64>(config.fft_size)?;
        Ok(Self {
            plan,
            window,
            sample_rate: config.sample_rate,
            sides: config.sides,
        })
    }
}

impl SpectrumAnalyzer {
    /// The transform length this analyzer was built for.
    #[must_use]
    pub fn fft_size(&self) -> usize {
        self.plan.size()
    }

    /// The window table applied to every frame.
    #[must_use]
    pub fn window(&self) -> &[f64] {
        &self.window
    }
}

impl SpectrumAnalyze for SpectrumAnalyzer {
    fn run_alloc<I>(&self, input: &I) -> Result<SpectrumResult, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let samples = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let n = self.plan.size();

        // Frame assembly: copy what fits, zero-fill the tail, window.
        let mut frame = vec![0.0; n];
        let take = samples.len().min(n);
        frame[..take].copy_from_slice(&samples[..take]);
        for (value, &weight) in frame.iter_mut().zip(&self.window) {
            *value *= weight;
        }

        let spec = self.plan.forward(&frame)?;
        let m = self.sides.bin_count(n);

        let amplitude = match self.sides {
            Sides::One => onesided_amplitude(&spec),
            Sides::Two => twosided_amplitude(&spec),
        };
        let mut phase = arithmetic::phase(&spec);
        phase.truncate(m);
        let frequencies: Vec<f64> = (0..m)
            .map(|k| k as f64 * self.sample_rate / n as f64)
            .collect();

        let index = dominant_bin(&amplitude);
        let peak = SpectrumPeak {
            index,
            frequency: frequencies[index],
            amplitude: amplitude[index],
            phase: phase[index],
        };

        Ok(SpectrumResult {
            frequencies,
            amplitude,
            phase,
            peak,
        })
    }
}

/// Analyze one real frame with the given options.
///
/// The input may be any length; it is truncated or zero-padded to the
/// transform length.
pub fn spectrum(
    samples: &[f64],
    options: &SpectrumOptions,
) -> Result<SpectrumResult, ExecInvariantViolation> {
    let fft_size = options
        .fft_size
        .unwrap_or_else(|| samples.len().next_power_of_two());
    let analyzer = SpectrumAnalyzer::try_new(SpectrumConfig {
        fft_size,
        sample_rate: options.sample_rate,
        window: options.window,
        sides: options.sides,
    })?;
    analyzer.run_alloc(samples)
}

/// Bin centre frequencies `k * sample_rate / size` for the requested half.
pub fn bin_frequencies(
    size: usize,
    sample_rate: f64,
    sides: Sides,
) -> Result<Vec<f64>, ExecInvariantViolation> {
    if size == 0 {
        return Err(ExecInvariantViolation::InvalidArgument {
            arg: "size",
            reason: "bin count requires a size greater than zero",
        });
    }
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(ExecInvariantViolation::InvalidArgument {
            arg: "sample_rate",
            reason: "sample rate must be finite and greater than zero",
        });
    }
    Ok((0..sides.bin_count(size))
        .map(|k| k as f64 * sample_rate / size as f64)
        .collect())
}

/// One-sided amplitude: `|X[k]|/N` at DC and (for even `N`) Nyquist,
/// `2*|X[k]|/N` elsewhere, over the first `N/2 + 1` bins.
fn onesided_amplitude(spec: &ComplexBuffer) -> Vec<f64> {
    let n = spec.len();
    let norm = n as f64;
    (0..n / 2 + 1)
        .map(|k| {
            let mag = spec.re()[k].hypot(spec.im()[k]);
            if k == 0 || (n % 2 == 0 && k == n / 2) {
                mag / norm
            } else {
                2.0 * mag / norm
            }
        })
        .collect()
}

/// Two-sided amplitude: `|X[k]|/N` over all `N` bins.
fn twosided_amplitude(spec: &ComplexBuffer) -> Vec<f64> {
    let norm = spec.len() as f64;
    spec.re()
        .iter()
        .zip(spec.im())
        .map(|(&re, &im)| re.hypot(im) / norm)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{bin_frequencies, spectrum, Sides, SpectrumConfig, SpectrumOptions};
    use crate::kernel::KernelLifecycle;
    use crate::signal::spectral::SpectrumAnalyzer;
    use crate::signal::traits::SpectrumAnalyze;
    use crate::signal::windows::WindowKind;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;

    fn bin_centred_sine(n: usize, k: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * k as f64 * i as f64 / n as f64).sin())
            .collect()
    }

    /// Reduce an angle difference into `(-pi, pi]`.
    fn wrap_angle(mut angle: f64) -> f64 {
        while angle <= -PI {
            angle += 2.0 * PI;
        }
        while angle > PI {
            angle -= 2.0 * PI;
        }
        angle
    }

    #[test]
    fn bin_centred_sine_peaks_at_its_bin_with_unit_amplitude() {
        let x = bin_centred_sine(64, 8);
        let result = spectrum(
            &x,
            &SpectrumOptions {
                sample_rate: 64.0,
                ..SpectrumOptions::default()
            },
        )
        .expect("valid options");

        assert_eq!(result.peak.index, 8);
        assert_abs_diff_eq!(result.peak.frequency, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.peak.amplitude, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.amplitude[0], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn constant_input_reports_its_level_at_dc() {
        let result = spectrum(&[1.0; 8], &SpectrumOptions::default()).expect("valid options");
        assert_abs_diff_eq!(result.amplitude[0], 1.0, epsilon = 1e-12);
        for k in 1..result.amplitude.len() {
            assert_abs_diff_eq!(result.amplitude[k], 0.0, epsilon = 1e-12);
        }
        assert_eq!(result.peak.index, 0);
        assert_abs_diff_eq!(result.peak.frequency, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn nyquist_amplitude_is_not_doubled() {
        let x = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        let result = spectrum(&x, &SpectrumOptions::default()).expect("valid options");
        assert_abs_diff_eq!(result.amplitude[4], 1.0, epsilon = 1e-12);
        for k in 0..4 {
            assert_abs_diff_eq!(result.amplitude[k], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn dc_bias_does_not_mask_a_tone() {
        let x: Vec<f64> = (0..64)
            .map(|i| 2.0 + (2.0 * PI * 5.0 * i as f64 / 64.0).sin())
            .collect();
        let result = spectrum(&x, &SpectrumOptions::default()).expect("valid options");
        assert_abs_diff_eq!(result.amplitude[0], 2.0, epsilon = 1e-10);
        assert_eq!(result.peak.index, 5);
    }

    #[test]
    fn cosine_leads_sine_by_a_quarter_turn() {
        let n = 64;
        let cosine: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 8.0 * i as f64 / n as f64).cos())
            .collect();
        let sine = bin_centred_sine(n, 8);

        let options = SpectrumOptions::default();
        let cos_result = spectrum(&cosine, &options).expect("valid options");
        let sin_result = spectrum(&sine, &options).expect("valid options");

        let diff = wrap_angle(cos_result.phase[8] - sin_result.phase[8]);
        assert_abs_diff_eq!(diff, PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn sidedness_controls_all_output_lengths() {
        let x = bin_centred_sine(16, 3);

        let one = spectrum(&x, &SpectrumOptions::default()).expect("valid options");
        assert_eq!(one.frequencies.len(), 9);
        assert_eq!(one.amplitude.len(), 9);
        assert_eq!(one.phase.len(), 9);

        let two = spectrum(
            &x,
            &SpectrumOptions {
                sides: Sides::Two,
                ..SpectrumOptions::default()
            },
        )
        .expect("valid options");
        assert_eq!(two.frequencies.len(), 16);
        assert_eq!(two.amplitude.len(), 16);
        assert_eq!(two.phase.len(), 16);
    }

    #[test]
    fn two_sided_amplitude_splits_the_tone_energy() {
        let x = bin_centred_sine(16, 3);
        let two = spectrum(
            &x,
            &SpectrumOptions {
                sides: Sides::Two,
                ..SpectrumOptions::default()
            },
        )
        .expect("valid options");
        // Half the amplitude lands in bin 3 and half in its mirror bin 13.
        assert_abs_diff_eq!(two.amplitude[3], 0.5, epsilon = 1e-10);
        assert_abs_diff_eq!(two.amplitude[13], 0.5, epsilon = 1e-10);
    }

    #[test]
    fn short_input_is_zero_padded_to_the_next_power_of_two() {
        let result = spectrum(&[1.0, 2.0, 3.0, 4.0, 5.0], &SpectrumOptions::default())
            .expect("valid options");
        // Padded frame length 8, one-sided bins 8/2 + 1.
        assert_eq!(result.frequencies.len(), 5);
    }

    #[test]
    fn oversized_input_is_truncated_to_the_requested_size() {
        let long: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let result = spectrum(
            &long,
            &SpectrumOptions {
                fft_size: Some(4),
                ..SpectrumOptions::default()
            },
        )
        .expect("valid options");
        assert_eq!(result.frequencies.len(), 3);
        // DC of the truncated frame [0, 1, 2, 3]: (0+1+2+3)/4.
        assert_abs_diff_eq!(result.amplitude[0], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn empty_input_analyzes_as_a_single_zero_bin() {
        let result = spectrum(&[], &SpectrumOptions::default()).expect("valid options");
        assert_eq!(result.frequencies.len(), 1);
        assert_eq!(result.peak.index, 0);
        assert_abs_diff_eq!(result.peak.amplitude, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(result.peak.frequency, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn hann_window_keeps_the_peak_on_its_bin() {
        let x = bin_centred_sine(64, 8);
        let result = spectrum(
            &x,
            &SpectrumOptions {
                window: WindowKind::Hann,
                ..SpectrumOptions::default()
            },
        )
        .expect("valid options");
        assert_eq!(result.peak.index, 8);
        // The Hann coherent gain halves the reported amplitude.
        assert!(result.peak.amplitude > 0.4 && result.peak.amplitude < 0.6);
    }

    #[test]
    fn nan_input_propagates_instead_of_masking() {
        let mut x = bin_centred_sine(16, 3);
        x[5] = f64::NAN;
        let result = spectrum(&x, &SpectrumOptions::default()).expect("valid options");
        assert!(result.amplitude.iter().all(|v| v.is_nan()));
        // With every comparison failing, the peak falls back to bin 0.
        assert_eq!(result.peak.index, 0);
        assert!(result.peak.amplitude.is_nan());
    }

    #[test]
    fn analyzer_is_reusable_across_frames() {
        let analyzer = SpectrumAnalyzer::try_new(SpectrumConfig {
            fft_size: 64,
            sample_rate: 64.0,
            window: WindowKind::Rectangular,
            sides: Sides::One,
        })
        .expect("valid config");
        assert_eq!(analyzer.fft_size(), 64);
        assert_eq!(analyzer.window().len(), 64);

        for k in [3usize, 9, 14] {
            let result = analyzer
                .run_alloc(&bin_centred_sine(64, k))
                .expect("analysis should succeed");
            assert_eq!(result.peak.index, k);
            assert_abs_diff_eq!(result.peak.frequency, k as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn analyzer_rejects_bad_configs() {
        let bad_rate = SpectrumAnalyzer::try_new(SpectrumConfig {
            fft_size: 8,
            sample_rate: 0.0,
            window: WindowKind::Rectangular,
            sides: Sides::One,
        });
        assert!(bad_rate.is_err());

        let bad_size = SpectrumAnalyzer::try_new(SpectrumConfig {
            fft_size: 12,
            sample_rate: 1.0,
            window: WindowKind::Rectangular,
            sides: Sides::One,
        });
        assert!(bad_size.is_err());
    }

    #[test]
    fn bin_frequencies_cover_both_sidedness_modes() {
        let one = bin_frequencies(8, 16.0, Sides::One).expect("valid args");
        assert_eq!(one, vec![0.0, 2.0, 4.0, 6.0, 8.0]);

        let two = bin_frequencies(4, 4.0, Sides::Two).expect("valid args");
        assert_eq!(two, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn bin_frequencies_validate_their_arguments() {
        assert!(bin_frequencies(0, 1.0, Sides::One).is_err());
        assert!(bin_frequencies(8, 0.0, Sides::One).is_err());
        assert!(bin_frequencies(8, -1.0, Sides::One).is_err());
        assert!(bin_frequencies(8, f64::NAN, Sides::One).is_err());
    }

    #[test]
    fn sides_resolve_from_their_names() {
        assert_eq!(Sides::from_name("one").expect("known name"), Sides::One);
        assert_eq!(Sides::from_name("two").expect("known name"), Sides::Two);
        assert!(Sides::from_name("three").is_err());
        assert_eq!(Sides::One.name(), "one");
    }
}
