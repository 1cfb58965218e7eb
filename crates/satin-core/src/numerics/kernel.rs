//! Radial/longitudinal integration of a Gaussian beam through a saturable
//! gain medium.
//!
//! Each radius sample is propagated through `INCR` longitudinal slices; the
//! slice update depends on the previous intensity, so the inner loop is a
//! strict sequential chain. The radial accumulation is also kept in sample
//! order so results are bit-identical however the callers schedule the work.

use crate::common::constants::{
    AREA, DR, DZ, EXPR, GAIN_SCALE, RAD2, RADIAL_SAMPLES, longitudinal_correction,
};
use crate::domain::SatinError;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("input power must be positive, got {0}")]
    NonPositiveInputPower(i32),
    #[error("saturation intensity must be positive, got {0}")]
    NonPositiveSaturationIntensity(i32),
    #[error("small-signal gain must be finite and non-negative, got {0}")]
    InvalidSmallSignalGain(f64),
    #[error(
        "integration produced non-finite output power {output_power} for input power {input_power} at saturation intensity {saturation_intensity}"
    )]
    NonFiniteOutput {
        input_power: i32,
        saturation_intensity: i32,
        output_power: f64,
    },
}

impl KernelError {
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::NonPositiveInputPower(_) => "INPUT.KERNEL_INPUT_POWER",
            Self::NonPositiveSaturationIntensity(_) => "INPUT.KERNEL_SATURATION_INTENSITY",
            Self::InvalidSmallSignalGain(_) => "INPUT.KERNEL_SMALL_SIGNAL_GAIN",
            Self::NonFiniteOutput { .. } => "RUN.KERNEL_NON_FINITE",
        }
    }
}

impl From<KernelError> for SatinError {
    fn from(error: KernelError) -> Self {
        match error {
            KernelError::NonFiniteOutput { .. } => {
                SatinError::computation(error.placeholder(), error.to_string())
            }
            _ => SatinError::input_validation(error.placeholder(), error.to_string()),
        }
    }
}

/// Output power (watts) of a beam of `input_power` watts after the gain
/// medium described by `small_signal_gain` and `saturation_intensity`.
pub fn compute_output_power(
    input_power: i32,
    small_signal_gain: f64,
    saturation_intensity: i32,
) -> Result<f64, KernelError> {
    if input_power <= 0 {
        return Err(KernelError::NonPositiveInputPower(input_power));
    }
    if saturation_intensity <= 0 {
        return Err(KernelError::NonPositiveSaturationIntensity(
            saturation_intensity,
        ));
    }
    if !small_signal_gain.is_finite() || small_signal_gain < 0.0 {
        return Err(KernelError::InvalidSmallSignalGain(small_signal_gain));
    }

    let correction = longitudinal_correction();
    let saturation = f64::from(saturation_intensity);
    let gain_factor = saturation * (small_signal_gain / GAIN_SCALE * DZ);
    let input_intensity = 2.0 * f64::from(input_power) / AREA;

    let mut output_power = 0.0;
    let mut radius = 0.0;
    for _ in 0..RADIAL_SAMPLES {
        let mut output_intensity = input_intensity * (-2.0 * (radius * radius) / RAD2).exp();
        for &slice_correction in correction {
            output_intensity *=
                1.0 + gain_factor / (saturation + output_intensity) - slice_correction;
        }
        output_power += output_intensity * EXPR * radius;
        radius += DR;
    }

    if !output_power.is_finite() {
        return Err(KernelError::NonFiniteOutput {
            input_power,
            saturation_intensity,
            output_power,
        });
    }

    Ok(output_power)
}

#[cfg(test)]
mod tests {
    use super::{KernelError, compute_output_power};
    use crate::domain::{SatinError, SatinErrorCategory};

    #[test]
    fn reproduces_reference_output_power() {
        let output = compute_output_power(150, 13.5, 25_000).expect("kernel should succeed");
        assert!(
            (output - 165.447_030_017).abs() <= 1.0e-3,
            "unexpected output power {output}"
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = compute_output_power(300, 18.5, 15_000).expect("first call");
        let second = compute_output_power(300, 18.5, 15_000).expect("second call");
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn zero_input_power_is_rejected_not_zeroed() {
        let error = compute_output_power(0, 13.5, 25_000).expect_err("zero power must fail");
        assert_eq!(error, KernelError::NonPositiveInputPower(0));

        let error = SatinError::from(error);
        assert_eq!(error.category(), SatinErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.KERNEL_INPUT_POWER");
    }

    #[test]
    fn invalid_preconditions_are_rejected() {
        assert_eq!(
            compute_output_power(-5, 13.5, 25_000),
            Err(KernelError::NonPositiveInputPower(-5))
        );
        assert_eq!(
            compute_output_power(150, 13.5, 0),
            Err(KernelError::NonPositiveSaturationIntensity(0))
        );
        assert!(matches!(
            compute_output_power(150, f64::NAN, 25_000),
            Err(KernelError::InvalidSmallSignalGain(_))
        ));
        assert_eq!(
            compute_output_power(150, -1.0, 25_000),
            Err(KernelError::InvalidSmallSignalGain(-1.0))
        );
    }

    #[test]
    fn non_finite_output_maps_to_computation_error() {
        let error = SatinError::from(KernelError::NonFiniteOutput {
            input_power: 150,
            saturation_intensity: 10_000,
            output_power: f64::INFINITY,
        });
        assert_eq!(error.category(), SatinErrorCategory::ComputationError);
        assert_eq!(error.placeholder(), "RUN.KERNEL_NON_FINITE");
    }
}
