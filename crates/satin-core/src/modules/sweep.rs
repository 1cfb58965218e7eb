use super::gaussian::GaussianResult;
use crate::domain::{ComputeResult, ExecutionMode, LaserConfig, SatinError};
use crate::numerics::compute_output_power;
use rayon::prelude::*;
use tracing::debug;

/// Saturation intensities (watts/cm2) evaluated for every input power.
pub const SATURATION_INTENSITY_GRID: [i32; 16] = [
    10_000, 11_000, 12_000, 13_000, 14_000, 15_000, 16_000, 17_000, 18_000, 19_000, 20_000,
    21_000, 22_000, 23_000, 24_000, 25_000,
];

/// Runs the kernel once per saturation intensity; rows come back in grid
/// order in both execution modes.
pub fn sweep_saturation(
    input_power: i32,
    small_signal_gain: f64,
    execution_mode: ExecutionMode,
) -> ComputeResult<Vec<GaussianResult>> {
    let evaluate = |&saturation_intensity: &i32| -> ComputeResult<GaussianResult> {
        let output_power =
            compute_output_power(input_power, small_signal_gain, saturation_intensity)?;
        GaussianResult::new(input_power, output_power, saturation_intensity)
    };

    match execution_mode {
        ExecutionMode::Serial => SATURATION_INTENSITY_GRID.iter().map(evaluate).collect(),
        ExecutionMode::Parallel => SATURATION_INTENSITY_GRID.par_iter().map(evaluate).collect(),
    }
}

/// Sweeps every input power for one laser and returns the rows ordered by
/// input power, then saturation intensity.
pub fn sweep_configuration(
    input_powers: &[i32],
    laser: &LaserConfig,
    execution_mode: ExecutionMode,
) -> ComputeResult<Vec<GaussianResult>> {
    if input_powers.is_empty() {
        return Err(SatinError::input_validation(
            "INPUT.INPUT_POWERS_EMPTY",
            format!("no input powers to sweep for '{}'", laser.output_file),
        ));
    }

    debug!(
        laser = %laser.output_file,
        input_powers = input_powers.len(),
        mode = ?execution_mode,
        "sweeping configuration"
    );

    let sweep = |&input_power: &i32| {
        sweep_saturation(input_power, laser.small_signal_gain, execution_mode)
    };
    let groups: Vec<Vec<GaussianResult>> = match execution_mode {
        ExecutionMode::Serial => input_powers.iter().map(sweep).collect::<ComputeResult<_>>()?,
        ExecutionMode::Parallel => input_powers
            .par_iter()
            .map(sweep)
            .collect::<ComputeResult<_>>()?,
    };

    let mut rows: Vec<GaussianResult> = groups.into_iter().flatten().collect();
    rows.sort_by_key(GaussianResult::sort_key);
    Ok(rows)
}
