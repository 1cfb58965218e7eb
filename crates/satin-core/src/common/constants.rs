//! Fixed beam and gain-medium parameters shared by every kernel invocation.
//!
//! Lengths are in centimetres. None of these values is configurable at run
//! time; the correction table is derived from them once per process.

use std::f64::consts::PI;
use std::sync::OnceLock;

/// Beam radius.
pub const RAD: f64 = 0.18;
pub const RAD2: f64 = RAD * RAD;
/// Beam waist.
pub const W1: f64 = 0.3;
/// Radial integration step.
pub const DR: f64 = 0.002;
/// Longitudinal integration step.
pub const DZ: f64 = 0.04;
pub const LAMBDA: f64 = 0.0106;
pub const AREA: f64 = PI * RAD2;
/// Rayleigh range of the waist.
pub const Z1: f64 = PI * (W1 * W1) / LAMBDA;
pub const Z12: f64 = Z1 * Z1;
pub const EXPR: f64 = 2.0 * PI * DR;
/// Longitudinal sample count.
pub const INCR: usize = 8001;
/// Radius samples `0, DR, 2·DR, ...` strictly below 0.5.
pub const RADIAL_SAMPLES: usize = 250;
/// Denominator applied to the small-signal gain before scaling by `DZ`.
pub const GAIN_SCALE: f64 = 32_000.0;

static LONGITUDINAL_CORRECTION: OnceLock<Vec<f64>> = OnceLock::new();

/// Per-sample divergence correction along the propagation axis.
pub fn longitudinal_correction() -> &'static [f64] {
    LONGITUDINAL_CORRECTION.get_or_init(|| {
        let midpoint = (INCR / 2) as f64;
        (0..INCR)
            .map(|index| {
                let z_inc = (index as f64 - midpoint) / 25.0;
                2.0 * z_inc * DZ / (Z12 + z_inc * z_inc)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::{AREA, DR, EXPR, INCR, RAD, RAD2, RADIAL_SAMPLES, Z1, Z12, longitudinal_correction};
    use std::f64::consts::PI;

    #[test]
    fn derived_constants_match_expected_relationships() {
        assert_eq!(RAD2, RAD * RAD);
        assert!((AREA - 0.101_787_601_976_309_3).abs() <= 1.0e-15);
        assert!((Z1 - 26.673_899_888_969_94).abs() <= 1.0e-12);
        assert_eq!(Z12, Z1 * Z1);
        assert!((EXPR - 2.0 * PI * DR).abs() <= f64::EPSILON);
    }

    #[test]
    fn radial_samples_stay_below_half_centimetre() {
        let mut radius = 0.0;
        let mut samples = 0;
        while radius <= 0.5 {
            samples += 1;
            radius += DR;
        }
        assert_eq!(samples, RADIAL_SAMPLES);
    }

    #[test]
    fn correction_table_is_antisymmetric_about_the_waist() {
        let table = longitudinal_correction();
        assert_eq!(table.len(), INCR);
        assert_eq!(table[INCR / 2], 0.0);
        for offset in 1..=INCR / 2 {
            assert_eq!(table[INCR / 2 - offset], -table[INCR / 2 + offset]);
        }
        assert!(table[0] < 0.0);
        assert!(table[INCR - 1] > 0.0);
    }

    #[test]
    fn correction_table_is_built_once() {
        let first = longitudinal_correction().as_ptr();
        let second = longitudinal_correction().as_ptr();
        assert_eq!(first, second);
    }
}
