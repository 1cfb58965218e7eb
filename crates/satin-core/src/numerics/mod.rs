pub mod kernel;

pub use kernel::{KernelError, compute_output_power};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericTolerance {
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub relative_floor: f64,
}

impl NumericTolerance {
    pub fn accepts(&self, expected: f64, actual: f64) -> bool {
        within_tolerance(
            expected,
            actual,
            self.abs_tol,
            self.rel_tol,
            self.relative_floor,
        )
    }
}

pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

pub fn within_tolerance(
    lhs: f64,
    rhs: f64,
    abs_tol: f64,
    rel_tol: f64,
    relative_floor: f64,
) -> bool {
    let abs_diff = (lhs - rhs).abs();
    abs_diff <= abs_tol || relative_difference(lhs, rhs, relative_floor) <= rel_tol
}

#[cfg(test)]
mod tests {
    use super::{NumericTolerance, relative_difference, within_tolerance};

    #[test]
    fn relative_difference_uses_relative_floor() {
        let diff = relative_difference(0.0, 1.0e-10, 1.0e-6);
        assert!((diff - 1.0e-4).abs() < 1.0e-12);
    }

    #[test]
    fn within_tolerance_accepts_abs_or_relative_match() {
        assert!(within_tolerance(10.0, 10.001, 1.0e-2, 1.0e-6, 1.0e-12));
        assert!(within_tolerance(1000.0, 1000.2, 1.0e-6, 5.0e-4, 1.0e-12));
        assert!(!within_tolerance(1.0, 1.1, 1.0e-3, 1.0e-3, 1.0e-12));
    }

    #[test]
    fn tolerance_rejects_nan() {
        let tolerance = NumericTolerance {
            abs_tol: 1.0,
            rel_tol: 1.0,
            relative_floor: 1.0e-12,
        };
        assert!(tolerance.accepts(165.447, 165.4471));
        assert!(!tolerance.accepts(165.447, f64::NAN));
    }
}
