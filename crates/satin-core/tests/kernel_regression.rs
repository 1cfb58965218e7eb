use satin_core::modules::{GaussianResult, SATURATION_INTENSITY_GRID};
use satin_core::numerics::{NumericTolerance, compute_output_power};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("kernel-regression.json")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KernelFixtures {
    tolerance: NumericTolerance,
    cases: Vec<KernelCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KernelCase {
    id: String,
    input_power: i32,
    small_signal_gain: f64,
    saturation_intensity: i32,
    output_power: f64,
    log_ratio: f64,
    delta: f64,
}

fn load_fixtures() -> KernelFixtures {
    let source = fs::read_to_string(fixture_path()).expect("kernel fixture should be readable");
    serde_json::from_str(&source).expect("kernel fixture should parse")
}

#[test]
fn kernel_matches_regression_fixture() {
    let fixtures = load_fixtures();
    assert!(!fixtures.cases.is_empty());

    for case in &fixtures.cases {
        assert!(
            SATURATION_INTENSITY_GRID.contains(&case.saturation_intensity),
            "{} uses an off-grid saturation intensity",
            case.id
        );

        let output_power = compute_output_power(
            case.input_power,
            case.small_signal_gain,
            case.saturation_intensity,
        )
        .unwrap_or_else(|error| panic!("{} failed: {error}", case.id));
        let gaussian =
            GaussianResult::new(case.input_power, output_power, case.saturation_intensity)
                .unwrap_or_else(|error| panic!("{} produced an invalid row: {error}", case.id));

        for (quantity, expected, actual) in [
            ("outputPower", case.output_power, gaussian.output_power()),
            ("logRatio", case.log_ratio, gaussian.log_ratio()),
            ("delta", case.delta, gaussian.delta()),
        ] {
            assert!(
                fixtures.tolerance.accepts(expected, actual),
                "{} {quantity}: expected {expected}, got {actual}",
                case.id
            );
        }
    }
}

#[test]
fn reference_anchor_rounds_to_three_decimals() {
    let output_power = compute_output_power(150, 13.5, 25_000).expect("kernel should succeed");
    let gaussian = GaussianResult::new(150, output_power, 25_000).expect("valid row");

    assert_eq!(gaussian.output_power_display(), "165.447");
    assert_eq!(gaussian.log_ratio_display(), "0.098");
    assert_eq!(gaussian.delta_display(), "15.447");
}

#[test]
fn output_power_grows_with_gain() {
    let low = compute_output_power(150, 10.2, 20_000).expect("low gain");
    let high = compute_output_power(150, 22.0, 20_000).expect("high gain");
    assert!(high > low, "higher gain should amplify more: {low} vs {high}");
    assert!(low > 150.0, "gain medium should amplify the beam");
}
