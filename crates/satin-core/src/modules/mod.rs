pub mod gaussian;
pub mod input;
pub mod report;
pub mod run;
pub mod serialization;
pub mod sweep;

mod traits;

pub use gaussian::{GaussianResult, REPORT_SCALE, round_half_up};
pub use report::{FileReportWriter, render_report};
pub use run::{LaserOutcome, RunSummary, run, run_from_config};
pub use sweep::{SATURATION_INTENSITY_GRID, sweep_configuration, sweep_saturation};
pub use traits::{LaserReport, ReportWriter};
