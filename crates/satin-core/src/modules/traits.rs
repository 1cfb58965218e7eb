use super::gaussian::GaussianResult;
use crate::domain::{LaserConfig, SatinResult};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Sorted sweep rows for one laser, ready to persist.
#[derive(Debug, Clone, Copy)]
pub struct LaserReport<'a> {
    pub laser: &'a LaserConfig,
    pub rows: &'a [GaussianResult],
    pub started_at: DateTime<Local>,
}

pub trait ReportWriter: Sync {
    /// Persists one report and returns its absolute path.
    fn write_report(&self, report: &LaserReport<'_>) -> SatinResult<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::{LaserReport, ReportWriter};
    use crate::domain::{CarbonDioxide, LaserConfig, SatinError, SatinErrorCategory, SatinResult};
    use chrono::Local;
    use std::path::PathBuf;

    struct RejectingWriter;

    impl ReportWriter for RejectingWriter {
        fn write_report(&self, report: &LaserReport<'_>) -> SatinResult<PathBuf> {
            Err(SatinError::io_system(
                "IO.REPORT_WRITE",
                format!("refusing to write '{}'", report.laser.output_file),
            ))
        }
    }

    #[test]
    fn report_writer_uses_shared_error_types() {
        let laser = LaserConfig::new("pimb.out", 13.5, 20, CarbonDioxide::Pi);
        let report = LaserReport {
            laser: &laser,
            rows: &[],
            started_at: Local::now(),
        };

        let error = RejectingWriter
            .write_report(&report)
            .expect_err("writer should fail");
        assert_eq!(error.category(), SatinErrorCategory::IoSystemError);
        assert_eq!(error.exit_code(), 3);
        assert!(error.message().contains("pimb.out"));
    }
}
