mod model;

use super::serialization::write_text_artifact_atomic;
use super::traits::{LaserReport, ReportWriter};
use crate::domain::{SatinError, SatinResult};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub use model::render_report;

/// Writes each laser's report to `<output_dir>/<output_file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReportWriter {
    output_dir: PathBuf,
}

impl FileReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn report_path(&self, output_file: &str) -> PathBuf {
        self.output_dir.join(output_file)
    }
}

impl ReportWriter for FileReportWriter {
    fn write_report(&self, report: &LaserReport<'_>) -> SatinResult<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|source| {
            SatinError::io_system(
                "IO.REPORT_OUTPUT_DIRECTORY",
                format!(
                    "failed to create report directory '{}': {}",
                    self.output_dir.display(),
                    source
                ),
            )
        })?;

        let output_path = self.report_path(&report.laser.output_file);
        let content = render_report(
            report.laser,
            report.rows,
            &model::format_timestamp(&report.started_at),
            &model::format_timestamp(&Local::now()),
        );

        write_text_artifact_atomic(&output_path, &content).map_err(|source| {
            SatinError::io_system(
                "IO.REPORT_WRITE",
                format!(
                    "failed to write report '{}': {}",
                    output_path.display(),
                    source
                ),
            )
        })?;

        fs::canonicalize(&output_path).map_err(|source| {
            SatinError::io_system(
                "IO.REPORT_PATH",
                format!(
                    "failed to resolve report path '{}': {}",
                    output_path.display(),
                    source
                ),
            )
        })
    }
}
