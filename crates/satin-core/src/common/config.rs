//! Run-level settings: where the inputs live, where reports go, and how the
//! sweep is scheduled.

use crate::domain::ExecutionMode;
use std::path::PathBuf;

pub const DEFAULT_INPUT_POWERS_PATH: &str = "pin.dat";
pub const DEFAULT_LASER_TABLE_PATH: &str = "laser.dat";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_powers_path: PathBuf,
    pub laser_table_path: PathBuf,
    pub output_dir: PathBuf,
    pub execution_mode: ExecutionMode,
    /// Size of a dedicated worker pool; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_powers_path: PathBuf::from(DEFAULT_INPUT_POWERS_PATH),
            laser_table_path: PathBuf::from(DEFAULT_LASER_TABLE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            execution_mode: ExecutionMode::default(),
            threads: None,
        }
    }
}

impl RunConfig {
    pub fn new(
        input_powers_path: impl Into<PathBuf>,
        laser_table_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_powers_path: input_powers_path.into(),
            laser_table_path: laser_table_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_execution_mode(mut self, execution_mode: ExecutionMode) -> Self {
        self.execution_mode = execution_mode;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}
