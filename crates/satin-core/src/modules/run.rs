use super::input::{load_input_powers, load_laser_table};
use super::report::FileReportWriter;
use super::sweep::sweep_configuration;
use super::traits::{LaserReport, ReportWriter};
use crate::common::RunConfig;
use crate::domain::{ExecutionMode, LaserConfig, SatinError, SatinResult};
use chrono::Local;
use rayon::prelude::*;
use serde_json::{Value, json};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq)]
pub struct LaserOutcome {
    pub laser: LaserConfig,
    pub result: SatinResult<PathBuf>,
}

impl LaserOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub execution_mode: ExecutionMode,
    pub outcomes: Vec<LaserOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> impl Iterator<Item = (&LaserConfig, &PathBuf)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .ok()
                .map(|path| (&outcome.laser, path))
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (&LaserConfig, &SatinError)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|error| (&outcome.laser, error))
        })
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(LaserOutcome::is_success)
    }

    /// 0 when every laser succeeded, 1 when only some failed, otherwise the
    /// first failure's category code.
    pub fn exit_code(&self) -> i32 {
        let mut failures = self.failed();
        match failures.next() {
            None => 0,
            Some(_) if self.succeeded().next().is_some() => 1,
            Some((_, error)) => error.exit_code(),
        }
    }

    pub fn to_json(&self) -> Value {
        let lasers: Vec<Value> = self
            .outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(path) => json!({
                    "laser": outcome.laser,
                    "status": "written",
                    "path": path.display().to_string(),
                }),
                Err(error) => json!({
                    "laser": outcome.laser,
                    "status": "failed",
                    "category": error.category().as_str(),
                    "placeholder": error.placeholder(),
                    "message": error.message(),
                }),
            })
            .collect();

        json!({
            "executionMode": self.execution_mode,
            "passed": self.is_success(),
            "exitCode": self.exit_code(),
            "lasers": lasers,
        })
    }
}

/// Sweeps every laser and hands its rows to `writer`. One outcome per laser,
/// in input order; a failing laser never stops the others.
pub fn run<W>(
    input_powers: &[i32],
    lasers: &[LaserConfig],
    writer: &W,
    execution_mode: ExecutionMode,
) -> Vec<LaserOutcome>
where
    W: ReportWriter + ?Sized,
{
    let process = |laser: &LaserConfig| LaserOutcome {
        laser: laser.clone(),
        result: process_laser(input_powers, laser, writer, execution_mode),
    };

    match execution_mode {
        ExecutionMode::Serial => lasers.iter().map(process).collect(),
        ExecutionMode::Parallel => lasers.par_iter().map(process).collect(),
    }
}

/// Reads both inputs named by `config`, runs every laser and writes the
/// reports under `config.output_dir`.
pub fn run_from_config(config: &RunConfig) -> SatinResult<RunSummary> {
    let input_powers = load_input_powers(&config.input_powers_path)?;
    let lasers = load_laser_table(&config.laser_table_path)?;
    if lasers.is_empty() {
        return Err(SatinError::input_validation(
            "INPUT.LASER_TABLE_EMPTY",
            format!(
                "no laser configurations found in '{}'",
                config.laser_table_path.display()
            ),
        ));
    }

    let writer = FileReportWriter::new(&config.output_dir);
    info!(
        input_powers = input_powers.len(),
        lasers = lasers.len(),
        mode = ?config.execution_mode,
        output_dir = %writer.output_dir().display(),
        "starting run"
    );

    let outcomes = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|index| format!("satin-worker-{index}"))
                .build()
                .map_err(|source| {
                    SatinError::internal(
                        "SYS.THREAD_POOL",
                        format!("failed to build a {threads}-thread worker pool: {source}"),
                    )
                })?;
            pool.install(|| run(&input_powers, &lasers, &writer, config.execution_mode))
        }
        None => run(&input_powers, &lasers, &writer, config.execution_mode),
    };

    Ok(RunSummary {
        execution_mode: config.execution_mode,
        outcomes,
    })
}

fn process_laser<W>(
    input_powers: &[i32],
    laser: &LaserConfig,
    writer: &W,
    execution_mode: ExecutionMode,
) -> SatinResult<PathBuf>
where
    W: ReportWriter + ?Sized,
{
    let started_at = Local::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let rows = sweep_configuration(input_powers, laser, execution_mode)?;
        writer.write_report(&LaserReport {
            laser,
            rows: &rows,
            started_at,
        })
    }))
    .unwrap_or_else(|payload| {
        Err(SatinError::internal(
            "SYS.LASER_TASK_PANIC",
            format!(
                "sweep for '{}' panicked: {}",
                laser.output_file,
                panic_message(payload.as_ref())
            ),
        ))
    });

    match &result {
        Ok(path) => info!(laser = %laser, path = %path.display(), "report written"),
        Err(failure) => error!(laser = %laser, "{}", failure.diagnostic_line()),
    }

    result
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}
