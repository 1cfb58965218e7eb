use super::CliError;
use super::logging::LogFormat;
use anyhow::Context;
use satin_core::common::{
    DEFAULT_INPUT_POWERS_PATH, DEFAULT_LASER_TABLE_PATH, DEFAULT_OUTPUT_DIR, RunConfig,
};
use satin_core::domain::ExecutionMode;
use satin_core::modules::{RunSummary, run_from_config};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(clap::Args)]
pub(super) struct RunArgs {
    /// Input power list (watts), one or more integers per line
    #[arg(long = "pin", value_name = "PATH", default_value = DEFAULT_INPUT_POWERS_PATH)]
    input_powers: PathBuf,

    /// Laser configuration table
    #[arg(long = "laser", value_name = "PATH", default_value = DEFAULT_LASER_TABLE_PATH)]
    laser_table: PathBuf,

    /// Directory that receives one report per laser
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Run every sweep on the calling thread
    #[arg(long)]
    serial: bool,

    /// Worker threads for the parallel sweep (defaults to one per core)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    threads: Option<u16>,

    /// Write a JSON summary of every laser outcome
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Diagnostic log layout on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub(super) log_format: LogFormat,
}

impl RunArgs {
    fn to_config(&self) -> RunConfig {
        let execution_mode = if self.serial {
            ExecutionMode::Serial
        } else {
            ExecutionMode::Parallel
        };

        RunConfig::new(&self.input_powers, &self.laser_table, &self.output_dir)
            .with_execution_mode(execution_mode)
            .with_threads(self.threads.map(usize::from))
    }
}

pub(super) fn run_simulation(args: RunArgs) -> Result<i32, CliError> {
    let config = args.to_config();
    let started = Instant::now();
    let result = run_from_config(&config);
    info!(
        "The time was {:.3} seconds",
        started.elapsed().as_secs_f64()
    );

    let summary = result.map_err(CliError::Compute)?;
    for (_, path) in summary.succeeded() {
        println!("{}", path.display());
    }
    for (_, error) in summary.failed() {
        eprintln!("{}", error.diagnostic_line());
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &summary)?;
    }

    Ok(summary.exit_code())
}

fn write_summary(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create summary directory '{}'", parent.display()))?;
    }

    let rendered = serde_json::to_string_pretty(&summary.to_json())
        .context("failed to serialize run summary")?;
    fs::write(path, rendered + "\n")
        .with_context(|| format!("failed to write run summary '{}'", path.display()))
}
