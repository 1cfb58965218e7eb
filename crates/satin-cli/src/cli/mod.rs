mod commands;
mod logging;

use clap::Parser;
use satin_core::domain::SatinError;

use commands::RunArgs;

pub fn run_from_env() -> i32 {
    match run(std::env::args()) {
        Ok(code) => code,
        Err(error) => {
            let satin_error = error.as_satin_error();
            eprintln!("{}", satin_error.diagnostic_line());
            eprintln!("{}", satin_error.fatal_exit_line());
            satin_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            logging::init_logging(cli.run.log_format);
            commands::run_simulation(cli.run)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "satin",
    version,
    about = "Gaussian-beam output power of a CO2 laser gain medium"
)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(SatinError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_satin_error(&self) -> SatinError {
        match self {
            Self::Usage(message) => {
                SatinError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => SatinError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
