mod parser;

use crate::domain::{LaserConfig, SatinError, SatinResult};
use std::fs;
use std::path::Path;

pub use parser::{parse_input_powers, parse_laser_line, parse_laser_table};

pub const INPUT_POWERS_ARTIFACT: &str = "pin.dat";
pub const LASER_TABLE_ARTIFACT: &str = "laser.dat";

pub fn read_input_source(path: &Path, artifact_name: &str) -> SatinResult<String> {
    fs::read_to_string(path).map_err(|source| {
        SatinError::io_system(
            "IO.INPUT_READ",
            format!(
                "failed to read input '{}' ({}): {}",
                path.display(),
                artifact_name,
                source
            ),
        )
    })
}

pub fn load_input_powers(path: &Path) -> SatinResult<Vec<i32>> {
    let source = read_input_source(path, INPUT_POWERS_ARTIFACT)?;
    parse_input_powers(&source)
}

pub fn load_laser_table(path: &Path) -> SatinResult<Vec<LaserConfig>> {
    let source = read_input_source(path, LASER_TABLE_ARTIFACT)?;
    Ok(parse_laser_table(&source))
}
