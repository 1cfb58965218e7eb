use crate::domain::{CarbonDioxide, LaserConfig, ParserResult, SatinError};
use tracing::debug;

const OUTPUT_FILE_SUFFIX: &str = ".out";

pub fn parse_input_powers(source: &str) -> ParserResult<Vec<i32>> {
    let mut input_powers = Vec::new();
    for (line_index, line) in source.lines().enumerate() {
        for token in line.split_whitespace() {
            let input_power = token.parse::<i32>().map_err(|_| {
                SatinError::input_validation(
                    "INPUT.INPUT_POWER",
                    format!(
                        "input power token '{}' on line {} is not an integer",
                        token,
                        line_index + 1
                    ),
                )
            })?;
            if input_power <= 0 {
                return Err(SatinError::input_validation(
                    "INPUT.INPUT_POWER_RANGE",
                    format!(
                        "input power {} on line {} must be positive",
                        input_power,
                        line_index + 1
                    ),
                ));
            }
            input_powers.push(input_power);
        }
    }

    if input_powers.is_empty() {
        return Err(SatinError::input_validation(
            "INPUT.INPUT_POWERS_EMPTY",
            "input power list contains no values",
        ));
    }

    Ok(input_powers)
}

/// Keeps every line that reads `<md|pi><xx>.out <dd.d> <pressure> <MD|PI>`;
/// anything else is skipped. Fields may be separated by any run of spaces or
/// tabs, and leading or trailing whitespace on a line is ignored rather than
/// disqualifying it.
pub fn parse_laser_table(source: &str) -> Vec<LaserConfig> {
    source
        .lines()
        .enumerate()
        .filter_map(|(line_index, line)| {
            let laser = parse_laser_line(line);
            if laser.is_none() && !line.trim().is_empty() {
                debug!(line = line_index + 1, content = line, "skipping laser table line");
            }
            laser
        })
        .collect()
}

pub fn parse_laser_line(line: &str) -> Option<LaserConfig> {
    let mut fields = line.split_whitespace();
    let output_file = fields.next()?;
    let gain = fields.next()?;
    let pressure = fields.next()?;
    let mode = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let code = output_file_code(output_file)?;
    if !mode.eq_ignore_ascii_case(code) {
        return None;
    }

    Some(LaserConfig::new(
        output_file,
        parse_gain(gain)?,
        parse_pressure(pressure)?,
        CarbonDioxide::from_code(code)?,
    ))
}

fn output_file_code(output_file: &str) -> Option<&str> {
    let stem = output_file.strip_suffix(OUTPUT_FILE_SUFFIX)?;
    if stem.len() != 4 || !stem.is_ascii() {
        return None;
    }

    let (code, suffix) = stem.split_at(2);
    if !matches!(code, "md" | "pi") {
        return None;
    }
    if !suffix.bytes().all(|byte| byte.is_ascii_lowercase()) {
        return None;
    }

    Some(code)
}

fn parse_gain(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let well_formed = bytes.len() == 4
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'.'
        && bytes[3].is_ascii_digit();
    if !well_formed {
        return None;
    }

    token.parse().ok()
}

fn parse_pressure(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    token.parse().ok()
}
