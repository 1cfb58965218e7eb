use crate::domain::LaserConfig;
use crate::modules::gaussian::GaussianResult;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub(super) const TIMESTAMP_FORMAT: &str = "%-d %b %Y %H:%M:%S%.3f";

const COLUMN_WIDTH: usize = 14;
const COLUMN_TITLES: [&str; 5] = ["Pin", "Pout", "Sat. Int", "ln(Pout/Pin)", "Pout-Pin"];
const COLUMN_UNITS: [&str; 5] = ["(watts)", "(watts)", "(watts/cm2)", "", "(watts)"];

pub(super) fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders a full report. Rows are written in the order given.
pub fn render_report(
    laser: &LaserConfig,
    rows: &[GaussianResult],
    started_at: &str,
    finished_at: &str,
) -> String {
    let mut content = format!(
        "Start date: {started_at}\n\nGaussian Beam\n\nPressure in Main Discharge = {}kPa\nSmall-signal Gain = {:.1}\nCO2 via {}\n\n",
        laser.discharge_pressure, laser.small_signal_gain, laser.carbon_dioxide
    );

    content.push_str(&format_columns(COLUMN_TITLES));
    content.push_str(&format_columns(COLUMN_UNITS));
    for row in rows {
        content.push_str(&format_columns([
            row.input_power().to_string(),
            row.output_power_display(),
            row.saturation_intensity().to_string(),
            row.log_ratio_display(),
            row.delta_display(),
        ]));
    }

    content.push('\n');
    content.push_str(&format!("End date: {finished_at}\n"));
    content
}

fn format_columns<S: AsRef<str>>(cells: impl IntoIterator<Item = S>) -> String {
    let line: String = cells
        .into_iter()
        .map(|cell| format!("{:<width$}", cell.as_ref(), width = COLUMN_WIDTH))
        .collect();
    format!("{}\n", line.trim_end())
}
