pub mod errors;

pub use errors::{ComputeResult, ParserResult, SatinError, SatinErrorCategory, SatinResult};

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Serial,
    #[default]
    Parallel,
}

/// Gas supply of the discharge tube: molecular discharge or pre-ionised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CarbonDioxide {
    #[serde(rename = "MD")]
    Md,
    #[serde(rename = "PI")]
    Pi,
}

impl CarbonDioxide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md => "MD",
            Self::Pi => "PI",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("md") {
            Some(Self::Md)
        } else if code.eq_ignore_ascii_case("pi") {
            Some(Self::Pi)
        } else {
            None
        }
    }
}

impl Display for CarbonDioxide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserConfig {
    pub output_file: String,
    pub small_signal_gain: f64,
    pub discharge_pressure: u32,
    pub carbon_dioxide: CarbonDioxide,
}

impl LaserConfig {
    pub fn new(
        output_file: impl Into<String>,
        small_signal_gain: f64,
        discharge_pressure: u32,
        carbon_dioxide: CarbonDioxide,
    ) -> Self {
        Self {
            output_file: output_file.into(),
            small_signal_gain,
            discharge_pressure,
            carbon_dioxide,
        }
    }
}

impl Display for LaserConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {:.1}  {}  {}",
            self.output_file, self.small_signal_gain, self.discharge_pressure, self.carbon_dioxide
        )
    }
}
