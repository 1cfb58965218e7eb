use crate::domain::{ComputeResult, SatinError};

/// Decimal places shown for every derived quantity in a report row.
pub const REPORT_SCALE: u32 = 3;

/// One computed report row: a beam power before and after the gain medium
/// at a single saturation intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianResult {
    input_power: i32,
    output_power: f64,
    saturation_intensity: i32,
}

impl GaussianResult {
    pub fn new(
        input_power: i32,
        output_power: f64,
        saturation_intensity: i32,
    ) -> ComputeResult<Self> {
        if input_power <= 0 {
            return Err(SatinError::input_validation(
                "INPUT.GAUSSIAN_INPUT_POWER",
                format!("Gaussian result requires positive input power, got {input_power}"),
            ));
        }
        if !output_power.is_finite() || output_power < 0.0 {
            return Err(SatinError::computation(
                "RUN.GAUSSIAN_OUTPUT_POWER",
                format!(
                    "Gaussian result for input power {input_power} at saturation intensity {saturation_intensity} has invalid output power {output_power}"
                ),
            ));
        }

        Ok(Self {
            input_power,
            output_power,
            saturation_intensity,
        })
    }

    pub const fn input_power(&self) -> i32 {
        self.input_power
    }

    pub const fn output_power(&self) -> f64 {
        self.output_power
    }

    pub const fn saturation_intensity(&self) -> i32 {
        self.saturation_intensity
    }

    /// `ln(Pout / Pin)`.
    pub fn log_ratio(&self) -> f64 {
        (self.output_power / f64::from(self.input_power)).ln()
    }

    /// `Pout - Pin`.
    pub fn delta(&self) -> f64 {
        self.output_power - f64::from(self.input_power)
    }

    pub const fn sort_key(&self) -> (i32, i32) {
        (self.input_power, self.saturation_intensity)
    }

    pub fn output_power_display(&self) -> String {
        round_half_up(self.output_power, REPORT_SCALE)
    }

    pub fn log_ratio_display(&self) -> String {
        round_half_up(self.log_ratio(), REPORT_SCALE)
    }

    /// Subtracts in decimal so the rounded difference matches the rounded
    /// operands digit for digit.
    pub fn delta_display(&self) -> String {
        match DecimalValue::parse(self.output_power) {
            Some(output) => output
                .minus_integer(i128::from(self.input_power))
                .map(|delta| delta.round_half_up(REPORT_SCALE))
                .unwrap_or_else(|| round_half_up(self.delta(), REPORT_SCALE)),
            None => round_half_up(self.delta(), REPORT_SCALE),
        }
    }
}

/// Rounds `value` to `scale` decimal places, halves away from zero, working
/// on the shortest decimal representation of the double.
pub fn round_half_up(value: f64, scale: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    match DecimalValue::parse(value) {
        Some(decimal) => decimal.round_half_up(scale),
        None => format!("{value:.prec$}", prec = scale as usize),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DecimalValue {
    mantissa: i128,
    scale: u32,
}

impl DecimalValue {
    fn parse(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let text = value.to_string();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let mut mantissa: i128 = 0;
        for digit in integer.bytes().chain(fraction.bytes()) {
            if !digit.is_ascii_digit() {
                return None;
            }
            mantissa = mantissa
                .checked_mul(10)?
                .checked_add(i128::from(digit - b'0'))?;
        }

        Some(Self {
            mantissa: if negative { -mantissa } else { mantissa },
            scale: u32::try_from(fraction.len()).ok()?,
        })
    }

    fn minus_integer(self, integer: i128) -> Option<Self> {
        let shifted = integer.checked_mul(10_i128.checked_pow(self.scale)?)?;
        Some(Self {
            mantissa: self.mantissa.checked_sub(shifted)?,
            scale: self.scale,
        })
    }

    fn round_half_up(self, scale: u32) -> String {
        let rounded = if self.scale <= scale {
            let factor = 10_i128.pow(scale - self.scale);
            self.mantissa * factor
        } else {
            let divisor = 10_i128.pow(self.scale - scale);
            let quotient = self.mantissa / divisor;
            let remainder = (self.mantissa % divisor).abs();
            if remainder * 2 >= divisor {
                quotient + self.mantissa.signum()
            } else {
                quotient
            }
        };

        let sign = if rounded < 0 { "-" } else { "" };
        let magnitude = rounded.unsigned_abs();
        if scale == 0 {
            return format!("{sign}{magnitude}");
        }

        let unit = 10_u128.pow(scale);
        format!(
            "{sign}{}.{:0width$}",
            magnitude / unit,
            magnitude % unit,
            width = scale as usize
        )
    }
}
