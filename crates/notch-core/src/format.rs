//! Numeric-to-text formatting for the value label
//!
//! A fixed number of decimals with an explicit rounding mode, so the label
//! text does not depend on platform `printf` behavior.

use serde::{Deserialize, Serialize};

/// How a value is rounded to the displayed number of decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 2.5 → 3, -2.5 → -3
    #[default]
    HalfAwayFromZero,
    /// 2.5 → 2, 3.5 → 4
    HalfToEven,
    /// Truncate
    TowardZero,
    Floor,
    Ceil,
}

impl RoundingMode {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfAwayFromZero => value.round(),
            RoundingMode::HalfToEven => value.round_ties_even(),
            RoundingMode::TowardZero => value.trunc(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Ceil => value.ceil(),
        }
    }
}

/// Value label format
///
/// The default shows the value rounded to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueFormat {
    /// Digits after the decimal point
    pub decimals: u8,
    pub rounding: RoundingMode,
    /// Text placed before the number
    pub prefix: String,
    /// Text placed after the number (e.g. a unit)
    pub suffix: String,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        let decimals = usize::from(self.decimals.min(15));
        let scale = 10f64.powi(decimals as i32);
        let mut rounded = self.rounding.apply(value * scale) / scale;
        if !rounded.is_finite() {
            rounded = value;
        }
        // avoid printing "-0"
        if rounded == 0.0 {
            rounded = 0.0;
        }
        format!("{}{:.*}{}", self.prefix, decimals, rounded, self.suffix)
    }
}
