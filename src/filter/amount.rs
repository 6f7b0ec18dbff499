//! Amount-range presets for filtering transactions by size.

use serde::{Deserialize, Serialize};

/// The amount-range presets a filter can select.
///
/// The preset boundaries deliberately tile the number line without overlap:
/// 500 belongs to [AmountRange::From500To1000] and 1000 belongs to it too,
/// while [AmountRange::From1000To5000] starts just above 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AmountRange {
    /// No amount constraint.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Amounts strictly below 500.
    #[serde(rename = "under500")]
    Under500,
    /// Amounts in `[500, 1000]`, both bounds inclusive.
    #[serde(rename = "500to1000")]
    From500To1000,
    /// Amounts in `(1000, 5000]`, lower bound exclusive.
    #[serde(rename = "1000to5000")]
    From1000To5000,
    /// Amounts strictly above 5000.
    #[serde(rename = "over5000")]
    Over5000,
    /// A caller-supplied range; missing bounds are unbounded.
    #[serde(rename = "custom")]
    Custom,
}

impl AmountRange {
    /// Whether `amount` satisfies the range.
    ///
    /// `custom_min` and `custom_max` only apply to [AmountRange::Custom];
    /// each absent bound is treated as unbounded rather than invalid.
    pub fn matches(self, amount: f64, custom_min: Option<f64>, custom_max: Option<f64>) -> bool {
        match self {
            AmountRange::All => true,
            AmountRange::Under500 => amount < 500.0,
            AmountRange::From500To1000 => (500.0..=1000.0).contains(&amount),
            AmountRange::From1000To5000 => amount > 1000.0 && amount <= 5000.0,
            AmountRange::Over5000 => amount > 5000.0,
            AmountRange::Custom => {
                let min = custom_min.unwrap_or(f64::NEG_INFINITY);
                let max = custom_max.unwrap_or(f64::INFINITY);

                min <= amount && amount <= max
            }
        }
    }
}
