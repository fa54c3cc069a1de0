use serde::{Deserialize, Serialize};

/// Formatting options for amounts shown in the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    /// Fraction digits used for currency in payloads and on screen
    pub currency_decimal_places: u32,
    /// Fraction digits used for percentages on screen
    pub percent_decimal_places: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_decimal_places: 2,
            percent_decimal_places: 2,
        }
    }
}
