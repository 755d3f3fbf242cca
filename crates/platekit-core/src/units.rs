//! Display formatting for lengths, weights and prices
//!
//! Linear dimensions are shown as whole millimetres; weights and prices
//! with a fixed number of decimals.

/// Default currency symbol
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Default number of decimals for weights and prices
pub const DEFAULT_DECIMALS: usize = 2;

/// Round a length to whole millimetres for display.
///
/// Halves round away from zero.
pub fn round_mm(value: f64) -> i64 {
    value.round() as i64
}

/// Format a length as whole millimetres, e.g. `6366 mm`
pub fn format_mm(value: f64) -> String {
    format!("{} mm", round_mm(value))
}

/// Format a weight in kilograms, e.g. `10205.00 kg`
pub fn format_weight(kg: f64, decimals: usize) -> String {
    format!("{:.*} kg", decimals, kg)
}

/// Format a price with a currency symbol, e.g. `₹612300.00`
pub fn format_currency(symbol: &str, amount: f64, decimals: usize) -> String {
    format!("{}{:.*}", symbol, decimals, amount)
}
