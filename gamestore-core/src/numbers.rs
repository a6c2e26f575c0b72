//! Numeric conversion helpers centralizing money and percentage arithmetic.

use num_traits::cast::cast;

/// Multiply a unit price by a quantity, saturating at the i64 bounds.
#[must_use]
pub fn line_total(price_minor: i64, quantity: u32) -> i64 {
    price_minor.saturating_mul(i64::from(quantity))
}

/// Percentage saved when paying `price_minor` instead of `original_minor`, rounded down.
///
/// Returns `None` when there is no saving or the inputs are not positive.
#[must_use]
pub fn pct_off(original_minor: i64, price_minor: i64) -> Option<u8> {
    if original_minor <= 0 || price_minor <= 0 || price_minor >= original_minor {
        return None;
    }
    let saved = i64_to_f64(original_minor - price_minor);
    let pct = (saved / i64_to_f64(original_minor) * 100.0).floor();
    cast::<f64, u8>(pct.clamp(0.0, 100.0)).filter(|pct| *pct > 0)
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}

/// Clamp a requested quantity into the valid cart range (at least one).
#[must_use]
pub fn clamp_quantity(requested: i64) -> u32 {
    cast::<i64, u32>(requested.max(1)).unwrap_or(u32::MAX)
}
