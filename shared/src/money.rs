//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then
//! converted back to `f64` for storage and serialization. The platform
//! bills in a 3-decimal currency, so every stored amount is rounded
//! half-up at scale 3.

use rust_decimal::prelude::*;

/// Rounding scale for monetary values (3 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 3;

/// Tolerance for monetary comparisons (0.001)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Maximum allowed unit price per line
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Convert an f64 to Decimal for calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal back to f64, rounded to the currency scale
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Round an f64 amount to the currency scale
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Line total for a unit price and quantity, at currency scale
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Compare two amounts within the currency tolerance
pub fn amounts_equal(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() <= MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_three_decimals() {
        assert_eq!(round_money(1.2345), 1.235);
        assert_eq!(round_money(1.2344), 1.234);
        assert_eq!(round_money(10.0), 10.0);
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(0.0005), 0.001);
        assert_eq!(round_money(2.9995), 3.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(2.5, 3), 7.5);
        assert_eq!(line_total(1.111, 3), 3.333);
    }

    #[test]
    fn test_amounts_equal_within_tolerance() {
        assert!(amounts_equal(10.0, 10.0005));
        assert!(!amounts_equal(10.0, 10.002));
    }
}
