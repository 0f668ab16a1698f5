//! Shared helpers for the property calculations: currency rounding and
//! display formatting.
//!
//! Calculations carry full precision end to end; rounding happens once, at
//! the presentation boundary, through the helpers here.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoint away from zero), the standard convention for
/// currency amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prop_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(148.6912)), dec!(148.69));
/// assert_eq!(round_half_up(dec!(148.695)), dec!(148.70));
/// assert_eq!(round_half_up(dec!(-148.695)), dec!(-148.70)); // away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a value with exactly two decimal places, for the summary
/// template and CLI display ("1784.29", "100.00", "-42.50").
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prop_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(1784.2936)), "1784.29");
/// assert_eq!(format_amount(dec!(100)), "100.00");
/// assert_eq!(format_amount(dec!(-42.5)), "-42.50");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}
