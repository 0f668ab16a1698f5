//! Natural-language synopsis of a property's metrics.
//!
//! A single fixed template with no branching; the wording is an
//! external-facing text contract, so reword with care.

use rust_decimal::Decimal;

use super::common::format_amount;

/// Renders the one-sentence synopsis for a property.
///
/// Amounts are formatted with two decimal places; the inputs themselves
/// may carry full precision.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use prop_core::calculations::summary;
///
/// let text = summary::render("12 Oak St", dec!(2400), dec!(12.5), dec!(1500));
/// assert_eq!(
///     text,
///     "12 Oak St is projected to generate an annual cash flow of $2400.00 \
///      with an ROI of 12.50%. The net rent collected is $1500.00 per month, \
///      making it a compelling investment."
/// );
/// ```
pub fn render(
    name: &str,
    annual_cash_flow: Decimal,
    roi_percent: Decimal,
    net_monthly_rent: Decimal,
) -> String {
    format!(
        "{name} is projected to generate an annual cash flow of ${annual} \
         with an ROI of {roi}%. The net rent collected is ${rent} per month, \
         making it a compelling investment.",
        annual = format_amount(annual_cash_flow),
        roi = format_amount(roi_percent),
        rent = format_amount(net_monthly_rent),
    )
}
