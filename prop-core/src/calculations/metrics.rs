//! Cash flow, return on investment and flip profit for a single property.
//!
//! Everything here derives from the property record plus the monthly
//! mortgage payment computed by [`amortization`](super::amortization):
//!
//! | Metric | Definition |
//! |----------------------|------------------------------------------------------------|
//! | monthly cost | payment + tax/12 + insurance/12 + maintenance |
//! | net monthly rent | expected rent × (1 − vacancy rate) |
//! | monthly cash flow | net monthly rent − monthly cost |
//! | annual cash flow | monthly cash flow × 12 |
//! | future value | price × (1 + appreciation%/100)^hold |
//! | appreciation gain | future value − price |
//! | total invested | down payment + maintenance × 12 × hold |
//! | ROI % | (annual cash flow × hold + appreciation gain) / total invested × 100 |
//! | flip profit | target resale − price − rehab cost |
//!
//! No intermediate rounding: values are carried at full precision and
//! rounded once at the presentation boundary.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use prop_core::PropertyInput;
//! use prop_core::calculations::{amortization, metrics};
//! use prop_core::calculations::common::round_half_up;
//!
//! let property = PropertyInput {
//!     name: "Property A".to_string(),
//!     address: "123 Main St".to_string(),
//!     zip_code: "12345".to_string(),
//!     image_url: None,
//!     square_footage: dec!(1500),
//!     purchase_price: dec!(200000),
//!     down_payment: dec!(40000),
//!     interest_rate_percent: dec!(6.5),
//!     loan_term_years: 30,
//!     annual_property_tax: dec!(3600),
//!     annual_insurance: dec!(1200),
//!     monthly_maintenance: dec!(150),
//!     vacancy_rate: dec!(0.05),
//!     expected_monthly_rent: dec!(1800),
//!     annual_appreciation_percent: dec!(3.0),
//!     hold_period_years: dec!(5),
//!     rehab_cost: dec!(30000),
//!     target_resale_price: dec!(275000),
//! };
//!
//! let payment = amortization::monthly_payment(
//!     property.loan_principal(),
//!     property.interest_rate_percent,
//!     property.loan_term_years,
//! ).unwrap();
//! let metrics = metrics::compute(&property, payment).unwrap();
//!
//! assert_eq!(round_half_up(metrics.net_monthly_rent), dec!(1710.00));
//! assert_eq!(round_half_up(metrics.monthly_cost), dec!(1561.31));
//! assert_eq!(round_half_up(metrics.monthly_cash_flow), dec!(148.69));
//! assert_eq!(round_half_up(metrics.roi_percent), dec!(83.22));
//! assert_eq!(metrics.flip_profit, dec!(45000));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::PropertyInput;

/// Degenerate-arithmetic conditions: computations that would divide by
/// zero or leave the real numbers. These are surfaced as typed errors
/// rather than propagated as NaN or infinity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// Down payment and maintenance are both zero, so no cash is invested
    /// and ROI has a zero denominator.
    #[error("total invested is zero (no down payment, no maintenance); ROI is undefined")]
    ZeroTotalInvestment,

    /// Appreciation below -100% combined with a fractional hold period has
    /// no real-valued compound growth.
    #[error(
        "growth factor {growth_factor} is negative; future value is undefined \
         for fractional hold period {hold_period_years}"
    )]
    UndefinedFutureValue {
        growth_factor: Decimal,
        hold_period_years: Decimal,
    },
}

/// The derived metrics for one property, all unrounded.
///
/// Intermediates (`future_value`, `appreciation_gain`, `total_invested`)
/// are carried for transparency even though only the headline metrics end
/// up in the analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetrics {
    pub monthly_cost: Decimal,
    pub net_monthly_rent: Decimal,
    pub monthly_cash_flow: Decimal,
    pub annual_cash_flow: Decimal,
    pub future_value: Decimal,
    pub appreciation_gain: Decimal,
    pub total_invested: Decimal,
    pub roi_percent: Decimal,
    pub flip_profit: Decimal,
}

/// Derives all metrics from a property record and its monthly mortgage
/// payment.
///
/// # Errors
///
/// Returns [`MetricsError`] when the total invested amount is zero or the
/// compound-growth base is negative under a fractional hold period.
pub fn compute(
    input: &PropertyInput,
    mortgage_payment: Decimal,
) -> Result<PropertyMetrics, MetricsError> {
    let twelve = Decimal::from(12u32);

    let monthly_cost = mortgage_payment
        + input.annual_property_tax / twelve
        + input.annual_insurance / twelve
        + input.monthly_maintenance;
    let net_monthly_rent = input.expected_monthly_rent * (Decimal::ONE - input.vacancy_rate);
    let monthly_cash_flow = net_monthly_rent - monthly_cost;
    let annual_cash_flow = monthly_cash_flow * twelve;

    let growth_factor = Decimal::ONE + input.annual_appreciation_percent / Decimal::ONE_HUNDRED;
    let future_value = future_value(input.purchase_price, growth_factor, input.hold_period_years)?;
    let appreciation_gain = future_value - input.purchase_price;

    let total_invested =
        input.down_payment + input.monthly_maintenance * twelve * input.hold_period_years;
    if total_invested.is_zero() {
        return Err(MetricsError::ZeroTotalInvestment);
    }
    let roi_percent = (annual_cash_flow * input.hold_period_years + appreciation_gain)
        / total_invested
        * Decimal::ONE_HUNDRED;

    let flip_profit = input.target_resale_price - input.purchase_price - input.rehab_cost;

    Ok(PropertyMetrics {
        monthly_cost,
        net_monthly_rent,
        monthly_cash_flow,
        annual_cash_flow,
        future_value,
        appreciation_gain,
        total_invested,
        roi_percent,
        flip_profit,
    })
}

/// Compounds the purchase price over the hold period.
///
/// Integral hold periods use exact integer exponentiation, so a negative
/// growth factor (appreciation below -100%) is still well defined there.
/// Fractional hold periods require a positive base; a zero base collapses
/// to a zero future value.
fn future_value(
    purchase_price: Decimal,
    growth_factor: Decimal,
    hold_period_years: Decimal,
) -> Result<Decimal, MetricsError> {
    if hold_period_years.is_integer() {
        if let Some(exponent) = hold_period_years.to_i64() {
            return Ok(purchase_price * growth_factor.powi(exponent));
        }
    }
    if growth_factor.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if growth_factor < Decimal::ZERO {
        return Err(MetricsError::UndefinedFutureValue {
            growth_factor,
            hold_period_years,
        });
    }
    Ok(purchase_price * growth_factor.powd(hold_period_years))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::amortization;
    use crate::calculations::common::round_half_up;

    fn test_property() -> PropertyInput {
        PropertyInput {
            name: "Property A".to_string(),
            address: "123 Main St".to_string(),
            zip_code: "12345".to_string(),
            image_url: None,
            square_footage: dec!(1500),
            purchase_price: dec!(200000),
            down_payment: dec!(40000),
            interest_rate_percent: dec!(6.5),
            loan_term_years: 30,
            annual_property_tax: dec!(3600),
            annual_insurance: dec!(1200),
            monthly_maintenance: dec!(150),
            vacancy_rate: dec!(0.05),
            expected_monthly_rent: dec!(1800),
            annual_appreciation_percent: dec!(3.0),
            hold_period_years: dec!(5),
            rehab_cost: dec!(30000),
            target_resale_price: dec!(275000),
        }
    }

    fn payment_for(property: &PropertyInput) -> Decimal {
        amortization::monthly_payment(
            property.loan_principal(),
            property.interest_rate_percent,
            property.loan_term_years,
        )
        .unwrap()
    }

    #[test]
    fn net_rent_discounts_vacancy() {
        let property = test_property();

        let metrics = compute(&property, payment_for(&property)).unwrap();

        // 1800 × (1 − 0.05)
        assert_eq!(metrics.net_monthly_rent, dec!(1710.00));
    }

    #[test]
    fn monthly_cost_sums_all_carrying_costs() {
        let property = test_property();

        let metrics = compute(&property, payment_for(&property)).unwrap();

        // payment ≈ 1011.31, tax 300/mo, insurance 100/mo, maintenance 150
        assert_eq!(round_half_up(metrics.monthly_cost), dec!(1561.31));
    }

    #[test]
    fn cash_flow_is_net_rent_minus_cost() {
        let property = test_property();

        let metrics = compute(&property, payment_for(&property)).unwrap();

        assert_eq!(round_half_up(metrics.monthly_cash_flow), dec!(148.69));
        assert_eq!(round_half_up(metrics.annual_cash_flow), dec!(1784.29));
    }

    #[test]
    fn future_value_compounds_appreciation() {
        let property = test_property();

        let metrics = compute(&property, payment_for(&property)).unwrap();

        // 200000 × 1.03^5
        assert_eq!(round_half_up(metrics.future_value), dec!(231854.81));
        assert_eq!(round_half_up(metrics.appreciation_gain), dec!(31854.81));
    }

    #[test]
    fn roi_combines_cash_flow_and_appreciation() {
        let property = test_property();

        let metrics = compute(&property, payment_for(&property)).unwrap();

        // total invested = 40000 + 150 × 12 × 5 = 49000
        assert_eq!(metrics.total_invested, dec!(49000));
        assert_eq!(round_half_up(metrics.roi_percent), dec!(83.22));
    }

    #[test]
    fn flip_profit_ignores_financing() {
        let property = test_property();

        let metrics = compute(&property, payment_for(&property)).unwrap();

        // 275000 − 200000 − 30000
        assert_eq!(metrics.flip_profit, dec!(45000));
    }

    #[test]
    fn zero_invested_capital_is_an_explicit_error() {
        let property = PropertyInput {
            down_payment: dec!(0),
            monthly_maintenance: dec!(0),
            ..test_property()
        };

        let result = compute(&property, payment_for(&property));

        assert_eq!(result, Err(MetricsError::ZeroTotalInvestment));
    }

    #[test]
    fn fractional_hold_period_uses_real_exponentiation() {
        let property = PropertyInput {
            purchase_price: dec!(100000),
            down_payment: dec!(20000),
            annual_appreciation_percent: dec!(4),
            hold_period_years: dec!(2.5),
            ..test_property()
        };

        let metrics = compute(&property, payment_for(&property)).unwrap();

        // 100000 × 1.04^2.5 ≈ 110302.14; powd is approximate, so allow a
        // small tolerance instead of asserting exact digits.
        let expected = dec!(110302.14);
        assert!(
            (metrics.future_value - expected).abs() < dec!(0.05),
            "future value {} not within tolerance of {}",
            metrics.future_value,
            expected
        );
    }

    #[test]
    fn negative_growth_base_with_fractional_hold_is_an_error() {
        let property = PropertyInput {
            annual_appreciation_percent: dec!(-150),
            hold_period_years: dec!(1.5),
            ..test_property()
        };

        let result = compute(&property, payment_for(&property));

        assert_eq!(
            result,
            Err(MetricsError::UndefinedFutureValue {
                growth_factor: dec!(-0.5),
                hold_period_years: dec!(1.5),
            })
        );
    }

    #[test]
    fn negative_growth_base_with_integral_hold_is_defined() {
        let property = PropertyInput {
            annual_appreciation_percent: dec!(-150),
            hold_period_years: dec!(2),
            ..test_property()
        };

        let metrics = compute(&property, payment_for(&property)).unwrap();

        // (−0.5)^2 = 0.25
        assert_eq!(metrics.future_value, dec!(50000.00));
    }

    #[test]
    fn total_loss_appreciation_yields_zero_future_value() {
        let property = PropertyInput {
            annual_appreciation_percent: dec!(-100),
            hold_period_years: dec!(2.5),
            ..test_property()
        };

        let metrics = compute(&property, payment_for(&property)).unwrap();

        assert_eq!(metrics.future_value, dec!(0));
        assert_eq!(metrics.appreciation_gain, dec!(-200000));
    }

    #[test]
    fn full_vacancy_loses_all_rent() {
        let property = PropertyInput {
            vacancy_rate: dec!(1),
            ..test_property()
        };

        let metrics = compute(&property, payment_for(&property)).unwrap();

        assert_eq!(metrics.net_monthly_rent, dec!(0));
        assert!(metrics.monthly_cash_flow < Decimal::ZERO);
    }
}
