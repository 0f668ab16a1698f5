//! Fixed-rate mortgage payment calculation.
//!
//! Computes the level monthly payment of an amortizing loan from the
//! principal, the annual interest rate and the term:
//!
//! ```text
//! payment = P × r × (1+r)^n / ((1+r)^n − 1)
//! ```
//!
//! where `r` is the monthly rate (`annual_rate_percent / 12 / 100`) and `n`
//! the number of monthly payments (`term_years × 12`). At a zero interest
//! rate the denominator vanishes, so that case repays straight-line
//! (`P / n`) instead of evaluating the formula.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use prop_core::calculations::amortization::monthly_payment;
//! use prop_core::calculations::common::round_half_up;
//!
//! let payment = monthly_payment(dec!(160000), dec!(6.5), 30).unwrap();
//! assert_eq!(round_half_up(payment), dec!(1011.31));
//!
//! // Zero-rate loans repay the principal in equal slices.
//! let payment = monthly_payment(dec!(120000), dec!(0), 30).unwrap();
//! assert_eq!(payment, dec!(120000) / dec!(360));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when computing a mortgage payment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmortizationError {
    /// The loan principal must not be negative.
    #[error("loan principal must not be negative, got {0}")]
    NegativePrincipal(Decimal),

    /// The annual interest rate must not be negative.
    #[error("annual interest rate must not be negative, got {0}%")]
    NegativeRate(Decimal),

    /// The loan term must cover at least one year.
    #[error("loan term must be at least one year")]
    ZeroTerm,
}

/// Computes the fixed monthly payment for an amortizing loan.
///
/// The returned value carries full precision; round it with
/// [`round_half_up`](super::common::round_half_up) for display. A zero
/// principal (an all-cash purchase) yields a zero payment.
///
/// # Errors
///
/// Returns [`AmortizationError`] if the principal or rate is negative, or
/// the term is zero.
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_years: u32,
) -> Result<Decimal, AmortizationError> {
    if principal < Decimal::ZERO {
        return Err(AmortizationError::NegativePrincipal(principal));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(AmortizationError::NegativeRate(annual_rate_percent));
    }
    if term_years == 0 {
        return Err(AmortizationError::ZeroTerm);
    }

    if principal.is_zero() {
        warn!(
            %annual_rate_percent,
            term_years,
            "zero loan principal; nothing to finance"
        );
        return Ok(Decimal::ZERO);
    }

    let months = Decimal::from(u64::from(term_years) * 12);
    let monthly_rate = annual_rate_percent / Decimal::from(12u32) / Decimal::ONE_HUNDRED;

    // r = 0 makes the amortizing denominator vanish; repay straight-line.
    if monthly_rate.is_zero() {
        return Ok(principal / months);
    }

    let growth = (Decimal::ONE + monthly_rate).powi(i64::from(term_years) * 12);
    Ok(principal * monthly_rate * growth / (growth - Decimal::ONE))
}
