//! Rule-based investment recommendation.
//!
//! The recommendation is a priority-ordered decision table over the ROI,
//! the monthly cash flow and the flip profit. Rules are evaluated in
//! declaration order and the first match wins; a property matching none of
//! them falls through to "Depends — Evaluate Further". The order is part
//! of the contract: a high-ROI cash-flowing property is a rental even when
//! it would also flip profitably.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use prop_core::InvestmentType;
//! use prop_core::calculations::recommendation::{ClassifierInputs, classify};
//!
//! let label = classify(&ClassifierInputs {
//!     roi_percent: dec!(12),
//!     monthly_cash_flow: dec!(150),
//!     flip_profit: dec!(45000),
//! });
//! assert_eq!(label, InvestmentType::Rental);
//!
//! // ROI of exactly 10 with zero cash flow falls past the rental rule.
//! let label = classify(&ClassifierInputs {
//!     roi_percent: dec!(10),
//!     monthly_cash_flow: dec!(0),
//!     flip_profit: dec!(0),
//! });
//! assert_eq!(label, InvestmentType::EvaluateFurther);
//! ```

use rust_decimal::Decimal;

use crate::models::InvestmentType;

/// The three metrics the decision table reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierInputs {
    pub roi_percent: Decimal,
    pub monthly_cash_flow: Decimal,
    pub flip_profit: Decimal,
}

type Predicate = fn(&ClassifierInputs) -> bool;

/// The ordered rules; first match wins.
const DECISION_TABLE: [(Predicate, InvestmentType); 3] = [
    (strong_rental, InvestmentType::Rental),
    (profitable_flip, InvestmentType::Flip),
    (bad_buy, InvestmentType::BadBuy),
];

/// ROI of at least 10% and positive cash flow.
fn strong_rental(inputs: &ClassifierInputs) -> bool {
    inputs.roi_percent >= Decimal::TEN && inputs.monthly_cash_flow > Decimal::ZERO
}

/// Positive flip profit while the ROI stays under 10%.
fn profitable_flip(inputs: &ClassifierInputs) -> bool {
    inputs.flip_profit > Decimal::ZERO && inputs.roi_percent < Decimal::TEN
}

/// ROI strictly under 5% and negative cash flow.
fn bad_buy(inputs: &ClassifierInputs) -> bool {
    inputs.roi_percent < Decimal::from(5u32) && inputs.monthly_cash_flow < Decimal::ZERO
}

/// Maps the metrics to an investment recommendation via the decision
/// table, falling through to [`InvestmentType::EvaluateFurther`].
pub fn classify(inputs: &ClassifierInputs) -> InvestmentType {
    DECISION_TABLE
        .iter()
        .find(|(applies, _)| applies(inputs))
        .map(|&(_, label)| label)
        .unwrap_or(InvestmentType::EvaluateFurther)
}
