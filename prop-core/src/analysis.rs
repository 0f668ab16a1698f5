//! Per-property analysis orchestration.
//!
//! [`Analyzer`] runs the calculation stages in sequence for each property:
//! validate the input, compute the mortgage payment, derive the metrics,
//! estimate the rent bracket, classify, and render the synopsis. Every
//! property is analyzed independently; a batch maps each input to either an
//! [`AnalysisResult`] or an [`AnalysisError`] in the same position, so one
//! degenerate property never poisons its neighbours.
//!
//! Analysis is a pure function of the input record: no hidden state, no
//! ordering dependency between properties, identical input gives identical
//! output. There is nothing to retry.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use prop_core::{Analyzer, InvestmentType, PropertyInput};
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
//! let result = Analyzer::new().analyze(&property).unwrap();
//!
//! assert_eq!(result.monthly_cash_flow, dec!(148.69));
//! assert_eq!(result.roi_percent, dec!(83.22));
//! assert_eq!(result.investment_type, InvestmentType::Rental);
//! ```

use thiserror::Error;

use crate::calculations::amortization::{self, AmortizationError};
use crate::calculations::common::round_half_up;
use crate::calculations::metrics::{self, MetricsError};
use crate::calculations::recommendation::{self, ClassifierInputs};
use crate::calculations::rent::RentEstimator;
use crate::calculations::summary;
use crate::models::{AnalysisResult, Portfolio, PropertyInput, PropertyInputError};

/// Why a single property could not be analyzed.
///
/// Failures come in two families: input-shaped ones, where a structural
/// precondition on the submitted record was violated
/// ([`InvalidInput`](Self::InvalidInput), [`Amortization`](Self::Amortization)),
/// and degenerate arithmetic, where the computation itself would divide by
/// zero or leave the real numbers ([`Degenerate`](Self::Degenerate)).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid property input: {0}")]
    InvalidInput(#[from] PropertyInputError),

    #[error("invalid financing input: {0}")]
    Amortization(#[from] AmortizationError),

    #[error("degenerate arithmetic: {0}")]
    Degenerate(#[from] MetricsError),
}

impl AnalysisError {
    /// True when a structural precondition on the input was violated.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Amortization(_))
    }

    /// True when the computation would have divided by zero or produced a
    /// non-finite value.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate(_))
    }
}

/// Runs the full analysis pipeline for property records.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    rent_estimator: RentEstimator,
}

impl Analyzer {
    /// An analyzer with the default rent-rate model.
    pub fn new() -> Self {
        Self::default()
    }

    /// An analyzer with a custom rent estimator.
    pub fn with_rent_estimator(rent_estimator: RentEstimator) -> Self {
        Self { rent_estimator }
    }

    /// Analyzes a single property.
    ///
    /// Monetary outputs on the returned [`AnalysisResult`] are rounded to
    /// two decimal places; the computation itself runs at full precision.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] if the input violates its range
    /// constraints or the computation is degenerate (zero total
    /// investment, negative growth base under a fractional hold period).
    pub fn analyze(&self, input: &PropertyInput) -> Result<AnalysisResult, AnalysisError> {
        input.validate()?;

        let mortgage_payment = amortization::monthly_payment(
            input.loan_principal(),
            input.interest_rate_percent,
            input.loan_term_years,
        )?;
        let metrics = metrics::compute(input, mortgage_payment)?;
        let rent_range = self
            .rent_estimator
            .estimate(input.square_footage, &input.zip_code);
        let investment_type = recommendation::classify(&ClassifierInputs {
            roi_percent: metrics.roi_percent,
            monthly_cash_flow: metrics.monthly_cash_flow,
            flip_profit: metrics.flip_profit,
        });
        let summary = summary::render(
            &input.name,
            metrics.annual_cash_flow,
            metrics.roi_percent,
            metrics.net_monthly_rent,
        );

        Ok(AnalysisResult {
            name: input.name.clone(),
            address: input.address.clone(),
            zip_code: input.zip_code.clone(),
            image_url: input.image_url.clone(),
            monthly_cost: round_half_up(metrics.monthly_cost),
            net_monthly_rent: round_half_up(metrics.net_monthly_rent),
            monthly_cash_flow: round_half_up(metrics.monthly_cash_flow),
            annual_cash_flow: round_half_up(metrics.annual_cash_flow),
            roi_percent: round_half_up(metrics.roi_percent),
            flip_profit: round_half_up(metrics.flip_profit),
            rent_range_low: round_half_up(rent_range.low),
            rent_range_high: round_half_up(rent_range.high),
            investment_type,
            summary,
        })
    }

    /// Analyzes every property in the slice, independently.
    ///
    /// The output has the same length and order as the input; each element
    /// is the result or error for the property at that position. A failure
    /// never aborts the batch.
    pub fn analyze_all(
        &self,
        properties: &[PropertyInput],
    ) -> Vec<Result<AnalysisResult, AnalysisError>> {
        properties.iter().map(|p| self.analyze(p)).collect()
    }

    /// Convenience wrapper over [`analyze_all`](Self::analyze_all) for a
    /// session's [`Portfolio`].
    pub fn analyze_portfolio(
        &self,
        portfolio: &Portfolio,
    ) -> Vec<Result<AnalysisResult, AnalysisError>> {
        self.analyze_all(portfolio.properties())
    }
}
