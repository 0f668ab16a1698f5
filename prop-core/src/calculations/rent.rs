//! Heuristic rent range estimation.
//!
//! The achievable monthly rent is bracketed from floor area alone, using a
//! low and a high dollars-per-square-foot rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use prop_core::calculations::rent::RentEstimator;
//!
//! let range = RentEstimator::default().estimate(dec!(1500), "12345");
//! assert_eq!(range.low, dec!(1650.00));
//! assert_eq!(range.high, dec!(1950.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A low/high bracket of achievable monthly rent, in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRange {
    pub low: Decimal,
    pub high: Decimal,
}

/// Estimates achievable rent from floor area.
#[derive(Debug, Clone)]
pub struct RentEstimator {
    low_rate: Decimal,
    high_rate: Decimal,
}

impl Default for RentEstimator {
    /// The default rate model: $1.10 to $1.30 per square foot per month.
    fn default() -> Self {
        Self {
            low_rate: Decimal::new(110, 2),
            high_rate: Decimal::new(130, 2),
        }
    }
}

impl RentEstimator {
    /// Creates an estimator with custom per-square-foot monthly rates.
    pub fn new(low_rate: Decimal, high_rate: Decimal) -> Self {
        Self {
            low_rate,
            high_rate,
        }
    }

    /// Estimates the monthly rent range for the given floor area.
    ///
    /// The ZIP code is accepted so a location-sensitive rate model can slot
    /// in behind the same signature, but the current model is flat: the
    /// parameter does not affect the result.
    pub fn estimate(&self, square_footage: Decimal, _zip_code: &str) -> RentRange {
        RentRange {
            low: square_footage * self.low_rate,
            high: square_footage * self.high_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_rates_bracket_the_rent() {
        let range = RentEstimator::default().estimate(dec!(1500), "12345");

        assert_eq!(range.low, dec!(1650.00));
        assert_eq!(range.high, dec!(1950.00));
    }

    #[test]
    fn zip_code_does_not_affect_the_estimate() {
        let estimator = RentEstimator::default();

        let downtown = estimator.estimate(dec!(1200), "10001");
        let rural = estimator.estimate(dec!(1200), "59701");

        assert_eq!(downtown, rural);
    }

    #[test]
    fn custom_rates_are_applied() {
        let estimator = RentEstimator::new(dec!(2.00), dec!(2.50));

        let range = estimator.estimate(dec!(1000), "12345");

        assert_eq!(range.low, dec!(2000.00));
        assert_eq!(range.high, dec!(2500.00));
    }

    #[test]
    fn range_scales_linearly_with_footage() {
        let estimator = RentEstimator::default();

        let small = estimator.estimate(dec!(500), "12345");
        let large = estimator.estimate(dec!(1000), "12345");

        assert_eq!(large.low, small.low * dec!(2));
        assert_eq!(large.high, small.high * dec!(2));
    }
}
