use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Violations of the structural range constraints on [`PropertyInput`].
///
/// Each variant carries the offending value so callers can show it back to
/// the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyInputError {
    #[error("square footage must be positive, got {0}")]
    NonPositiveSquareFootage(Decimal),

    #[error("down payment must not be negative, got {0}")]
    NegativeDownPayment(Decimal),

    #[error("down payment {down_payment} exceeds purchase price {purchase_price}")]
    DownPaymentExceedsPrice {
        down_payment: Decimal,
        purchase_price: Decimal,
    },

    #[error("interest rate must not be negative, got {0}%")]
    NegativeInterestRate(Decimal),

    #[error("loan term must be at least one year")]
    ZeroLoanTerm,

    #[error("annual property tax must not be negative, got {0}")]
    NegativeAnnualPropertyTax(Decimal),

    #[error("annual insurance must not be negative, got {0}")]
    NegativeAnnualInsurance(Decimal),

    #[error("monthly maintenance must not be negative, got {0}")]
    NegativeMonthlyMaintenance(Decimal),

    #[error("vacancy rate must be a fraction between 0 and 1, got {0}")]
    VacancyRateOutOfRange(Decimal),

    #[error("expected monthly rent must not be negative, got {0}")]
    NegativeExpectedRent(Decimal),

    #[error("hold period must be positive, got {0} years")]
    NonPositiveHoldPeriod(Decimal),

    #[error("rehab cost must not be negative, got {0}")]
    NegativeRehabCost(Decimal),

    #[error("target resale price must not be negative, got {0}")]
    NegativeTargetResalePrice(Decimal),
}

/// A single property as submitted by the user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInput {
    // Identity
    pub name: String,
    pub address: String,
    pub zip_code: String,
    pub image_url: Option<String>,

    // Purchase and financing
    pub square_footage: Decimal,
    pub purchase_price: Decimal,
    pub down_payment: Decimal,
    pub interest_rate_percent: Decimal,
    pub loan_term_years: u32,

    // Carrying costs
    pub annual_property_tax: Decimal,
    pub annual_insurance: Decimal,
    pub monthly_maintenance: Decimal,

    // Rental assumptions
    pub vacancy_rate: Decimal,
    pub expected_monthly_rent: Decimal,

    // Hold and exit assumptions
    pub annual_appreciation_percent: Decimal,
    pub hold_period_years: Decimal,
    pub rehab_cost: Decimal,
    pub target_resale_price: Decimal,
}

impl PropertyInput {
    /// The amount financed: purchase price minus down payment.
    ///
    /// Non-negative for any input that passes [`validate`](Self::validate).
    pub fn loan_principal(&self) -> Decimal {
        self.purchase_price - self.down_payment
    }

    /// Checks the range constraints on the raw fields, returning the first
    /// violation found.
    ///
    /// This is structural validation only; degenerate arithmetic (such as a
    /// zero total investment) is detected during analysis, not here.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyInputError`] if:
    /// - `square_footage` is zero or negative
    /// - `down_payment` is negative or exceeds `purchase_price`
    /// - `interest_rate_percent` is negative
    /// - `loan_term_years` is zero
    /// - any of the tax, insurance, maintenance, rent, rehab or resale
    ///   amounts is negative
    /// - `vacancy_rate` is outside `[0, 1]`
    /// - `hold_period_years` is zero or negative
    pub fn validate(&self) -> Result<(), PropertyInputError> {
        if self.square_footage <= Decimal::ZERO {
            return Err(PropertyInputError::NonPositiveSquareFootage(
                self.square_footage,
            ));
        }
        if self.down_payment < Decimal::ZERO {
            return Err(PropertyInputError::NegativeDownPayment(self.down_payment));
        }
        if self.down_payment > self.purchase_price {
            return Err(PropertyInputError::DownPaymentExceedsPrice {
                down_payment: self.down_payment,
                purchase_price: self.purchase_price,
            });
        }
        if self.interest_rate_percent < Decimal::ZERO {
            return Err(PropertyInputError::NegativeInterestRate(
                self.interest_rate_percent,
            ));
        }
        if self.loan_term_years == 0 {
            return Err(PropertyInputError::ZeroLoanTerm);
        }
        if self.annual_property_tax < Decimal::ZERO {
            return Err(PropertyInputError::NegativeAnnualPropertyTax(
                self.annual_property_tax,
            ));
        }
        if self.annual_insurance < Decimal::ZERO {
            return Err(PropertyInputError::NegativeAnnualInsurance(
                self.annual_insurance,
            ));
        }
        if self.monthly_maintenance < Decimal::ZERO {
            return Err(PropertyInputError::NegativeMonthlyMaintenance(
                self.monthly_maintenance,
            ));
        }
        if self.vacancy_rate < Decimal::ZERO || self.vacancy_rate > Decimal::ONE {
            return Err(PropertyInputError::VacancyRateOutOfRange(self.vacancy_rate));
        }
        if self.expected_monthly_rent < Decimal::ZERO {
            return Err(PropertyInputError::NegativeExpectedRent(
                self.expected_monthly_rent,
            ));
        }
        if self.hold_period_years <= Decimal::ZERO {
            return Err(PropertyInputError::NonPositiveHoldPeriod(
                self.hold_period_years,
            ));
        }
        if self.rehab_cost < Decimal::ZERO {
            return Err(PropertyInputError::NegativeRehabCost(self.rehab_cost));
        }
        if self.target_resale_price < Decimal::ZERO {
            return Err(PropertyInputError::NegativeTargetResalePrice(
                self.target_resale_price,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn valid_property() -> PropertyInput {
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

    #[test]
    fn validate_accepts_valid_property() {
        assert_eq!(valid_property().validate(), Ok(()));
    }

    #[test]
    fn loan_principal_is_price_minus_down() {
        assert_eq!(valid_property().loan_principal(), dec!(160000));
    }

    #[test]
    fn validate_rejects_zero_square_footage() {
        let property = PropertyInput {
            square_footage: dec!(0),
            ..valid_property()
        };

        assert_eq!(
            property.validate(),
            Err(PropertyInputError::NonPositiveSquareFootage(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_negative_down_payment() {
        let property = PropertyInput {
            down_payment: dec!(-1),
            ..valid_property()
        };

        assert_eq!(
            property.validate(),
            Err(PropertyInputError::NegativeDownPayment(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_down_payment_above_price() {
        let property = PropertyInput {
            down_payment: dec!(250000),
            ..valid_property()
        };

        assert_eq!(
            property.validate(),
            Err(PropertyInputError::DownPaymentExceedsPrice {
                down_payment: dec!(250000),
                purchase_price: dec!(200000),
            })
        );
    }

    #[test]
    fn validate_accepts_down_payment_equal_to_price() {
        let property = PropertyInput {
            down_payment: dec!(200000),
            ..valid_property()
        };

        assert_eq!(property.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_interest_rate() {
        let property = PropertyInput {
            interest_rate_percent: dec!(-0.5),
            ..valid_property()
        };

        assert_eq!(
            property.validate(),
            Err(PropertyInputError::NegativeInterestRate(dec!(-0.5)))
        );
    }

    #[test]
    fn validate_accepts_zero_interest_rate() {
        let property = PropertyInput {
            interest_rate_percent: dec!(0),
            ..valid_property()
        };

        assert_eq!(property.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_loan_term() {
        let property = PropertyInput {
            loan_term_years: 0,
            ..valid_property()
        };

        assert_eq!(property.validate(), Err(PropertyInputError::ZeroLoanTerm));
    }

    #[test]
    fn validate_rejects_vacancy_rate_above_one() {
        let property = PropertyInput {
            vacancy_rate: dec!(1.5),
            ..valid_property()
        };

        assert_eq!(
            property.validate(),
            Err(PropertyInputError::VacancyRateOutOfRange(dec!(1.5)))
        );
    }

    #[test]
    fn validate_accepts_full_vacancy() {
        let property = PropertyInput {
            vacancy_rate: dec!(1),
            ..valid_property()
        };

        assert_eq!(property.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_hold_period() {
        let property = PropertyInput {
            hold_period_years: dec!(0),
            ..valid_property()
        };

        assert_eq!(
            property.validate(),
            Err(PropertyInputError::NonPositiveHoldPeriod(dec!(0)))
        );
    }

    #[test]
    fn validate_accepts_fractional_hold_period() {
        let property = PropertyInput {
            hold_period_years: dec!(2.5),
            ..valid_property()
        };

        assert_eq!(property.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_rehab_cost() {
        let property = PropertyInput {
            rehab_cost: dec!(-100),
            ..valid_property()
        };

        assert_eq!(
            property.validate(),
            Err(PropertyInputError::NegativeRehabCost(dec!(-100)))
        );
    }
}
