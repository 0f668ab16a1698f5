use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InvestmentType;

/// The derived metrics for one property, recomputed fresh from its
/// [`PropertyInput`](super::PropertyInput) on every analysis run.
///
/// Monetary fields are rounded to two decimal places when the result is
/// assembled; the underlying computation is carried out unrounded. Field
/// declaration order is the column order of the tabular export, so keep the
/// two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    // Identity, copied from the input
    pub name: String,
    pub address: String,
    pub zip_code: String,
    pub image_url: Option<String>,

    // Derived metrics
    pub monthly_cost: Decimal,
    pub net_monthly_rent: Decimal,
    pub monthly_cash_flow: Decimal,
    pub annual_cash_flow: Decimal,
    pub roi_percent: Decimal,
    pub flip_profit: Decimal,
    pub rent_range_low: Decimal,
    pub rent_range_high: Decimal,

    // Recommendation
    pub investment_type: InvestmentType,
    pub summary: String,
}
