mod analysis_result;
mod investment_type;
mod portfolio;
mod property;

pub use analysis_result::AnalysisResult;
pub use investment_type::InvestmentType;
pub use portfolio::Portfolio;
pub use property::{PropertyInput, PropertyInputError};
