use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of investment recommendations a property can receive.
///
/// The serialized form is the user-facing label, so the labels survive a
/// trip through the tabular export unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentType {
    #[serde(rename = "Best as a Rental")]
    Rental,
    #[serde(rename = "Good for Flipping")]
    Flip,
    #[serde(rename = "Bad Buy")]
    BadBuy,
    #[serde(rename = "Depends — Evaluate Further")]
    EvaluateFurther,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rental => "Best as a Rental",
            Self::Flip => "Good for Flipping",
            Self::BadBuy => "Bad Buy",
            Self::EvaluateFurther => "Depends — Evaluate Further",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Best as a Rental" => Some(Self::Rental),
            "Good for Flipping" => Some(Self::Flip),
            "Bad Buy" => Some(Self::BadBuy),
            "Depends — Evaluate Further" => Some(Self::EvaluateFurther),
            _ => None,
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
