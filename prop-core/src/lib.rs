pub mod analysis;
pub mod calculations;
pub mod models;

pub use analysis::{AnalysisError, Analyzer};
pub use models::*;
