//! Property calculation modules.
//!
//! Each module covers one stage of the analysis: financing cost
//! ([`amortization`]), the derived cash-flow and return metrics
//! ([`metrics`]), the heuristic rent bracket ([`rent`]), the rule-based
//! recommendation ([`recommendation`]) and the text synopsis
//! ([`summary`]). All of them are pure functions over their inputs; the
//! [`analysis`](crate::analysis) module wires them together per property.

pub mod amortization;
pub mod common;
pub mod metrics;
pub mod recommendation;
pub mod rent;
pub mod summary;

pub use amortization::AmortizationError;
pub use metrics::{MetricsError, PropertyMetrics};
pub use recommendation::ClassifierInputs;
pub use rent::{RentEstimator, RentRange};
