//! Fraud scoring module
//!
//! Rule-based risk scoring for messages, phone numbers and URLs, plus the
//! verdict layer that applies fraud thresholds.

pub mod analyzer;
pub mod rules;
pub mod scorer;
pub mod types;

pub use analyzer::{Analyzer, Thresholds};
pub use rules::RuleSet;
pub use scorer::FraudScorer;
pub use types::*;
