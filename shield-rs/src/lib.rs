//! shield-rs: Rule-based fraud risk scoring
//!
//! Scores short text messages, phone numbers and URLs against fixed
//! keyword and pattern heuristics and returns a fraud verdict.
//!
//! # Features
//!
//! - Message analysis: fraud keywords, links, embedded phone numbers,
//!   urgency and payment language
//! - Phone analysis: Turkish mobile format check and premium-rate prefixes
//! - URL analysis: protocol, suspicious domains and raw IPv4 hosts
//! - Per-type fraud thresholds (message 60, phone and URL 50)
//!
//! Scoring is pure and synchronous; the rule tables are read-only after
//! startup.
//!
//! # Example
//!
//! ```
//! use shield_rs::scoring::Analyzer;
//!
//! let analyzer = Analyzer::default();
//! let verdict = analyzer.analyze_url("https://bit.ly/suspicious");
//! assert!(verdict.is_fraud);
//! assert_eq!(verdict.risk_score, 60);
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:8000"
//!
//! [thresholds]
//! message = 60
//! phone = 50
//! url = 50
//!
//! [rules]
//! suspicious_domains = ["bit.ly", "tinyurl.com"]
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod scoring;

pub use config::ShieldConfig;
pub use error::{Result, ShieldError};
pub use scoring::{AnalysisType, AnalysisVerdict, Analyzer, ScoreResult};
