//! Scoring types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest risk score any analysis can report
pub const MAX_RISK_SCORE: u8 = 100;

/// Raw output of a single scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Risk score, clamped to 0..=100
    pub risk_score: u8,
    /// Signals that contributed to the score, in evaluation order
    pub reasons: Vec<String>,
}

impl ScoreResult {
    /// Clamp an accumulated raw score into a result
    pub(crate) fn clamped(raw: u32, reasons: Vec<String>) -> Self {
        Self {
            risk_score: raw.min(MAX_RISK_SCORE as u32) as u8,
            reasons,
        }
    }
}

/// Kind of input an analysis was run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Message,
    Phone,
    Url,
}

impl AnalysisType {
    /// Score at or above which the input is reported as fraud
    pub fn default_threshold(self) -> u8 {
        match self {
            AnalysisType::Message => 60,
            AnalysisType::Phone | AnalysisType::Url => 50,
        }
    }

    /// Reason reported when nothing suspicious was found
    pub fn clean_reason(self) -> &'static str {
        match self {
            AnalysisType::Message => "Şüpheli içerik tespit edilmedi",
            AnalysisType::Phone => "Numara güvenli görünüyor",
            AnalysisType::Url => "URL güvenli görünüyor",
        }
    }

    /// Prefix used when an analysis of this type fails
    pub fn error_prefix(self) -> &'static str {
        match self {
            AnalysisType::Message => "Analiz hatası",
            AnalysisType::Phone => "Telefon analiz hatası",
            AnalysisType::Url => "URL analiz hatası",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisType::Message => "message",
            AnalysisType::Phone => "phone",
            AnalysisType::Url => "url",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final verdict returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisVerdict {
    /// Whether the score reached the threshold for this analysis type
    pub is_fraud: bool,
    /// Risk score (0-100)
    pub risk_score: u8,
    /// Human-readable reasons, never empty
    pub reasons: Vec<String>,
    /// Which analysis produced this verdict
    pub analysis_type: AnalysisType,
}

impl AnalysisVerdict {
    /// Apply a threshold to a score result
    pub fn from_score(result: ScoreResult, analysis_type: AnalysisType, threshold: u8) -> Self {
        let reasons = if result.reasons.is_empty() {
            vec![analysis_type.clean_reason().to_string()]
        } else {
            result.reasons
        };

        Self {
            is_fraud: result.risk_score >= threshold,
            risk_score: result.risk_score,
            reasons,
            analysis_type,
        }
    }
}
