//! Verdict composition
//!
//! Turns raw scorer output into [`AnalysisVerdict`]s by applying the
//! per-type fraud threshold, and blends a sender's phone score into the
//! message score.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::RuleSet;
use super::scorer::FraudScorer;
use super::types::*;

/// Fraud thresholds per analysis type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub message: u8,
    pub phone: u8,
    pub url: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            message: AnalysisType::Message.default_threshold(),
            phone: AnalysisType::Phone.default_threshold(),
            url: AnalysisType::Url.default_threshold(),
        }
    }
}

impl Thresholds {
    pub fn for_type(&self, analysis_type: AnalysisType) -> u8 {
        match analysis_type {
            AnalysisType::Message => self.message,
            AnalysisType::Phone => self.phone,
            AnalysisType::Url => self.url,
        }
    }
}

/// Runs scorers and produces verdicts
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    scorer: FraudScorer,
    thresholds: Thresholds,
}

impl Analyzer {
    pub fn new(rules: RuleSet, thresholds: Thresholds) -> Self {
        Self {
            scorer: FraudScorer::new(rules),
            thresholds,
        }
    }

    pub fn scorer(&self) -> &FraudScorer {
        &self.scorer
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Analyze a message, optionally together with the sender's number.
    ///
    /// Half of the sender's phone score (rounded down) is added to the
    /// message score and the phone reasons follow the message reasons.
    /// An empty sender phone is treated as absent.
    pub fn analyze_message(&self, message: &str, sender_phone: Option<&str>) -> AnalysisVerdict {
        let mut result = self.scorer.score_message(message);

        if let Some(phone) = sender_phone.filter(|p| !p.is_empty()) {
            let phone_result = self.scorer.score_phone(phone);
            let blended = result.risk_score as u32 + (phone_result.risk_score / 2) as u32;
            result.reasons.extend(phone_result.reasons);
            result = ScoreResult::clamped(blended, result.reasons);
        }

        self.verdict(result, AnalysisType::Message)
    }

    pub fn analyze_phone(&self, phone: &str) -> AnalysisVerdict {
        self.verdict(self.scorer.score_phone(phone), AnalysisType::Phone)
    }

    pub fn analyze_url(&self, url: &str) -> AnalysisVerdict {
        self.verdict(self.scorer.score_url(url), AnalysisType::Url)
    }

    fn verdict(&self, result: ScoreResult, analysis_type: AnalysisType) -> AnalysisVerdict {
        let threshold = self.thresholds.for_type(analysis_type);
        let verdict = AnalysisVerdict::from_score(result, analysis_type, threshold);
        debug!(
            analysis_type = %analysis_type,
            risk_score = verdict.risk_score,
            threshold,
            is_fraud = verdict.is_fraud,
            "Analysis complete"
        );
        verdict
    }
}
