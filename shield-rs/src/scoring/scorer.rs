//! Fraud scoring engine
//!
//! Three independent rule-based scorers: free-text messages, phone numbers
//! and URLs. Each rule adds a fixed number of points; totals are clamped to
//! [`MAX_RISK_SCORE`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::RuleSet;
use super::types::*;

/// http(s) link anywhere in a message
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9$-_@.&+!*\\(),]|%[0-9a-fA-F]{2})+")
        .expect("Invalid URL regex")
});

/// Turkish mobile number anywhere in a message
static EMBEDDED_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+90|0)?5[0-9]{9}").expect("Invalid phone regex"));

/// Whole-string Turkish mobile number
static PHONE_FORMAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+90|0)?5[0-9]{9}$").expect("Invalid phone format regex"));

/// Dotted-quad IPv4 shape
static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("Invalid IPv4 regex")
});

const KEYWORD_POINTS: u32 = 15;
const LINK_POINTS: u32 = 25;
const EMBEDDED_PHONE_POINTS: u32 = 20;
const URGENCY_POINTS: u32 = 30;
const MONEY_POINTS: u32 = 25;

const INVALID_PHONE_POINTS: u32 = 50;
const PHONE_PREFIX_POINTS: u32 = 40;

const INSECURE_PROTOCOL_POINTS: u32 = 30;
const DOMAIN_POINTS: u32 = 60;
const IP_HOST_POINTS: u32 = 70;

/// At most this many matched keywords are named in the keyword reason
const KEYWORDS_IN_REASON: usize = 3;

/// Rule-based fraud scorer
#[derive(Debug, Clone)]
pub struct FraudScorer {
    rules: RuleSet,
}

impl FraudScorer {
    /// Create a scorer over the given rule set
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: rules.normalized(),
        }
    }

    /// Rule set in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Score a free-text message
    pub fn score_message(&self, message: &str) -> ScoreResult {
        let mut score = 0u32;
        let mut reasons = Vec::new();

        let message_lower = message.to_lowercase();

        let found_keywords: Vec<&str> = self
            .rules
            .fraud_keywords
            .iter()
            .map(String::as_str)
            .filter(|kw| message_lower.contains(kw))
            .collect();
        if !found_keywords.is_empty() {
            score += found_keywords.len() as u32 * KEYWORD_POINTS;
            let shown = &found_keywords[..found_keywords.len().min(KEYWORDS_IN_REASON)];
            reasons.push(format!("Şüpheli kelimeler: {}", shown.join(", ")));
        }

        if URL_REGEX.is_match(message) {
            score += LINK_POINTS;
            reasons.push("Mesajda link bulunuyor".to_string());
        }

        if EMBEDDED_PHONE_REGEX.is_match(message) {
            score += EMBEDDED_PHONE_POINTS;
            reasons.push("Mesajda telefon numarası var".to_string());
        }

        if contains_any(&message_lower, &self.rules.urgency_words) {
            score += URGENCY_POINTS;
            reasons.push("Aciliyet ifadeleri kullanılmış".to_string());
        }

        if contains_any(&message_lower, &self.rules.money_words) {
            score += MONEY_POINTS;
            reasons.push("Para/ödeme ile ilgili kelimeler".to_string());
        }

        ScoreResult::clamped(score, reasons)
    }

    /// Score a phone number
    pub fn score_phone(&self, phone: &str) -> ScoreResult {
        let mut score = 0u32;
        let mut reasons = Vec::new();

        let compact: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();
        if !PHONE_FORMAT_REGEX.is_match(&compact) {
            score += INVALID_PHONE_POINTS;
            reasons.push("Geçersiz telefon formatı".to_string());
        }

        // Prefixes are checked against the raw input, before stripping
        for prefix in &self.rules.suspicious_prefixes {
            if phone.starts_with(prefix.as_str()) {
                score += PHONE_PREFIX_POINTS;
                reasons.push(format!("Şüpheli numara prefix'i: {}", prefix));
            }
        }

        ScoreResult::clamped(score, reasons)
    }

    /// Score a URL
    pub fn score_url(&self, url: &str) -> ScoreResult {
        let mut score = 0u32;
        let mut reasons = Vec::new();

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            score += INSECURE_PROTOCOL_POINTS;
            reasons.push("Güvensiz protokol".to_string());
        }

        for domain in &self.rules.suspicious_domains {
            if url.contains(domain.as_str()) {
                score += DOMAIN_POINTS;
                reasons.push(format!("Şüpheli domain: {}", domain));
            }
        }

        if IPV4_REGEX.is_match(url) {
            score += IP_HOST_POINTS;
            reasons.push("IP adresi kullanılmış (domain yerine)".to_string());
        }

        ScoreResult::clamped(score, reasons)
    }
}

impl Default for FraudScorer {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

fn contains_any(haystack: &str, words: &[String]) -> bool {
    words.iter().any(|w| haystack.contains(w.as_str()))
}
