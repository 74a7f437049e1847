//! Built-in rule tables
//!
//! The lists are plain configuration data. They are loaded once at startup
//! (optionally overridden from the config file) and never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize};

/// Words and phrases commonly found in Turkish fraud messages
pub const FRAUD_KEYWORDS: &[&str] = &[
    "acil",
    "hemen",
    "son şans",
    "kazandınız",
    "ödül",
    "tebrikler",
    "ücretsiz",
    "bedava",
    "promosyon",
    "kampanya",
    "bonus",
    "kredi kartı",
    "banka",
    "hesap",
    "şifre",
    "pin",
    "cvv",
    "tıkla",
    "link",
    "site",
    "gir",
    "onayla",
    "doğrula",
    "para",
    "ödeme",
    "transfer",
    "gönder",
    "yatır",
];

/// Pressure words
pub const URGENCY_WORDS: &[&str] = &["acil", "hemen", "şimdi", "derhal", "son", "kaçırma"];

/// Payment-related words
pub const MONEY_WORDS: &[&str] = &["para", "tl", "lira", "ödeme", "transfer", "kredi"];

/// Premium-rate and call-center prefixes
pub const SUSPICIOUS_PREFIXES: &[&str] = &["0850", "0900", "+90850"];

/// URL shorteners and known look-alike bank domains
pub const SUSPICIOUS_DOMAINS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "ow.ly",
    "bankam.com",
    "garanti.net",
    "yapikredi.net",
];

/// Complete set of lists consulted by the scorers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Each keyword present adds to the message score
    #[serde(deserialize_with = "comma_list")]
    pub fraud_keywords: Vec<String>,
    /// Any hit adds the urgency bonus once
    #[serde(deserialize_with = "comma_list")]
    pub urgency_words: Vec<String>,
    /// Any hit adds the payment bonus once
    #[serde(deserialize_with = "comma_list")]
    pub money_words: Vec<String>,
    /// Matched against the start of the raw phone number
    #[serde(deserialize_with = "comma_list")]
    pub suspicious_prefixes: Vec<String>,
    /// Matched anywhere inside the URL
    #[serde(deserialize_with = "comma_list")]
    pub suspicious_domains: Vec<String>,
}

/// Accept either a sequence or a comma-separated string, so lists can be
/// overridden from a single environment variable
fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CommaList {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match CommaList::deserialize(deserializer)? {
        CommaList::List(list) => list,
        CommaList::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            fraud_keywords: owned(FRAUD_KEYWORDS),
            urgency_words: owned(URGENCY_WORDS),
            money_words: owned(MONEY_WORDS),
            suspicious_prefixes: owned(SUSPICIOUS_PREFIXES),
            suspicious_domains: owned(SUSPICIOUS_DOMAINS),
        }
    }
}

impl RuleSet {
    /// Named lists, used for validation and diagnostics
    pub fn lists(&self) -> [(&'static str, &[String]); 5] {
        [
            ("fraud_keywords", self.fraud_keywords.as_slice()),
            ("urgency_words", self.urgency_words.as_slice()),
            ("money_words", self.money_words.as_slice()),
            ("suspicious_prefixes", self.suspicious_prefixes.as_slice()),
            ("suspicious_domains", self.suspicious_domains.as_slice()),
        ]
    }

    /// Keywords and words are matched against lower-cased text, so store
    /// them lower-cased too.
    pub(crate) fn normalized(mut self) -> Self {
        for list in [
            &mut self.fraud_keywords,
            &mut self.urgency_words,
            &mut self.money_words,
        ] {
            for word in list.iter_mut() {
                *word = word.to_lowercase();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let rules = RuleSet::default();
        assert_eq!(rules.fraud_keywords.len(), 28);
        assert_eq!(rules.urgency_words.len(), 6);
        assert_eq!(rules.money_words.len(), 6);
        assert_eq!(rules.suspicious_prefixes, vec!["0850", "0900", "+90850"]);
        assert_eq!(rules.suspicious_domains.len(), 7);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let rules: RuleSet = toml::from_str(r#"suspicious_domains = ["evil.example"]"#).unwrap();
        assert_eq!(rules.suspicious_domains, vec!["evil.example"]);
        assert_eq!(rules.fraud_keywords, RuleSet::default().fraud_keywords);
    }

    #[test]
    fn test_comma_separated_list() {
        let rules: RuleSet =
            toml::from_str(r#"suspicious_prefixes = "0888, 0999,""#).unwrap();
        assert_eq!(rules.suspicious_prefixes, vec!["0888", "0999"]);
    }

    #[test]
    fn test_normalized_lowercases_words_only() {
        let rules = RuleSet {
            fraud_keywords: vec!["BONUS".to_string()],
            suspicious_domains: vec!["Bit.ly".to_string()],
            ..RuleSet::default()
        }
        .normalized();
        assert_eq!(rules.fraud_keywords, vec!["bonus"]);
        assert_eq!(rules.suspicious_domains, vec!["Bit.ly"]);
    }
}
