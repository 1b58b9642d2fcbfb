use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// NOTE: Schema Design Goals
//
// 1. Fail-closed risk classification: the service contract allows exactly three
//    phishing verdicts. A label outside that set is a contract violation and is
//    never coerced to a default tier (a misrepresented risk is a security bug,
//    not a cosmetic one).
//
// 2. Fail-open emotion labels: the emotion vocabulary is closed for display
//    categorization, but unrecognized labels are still carried through and
//    rendered with a fallback category. An unknown emotion is cosmetic.
//
// 3. Positional identity: records carry no stable ID of their own; a normalized
//    email is identified by its index in the batch, and batch order is
//    display-significant end to end.

/// Sentinel shown when the service returned no content analysis for an email.
pub const NO_ANALYSIS_SUMMARY: &str = "No analysis available";

/// Categorical phishing-risk classification.
///
/// Parsed by exact match against the three wire literals; see
/// [`RiskTier::from_verdict`]. Serialized in snake_case for downstream
/// consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// Parse a wire verdict label ("High Risk" / "Medium Risk" / "Low Risk").
    ///
    /// Returns `None` for anything else, including case or whitespace
    /// variations. Callers must treat `None` as a data contract violation,
    /// never substitute a default tier.
    pub fn from_verdict(label: &str) -> Option<Self> {
        match label {
            "High Risk" => Some(RiskTier::High),
            "Medium Risk" => Some(RiskTier::Medium),
            "Low Risk" => Some(RiskTier::Low),
            _ => None,
        }
    }

    /// The wire/display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "High Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::Low => "Low Risk",
        }
    }
}

/// Display category for an emotion label.
///
/// Total mapping: every label lands somewhere, unrecognized ones in
/// [`EmotionKind::Other`]. This replaces an open-ended lookup table so the
/// fallback is an explicit case rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionKind {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    /// Label outside the known vocabulary; rendered with a generic category.
    Other,
}

impl EmotionKind {
    /// Classify an emotion label, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "joy" => EmotionKind::Joy,
            "anger" => EmotionKind::Anger,
            "sadness" => EmotionKind::Sadness,
            "fear" => EmotionKind::Fear,
            "surprise" => EmotionKind::Surprise,
            _ => EmotionKind::Other,
        }
    }

    /// True if the label was in the known vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, EmotionKind::Other)
    }
}

/// One (emotion, score) pair from the ranked emotion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionWeight {
    pub emotion: String,
    pub score: f64,
}

impl EmotionWeight {
    pub fn new(emotion: impl Into<String>, score: f64) -> Self {
        Self {
            emotion: emotion.into(),
            score,
        }
    }

    pub fn kind(&self) -> EmotionKind {
        EmotionKind::from_label(&self.emotion)
    }
}

/// Canonical per-email view model derived from one raw analysis record.
///
/// Scores are passed through unrounded; formatting is a presentation concern
/// (see [`crate::display`]). `secondary_emotions` preserves the exact order
/// the service ranked them in, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEmail {
    pub risk_tier: RiskTier,
    pub risk_confidence: f64,
    /// Lower-cased canonical form of the highest-weighted emotion.
    pub dominant_emotion: String,
    pub dominant_score: f64,
    pub secondary_emotions: Vec<EmotionWeight>,
    /// Content analysis text, or [`NO_ANALYSIS_SUMMARY`] when the service
    /// returned none.
    pub content_summary: String,
    /// Which analyzer produced the content summary ("Gemini AI" or
    /// "Local Models"), when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_source: Option<String>,
}

impl NormalizedEmail {
    /// Display category of the dominant emotion.
    pub fn dominant_kind(&self) -> EmotionKind {
        EmotionKind::from_label(&self.dominant_emotion)
    }
}

/// One fully normalized fetch-and-analyze round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisBatch {
    pub emails: Vec<NormalizedEmail>,
    /// When the response was normalized, in UTC.
    pub fetched_at: DateTime<Utc>,
}

impl AnalysisBatch {
    pub fn new(emails: Vec<NormalizedEmail>) -> Self {
        Self {
            emails,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tier_from_verdict_exact_literals() {
        assert_eq!(RiskTier::from_verdict("High Risk"), Some(RiskTier::High));
        assert_eq!(
            RiskTier::from_verdict("Medium Risk"),
            Some(RiskTier::Medium)
        );
        assert_eq!(RiskTier::from_verdict("Low Risk"), Some(RiskTier::Low));
    }

    #[test]
    fn test_risk_tier_rejects_unknown_labels() {
        assert_eq!(RiskTier::from_verdict("Unknown Risk"), None);
        assert_eq!(RiskTier::from_verdict("high risk"), None);
        assert_eq!(RiskTier::from_verdict("High Risk "), None);
        assert_eq!(RiskTier::from_verdict(""), None);
    }

    #[test]
    fn test_risk_tier_label_round_trip() {
        for tier in [RiskTier::High, RiskTier::Medium, RiskTier::Low] {
            assert_eq!(RiskTier::from_verdict(tier.label()), Some(tier));
        }
    }

    #[test]
    fn test_emotion_kind_known_vocabulary() {
        assert_eq!(EmotionKind::from_label("joy"), EmotionKind::Joy);
        assert_eq!(EmotionKind::from_label("anger"), EmotionKind::Anger);
        assert_eq!(EmotionKind::from_label("sadness"), EmotionKind::Sadness);
        assert_eq!(EmotionKind::from_label("fear"), EmotionKind::Fear);
        assert_eq!(EmotionKind::from_label("surprise"), EmotionKind::Surprise);
    }

    #[test]
    fn test_emotion_kind_is_case_insensitive() {
        assert_eq!(EmotionKind::from_label("Fear"), EmotionKind::Fear);
        assert_eq!(EmotionKind::from_label("JOY"), EmotionKind::Joy);
    }

    #[test]
    fn test_emotion_kind_is_total_with_explicit_fallback() {
        assert_eq!(EmotionKind::from_label("confusion"), EmotionKind::Other);
        assert_eq!(EmotionKind::from_label(""), EmotionKind::Other);
        assert!(!EmotionKind::from_label("confusion").is_known());
        assert!(EmotionKind::from_label("fear").is_known());
    }
}
