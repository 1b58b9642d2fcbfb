//! Raw wire schema for the analysis service.
//!
//! These types mirror the service's JSON shapes exactly and carry no derived
//! meaning; normalization into domain types happens in [`crate::mapper`].
//! Required fields are strict on purpose: a record missing `phishing` or
//! `emotions` is a schema violation that fails the whole attempt, not
//! something to paper over with defaults.

use serde::{Deserialize, Serialize};

/// Top-level response of `GET /fetch_and_analyze`.
///
/// `results` is required; a body without it (the service returns a bare
/// `{"message": ...}` for an empty mailbox) deserializes to an error and the
/// attempt fails. An explicit empty `results` array is a valid zero-email
/// response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisResponse {
    pub results: Vec<AnalysisRecord>,
}

/// One per-email analysis result as returned by the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisRecord {
    pub phishing: PhishingVerdict,
    pub emotions: EmotionReport,
    #[serde(default)]
    pub analysis: Option<AnalysisSection>,
}

/// Phishing classification for one email.
///
/// `result` is one of "High Risk" / "Medium Risk" / "Low Risk" by contract;
/// validation is deferred to the mapper so the offending label can be reported
/// with its batch index.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhishingVerdict {
    pub result: String,
    pub confidence: f64,
}

/// Emotion distribution for one email.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmotionReport {
    pub primary: EmotionScore,
    /// Ranked by the service; the order is display-significant and preserved
    /// verbatim through normalization.
    pub top_emotions: Vec<EmotionScore>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmotionScore {
    pub emotion: String,
    pub score: f64,
}

/// Optional free-text content analysis block.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisSection {
    /// "Gemini AI" or "Local Models" upstream; passed through untouched.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
