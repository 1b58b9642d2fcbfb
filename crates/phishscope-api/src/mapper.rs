// Result normalization from raw service records to the domain view model
//
// Rationale for api-layer placement:
//   This module contains service-specific knowledge about verdict literals and
//   the shape of the emotion report. The domain model itself lives in
//   phishscope-types; the logic to map raw records into it belongs next to the
//   wire schema.
//
// Design principle:
//   - phishscope-types: defines the view model structure (NormalizedEmail)
//   - phishscope-api: knows how to normalize service data into it
//   - Normalization is pure and synchronous; all I/O stays in client.rs

use phishscope_types::{AnalysisBatch, EmotionWeight, NormalizedEmail, RiskTier, NO_ANALYSIS_SUMMARY};

use crate::error::{Error, Result};
use crate::schema::{AnalysisRecord, AnalysisResponse};

/// Normalize one raw record into the canonical per-email view model.
///
/// `index` is the record's position in the batch and is only used for error
/// reporting. Fails closed on an unrecognized phishing verdict; unknown
/// emotion labels are accepted as-is (lower-cased).
pub fn normalize_record(index: usize, record: &AnalysisRecord) -> Result<NormalizedEmail> {
    let risk_tier = RiskTier::from_verdict(&record.phishing.result).ok_or_else(|| {
        Error::UnknownRiskTier {
            index,
            label: record.phishing.result.clone(),
        }
    })?;

    let content_summary = record
        .analysis
        .as_ref()
        .and_then(|section| section.content.as_deref())
        .filter(|content| !content.is_empty())
        .unwrap_or(NO_ANALYSIS_SUMMARY)
        .to_string();

    let analysis_source = record
        .analysis
        .as_ref()
        .and_then(|section| section.source.clone());

    Ok(NormalizedEmail {
        risk_tier,
        risk_confidence: record.phishing.confidence,
        dominant_emotion: record.emotions.primary.emotion.to_lowercase(),
        dominant_score: record.emotions.primary.score,
        // Exact passthrough: no re-ranking, de-duplication, or filtering,
        // even when the primary emotion appears again.
        secondary_emotions: record
            .emotions
            .top_emotions
            .iter()
            .map(|entry| EmotionWeight::new(entry.emotion.clone(), entry.score))
            .collect(),
        content_summary,
        analysis_source,
    })
}

/// Normalize a whole response batch, preserving input order.
///
/// All-or-nothing: the first record with an unknown risk verdict fails the
/// batch. Presenting a partially-validated batch would show risk assessments
/// the service never actually returned.
pub fn normalize_batch(response: AnalysisResponse) -> Result<AnalysisBatch> {
    let emails = response
        .results
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record))
        .collect::<Result<Vec<_>>>()?;

    Ok(AnalysisBatch::new(emails))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AnalysisSection, EmotionReport, EmotionScore, PhishingVerdict};
    use phishscope_types::EmotionKind;

    fn record(verdict: &str, confidence: f64) -> AnalysisRecord {
        AnalysisRecord {
            phishing: PhishingVerdict {
                result: verdict.to_string(),
                confidence,
            },
            emotions: EmotionReport {
                primary: EmotionScore {
                    emotion: "Fear".to_string(),
                    score: 0.8,
                },
                top_emotions: vec![
                    EmotionScore {
                        emotion: "fear".to_string(),
                        score: 0.8,
                    },
                    EmotionScore {
                        emotion: "anger".to_string(),
                        score: 0.3,
                    },
                ],
            },
            analysis: Some(AnalysisSection {
                source: Some("Gemini AI".to_string()),
                content: Some("Urgent payment request".to_string()),
            }),
        }
    }

    #[test]
    fn test_normalize_full_record() {
        let email = normalize_record(0, &record("High Risk", 0.92)).unwrap();

        assert_eq!(email.risk_tier, RiskTier::High);
        assert_eq!(email.risk_confidence, 0.92);
        assert_eq!(email.dominant_emotion, "fear");
        assert_eq!(email.dominant_score, 0.8);
        assert_eq!(
            email.secondary_emotions,
            vec![
                EmotionWeight::new("fear", 0.8),
                EmotionWeight::new("anger", 0.3),
            ]
        );
        assert_eq!(email.content_summary, "Urgent payment request");
        assert_eq!(email.analysis_source.as_deref(), Some("Gemini AI"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = record("Medium Risk", 0.55);
        let first = normalize_record(3, &raw).unwrap();
        let second = normalize_record(3, &raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_verdict_fails_closed() {
        let err = normalize_record(2, &record("Unknown Risk", 0.5)).unwrap_err();
        match err {
            Error::UnknownRiskTier { index, label } => {
                assert_eq!(index, 2);
                assert_eq!(label, "Unknown Risk");
            }
            other => panic!("Expected UnknownRiskTier, got {:?}", other),
        }
    }

    #[test]
    fn test_dominant_emotion_is_lowercased_and_unknown_labels_accepted() {
        let mut raw = record("Low Risk", 0.4);
        raw.emotions.primary.emotion = "Bewilderment".to_string();

        let email = normalize_record(0, &raw).unwrap();
        assert_eq!(email.dominant_emotion, "bewilderment");
        assert_eq!(email.dominant_kind(), EmotionKind::Other);
    }

    #[test]
    fn test_secondary_emotions_preserve_order_and_duplicates() {
        let mut raw = record("Low Risk", 0.4);
        raw.emotions.top_emotions = vec![
            EmotionScore {
                emotion: "anger".to_string(),
                score: 0.3,
            },
            EmotionScore {
                emotion: "fear".to_string(),
                score: 0.8,
            },
            EmotionScore {
                emotion: "fear".to_string(),
                score: 0.8,
            },
        ];

        let email = normalize_record(0, &raw).unwrap();
        assert_eq!(
            email.secondary_emotions,
            vec![
                EmotionWeight::new("anger", 0.3),
                EmotionWeight::new("fear", 0.8),
                EmotionWeight::new("fear", 0.8),
            ]
        );
    }

    #[test]
    fn test_missing_analysis_yields_sentinel() {
        let mut raw = record("Low Risk", 0.4);
        raw.analysis = None;

        let email = normalize_record(0, &raw).unwrap();
        assert_eq!(email.content_summary, NO_ANALYSIS_SUMMARY);
        assert!(email.analysis_source.is_none());
    }

    #[test]
    fn test_empty_content_yields_sentinel() {
        let mut raw = record("Low Risk", 0.4);
        raw.analysis = Some(AnalysisSection {
            source: Some("Local Models".to_string()),
            content: Some(String::new()),
        });

        let email = normalize_record(0, &raw).unwrap();
        assert_eq!(email.content_summary, NO_ANALYSIS_SUMMARY);
        // Source still passes through even when content is empty.
        assert_eq!(email.analysis_source.as_deref(), Some("Local Models"));
    }

    #[test]
    fn test_batch_preserves_length_and_order() {
        let response = AnalysisResponse {
            results: vec![
                record("High Risk", 0.9),
                record("Medium Risk", 0.6),
                record("Low Risk", 0.2),
            ],
        };

        let batch = normalize_batch(response).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.emails[0].risk_tier, RiskTier::High);
        assert_eq!(batch.emails[1].risk_tier, RiskTier::Medium);
        assert_eq!(batch.emails[2].risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let response = AnalysisResponse {
            results: vec![record("High Risk", 0.9), record("Sorta Risky", 0.6)],
        };

        let err = normalize_batch(response).unwrap_err();
        match err {
            Error::UnknownRiskTier { index, label } => {
                assert_eq!(index, 1);
                assert_eq!(label, "Sorta Risky");
            }
            other => panic!("Expected UnknownRiskTier, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_batch_normalizes_to_zero_emails() {
        let batch = normalize_batch(AnalysisResponse { results: vec![] }).unwrap();
        assert!(batch.is_empty());
    }
}
