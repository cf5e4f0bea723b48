//! The raw assessment record handed over by the UI layer.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domains::{CategoryKey, MainCategory};

/// Raw assessment result as produced by the front-end.
///
/// Every field is optional on the wire; the engine treats absence as
/// zero/empty rather than an error, so deserializing `{}` yields a usable
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentScore {
    /// Sum of correct-answer points across the whole assessment.
    pub total_score: i64,
    /// Per-category raw scores, keyed by the assessment taxonomy's keys.
    /// Insertion order is meaningful: chart series follow it.
    pub by_category: IndexMap<String, i64>,
    /// When the assessment was taken. Absent means "now".
    pub date: Option<DateTime<Utc>>,
    /// Which assessment taxonomy produced this score. Unrecognized wire
    /// values become `None`, and all category-keyed copy degrades to empty.
    #[serde(deserialize_with = "main_category_lenient")]
    pub main_category: Option<MainCategory>,
    /// Opaque score identifier, used only for link formatting.
    #[serde(rename = "_id")]
    pub id: String,
    /// Opaque assessment identifier, used only for ID/link formatting.
    pub assessment_id: String,
}

impl AssessmentScore {
    /// Total score, floored at zero.
    pub fn total(&self) -> i64 {
        self.total_score.max(0)
    }

    /// Raw score for a category key, `0` when the key is absent.
    ///
    /// This is the single read path for category values; the zero-default
    /// contract lives here and nowhere else. Negative wire values also clamp
    /// to zero, scores are non-negative by contract.
    pub fn category_score(&self, key: &str) -> i64 {
        self.by_category.get(key).copied().unwrap_or(0).max(0)
    }

    /// Typed variant of [`category_score`](Self::category_score).
    pub fn score_for(&self, key: CategoryKey) -> i64 {
        self.category_score(key.as_str())
    }
}

fn main_category_lenient<'de, D>(deserializer: D) -> Result<Option<MainCategory>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(MainCategory::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let score: AssessmentScore = serde_json::from_str("{}").unwrap();
        assert_eq!(score.total(), 0);
        assert!(score.by_category.is_empty());
        assert!(score.date.is_none());
        assert!(score.main_category.is_none());
        assert_eq!(score.id, "");
        assert_eq!(score.assessment_id, "");
    }

    #[test]
    fn test_unknown_main_category_becomes_none() {
        let score: AssessmentScore =
            serde_json::from_str(r#"{"mainCategory": "astrology"}"#).unwrap();
        assert!(score.main_category.is_none());

        let score: AssessmentScore =
            serde_json::from_str(r#"{"mainCategory": "driving-licence"}"#).unwrap();
        assert_eq!(score.main_category, Some(MainCategory::DrivingLicence));
    }

    #[test]
    fn test_category_score_defaults_and_clamps() {
        let score: AssessmentScore = serde_json::from_str(
            r#"{"byCategory": {"memory": 22, "perception": -3}}"#,
        )
        .unwrap();
        assert_eq!(score.category_score("memory"), 22);
        assert_eq!(score.category_score("perception"), 0);
        assert_eq!(score.category_score("not-a-category"), 0);
        assert_eq!(score.score_for(CategoryKey::Memory), 22);
    }

    #[test]
    fn test_by_category_preserves_insertion_order() {
        let score: AssessmentScore = serde_json::from_str(
            r#"{"byCategory": {"memory": 1, "perception": 2, "road-rules": 3}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = score.by_category.keys().map(String::as_str).collect();
        assert_eq!(keys, ["memory", "perception", "road-rules"]);
    }

    #[test]
    fn test_wire_field_names() {
        let score: AssessmentScore = serde_json::from_str(
            r#"{"totalScore": 42, "_id": "s1", "assessmentId": "a1"}"#,
        )
        .unwrap();
        assert_eq!(score.total_score, 42);
        assert_eq!(score.id, "s1");
        assert_eq!(score.assessment_id, "a1");
    }
}
