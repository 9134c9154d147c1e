//! Validated interaction records

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Scale on which a source reports scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    /// 0.0 - 1.0 (STRING JSON API)
    Unit,
    /// 0 - 1000 (STRING flat files, score sliders)
    Permille,
}

impl ScoreScale {
    /// Convert a raw score to the unit scale, rejecting out-of-range values
    pub fn normalize(&self, raw: f64) -> Option<f64> {
        let (max, divisor) = match self {
            ScoreScale::Unit => (1.0, 1.0),
            ScoreScale::Permille => (1000.0, 1000.0),
        };
        if raw.is_finite() && (0.0..=max).contains(&raw) {
            Some(raw / divisor)
        } else {
            None
        }
    }
}

/// One reported association between two gene products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub protein_a: String,
    pub protein_b: String,
    /// Combined score on the unit scale
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_id_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_id_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxon_id: Option<u32>,
}

impl InteractionRecord {
    pub fn new(protein_a: impl Into<String>, protein_b: impl Into<String>, score: f64) -> Self {
        Self {
            protein_a: protein_a.into(),
            protein_b: protein_b.into(),
            score,
            string_id_a: None,
            string_id_b: None,
            taxon_id: None,
        }
    }

    /// Build a record from one element of a STRING `network` response.
    ///
    /// `preferredName_A`, `preferredName_B` and a numeric in-range `score`
    /// are required; anything else is optional.
    pub fn from_json(value: &Value, scale: ScoreScale) -> Option<Self> {
        let name = |key: &str| {
            value.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let protein_a = name("preferredName_A")?;
        let protein_b = name("preferredName_B")?;
        let score = value.get("score").and_then(Value::as_f64)?;
        let score = scale.normalize(score)?;

        Some(Self {
            protein_a,
            protein_b,
            score,
            string_id_a: name("stringId_A"),
            string_id_b: name("stringId_B"),
            taxon_id: value.get("ncbiTaxonId")
                .and_then(Value::as_u64)
                .and_then(|t| u32::try_from(t).ok()),
        })
    }

    pub fn is_self_loop(&self) -> bool {
        self.protein_a == self.protein_b
    }
}

/// Parse a STRING JSON response body.
///
/// A body that is not a JSON array (STRING reports errors as an object) yields
/// no records. Elements missing required fields are skipped.
pub fn parse_interactions(body: &Value, scale: ScoreScale) -> Vec<InteractionRecord> {
    let Some(items) = body.as_array() else {
        warn!("Interaction response is not a list; treating as no interactions");
        return Vec::new();
    };

    let records: Vec<InteractionRecord> = items
        .iter()
        .filter_map(|item| InteractionRecord::from_json(item, scale))
        .collect();

    if records.len() < items.len() {
        debug!("Skipped {} malformed interaction records", items.len() - records.len());
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_full_record() {
        let value = json!({
            "stringId_A": "9606.ENSP00000284981",
            "stringId_B": "9606.ENSP00000252486",
            "preferredName_A": "APP",
            "preferredName_B": "APOE",
            "ncbiTaxonId": 9606,
            "score": 0.999,
            "nscore": 0, "fscore": 0, "pscore": 0
        });

        let record = InteractionRecord::from_json(&value, ScoreScale::Unit).unwrap();
        assert_eq!(record.protein_a, "APP");
        assert_eq!(record.protein_b, "APOE");
        assert_eq!(record.score, 0.999);
        assert_eq!(record.taxon_id, Some(9606));
        assert_eq!(record.string_id_a.as_deref(), Some("9606.ENSP00000284981"));
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let scale = ScoreScale::Unit;
        assert!(InteractionRecord::from_json(&json!({"preferredName_A": "A", "score": 0.5}), scale).is_none());
        assert!(InteractionRecord::from_json(&json!({"preferredName_A": "A", "preferredName_B": "B"}), scale).is_none());
        assert!(InteractionRecord::from_json(
            &json!({"preferredName_A": "A", "preferredName_B": "", "score": 0.5}), scale
        ).is_none());
        assert!(InteractionRecord::from_json(
            &json!({"preferredName_A": "A", "preferredName_B": "B", "score": "0.5"}), scale
        ).is_none());
    }

    #[test]
    fn test_permille_scale() {
        let value = json!({"preferredName_A": "A", "preferredName_B": "B", "score": 700});
        let record = InteractionRecord::from_json(&value, ScoreScale::Permille).unwrap();
        assert_eq!(record.score, 0.7);

        // 700 on a unit scale is out of range
        assert!(InteractionRecord::from_json(&value, ScoreScale::Unit).is_none());
    }

    #[test]
    fn test_parse_interactions_skips_bad_items() {
        let body = json!([
            {"preferredName_A": "A", "preferredName_B": "B", "score": 0.5},
            {"preferredName_A": "A"},
            "garbage",
        ]);
        let records = parse_interactions(&body, ScoreScale::Unit);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_interactions_error_object() {
        let body = json!({"Error": "not found", "ErrorMessage": "no identifiers"});
        assert!(parse_interactions(&body, ScoreScale::Unit).is_empty());
    }
}
