//! Payload types of the dedup backend API
//!
//! Shared between the fetch layer and the view components:
//! - RecIdEntry / RecIdList: the filterable list of local record ids
//! - LocalRecord / PossibleMatch: a local record with its ranked candidates
//! - Score / FullRec: score cells and full-record rendering variants

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// One entry of the local record id list.
///
/// `human_validated` flips to true client-side once a reviewer has
/// confirmed or cancelled a match. `color` marks alternating groups of
/// duplicated matches in the `duplicatematch` filter view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecIdEntry {
    pub rec_id: String,
    #[serde(default)]
    pub human_validated: bool,
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub matched_record: Option<String>,
}

/// Response of the record id list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecIdList {
    pub rec_ids: Vec<RecIdEntry>,
    /// Total count over the whole filter, not only the loaded page.
    /// Absent on older backends; display falls back to the loaded length.
    #[serde(default)]
    pub nb_total_recs: Option<u64>,
}

impl RecIdList {
    /// Count to display next to the list.
    pub fn total(&self) -> u64 {
        self.nb_total_recs.unwrap_or(self.rec_ids.len() as u64)
    }
}

/// A similarity score cell.
///
/// Scores arrive as raw floats and are turned into fixed 2-decimal text
/// for display (`Text`); already formatted values are never reformatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Value(f64),
    Text(String),
}

impl Score {
    /// Numeric value, parsing formatted text back when needed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(*v),
            Score::Text(s) => s.parse().ok(),
        }
    }

    /// A field comparison is disputed when its score is neither clearly
    /// dissimilar nor clearly similar.
    pub fn is_disputed(&self) -> bool {
        matches!(self.as_f64(), Some(v) if (0.2..0.8).contains(&v))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{}", v),
            Score::Text(s) => f.write_str(s),
        }
    }
}

/// Full record payload.
///
/// The backend sends either pre-rendered markup (Marc21 turned into HTML,
/// displayed verbatim) or a plain field map rendered as a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FullRec {
    Html(String),
    Fields(Map<String, Value>),
}

/// A candidate record from the union/external catalog with its scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PossibleMatch {
    pub rec_id: String,
    pub briefrec: Map<String, Value>,
    pub fullrec: FullRec,
    /// Overall similarity with the local record.
    pub similarity_score: Score,
    /// Per brief-record-field similarity; null when not comparable.
    #[serde(default)]
    pub scores: BTreeMap<String, Option<Score>>,
}

/// A local record with its possible matches, as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalRecord {
    /// Not part of the payload; filled in by the client after fetch.
    #[serde(default)]
    pub rec_id: String,
    pub briefrec: Map<String, Value>,
    pub fullrec: FullRec,
    /// Rec id of the confirmed match, empty string when none.
    #[serde(default)]
    pub matched_record: String,
    #[serde(default)]
    pub possible_matches: Vec<PossibleMatch>,
}

/// Acknowledgement of a matched-record update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub status: String,
}

/// Acknowledgement of a training data insert, with the message to display.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingAck {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Body of the training data endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingExample {
    pub ext_nz_recid: String,
    pub local_recid: String,
    pub col_name: String,
    pub is_match: bool,
    #[serde(rename = "selectedModel")]
    pub selected_model: String,
}

/// Render a brief record field value for display.
///
/// Brief record values are strings or lists of strings; lists are joined
/// with a comma like the original rendering did.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| display_value(Some(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rec_id_entry_defaults() {
        let entry: RecIdEntry = serde_json::from_value(json!({"rec_id": "991234"})).unwrap();
        assert_eq!(entry.rec_id, "991234");
        assert!(!entry.human_validated);
        assert!(!entry.color);
        assert!(entry.matched_record.is_none());
    }

    #[test]
    fn test_rec_id_list_total_from_backend() {
        let list: RecIdList = serde_json::from_value(json!({
            "rec_ids": [{"rec_id": "A"}],
            "nb_total_recs": 300
        }))
        .unwrap();
        assert_eq!(list.total(), 300);
    }

    #[test]
    fn test_rec_id_list_total_fallback() {
        let list: RecIdList = serde_json::from_value(json!({
            "rec_ids": [{"rec_id": "A"}, {"rec_id": "B"}]
        }))
        .unwrap();
        assert!(list.nb_total_recs.is_none());
        assert_eq!(list.total(), 2);
    }

    #[test]
    fn test_score_deserialize_number_and_null() {
        let scores: BTreeMap<String, Option<Score>> = serde_json::from_value(json!({
            "titles": 0.8,
            "creators": null
        }))
        .unwrap();
        assert_eq!(scores["titles"], Some(Score::Value(0.8)));
        assert_eq!(scores["creators"], None);
    }

    #[test]
    fn test_score_as_f64_roundtrip() {
        assert_eq!(Score::Value(0.4).as_f64(), Some(0.4));
        assert_eq!(Score::Text("0.40".into()).as_f64(), Some(0.40));
        assert_eq!(Score::Text("n/a".into()).as_f64(), None);
    }

    #[test]
    fn test_score_disputed_range() {
        assert!(!Score::Value(0.19).is_disputed());
        assert!(Score::Value(0.2).is_disputed());
        assert!(Score::Text("0.40".into()).is_disputed());
        assert!(!Score::Value(0.8).is_disputed());
        assert!(!Score::Text("n/a".into()).is_disputed());
    }

    #[test]
    fn test_fullrec_html_variant() {
        let rec: FullRec = serde_json::from_value(json!("<p>leader 01234nam</p>")).unwrap();
        assert!(matches!(rec, FullRec::Html(ref s) if s.contains("leader")));
    }

    #[test]
    fn test_fullrec_fields_variant() {
        let rec: FullRec =
            serde_json::from_value(json!({"title": "Die Zauberflöte", "year": "1791"})).unwrap();
        match rec {
            FullRec::Fields(fields) => assert_eq!(fields["title"], "Die Zauberflöte"),
            FullRec::Html(_) => panic!("expected field map"),
        }
    }

    #[test]
    fn test_local_record_deserialize() {
        let rec: LocalRecord = serde_json::from_value(json!({
            "briefrec": {"titles": ["Requiem"]},
            "fullrec": "<div>marc</div>",
            "matched_record": "",
            "possible_matches": [{
                "rec_id": "nz1",
                "briefrec": {"titles": ["Requiem"]},
                "fullrec": "<div>marc</div>",
                "similarity_score": 0.68,
                "scores": {"titles": 0.8, "creators": null}
            }]
        }))
        .unwrap();
        assert_eq!(rec.possible_matches.len(), 1);
        assert_eq!(rec.possible_matches[0].similarity_score, Score::Value(0.68));
        assert!(rec.rec_id.is_empty());
    }

    #[test]
    fn test_training_example_field_names() {
        let body = TrainingExample {
            ext_nz_recid: "nz1".into(),
            local_recid: "loc1".into(),
            col_name: "hph_music".into(),
            is_match: true,
            selected_model: "mean".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"ext_nz_recid\":\"nz1\""));
        assert!(json.contains("\"selectedModel\":\"mean\""));
        assert!(json.contains("\"is_match\":true"));
    }

    #[test]
    fn test_display_value_variants() {
        assert_eq!(display_value(None), "");
        assert_eq!(display_value(Some(&Value::Null)), "");
        assert_eq!(display_value(Some(&json!("Requiem"))), "Requiem");
        assert_eq!(display_value(Some(&json!(["a", "b"]))), "a, b");
        assert_eq!(display_value(Some(&json!(1791))), "1791");
    }
}
