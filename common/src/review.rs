//! Review workflow logic
//!
//! Pure functions behind the review loop: candidate rank derivation,
//! display truncation of scores, list advancement and validation marking.
//! The wasm crate calls these after each fetch resolves.

use crate::types::{LocalRecord, RecIdEntry, RecIdList, Score};

impl LocalRecord {
    /// Rank of the candidate to display for this record.
    ///
    /// Prefers the candidate whose id equals the persisted `matched_record`;
    /// without one, the first candidate; `None` when no candidate exists.
    /// Recomputed on every record load.
    pub fn candidate_rank(&self) -> Option<usize> {
        if !self.matched_record.is_empty() {
            if let Some(rank) = self
                .possible_matches
                .iter()
                .position(|m| m.rec_id == self.matched_record)
            {
                return Some(rank);
            }
        }
        if self.possible_matches.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Truncate scores to 2 decimals for display.
    ///
    /// The overall similarity score is always formatted; field scores are
    /// formatted unless null or exactly 1. Already formatted values are
    /// left as they are, so applying this twice changes nothing.
    pub fn truncate_scores(&mut self) {
        for possible_match in &mut self.possible_matches {
            if let Score::Value(v) = possible_match.similarity_score {
                possible_match.similarity_score = Score::Text(format!("{:.2}", v));
            }
            for score in possible_match.scores.values_mut() {
                if let Some(Score::Value(v)) = score {
                    if *v != 1.0 {
                        *score = Some(Score::Text(format!("{:.2}", v)));
                    }
                }
            }
        }
    }
}

/// Record/candidate id pair persisted when confirming `rank`.
///
/// Both ids come from the displayed record itself, so a decision can never
/// be written onto a different record. `None` when `rank` is out of range.
pub fn confirm_target(rec: &LocalRecord, rank: usize) -> Option<(String, String)> {
    let candidate = rec.possible_matches.get(rank)?;
    Some((rec.rec_id.clone(), candidate.rec_id.clone()))
}

/// Id to select after a list load: the first entry, or `None` when the
/// filter matched nothing and the detail panels must be cleared.
pub fn first_rec_id(list: &RecIdList) -> Option<String> {
    list.rec_ids.first().map(|e| e.rec_id.clone())
}

/// Id of the entry following `current` in the loaded list.
///
/// `None` when `current` is the last entry or not in the list, in which
/// case the selection stays where it is.
pub fn next_rec_id(entries: &[RecIdEntry], current: &str) -> Option<String> {
    let index = entries.iter().position(|e| e.rec_id == current)?;
    entries.get(index + 1).map(|e| e.rec_id.clone())
}

/// Flip the human-validated flag of `rec_id` after a persisted decision.
pub fn mark_human_validated(entries: &mut [RecIdEntry], rec_id: &str) {
    if let Some(entry) = entries.iter_mut().find(|e| e.rec_id == rec_id) {
        entry.human_validated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FullRec, PossibleMatch};
    use serde_json::Map;
    use std::collections::BTreeMap;

    fn candidate(rec_id: &str, similarity: f64) -> PossibleMatch {
        PossibleMatch {
            rec_id: rec_id.to_string(),
            briefrec: Map::new(),
            fullrec: FullRec::Html(String::new()),
            similarity_score: Score::Value(similarity),
            scores: BTreeMap::new(),
        }
    }

    fn record(matched: &str, candidates: Vec<PossibleMatch>) -> LocalRecord {
        LocalRecord {
            rec_id: "loc1".to_string(),
            briefrec: Map::new(),
            fullrec: FullRec::Html(String::new()),
            matched_record: matched.to_string(),
            possible_matches: candidates,
        }
    }

    fn entry(rec_id: &str) -> RecIdEntry {
        RecIdEntry {
            rec_id: rec_id.to_string(),
            human_validated: false,
            color: false,
            matched_record: None,
        }
    }

    #[test]
    fn test_rank_prefers_matched_record() {
        let rec = record("Y", vec![candidate("X", 0.91), candidate("Y", 0.40)]);
        assert_eq!(rec.candidate_rank(), Some(1));
    }

    #[test]
    fn test_rank_defaults_to_first_candidate() {
        let rec = record("", vec![candidate("X", 0.91), candidate("Y", 0.40)]);
        assert_eq!(rec.candidate_rank(), Some(0));
    }

    #[test]
    fn test_rank_none_without_candidates() {
        let rec = record("", vec![]);
        assert_eq!(rec.candidate_rank(), None);
    }

    #[test]
    fn test_rank_falls_back_when_matched_record_absent() {
        let rec = record("Z", vec![candidate("X", 0.91)]);
        assert_eq!(rec.candidate_rank(), Some(0));
    }

    #[test]
    fn test_truncate_formats_similarity_score() {
        let mut rec = record("", vec![candidate("X", 0.6789)]);
        rec.truncate_scores();
        assert_eq!(
            rec.possible_matches[0].similarity_score,
            Score::Text("0.68".to_string())
        );
    }

    #[test]
    fn test_truncate_skips_null_and_exact_one() {
        let mut rec = record("", vec![candidate("X", 0.5)]);
        rec.possible_matches[0].scores = BTreeMap::from([
            ("titles".to_string(), Some(Score::Value(0.8))),
            ("creators".to_string(), None),
            ("years".to_string(), Some(Score::Value(1.0))),
        ]);
        rec.truncate_scores();
        let scores = &rec.possible_matches[0].scores;
        assert_eq!(scores["titles"], Some(Score::Text("0.80".to_string())));
        assert_eq!(scores["creators"], None);
        assert_eq!(scores["years"], Some(Score::Value(1.0)));
    }

    #[test]
    fn test_truncate_is_idempotent() {
        let mut rec = record("", vec![candidate("X", 0.405)]);
        rec.possible_matches[0]
            .scores
            .insert("titles".to_string(), Some(Score::Value(0.333)));
        rec.truncate_scores();
        let once = rec.clone();
        rec.truncate_scores();
        assert_eq!(
            rec.possible_matches[0].similarity_score,
            once.possible_matches[0].similarity_score
        );
        assert_eq!(rec.possible_matches[0].scores, once.possible_matches[0].scores);
    }

    #[test]
    fn test_confirm_target_pairs_displayed_record_with_candidate() {
        let mut rec = record("", vec![candidate("X", 0.91), candidate("Y", 0.40)]);
        rec.rec_id = "A".to_string();
        assert_eq!(
            confirm_target(&rec, 1),
            Some(("A".to_string(), "Y".to_string()))
        );
        assert_eq!(confirm_target(&rec, 5), None);
    }

    #[test]
    fn test_first_rec_id_of_loaded_list() {
        let list = RecIdList {
            rec_ids: vec![entry("A"), entry("B")],
            nb_total_recs: Some(2),
        };
        assert_eq!(first_rec_id(&list), Some("A".to_string()));
    }

    // A filter matching no record (e.g. nomatch on a clean collection)
    // selects nothing, leaving the detail panels empty.
    #[test]
    fn test_empty_filter_result_selects_no_record() {
        let list = RecIdList {
            rec_ids: vec![],
            nb_total_recs: Some(0),
        };
        assert_eq!(first_rec_id(&list), None);
        assert_eq!(list.total(), 0);
    }

    #[test]
    fn test_next_rec_id_advances() {
        let entries = vec![entry("A"), entry("B"), entry("C")];
        assert_eq!(next_rec_id(&entries, "A"), Some("B".to_string()));
        assert_eq!(next_rec_id(&entries, "C"), None);
        assert_eq!(next_rec_id(&entries, "missing"), None);
    }

    #[test]
    fn test_mark_human_validated() {
        let mut entries = vec![entry("A"), entry("B")];
        mark_human_validated(&mut entries, "B");
        assert!(!entries[0].human_validated);
        assert!(entries[1].human_validated);
        // unknown id is a no-op
        mark_human_validated(&mut entries, "Z");
    }

    // Confirm flow over the pure layer: list [A,B,C], record A has
    // candidates X (0.91) and Y (0.40) and no persisted match.
    #[test]
    fn test_confirm_scenario_selects_first_then_advances() {
        let mut entries = vec![entry("A"), entry("B"), entry("C")];
        let mut rec = record("", vec![candidate("X", 0.91), candidate("Y", 0.40)]);
        rec.rec_id = "A".to_string();

        let rank = rec.candidate_rank();
        assert_eq!(rank, Some(0));
        rec.truncate_scores();

        // reviewer confirms rank 0
        let rank = rank.unwrap();
        rec.matched_record = rec.possible_matches[rank].rec_id.clone();
        mark_human_validated(&mut entries, &rec.rec_id);
        assert_eq!(rec.matched_record, "X");
        assert!(entries[0].human_validated);
        assert_eq!(next_rec_id(&entries, &rec.rec_id), Some("B".to_string()));
    }

    #[test]
    fn test_cancel_scenario_clears_match_and_validates() {
        let mut entries = vec![entry("A"), entry("B")];
        let mut rec = record("X", vec![candidate("X", 0.91)]);
        rec.rec_id = "B".to_string();

        rec.matched_record = String::new();
        mark_human_validated(&mut entries, &rec.rec_id);
        assert!(rec.matched_record.is_empty());
        assert!(entries[1].human_validated);
        // B was last: selection is unchanged
        assert_eq!(next_rec_id(&entries, "B"), None);
    }
}
