//! Dedup Review Common Library
//!
//! Types and pure logic shared by the web client:
//! - types: backend payload types (records, candidates, scores)
//! - review: rank derivation, score truncation, list advancement
//! - fields/options: fixed field lists, filters and evaluation models

pub mod error;
pub mod fields;
pub mod options;
pub mod review;
pub mod types;

pub use error::{DedupError, Result};
pub use fields::{BRIEF_REC_FIELDS, FULL_LOCAL_REC_FIELDS};
pub use options::{EvaluationModel, RecordFilter};
pub use review::{confirm_target, first_rec_id, mark_human_validated, next_rec_id};
pub use types::{
    display_value, FullRec, LocalRecord, PossibleMatch, RecIdEntry, RecIdList, Score,
    TrainingAck, TrainingExample, UpdateAck,
};
