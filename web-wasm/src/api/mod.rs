//! Backend REST calls

mod dedup;

pub use dedup::{add_training_example, fetch_local_rec, fetch_rec_ids, update_matched_record};
