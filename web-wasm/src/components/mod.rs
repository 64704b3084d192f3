pub mod action_section;
pub mod brief_compare;
pub mod error_banner;
pub mod full_rec;
pub mod header;
pub mod model_selector;
pub mod recid_list;
