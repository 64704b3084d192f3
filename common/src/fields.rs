//! Fixed display field lists
//!
//! The order of these lists drives the row order of the record tables.

/*
Fields of the full local record when it arrives as a field map.
This list changes according to the metadata provided by the library.
*/
pub const FULL_LOCAL_REC_FIELDS: &[&str] = &[
    "rec_id",
    "title",
    "creators",
    "isbn",
    "publishers",
    "city",
    "year",
    "editions",
    "language",
    "extent",
    "parent",
    "content",
    "callnumber",
    "keywords",
    "review",
    "status",
    "format",
    "permalink",
    "category_2",
    "category_1",
];

/*
Common to local and NZ/external records. All brief records contain the
same fields, so the two sides can be compared row by row.
*/
pub const BRIEF_REC_FIELDS: &[&str] = &[
    "rec_id",
    "format",
    "titles",
    "short_titles",
    "creators",
    "corp_creators",
    "publishers",
    "years",
    "editions",
    "extent",
    "languages",
    "std_nums",
    "sys_nums",
    "series",
    "parent",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_fields_start_with_rec_id() {
        assert_eq!(BRIEF_REC_FIELDS[0], "rec_id");
        assert_eq!(BRIEF_REC_FIELDS.len(), 15);
    }

    #[test]
    fn test_full_local_fields_count() {
        assert_eq!(FULL_LOCAL_REC_FIELDS.len(), 20);
        assert!(FULL_LOCAL_REC_FIELDS.contains(&"callnumber"));
    }
}
