//! Filter and evaluation model option sets
//!
//! Both are fixed enumerations; the filter semantics live on the backend,
//! the client only forwards the query value.

use std::fmt;

/// Status filter of the record id list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFilter {
    #[default]
    All,
    Possible,
    Match,
    NoMatch,
    DuplicateMatch,
}

impl RecordFilter {
    pub const ALL: &'static [RecordFilter] = &[
        RecordFilter::All,
        RecordFilter::Possible,
        RecordFilter::Match,
        RecordFilter::NoMatch,
        RecordFilter::DuplicateMatch,
    ];

    /// Query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFilter::All => "all",
            RecordFilter::Possible => "possible",
            RecordFilter::Match => "match",
            RecordFilter::NoMatch => "nomatch",
            RecordFilter::DuplicateMatch => "duplicatematch",
        }
    }

    /// Label shown in the filter dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            RecordFilter::All => "All",
            RecordFilter::Possible => "Possible match",
            RecordFilter::Match => "match",
            RecordFilter::NoMatch => "No match",
            RecordFilter::DuplicateMatch => "Duplicate match",
        }
    }

    pub fn from_str(value: &str) -> RecordFilter {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == value)
            .unwrap_or_default()
    }
}

/// Scoring model whose output is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationModel {
    #[default]
    Mean,
    RandomForestMusic,
}

impl EvaluationModel {
    pub const ALL: &'static [EvaluationModel] =
        &[EvaluationModel::Mean, EvaluationModel::RandomForestMusic];

    /// `selectedModel` query value, also used as the dropdown label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationModel::Mean => "mean",
            EvaluationModel::RandomForestMusic => "random_forest_music",
        }
    }

    pub fn from_str(value: &str) -> EvaluationModel {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == value)
            .unwrap_or_default()
    }
}

impl fmt::Display for EvaluationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
