use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::classify::{classify, Outcome};
use crate::summary::ReconSummary;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One test outcome as it appears in a result document.
///
/// Both fields are optional: a record missing `TestId` or `TestResult` still
/// flows through reconciliation as an unmatched / uncategorized value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TestOutcomeRecord {
    pub test_id: Option<String>,
    pub result: Option<String>,
}

impl TestOutcomeRecord {
    pub fn new(test_id: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            test_id: Some(test_id.into()),
            result: Some(result.into()),
        }
    }
}

/// Ordered result set loaded from one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    /// Where the set came from (file path or label), used in messages only.
    pub source: String,
    pub records: Vec<TestOutcomeRecord>,
}

impl ResultSet {
    pub fn new(source: impl Into<String>, records: Vec<TestOutcomeRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestOutcomeRecord> {
        self.records.iter()
    }

    /// Index test id → result. Later records overwrite earlier ones.
    pub fn lookup(&self) -> HashMap<Option<&str>, Option<&str>> {
        self.records
            .iter()
            .map(|r| (r.test_id.as_deref(), r.result.as_deref()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a TestOutcomeRecord;
    type IntoIter = std::slice::Iter<'a, TestOutcomeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Report side of a comparison row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportResult {
    Found(String),
    /// No report record shares the golden test id.
    Missing,
}

impl ReportResult {
    pub const MISSING: &'static str = "Missing";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(label) => label,
            Self::Missing => Self::MISSING,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl std::fmt::Display for ReportResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    #[serde(rename = "sn")]
    pub sequence_number: usize,
    pub test_id: Option<String>,
    pub golden_result: Option<String>,
    pub report_result: ReportResult,
    pub remark: String,
    pub category: Option<Outcome>,
}

impl ComparisonRow {
    pub fn new(
        sequence_number: usize,
        test_id: Option<String>,
        golden_result: Option<String>,
        report_result: ReportResult,
        remark: String,
    ) -> Self {
        let category = classify(&report_result);
        Self {
            sequence_number,
            test_id,
            golden_result,
            report_result,
            remark,
            category,
        }
    }

    /// Test id as display text; absent ids render empty.
    pub fn test_id_text(&self) -> &str {
        self.test_id.as_deref().unwrap_or("")
    }

    pub fn golden_text(&self) -> &str {
        self.golden_result.as_deref().unwrap_or("")
    }

    pub fn is_match(&self) -> bool {
        self.remark.is_empty()
    }
}

/// Non-fatal conditions raised during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    CountMismatch { golden: usize, report: usize },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountMismatch { golden, report } => write!(
                f,
                "test count mismatch between golden report ({golden}) and uploaded report ({report})"
            ),
        }
    }
}

/// Everything one reconciliation run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub summary: ReconSummary,
    pub warnings: Vec<Warning>,
    pub rows: Vec<ComparisonRow>,
}

impl Reconciliation {
    pub fn has_count_mismatch(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, Warning::CountMismatch { .. }))
    }
}
