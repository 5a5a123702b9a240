use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::model::{ComparisonRow, ResultSet};

/// Key used in `category_counts` for rows whose report result has no category.
pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconSummary {
    pub golden_count: usize,
    pub report_count: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub missing: usize,
    /// Distinct report ids that never appear in the golden set. They produce
    /// no rows; the count is informational.
    pub unexpected: usize,
    pub category_counts: BTreeMap<String, usize>,
}

impl ReconSummary {
    /// True when every golden test was found with an identical result.
    pub fn is_clean(&self) -> bool {
        self.mismatched == 0 && self.missing == 0 && self.golden_count == self.report_count
    }
}

/// Compute summary statistics from comparison rows.
pub fn compute_summary(rows: &[ComparisonRow], golden: &ResultSet, report: &ResultSet) -> ReconSummary {
    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut matched = 0;
    let mut mismatched = 0;
    let mut missing = 0;

    for row in rows {
        let key = row.category.map(|c| c.as_str()).unwrap_or(UNCATEGORIZED);
        *category_counts.entry(key.to_string()).or_insert(0) += 1;

        if row.report_result.is_missing() {
            missing += 1;
        } else if row.is_match() {
            matched += 1;
        } else {
            mismatched += 1;
        }
    }

    let golden_ids: HashSet<Option<&str>> = golden.iter().map(|r| r.test_id.as_deref()).collect();
    let unexpected = report
        .iter()
        .map(|r| r.test_id.as_deref())
        .filter(|id| !golden_ids.contains(id))
        .collect::<HashSet<_>>()
        .len();

    ReconSummary {
        golden_count: golden.len(),
        report_count: report.len(),
        matched,
        mismatched,
        missing,
        unexpected,
        category_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReportResult, TestOutcomeRecord};

    fn row(sn: usize, remark: &str, report: ReportResult) -> ComparisonRow {
        ComparisonRow::new(sn, Some(format!("TC{sn}")), Some("Pass".into()), report, remark.into())
    }

    #[test]
    fn summary_counts() {
        let rows = vec![
            row(1, "", ReportResult::Found("Pass".into())),
            row(2, "", ReportResult::Found("Pass".into())),
            row(3, "Test Result mismatch: Golden: Pass, Report: Fail", ReportResult::Found("Fail".into())),
            row(4, "Test didn't execute", ReportResult::Missing),
            row(5, "Test Result mismatch: Golden: Pass, Report: Skipped", ReportResult::Found("Skipped".into())),
        ];
        let golden = ResultSet::new("golden", (1..=5).map(|i| TestOutcomeRecord::new(format!("TC{i}"), "Pass")).collect());
        let report = ResultSet::new(
            "report",
            vec![
                TestOutcomeRecord::new("TC1", "Pass"),
                TestOutcomeRecord::new("TC2", "Pass"),
                TestOutcomeRecord::new("TC3", "Fail"),
                TestOutcomeRecord::new("TC5", "Skipped"),
                TestOutcomeRecord::new("TC9", "Pass"),
                TestOutcomeRecord::new("TC9", "Fail"),
            ],
        );

        let summary = compute_summary(&rows, &golden, &report);
        assert_eq!(summary.golden_count, 5);
        assert_eq!(summary.report_count, 6);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.mismatched, 2);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.unexpected, 1);
        assert_eq!(summary.category_counts["pass"], 2);
        assert_eq!(summary.category_counts["fail"], 1);
        assert_eq!(summary.category_counts["missing"], 1);
        assert_eq!(summary.category_counts[UNCATEGORIZED], 1);
        assert!(!summary.is_clean());
    }

    #[test]
    fn empty_is_clean() {
        let summary = compute_summary(&[], &ResultSet::default(), &ResultSet::default());
        assert!(summary.is_clean());
        assert!(summary.category_counts.is_empty());
    }
}
