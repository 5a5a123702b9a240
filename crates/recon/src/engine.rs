use crate::model::{ComparisonRow, Reconciliation, ReportResult, ResultSet, Warning};
use crate::summary::compute_summary;

/// Remark for a golden test with no counterpart in the report.
pub const REMARK_NOT_EXECUTED: &str = "Test didn't execute";

/// How golden and report result labels are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Byte-for-byte equality: "PASS" and "Pass" are a mismatch.
    #[default]
    Exact,
    /// Labels that differ only in case are a match.
    Insensitive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    pub case: CaseSensitivity,
}

impl CompareOptions {
    fn results_equal(&self, golden: Option<&str>, report: &str) -> bool {
        let Some(golden) = golden else {
            return false;
        };
        match self.case {
            CaseSensitivity::Exact => golden == report,
            CaseSensitivity::Insensitive => golden.to_lowercase() == report.to_lowercase(),
        }
    }
}

/// Mismatch remark embedding both values verbatim.
pub fn mismatch_remark(golden: &str, report: &str) -> String {
    format!("Test Result mismatch: Golden: {golden}, Report: {report}")
}

/// Reconcile with default (exact) comparison.
pub fn reconcile(golden: &ResultSet, report: &ResultSet) -> Reconciliation {
    reconcile_with(golden, report, &CompareOptions::default())
}

/// Match every golden record against the report by test id.
///
/// Rows come out in golden order, one per golden record. Report records that
/// share an id resolve to the last one seen. Neither input is modified.
pub fn reconcile_with(golden: &ResultSet, report: &ResultSet, options: &CompareOptions) -> Reconciliation {
    let lookup = report.lookup();

    let mut warnings = Vec::new();
    if golden.len() != report.len() {
        log::warn!(
            "test count mismatch: golden '{}' has {}, report '{}' has {}",
            golden.source,
            golden.len(),
            report.source,
            report.len()
        );
        warnings.push(Warning::CountMismatch {
            golden: golden.len(),
            report: report.len(),
        });
    }

    let rows: Vec<ComparisonRow> = golden
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let golden_result = record.result.as_deref();
            let found = lookup.get(&record.test_id.as_deref()).copied().flatten();

            let (report_result, remark) = match found {
                None => (ReportResult::Missing, REMARK_NOT_EXECUTED.to_string()),
                Some(report_label) if options.results_equal(golden_result, report_label) => {
                    (ReportResult::Found(report_label.to_string()), String::new())
                }
                Some(report_label) => (
                    ReportResult::Found(report_label.to_string()),
                    mismatch_remark(golden_result.unwrap_or(""), report_label),
                ),
            };

            ComparisonRow::new(
                idx + 1,
                record.test_id.clone(),
                record.result.clone(),
                report_result,
                remark,
            )
        })
        .collect();

    let summary = compute_summary(&rows, golden, report);
    log::debug!(
        "reconciled {} golden vs {} report records: {} matched, {} mismatched, {} missing",
        summary.golden_count,
        summary.report_count,
        summary.matched,
        summary.mismatched,
        summary.missing
    );

    Reconciliation {
        summary,
        warnings,
        rows,
    }
}
