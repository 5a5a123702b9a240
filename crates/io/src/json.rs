// JSON export of comparison results

use std::path::Path;

use serde::Serialize;
use verdict_recon::model::{ComparisonRow, Reconciliation, Warning};
use verdict_recon::summary::ReconSummary;

use crate::sink::{write_atomic, ReportSink};

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub engine_version: String,
    pub generated_at: String,
}

/// Stable JSON envelope for `--json` output and `.json` artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope<'a> {
    pub meta: ReportMeta,
    pub summary: &'a ReconSummary,
    pub warnings: &'a [Warning],
    pub rows: &'a [ComparisonRow],
}

impl<'a> ReportEnvelope<'a> {
    pub fn new(result: &'a Reconciliation) -> Self {
        Self {
            meta: ReportMeta {
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
            summary: &result.summary,
            warnings: &result.warnings,
            rows: &result.rows,
        }
    }
}

pub fn to_json_string(result: &Reconciliation) -> Result<String, String> {
    serde_json::to_string_pretty(&ReportEnvelope::new(result)).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSink;

impl ReportSink for JsonSink {
    fn write(&self, result: &Reconciliation, path: &Path) -> Result<(), String> {
        let text = to_json_string(result)?;
        write_atomic(path, text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use verdict_recon::model::{ResultSet, TestOutcomeRecord};

    #[test]
    fn test_json_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");

        let golden = ResultSet::new(
            "golden",
            vec![TestOutcomeRecord::new("TC1", "Pass"), TestOutcomeRecord::new("TC2", "Fail")],
        );
        let report = ResultSet::new("report", vec![TestOutcomeRecord::new("TC1", "Pass")]);
        let result = verdict_recon::reconcile(&golden, &report);

        JsonSink.write(&result, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["meta"]["engine_version"], env!("CARGO_PKG_VERSION"));
        assert!(parsed["meta"]["generated_at"].is_string());
        assert_eq!(parsed["summary"]["golden_count"], 2);
        assert_eq!(parsed["summary"]["missing"], 1);
        assert_eq!(parsed["warnings"][0]["kind"], "count_mismatch");
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["rows"][1]["report_result"], "Missing");
        assert_eq!(parsed["rows"][1]["remark"], "Test didn't execute");
    }
}
