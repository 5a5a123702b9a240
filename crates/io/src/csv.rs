// CSV export of comparison results

use std::path::Path;

use verdict_recon::model::Reconciliation;
use verdict_recon::style::style_for;

use crate::sink::{row_cells, write_atomic, ReportSink, HEADERS};

/// Trailing column carrying the style token, since CSV has no cell fills.
pub const COLOUR_HEADER: &str = "Colour";

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

/// Render comparison rows as CSV text.
pub fn to_csv_string(result: &Reconciliation) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = HEADERS.to_vec();
    header.push(COLOUR_HEADER);
    writer.write_record(&header).map_err(|e| e.to_string())?;

    for row in &result.rows {
        let colour = style_for(row.category).map(|t| t.as_str()).unwrap_or("");
        let cells = row_cells(row);
        writer
            .write_record(cells.iter().map(String::as_str).chain(std::iter::once(colour)))
            .map_err(|e| e.to_string())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

impl ReportSink for CsvSink {
    fn write(&self, result: &Reconciliation, path: &Path) -> Result<(), String> {
        // Render fully before touching the filesystem.
        let text = to_csv_string(result)?;
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
    fn test_csv_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let golden = ResultSet::new(
            "golden",
            vec![
                TestOutcomeRecord::new("TC1", "Pass"),
                TestOutcomeRecord::new("TC2", "Fail"),
                TestOutcomeRecord::new("TC,3", "Pass"),
            ],
        );
        let report = ResultSet::new(
            "report",
            vec![TestOutcomeRecord::new("TC1", "Pass"), TestOutcomeRecord::new("TC2", "Blocked")],
        );
        let result = verdict_recon::reconcile(&golden, &report);

        CsvSink.write(&result, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "SN,TestId,Golden TestResult,Report TestResult,Comments,Colour");
        assert_eq!(lines[1], "1,TC1,Pass,Pass,,green");
        assert_eq!(lines[2], "2,TC2,Fail,Blocked,\"Test Result mismatch: Golden: Fail, Report: Blocked\",");
        assert_eq!(lines[3], "3,\"TC,3\",Pass,Missing,Test didn't execute,yellow");
        assert_eq!(lines.len(), 4);
    }
}
