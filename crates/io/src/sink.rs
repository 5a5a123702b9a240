// Report sinks: render a Reconciliation as a persisted artifact.

use std::path::{Path, PathBuf};

use verdict_recon::model::{ComparisonRow, Reconciliation};
use verdict_recon::style::Palette;

use crate::{csv::CsvSink, json::JsonSink, xlsx::XlsxSink};

/// Column headers shared by the tabular sinks.
pub const HEADERS: [&str; 5] = ["SN", "TestId", "Golden TestResult", "Report TestResult", "Comments"];

/// Default artifact name when no output path is given.
pub const DEFAULT_OUTPUT: &str = "ComparisonResults.xlsx";

pub trait ReportSink {
    /// Write the artifact to `path`. On error `path` is untouched and no
    /// temp file is left behind.
    fn write(&self, result: &Reconciliation, path: &Path) -> Result<(), String>;
}

/// Sibling temp path used while an artifact is being written.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to a sibling `.tmp` file, then rename over `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let tmp = temp_path(path);
    if let Err(e) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(format!("Failed to write {}: {}", path.display(), e));
    }
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        format!("Failed to move temp file into place at {}: {}", path.display(), e)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Some(Self::Xlsx),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Infer from file extension; unknown or missing extensions fall back to xlsx.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(Self::Xlsx)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn sink(&self, palette: Palette) -> Box<dyn ReportSink> {
        match self {
            Self::Xlsx => Box::new(XlsxSink::new(palette)),
            Self::Csv => Box::new(CsvSink),
            Self::Json => Box::new(JsonSink),
        }
    }
}

/// The five display cells of a row, in header order.
pub(crate) fn row_cells(row: &ComparisonRow) -> [String; 5] {
    [
        row.sequence_number.to_string(),
        row.test_id_text().to_string(),
        row.golden_text().to_string(),
        row.report_result.to_string(),
        row.remark.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("out.csv")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("OUT.JSON")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("ComparisonResults.xlsx")), ReportFormat::Xlsx);
        assert_eq!(ReportFormat::from_path(Path::new("results")), ReportFormat::Xlsx);
        assert_eq!(ReportFormat::from_path(Path::new("results.txt")), ReportFormat::Xlsx);
    }

    #[test]
    fn parse_format() {
        assert_eq!(ReportFormat::parse("CSV"), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::parse("pdf"), None);
        assert_eq!(ReportFormat::Json.extension(), "json");
    }

    #[test]
    fn atomic_write_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn failed_write_leaves_target_and_no_temp() {
        let dir = tempfile::tempdir().unwrap();

        // Missing parent directory: nothing can be created.
        let path = dir.path().join("no-such-dir").join("result.json");
        assert!(write_atomic(&path, b"{}").is_err());
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());

        // Rename over a directory fails after the temp file was written.
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();
        assert!(write_atomic(&path, b"data").is_err());
        assert!(path.is_dir());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn every_sink_cleans_up_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = verdict_recon::reconcile(&Default::default(), &Default::default());

        for format in [ReportFormat::Xlsx, ReportFormat::Csv, ReportFormat::Json] {
            let path = dir.path().join(format!("taken.{}", format.extension()));
            std::fs::create_dir(&path).unwrap();
            assert!(format.sink(Palette::default()).write(&result, &path).is_err());
            assert!(path.is_dir());
            assert!(!temp_path(&path).exists(), "{format:?} left a temp file");
        }
    }
}
