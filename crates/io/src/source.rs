// Result set loading from disk.

use std::io::ErrorKind;
use std::path::Path;

use verdict_recon::document::{parse_result_set, ScopePolicy};
use verdict_recon::error::ReconError;
use verdict_recon::model::ResultSet;

/// Supplies parsed result sets to the reconciler.
pub trait SourceProvider {
    fn load(&self, path: &Path, policy: ScopePolicy) -> Result<ResultSet, ReconError>;
}

/// Reads JSON result documents from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl SourceProvider for FileSource {
    fn load(&self, path: &Path, policy: ScopePolicy) -> Result<ResultSet, ReconError> {
        let display = path.display().to_string();
        let text = read_document(path)?;
        let set = parse_result_set(&display, &text, policy)?;
        log::debug!("loaded {} records from {}", set.len(), display);
        Ok(set)
    }
}

/// Read a document as UTF-8, dropping a leading byte-order mark.
pub fn read_document(path: &Path) -> Result<String, ReconError> {
    let display = path.display().to_string();

    if path.is_dir() {
        return Err(ReconError::InputNotFound { path: display });
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReconError::InputNotFound { path: display.clone() },
        _ => ReconError::Io(format!("cannot read {display}: {e}")),
    })?;

    let text = String::from_utf8(bytes)
        .map_err(|e| ReconError::malformed(&display, format!("not valid UTF-8: {e}")))?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("golden.json");
        fs::write(&path, r#"{"TestingScope": [{"TestId": "TC1", "TestResult": "Pass"}]}"#).unwrap();

        let set = FileSource.load(&path, ScopePolicy::Permissive).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.source, path.display().to_string());
    }

    #[test]
    fn load_with_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.json");
        fs::write(&path, "\u{feff}{\"TestingScope\": []}").unwrap();

        let set = FileSource.load(&path, ScopePolicy::Strict).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = FileSource
            .load(&dir.path().join("nope.json"), ScopePolicy::Permissive)
            .unwrap_err();
        assert!(matches!(err, ReconError::InputNotFound { .. }));
        assert!(err.to_string().starts_with("file not found"));
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempdir().unwrap();
        let err = FileSource.load(dir.path(), ScopePolicy::Permissive).unwrap_err();
        assert!(matches!(err, ReconError::InputNotFound { .. }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "TestingScope: [").unwrap();

        let err = FileSource.load(&path, ScopePolicy::Permissive).unwrap_err();
        assert!(matches!(err, ReconError::MalformedInput { .. }));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.json");
        fs::write(&path, [b'{', 0xE9, b'}']).unwrap();

        let err = FileSource.load(&path, ScopePolicy::Permissive).unwrap_err();
        assert!(matches!(err, ReconError::MalformedInput { .. }));
    }
}
