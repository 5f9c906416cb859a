//! Season file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all season CSV files in a directory.
///
/// Returns files sorted by file name; this order is the iteration order
/// for the whole pipeline run, so issue order and output row order both
/// follow it.
pub fn list_season_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// File name component as UTF-8, empty when unavailable.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn lists_only_csv_files_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        for name in &["season_1516.csv", "season_1415.csv", "notes.txt", "season_1617.CSV"] {
            std::fs::write(dir.path().join(name), "Date,HomeTeam\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("archive")).unwrap();

        let files = list_season_files(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name_of(p)).collect();
        assert_eq!(
            names,
            vec!["season_1415.csv", "season_1516.csv", "season_1617.CSV"]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            list_season_files(&missing),
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }
}
