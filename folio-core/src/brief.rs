//! Content brief loading.
//!
//! A brief is a delimited text file with a header row and one row per page.
//! Only the `type` column is required; every other column defaults to empty.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::BriefError;
use crate::types::BriefRow;

/// Load a brief, picking the delimiter from the file extension
/// (tab for `.tsv`, comma otherwise).
pub fn load_brief(path: &Path) -> Result<Vec<BriefRow>, BriefError> {
    load_brief_with(path, delimiter_for(path))
}

/// Load a brief with an explicit field delimiter.
///
/// Cells are trimmed and short rows are accepted, their missing cells read
/// as empty strings.
pub fn load_brief_with(path: &Path, delimiter: u8) -> Result<Vec<BriefRow>, BriefError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BriefError::NotFound {
            path: path.to_path_buf(),
        },
        _ => BriefError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let csv_err = |source: csv::Error| BriefError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    if !headers.iter().any(|h| h == "type") {
        return Err(BriefError::MissingColumn {
            path: path.to_path_buf(),
            column: "type",
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let mut record = record.map_err(csv_err)?;
        // Pad short rows so every header has a (possibly empty) cell.
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row: BriefRow = record.deserialize(Some(&headers)).map_err(csv_err)?;
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded brief");
    Ok(rows)
}

fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::types::RowKind;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    #[test]
    fn reads_rows_with_header() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            "brief.csv",
            "type,title,photo_path,facts\n\
             cover,Spring Issue,cover.jpg,\n\
             spread,Interview,\"a.jpg|b.jpg\",born 1990|lives in Kyiv\n",
        );
        let rows = load_brief(&path).expect("load");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, RowKind::Cover);
        assert_eq!(rows[0].title, "Spring Issue");
        assert_eq!(rows[1].photo_path, "a.jpg|b.jpg");
        assert_eq!(rows[1].facts, "born 1990|lives in Kyiv");
        assert_eq!(rows[1].quote, "");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_brief(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, BriefError::NotFound { .. }));
    }

    #[test]
    fn header_without_type_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "brief.csv", "title,photo_path\nHello,a.jpg\n");
        let err = load_brief(&path).unwrap_err();
        assert!(matches!(err, BriefError::MissingColumn { column: "type", .. }));
    }

    #[test]
    fn short_rows_default_to_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "brief.csv", "type,title,quote\nspread,Only title\n");
        let rows = load_brief(&path).expect("load");
        assert_eq!(rows[0].title, "Only title");
        assert_eq!(rows[0].quote, "");
    }

    #[test]
    fn tsv_extension_uses_tabs() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "brief.tsv", "type\ttitle\ncover\tTabbed, with comma\n");
        let rows = load_brief(&path).expect("load");
        assert_eq!(rows[0].title, "Tabbed, with comma");
    }

    #[test]
    fn unknown_type_is_kept_as_other() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "brief.csv", "type,title\nadvert,Buy now\n");
        let rows = load_brief(&path).expect("load");
        assert_eq!(rows[0].kind, RowKind::Other);
    }

    #[test]
    fn header_only_brief_is_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "brief.csv", "type,title\n");
        assert!(load_brief(&path).expect("load").is_empty());
    }
}
