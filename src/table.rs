//! Delimited measurement-table loading shared by the series and timing readers
//!
//! Every input file is plain comma-delimited text with a header row naming
//! its columns. Readers ask for the two columns they need by name and get
//! back line-numbered raw fields, so parse failures can point at the exact
//! row.

use std::path::Path;

use thiserror::Error;

/// Errors for measurement-file loading
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{path}: {message}")]
    Read { path: String, message: String },

    #[error("{path}: missing required column '{column}' (found: {found})")]
    MissingColumn {
        path: String,
        column: String,
        found: String,
    },

    #[error("{path}:{line}: {message}")]
    Malformed {
        path: String,
        line: usize,
        message: String,
    },

    #[error("{path}: header only, no data rows")]
    Empty { path: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// A data row: 1-based line number plus the two requested fields.
pub type Row = (usize, String, String);

/// Read the two required columns from a headered delimited file.
///
/// Column lookup is exact after whitespace trimming. Rows come back in file
/// order with their line numbers; at least one data row is required.
pub fn read_columns(path: &Path, first: &str, second: &str) -> Result<Vec<Row>> {
    let display = path.display().to_string();

    let mut reader = csv::Reader::from_path(path).map_err(|e| LoadError::Read {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Read {
            path: display.clone(),
            message: format!("failed to read header row: {e}"),
        })?
        .clone();

    let column_index = |column: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| LoadError::MissingColumn {
                path: display.clone(),
                column: column.to_string(),
                found: headers.iter().map(str::trim).collect::<Vec<_>>().join(","),
            })
    };

    let first_idx = column_index(first)?;
    let second_idx = column_index(second)?;

    let mut rows = Vec::new();
    let mut line = 2; // data starts after the header row

    for record in reader.records() {
        let record = record.map_err(|e| LoadError::Malformed {
            path: display.clone(),
            line,
            message: e.to_string(),
        })?;

        let field = |idx: usize| -> Result<String> {
            record
                .get(idx)
                .map(|f| f.trim().to_string())
                .ok_or_else(|| LoadError::Malformed {
                    path: display.clone(),
                    line,
                    message: format!("row has {} fields, need {}", record.len(), idx + 1),
                })
        };

        rows.push((line, field(first_idx)?, field(second_idx)?));
        line += 1;
    }

    if rows.is_empty() {
        return Err(LoadError::Empty { path: display });
    }

    Ok(rows)
}

/// Parse a field as a finite, non-negative float.
pub(crate) fn parse_non_negative(path: &Path, line: usize, column: &str, raw: &str) -> Result<f32> {
    let value: f32 = raw.parse().map_err(|_| LoadError::Malformed {
        path: path.display().to_string(),
        line,
        message: format!("column '{column}': '{raw}' is not a number"),
    })?;

    if value < 0.0 || !value.is_finite() {
        return Err(LoadError::Malformed {
            path: path.display().to_string(),
            line,
            message: format!("column '{column}': '{raw}' is out of range (want >= 0)"),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_columns_basic() {
        let file = write_file("elapsed_time,fps\n0.5,12.0\n1.0,13.5\n");
        let rows = read_columns(file.path(), "elapsed_time", "fps").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (2, "0.5".to_string(), "12.0".to_string()));
        assert_eq!(rows[1], (3, "1.0".to_string(), "13.5".to_string()));
    }

    #[test]
    fn test_read_columns_ignores_extra_columns() {
        let file = write_file("frame,elapsed_time,fps\n1,0.5,12.0\n");
        let rows = read_columns(file.path(), "elapsed_time", "fps").unwrap();
        assert_eq!(rows[0].1, "0.5");
        assert_eq!(rows[0].2, "12.0");
    }

    #[test]
    fn test_read_columns_column_order_does_not_matter() {
        let file = write_file("fps,elapsed_time\n12.0,0.5\n");
        let rows = read_columns(file.path(), "elapsed_time", "fps").unwrap();
        assert_eq!(rows[0].1, "0.5");
        assert_eq!(rows[0].2, "12.0");
    }

    #[test]
    fn test_read_columns_trims_whitespace() {
        let file = write_file("elapsed_time, fps\n0.5, 12.0\n");
        let rows = read_columns(file.path(), "elapsed_time", "fps").unwrap();
        assert_eq!(rows[0].2, "12.0");
    }

    #[test]
    fn test_read_columns_missing_column_lists_found() {
        let file = write_file("time,frames\n0.5,12.0\n");
        let err = read_columns(file.path(), "elapsed_time", "fps").unwrap_err();
        match err {
            LoadError::MissingColumn { column, found, .. } => {
                assert_eq!(column, "elapsed_time");
                assert!(found.contains("time"));
                assert!(found.contains("frames"));
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_read_columns_header_only_is_empty() {
        let file = write_file("elapsed_time,fps\n");
        let err = read_columns(file.path(), "elapsed_time", "fps").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn test_read_columns_short_row_is_malformed() {
        let file = write_file("elapsed_time,fps\n0.5\n");
        let err = read_columns(file.path(), "elapsed_time", "fps").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_read_columns_missing_file() {
        let err =
            read_columns(Path::new("/nonexistent/fps_seq.txt"), "elapsed_time", "fps").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_parse_non_negative_accepts_zero() {
        let value = parse_non_negative(Path::new("x"), 2, "fps", "0").unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_parse_non_negative_rejects_negative() {
        let err = parse_non_negative(Path::new("x"), 3, "fps", "-1.5").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 3, .. }));
    }

    #[test]
    fn test_parse_non_negative_rejects_text() {
        let err = parse_non_negative(Path::new("x"), 2, "fps", "fast").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_parse_non_negative_rejects_nan() {
        let err = parse_non_negative(Path::new("x"), 2, "fps", "NaN").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_error_message_includes_path_and_line() {
        let err = parse_non_negative(Path::new("fps_seq.txt"), 4, "fps", "oops").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("fps_seq.txt:4"));
        assert!(message.contains("oops"));
    }
}
