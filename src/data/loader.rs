use std::fs::File;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use super::error::{DataError, RowDefect};
use super::model::{ResultRecord, ResultSet};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How to split a results file into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Single-byte field separator. Defaults to a space.
    pub delimiter: u8,
    /// Skip the first row as a header.
    pub has_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b' ',
            has_header: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a results file into a [`ResultSet`].
///
/// Expected layout, one record per line, no header by default:
///
/// ```text
/// aloes 7
/// frame 4
/// ```
///
/// Columns after the second are ignored and blank lines are skipped. The
/// first malformed row aborts the whole load.
pub fn load(path: &Path, options: &LoadOptions) -> Result<ResultSet, DataError> {
    log::debug!(
        "Loading {} (delimiter {:?}, header: {})",
        path.display(),
        options.delimiter as char,
        options.has_header
    );

    let file = File::open(path).map_err(|source| DataError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .quoting(false)
        .trim(Trim::Fields)
        .from_reader(file);

    let mut records = Vec::new();

    for result in reader.byte_records() {
        let row = result.map_err(|e| classify_csv_error(path, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record = parse_row(&row).map_err(|reason| DataError::MalformedRow {
            path: path.to_path_buf(),
            line,
            content: join_fields(&row, options.delimiter),
            reason,
        })?;
        log::trace!("line {line}: {} = {}", record.identifier, record.observation);
        records.push(record);
    }

    if records.is_empty() {
        return Err(DataError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(ResultSet::new(path, records))
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

fn parse_row(row: &ByteRecord) -> Result<ResultRecord, RowDefect> {
    let (Some(identifier), Some(raw)) = (row.get(0), row.get(1)) else {
        return Err(RowDefect::TooFewFields(row.len()));
    };

    let identifier = std::str::from_utf8(identifier).map_err(|_| RowDefect::InvalidUtf8)?;
    let raw = std::str::from_utf8(raw).map_err(|_| RowDefect::InvalidUtf8)?;

    let observation: f64 = raw
        .parse()
        .map_err(|_| RowDefect::NotNumeric(raw.to_string()))?;
    if !observation.is_finite() {
        return Err(RowDefect::NotFinite(raw.to_string()));
    }

    Ok(ResultRecord {
        identifier: identifier.to_string(),
        observation,
    })
}

/// The row as it appeared in the file, invalid UTF-8 replaced.
fn join_fields(row: &ByteRecord, delimiter: u8) -> String {
    let joined = row.iter().collect::<Vec<_>>().join(&delimiter);
    String::from_utf8_lossy(&joined).into_owned()
}

/// Map a reader failure onto the error taxonomy: I/O problems mean the file
/// is unreadable, anything else is a bad row.
fn classify_csv_error(path: &Path, err: csv::Error) -> DataError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    if err.is_io_error() {
        return DataError::FileNotFound {
            path: path.to_path_buf(),
            source: err.into(),
        };
    }

    DataError::MalformedRow {
        path: path.to_path_buf(),
        line,
        content: String::new(),
        reason: RowDefect::Unreadable(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn results_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    fn load_default(contents: &str) -> Result<ResultSet, DataError> {
        let file = results_file(contents.as_bytes());
        load(file.path(), &LoadOptions::default())
    }

    #[test]
    fn loads_rows_in_file_order() {
        let set = load_default("aloes 7\nframe 4\nghost 9\n").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.observations(), vec![7.0, 4.0, 9.0]);
        let ids: Vec<&str> = set.records().iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["aloes", "frame", "ghost"]);
    }

    #[test]
    fn accepts_float_observations_and_ignores_extra_columns() {
        let set = load_default("aloes 7.5 extra stuff\nframe 4\n").unwrap();
        assert_eq!(set.observations(), vec![7.5, 4.0]);
    }

    #[test]
    fn loading_twice_is_identical() {
        let file = results_file(b"aloes 7\nframe 4\n");
        let a = load(file.path(), &LoadOptions::default()).unwrap();
        let b = load(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.txt"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound { .. }));
    }

    #[test]
    fn single_field_row_is_malformed() {
        let err = load_default("frame 4\naloes\n").unwrap_err();
        match err {
            DataError::MalformedRow {
                line,
                content,
                reason,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(content, "aloes");
                assert_eq!(reason, RowDefect::TooFewFields(1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_observation_is_malformed() {
        let err = load_default("aloes seven\n").unwrap_err();
        assert!(matches!(
            err,
            DataError::MalformedRow {
                reason: RowDefect::NotNumeric(_),
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn non_finite_observation_is_malformed() {
        let err = load_default("aloes inf\n").unwrap_err();
        assert!(matches!(
            err,
            DataError::MalformedRow {
                reason: RowDefect::NotFinite(_),
                ..
            }
        ));
    }

    #[test]
    fn invalid_utf8_is_malformed_and_shown_lossily() {
        let file = results_file(b"aloes 7\n\xff\xfe 3\n");
        let err = load(file.path(), &LoadOptions::default()).unwrap_err();
        match err {
            DataError::MalformedRow {
                line,
                content,
                reason,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(reason, RowDefect::InvalidUtf8);
                assert_eq!(content, "\u{FFFD}\u{FFFD} 3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_in_ignored_column_is_accepted() {
        let file = results_file(b"aloes 7 \xff\n");
        let set = load(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(set.observations(), vec![7.0]);
    }

    #[test]
    fn quote_characters_are_plain_text() {
        let set = load_default("\"aloes 7\nframe\" 4\nghost 9\n").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.observations(), vec![7.0, 4.0, 9.0]);
        let ids: Vec<&str> = set.records().iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["\"aloes", "frame\"", "ghost"]);
    }

    #[test]
    fn empty_file_is_empty_dataset() {
        let err = load_default("").unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset { .. }));
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let file = results_file(b"word guesses\n");
        let options = LoadOptions {
            has_header: true,
            ..LoadOptions::default()
        };
        let err = load(file.path(), &options).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset { .. }));
    }

    #[test]
    fn header_row_is_skipped() {
        let file = results_file(b"word guesses\naloes 7\n");
        let options = LoadOptions {
            has_header: true,
            ..LoadOptions::default()
        };
        let set = load(file.path(), &options).unwrap();
        assert_eq!(set.observations(), vec![7.0]);
    }

    #[test]
    fn custom_delimiter() {
        let file = results_file(b"aloes\t7\nframe\t 4\n");
        let options = LoadOptions {
            delimiter: b'\t',
            ..LoadOptions::default()
        };
        let set = load(file.path(), &options).unwrap();
        assert_eq!(set.observations(), vec![7.0, 4.0]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let set = load_default("aloes 7\n\nframe 4\n").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn diagnostic_names_file_line_and_content() {
        let file = results_file(b"aloes 7\nframe x\n");
        let err = load(file.path(), &LoadOptions::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(&file.path().display().to_string()));
        assert!(msg.contains(":2:"));
        assert!(msg.contains("frame x"));
    }
}
