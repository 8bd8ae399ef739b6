use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between opening a results file and
/// computing its summary.
#[derive(Debug, Error)]
pub enum DataError {
    /// The input path does not exist or could not be read. The OS reason is
    /// the error source, so print with `{:#}` to see it.
    #[error("{}: cannot read results file", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row failed shape or type validation.
    #[error("{}:{line}: {reason}: {content:?}", path.display())]
    MalformedRow {
        path: PathBuf,
        /// 1-based line number in the input file.
        line: u64,
        content: String,
        reason: RowDefect,
    },

    /// No observations were found (or a mean was requested on none).
    #[error("{}: no observations found", path.display())]
    EmptyDataset { path: PathBuf },
}

/// Why a row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowDefect {
    #[error("expected at least 2 fields, found {0}")]
    TooFewFields(usize),
    #[error("observation {0:?} is not a number")]
    NotNumeric(String),
    #[error("observation {0:?} is not finite")]
    NotFinite(String),
    #[error("row is not valid UTF-8")]
    InvalidUtf8,
    #[error("unreadable row: {0}")]
    Unreadable(String),
}
