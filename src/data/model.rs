use std::path::{Path, PathBuf};

use serde::Serialize;

// ---------------------------------------------------------------------------
// ResultRecord – one row of a results file
// ---------------------------------------------------------------------------

/// One `(identifier, observation)` pair, e.g. `aloes 7`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// First column: the label, typically the solved word.
    pub identifier: String,
    /// Second column: the count of interest (number of guesses). Always finite.
    pub observation: f64,
}

// ---------------------------------------------------------------------------
// ResultSet – all records from one load
// ---------------------------------------------------------------------------

/// Records in file order. Read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    source: PathBuf,
    records: Vec<ResultRecord>,
}

impl ResultSet {
    pub fn new(source: impl Into<PathBuf>, records: Vec<ResultRecord>) -> Self {
        ResultSet {
            source: source.into(),
            records,
        }
    }

    /// Path the records were read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Observation values in file order.
    pub fn observations(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.observation).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Summary – derived scalar
// ---------------------------------------------------------------------------

/// Mean of all observations, already rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.mean)
    }
}
