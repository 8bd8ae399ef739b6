use super::error::DataError;
use super::model::{ResultSet, Summary};

/// Arithmetic mean of every observation, rounded to one decimal place.
pub fn summarize(results: &ResultSet) -> Result<Summary, DataError> {
    if results.is_empty() {
        return Err(DataError::EmptyDataset {
            path: results.source().to_path_buf(),
        });
    }

    let count = results.len();
    let sum: f64 = results.records().iter().map(|r| r.observation).sum();

    Ok(Summary {
        count,
        mean: round_to_tenth(sum / count as f64),
    })
}

/// Half-away-from-zero rounding to one decimal.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
