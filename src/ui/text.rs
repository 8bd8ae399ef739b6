use std::fmt::Write;

use crate::data::histogram::Histogram;

/// Width of the longest bar, in characters.
pub const DEFAULT_COLUMNS: usize = 40;

/// Render a histogram as text, one bin per row:
///
/// ```text
/// 4.00..4.50     12  ########
/// ```
pub fn render(histogram: &Histogram, columns: usize) -> String {
    let max = histogram.max_count();
    let mut out = String::new();

    for bin in &histogram.bins {
        let n_chars = if max == 0 {
            0
        } else {
            ((bin.count as f64 / max as f64) * columns as f64).round() as usize
        };
        let _ = writeln!(
            out,
            "{:>8.2}..{:<8.2} {:>6}  {}",
            bin.start,
            bin.end,
            bin.count,
            "#".repeat(n_chars)
        );
    }
    out
}
