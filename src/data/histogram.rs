// ---------------------------------------------------------------------------
// Equal-width binning
// ---------------------------------------------------------------------------

/// One bar of a histogram. `end` is exclusive except for the last bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Split `[min, max]` of `values` into `bins` equal-width bins.
    ///
    /// When every value is the same the range is widened to `v ± 0.5` so the
    /// bar still has a width; an empty slice bins over `[0, 1]`.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (lo, hi) = value_range(values);
        // Divide before subtracting: `hi - lo` overflows for ranges wider
        // than f64::MAX.
        let width = hi / bins as f64 - lo / bins as f64;

        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = (v / width - lo / width).floor() as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: lo + i as f64 * width,
                end: if i + 1 == bins {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                },
                count,
            })
            .collect();

        Histogram { bins }
    }

    /// Largest bin count, 0 when nothing was binned.
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Number of values that were binned.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

fn value_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
