use eframe::egui::Color32;

use crate::data::histogram::Histogram;
use crate::data::model::{ResultSet, Summary};

// ---------------------------------------------------------------------------
// Chart options
// ---------------------------------------------------------------------------

/// Presentation settings chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub bins: usize,
    /// Legend entry for the bars.
    pub label: String,
    pub y_label: String,
    pub color: Color32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            bins: 50,
            label: String::new(),
            y_label: "Guesses".to_string(),
            color: Color32::BLUE,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything the renderer needs to draw one histogram.
///
/// Built once from a loaded [`ResultSet`] and handed to the window or the
/// text renderer; nothing here refers back to the data layer.
#[derive(Debug, Clone)]
pub struct ChartState {
    /// Window title, the input file name.
    pub title: String,
    pub label: String,
    pub y_label: String,
    pub color: Color32,
    pub histogram: Histogram,
    /// Rounded mean, drawn as a marker when present.
    pub mean: Option<f64>,
}

impl ChartState {
    pub fn new(results: &ResultSet, summary: Option<&Summary>, options: &ChartOptions) -> Self {
        let title = results
            .source()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| results.source().display().to_string());

        let label = if options.label.is_empty() {
            default_label(results)
        } else {
            options.label.clone()
        };

        Self {
            title,
            label,
            y_label: options.y_label.clone(),
            color: options.color,
            histogram: Histogram::from_values(&results.observations(), options.bins),
            mean: summary.map(|s| s.mean),
        }
    }

    /// One-line description for status bars.
    pub fn status_line(&self) -> String {
        let count = self.histogram.total();
        match self.mean {
            Some(mean) => format!("{}: {count} observations, mean {mean:.1}", self.title),
            None => format!("{}: {count} observations", self.title),
        }
    }
}

/// File stem of the input, e.g. `results_aloes_worst_sorted`.
fn default_label(results: &ResultSet) -> String {
    results
        .source()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "observations".to_string())
}
