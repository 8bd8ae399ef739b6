//! Command-line interface argument parsing.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui::Color32;

use crate::color::parse_color;
use crate::data::loader::LoadOptions;
use crate::state::ChartOptions;

/// Plot a histogram of the observation column of a solver results file.
///
/// Each input line is `<identifier> <observation>`, e.g. `aloes 7`.
///
/// Examples:
///   guess-histogram --input results.txt
///   guess-histogram --input results_aloes_worst_sorted.txt --bins 50 \
///       --label "aloes, worst case cost, sorted word bank" --print-mean
///   guess-histogram --input results.csv --delimiter , --has-header --no-display
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Results file to load
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Number of histogram bins
    #[arg(short, long, default_value = "50", value_parser = parse_bins)]
    pub bins: usize,

    /// Legend label for the histogram (defaults to the file name)
    #[arg(short, long, value_name = "TEXT")]
    pub label: Option<String>,

    /// Print the mean observation, rounded to one decimal place
    #[arg(long)]
    pub print_mean: bool,

    /// Print the summary as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Field separator: a single ASCII character, `space` or `tab`
    #[arg(short, long, default_value = "space", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Skip the first line as a header
    #[arg(long)]
    pub has_header: bool,

    /// Bar colour, a CSS name or #rrggbb
    #[arg(long, default_value = "blue", value_parser = parse_color)]
    pub color: Color32,

    /// Y-axis caption
    #[arg(long, default_value = "Guesses", value_name = "TEXT")]
    pub y_label: String,

    /// Print a text histogram instead of opening a window
    #[arg(long)]
    pub no_display: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter,
            has_header: self.has_header,
        }
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            bins: self.bins,
            label: self.label.clone().unwrap_or_default(),
            y_label: self.y_label.clone(),
            color: self.color,
        }
    }

    /// Whether a summary has to be computed at all.
    pub fn wants_summary(&self) -> bool {
        self.print_mean || self.json
    }

    /// Default `env_logger` filter; `RUST_LOG` takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

fn parse_bins(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("bin count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid bin count: {e}")),
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "space" => return Ok(b' '),
        "tab" | "\\t" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "delimiter must be a single ASCII character, `space` or `tab`, got {s:?}"
        )),
    }
}
