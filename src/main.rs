mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};

use cli::Args;
use data::{loader, summary};
use state::ChartState;

fn main() -> ExitCode {
    let args = Args::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{}", diagnostic(&e));
            ExitCode::FAILURE
        }
    }
}

/// The single stderr line for a failed run.
fn diagnostic(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

fn run(args: &Args) -> Result<()> {
    let results = loader::load(&args.input, &args.load_options())?;

    let summary = if args.wants_summary() {
        Some(summary::summarize(&results)?)
    } else {
        None
    };

    if let Some(summary) = &summary {
        if args.print_mean {
            println!("{summary}");
        }
        if args.json {
            let json = serde_json::to_string(summary).context("serializing summary")?;
            println!("{json}");
        }
    }

    let chart = ChartState::new(&results, summary.as_ref(), &args.chart_options());

    if args.no_display {
        print!("{}", ui::text::render(&chart.histogram, ui::text::DEFAULT_COLUMNS));
        return Ok(());
    }

    app::show(chart)
}
