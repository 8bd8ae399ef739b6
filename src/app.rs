use eframe::egui;

use crate::state::ChartState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HistogramApp {
    pub chart: ChartState,
}

impl HistogramApp {
    pub fn new(chart: ChartState) -> Self {
        Self { chart }
    }
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.chart);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::histogram_plot(ui, &self.chart);
        });
    }
}

/// Open a window showing `chart` and block until it is closed.
pub fn show(chart: ChartState) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let title = format!("Guess Histogram – {}", chart.title);
    log::info!("Opening chart window for {}", chart.title);

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(HistogramApp::new(chart)))),
    )
    .map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}
