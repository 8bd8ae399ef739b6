use eframe::egui::Ui;

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar above the plot.
pub fn top_bar(ui: &mut Ui, chart: &ChartState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(&chart.label);
        ui.separator();
        ui.label(chart.status_line());
    });
}
