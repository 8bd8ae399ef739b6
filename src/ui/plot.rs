use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, LineStyle, Plot, VLine};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Histogram plot (central panel)
// ---------------------------------------------------------------------------

/// Render the histogram of observations in the central panel.
pub fn histogram_plot(ui: &mut Ui, chart: &ChartState) {
    let bars: Vec<Bar> = chart
        .histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!("{:.2}..{:.2}", bin.start, bin.end))
        })
        .collect();

    let bar_chart = BarChart::new(bars).name(&chart.label).color(chart.color);

    Plot::new("histogram_plot")
        .legend(Legend::default())
        .y_axis_label(chart.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(bar_chart);

            if let Some(mean) = chart.mean {
                plot_ui.vline(
                    VLine::new(mean)
                        .name(format!("mean = {mean:.1}"))
                        .color(Color32::RED)
                        .style(LineStyle::dashed_dense()),
                );
            }
        });
}
