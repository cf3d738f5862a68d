use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::chart::short_price;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Price-trend plot (central panel)
// ---------------------------------------------------------------------------

/// Render the mean-price-per-year plot in the central panel.
///
/// One line per flat type in its palette color, with a legend and a hover
/// readout of the pointer's (year, price) position. The view is fitted to
/// the chart bounds once per rebuild, then left to free pan and zoom.
pub fn trend_plot(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data file to view price trends  (File → Open…)");
        });
        return;
    }

    let reset_view = std::mem::take(&mut state.reset_view);
    let chart = &state.chart;
    let hidden = &state.hidden_types;

    Plot::new("price_trend")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Mean resale price (S$)")
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(|mark, _range| short_price(mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                format!("Year: {:.0}\nPrice: ${:.2}", value.x, value.y)
            } else {
                format!("{name}\nYear: {:.0}\nPrice: ${:.2}", value.x, value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let Some(chart) = chart else {
                return;
            };

            if reset_view {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [chart.x_bounds.min, chart.y_bounds.min],
                    [chart.x_bounds.max, chart.y_bounds.max],
                ));
            }

            for series in &chart.series {
                if hidden.contains(&series.flat_type) {
                    continue;
                }

                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [p.year as f64, p.mean_price])
                    .collect();

                let line = Line::new(points)
                    .name(&series.flat_type)
                    .color(series.color)
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}
