use std::path::Path;

use anyhow::anyhow;
use plotters::prelude::*;

use crate::color::to_rgb;
use crate::data::model::TrendPoint;

use super::{short_price, PriceTrendChart, AXIS_TICK_TARGET};

/// Exported image size in pixels.
pub const CHART_SIZE: (u32, u32) = (800, 500);

const MARGIN_TOP: u32 = 20;
const MARGIN_RIGHT: u32 = 30;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 60;

// ---------------------------------------------------------------------------
// PNG export
// ---------------------------------------------------------------------------

/// Render the chart to a PNG file.
pub fn save_png(chart: &PriceTrendChart, town: &str, path: &Path) -> anyhow::Result<()> {
    let backend = BitMapBackend::new(path, CHART_SIZE);
    draw_price_trend(backend, chart, town)
        .map_err(|e| anyhow!("chart rendering failed: {e}"))?;
    Ok(())
}

/// Draw the trend chart onto any plotters backend.
pub fn draw_price_trend<'a, DB>(
    backend: DB,
    chart: &PriceTrendChart,
    town: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    DB: 'a + DrawingBackend,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .margin_top(MARGIN_TOP)
        .margin_right(MARGIN_RIGHT)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .caption(
            format!("{town} resale price trends"),
            ("sans-serif", 20.0).into_font(),
        )
        .build_cartesian_2d(
            chart.x_bounds.min..chart.x_bounds.max,
            chart.y_bounds.min..chart.y_bounds.max,
        )?;

    ctx.configure_mesh()
        .x_desc("Year")
        .y_desc("Mean resale price (S$)")
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| short_price(*y))
        .x_labels(AXIS_TICK_TARGET)
        .draw()?;

    for series in &chart.series {
        let rgb = to_rgb(series.color);
        ctx.draw_series(LineSeries::new(
            series.points.iter().map(xy),
            rgb.stroke_width(2),
        ))?
        .label(series.flat_type.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 16, y)], rgb.stroke_width(2))
        });
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .draw()?;

    // present() rather than relying on drop, so an IO failure surfaces.
    root.present()?;
    Ok(())
}

fn xy(point: &TrendPoint) -> (f64, f64) {
    (point.year as f64, point.mean_price)
}
