/// Chart layer: per-category series, axis extents, and PNG export.

pub mod export;
pub mod scale;

use eframe::egui::Color32;

use crate::color::palette_color;
use crate::data::model::TrendPoint;
use self::scale::Extent;

/// Ticks to aim for on either axis. Actual tick positions come from the
/// 1-2-5 step nearest this density.
pub const AXIS_TICK_TARGET: usize = 10;

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// One flat type's mean-price trajectory, year-ordered, with its assigned
/// palette color.
#[derive(Debug, Clone)]
pub struct TrendSeries {
    pub flat_type: String,
    pub color: Color32,
    pub points: Vec<TrendPoint>,
}

// ---------------------------------------------------------------------------
// Chart model
// ---------------------------------------------------------------------------

/// Everything the plot and the PNG exporter need: series in first-seen
/// order with stable colors, and niced axis bounds.
#[derive(Debug, Clone)]
pub struct PriceTrendChart {
    pub series: Vec<TrendSeries>,
    pub x_bounds: Extent,
    pub y_bounds: Extent,
}

impl PriceTrendChart {
    /// Build the chart model from aggregate points, or `None` when there is
    /// nothing to draw.
    ///
    /// Colors follow the first appearance of each flat type in `points`, so
    /// the same dataset always yields the same assignment. The y axis is
    /// anchored at zero and both axes are widened to round tick boundaries.
    pub fn build(points: &[TrendPoint]) -> Option<PriceTrendChart> {
        if points.is_empty() {
            return None;
        }

        let mut series: Vec<TrendSeries> = Vec::new();
        for point in points {
            match series.iter_mut().find(|s| s.flat_type == point.flat_type) {
                Some(s) => s.points.push(point.clone()),
                None => series.push(TrendSeries {
                    flat_type: point.flat_type.clone(),
                    color: palette_color(series.len()),
                    points: vec![point.clone()],
                }),
            }
        }
        for s in &mut series {
            s.points.sort_by_key(|p| p.year);
        }

        let x_bounds = Extent::of(points.iter().map(|p| p.year as f64))?.nice(AXIS_TICK_TARGET);

        let max_price = points
            .iter()
            .map(|p| p.mean_price)
            .fold(f64::NEG_INFINITY, f64::max);
        let y_bounds = if max_price > 0.0 {
            Extent { min: 0.0, max: max_price }.nice(AXIS_TICK_TARGET)
        } else {
            Extent { min: 0.0, max: 1.0 }
        };

        Some(PriceTrendChart {
            series,
            x_bounds,
            y_bounds,
        })
    }
}

// ---------------------------------------------------------------------------
// Tick labels
// ---------------------------------------------------------------------------

/// Compact price label for axis ticks: 450000 → "450K", 1250000 → "1.25M".
pub fn short_price(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}
