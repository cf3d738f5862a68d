use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::chart::PriceTrendChart;
use crate::data::aggregate::aggregate;
use crate::data::filter::filter_town;
use crate::data::model::{ResaleDataset, TrendPoint};

/// Town selected before the user touches anything.
pub const DEFAULT_TOWN: &str = "PUNGGOL";

/// Dataset picked up automatically at startup when present.
pub const DEFAULT_DATA_PATH: &str = "data/resale-flat-prices.csv";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Field-quality counts for the currently selected town.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TownSummary {
    /// Rows matching the town filter.
    pub matched: usize,
    /// Matched rows with no usable month.
    pub missing_month: usize,
    /// Matched rows with no usable price.
    pub missing_price: usize,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is opened).
    pub dataset: Option<ResaleDataset>,

    /// Where the dataset came from.
    pub data_path: Option<PathBuf>,

    /// Currently selected town (stored uppercased).
    pub town: String,

    /// Aggregate points for the selected town (cached).
    pub points: Vec<TrendPoint>,

    /// Chart model derived from `points`, None when there is nothing to draw.
    pub chart: Option<PriceTrendChart>,

    /// Flat types toggled off in the legend panel.
    pub hidden_types: BTreeSet<String>,

    /// Counts shown alongside the filters.
    pub summary: TownSummary,

    /// One-shot request to fit the plot view to the data bounds.
    pub reset_view: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            data_path: None,
            town: DEFAULT_TOWN.to_string(),
            points: Vec::new(),
            chart: None,
            hidden_types: BTreeSet::new(),
            summary: TownSummary::default(),
            reset_view: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and recompute everything derived.
    ///
    /// The selected town is kept when the new dataset has it, otherwise it
    /// falls back to [`DEFAULT_TOWN`] or, failing that, the first town in
    /// the index.
    pub fn set_dataset(&mut self, dataset: ResaleDataset, path: PathBuf) {
        if !dataset.towns.contains(&self.town) {
            self.town = dataset
                .towns
                .iter()
                .find(|t| *t == DEFAULT_TOWN)
                .or_else(|| dataset.towns.first())
                .cloned()
                .unwrap_or_else(|| DEFAULT_TOWN.to_string());
        }

        self.dataset = Some(dataset);
        self.data_path = Some(path);
        self.hidden_types.clear();
        self.status_message = None;
        self.rebuild();
    }

    /// Switch to another town and recompute the derived state.
    pub fn set_town(&mut self, town: &str) {
        let town = town.to_uppercase();
        if self.town == town {
            return;
        }
        self.town = town;
        self.hidden_types.clear();
        self.rebuild();
    }

    /// Recompute points, summary, and chart for the current dataset + town.
    pub fn rebuild(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.points.clear();
            self.chart = None;
            self.summary = TownSummary::default();
            return;
        };

        let records = filter_town(&dataset.rows, &self.town);
        self.summary = TownSummary {
            matched: records.len(),
            missing_month: records.iter().filter(|r| r.year.is_none()).count(),
            missing_price: records.iter().filter(|r| r.resale_price.is_none()).count(),
        };
        self.points = aggregate(&records);
        self.chart = PriceTrendChart::build(&self.points);
        self.reset_view = true;
    }

    /// Toggle one flat type's visibility in the plot.
    pub fn toggle_flat_type(&mut self, flat_type: &str) {
        if !self.hidden_types.remove(flat_type) {
            self.hidden_types.insert(flat_type.to_string());
        }
    }

    pub fn is_visible(&self, flat_type: &str) -> bool {
        !self.hidden_types.contains(flat_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ResaleRow;

    fn row(town: &str, month: &str, flat_type: &str, price: &str) -> ResaleRow {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        ResaleRow {
            town: opt(town),
            month: opt(month),
            flat_type: opt(flat_type),
            resale_price: opt(price),
        }
    }

    fn sample_dataset() -> ResaleDataset {
        ResaleDataset::from_rows(vec![
            row("PUNGGOL", "2020-03", "4 ROOM", "400000"),
            row("PUNGGOL", "2020-07", "4 ROOM", "420000"),
            row("PUNGGOL", "", "4 ROOM", "350000"),
            row("PUNGGOL", "2021-01", "5 ROOM", ""),
            row("BEDOK", "2020-03", "4 ROOM", "365000"),
        ])
    }

    #[test]
    fn set_dataset_builds_points_and_summary() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset(), PathBuf::from("sample.csv"));

        assert_eq!(state.town, "PUNGGOL");
        assert_eq!(state.summary.matched, 4);
        assert_eq!(state.summary.missing_month, 1);
        assert_eq!(state.summary.missing_price, 1);
        assert_eq!(state.points.len(), 1);
        assert_eq!(state.points[0].mean_price, 410000.0);
        assert!(state.chart.is_some());
        assert!(state.reset_view);
    }

    #[test]
    fn set_town_recomputes_and_clears_hidden_types() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset(), PathBuf::from("sample.csv"));
        state.toggle_flat_type("4 ROOM");
        assert!(!state.is_visible("4 ROOM"));

        state.set_town("bedok");
        assert_eq!(state.town, "BEDOK");
        assert!(state.is_visible("4 ROOM"));
        assert_eq!(state.summary.matched, 1);
        assert_eq!(state.points.len(), 1);
        assert_eq!(state.points[0].mean_price, 365000.0);
    }

    #[test]
    fn setting_the_same_town_is_a_no_op() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset(), PathBuf::from("sample.csv"));
        state.reset_view = false;
        state.toggle_flat_type("4 ROOM");

        state.set_town("Punggol");
        assert!(!state.reset_view);
        assert!(!state.is_visible("4 ROOM"));
    }

    #[test]
    fn town_without_matches_clears_the_chart() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset(), PathBuf::from("sample.csv"));
        state.town = "YISHUN".to_string();
        state.rebuild();

        assert_eq!(state.summary, TownSummary::default());
        assert!(state.points.is_empty());
        assert!(state.chart.is_none());
    }

    #[test]
    fn default_town_falls_back_when_absent() {
        let mut state = AppState::default();
        let dataset = ResaleDataset::from_rows(vec![
            row("BEDOK", "2020-03", "4 ROOM", "365000"),
            row("YISHUN", "2020-04", "3 ROOM", "300000"),
        ]);
        state.set_dataset(dataset, PathBuf::from("sample.csv"));
        assert_eq!(state.town, "BEDOK");
    }

    #[test]
    fn toggle_flat_type_flips_visibility() {
        let mut state = AppState::default();
        assert!(state.is_visible("4 ROOM"));
        state.toggle_flat_type("4 ROOM");
        assert!(!state.is_visible("4 ROOM"));
        state.toggle_flat_type("4 ROOM");
        assert!(state.is_visible("4 ROOM"));
    }
}
