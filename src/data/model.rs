use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// ResaleRow – one row of the source file
// ---------------------------------------------------------------------------

/// A single transaction row as it appears in the source file.
///
/// Every expected field is optional: real exports have gaps, and a gap must
/// travel through the pipeline as `None` rather than abort the load. Columns
/// beyond these four are ignored during deserialization. Empty CSV fields and
/// JSON `null`s both land as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResaleRow {
    #[serde(default)]
    pub town: Option<String>,
    /// Date-like string, typically `YYYY-MM`.
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub flat_type: Option<String>,
    /// Numeric string; parsed to `f64` during normalization.
    #[serde(default)]
    pub resale_price: Option<String>,
}

// ---------------------------------------------------------------------------
// ResaleRecord – a row that passed the town filter
// ---------------------------------------------------------------------------

/// A transaction for the selected town, with derived fields.
///
/// `year` and `resale_price` are `None` when the source field was missing or
/// unparseable; such records are kept (they feed the "rows missing …" counts
/// in the UI) but stay out of any aggregation group that needs the field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResaleRecord {
    pub town: String,
    pub flat_type: Option<String>,
    /// Source `month` string, kept for diagnostics.
    pub month: Option<String>,
    /// Calendar year derived from `month`.
    pub year: Option<i32>,
    pub resale_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// TrendPoint – one aggregated chart point
// ---------------------------------------------------------------------------

/// Mean resale price of one (year, flat type) group.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub flat_type: String,
    pub mean_price: f64,
}

// ---------------------------------------------------------------------------
// ResaleDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset plus the towns it mentions.
#[derive(Debug, Clone, Default)]
pub struct ResaleDataset {
    /// All rows, unfiltered.
    pub rows: Vec<ResaleRow>,
    /// Sorted unique town names, uppercased so they line up with the
    /// case-insensitive town filter.
    pub towns: Vec<String>,
}

impl ResaleDataset {
    /// Build the town index from loaded rows.
    pub fn from_rows(rows: Vec<ResaleRow>) -> Self {
        let towns: BTreeSet<String> = rows
            .iter()
            .filter_map(|row| row.town.as_deref())
            .map(str::trim)
            .filter(|town| !town.is_empty())
            .map(|town| town.to_uppercase())
            .collect();

        ResaleDataset {
            rows,
            towns: towns.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
