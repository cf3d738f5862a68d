use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::model::ResaleRow;

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Why a data file could not be turned into rows.
///
/// Any of these halts the pipeline: no rows reach the downstream stages and
/// nothing partial is rendered. Per-field problems inside an otherwise
/// well-formed row are not load errors; they surface later as warnings
/// during normalization.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected JSON shape: {0}")]
    Shape(String),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load resale transaction rows from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming the columns; at minimum `town`, `month`,
///   `flat_type`, `resale_price` are recognized, anything else is ignored
/// * `.json` – top-level array of objects with the same field names
pub fn load_file(path: &Path) -> Result<Vec<ResaleRow>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            read_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_json(&text)
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Parse CSV content with a header row into rows.
///
/// The `csv` crate maps each record onto [`ResaleRow`]: empty fields and
/// absent columns deserialize to `None`, unknown columns are skipped. A
/// structurally broken record (bad quoting, wrong field count) fails the
/// whole load.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<ResaleRow>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "town": "PUNGGOL", "month": "2020-03", "flat_type": "4 ROOM",
///     "resale_price": "420000" },
///   ...
/// ]
/// ```
///
/// `resale_price` may also be a bare number; it is carried as its decimal
/// text and parsed during normalization like the CSV case.
pub fn parse_json(text: &str) -> Result<Vec<ResaleRow>, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::Shape("expected a top-level JSON array".to_string()))?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .ok_or_else(|| LoadError::Shape(format!("row {i} is not a JSON object")))?;

            Ok(ResaleRow {
                town: field_string(obj, "town"),
                month: field_string(obj, "month"),
                flat_type: field_string(obj, "flat_type"),
                resale_price: field_string(obj, "resale_price"),
            })
        })
        .collect()
}

/// A field as text. Numbers and booleans are carried in their printed form,
/// `null` and absent fields as `None`.
fn field_string(obj: &Map<String, JsonValue>, key: &str) -> Option<String> {
    match obj.get(key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}
