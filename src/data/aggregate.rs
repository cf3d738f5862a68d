use std::collections::BTreeMap;

use super::model::{ResaleRecord, TrendPoint};

// ---------------------------------------------------------------------------
// Mean price per (year, flat type)
// ---------------------------------------------------------------------------

/// Collapse normalized records into one mean-price point per
/// `(year, flat_type)` group.
///
/// Records missing any of the three fields are skipped, so every emitted
/// point comes from at least one transaction and no group can be empty.
/// The output is ordered by year, then flat type.
pub fn aggregate(records: &[ResaleRecord]) -> Vec<TrendPoint> {
    group_prices(records)
        .into_iter()
        .filter_map(|((year, flat_type), prices)| {
            mean(&prices).map(|mean_price| TrendPoint {
                year,
                flat_type,
                mean_price,
            })
        })
        .collect()
}

/// Prices keyed by `(year, flat_type)`. A `BTreeMap` keeps the grouping
/// deterministic regardless of input order.
pub fn group_prices(records: &[ResaleRecord]) -> BTreeMap<(i32, String), Vec<f64>> {
    let mut groups: BTreeMap<(i32, String), Vec<f64>> = BTreeMap::new();
    for record in records {
        let (Some(year), Some(price), Some(flat_type)) =
            (record.year, record.resale_price, record.flat_type.as_ref())
        else {
            continue;
        };
        groups
            .entry((year, flat_type.clone()))
            .or_default()
            .push(price);
    }
    groups
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
