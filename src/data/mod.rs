/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<ResaleRow>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ResaleDataset │  raw rows, town index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  one town, case-insensitive → Vec<ResaleRecord>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  mean price per (year, flat type) → Vec<TrendPoint>
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
mod tests {
    use super::*;
    use super::model::ResaleDataset;

    /// End to end over in-memory CSV: load, index towns, filter, aggregate.
    #[test]
    fn csv_to_trend_points() {
        let csv = "\
town,month,flat_type,resale_price,block
PUNGGOL,2020-03,4 ROOM,400000,612A
PUNGGOL,2020-09,4 ROOM,420000,268C
PUNGGOL,2021-01,4 ROOM,445000,301B
PUNGGOL,2020-05,5 ROOM,515000,612A
punggol,,5 ROOM,530000,188
PUNGGOL,2021-02,5 ROOM,,414
BEDOK,2020-03,4 ROOM,365000,55
";
        let rows = loader::read_csv(csv.as_bytes()).unwrap();
        let dataset = ResaleDataset::from_rows(rows);
        assert_eq!(dataset.towns, vec!["BEDOK", "PUNGGOL"]);

        let records = filter::filter_town(&dataset.rows, "Punggol");
        assert_eq!(records.len(), 6);

        let points = aggregate::aggregate(&records);
        assert_eq!(points.len(), 3);

        let mean_of = |year: i32, flat_type: &str| {
            points
                .iter()
                .find(|p| p.year == year && p.flat_type == flat_type)
                .map(|p| p.mean_price)
        };
        // 410000, not (400000 + 420000 + 365000) / 3: BEDOK stays out.
        assert_eq!(mean_of(2020, "4 ROOM"), Some(410000.0));
        assert_eq!(mean_of(2021, "4 ROOM"), Some(445000.0));
        // The blank-month and blank-price rows contribute to no group.
        assert_eq!(mean_of(2020, "5 ROOM"), Some(515000.0));
        assert_eq!(mean_of(2021, "5 ROOM"), None);
    }

    #[test]
    fn unknown_town_produces_no_points() {
        let csv = "\
town,month,flat_type,resale_price
BEDOK,2020-03,4 ROOM,365000
";
        let rows = loader::read_csv(csv.as_bytes()).unwrap();
        let dataset = ResaleDataset::from_rows(rows);
        let records = filter::filter_town(&dataset.rows, "PUNGGOL");
        assert!(records.is_empty());
        assert!(aggregate::aggregate(&records).is_empty());
    }
}
