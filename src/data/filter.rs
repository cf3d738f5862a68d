use chrono::{Datelike, NaiveDate};

use super::model::{ResaleRecord, ResaleRow};

// ---------------------------------------------------------------------------
// Town filter + normalization
// ---------------------------------------------------------------------------

/// Select the rows for one town and normalize them into typed records.
///
/// Town matching is case-insensitive; rows with no town never match. Each
/// surviving row is normalized independently, so one bad field costs only
/// that field, not the row or the run.
pub fn filter_town(rows: &[ResaleRow], town: &str) -> Vec<ResaleRecord> {
    let target = town.to_uppercase();
    rows.iter()
        .filter(|row| {
            row.town
                .as_deref()
                .map(|t| t.trim().to_uppercase() == target)
                .unwrap_or(false)
        })
        .map(normalize)
        .collect()
}

/// Derive the typed fields of one row, logging a warning for each field
/// that is missing or unparseable and leaving it `None`.
pub fn normalize(row: &ResaleRow) -> ResaleRecord {
    let town = row
        .town
        .as_deref()
        .map(|t| t.trim().to_uppercase())
        .unwrap_or_default();
    let flat_type = trimmed(&row.flat_type);
    let month = trimmed(&row.month);

    let year = match &month {
        Some(m) => {
            let parsed = parse_year(m);
            if parsed.is_none() {
                log::warn!("unparseable 'month' value for record: {row:?}");
            }
            parsed
        }
        None => {
            log::warn!("missing 'month' value for record: {row:?}");
            None
        }
    };

    let resale_price = match trimmed(&row.resale_price) {
        Some(p) => {
            let parsed = parse_price(&p);
            if parsed.is_none() {
                log::warn!("unparseable 'resale_price' value for record: {row:?}");
            }
            parsed
        }
        None => {
            log::warn!("missing 'resale_price' value for record: {row:?}");
            None
        }
    };

    ResaleRecord {
        town,
        flat_type,
        month,
        year,
        resale_price,
    }
}

fn trimmed(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Year component of a transaction month. Accepts `YYYY-MM-DD` and the
/// dataset's usual `YYYY-MM` form.
pub fn parse_year(month: &str) -> Option<i32> {
    let date = NaiveDate::parse_from_str(month, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d"))
        .ok()?;
    Some(date.year())
}

/// Price as a finite f64, or `None` for anything else.
pub fn parse_price(price: &str) -> Option<f64> {
    price.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(town: &str, month: &str, flat_type: &str, price: &str) -> ResaleRow {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        ResaleRow {
            town: opt(town),
            month: opt(month),
            flat_type: opt(flat_type),
            resale_price: opt(price),
        }
    }

    #[test]
    fn town_match_is_case_insensitive() {
        let rows = vec![
            row("PUNGGOL", "2020-03", "4 ROOM", "420000"),
            row("Punggol", "2021-05", "5 ROOM", "560000"),
            row("BEDOK", "2020-03", "4 ROOM", "390000"),
        ];
        let records = filter_town(&rows, "punggol");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.town == "PUNGGOL"));
    }

    #[test]
    fn rows_without_town_never_match() {
        let rows = vec![
            ResaleRow {
                town: None,
                month: Some("2020-03".into()),
                flat_type: Some("4 ROOM".into()),
                resale_price: Some("420000".into()),
            },
            row("PUNGGOL", "2020-03", "4 ROOM", "420000"),
        ];
        assert_eq!(filter_town(&rows, "PUNGGOL").len(), 1);
    }

    #[test]
    fn no_matches_yields_empty() {
        let rows = vec![row("BEDOK", "2020-03", "4 ROOM", "390000")];
        assert!(filter_town(&rows, "PUNGGOL").is_empty());
    }

    #[test]
    fn normalize_derives_year_and_price() {
        let record = normalize(&row("punggol ", "2017-03", "4 ROOM", "435000"));
        assert_eq!(record.town, "PUNGGOL");
        assert_eq!(record.year, Some(2017));
        assert_eq!(record.resale_price, Some(435000.0));
        assert_eq!(record.flat_type.as_deref(), Some("4 ROOM"));
    }

    #[test]
    fn missing_fields_stay_none() {
        let record = normalize(&row("PUNGGOL", "", "4 ROOM", ""));
        assert_eq!(record.month, None);
        assert_eq!(record.year, None);
        assert_eq!(record.resale_price, None);
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let record = normalize(&row("PUNGGOL", "   ", "4 ROOM", " "));
        assert_eq!(record.year, None);
        assert_eq!(record.resale_price, None);
    }

    #[test]
    fn unparseable_fields_stay_none() {
        let record = normalize(&row("PUNGGOL", "March 2020", "4 ROOM", "lots"));
        assert_eq!(record.year, None);
        assert_eq!(record.resale_price, None);
    }

    #[test]
    fn parse_year_accepts_month_and_full_dates() {
        assert_eq!(parse_year("2017-03"), Some(2017));
        assert_eq!(parse_year("2024-12-31"), Some(2024));
        assert_eq!(parse_year("2017"), None);
        assert_eq!(parse_year("not-a-date"), None);
    }

    #[test]
    fn parse_price_accepts_decimals_and_exponents() {
        assert_eq!(parse_price("420000"), Some(420000.0));
        assert_eq!(parse_price(" 435000.50 "), Some(435000.5));
        assert_eq!(parse_price("1e5"), Some(100000.0));
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("$420,000"), None);
    }
}
