// src/data.rs
//! Loading historical price tables from CSV
//!
//! Expected layout: a header row, then one row per day and one column of
//! prices per asset. Column order must match the order of the portfolio
//! weights.
//!
//! ```text
//! date,EURUSD,GBPUSD
//! 2023-04-26,1.1043,1.2468
//! 2023-04-25,1.0975,1.2413
//! ```
//!
//! The `date` column is optional. When present (first column, header `date`,
//! any case) the dates are parsed as `YYYY-MM-DD` and checked against the
//! declared [`RowOrder`]; they are not otherwise used.

use crate::error::{RiskError, RiskResult};
use crate::var::{PriceSeriesTable, RowOrder};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load a price table from a CSV file
pub fn load_price_table<P: AsRef<Path>>(path: P, order: RowOrder) -> RiskResult<PriceSeriesTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = read_price_table(file, order)?;
    tracing::info!(
        path = %path.display(),
        rows = table.rows(),
        assets = table.assets(),
        "loaded price table"
    );
    Ok(table)
}

/// Read a price table from any CSV source
///
/// # Errors
///
/// - `Csv` for malformed CSV (including rows with the wrong number of fields)
/// - `Parse` for empty or non-numeric price cells and malformed dates; `row`
///   counts data rows from 1, header excluded
/// - `InvalidConfiguration` if the dates contradict `order`
/// - `InvalidParameter` for non-positive prices
pub fn read_price_table<R: Read>(reader: R, order: RowOrder) -> RiskResult<PriceSeriesTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let has_dates = headers
        .first()
        .map_or(false, |h| h.eq_ignore_ascii_case("date"));
    let names: Vec<String> = headers
        .iter()
        .skip(usize::from(has_dates))
        .cloned()
        .collect();

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    let mut dates: Vec<NaiveDate> = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let mut fields = record.iter();

        if has_dates {
            let raw = fields.next().unwrap_or_default();
            let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| RiskError::Parse {
                row,
                column: headers[0].clone(),
                reason: format!("'{}': {}", raw, e),
            })?;
            dates.push(date);
        }

        for ((column, name), raw) in columns.iter_mut().zip(&names).zip(fields) {
            column.push(parse_price(raw, row, name)?);
        }
    }

    if has_dates {
        check_date_order(&dates, order)?;
    }

    PriceSeriesTable::from_named_columns(names, columns, order)
}

fn parse_price(raw: &str, row: usize, column: &str) -> RiskResult<f64> {
    if raw.is_empty() {
        return Err(RiskError::Parse {
            row,
            column: column.to_string(),
            reason: "missing price".to_string(),
        });
    }
    raw.parse::<f64>().map_err(|e| RiskError::Parse {
        row,
        column: column.to_string(),
        reason: format!("'{}': {}", raw, e),
    })
}

fn check_date_order(dates: &[NaiveDate], order: RowOrder) -> RiskResult<()> {
    for (i, pair) in dates.windows(2).enumerate() {
        let ok = match order {
            RowOrder::MostRecentFirst => pair[0] > pair[1],
            RowOrder::Chronological => pair[0] < pair[1],
        };
        if !ok {
            return Err(RiskError::InvalidConfiguration {
                field: "row_order".to_string(),
                reason: format!(
                    "declared {} but row {} ({}) is followed by {}",
                    order,
                    i + 1,
                    pair[0],
                    pair[1]
                ),
            });
        }
    }
    Ok(())
}
