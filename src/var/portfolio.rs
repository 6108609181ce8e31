// src/var/portfolio.rs
//! Historical price table and position notionals
//!
//! A [`PriceSeriesTable`] holds one column of daily prices per asset, stored
//! as a `rows × assets` matrix. The row direction is part of the input
//! contract and must be declared with [`RowOrder`]; it is never inferred from
//! the data.

use crate::error::{validation::*, RiskError, RiskResult};
use ndarray::{Array2, ArrayView1, Axis};
use std::fmt;
use std::str::FromStr;

/// Direction in which the rows of a price table run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowOrder {
    /// Row 0 is the latest observation (the usual layout of downloaded series)
    #[default]
    MostRecentFirst,
    /// Row 0 is the oldest observation
    Chronological,
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOrder::MostRecentFirst => write!(f, "most-recent-first"),
            RowOrder::Chronological => write!(f, "chronological"),
        }
    }
}

impl FromStr for RowOrder {
    type Err = RiskError;

    fn from_str(s: &str) -> RiskResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "most-recent-first" | "newest-first" | "desc" => Ok(RowOrder::MostRecentFirst),
            "chronological" | "oldest-first" | "asc" => Ok(RowOrder::Chronological),
            other => Err(RiskError::InvalidConfiguration {
                field: "row_order".to_string(),
                reason: format!(
                    "unknown row order '{}', expected 'most-recent-first' or 'chronological'",
                    other
                ),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceSeriesTable {
    prices: Array2<f64>,
    names: Vec<String>,
    order: RowOrder,
}

impl PriceSeriesTable {
    /// Build a table from per-asset columns, naming assets `asset_0`, `asset_1`, ...
    pub fn from_columns(columns: Vec<Vec<f64>>, order: RowOrder) -> RiskResult<Self> {
        let names = (0..columns.len()).map(|j| format!("asset_{}", j)).collect();
        Self::from_named_columns(names, columns, order)
    }

    /// Build a table from named per-asset columns
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if names and columns disagree in count or the
    ///   columns have different lengths
    /// - `InvalidParameter` if any price is non-finite or not strictly positive
    pub fn from_named_columns(
        names: Vec<String>,
        columns: Vec<Vec<f64>>,
        order: RowOrder,
    ) -> RiskResult<Self> {
        validate_same_len("asset names", columns.len(), names.len())?;
        let rows = columns.first().map_or(0, Vec::len);

        let mut prices = Array2::<f64>::zeros((rows, columns.len()));
        for (j, column) in columns.iter().enumerate() {
            validate_same_len(&format!("rows of '{}'", names[j]), rows, column.len())?;
            for (i, &price) in column.iter().enumerate() {
                let label = format!("{}[{}]", names[j], i);
                validate_finite(&label, price)?;
                validate_positive(&label, price)?;
                prices[[i, j]] = price;
            }
        }

        Ok(PriceSeriesTable {
            prices,
            names,
            order,
        })
    }

    pub fn rows(&self) -> usize {
        self.prices.nrows()
    }

    pub fn assets(&self) -> usize {
        self.prices.ncols()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn order(&self) -> RowOrder {
        self.order
    }

    /// Prices of asset `j` in stored row order
    pub fn column(&self, j: usize) -> ArrayView1<'_, f64> {
        self.prices.column(j)
    }

    /// Prices of asset `j`, latest observation first regardless of storage order
    pub fn column_most_recent_first(&self, j: usize) -> Vec<f64> {
        let column = self.prices.column(j);
        match self.order {
            RowOrder::MostRecentFirst => column.to_vec(),
            RowOrder::Chronological => column.iter().rev().copied().collect(),
        }
    }

    /// Same prices, stored in the opposite direction
    pub fn reversed(&self) -> Self {
        let mut prices = self.prices.clone();
        prices.invert_axis(Axis(0));
        let order = match self.order {
            RowOrder::MostRecentFirst => RowOrder::Chronological,
            RowOrder::Chronological => RowOrder::MostRecentFirst,
        };
        PriceSeriesTable {
            prices,
            names: self.names.clone(),
            order,
        }
    }
}

/// Notional value of each position, in the column order of the price table
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioWeights {
    notionals: Vec<f64>,
}

impl PortfolioWeights {
    pub fn new(notionals: Vec<f64>) -> RiskResult<Self> {
        for (j, &w) in notionals.iter().enumerate() {
            validate_finite(&format!("weights[{}]", j), w)?;
        }
        Ok(PortfolioWeights { notionals })
    }

    pub fn len(&self) -> usize {
        self.notionals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notionals.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.notionals
    }

    /// Total notional across positions
    pub fn gross(&self) -> f64 {
        self.notionals.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape_and_names() {
        let table = PriceSeriesTable::from_named_columns(
            vec!["EURUSD".to_string(), "GBPUSD".to_string()],
            vec![vec![1.10, 1.09, 1.08], vec![1.25, 1.26, 1.27]],
            RowOrder::MostRecentFirst,
        )
        .unwrap();

        assert_eq!(table.rows(), 3);
        assert_eq!(table.assets(), 2);
        assert_eq!(table.names(), &["EURUSD", "GBPUSD"]);
        assert_eq!(table.column(1).to_vec(), vec![1.25, 1.26, 1.27]);
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let err = PriceSeriesTable::from_columns(
            vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]],
            RowOrder::MostRecentFirst,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RiskError::DimensionMismatch {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let err = PriceSeriesTable::from_columns(vec![vec![1.0, 0.0]], RowOrder::MostRecentFirst)
            .unwrap_err();
        match err {
            RiskError::InvalidParameter { parameter, .. } => assert_eq!(parameter, "asset_0[1]"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reversed_flips_order_and_rows() {
        let table =
            PriceSeriesTable::from_columns(vec![vec![1.0, 2.0, 3.0]], RowOrder::Chronological)
                .unwrap();
        let reversed = table.reversed();
        assert_eq!(reversed.order(), RowOrder::MostRecentFirst);
        assert_eq!(reversed.column(0).to_vec(), vec![3.0, 2.0, 1.0]);
        assert_eq!(
            table.column_most_recent_first(0),
            reversed.column_most_recent_first(0)
        );
    }

    #[test]
    fn test_row_order_parse() {
        assert_eq!("chronological".parse::<RowOrder>().unwrap(), RowOrder::Chronological);
        assert_eq!(
            "Most-Recent-First".parse::<RowOrder>().unwrap(),
            RowOrder::MostRecentFirst
        );
        assert!("sideways".parse::<RowOrder>().is_err());
        assert_eq!(RowOrder::default(), RowOrder::MostRecentFirst);
    }

    #[test]
    fn test_weights_reject_nan() {
        assert!(PortfolioWeights::new(vec![153084.81, f64::NAN]).is_err());
        let w = PortfolioWeights::new(vec![153084.81, 95891.51]).unwrap();
        assert_eq!(w.len(), 2);
        assert!((w.gross() - 248976.32).abs() < 1e-6);
    }
}
