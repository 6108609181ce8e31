// src/var/pnl.rs
//! Historical-simulation P&L vectors
//!
//! # Method
//!
//! Each historical day is replayed against today's positions. For asset `j`
//! with notional `w_j` and prices ordered latest first:
//! ```text
//! ret_j[i]  = P_j[i] / P_j[i+1] - 1        (last row: 0)
//! pnl_j[i]  = ret_j[i] * w_j
//! pnl[i]    = Σ_j pnl_j[i]
//! ```
//!
//! The ratio is taken against the *next* row, so the direction of the table
//! decides the sign of every simulated move. Tables declared
//! [`RowOrder::Chronological`](super::RowOrder::Chronological) are read in
//! reverse, and the output is always latest first.

use super::portfolio::{PortfolioWeights, PriceSeriesTable};
use crate::error::{validation::*, RiskResult};
use std::ops::Deref;

/// Portfolio (or single-asset) P&L per historical day, latest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PnlVector {
    values: Vec<f64>,
}

impl PnlVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for PnlVector {
    fn from(values: Vec<f64>) -> Self {
        PnlVector { values }
    }
}

impl Deref for PnlVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

/// One-period simple returns of a latest-first price column
///
/// `ret[i] = prices[i] / prices[i + 1] - 1`, with the final element set to 0.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    let mut returns: Vec<f64> = prices.windows(2).map(|w| w[0] / w[1] - 1.0).collect();
    if !prices.is_empty() {
        returns.push(0.0);
    }
    returns
}

/// Per-asset P&L columns, in the column order of the table
///
/// # Errors
///
/// `DimensionMismatch` if the number of weights differs from the number of
/// price columns.
pub fn build_asset_pnl(
    table: &PriceSeriesTable,
    weights: &PortfolioWeights,
) -> RiskResult<Vec<PnlVector>> {
    validate_same_len("portfolio weights", table.assets(), weights.len())?;

    let columns: Vec<PnlVector> = weights
        .as_slice()
        .iter()
        .enumerate()
        .map(|(j, &notional)| {
            let prices = table.column_most_recent_first(j);
            PnlVector::from(
                simple_returns(&prices)
                    .into_iter()
                    .map(|ret| ret * notional)
                    .collect::<Vec<f64>>(),
            )
        })
        .collect();

    Ok(columns)
}

/// Total portfolio P&L per historical day
///
/// The result has one entry per table row; the last entry is always `0.0`.
///
/// # Errors
///
/// `DimensionMismatch` if the number of weights differs from the number of
/// price columns.
pub fn build_pnl_vector(
    table: &PriceSeriesTable,
    weights: &PortfolioWeights,
) -> RiskResult<PnlVector> {
    let asset_pnl = build_asset_pnl(table, weights)?;

    let mut total = vec![0.0; table.rows()];
    for column in &asset_pnl {
        for (acc, value) in total.iter_mut().zip(column.iter()) {
            *acc += value;
        }
    }

    tracing::debug!(
        rows = table.rows(),
        assets = table.assets(),
        order = %table.order(),
        "built portfolio P&L vector"
    );
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiskError;
    use crate::var::RowOrder;

    #[test]
    fn test_simple_returns_against_next_row() {
        let returns = simple_returns(&[110.0, 100.0, 125.0]);
        assert_eq!(returns.len(), 3);
        assert!((returns[0] - 0.1).abs() < 1e-12);
        assert!((returns[1] + 0.2).abs() < 1e-12);
        assert_eq!(returns[2], 0.0);
    }

    #[test]
    fn test_simple_returns_edge_lengths() {
        assert!(simple_returns(&[]).is_empty());
        assert_eq!(simple_returns(&[42.0]), vec![0.0]);
    }

    #[test]
    fn test_log_exp_round_trip_matches_ratio() {
        let prices = [1.1123, 1.1087, 1.1150, 1.1042];
        let direct = simple_returns(&prices);
        for i in 0..prices.len() - 1 {
            let via_log = (prices[i] / prices[i + 1]).ln().exp() - 1.0;
            assert!((direct[i] - via_log).abs() < 1e-14);
        }
    }

    #[test]
    fn test_pnl_is_weighted_row_sum() {
        let table = PriceSeriesTable::from_columns(
            vec![vec![110.0, 100.0, 100.0], vec![50.0, 50.0, 40.0]],
            RowOrder::MostRecentFirst,
        )
        .unwrap();
        let weights = PortfolioWeights::new(vec![1000.0, -200.0]).unwrap();

        let pnl = build_pnl_vector(&table, &weights).unwrap();
        assert_eq!(pnl.len(), 3);
        assert!((pnl[0] - 100.0).abs() < 1e-9);
        assert!((pnl[1] + 50.0).abs() < 1e-9);
        assert_eq!(pnl[2], 0.0);
    }

    #[test]
    fn test_weights_length_must_match_columns() {
        let table =
            PriceSeriesTable::from_columns(vec![vec![1.0, 2.0]], RowOrder::MostRecentFirst)
                .unwrap();
        let weights = PortfolioWeights::new(vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            build_pnl_vector(&table, &weights),
            Err(RiskError::DimensionMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_table_gives_empty_vector() {
        let table = PriceSeriesTable::from_columns(vec![vec![], vec![]], RowOrder::MostRecentFirst)
            .unwrap();
        let weights = PortfolioWeights::new(vec![1.0, 1.0]).unwrap();
        assert!(build_pnl_vector(&table, &weights).unwrap().is_empty());
    }
}
