// src/var/estimator.rs
//! 1-day 99% historical VaR from the three worst simulated days
//!
//! # Estimator
//!
//! With the P&L observations sorted ascending, `v₁ ≤ v₂ ≤ v₃` the three
//! smallest:
//! ```text
//! VaR = c₁·v₁ + c₂·v₂ + c₃·v₃
//! ```
//! The default weights `(0.0, 0.4, 0.6)` interpolate between the 2nd and 3rd
//! worst outcomes, which approximates the 1% quantile for a history of
//! roughly 100–300 days. The result is a P&L figure: a loss is negative.

use super::pnl::build_pnl_vector;
use super::portfolio::{PortfolioWeights, PriceSeriesTable};
use crate::error::{validation::*, RiskError, RiskResult};
use std::fmt;
use std::str::FromStr;

/// Number of order statistics the estimator combines
pub const ORDER_STATISTICS: usize = 3;

/// Below this many observations the default weights no longer track the 1% tail
const CALIBRATED_MIN_OBSERVATIONS: usize = 100;

/// Interpolation weights applied to the three worst P&L observations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VarCoefficients {
    pub c1: f64, // worst
    pub c2: f64, // second worst
    pub c3: f64, // third worst
}

impl VarCoefficients {
    pub fn new(c1: f64, c2: f64, c3: f64) -> Self {
        VarCoefficients { c1, c2, c3 }
    }

    pub fn validate(&self) -> RiskResult<()> {
        validate_finite("c1", self.c1)?;
        validate_finite("c2", self.c2)?;
        validate_finite("c3", self.c3)?;
        Ok(())
    }

    pub fn as_array(&self) -> [f64; ORDER_STATISTICS] {
        [self.c1, self.c2, self.c3]
    }
}

impl Default for VarCoefficients {
    fn default() -> Self {
        VarCoefficients {
            c1: 0.0,
            c2: 0.4,
            c3: 0.6,
        }
    }
}

impl fmt::Display for VarCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.c1, self.c2, self.c3)
    }
}

/// Parses `"c1,c2,c3"`
impl FromStr for VarCoefficients {
    type Err = RiskError;

    fn from_str(s: &str) -> RiskResult<Self> {
        let parts = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<f64>()
                    .map_err(|e| RiskError::InvalidConfiguration {
                        field: "coefficients".to_string(),
                        reason: format!("'{}': {}", p.trim(), e),
                    })
            })
            .collect::<RiskResult<Vec<f64>>>()?;

        match parts.as_slice() {
            &[c1, c2, c3] => {
                let coefficients = VarCoefficients { c1, c2, c3 };
                coefficients.validate()?;
                Ok(coefficients)
            }
            _ => Err(RiskError::InvalidConfiguration {
                field: "coefficients".to_string(),
                reason: format!("expected 3 comma-separated values, got {}", parts.len()),
            }),
        }
    }
}

/// The three smallest observations, ascending. NaN observations are skipped.
///
/// # Errors
///
/// `InsufficientData` when fewer than three non-NaN observations exist.
pub fn three_worst(pnl: &[f64]) -> RiskResult<[f64; ORDER_STATISTICS]> {
    worst_with_count(pnl).map(|(worst, _)| worst)
}

/// The three worst observations and the number of non-NaN observations.
fn worst_with_count(pnl: &[f64]) -> RiskResult<([f64; ORDER_STATISTICS], usize)> {
    let mut observed: Vec<f64> = pnl.iter().copied().filter(|x| !x.is_nan()).collect();
    let count = observed.len();
    validate_min_len(ORDER_STATISTICS, count)?;

    if count > ORDER_STATISTICS {
        observed.select_nth_unstable_by(ORDER_STATISTICS - 1, f64::total_cmp);
        observed.truncate(ORDER_STATISTICS);
    }
    observed.sort_unstable_by(f64::total_cmp);

    Ok(([observed[0], observed[1], observed[2]], count))
}

/// Estimate 1-day 99% VaR from a P&L vector
///
/// # Errors
///
/// - `InsufficientData` when fewer than three observations are available
/// - `InvalidParameter` when a coefficient is not finite
pub fn estimate_var(pnl: &[f64], coefficients: &VarCoefficients) -> RiskResult<f64> {
    coefficients.validate()?;
    let (worst, observations) = worst_with_count(pnl)?;

    if observations < CALIBRATED_MIN_OBSERVATIONS {
        tracing::warn!(
            observations,
            "fewer than {} observations, VaR weights are not calibrated for this history",
            CALIBRATED_MIN_OBSERVATIONS
        );
    }

    let var = coefficients
        .as_array()
        .iter()
        .zip(worst.iter())
        .map(|(c, v)| c * v)
        .sum::<f64>();

    tracing::debug!(
        v1 = worst[0],
        v2 = worst[1],
        v3 = worst[2],
        coefficients = %coefficients,
        var,
        "estimated historical VaR"
    );
    Ok(var)
}

/// Build the P&L vector and estimate VaR in one call
pub fn historical_var(
    table: &PriceSeriesTable,
    weights: &PortfolioWeights,
    coefficients: &VarCoefficients,
) -> RiskResult<f64> {
    let pnl = build_pnl_vector(table, weights)?;
    estimate_var(&pnl, coefficients)
}
