//! Historical-simulation Value-at-Risk
//!
//! Two steps, usable separately:
//! 1. [`build_pnl_vector`] replays each historical day against the current
//!    positions and sums the per-asset P&L.
//! 2. [`estimate_var`] combines the three worst days with fixed weights.

pub mod estimator;
pub mod pnl;
pub mod portfolio;

pub use estimator::{estimate_var, historical_var, three_worst, VarCoefficients};
pub use pnl::{build_asset_pnl, build_pnl_vector, simple_returns, PnlVector};
pub use portfolio::{PortfolioWeights, PriceSeriesTable, RowOrder};
