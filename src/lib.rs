//! # bsm-hvar: Option Pricing and Historical VaR
//!
//! A Rust library for two independent risk and valuation numbers:
//!
//! - **Black-Scholes-Merton**: closed-form price and delta of vanilla European
//!   calls and puts on a non-dividend-paying underlying
//! - **Historical VaR**: 1-day 99% Value-at-Risk of a multi-asset portfolio,
//!   estimated from the three worst days of a historical P&L replay
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_hvar::option::OptionContract;
//! use bsm_hvar::var::{
//!     build_pnl_vector, estimate_var, PortfolioWeights, PriceSeriesTable, RowOrder,
//!     VarCoefficients,
//! };
//!
//! // 168-day call, spot 19, strike 17, 0.5% rate, 30% vol
//! let option = OptionContract::new(19.0, 17.0, 168, 0.005, 0.3);
//! let call = option.price_call().expect("valid contract");
//! assert!((call - 2.70).abs() < 0.005);
//!
//! // Two assets, latest price first
//! let table = PriceSeriesTable::from_columns(
//!     vec![
//!         vec![1.10, 1.09, 1.11, 1.08, 1.10],
//!         vec![1.25, 1.27, 1.24, 1.26, 1.25],
//!     ],
//!     RowOrder::MostRecentFirst,
//! )
//! .expect("valid prices");
//! let weights = PortfolioWeights::new(vec![153084.81, 95891.51]).expect("finite notionals");
//!
//! let pnl = build_pnl_vector(&table, &weights).expect("weights match columns");
//! let var = estimate_var(&pnl, &VarCoefficients::default()).expect("enough history");
//! assert!(var.is_finite());
//! ```
//!
//! ## Conventions
//!
//! - Time to expiry is `days_to_maturity / 365`.
//! - P&L and VaR are reported in the currency of the notionals; losses are
//!   negative.
//! - Price tables declare their row direction explicitly with [`var::RowOrder`].

// Module declarations
pub mod analytics;
pub mod data;
pub mod error;
pub mod math_utils;
pub mod option;
pub mod output;
pub mod var;

// Re-export commonly used types for convenience
pub use error::{RiskError, RiskResult};
pub use option::{OptionContract, OptionKind};
