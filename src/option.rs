// src/option.rs
//! Vanilla European option contract priced under Black-Scholes-Merton
//!
//! [`OptionContract`] is a plain data holder. Its fields are public and may be
//! changed freely between construction and pricing; spot, strike and time to
//! expiry are validated every time a price is requested, never at
//! construction.
//!
//! # Validation asymmetry
//!
//! [`OptionContract::price_call`] and [`OptionContract::price_put`] reject
//! non-positive spot, strike or time to expiry. The delta methods do not: they
//! evaluate `Φ(d₁)` on whatever the contract holds and may return NaN for
//! degenerate inputs. Callers that want the price checks applied to deltas use
//! [`OptionContract::call_delta_checked`] / [`OptionContract::put_delta_checked`].
//!
//! Volatility is never validated. Zero or negative volatility produces a
//! non-finite or meaningless result, logged as a warning.

use crate::analytics::bs_analytic;
use crate::error::{validation::*, RiskResult};
use std::fmt;

/// Day-count basis for converting days to maturity into years
pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    Call,
    Put,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionContract {
    pub spot_price: f64,       // S
    pub strike_price: f64,     // K
    pub days_to_maturity: i32, // Calendar days until expiry
    pub risk_free_rate: f64,   // r, continuously compounded, annualized
    pub volatility: f64,       // σ, annualized std-dev of log returns
}

impl OptionContract {
    /// Store the contract terms as given. Nothing is validated here.
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        days_to_maturity: i32,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        OptionContract {
            spot_price,
            strike_price,
            days_to_maturity,
            risk_free_rate,
            volatility,
        }
    }

    /// Time to expiry in years, `days_to_maturity / 365`
    pub fn time_to_expiry(&self) -> f64 {
        self.days_to_maturity as f64 / DAYS_PER_YEAR
    }

    /// Check the inputs pricing depends on: spot, strike, then time to expiry
    pub fn validate(&self) -> RiskResult<()> {
        validate_positive("spot_price", self.spot_price)?;
        validate_positive("strike_price", self.strike_price)?;
        validate_positive("time_to_expiry", self.time_to_expiry())?;
        Ok(())
    }

    pub fn d1(&self) -> f64 {
        bs_analytic::d1(
            self.spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.volatility,
            self.time_to_expiry(),
        )
    }

    pub fn d2(&self) -> f64 {
        bs_analytic::d2(
            self.spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.volatility,
            self.time_to_expiry(),
        )
    }

    /// Fair value of the European call
    ///
    /// # Errors
    ///
    /// `RiskError::InvalidParameter` naming `spot_price`, `strike_price` or
    /// `time_to_expiry` when that input is not strictly positive.
    pub fn price_call(&self) -> RiskResult<f64> {
        self.price(OptionKind::Call)
    }

    /// Fair value of the European put
    ///
    /// # Errors
    ///
    /// Same as [`OptionContract::price_call`].
    pub fn price_put(&self) -> RiskResult<f64> {
        self.price(OptionKind::Put)
    }

    pub fn price(&self, kind: OptionKind) -> RiskResult<f64> {
        self.validate()?;
        self.warn_on_degenerate_volatility();

        let (s, k, r, sigma, t) = self.terms();
        let price = match kind {
            OptionKind::Call => bs_analytic::bs_call_price(s, k, r, sigma, t),
            OptionKind::Put => bs_analytic::bs_put_price(s, k, r, sigma, t),
        };
        tracing::trace!(%kind, d1 = self.d1(), d2 = self.d2(), price, "priced option");
        Ok(price)
    }

    /// Call delta, `Φ(d₁)`. Unvalidated.
    pub fn call_delta(&self) -> f64 {
        self.delta(OptionKind::Call)
    }

    /// Put delta, `-Φ(-d₁)`. Unvalidated.
    pub fn put_delta(&self) -> f64 {
        self.delta(OptionKind::Put)
    }

    pub fn delta(&self, kind: OptionKind) -> f64 {
        let (s, k, r, sigma, t) = self.terms();
        match kind {
            OptionKind::Call => bs_analytic::bs_call_delta(s, k, r, sigma, t),
            OptionKind::Put => bs_analytic::bs_put_delta(s, k, r, sigma, t),
        }
    }

    /// Call delta after the same checks as [`OptionContract::price_call`]
    pub fn call_delta_checked(&self) -> RiskResult<f64> {
        self.validate()?;
        Ok(self.call_delta())
    }

    /// Put delta after the same checks as [`OptionContract::price_put`]
    pub fn put_delta_checked(&self) -> RiskResult<f64> {
        self.validate()?;
        Ok(self.put_delta())
    }

    fn terms(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.volatility,
            self.time_to_expiry(),
        )
    }

    fn warn_on_degenerate_volatility(&self) {
        if !(self.volatility > 0.0) || !self.volatility.is_finite() {
            tracing::warn!(
                volatility = self.volatility,
                "non-positive or non-finite volatility, price is not meaningful"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiskError;

    fn base() -> OptionContract {
        OptionContract::new(19.0, 17.0, 168, 0.005, 0.3)
    }

    #[test]
    fn test_init_parameters() {
        let opt = base();
        assert_eq!(opt.spot_price, 19.0);
        assert_eq!(opt.strike_price, 17.0);
        assert_eq!(opt.days_to_maturity, 168);
        assert_eq!(opt.risk_free_rate, 0.005);
        assert_eq!(opt.volatility, 0.3);
        assert!((opt.time_to_expiry() - 168.0 / 365.0).abs() < 1e-15);
    }

    #[test]
    fn test_modify_parameters_before_pricing() {
        let mut opt = OptionContract::new(0.0, 17.0, 168, 0.005, 0.3);
        assert!(opt.price_call().is_err());

        opt.spot_price = 19.0;
        opt.strike_price = 20.0;
        opt.volatility = 0.5;
        assert_eq!(opt.strike_price, 20.0);
        assert_eq!(opt.volatility, 0.5);
        assert!(opt.price_call().is_ok());
    }

    #[test]
    fn test_validation_names_offending_field() {
        let cases = [
            (OptionContract::new(0.0, 0.0, 0, 0.005, 0.3), "spot_price"),
            (OptionContract::new(19.0, -1.0, 0, 0.005, 0.3), "strike_price"),
            (OptionContract::new(19.0, 17.0, -5, 0.005, 0.3), "time_to_expiry"),
        ];
        for (opt, expected) in cases {
            match opt.price_put() {
                Err(RiskError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected)
                }
                other => panic!("expected InvalidParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_kind_dispatch_matches_named_methods() {
        let opt = base();
        assert_eq!(opt.price(OptionKind::Call).unwrap(), opt.price_call().unwrap());
        assert_eq!(opt.price(OptionKind::Put).unwrap(), opt.price_put().unwrap());
        assert_eq!(opt.delta(OptionKind::Call), opt.call_delta());
        assert_eq!(opt.delta(OptionKind::Put), opt.put_delta());
    }

    #[test]
    fn test_unchecked_delta_ignores_invalid_spot() {
        let opt = OptionContract::new(0.0, 17.0, 168, 0.005, 0.3);
        // ln(0) = -inf, Φ(-inf) = 0
        assert_eq!(opt.call_delta(), 0.0);
        assert!(opt.call_delta_checked().is_err());
        assert!(opt.put_delta_checked().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OptionKind::Call.to_string(), "call");
        assert_eq!(OptionKind::Put.to_string(), "put");
    }
}
