// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton formulas for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! For European options on a non-dividend-paying underlying, the
//! risk-neutral price has a closed form involving the cumulative normal
//! distribution function Φ(x).
//!
//! These functions take raw inputs and perform no validation: degenerate
//! inputs (σ ≤ 0, T ≤ 0, S ≤ 0, K ≤ 0) produce non-finite or meaningless
//! values. [`crate::option::OptionContract`] layers validation on top.

use crate::math_utils::norm_cdf;

/// The `d₁` term
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// ```
pub fn d1(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// The `d₂` term, `d₁ - σ√T`
pub fn d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    d1(s, k, r, sigma, t) - sigma * t.sqrt()
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Parameters
/// - `s`: Current underlying price
/// - `k`: Strike price
/// - `r`: Risk-free rate (continuously compounded)
/// - `sigma`: Volatility
/// - `t`: Time to expiration in years
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = d1(s, k, r, sigma, t);
    let d2 = d1 - sigma * t.sqrt();
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = d1(s, k, r, sigma, t);
    let d2 = d1 - sigma * t.sqrt();
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

/// Black-Scholes Delta (∂V/∂S) for European call
///
/// # Formula
/// ```text
/// Δ = ∂C/∂S = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of units of underlying per option sold
/// - Range: (0, 1) for calls
pub fn bs_call_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_cdf(d1(s, k, r, sigma, t))
}

/// Black-Scholes Delta for European put
///
/// # Formula
/// ```text
/// Δ = ∂P/∂S = -Φ(-d₁)
/// ```
///
/// Range: (-1, 0) for puts.
pub fn bs_put_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    -norm_cdf(-d1(s, k, r, sigma, t))
}
