// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;

/// Standard normal CDF, Φ(x) = ½·erfc(−x/√2).
///
/// The erfc form keeps full relative precision in the left tail, where
/// `0.5 * (1 + erf(x))` would cancel to zero.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
