//! Wald z statistics and two-sided normal p-values via `statrs`.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

/// Wald statistic `estimate / std_err`.
pub fn z_value(estimate: f64, std_err: f64) -> f64 {
    estimate / std_err
}

/// Two-sided p-value of a standard normal statistic: `2 * (1 - Phi(|z|))`.
///
/// Uses the complementary error function so tiny p-values keep their precision.
pub fn two_sided_p(z: f64) -> f64 {
    erfc(z.abs() / SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_quantiles() {
        assert!((two_sided_p(0.0) - 1.0).abs() < 1e-12);
        assert!((two_sided_p(1.959963984540054) - 0.05).abs() < 1e-9);
        assert!((two_sided_p(-1.959963984540054) - 0.05).abs() < 1e-9);
        assert!((two_sided_p(2.5758293035489) - 0.01).abs() < 1e-9);
    }

    #[test]
    fn large_statistics_stay_positive() {
        let p = two_sided_p(10.0);
        assert!(p > 0.0 && p < 1e-20);
    }
}
