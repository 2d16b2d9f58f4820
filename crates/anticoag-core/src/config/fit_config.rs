//! Estimation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RANK_TOLERANCE;

/// Configuration for the path model estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FitConfig {
    /// Solve rank-deficient predictor covariances with the Moore-Penrose
    /// pseudo-inverse instead of failing. Default: true.
    pub pseudo_inverse: Option<bool>,
    /// Relative singular value tolerance for the rank test. Default: 1e-10.
    pub rank_tolerance: Option<f64>,
}

impl FitConfig {
    pub fn effective_pseudo_inverse(&self) -> bool {
        self.pseudo_inverse.unwrap_or(true)
    }

    pub fn effective_rank_tolerance(&self) -> f64 {
        self.rank_tolerance.unwrap_or(DEFAULT_RANK_TOLERANCE)
    }
}
