//! Cohort synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_NOISE_SD, DEFAULT_PATIENTS, DEFAULT_RISK_PROBABILITY, DEFAULT_SEED,
    DEFAULT_TREATMENT_PROBABILITY,
};

/// Configuration for the synthetic cohort.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CohortConfig {
    /// Number of simulated patients. Default: 500.
    pub patients: Option<usize>,
    /// Random seed. Default: 42.
    pub seed: Option<u64>,
    /// Bernoulli probability of each treatment indicator. Default: 0.5.
    pub treatment_probability: Option<f64>,
    /// Bernoulli probability of each risk covariate. Default: 0.5.
    pub risk_probability: Option<f64>,
    /// Standard deviation of the outcome noise. Default: 0.5.
    pub noise_sd: Option<f64>,
}

impl CohortConfig {
    pub fn effective_patients(&self) -> usize {
        self.patients.unwrap_or(DEFAULT_PATIENTS)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn effective_treatment_probability(&self) -> f64 {
        self.treatment_probability
            .unwrap_or(DEFAULT_TREATMENT_PROBABILITY)
    }

    pub fn effective_risk_probability(&self) -> f64 {
        self.risk_probability.unwrap_or(DEFAULT_RISK_PROBABILITY)
    }

    pub fn effective_noise_sd(&self) -> f64 {
        self.noise_sd.unwrap_or(DEFAULT_NOISE_SD)
    }
}
