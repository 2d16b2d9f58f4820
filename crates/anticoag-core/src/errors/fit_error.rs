//! Estimation errors.

use super::error_code::{self, AnticoagErrorCode};

/// Errors that can occur while fitting a path model to observed data.
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("Variable {variable} is not present in the observed data")]
    MissingVariable { variable: String },

    #[error("Variable {variable} has zero variance across {n_obs} observations")]
    ZeroVariance { variable: String, n_obs: usize },

    #[error("Regression paths are not recursive, cycle through: {}", cycle.join(" -> "))]
    NonRecursive { cycle: Vec<String> },

    #[error("Equation for {outcome} has {parameters} free parameters but only {n_obs} observations")]
    Unidentified {
        outcome: String,
        parameters: usize,
        n_obs: usize,
    },

    #[error("Predictor covariance for {outcome} is singular (rank {rank} of {predictors})")]
    SingularCovariance {
        outcome: String,
        rank: usize,
        predictors: usize,
    },

    #[error("Non-finite {quantity} for {lval} {op} {rval}")]
    NonFinite {
        quantity: &'static str,
        lval: String,
        op: &'static str,
        rval: String,
    },

    #[error("Unsupported relation {relation}: {reason}")]
    Unsupported { relation: String, reason: String },
}

impl AnticoagErrorCode for FitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SingularCovariance { .. } => error_code::SINGULAR_COVARIANCE,
            Self::NonRecursive { .. } | Self::Unidentified { .. } => {
                error_code::UNIDENTIFIED_MODEL
            }
            _ => error_code::FIT_ERROR,
        }
    }
}
