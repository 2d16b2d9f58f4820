//! Cohort synthesis errors.

use super::error_code::{self, AnticoagErrorCode};

/// Errors that can occur while synthesizing the patient cohort.
#[derive(Debug, thiserror::Error)]
pub enum CohortError {
    #[error("Cohort must contain at least one patient")]
    EmptyCohort,

    #[error("Invalid cohort parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },
}

impl AnticoagErrorCode for CohortError {
    fn error_code(&self) -> &'static str {
        error_code::COHORT_ERROR
    }
}
