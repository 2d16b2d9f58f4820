//! Pipeline errors.

use super::error_code::{self, AnticoagErrorCode};
use super::{CohortError, ConfigError, FitError, GraphError, ModelError, RenderError};

/// Errors that can abort a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Cohort error: {0}")]
    Cohort(#[from] CohortError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Fit error: {0}")]
    Fit(#[from] FitError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Console output failed: {0}")]
    Output(#[from] std::io::Error),
}

impl AnticoagErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cohort(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Fit(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Output(_) => error_code::OUTPUT_ERROR,
        }
    }
}
