//! AnticoagErrorCode trait for stable, greppable error codes.

/// Every error enum implements this to give the binary a structured code
/// to print in front of the human-readable message.
pub trait AnticoagErrorCode {
    /// Returns the error code string (e.g., "FIT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const COHORT_ERROR: &str = "COHORT_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const FIT_ERROR: &str = "FIT_ERROR";
pub const SINGULAR_COVARIANCE: &str = "SINGULAR_COVARIANCE";
pub const UNIDENTIFIED_MODEL: &str = "UNIDENTIFIED_MODEL";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
