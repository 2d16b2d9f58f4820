//! Error handling for the anticoagulant path model.
//! One error enum per subsystem, `thiserror` only.

pub mod cohort_error;
pub mod config_error;
pub mod error_code;
pub mod fit_error;
pub mod graph_error;
pub mod model_error;
pub mod pipeline_error;
pub mod render_error;

pub use cohort_error::CohortError;
pub use config_error::ConfigError;
pub use error_code::AnticoagErrorCode;
pub use fit_error::FitError;
pub use graph_error::GraphError;
pub use model_error::ModelError;
pub use pipeline_error::PipelineError;
pub use render_error::RenderError;
