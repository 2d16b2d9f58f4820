//! The fitting capability and its implementations.

pub mod recursive;

use anticoag_core::errors::FitError;
use anticoag_core::ObservedTable;

use crate::fitted::FittedModel;
use crate::spec::ModelSpec;

pub use recursive::RecursivePathEstimator;

/// Fits a parsed model description to observed data.
pub trait SemEstimator {
    /// Short name recorded on the fitted model.
    fn name(&self) -> &'static str;

    /// Estimate every free parameter of `spec` from `data`.
    fn fit(&self, spec: &ModelSpec, data: &ObservedTable) -> Result<FittedModel, FitError>;
}
