//! # anticoag-sem
//!
//! Structural equation (path) models over observed variables: the textual
//! model description, the estimator capability, and the fitted relation table.

pub mod covariance;
pub mod estimator;
pub mod fitted;
pub mod recursion;
pub mod relation;
pub mod significance;
pub mod spec;

pub use estimator::{RecursivePathEstimator, SemEstimator};
pub use fitted::{FittedModel, FittedRelation, NOT_IDENTIFIED_MARK, NOT_IDENTIFIED_NOTE};
pub use relation::RelationKind;
pub use spec::{Equation, ModelSpec, SpecRelation};
