//! # anticoag-core
//!
//! Shared plumbing for the anticoagulant path model: error enums, layered
//! configuration, tracing setup, the observed-data table handed to the
//! estimator, and the variable/model constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::AnticoagConfig;
pub use types::ObservedTable;
