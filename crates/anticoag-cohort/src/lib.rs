//! # anticoag-cohort
//!
//! Seeded synthesis of the simulated patient cohort. Treatments and risk
//! covariates are Bernoulli draws; the two imaging outcomes are linear in the
//! indicators plus Gaussian noise.

pub mod record;
pub mod summary;
pub mod synthesizer;
pub mod table;

pub use record::PatientRecord;
pub use summary::ColumnSummary;
pub use synthesizer::synthesize;
pub use table::CohortTable;
