//! # anticoag-cli
//!
//! The end-to-end run behind the `anticoag-sem` binary.

pub mod pipeline;

pub use pipeline::{analyze, run, write_results, Analysis};
