//! Shared data types passed between pipeline stages.

pub mod observed;

pub use observed::ObservedTable;
