//! The synthesized cohort table.

use anticoag_core::constants::COHORT_COLUMNS;
use anticoag_core::ObservedTable;

use crate::record::PatientRecord;
use crate::summary::ColumnSummary;

/// Immutable table of simulated patients.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortTable {
    records: Vec<PatientRecord>,
    seed: u64,
}

impl CohortTable {
    pub(crate) fn new(records: Vec<PatientRecord>, seed: u64) -> Self {
        Self { records, seed }
    }

    /// Number of patients.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Seed the table was drawn with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &'static [&'static str] {
        &COHORT_COLUMNS
    }

    /// A named column as `f64` values, or `None` for an unknown name.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        if !COHORT_COLUMNS.contains(&name) {
            return None;
        }
        self.records.iter().map(|r| r.value(name)).collect()
    }

    /// Number of patients who received both treatments, whose derived
    /// no-anticoagulation indicator is therefore -1.
    pub fn off_indicator_rows(&self) -> usize {
        self.records.iter().filter(|r| r.has_off_indicator()).count()
    }

    /// Convert to the column table consumed by the estimator.
    pub fn to_observed(&self) -> ObservedTable {
        let mut table = ObservedTable::new();
        for name in COHORT_COLUMNS {
            let values = self
                .records
                .iter()
                .filter_map(|r| r.value(name))
                .collect();
            table.push_column(name, values);
        }
        table
    }

    /// Descriptive statistics for every column, in table order.
    pub fn summarize(&self) -> Vec<ColumnSummary> {
        COHORT_COLUMNS
            .iter()
            .map(|name| {
                let values = self.column(name).unwrap_or_default();
                ColumnSummary::compute(name, &values)
            })
            .collect()
    }
}
