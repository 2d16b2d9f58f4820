//! One simulated patient.

use anticoag_core::constants::{
    DOAC_TREATMENT, HEMORRHAGIC_PROCESSES, HIGH_BMI, HIGH_SBP, MCA_INFARCTS,
    NO_COAGULATION_TREATMENT, WARFARIN_TREATMENT,
};

/// A row of the cohort table.
///
/// `no_coagulation_treatment` is derived as `1 - doac - warfarin` and is -1
/// for patients who received both treatments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientRecord {
    pub doac_treatment: i8,
    pub warfarin_treatment: i8,
    pub no_coagulation_treatment: i8,
    pub mca_infarcts: f64,
    pub hemorrhagic_processes: f64,
    pub high_bmi: i8,
    pub high_sbp: i8,
}

impl PatientRecord {
    /// True when the derived no-anticoagulation indicator is outside {0, 1}.
    pub fn has_off_indicator(&self) -> bool {
        !matches!(self.no_coagulation_treatment, 0 | 1)
    }

    /// Value of a named column as `f64`.
    pub fn value(&self, column: &str) -> Option<f64> {
        let v = match column {
            DOAC_TREATMENT => f64::from(self.doac_treatment),
            WARFARIN_TREATMENT => f64::from(self.warfarin_treatment),
            NO_COAGULATION_TREATMENT => f64::from(self.no_coagulation_treatment),
            MCA_INFARCTS => self.mca_infarcts,
            HEMORRHAGIC_PROCESSES => self.hemorrhagic_processes,
            HIGH_BMI => f64::from(self.high_bmi),
            HIGH_SBP => f64::from(self.high_sbp),
            _ => return None,
        };
        Some(v)
    }
}
