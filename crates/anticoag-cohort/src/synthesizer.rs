//! Seeded cohort synthesis.
//!
//! Columns are drawn one at a time in a fixed order (DOAC, Warfarin, High BMI,
//! High SBP, infarct noise, hemorrhage noise) so a seed always maps to the same
//! table.

use anticoag_core::config::CohortConfig;
use anticoag_core::errors::CohortError;
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;

use crate::record::PatientRecord;
use crate::table::CohortTable;

/// Synthesize the cohort described by `config`.
pub fn synthesize(config: &CohortConfig) -> Result<CohortTable, CohortError> {
    let n = config.effective_patients();
    if n == 0 {
        return Err(CohortError::EmptyCohort);
    }

    let treatment = bernoulli("treatment_probability", config.effective_treatment_probability())?;
    let risk = bernoulli("risk_probability", config.effective_risk_probability())?;

    let sd = config.effective_noise_sd();
    if !sd.is_finite() || sd <= 0.0 {
        return Err(CohortError::InvalidParameter {
            name: "noise_sd".to_string(),
            message: format!("{sd} is not a positive finite standard deviation"),
        });
    }
    let noise = Normal::new(0.0, sd).map_err(|e| CohortError::InvalidParameter {
        name: "noise_sd".to_string(),
        message: e.to_string(),
    })?;

    let seed = config.effective_seed();
    let mut rng = StdRng::seed_from_u64(seed);

    let doac = draw_indicators(&mut rng, &treatment, n);
    let warfarin = draw_indicators(&mut rng, &treatment, n);
    let high_bmi = draw_indicators(&mut rng, &risk, n);
    let high_sbp = draw_indicators(&mut rng, &risk, n);
    let mca_noise: Vec<f64> = noise.sample_iter(&mut rng).take(n).collect();
    let hemorrhage_noise: Vec<f64> = noise.sample_iter(&mut rng).take(n).collect();

    let records: Vec<PatientRecord> = (0..n)
        .map(|i| {
            let (d, w) = (doac[i], warfarin[i]);
            let (bmi, sbp) = (high_bmi[i], high_sbp[i]);
            PatientRecord {
                doac_treatment: d,
                warfarin_treatment: w,
                no_coagulation_treatment: 1 - d - w,
                mca_infarcts: 1.0 - f64::from(d) + mca_noise[i],
                hemorrhagic_processes: f64::from(d + w) * f64::from(bmi + sbp)
                    + hemorrhage_noise[i],
                high_bmi: bmi,
                high_sbp: sbp,
            }
        })
        .collect();

    let table = CohortTable::new(records, seed);
    tracing::info!(rows = table.len(), seed, "cohort synthesized");
    let off = table.off_indicator_rows();
    if off > 0 {
        tracing::debug!(
            rows = off,
            "patients on both treatments carry No_Coagulation_Treatment = -1"
        );
    }
    Ok(table)
}

fn bernoulli(name: &str, p: f64) -> Result<Bernoulli, CohortError> {
    Bernoulli::new(p).map_err(|e| CohortError::InvalidParameter {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn draw_indicators(rng: &mut StdRng, dist: &Bernoulli, n: usize) -> Vec<i8> {
    dist.sample_iter(rng).take(n).map(i8::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(patients: usize, seed: u64) -> CohortConfig {
        CohortConfig {
            patients: Some(patients),
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn zero_patients_is_rejected() {
        assert!(matches!(synthesize(&config(0, 1)), Err(CohortError::EmptyCohort)));
    }

    #[test]
    fn invalid_probability_is_rejected() {
        let cfg = CohortConfig {
            treatment_probability: Some(1.2),
            ..config(10, 1)
        };
        assert!(matches!(
            synthesize(&cfg),
            Err(CohortError::InvalidParameter { ref name, .. }) if name == "treatment_probability"
        ));
    }

    #[test]
    fn invalid_noise_is_rejected() {
        let cfg = CohortConfig {
            noise_sd: Some(f64::NAN),
            ..config(10, 1)
        };
        assert!(matches!(synthesize(&cfg), Err(CohortError::InvalidParameter { .. })));
    }

    #[test]
    fn certain_treatment_gives_negative_no_coagulation() {
        let cfg = CohortConfig {
            treatment_probability: Some(1.0),
            ..config(20, 3)
        };
        let table = synthesize(&cfg).unwrap();
        assert_eq!(table.off_indicator_rows(), 20);
        assert!(table
            .records()
            .iter()
            .all(|r| r.no_coagulation_treatment == -1));
    }
}
