//! Shared constants for the anticoagulant path model.

pub const DOAC_TREATMENT: &str = "DOAC_Treatment";
pub const WARFARIN_TREATMENT: &str = "Warfarin_Treatment";
pub const NO_COAGULATION_TREATMENT: &str = "No_Coagulation_Treatment";
pub const MCA_INFARCTS: &str = "MCA_Infarcts";
pub const HEMORRHAGIC_PROCESSES: &str = "Hemorrhagic_Processes";
pub const HIGH_BMI: &str = "High_BMI";
pub const HIGH_SBP: &str = "High_SBP";

/// Column order of the synthesized cohort table.
pub const COHORT_COLUMNS: [&str; 7] = [
    DOAC_TREATMENT,
    WARFARIN_TREATMENT,
    NO_COAGULATION_TREATMENT,
    MCA_INFARCTS,
    HEMORRHAGIC_PROCESSES,
    HIGH_BMI,
    HIGH_SBP,
];

/// The two regression equations relating treatments and risk factors to outcomes.
pub const DEFAULT_MODEL_SPEC: &str = "
MCA_Infarcts ~ DOAC_Treatment + Warfarin_Treatment + No_Coagulation_Treatment
Hemorrhagic_Processes ~ DOAC_Treatment + Warfarin_Treatment + High_BMI + High_SBP + MCA_Infarcts
";

/// Default number of simulated patients.
pub const DEFAULT_PATIENTS: usize = 500;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default Bernoulli probability for each treatment indicator.
pub const DEFAULT_TREATMENT_PROBABILITY: f64 = 0.5;

/// Default Bernoulli probability for each risk covariate.
pub const DEFAULT_RISK_PROBABILITY: f64 = 0.5;

/// Default standard deviation of the Gaussian outcome noise.
pub const DEFAULT_NOISE_SD: f64 = 0.5;

/// Default path diagram filename, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "sem_AntiCoagulants_Remy_Cohan.png";

/// Default raster resolution of the path diagram.
pub const DEFAULT_DPI: u32 = 300;

/// Default figure size in inches (width, height).
pub const DEFAULT_FIGURE_INCHES: (f64, f64) = (12.0, 11.0);

/// Default title drawn above the path diagram.
pub const DEFAULT_TITLE: &str = "Structural Equation Modeling Paths";

/// Relative tolerance on singular values below which a covariance matrix is rank deficient.
pub const DEFAULT_RANK_TOLERANCE: f64 = 1e-10;

/// Project config filename looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "anticoag.toml";
