//! Top-level configuration with layered resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CohortConfig, FitConfig, ModelConfig, RenderConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ANTICOAG_*`)
/// 3. Config file (`--config PATH`, else `anticoag.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnticoagConfig {
    pub cohort: CohortConfig,
    pub model: ModelConfig,
    pub fit: FitConfig,
    pub render: RenderConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub output: Option<String>,
    pub open_viewer: Option<bool>,
}

impl AnticoagConfig {
    /// Load configuration with layered resolution rooted at `root`.
    ///
    /// An explicit `--config` path must exist; the implicit project file is
    /// optional.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: config file
        match cli_overrides.and_then(|c| c.config_path.as_ref()) {
            Some(explicit) => {
                let path = if explicit.is_absolute() {
                    explicit.clone()
                } else {
                    root.join(explicit)
                };
                Self::merge_toml_file(&mut config, &path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            patients = config.cohort.effective_patients(),
            seed = config.cohort.effective_seed(),
            output = config.render.effective_output(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AnticoagConfig) -> Result<(), ConfigError> {
        let fail = |field: &str, message: &str| {
            Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            })
        };

        if config.cohort.patients == Some(0) {
            return fail("cohort.patients", "must be greater than 0");
        }
        for (field, p) in [
            ("cohort.treatment_probability", config.cohort.treatment_probability),
            ("cohort.risk_probability", config.cohort.risk_probability),
        ] {
            if let Some(p) = p {
                if !(0.0..=1.0).contains(&p) {
                    return fail(field, "must be between 0.0 and 1.0");
                }
            }
        }
        if let Some(sd) = config.cohort.noise_sd {
            if !sd.is_finite() || sd <= 0.0 {
                return fail("cohort.noise_sd", "must be a positive finite number");
            }
        }
        if let Some(tol) = config.fit.rank_tolerance {
            if !tol.is_finite() || tol <= 0.0 || tol >= 1.0 {
                return fail("fit.rank_tolerance", "must be between 0.0 and 1.0 (exclusive)");
            }
        }
        if let Some(dpi) = config.render.dpi {
            if dpi == 0 || dpi > 1200 {
                return fail("render.dpi", "must be between 1 and 1200");
            }
        }
        for (field, v) in [
            ("render.width_in", config.render.width_in),
            ("render.height_in", config.render.height_in),
            ("render.node_size", config.render.node_size),
            ("render.edge_node_size", config.render.edge_node_size),
            ("render.arrow_size", config.render.arrow_size),
        ] {
            if let Some(v) = v {
                if !v.is_finite() || v <= 0.0 {
                    return fail(field, "must be a positive finite number");
                }
            }
        }
        if let Some(pos) = config.render.label_position {
            if !(0.0..=1.0).contains(&pos) {
                return fail("render.label_position", "must be between 0.0 and 1.0");
            }
        }
        if let Some(ref output) = config.render.output {
            if output.trim().is_empty() {
                return fail("render.output", "must not be empty");
            }
        }
        if let Some(ref layout) = config.render.layout {
            if layout.nodes.is_empty() {
                return fail("render.layout.nodes", "must place at least one node");
            }
            let mut seen = HashSet::new();
            for node in &layout.nodes {
                if !seen.insert(node.variable.as_str()) {
                    return Err(ConfigError::ValidationFailed {
                        field: "render.layout.nodes".to_string(),
                        message: format!("{} is placed twice", node.variable),
                    });
                }
                if !node.x.is_finite() || !node.y.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: "render.layout.nodes".to_string(),
                        message: format!("{} has a non-finite coordinate", node.variable),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut AnticoagConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AnticoagConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut AnticoagConfig, other: &AnticoagConfig) {
        // Cohort
        if other.cohort.patients.is_some() {
            base.cohort.patients = other.cohort.patients;
        }
        if other.cohort.seed.is_some() {
            base.cohort.seed = other.cohort.seed;
        }
        if other.cohort.treatment_probability.is_some() {
            base.cohort.treatment_probability = other.cohort.treatment_probability;
        }
        if other.cohort.risk_probability.is_some() {
            base.cohort.risk_probability = other.cohort.risk_probability;
        }
        if other.cohort.noise_sd.is_some() {
            base.cohort.noise_sd = other.cohort.noise_sd;
        }

        // Model
        if other.model.spec.is_some() {
            base.model.spec = other.model.spec.clone();
        }

        // Fit
        if other.fit.pseudo_inverse.is_some() {
            base.fit.pseudo_inverse = other.fit.pseudo_inverse;
        }
        if other.fit.rank_tolerance.is_some() {
            base.fit.rank_tolerance = other.fit.rank_tolerance;
        }

        // Render
        let (r, o) = (&mut base.render, &other.render);
        if o.output.is_some() {
            r.output = o.output.clone();
        }
        if o.dpi.is_some() {
            r.dpi = o.dpi;
        }
        if o.width_in.is_some() {
            r.width_in = o.width_in;
        }
        if o.height_in.is_some() {
            r.height_in = o.height_in;
        }
        if o.title.is_some() {
            r.title = o.title.clone();
        }
        if o.node_size.is_some() {
            r.node_size = o.node_size;
        }
        if o.edge_node_size.is_some() {
            r.edge_node_size = o.edge_node_size;
        }
        if o.arrow_size.is_some() {
            r.arrow_size = o.arrow_size;
        }
        if o.label_offset.is_some() {
            r.label_offset = o.label_offset;
        }
        if o.label_position.is_some() {
            r.label_position = o.label_position;
        }
        if o.open_viewer.is_some() {
            r.open_viewer = o.open_viewer;
        }
        if o.layout.is_some() {
            r.layout = o.layout.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ANTICOAG_COHORT_SEED`, `ANTICOAG_RENDER_DPI`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut AnticoagConfig) {
        if let Ok(val) = std::env::var("ANTICOAG_COHORT_PATIENTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.cohort.patients = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ANTICOAG_COHORT_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.cohort.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ANTICOAG_COHORT_NOISE_SD") {
            if let Ok(v) = val.parse::<f64>() {
                config.cohort.noise_sd = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ANTICOAG_FIT_PSEUDO_INVERSE") {
            if let Ok(v) = val.parse::<bool>() {
                config.fit.pseudo_inverse = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ANTICOAG_RENDER_OUTPUT") {
            config.render.output = Some(val);
        }
        if let Ok(val) = std::env::var("ANTICOAG_RENDER_DPI") {
            if let Ok(v) = val.parse::<u32>() {
                config.render.dpi = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ANTICOAG_RENDER_OPEN_VIEWER") {
            if let Ok(v) = val.parse::<bool>() {
                config.render.open_viewer = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AnticoagConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.output {
            config.render.output = Some(v.clone());
        }
        if let Some(v) = cli.open_viewer {
            config.render.open_viewer = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
