//! Maximum-likelihood estimation for recursive path models over observed variables.
//!
//! With an acyclic regression graph and uncorrelated disturbances the normal
//! likelihood factorizes into one conditional regression per outcome, so the
//! ML estimates come from the divisor-n sample covariance:
//!
//! - `beta = Sxx^-1 Sxy`
//! - `psi = Syy - beta' Sxy` (residual variance)
//! - `Var(beta) = psi / n * Sxx^-1`, `Var(psi) = 2 psi^2 / n`
//!
//! A rank-deficient `Sxx` is solved with the pseudo-inverse. Coefficient `j`
//! is then separately identified only when `e_j` lies in the row space of
//! `Sxx`, i.e. `(Sxx^+ Sxx)[j, j] == 1`.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::time::Instant;

use anticoag_core::config::FitConfig;
use anticoag_core::constants::DEFAULT_RANK_TOLERANCE;
use anticoag_core::errors::FitError;
use anticoag_core::ObservedTable;
use nalgebra::DMatrix;

use super::SemEstimator;
use crate::covariance::SampleMoments;
use crate::fitted::{FittedModel, FittedRelation};
use crate::recursion::causal_order;
use crate::relation::RelationKind;
use crate::significance::{two_sided_p, z_value};
use crate::spec::{Equation, ModelSpec};

/// Tolerance on the diagonal of the projection `Sxx^+ Sxx`.
const IDENTIFIED_TOLERANCE: f64 = 1e-6;

/// Equation-wise ML estimator for recursive observed-variable path models.
#[derive(Debug, Clone)]
pub struct RecursivePathEstimator {
    /// Fall back to the Moore-Penrose pseudo-inverse for rank-deficient predictors.
    pub pseudo_inverse: bool,
    /// Singular values below `rank_tolerance * max_singular_value` count as zero.
    pub rank_tolerance: f64,
}

impl Default for RecursivePathEstimator {
    fn default() -> Self {
        Self {
            pseudo_inverse: true,
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
        }
    }
}

impl RecursivePathEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FitConfig) -> Self {
        Self {
            pseudo_inverse: config.effective_pseudo_inverse(),
            rank_tolerance: config.effective_rank_tolerance(),
        }
    }

    pub fn with_pseudo_inverse(mut self, enabled: bool) -> Self {
        self.pseudo_inverse = enabled;
        self
    }

    /// Inverse (or pseudo-inverse) of a predictor covariance block.
    fn invert(&self, outcome: &str, sxx: &DMatrix<f64>) -> Result<DMatrix<f64>, FitError> {
        let k = sxx.nrows();
        let svd = sxx.clone().svd(true, true);
        let eps = self.rank_tolerance * svd.singular_values.max();
        let rank = svd.rank(eps);
        let singular = || FitError::SingularCovariance {
            outcome: outcome.to_string(),
            rank,
            predictors: k,
        };

        if rank < k {
            if !self.pseudo_inverse {
                return Err(singular());
            }
            tracing::warn!(
                outcome,
                rank,
                predictors = k,
                "predictor covariance is rank deficient, using Moore-Penrose pseudo-inverse; \
                 affected coefficients are marked as not identified"
            );
        }
        svd.pseudo_inverse(eps).map_err(|_| singular())
    }

    fn fit_equation(
        &self,
        eq: &Equation,
        moments: &SampleMoments,
        col: &HashMap<&str, usize>,
    ) -> Result<EquationFit, FitError> {
        let n = moments.n_obs;
        let k = eq.predictors.len();
        if n <= k + 1 {
            return Err(FitError::Unidentified {
                outcome: eq.outcome.clone(),
                parameters: k + 1,
                n_obs: n,
            });
        }

        let y = col[eq.outcome.as_str()];
        let xs: Vec<usize> = eq.predictors.iter().map(|p| col[p.as_str()]).collect();

        let sxx = moments.block(&xs, &xs);
        let sxy = moments.cross(&xs, y);
        let syy = moments.variance(y);

        let inv = self.invert(&eq.outcome, &sxx)?;
        let beta = &inv * &sxy;
        let psi = syy - beta.dot(&sxy);
        let projection = &inv * &sxx;

        let nf = n as f64;
        let mut rows = Vec::with_capacity(k + 1);
        for (j, predictor) in eq.predictors.iter().enumerate() {
            let std_err = (psi / nf * inv[(j, j)]).sqrt();
            let identified = (projection[(j, j)] - 1.0).abs() < IDENTIFIED_TOLERANCE;
            let mut row =
                wald_row(&eq.outcome, RelationKind::Regression, predictor, beta[j], std_err)?;
            row.identified = identified;
            rows.push(row);
        }
        let psi_se = psi * (2.0 / nf).sqrt();
        rows.push(wald_row(&eq.outcome, RelationKind::Covariance, &eq.outcome, psi, psi_se)?);

        let log_likelihood = -0.5 * nf * ((2.0 * PI * psi).ln() + 1.0);
        tracing::debug!(
            outcome = %eq.outcome,
            predictors = k,
            residual_variance = psi,
            log_likelihood,
            "equation fitted"
        );

        Ok(EquationFit {
            rows,
            log_likelihood,
            parameters: k + 1,
        })
    }
}

struct EquationFit {
    rows: Vec<FittedRelation>,
    log_likelihood: f64,
    parameters: usize,
}

impl SemEstimator for RecursivePathEstimator {
    fn name(&self) -> &'static str {
        "recursive-ml"
    }

    fn fit(&self, spec: &ModelSpec, data: &ObservedTable) -> Result<FittedModel, FitError> {
        let started = Instant::now();
        let equations = spec.equations();
        let endogenous = spec.endogenous();

        for rel in spec.relations() {
            match rel.kind {
                RelationKind::Regression => {}
                RelationKind::Measurement => {
                    return Err(FitError::Unsupported {
                        relation: format!("{} =~ {}", rel.lval, rel.rvals.join(" + ")),
                        reason: "latent variables are not estimated".to_string(),
                    });
                }
                RelationKind::Covariance => {
                    for rval in &rel.rvals {
                        if rval != &rel.lval || !endogenous.contains(rval) {
                            return Err(FitError::Unsupported {
                                relation: format!("{} ~~ {}", rel.lval, rval),
                                reason: "only residual variances of outcomes are free".to_string(),
                            });
                        }
                    }
                }
            }
        }
        if equations.is_empty() {
            return Err(FitError::Unsupported {
                relation: "<model>".to_string(),
                reason: "no regression paths declared".to_string(),
            });
        }

        causal_order(&equations)?;

        let variables = spec.variables();
        let mut columns: Vec<&[f64]> = Vec::with_capacity(variables.len());
        for name in &variables {
            let column = data.column(name).ok_or_else(|| FitError::MissingVariable {
                variable: name.clone(),
            })?;
            columns.push(column);
        }

        let n_obs = data.n_obs();
        let moments = SampleMoments::from_columns(&columns).ok_or_else(|| FitError::Unidentified {
            outcome: equations[0].outcome.clone(),
            parameters: equations[0].predictors.len() + 1,
            n_obs,
        })?;
        for (j, name) in variables.iter().enumerate() {
            if moments.is_degenerate(j) {
                return Err(FitError::ZeroVariance {
                    variable: name.clone(),
                    n_obs,
                });
            }
        }

        let col: HashMap<&str, usize> = variables
            .iter()
            .enumerate()
            .map(|(j, name)| (name.as_str(), j))
            .collect();

        // Regression rows for every equation first, then residual variances.
        let mut regressions = Vec::new();
        let mut variances = Vec::new();
        let mut log_likelihood = 0.0;
        let mut parameter_count = 0;
        for eq in &equations {
            let fit = self.fit_equation(eq, &moments, &col)?;
            for row in fit.rows {
                if row.is_regression() {
                    regressions.push(row);
                } else {
                    variances.push(row);
                }
            }
            log_likelihood += fit.log_likelihood;
            parameter_count += fit.parameters;
        }
        regressions.extend(variances);

        tracing::info!(
            equations = equations.len(),
            paths = spec.regression_path_count(),
            n_obs,
            log_likelihood,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "path model fitted"
        );

        Ok(FittedModel::new(
            self.name(),
            n_obs,
            log_likelihood,
            parameter_count,
            regressions,
        ))
    }
}

/// Build a table row, refusing non-finite numbers.
fn wald_row(
    lval: &str,
    kind: RelationKind,
    rval: &str,
    estimate: f64,
    std_err: f64,
) -> Result<FittedRelation, FitError> {
    let z = z_value(estimate, std_err);
    let p = two_sided_p(z);
    let checks = [
        ("estimate", estimate),
        ("standard error", std_err),
        ("z-value", z),
        ("p-value", p),
    ];
    for (quantity, value) in checks {
        if !value.is_finite() {
            return Err(FitError::NonFinite {
                quantity,
                lval: lval.to_string(),
                op: kind.op(),
                rval: rval.to_string(),
            });
        }
    }
    Ok(FittedRelation {
        lval: lval.to_string(),
        kind,
        rval: rval.to_string(),
        estimate,
        std_err,
        z_value: z,
        p_value: p,
        identified: true,
    })
}
