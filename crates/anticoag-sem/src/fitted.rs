//! Fitted relation table produced by an estimator.

use std::fmt;

use crate::relation::RelationKind;

/// One estimated parameter: `lval op rval` with its estimate and Wald test.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedRelation {
    pub lval: String,
    pub kind: RelationKind,
    pub rval: String,
    pub estimate: f64,
    pub std_err: f64,
    pub z_value: f64,
    pub p_value: f64,
    /// False when the coefficient is confounded with collinear predictors;
    /// its standard error and p-value then describe the minimum-norm solution.
    pub identified: bool,
}

/// Marker after the p-value of a row that is not separately identified.
pub const NOT_IDENTIFIED_MARK: &str = "*";

/// Footnote printed below a table with marked rows.
pub const NOT_IDENTIFIED_NOTE: &str =
    "* not separately identified: predictors are collinear, only contrasts between them are estimable";

impl FittedRelation {
    pub fn is_regression(&self) -> bool {
        self.kind == RelationKind::Regression
    }
}

/// Result of fitting a path model: the relation table plus fit summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    pub estimator: &'static str,
    pub n_obs: usize,
    pub log_likelihood: f64,
    pub parameter_count: usize,
    relations: Vec<FittedRelation>,
}

impl FittedModel {
    pub fn new(
        estimator: &'static str,
        n_obs: usize,
        log_likelihood: f64,
        parameter_count: usize,
        relations: Vec<FittedRelation>,
    ) -> Self {
        Self {
            estimator,
            n_obs,
            log_likelihood,
            parameter_count,
            relations,
        }
    }

    /// The full fitted relation table.
    pub fn inspect(&self) -> &[FittedRelation] {
        &self.relations
    }

    /// Regression rows only, in table order.
    pub fn regressions(&self) -> impl Iterator<Item = &FittedRelation> {
        self.relations.iter().filter(|r| r.is_regression())
    }

    /// Look up one row.
    pub fn relation(&self, lval: &str, kind: RelationKind, rval: &str) -> Option<&FittedRelation> {
        self.relations
            .iter()
            .find(|r| r.kind == kind && r.lval == lval && r.rval == rval)
    }

    /// Rows whose estimate is not separately identified.
    pub fn unidentified(&self) -> impl Iterator<Item = &FittedRelation> {
        self.relations.iter().filter(|r| !r.identified)
    }

    /// Akaike information criterion, `2k - 2 ln L`.
    pub fn aic(&self) -> f64 {
        2.0 * self.parameter_count as f64 - 2.0 * self.log_likelihood
    }
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lw = self
            .relations
            .iter()
            .map(|r| r.lval.len())
            .chain(std::iter::once(4))
            .max()
            .unwrap_or(4);
        let rw = self
            .relations
            .iter()
            .map(|r| r.rval.len())
            .chain(std::iter::once(4))
            .max()
            .unwrap_or(4);

        writeln!(
            f,
            "{:<lw$}  {:<2}  {:<rw$}  {:>10}  {:>10}  {:>10}  {:>10}",
            "lval", "op", "rval", "Estimate", "Std. Err", "z-value", "p-value",
        )?;
        for r in &self.relations {
            writeln!(
                f,
                "{:<lw$}  {:<2}  {:<rw$}  {:>10.6}  {:>10.6}  {:>10.4}  {:>10.6}{}",
                r.lval,
                r.kind.op(),
                r.rval,
                r.estimate,
                r.std_err,
                r.z_value,
                r.p_value,
                if r.identified {
                    String::new()
                } else {
                    format!(" {NOT_IDENTIFIED_MARK}")
                },
            )?;
        }
        if self.unidentified().next().is_some() {
            writeln!(f, "{NOT_IDENTIFIED_NOTE}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(lval: &str, kind: RelationKind, rval: &str, estimate: f64) -> FittedRelation {
        FittedRelation {
            lval: lval.to_string(),
            kind,
            rval: rval.to_string(),
            estimate,
            std_err: 0.1,
            z_value: estimate / 0.1,
            p_value: 0.5,
            identified: true,
        }
    }

    #[test]
    fn regressions_filter_and_lookup() {
        let model = FittedModel::new(
            "test",
            10,
            -5.0,
            3,
            vec![
                row("y", RelationKind::Regression, "x", 1.0),
                row("y", RelationKind::Covariance, "y", 0.2),
            ],
        );
        assert_eq!(model.regressions().count(), 1);
        assert_eq!(model.inspect().len(), 2);
        assert!(model.relation("y", RelationKind::Covariance, "y").is_some());
        assert!(model.relation("y", RelationKind::Regression, "y").is_none());
        assert!((model.aic() - 16.0).abs() < 1e-12);
    }

    #[test]
    fn table_lists_every_row_with_header() {
        let model = FittedModel::new(
            "test",
            10,
            0.0,
            1,
            vec![row("Outcome", RelationKind::Regression, "Predictor", 1.25)],
        );
        let text = model.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Estimate") && lines[0].contains("p-value"));
        assert!(lines[1].starts_with("Outcome"));
        assert!(lines[1].contains(" ~ "));
        assert!(lines[1].contains("1.250000"));
        assert!(!lines[1].ends_with(NOT_IDENTIFIED_MARK));
    }

    #[test]
    fn unidentified_rows_are_marked_and_footnoted() {
        let mut aliased = row("y", RelationKind::Regression, "a", 0.4);
        aliased.identified = false;
        let model = FittedModel::new(
            "test",
            10,
            0.0,
            3,
            vec![aliased, row("y", RelationKind::Regression, "b", 1.0)],
        );
        assert_eq!(model.unidentified().count(), 1);

        let text = model.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with(" *"));
        assert!(!lines[2].ends_with('*'));
        assert_eq!(lines[3], NOT_IDENTIFIED_NOTE);
    }
}
