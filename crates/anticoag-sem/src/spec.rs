//! Textual path model descriptions.
//!
//! One relation per line: `lhs OP rhs1 + rhs2 + ...` with `OP` one of `~`,
//! `~~`, `=~`. `#` starts a comment; blank lines are skipped.

use std::collections::HashSet;

use anticoag_core::errors::ModelError;

use crate::relation::RelationKind;

/// One parsed line of a model description.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRelation {
    pub kind: RelationKind,
    pub lval: String,
    pub rvals: Vec<String>,
    /// 1-based source line.
    pub line: usize,
}

/// A regression equation: an outcome and its predictors in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub outcome: String,
    pub predictors: Vec<String>,
}

/// A parsed model description.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    relations: Vec<SpecRelation>,
}

impl ModelSpec {
    /// Parse a model description.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let mut relations = Vec::new();
        let mut seen: HashSet<(RelationKind, String, String)> = HashSet::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let (kind, lhs, rhs) = split_operator(content).ok_or_else(|| {
                ModelError::MissingOperator {
                    line,
                    text: content.to_string(),
                }
            })?;

            let lval = lhs.trim();
            if lval.is_empty() {
                return Err(ModelError::EmptySide { line, side: "left" });
            }
            check_identifier(lval, line)?;

            let mut rvals = Vec::new();
            for term in rhs.split('+') {
                let term = term.trim();
                if term.is_empty() {
                    return Err(ModelError::EmptySide { line, side: "right" });
                }
                check_identifier(term, line)?;
                if !seen.insert((kind, lval.to_string(), term.to_string())) {
                    return Err(ModelError::DuplicateRelation {
                        line,
                        relation: format!("{lval} {kind} {term}"),
                    });
                }
                rvals.push(term.to_string());
            }

            relations.push(SpecRelation {
                kind,
                lval: lval.to_string(),
                rvals,
                line,
            });
        }

        if relations.is_empty() {
            return Err(ModelError::Empty);
        }
        Ok(Self { relations })
    }

    /// All parsed lines in source order.
    pub fn relations(&self) -> &[SpecRelation] {
        &self.relations
    }

    /// Regression equations, merged per outcome in first-appearance order.
    pub fn equations(&self) -> Vec<Equation> {
        let mut equations: Vec<Equation> = Vec::new();
        for rel in self.relations.iter().filter(|r| r.kind == RelationKind::Regression) {
            match equations.iter_mut().find(|e| e.outcome == rel.lval) {
                Some(eq) => eq.predictors.extend(rel.rvals.iter().cloned()),
                None => equations.push(Equation {
                    outcome: rel.lval.clone(),
                    predictors: rel.rvals.clone(),
                }),
            }
        }
        equations
    }

    /// Number of declared regression paths (predictor → outcome pairs).
    pub fn regression_path_count(&self) -> usize {
        self.equations().iter().map(|e| e.predictors.len()).sum()
    }

    /// Every variable named by the model, in first-appearance order.
    pub fn variables(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for rel in &self.relations {
            for name in std::iter::once(&rel.lval).chain(rel.rvals.iter()) {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
        }
        out
    }

    /// Variables that appear as a regression outcome.
    pub fn endogenous(&self) -> Vec<String> {
        self.equations().into_iter().map(|e| e.outcome).collect()
    }
}

impl std::str::FromStr for ModelSpec {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split a line at its operator, trying the two-character operators first.
fn split_operator(content: &str) -> Option<(RelationKind, &str, &str)> {
    RelationKind::ALL.into_iter().find_map(|kind| {
        content
            .split_once(kind.op())
            .map(|(lhs, rhs)| (kind, lhs, rhs))
    })
}

fn check_identifier(name: &str, line: usize) -> Result<(), ModelError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(ModelError::InvalidIdentifier {
            line,
            name: name.to_string(),
        })
    }
}
