//! Sentence construction from a fitted relation table.

use std::fmt;

use anticoag_sem::FittedModel;

use super::templates;

/// One reported regression path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSentence {
    pub target: String,
    pub predictor: String,
    pub estimate: f64,
    pub p_value: f64,
    /// Copied from the fitted row; see `FittedRelation::identified`.
    pub identified: bool,
    pub text: String,
}

/// Header plus one sentence per regression row, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathReport {
    pub header: &'static str,
    pub sentences: Vec<PathSentence>,
}

impl PathReport {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for sentence in &self.sentences {
            writeln!(f, "{}", sentence.text)?;
        }
        Ok(())
    }
}

/// Describe every regression path of a fitted model. Variance rows are skipped.
pub fn describe_paths(model: &FittedModel) -> PathReport {
    let sentences = model
        .regressions()
        .map(|row| PathSentence {
            target: row.lval.clone(),
            predictor: row.rval.clone(),
            estimate: row.estimate,
            p_value: row.p_value,
            identified: row.identified,
            text: templates::render(&row.lval, &row.rval, row.estimate, row.p_value),
        })
        .collect();

    PathReport {
        header: templates::HEADER,
        sentences,
    }
}
