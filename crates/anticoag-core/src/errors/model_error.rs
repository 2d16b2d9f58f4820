//! Model description parse errors.

use super::error_code::{self, AnticoagErrorCode};

/// Errors raised while parsing the textual path model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model description declares no relations")]
    Empty,

    #[error("Line {line}: no relation operator in `{text}`")]
    MissingOperator { line: usize, text: String },

    #[error("Line {line}: empty {side}-hand side")]
    EmptySide { line: usize, side: &'static str },

    #[error("Line {line}: invalid variable name `{name}`")]
    InvalidIdentifier { line: usize, name: String },

    #[error("Line {line}: relation `{relation}` declared twice")]
    DuplicateRelation { line: usize, relation: String },
}

impl AnticoagErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
