//! Path graph construction errors.

use super::error_code::{self, AnticoagErrorCode};

/// Errors raised while building the path graph from fitted relations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Fitted path references {variable}, which has no node in the layout")]
    UnknownVariable { variable: String },

    #[error("Layout places {variable} twice")]
    DuplicateNode { variable: String },
}

impl AnticoagErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
