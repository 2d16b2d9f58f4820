//! Drawing and image output errors.

use super::error_code::{self, AnticoagErrorCode};

/// Errors raised while rendering the path diagram.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Cannot write {path}: {message}")]
    Io { path: String, message: String },

    #[error("Drawing backend failed: {0}")]
    Backend(String),

    #[error("Invalid canvas: {0}")]
    InvalidCanvas(String),
}

impl AnticoagErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        error_code::RENDER_ERROR
    }
}
