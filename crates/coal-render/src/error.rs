use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Drawing backend failure. Carried as a message because plotters
    /// error types are generic over the backend.
    #[error("drawing failed: {0}")]
    Backend(String),
    #[error("nothing to draw for {path}")]
    EmptyFigure { path: PathBuf },
}

/// Map any plotters error into a `RenderError::Backend`.
pub(crate) fn backend<E: Display>(error: E) -> RenderError {
    RenderError::Backend(error.to_string())
}

pub type Result<T> = std::result::Result<T, RenderError>;
