//! Application errors.

use facet_core::{MeshError, SceneError};
use facet_render::RendererError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scene file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
