//! Chart renderer port
//!
//! Renders a [`ChartSpec`] to an image file and returns where it was written.
//! Rendering is blocking work; callers run it off the async executor.

use ecobot_domain::{ChartError, ChartSpec};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a chart artifact
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{0}")]
    InvalidParameters(#[from] ChartError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Render worker failed: {0}")]
    Worker(String),
}

/// Port for writing chart images
pub trait ChartRenderer: Send + Sync {
    /// Validate `spec`, draw it and return the path of the written file.
    fn render(&self, spec: &ChartSpec) -> Result<PathBuf, RenderError>;
}
