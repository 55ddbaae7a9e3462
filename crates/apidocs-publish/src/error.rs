//! Errors raised by the publishing pipeline.

use std::path::PathBuf;

use apidocs_render::ArtifactFormat;

/// Errors that can occur during a publishing run.
///
/// Every variant is fatal to the run. A `PublishFailure` may leave earlier
/// destinations already replaced; nothing is rolled back.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No file found at {0}")]
    InvalidInputPath(String),

    #[error(
        "Renderer failed producing {format} (exit status {}):\n{output}",
        describe_status(.status)
    )]
    RenderFailure {
        format: ArtifactFormat,
        status: Option<i32>,
        output: String,
    },

    #[error("Destination directory does not exist: {}", .path.display())]
    PublishFailure { path: PathBuf },

    #[error("Failed to read artifact: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}
