//! Trait definitions for documentation renderers.

use std::fmt;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// Output format requested from a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactFormat {
    Html,
    Markdown,
}

impl ArtifactFormat {
    /// Format name as it appears in renderer logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Captured result of one renderer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Combined stdout and stderr text
    pub output: String,

    /// Exit code, `None` when the process was terminated by a signal
    pub status: Option<i32>,
}

impl RenderOutput {
    /// Whether the renderer exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Errors raised before a renderer produced an exit status.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to launch {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("Renderer timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to collect renderer output: {0}")]
    Wait(String),
}

/// A tool that turns a collection file into a documentation artifact.
///
/// The renderer writes the artifact to `output` itself; callers only see
/// the captured log text and exit status.
pub trait Renderer: Send + Sync {
    /// Renderer identifier used in logs (e.g., "docgen")
    fn name(&self) -> &str;

    /// Render `input` into `output` in the requested format.
    fn render(
        &self,
        input: &Path,
        output: &Path,
        format: ArtifactFormat,
    ) -> impl Future<Output = Result<RenderOutput, RenderError>> + Send;
}
