//! Renders a collection into its HTML and Markdown working artifacts.

use std::path::PathBuf;

use apidocs_render::{ArtifactFormat, Renderer};

use crate::error::BuildError;
use crate::resolver::CollectionSource;

/// Working filename of the rendered HTML document.
pub const HTML_WORK_FILE: &str = "documentation.html";

/// Working filename of the rendered Markdown document.
pub const MARKDOWN_WORK_FILE: &str = "documentation.md";

/// Extension the HTML artifact is published under.
pub const PUBLISHED_PAGE_EXTENSION: &str = "php";

/// A file the renderer wrote into the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Output format
    pub format: ArtifactFormat,

    /// Location in the working directory
    pub path: PathBuf,

    /// Captured renderer output
    pub log: String,
}

/// Both artifacts of a successful render.
#[derive(Debug, Clone)]
pub struct RenderedArtifacts {
    pub html: RenderedArtifact,
    pub markdown: RenderedArtifact,
}

/// Invokes a renderer once per output format.
pub struct RenderInvoker<R> {
    renderer: R,
    work_dir: PathBuf,
}

impl<R: Renderer> RenderInvoker<R> {
    /// Create an invoker writing artifacts into `work_dir`.
    pub fn new(renderer: R, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            work_dir: work_dir.into(),
        }
    }

    /// Renderer this invoker drives.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render the HTML artifact, then the Markdown artifact.
    ///
    /// Stops at the first failing render; nothing downstream runs.
    pub async fn render_all(
        &self,
        source: &CollectionSource,
    ) -> Result<RenderedArtifacts, BuildError> {
        let html = self.render(source, ArtifactFormat::Html).await?;
        let markdown = self.render(source, ArtifactFormat::Markdown).await?;
        Ok(RenderedArtifacts { html, markdown })
    }

    /// Render a single format into its working file.
    pub async fn render(
        &self,
        source: &CollectionSource,
        format: ArtifactFormat,
    ) -> Result<RenderedArtifact, BuildError> {
        let path = self.work_dir.join(work_file_name(format));

        tracing::debug!(
            "Rendering {} with {} into {}",
            source.path().display(),
            self.renderer.name(),
            path.display()
        );

        let result = self
            .renderer
            .render(source.path(), &path, format)
            .await
            .map_err(|e| BuildError::RenderFailure {
                format,
                status: None,
                output: e.to_string(),
            })?;

        if !result.success() {
            return Err(BuildError::RenderFailure {
                format,
                status: result.status,
                output: result.output,
            });
        }

        let summary = console_summary(&result.output, format);
        if !summary.is_empty() {
            tracing::info!("{}", summary);
        }

        Ok(RenderedArtifact {
            format,
            path,
            log: result.output,
        })
    }
}

/// Working filename for a format.
pub fn work_file_name(format: ArtifactFormat) -> &'static str {
    match format {
        ArtifactFormat::Html => HTML_WORK_FILE,
        ArtifactFormat::Markdown => MARKDOWN_WORK_FILE,
    }
}

/// One-line console text for a renderer log.
///
/// The HTML run reports the filename it wrote; the page is published as a
/// server script, so the format name is swapped for the published extension.
/// Only the console text is rewritten, never the artifact.
pub fn console_summary(log: &str, format: ArtifactFormat) -> String {
    let line = log.replace('\n', "");
    match format {
        ArtifactFormat::Html => {
            line.replace(ArtifactFormat::Html.name(), PUBLISHED_PAGE_EXTENSION)
        }
        ArtifactFormat::Markdown => line,
    }
}
