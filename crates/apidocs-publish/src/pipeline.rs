//! The publishing pipeline.

use std::path::PathBuf;
use std::time::Instant;

use apidocs_render::Renderer;

use crate::error::BuildError;
use crate::invoker::RenderInvoker;
use crate::publisher::{PublishTargets, Publisher};
use crate::resolver::resolve_collection;
use crate::style::StyleOverride;
use crate::transformer::ArtifactTransformer;

/// Configuration for a publishing run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory the renderer writes intermediate artifacts into
    pub work_dir: PathBuf,

    /// Project root receiving the published documents
    pub project_root: PathBuf,

    /// Style block appended to the documentation page
    pub style: StyleOverride,

    /// Minify the style block before appending it
    pub minify_styles: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            project_root: PathBuf::from(".."),
            style: StyleOverride::default(),
            minify_styles: false,
        }
    }
}

/// Result of a publishing run.
#[derive(Debug)]
pub struct BuildResult {
    /// Published readme
    pub readme: PathBuf,

    /// Published documentation page
    pub page: PathBuf,

    /// Hostname placeholders substituted in the page
    pub placeholders_replaced: usize,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

/// Resolve, render, transform, publish.
///
/// Each stage runs only after the previous one succeeded. Runs sharing a
/// working directory must not overlap: intermediate filenames are fixed.
pub struct DocPipeline<R> {
    invoker: RenderInvoker<R>,
    transformer: ArtifactTransformer,
    publisher: Publisher,
}

impl<R: Renderer> DocPipeline<R> {
    /// Create a pipeline driving `renderer`.
    pub fn new(config: BuildConfig, renderer: R) -> Self {
        let style = if config.minify_styles {
            config.style.minified()
        } else {
            config.style
        };

        Self {
            invoker: RenderInvoker::new(renderer, config.work_dir),
            transformer: ArtifactTransformer::new(style),
            publisher: Publisher::new(PublishTargets::resolve(&config.project_root)),
        }
    }

    /// Destinations this pipeline publishes to.
    pub fn targets(&self) -> &PublishTargets {
        self.publisher.targets()
    }

    /// Publish documentation for the collection at `collection`.
    pub async fn build(&self, collection: &str) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let source = resolve_collection(collection)?;

        let artifacts = self.invoker.render_all(&source).await?;

        let page = self.transformer.transform(&artifacts.html)?;

        self.publisher.publish(&page.path, &artifacts.markdown.path)?;

        let targets = self.publisher.targets();
        Ok(BuildResult {
            readme: targets.readme.clone(),
            page: targets.page.clone(),
            placeholders_replaced: page.placeholders_replaced,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
