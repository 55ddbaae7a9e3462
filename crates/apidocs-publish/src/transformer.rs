//! Rewrites rendered HTML into a server-executable page.
//!
//! The rewrite is plain text substitution: the HTML is never parsed, and a
//! document without the hostname placeholder passes through untouched apart
//! from the added marker and style block.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::invoker::{RenderedArtifact, PUBLISHED_PAGE_EXTENSION};
use crate::style::StyleOverride;

/// Empty PHP block prepended so the page is served as a script.
pub const SERVER_SCRIPT_MARKER: &str = "<?php\n?>\n";

/// Renderer template variable for the current hostname.
pub const HOSTNAME_PLACEHOLDER: &str = "{{$hostname}}";

/// PHP expression printing the requesting host.
pub const HOST_EXPRESSION: &str = "<?echo $_SERVER['HTTP_HOST'];?>";

/// A transformed page written to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedPage {
    /// Location of the server script
    pub path: PathBuf,

    /// Number of hostname placeholders substituted
    pub placeholders_replaced: usize,
}

/// Turns the rendered HTML artifact into a server script.
#[derive(Debug, Clone, Default)]
pub struct ArtifactTransformer {
    style: StyleOverride,
}

impl ArtifactTransformer {
    /// Create a transformer appending the given style override.
    pub fn new(style: StyleOverride) -> Self {
        Self { style }
    }

    /// Transform document text.
    pub fn transform_html(&self, html: &str) -> String {
        let page = format!("{}{}{}", SERVER_SCRIPT_MARKER, html, self.style.as_str());
        page.replace(HOSTNAME_PLACEHOLDER, HOST_EXPRESSION)
    }

    /// Consume the HTML artifact and write the server script beside it.
    ///
    /// The HTML working file is deleted once read, so a later run can never
    /// pick up a stale render.
    pub fn transform(&self, artifact: &RenderedArtifact) -> Result<TransformedPage, BuildError> {
        let html = fs::read_to_string(&artifact.path).map_err(|e| {
            BuildError::ReadError(format!("{}: {}", artifact.path.display(), e))
        })?;
        fs::remove_file(&artifact.path).map_err(|e| {
            BuildError::WriteError(format!("{}: {}", artifact.path.display(), e))
        })?;

        let placeholders_replaced = html.matches(HOSTNAME_PLACEHOLDER).count();
        let page = self.transform_html(&html);

        let path = page_path(&artifact.path);
        fs::write(&path, page)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            "Wrote {} ({} hostname placeholders)",
            path.display(),
            placeholders_replaced
        );

        Ok(TransformedPage {
            path,
            placeholders_replaced,
        })
    }
}

/// Working path of the server script for an HTML artifact.
fn page_path(html: &Path) -> PathBuf {
    html.with_extension(PUBLISHED_PAGE_EXTENSION)
}
