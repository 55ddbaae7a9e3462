//! Publishing pipeline for API collection documentation.
//!
//! Resolves a collection file, renders it to HTML and Markdown, rewrites the
//! HTML into a server-executable page and moves both artifacts into the
//! project tree.

pub mod error;
pub mod invoker;
pub mod pipeline;
pub mod publisher;
pub mod resolver;
pub mod style;
pub mod transformer;

pub use error::BuildError;
pub use invoker::{RenderInvoker, RenderedArtifact, RenderedArtifacts};
pub use pipeline::{BuildConfig, BuildResult, DocPipeline};
pub use publisher::{PublishTargets, Publisher};
pub use resolver::{resolve_collection, CollectionSource};
pub use style::StyleOverride;
pub use transformer::{ArtifactTransformer, TransformedPage};
