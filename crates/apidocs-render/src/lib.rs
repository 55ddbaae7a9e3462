//! Renderer capability for API collection documentation.
//!
//! This crate defines the `Renderer` trait the publishing pipeline drives, and
//! `DocgenRenderer`, which shells out to the external `docgen` tool.

pub mod docgen;
pub mod traits;

pub use docgen::DocgenRenderer;
pub use traits::{ArtifactFormat, RenderError, RenderOutput, Renderer};
