//! Presentation overrides appended to every published page.

use std::fs;
use std::path::Path;

use crate::error::BuildError;

/// A `<style>` block appended verbatim to the rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOverride {
    block: String,
}

impl StyleOverride {
    /// Use `block` exactly as given, including its `<style>` tags.
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
        }
    }

    /// Wrap a bare stylesheet in `<style>` tags.
    pub fn from_css(css: &str) -> Self {
        Self::new(format!("\n<style>\n{}\n</style>\n", css.trim_matches('\n')))
    }

    /// Read a stylesheet from disk.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let css = fs::read_to_string(path).map_err(|e| {
            BuildError::ReadError(format!("Failed to read stylesheet {}: {}", path.display(), e))
        })?;
        Ok(Self::from_css(&css))
    }

    /// The full block, tags included.
    pub fn as_str(&self) -> &str {
        &self.block
    }

    /// Minify the stylesheet inside the block.
    ///
    /// Falls back to the original block if the CSS does not parse.
    pub fn minified(&self) -> Self {
        let Some(css) = self.css() else {
            return self.clone();
        };

        match minify_css(css) {
            Ok(min) => Self::new(format!("\n<style>{}</style>\n", min)),
            Err(e) => {
                tracing::warn!("Keeping unminified style override: {}", e);
                self.clone()
            }
        }
    }

    /// Stylesheet text between the `<style>` tags.
    fn css(&self) -> Option<&str> {
        let open = self.block.find("<style>")? + "<style>".len();
        let close = self.block.rfind("</style>")?;
        (open <= close).then(|| &self.block[open..close])
    }
}

impl Default for StyleOverride {
    fn default() -> Self {
        Self::new(DEFAULT_STYLE)
    }
}

/// Minify a stylesheet with lightningcss.
fn minify_css(css: &str) -> Result<String, String> {
    use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

    let mut sheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("style override does not parse: {}", e))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("style override cannot be minified: {}", e))?;

    let printer = PrinterOptions {
        minify: true,
        ..Default::default()
    };
    sheet
        .to_css(printer)
        .map(|out| out.code)
        .map_err(|e| format!("style override cannot be printed: {}", e))
}

// Centers the page, hides the generator footer and turns each endpoint's
// <details> into a collapsible section.
const DEFAULT_STYLE: &str = r#"
<style>
    body {
        display: block;
        width: 90%;
        margin: 0 auto;
    }
    footer {
        display:none;
    }
    div.col-md-12 {
        margin-top: 20px;
    }

    li:before {
        content:"• ";
    }

    summary:hover {
        cursor: pointer;
        color: darkred;
    }

    details[open] summary ~ * {
      animation: open 0.3s ease-in-out;
    }

    @keyframes open {
      0% {
        opacity: 0;
      }
      100% {
        opacity: 1;
      }
    }

    details summary::-webkit-details-marker {
      display: none;
    }

    details summary {
      width: 100%;
      padding: 0.5rem 0;
      border-top: 1px solid black;
      position: relative;
      cursor: pointer;
      font-size: 14px;
      font-weight: 500;
      list-style: none;
    }

    details summary:before {
      content: "+ ";
      color: black;
      position: relative;
      font-size: 12px;
      line-height: 0;
      margin-top: 0.75rem;
      font-weight: 400;
      transform-origin: center;
      transition: 200ms linear;
    }

    details[open] summary:before {
      content: "- ";
      font-size: 12px;
    }

    details summary {
      outline: 0;
    }

    details p {
      font-size: 14px;
      margin: 0 0 1rem;
      padding-top: 1rem;
    }
</style>
"#;
