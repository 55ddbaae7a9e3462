//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'apidocs build --json <collection.json>' to publish documentation.");

    Ok(())
}

pub const DEFAULT_CONFIG: &str = r#"# apidocs configuration

[renderer]
# Documentation renderer executable
program = "docgen"

# Arguments placed before `build`, e.g. program = "npx" with args = ["docgen"]
# args = []

# Kill the renderer after this many seconds (no limit when unset)
# timeout_secs = 120

[build]
# Directory the renderer writes intermediate files into
work_dir = "."

# Minify the appended style override
minify_styles = false

# Replace the built-in style override with a stylesheet
# style = "docs.css"

[project]
# Project root receiving README.md and the documentation page
# (defaults to the parent of work_dir)
# root = ".."
"#;
