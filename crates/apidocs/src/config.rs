//! Configuration file (apidocs.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub renderer: RendererConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub project: ProjectConfig,
}

#[derive(Debug, Deserialize)]
pub struct RendererConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before `build` (e.g. `program = "npx"`, `args = ["docgen"]`)
    #[serde(default)]
    pub args: Vec<String>,
    /// No timeout when absent
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_work_dir")]
    pub work_dir: String,
    #[serde(default)]
    pub minify_styles: bool,
    /// Stylesheet replacing the built-in style override
    pub style: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProjectConfig {
    pub root: Option<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            timeout_secs: None,
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            work_dir: default_work_dir(),
            minify_styles: false,
            style: None,
        }
    }
}

fn default_program() -> String {
    apidocs_render::docgen::DEFAULT_PROGRAM.to_string()
}
fn default_work_dir() -> String {
    ".".to_string()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}
