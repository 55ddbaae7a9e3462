//! Documentation build command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use apidocs_publish::publisher::WEB_PACKAGE_DIR;
use apidocs_publish::{BuildConfig, DocPipeline, StyleOverride};
use apidocs_render::DocgenRenderer;

use crate::config::{load_config, ConfigFile};

/// Command-line overrides for a build.
#[derive(Debug, Default)]
pub struct BuildOptions {
    pub collection: String,
    pub project_root: Option<PathBuf>,
    pub renderer: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_minify: bool,
}

/// Run the build command.
pub async fn run(config_path: &Path, options: BuildOptions) -> Result<()> {
    let file_config = load_config(config_path)?;

    let timeout = options
        .timeout_secs
        .or(file_config.renderer.timeout_secs)
        .map(Duration::from_secs);
    let program = options
        .renderer
        .clone()
        .unwrap_or_else(|| file_config.renderer.program.clone());
    let renderer = DocgenRenderer::new(program)
        .with_launcher_args(&file_config.renderer.args)
        .with_timeout(timeout);

    let config = build_config(&file_config, &options)?;

    tracing::info!(
        "Publishing {} into {}",
        options.collection,
        config.project_root.display()
    );

    let result = DocPipeline::new(config, renderer)
        .build(&options.collection)
        .await?;

    tracing::info!(
        "Published {} and {} ({} hostname placeholders) in {}ms",
        result.readme.display(),
        result.page.display(),
        result.placeholders_replaced,
        result.duration_ms
    );

    Ok(())
}

/// Merge the config file with command-line overrides.
fn build_config(file_config: &ConfigFile, options: &BuildOptions) -> Result<BuildConfig> {
    let work_dir = PathBuf::from(&file_config.build.work_dir);

    let project_root = match options
        .project_root
        .clone()
        .or_else(|| file_config.project.root.as_ref().map(PathBuf::from))
    {
        Some(root) => root,
        None => default_project_root(&work_dir)?,
    };

    let style = match &file_config.build.style {
        Some(path) => StyleOverride::load(Path::new(path))?,
        None => StyleOverride::default(),
    };

    Ok(BuildConfig {
        work_dir,
        project_root,
        style,
        minify_styles: file_config.build.minify_styles && !options.no_minify,
    })
}

/// The project root sits one level above the tools directory.
///
/// Only trusted when it holds the web package, so running from the wrong
/// directory cannot drop a README outside the project.
fn default_project_root(tools_dir: &Path) -> Result<PathBuf> {
    let tools_dir = tools_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", tools_dir.display()))?;

    let root = tools_dir
        .parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no parent directory", tools_dir.display()))?;

    if !root.join(WEB_PACKAGE_DIR).is_dir() {
        anyhow::bail!(
            "{} does not contain {}. Run from the project's tools directory or pass --project-root.",
            root.display(),
            WEB_PACKAGE_DIR
        );
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn project_root_defaults_to_parent_of_work_dir() {
        let temp = tempdir().unwrap();
        let tools = temp.path().join("tools");
        fs::create_dir_all(&tools).unwrap();
        fs::create_dir_all(temp.path().join(WEB_PACKAGE_DIR)).unwrap();

        let mut file_config = ConfigFile::default();
        file_config.build.work_dir = tools.to_str().unwrap().to_string();

        let config = build_config(&file_config, &BuildOptions::default()).unwrap();

        assert_eq!(config.project_root, temp.path().canonicalize().unwrap());
        assert_eq!(config.work_dir, tools);
    }

    #[test]
    fn default_root_without_web_package_is_rejected() {
        // Running from the project root itself: the parent is not the project
        let temp = tempdir().unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(project.join(WEB_PACKAGE_DIR)).unwrap();

        let mut file_config = ConfigFile::default();
        file_config.build.work_dir = project.to_str().unwrap().to_string();

        let err = build_config(&file_config, &BuildOptions::default()).unwrap_err();

        assert!(err.to_string().contains("--project-root"));
        assert!(!temp.path().join("README.md").exists());
    }

    #[test]
    fn command_line_root_wins_over_config() {
        let mut file_config = ConfigFile::default();
        file_config.project.root = Some("/srv/from-config".to_string());

        let options = BuildOptions {
            project_root: Some(PathBuf::from("/srv/from-cli")),
            ..Default::default()
        };

        let config = build_config(&file_config, &options).unwrap();

        assert_eq!(config.project_root, PathBuf::from("/srv/from-cli"));
    }

    #[test]
    fn no_minify_overrides_config() {
        let mut file_config = ConfigFile::default();
        file_config.project.root = Some("/srv/project".to_string());
        file_config.build.minify_styles = true;

        let enabled = build_config(&file_config, &BuildOptions::default()).unwrap();
        let disabled = build_config(
            &file_config,
            &BuildOptions {
                no_minify: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(enabled.minify_styles);
        assert!(!disabled.minify_styles);
    }

    #[test]
    fn configured_style_replaces_default() {
        let temp = tempdir().unwrap();
        let css = temp.path().join("docs.css");
        fs::write(&css, "h2 { color: teal; }").unwrap();

        let mut file_config = ConfigFile::default();
        file_config.project.root = Some("/srv/project".to_string());
        file_config.build.style = Some(css.to_str().unwrap().to_string());

        let config = build_config(&file_config, &BuildOptions::default()).unwrap();

        assert!(config.style.as_str().contains("h2 { color: teal; }"));
        assert!(!config.style.as_str().contains("footer"));
    }

    #[tokio::test]
    async fn missing_collection_aborts_build() {
        let temp = tempdir().unwrap();
        let options = BuildOptions {
            collection: temp.path().join("absent.json").to_str().unwrap().to_string(),
            project_root: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let err = run(&temp.path().join("apidocs.toml"), options)
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("No file found at"));
    }
}
