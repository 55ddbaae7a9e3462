//! Moves working artifacts to their fixed places in the project tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Markdown readme, relative to the project root.
pub const README_PATH: &str = "README.md";

/// Web package holding the documentation page.
pub const WEB_PACKAGE_DIR: &str = "pfSense-pkg-API";

/// Documentation page, relative to the web package.
pub const DOCUMENTATION_PAGE_PATH: &str = "files/usr/local/www/api/documentation/index.php";

/// Destination paths for one project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTargets {
    /// Canonical readme at the project root
    pub readme: PathBuf,

    /// Server-script documentation page inside the web package
    pub page: PathBuf,
}

impl PublishTargets {
    /// Resolve the fixed destinations under `project_root`.
    pub fn resolve(project_root: &Path) -> Self {
        Self {
            readme: project_root.join(README_PATH),
            page: project_root
                .join(WEB_PACKAGE_DIR)
                .join(DOCUMENTATION_PAGE_PATH),
        }
    }
}

/// Publishes the page and readme, replacing previous versions.
#[derive(Debug, Clone)]
pub struct Publisher {
    targets: PublishTargets,
}

impl Publisher {
    pub fn new(targets: PublishTargets) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &PublishTargets {
        &self.targets
    }

    /// Move the Markdown artifact to the readme, then the page to the web package.
    ///
    /// Not transactional: if the page cannot be moved, the readme stays
    /// published.
    pub fn publish(&self, page: &Path, markdown: &Path) -> Result<(), BuildError> {
        move_replacing(markdown, &self.targets.readme)?;
        tracing::info!("Published {}", self.targets.readme.display());

        if let Err(e) = move_replacing(page, &self.targets.page) {
            tracing::warn!(
                "Partial publication: {} was replaced but {} was not",
                self.targets.readme.display(),
                self.targets.page.display()
            );
            return Err(e);
        }
        tracing::info!("Published {}", self.targets.page.display());

        Ok(())
    }
}

/// Rename `from` onto `to`, overwriting any existing file.
fn move_replacing(from: &Path, to: &Path) -> Result<(), BuildError> {
    if let Some(parent) = to.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(BuildError::PublishFailure {
                path: parent.to_path_buf(),
            });
        }
    }

    fs::rename(from, to).map_err(|e| {
        BuildError::WriteError(format!(
            "Failed to move {} to {}: {}",
            from.display(),
            to.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct Workspace {
        _temp: tempfile::TempDir,
        root: PathBuf,
        page: PathBuf,
        markdown: PathBuf,
    }

    /// Project root with a `tools/` working dir holding both artifacts.
    fn workspace(with_web_package: bool) -> Workspace {
        let temp = tempdir().unwrap();
        let root = temp.path().to_path_buf();
        let tools = root.join("tools");
        fs::create_dir_all(&tools).unwrap();
        if with_web_package {
            let page_dir = root
                .join(WEB_PACKAGE_DIR)
                .join("files/usr/local/www/api/documentation");
            fs::create_dir_all(page_dir).unwrap();
        }

        let page = tools.join("documentation.php");
        let markdown = tools.join("documentation.md");
        fs::write(&page, "<?php\n?>\n<p>docs</p>").unwrap();
        fs::write(&markdown, "# Docs").unwrap();

        Workspace {
            _temp: temp,
            root,
            page,
            markdown,
        }
    }

    #[test]
    fn resolves_fixed_destinations() {
        let targets = PublishTargets::resolve(Path::new("/srv/project"));

        assert_eq!(targets.readme, PathBuf::from("/srv/project/README.md"));
        assert_eq!(
            targets.page,
            PathBuf::from(
                "/srv/project/pfSense-pkg-API/files/usr/local/www/api/documentation/index.php"
            )
        );
    }

    #[test]
    fn moves_both_artifacts() {
        let ws = workspace(true);
        let publisher = Publisher::new(PublishTargets::resolve(&ws.root));

        publisher.publish(&ws.page, &ws.markdown).unwrap();

        let targets = publisher.targets();
        assert_eq!(fs::read_to_string(&targets.readme).unwrap(), "# Docs");
        assert!(fs::read_to_string(&targets.page)
            .unwrap()
            .starts_with("<?php"));
        assert!(!ws.page.exists());
        assert!(!ws.markdown.exists());
    }

    #[test]
    fn overwrites_previous_versions() {
        let ws = workspace(true);
        let targets = PublishTargets::resolve(&ws.root);
        fs::write(&targets.readme, "old readme").unwrap();
        fs::write(&targets.page, "old page").unwrap();

        Publisher::new(targets.clone())
            .publish(&ws.page, &ws.markdown)
            .unwrap();

        assert_eq!(fs::read_to_string(&targets.readme).unwrap(), "# Docs");
        assert_ne!(fs::read_to_string(&targets.page).unwrap(), "old page");
    }

    #[test]
    fn missing_page_directory_leaves_readme_published() {
        let ws = workspace(false);
        let targets = PublishTargets::resolve(&ws.root);

        let err = Publisher::new(targets.clone())
            .publish(&ws.page, &ws.markdown)
            .unwrap_err();

        match err {
            BuildError::PublishFailure { path } => {
                assert_eq!(path, targets.page.parent().unwrap());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read_to_string(&targets.readme).unwrap(), "# Docs");
        assert!(ws.page.exists());
    }

    #[test]
    fn missing_root_publishes_nothing() {
        let ws = workspace(true);
        let absent_root = ws.root.join("absent");
        let targets = PublishTargets::resolve(&absent_root);

        let err = Publisher::new(targets)
            .publish(&ws.page, &ws.markdown)
            .unwrap_err();

        assert!(matches!(err, BuildError::PublishFailure { path } if path == absent_root));
        assert!(ws.page.exists());
        assert!(ws.markdown.exists());
    }
}
