//! Fixture file loading.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::fixture::ApiFixture;

/// Errors that can occur when loading fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid fixture {path}: {message}")]
    Invalid { path: String, message: String },

    #[error("Unsupported fixture format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixtureFormat {
    Yaml,
    Json,
}

impl FixtureFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load and validate a single fixture file.
pub fn load_fixture(path: &Path) -> Result<ApiFixture, FixtureError> {
    let display = path.display().to_string();

    let format =
        FixtureFormat::of(path).ok_or_else(|| FixtureError::UnsupportedFormat(display.clone()))?;

    let content = fs::read_to_string(path).map_err(|e| FixtureError::Read {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let parsed = match format {
        FixtureFormat::Yaml => {
            serde_yaml::from_str::<ApiFixture>(&content).map_err(|e| e.to_string())
        }
        FixtureFormat::Json => {
            serde_json::from_str::<ApiFixture>(&content).map_err(|e| e.to_string())
        }
    };
    let fixture = parsed.map_err(|message| FixtureError::Parse {
        path: display.clone(),
        message,
    })?;

    fixture.validate().map_err(|message| FixtureError::Invalid {
        path: display,
        message,
    })?;

    Ok(fixture)
}

/// Load every fixture under `dir`, ordered by path.
///
/// Files with other extensions are skipped. The first invalid fixture aborts
/// the load.
pub fn load_fixtures(dir: &Path) -> Result<Vec<(PathBuf, ApiFixture)>, FixtureError> {
    if !dir.is_dir() {
        return Err(FixtureError::Read {
            path: dir.display().to_string(),
            message: "not a directory".to_string(),
        });
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| FixtureFormat::of(p).is_some())
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let fixture = load_fixture(&path)?;
            Ok((path, fixture))
        })
        .collect()
}
