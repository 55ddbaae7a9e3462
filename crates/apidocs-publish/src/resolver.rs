//! Collection path validation.

use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// A collection file that existed when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSource {
    path: PathBuf,
}

impl CollectionSource {
    /// Path to the collection JSON, exactly as supplied.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve a user-supplied collection path.
///
/// Returns the path unchanged when a filesystem entry exists there. The file
/// content is not inspected; the renderer reports schema problems itself.
pub fn resolve_collection(candidate: &str) -> Result<CollectionSource, BuildError> {
    let path = PathBuf::from(candidate);
    if !path.exists() {
        return Err(BuildError::InvalidInputPath(candidate.to_string()));
    }
    Ok(CollectionSource { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn existing_path_is_returned_unchanged() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("collection.json");
        fs::write(&file, "{}").unwrap();
        let candidate = file.to_str().unwrap();

        let source = resolve_collection(candidate).unwrap();

        assert_eq!(source.path(), Path::new(candidate));
    }

    #[test]
    fn relative_path_is_not_canonicalized() {
        // Cargo runs unit tests from the crate root
        let source = resolve_collection("./Cargo.toml").unwrap();

        assert_eq!(source.path(), Path::new("./Cargo.toml"));
    }

    #[test]
    fn missing_path_is_rejected() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.json");
        let candidate = missing.to_str().unwrap();

        let err = resolve_collection(candidate).unwrap_err();

        match err {
            BuildError::InvalidInputPath(p) => assert_eq!(p, candidate),
            other => panic!("unexpected error: {other}"),
        }
    }
}
