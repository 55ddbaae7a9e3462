//! Fixture validation command.

use std::path::Path;

use anyhow::Result;
use apidocs_fixtures::load_fixtures;

/// Run the fixtures command.
pub fn run(dir: &Path) -> Result<()> {
    let fixtures = load_fixtures(dir)?;

    if fixtures.is_empty() {
        tracing::warn!("No fixtures found in {}", dir.display());
        return Ok(());
    }

    for (path, fixture) in &fixtures {
        tracing::info!(
            "{}: {} ({} create, {} delete)",
            path.display(),
            fixture.url,
            fixture.post_payloads.len(),
            fixture.delete_payloads.len()
        );
    }

    let payloads: usize = fixtures.iter().map(|(_, f)| f.payload_count()).sum();
    tracing::info!("Validated {} fixtures with {} payloads", fixtures.len(), payloads);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_valid_fixtures() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("privilege.yaml"),
            "url: /api/v1/user/privilege\npost_payloads:\n  - username: admin\n",
        )
        .unwrap();

        assert!(run(temp.path()).is_ok());
    }

    #[test]
    fn rejects_invalid_fixture() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("bad.json"), r#"{"url": "no-slash"}"#).unwrap();

        let err = run(temp.path()).unwrap_err();

        assert!(err.to_string().contains("no-slash"));
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let temp = tempdir().unwrap();

        assert!(run(temp.path()).is_ok());
    }
}
