use std::path::Path;

use serde_json::Value;

use crate::error::ManifestError;

/// # Errors
///
/// Returns an error if the manifest cannot be read or is not valid
/// JSON.
pub fn read_document(path: &Path) -> Result<Value, ManifestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the `version` string field from a manifest.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, or the
/// `version` field is absent or not a string.
pub fn read_version(path: &Path) -> Result<String, ManifestError> {
    let doc = read_document(path)?;

    doc.get("version")
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| ManifestError::MissingVersion {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn read_version_from_manifest() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "core", "version": "1.2.3-alpha.4"}"#)?;

        assert_eq!(read_version(&path)?, "1.2.3-alpha.4");
        Ok(())
    }

    #[test]
    fn missing_version_field() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "core"}"#)?;

        let result = read_version(&path);
        assert!(matches!(result, Err(ManifestError::MissingVersion { .. })));
        Ok(())
    }

    #[test]
    fn non_string_version_field() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"version": 3}"#)?;

        let result = read_version(&path);
        assert!(matches!(result, Err(ManifestError::MissingVersion { .. })));
        Ok(())
    }

    #[test]
    fn unreadable_manifest() {
        let result = read_version(Path::new("/no/such/package.json"));
        assert!(matches!(result, Err(ManifestError::Read { .. })));
    }

    #[test]
    fn invalid_json() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("package.json");
        fs::write(&path, "{not json")?;

        let result = read_version(&path);
        assert!(matches!(result, Err(ManifestError::Parse { .. })));
        Ok(())
    }
}
