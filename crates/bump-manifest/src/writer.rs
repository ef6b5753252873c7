use std::path::Path;

use serde_json::Value;

use crate::error::ManifestError;
use crate::reader::read_document;

/// Rewrites the `version` field of a manifest, leaving every other
/// field intact. The document is re-serialized with 2-space
/// indentation; that is the only normalization performed.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read, parsed, or
/// written.
pub fn write_version(path: &Path, version: &str) -> Result<(), ManifestError> {
    let mut doc = read_document(path)?;

    if let Value::Object(map) = &mut doc {
        map.insert("version".to_string(), Value::String(version.to_string()));
    } else {
        return Err(ManifestError::MissingVersion {
            path: path.to_path_buf(),
        });
    }

    let mut rendered = serde_json::to_string_pretty(&doc).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    rendered.push('\n');

    std::fs::write(path, rendered).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}
