use std::path::Path;

use bump_manifest::ManifestError;

pub trait ManifestWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read, parsed, or
    /// written back.
    fn write_version(&self, manifest_path: &Path, version: &str) -> Result<(), ManifestError>;
}
