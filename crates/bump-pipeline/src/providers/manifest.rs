use std::path::Path;

use bump_manifest::ManifestError;

use crate::traits::ManifestWriter;

pub struct FsManifestWriter;

impl FsManifestWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsManifestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for FsManifestWriter {
    fn write_version(&self, manifest_path: &Path, version: &str) -> Result<(), ManifestError> {
        bump_manifest::write_version(manifest_path, version)
    }
}
