use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Release settings, read once per run from the `bump` key of the
/// root `package.json`. A missing key means all defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseConfig {
    /// Commit and tag message template; the first `%s` is replaced
    /// with the target version.
    pub message: String,
    /// Allow-list of releasable package names. `None` means every
    /// discovered package is eligible.
    pub active_packages: Option<Vec<String>>,
    pub publish: bool,
    pub pre_commit: Vec<String>,
    pub after_push: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            message: "release: %s".to_string(),
            active_packages: None,
            publish: false,
            pre_commit: Vec::new(),
            after_push: Vec::new(),
        }
    }
}

impl ReleaseConfig {
    /// Loads the config from `<root>/package.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or the `bump`
    /// key does not deserialize.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("package.json");
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let manifest: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        match manifest.get("bump") {
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|source| ConfigError::Parse {
                    path,
                    source,
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Substitutes the target version into the message template.
    #[must_use]
    pub fn commit_message(&self, version: &str) -> String {
        self.message.replacen("%s", version, 1)
    }
}

/// JavaScript package manager used for publishing, detected from the
/// lock file present at the workspace root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Detects the package manager from lock files; defaults to npm
    /// when no lock file is present.
    #[must_use]
    pub fn detect(root: &Path) -> Self {
        if root.join("package-lock.json").exists() {
            Self::Npm
        } else if root.join("yarn.lock").exists() {
            Self::Yarn
        } else if root.join("pnpm-lock.yaml").exists() {
            Self::Pnpm
        } else {
            Self::Npm
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    #[must_use]
    pub fn publish_command(self) -> &'static str {
        match self {
            Self::Npm => "npm publish",
            Self::Yarn => "yarn publish",
            Self::Pnpm => "pnpm publish",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
