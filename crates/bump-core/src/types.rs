use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// The category of version increment requested by the operator.
///
/// Variant order is the menu order presented by the prompt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
    Beta,
    Canary,
    Rc,
    Custom,
}

impl BumpKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Premajor => "premajor",
            Self::Preminor => "preminor",
            Self::Prepatch => "prepatch",
            Self::Prerelease => "prerelease",
            Self::Beta => "beta",
            Self::Canary => "canary",
            Self::Rc => "rc",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the operator chose the next version: a computed kind or a
/// verbatim literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    Kind(BumpKind),
    Custom(String),
}

/// A sub-package discovered under the packages root.
///
/// Identity is `name`; discovered per run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub dir: PathBuf,
    pub manifest_path: PathBuf,
}

impl PackageInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let manifest_path = dir.join("package.json");
        Self {
            name: name.into(),
            dir,
            manifest_path,
        }
    }
}

/// The operator's requested target set, before eligibility checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSelection {
    All,
    Named(Vec<String>),
}

impl TargetSelection {
    /// Builds a selection from raw prompt output, expanding the `all`
    /// wildcard and treating an empty request as `All`.
    #[must_use]
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() || names.iter().any(|n| n == "all") {
            Self::All
        } else {
            Self::Named(names)
        }
    }
}
