use std::path::PathBuf;

use thiserror::Error;

use crate::step::Step;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("working tree has uncommitted changes; commit or stash them before releasing")]
    DirtyWorkingTree,

    #[error("failed to write version to '{path}'")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: bump_manifest::ManifestError,
    },

    #[error("git operation failed during {step}")]
    SourceControl {
        step: Step,
        #[source]
        source: bump_git::GitError,
    },

    #[error("failed to read changelog at '{path}'")]
    ChangelogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changelog at '{path}'")]
    ChangelogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
