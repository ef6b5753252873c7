use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Version(#[from] bump_version::VersionError),

    #[error(transparent)]
    Catalog(#[from] bump_catalog::CatalogError),

    #[error(transparent)]
    Manifest(#[from] bump_manifest::ManifestError),

    #[error(transparent)]
    Config(#[from] bump_pipeline::ConfigError),

    #[error(transparent)]
    Pipeline(#[from] bump_pipeline::PipelineError),

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("interactive mode requires a terminal; pass --bump and --yes to run non-interactively")]
    NotATty,

    #[error("custom version cannot be empty")]
    EmptyCustomVersion,
}

pub type Result<T> = std::result::Result<T, CliError>;
