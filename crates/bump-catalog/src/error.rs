use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("packages root '{path}' is missing or unreadable")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package '{name}' does not exist in the packages root")]
    UnknownPackage { name: String },

    #[error("none of the requested packages are in the active packages list")]
    NotEligible { requested: Vec<String> },
}
