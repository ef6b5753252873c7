mod engine;
mod error;
mod version;

pub use engine::{available_bumps, compute_next};
pub use error::VersionError;
pub use version::{Prerelease, ReleaseVersion};

pub type Result<T> = std::result::Result<T, VersionError>;
