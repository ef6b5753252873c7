use bump_core::BumpKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("malformed version string '{input}'")]
    Malformed {
        input: String,
        #[source]
        source: Option<semver::Error>,
    },

    #[error("bump kind '{kind}' is not valid from version '{current}'")]
    UnsupportedBump { kind: BumpKind, current: String },
}

impl VersionError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::Malformed {
            input: input.to_string(),
            source: None,
        }
    }
}
