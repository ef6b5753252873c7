use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// The prerelease segment of a version: a free-form tag plus an
/// optional numeric counter (`alpha`, `alpha.3`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerelease {
    pub tag: String,
    pub number: Option<u64>,
}

/// A parsed `MAJOR.MINOR.PATCH[-TAG[.N]]` version.
///
/// Immutable: every bump produces a new value. Display reproduces the
/// textual form the value was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<Prerelease>,
}

impl ReleaseVersion {
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    #[must_use]
    pub fn with_prerelease(mut self, tag: impl Into<String>, number: Option<u64>) -> Self {
        self.prerelease = Some(Prerelease {
            tag: tag.into(),
            number,
        });
        self
    }

    /// Parses a version string, rejecting build metadata and any
    /// prerelease shape other than `TAG` or `TAG.N`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Malformed`] if the input does not match
    /// the supported grammar.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let parsed = semver::Version::parse(input).map_err(|source| VersionError::Malformed {
            input: input.to_string(),
            source: Some(source),
        })?;

        if !parsed.build.is_empty() {
            return Err(VersionError::malformed(input));
        }

        let prerelease = if parsed.pre.is_empty() {
            None
        } else {
            Some(parse_prerelease(parsed.pre.as_str(), input)?)
        };

        Ok(Self {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease,
        })
    }

    #[must_use]
    pub fn prerelease_tag(&self) -> Option<&str> {
        self.prerelease.as_ref().map(|p| p.tag.as_str())
    }
}

fn parse_prerelease(pre: &str, input: &str) -> Result<Prerelease, VersionError> {
    let mut segments = pre.split('.');

    let tag = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| VersionError::malformed(input))?;

    // A purely numeric first segment is a counter without a tag.
    if tag.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::malformed(input));
    }

    let number = match segments.next() {
        None => None,
        Some(counter) => Some(
            counter
                .parse::<u64>()
                .map_err(|_| VersionError::malformed(input))?,
        ),
    };

    if segments.next().is_some() {
        return Err(VersionError::malformed(input));
    }

    Ok(Prerelease {
        tag: tag.to_string(),
        number,
    })
}

impl FromStr for ReleaseVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre.tag)?;
            if let Some(number) = pre.number {
                write!(f, ".{number}")?;
            }
        }
        Ok(())
    }
}
