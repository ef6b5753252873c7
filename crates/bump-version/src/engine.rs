use bump_core::BumpKind;

use crate::error::VersionError;
use crate::version::ReleaseVersion;

/// Tags that form the prerelease lineage, in promotion order.
const LINEAGE: [&str; 4] = ["alpha", "beta", "canary", "rc"];

const DEFAULT_TAG: &str = "alpha";

fn is_lineage_tag(tag: &str) -> bool {
    LINEAGE.contains(&tag)
}

/// Enumerates the bump kinds that are legal from `current`, in menu
/// order. `Custom` is always offered last.
///
/// The lineage is strict: `alpha -> beta -> canary -> rc`, with
/// `Prerelease` advancing the counter of whichever tag is current.
/// There is no downgrade path and no stage skipping.
#[must_use]
pub fn available_bumps(current: &ReleaseVersion) -> Vec<BumpKind> {
    let mut kinds = vec![
        BumpKind::Major,
        BumpKind::Minor,
        BumpKind::Patch,
        BumpKind::Premajor,
        BumpKind::Preminor,
        BumpKind::Prepatch,
    ];

    match current.prerelease_tag() {
        Some(tag) if is_lineage_tag(tag) => {
            kinds.push(BumpKind::Prerelease);
            match tag {
                "alpha" => kinds.push(BumpKind::Beta),
                "beta" => kinds.push(BumpKind::Canary),
                "canary" => kinds.push(BumpKind::Rc),
                _ => {}
            }
        }
        _ => {}
    }

    kinds.push(BumpKind::Custom);
    kinds
}

/// Computes the next version for `kind` from `current`.
///
/// Legality is re-checked here even though [`available_bumps`] already
/// restricts the menu: direct callers and the custom path bypass the
/// menu entirely.
///
/// # Errors
///
/// Returns [`VersionError::UnsupportedBump`] if `kind` is not legal
/// from the current state, including `BumpKind::Custom`, which never
/// goes through computation.
pub fn compute_next(current: &ReleaseVersion, kind: BumpKind) -> Result<ReleaseVersion, VersionError> {
    let carry_tag = || {
        current
            .prerelease_tag()
            .unwrap_or(DEFAULT_TAG)
            .to_string()
    };

    let unsupported = || VersionError::UnsupportedBump {
        kind,
        current: current.to_string(),
    };

    let next = match kind {
        BumpKind::Major => ReleaseVersion::new(current.major + 1, 0, 0),
        BumpKind::Minor => ReleaseVersion::new(current.major, current.minor + 1, 0),
        BumpKind::Patch => ReleaseVersion::new(current.major, current.minor, current.patch + 1),
        BumpKind::Premajor => {
            ReleaseVersion::new(current.major + 1, 0, 0).with_prerelease(carry_tag(), Some(0))
        }
        BumpKind::Preminor => ReleaseVersion::new(current.major, current.minor + 1, 0)
            .with_prerelease(carry_tag(), Some(0)),
        BumpKind::Prepatch => ReleaseVersion::new(current.major, current.minor, current.patch + 1)
            .with_prerelease(carry_tag(), Some(0)),
        BumpKind::Prerelease => {
            let pre = current
                .prerelease
                .as_ref()
                .filter(|p| is_lineage_tag(&p.tag))
                .ok_or_else(unsupported)?;
            let counter = pre.number.map_or(0, |n| n + 1);
            ReleaseVersion::new(current.major, current.minor, current.patch)
                .with_prerelease(pre.tag.clone(), Some(counter))
        }
        BumpKind::Beta => promote(current, "alpha", "beta").ok_or_else(unsupported)?,
        BumpKind::Canary => promote(current, "beta", "canary").ok_or_else(unsupported)?,
        BumpKind::Rc => promote(current, "canary", "rc").ok_or_else(unsupported)?,
        BumpKind::Custom => return Err(unsupported()),
    };

    Ok(next)
}

/// Promotes `from -> to` at the same patch level, resetting the
/// counter to 0. Returns `None` when the current tag is not `from`.
fn promote(current: &ReleaseVersion, from: &str, to: &str) -> Option<ReleaseVersion> {
    if current.prerelease_tag() != Some(from) {
        return None;
    }
    Some(
        ReleaseVersion::new(current.major, current.minor, current.patch)
            .with_prerelease(to, Some(0)),
    )
}
