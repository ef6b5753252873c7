mod types;

pub use types::{BumpKind, PackageInfo, TargetSelection, VersionSpec};
