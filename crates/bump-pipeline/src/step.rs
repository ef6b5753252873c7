use std::fmt;

/// One stage of the release pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    GuardCheck,
    ApplyVersions,
    PreCommitHooks,
    Commit,
    Tag,
    Changelog,
    Push,
    PushTags,
    AfterPushHooks,
    Publish,
}

/// Whether a step failure aborts the run or is merely reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    Fatal,
    Advisory,
}

impl Step {
    /// The fixed execution order. Optional steps are skipped, never
    /// reordered.
    pub const SEQUENCE: [Self; 10] = [
        Self::GuardCheck,
        Self::ApplyVersions,
        Self::PreCommitHooks,
        Self::Commit,
        Self::Tag,
        Self::Changelog,
        Self::Push,
        Self::PushTags,
        Self::AfterPushHooks,
        Self::Publish,
    ];

    /// Hook and publish failures are reported but never abort the run;
    /// everything else is fatal.
    #[must_use]
    pub fn policy(self) -> StepPolicy {
        match self {
            Self::PreCommitHooks | Self::AfterPushHooks | Self::Publish => StepPolicy::Advisory,
            _ => StepPolicy::Fatal,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GuardCheck => "guard check",
            Self::ApplyVersions => "apply versions",
            Self::PreCommitHooks => "pre-commit hooks",
            Self::Commit => "commit",
            Self::Tag => "tag",
            Self::Changelog => "changelog",
            Self::Push => "push",
            Self::PushTags => "push tags",
            Self::AfterPushHooks => "after-push hooks",
            Self::Publish => "publish",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
