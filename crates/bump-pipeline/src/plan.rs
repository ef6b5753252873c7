use bump_core::PackageInfo;

/// Everything the pipeline needs to run, resolved up front: the target
/// version, the packages to touch, and the optional-step switches.
///
/// The version is carried as the rendered string because custom bumps
/// accept any non-empty literal.
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    pub version: String,
    pub packages: Vec<PackageInfo>,
    /// Names skipped by the allow-list, kept for reporting.
    pub skipped: Vec<String>,
    pub generate_changelog: bool,
    pub publish: bool,
}

impl ReleasePlan {
    #[must_use]
    pub fn new(version: impl Into<String>, packages: Vec<PackageInfo>) -> Self {
        Self {
            version: version.into(),
            packages,
            skipped: Vec::new(),
            generate_changelog: false,
            publish: false,
        }
    }

    #[must_use]
    pub fn with_skipped(mut self, skipped: Vec<String>) -> Self {
        self.skipped = skipped;
        self
    }

    #[must_use]
    pub fn with_changelog(mut self, generate: bool) -> Self {
        self.generate_changelog = generate;
        self
    }

    #[must_use]
    pub fn with_publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }
}
