use std::path::{Path, PathBuf};

use bump_git::{CommitInfo, GitError, TagInfo};

use crate::config::ReleaseConfig;
use crate::error::{PipelineError, Result};
use crate::plan::ReleasePlan;
use crate::step::{Step, StepPolicy};
use crate::traits::{CommandRunner, GitProvider, ManifestWriter};

const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// A hook command that failed; the run continues regardless.
#[derive(Debug, Clone)]
pub struct HookFailure {
    pub step: Step,
    pub command: String,
    pub error: String,
}

/// A package whose publish command failed; remaining packages are
/// still attempted.
#[derive(Debug, Clone)]
pub struct PublishFailure {
    pub package: String,
    pub error: String,
}

/// What a completed run actually did, including advisory failures the
/// operator should follow up on.
#[derive(Debug, Default)]
pub struct ReleaseReport {
    pub executed: Vec<Step>,
    pub commit: Option<CommitInfo>,
    pub tag: Option<TagInfo>,
    pub hook_failures: Vec<HookFailure>,
    pub published: Vec<String>,
    pub publish_failures: Vec<PublishFailure>,
}

/// Drives a release plan through the fixed step sequence.
///
/// Fatal step failures abort the run where they happen; nothing is
/// rolled back. Hook and publish failures are recorded in the report
/// and never abort.
pub struct ReleasePipeline<G, M, R> {
    root: PathBuf,
    git: G,
    manifests: M,
    runner: R,
    publish_command: String,
}

impl<G, M, R> ReleasePipeline<G, M, R>
where
    G: GitProvider,
    M: ManifestWriter,
    R: CommandRunner,
{
    pub fn new(root: impl Into<PathBuf>, git: G, manifests: M, runner: R) -> Self {
        Self {
            root: root.into(),
            git,
            manifests,
            runner,
            publish_command: "npm publish".to_string(),
        }
    }

    #[must_use]
    pub fn with_publish_command(mut self, command: impl Into<String>) -> Self {
        self.publish_command = command.into();
        self
    }

    /// Runs the release.
    ///
    /// # Errors
    ///
    /// Returns the first fatal step failure; earlier steps have
    /// already taken effect when that happens.
    pub fn execute(&self, config: &ReleaseConfig, plan: &ReleasePlan) -> Result<ReleaseReport> {
        let mut report = ReleaseReport::default();

        self.guard_check(&mut report)?;

        // Gathered before the release commit so the summaries cover
        // exactly the commits since the previous tag.
        let summaries = if plan.generate_changelog {
            Some(self.changelog_summaries()?)
        } else {
            None
        };

        self.apply_versions(plan, &mut report)?;
        self.run_hooks(Step::PreCommitHooks, &config.pre_commit, &mut report);
        self.commit(config, plan, &mut report)?;
        self.tag(config, plan, &mut report)?;
        if let Some(summaries) = summaries {
            self.write_changelog(plan, &summaries, &mut report)?;
        }
        self.push(&mut report)?;
        self.push_tags(plan, &mut report)?;
        self.run_hooks(Step::AfterPushHooks, &config.after_push, &mut report);
        if plan.publish {
            self.publish(plan, &mut report);
        }

        Ok(report)
    }

    fn enter(step: Step, report: &mut ReleaseReport) {
        tracing::debug!(%step, "running pipeline step");
        report.executed.push(step);
    }

    fn git_err(step: Step) -> impl FnOnce(GitError) -> PipelineError {
        debug_assert_eq!(step.policy(), StepPolicy::Fatal);
        move |source| PipelineError::SourceControl { step, source }
    }

    fn guard_check(&self, report: &mut ReleaseReport) -> Result<()> {
        Self::enter(Step::GuardCheck, report);
        let clean = self
            .git
            .is_working_tree_clean(&self.root)
            .map_err(Self::git_err(Step::GuardCheck))?;
        if clean {
            Ok(())
        } else {
            Err(PipelineError::DirtyWorkingTree)
        }
    }

    fn changelog_summaries(&self) -> Result<Vec<String>> {
        let latest = self
            .git
            .latest_tag(&self.root)
            .map_err(Self::git_err(Step::Changelog))?;
        self.git
            .commit_summaries(&self.root, latest.as_deref())
            .map_err(Self::git_err(Step::Changelog))
    }

    /// Writes the target version into the root manifest and every
    /// selected package manifest. Every write is attempted even after
    /// a failure; the first failure is then returned.
    fn apply_versions(&self, plan: &ReleasePlan, report: &mut ReleaseReport) -> Result<()> {
        Self::enter(Step::ApplyVersions, report);

        let root_manifest = self.root.join("package.json");
        let targets =
            std::iter::once(&root_manifest).chain(plan.packages.iter().map(|p| &p.manifest_path));

        let mut first_failure = None;
        for path in targets {
            if let Err(source) = self.manifests.write_version(path, &plan.version) {
                tracing::warn!(path = %path.display(), "failed to write version");
                if first_failure.is_none() {
                    first_failure = Some(PipelineError::ManifestWrite {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn run_hooks(&self, step: Step, commands: &[String], report: &mut ReleaseReport) {
        debug_assert_eq!(step.policy(), StepPolicy::Advisory);
        if commands.is_empty() {
            return;
        }
        Self::enter(step, report);
        for command in commands {
            if let Err(error) = self.runner.run(command, &self.root) {
                tracing::warn!(%command, %error, "hook command failed, continuing");
                report.hook_failures.push(HookFailure {
                    step,
                    command: command.clone(),
                    error: error.to_string(),
                });
            }
        }
    }

    fn commit(
        &self,
        config: &ReleaseConfig,
        plan: &ReleasePlan,
        report: &mut ReleaseReport,
    ) -> Result<()> {
        Self::enter(Step::Commit, report);
        let message = config.commit_message(&plan.version);
        self.git
            .stage_all(&self.root)
            .map_err(Self::git_err(Step::Commit))?;
        let commit = self
            .git
            .commit(&self.root, &message)
            .map_err(Self::git_err(Step::Commit))?;
        report.commit = Some(commit);
        Ok(())
    }

    fn tag(
        &self,
        config: &ReleaseConfig,
        plan: &ReleasePlan,
        report: &mut ReleaseReport,
    ) -> Result<()> {
        Self::enter(Step::Tag, report);
        let message = config.commit_message(&plan.version);
        let tag = self
            .git
            .create_tag(&self.root, &plan.version, &message)
            .map_err(Self::git_err(Step::Tag))?;
        report.tag = Some(tag);
        Ok(())
    }

    /// Renders the changelog and commits it as a follow-up commit, so
    /// the release tag stays on the version commit.
    fn write_changelog(
        &self,
        plan: &ReleasePlan,
        summaries: &[String],
        report: &mut ReleaseReport,
    ) -> Result<()> {
        Self::enter(Step::Changelog, report);
        let path = self.root.join(CHANGELOG_FILE);

        let previous = match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(PipelineError::ChangelogRead {
                    path: path.clone(),
                    source,
                });
            }
        };

        let rendered = bump_changelog::render(&plan.version, summaries, previous.as_deref());
        std::fs::write(&path, rendered).map_err(|source| PipelineError::ChangelogWrite {
            path: path.clone(),
            source,
        })?;

        self.git
            .stage_all(&self.root)
            .map_err(Self::git_err(Step::Changelog))?;
        let message = format!("docs: changelog for {}", plan.version);
        self.git
            .commit(&self.root, &message)
            .map_err(Self::git_err(Step::Changelog))?;
        Ok(())
    }

    fn push(&self, report: &mut ReleaseReport) -> Result<()> {
        Self::enter(Step::Push, report);
        self.git
            .push_branch(&self.root)
            .map_err(Self::git_err(Step::Push))
    }

    fn push_tags(&self, plan: &ReleasePlan, report: &mut ReleaseReport) -> Result<()> {
        Self::enter(Step::PushTags, report);
        self.git
            .push_tag(&self.root, &plan.version)
            .map_err(Self::git_err(Step::PushTags))
    }

    fn publish(&self, plan: &ReleasePlan, report: &mut ReleaseReport) {
        Self::enter(Step::Publish, report);
        for package in &plan.packages {
            match self.runner.run(&self.publish_command, &package.dir) {
                Ok(()) => report.published.push(package.name.clone()),
                Err(error) => {
                    tracing::warn!(package = %package.name, %error, "publish failed, continuing");
                    report.publish_failures.push(PublishFailure {
                        package: package.name.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }
    }
}

impl<G, M, R> ReleasePipeline<G, M, R> {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockCommandRunner, MockGitProvider, MockManifestWriter};
    use bump_core::PackageInfo;
    use tempfile::TempDir;

    fn two_package_plan(root: &Path, version: &str) -> ReleasePlan {
        let packages = vec![
            PackageInfo::new("core", root.join("packages/core")),
            PackageInfo::new("util", root.join("packages/util")),
        ];
        ReleasePlan::new(version, packages)
    }

    fn pipeline(
        root: impl Into<PathBuf>,
        git: MockGitProvider,
    ) -> ReleasePipeline<MockGitProvider, MockManifestWriter, MockCommandRunner> {
        ReleasePipeline::new(root, git, MockManifestWriter::new(), MockCommandRunner::new())
    }

    #[test]
    fn full_run_executes_every_step_in_order() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let git = MockGitProvider::new().with_summaries(&["feat: add thing", "fix: close leak"]);
        let pipeline = pipeline(dir.path(), git);
        let config = ReleaseConfig {
            pre_commit: vec!["npm run build".to_string()],
            after_push: vec!["npm run notify".to_string()],
            ..ReleaseConfig::default()
        };
        let plan = two_package_plan(dir.path(), "1.1.0")
            .with_changelog(true)
            .with_publish(true);

        let report = pipeline.execute(&config, &plan)?;

        assert_eq!(report.executed, Step::SEQUENCE.to_vec());
        assert!(report.hook_failures.is_empty());
        assert_eq!(report.published, vec!["core", "util"]);
        assert_eq!(
            report.commit.map(|c| c.message),
            Some("release: 1.1.0".to_string())
        );
        assert_eq!(report.tag.map(|t| t.name), Some("1.1.0".to_string()));

        let changelog = std::fs::read_to_string(dir.path().join("CHANGELOG.md"))?;
        assert!(changelog.starts_with("# CHANGELOG\n\n## 1.1.0\n"));
        assert!(changelog.contains("- add thing"));
        Ok(())
    }

    #[test]
    fn changelog_commit_lands_between_tag_and_push() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let git = MockGitProvider::new().with_summaries(&["feat: add thing"]);
        let pipeline = pipeline(dir.path(), git);
        let plan = two_package_plan(dir.path(), "1.1.0").with_changelog(true);

        pipeline.execute(&ReleaseConfig::default(), &plan)?;

        let calls = pipeline.git.calls();
        let tag = calls
            .iter()
            .position(|c| c == "create_tag:1.1.0")
            .expect("tag call");
        let changelog_commit = calls
            .iter()
            .position(|c| c == "commit:docs: changelog for 1.1.0")
            .expect("changelog commit call");
        let push = calls
            .iter()
            .position(|c| c == "push_branch")
            .expect("push call");
        assert!(tag < changelog_commit);
        assert!(changelog_commit < push);
        Ok(())
    }

    #[test]
    fn dirty_tree_aborts_before_any_write() {
        let pipeline = pipeline("/mock/ws", MockGitProvider::new().dirty());
        let plan = two_package_plan(Path::new("/mock/ws"), "1.0.1");

        let result = pipeline.execute(&ReleaseConfig::default(), &plan);

        assert!(matches!(result, Err(PipelineError::DirtyWorkingTree)));
        assert!(pipeline.manifests.writes().is_empty());
        assert!(pipeline.runner.runs().is_empty());
    }

    #[test]
    fn tag_failure_stops_before_push() {
        let pipeline = pipeline("/mock/ws", MockGitProvider::new().failing_at("create_tag"));
        let plan = two_package_plan(Path::new("/mock/ws"), "1.0.1");

        let result = pipeline.execute(&ReleaseConfig::default(), &plan);

        assert!(matches!(
            result,
            Err(PipelineError::SourceControl {
                step: Step::Tag,
                ..
            })
        ));
        // Versions were applied and the commit exists, but nothing
        // was pushed.
        assert_eq!(pipeline.manifests.writes().len(), 3);
        let calls = pipeline.git.calls();
        assert_eq!(
            calls.iter().filter(|c| c.starts_with("commit:")).count(),
            1
        );
        assert!(!calls.iter().any(|c| c.starts_with("push")));
    }

    #[test]
    fn manifest_failure_still_attempts_every_target() {
        let root = Path::new("/mock/ws");
        let plan = two_package_plan(root, "1.0.1");
        let failing = plan.packages[0].manifest_path.clone();
        let pipeline = ReleasePipeline::new(
            root,
            MockGitProvider::new(),
            MockManifestWriter::new().failing_for(failing.clone()),
            MockCommandRunner::new(),
        );

        let result = pipeline.execute(&ReleaseConfig::default(), &plan);

        assert!(
            matches!(result, Err(PipelineError::ManifestWrite { path, .. }) if path == failing)
        );
        assert_eq!(pipeline.manifests.writes().len(), 3);
        // Fatal before the commit step.
        assert!(!pipeline.git.calls().iter().any(|c| c.starts_with("commit")));
    }

    #[test]
    fn hook_failure_is_reported_but_not_fatal() -> anyhow::Result<()> {
        let root = Path::new("/mock/ws");
        let pipeline = ReleasePipeline::new(
            root,
            MockGitProvider::new(),
            MockManifestWriter::new(),
            MockCommandRunner::new().failing_for("npm run lint"),
        );
        let config = ReleaseConfig {
            pre_commit: vec!["npm run lint".to_string()],
            ..ReleaseConfig::default()
        };
        let plan = two_package_plan(root, "1.0.1");

        let report = pipeline.execute(&config, &plan)?;

        assert_eq!(report.hook_failures.len(), 1);
        assert_eq!(report.hook_failures[0].step, Step::PreCommitHooks);
        assert_eq!(report.hook_failures[0].command, "npm run lint");
        assert!(report.commit.is_some());
        Ok(())
    }

    #[test]
    fn publish_failure_is_recorded_per_package() -> anyhow::Result<()> {
        let root = Path::new("/mock/ws");
        let plan = two_package_plan(root, "1.0.1").with_publish(true);
        let pipeline = ReleasePipeline::new(
            root,
            MockGitProvider::new(),
            MockManifestWriter::new(),
            MockCommandRunner::new().failing_in(plan.packages[0].dir.clone()),
        );

        let report = pipeline.execute(&ReleaseConfig::default(), &plan)?;

        assert_eq!(report.published, vec!["util"]);
        assert_eq!(report.publish_failures.len(), 1);
        assert_eq!(report.publish_failures[0].package, "core");
        Ok(())
    }

    #[test]
    fn commit_and_tag_use_the_message_template() -> anyhow::Result<()> {
        let root = Path::new("/mock/ws");
        let pipeline = pipeline(root, MockGitProvider::new());
        let config = ReleaseConfig {
            message: "chore(release): %s".to_string(),
            ..ReleaseConfig::default()
        };
        let plan = two_package_plan(root, "2.0.0");

        pipeline.execute(&config, &plan)?;

        let calls = pipeline.git.calls();
        assert!(calls.contains(&"commit:chore(release): 2.0.0".to_string()));
        assert!(calls.contains(&"create_tag:2.0.0".to_string()));
        Ok(())
    }

    #[test]
    fn optional_steps_are_skipped_when_disabled() -> anyhow::Result<()> {
        let root = Path::new("/mock/ws");
        let pipeline = pipeline(root, MockGitProvider::new());
        let plan = two_package_plan(root, "1.0.1");

        let report = pipeline.execute(&ReleaseConfig::default(), &plan)?;

        assert_eq!(
            report.executed,
            vec![
                Step::GuardCheck,
                Step::ApplyVersions,
                Step::Commit,
                Step::Tag,
                Step::Push,
                Step::PushTags,
            ]
        );
        assert!(report.published.is_empty());
        Ok(())
    }
}
