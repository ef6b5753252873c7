use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bump_git::{CommitInfo, GitError, TagInfo};
use bump_manifest::ManifestError;

use crate::traits::{CommandError, CommandRunner, GitProvider, ManifestWriter};

const MOCK_SHA: &str = "0000000000000000000000000000000000000000";

/// Records every call and can be told to fail at one method, so tests
/// can assert exactly how far a run progressed.
pub struct MockGitProvider {
    clean: bool,
    fail_on: Option<&'static str>,
    latest: Option<String>,
    summaries: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clean: true,
            fail_on: None,
            latest: None,
            summaries: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn dirty(mut self) -> Self {
        self.clean = false;
        self
    }

    #[must_use]
    pub fn failing_at(mut self, method: &'static str) -> Self {
        self.fail_on = Some(method);
        self
    }

    #[must_use]
    pub fn with_latest_tag(mut self, name: &str) -> Self {
        self.latest = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_summaries(mut self, summaries: &[&str]) -> Self {
        self.summaries = summaries.iter().map(ToString::to_string).collect();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    fn record(&self, method: &'static str, detail: Option<&str>) -> Result<(), GitError> {
        let call = detail.map_or_else(|| method.to_string(), |d| format!("{method}:{d}"));
        self.calls.lock().expect("mock lock poisoned").push(call);
        if self.fail_on == Some(method) {
            Err(GitError::Git(git2::Error::from_str("injected git failure")))
        } else {
            Ok(())
        }
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn is_working_tree_clean(&self, _project_root: &Path) -> Result<bool, GitError> {
        self.record("is_working_tree_clean", None)?;
        Ok(self.clean)
    }

    fn stage_all(&self, _project_root: &Path) -> Result<(), GitError> {
        self.record("stage_all", None)
    }

    fn commit(&self, _project_root: &Path, message: &str) -> Result<CommitInfo, GitError> {
        self.record("commit", Some(message))?;
        Ok(CommitInfo {
            sha: MOCK_SHA.to_string(),
            message: message.to_string(),
        })
    }

    fn create_tag(
        &self,
        _project_root: &Path,
        name: &str,
        _message: &str,
    ) -> Result<TagInfo, GitError> {
        self.record("create_tag", Some(name))?;
        Ok(TagInfo {
            name: name.to_string(),
            target_sha: MOCK_SHA.to_string(),
        })
    }

    fn latest_tag(&self, _project_root: &Path) -> Result<Option<String>, GitError> {
        self.record("latest_tag", None)?;
        Ok(self.latest.clone())
    }

    fn commit_summaries(
        &self,
        _project_root: &Path,
        _since_tag: Option<&str>,
    ) -> Result<Vec<String>, GitError> {
        self.record("commit_summaries", None)?;
        Ok(self.summaries.clone())
    }

    fn push_branch(&self, _project_root: &Path) -> Result<(), GitError> {
        self.record("push_branch", None)
    }

    fn push_tag(&self, _project_root: &Path, name: &str) -> Result<(), GitError> {
        self.record("push_tag", Some(name))
    }
}

pub struct MockManifestWriter {
    fail_path: Option<PathBuf>,
    writes: Mutex<Vec<(PathBuf, String)>>,
}

impl MockManifestWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fail_path: None,
            writes: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing_for(mut self, path: PathBuf) -> Self {
        self.fail_path = Some(path);
        self
    }

    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().expect("mock lock poisoned").clone()
    }
}

impl Default for MockManifestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for MockManifestWriter {
    fn write_version(&self, manifest_path: &Path, version: &str) -> Result<(), ManifestError> {
        self.writes
            .lock()
            .expect("mock lock poisoned")
            .push((manifest_path.to_path_buf(), version.to_string()));
        if self.fail_path.as_deref() == Some(manifest_path) {
            Err(ManifestError::Write {
                path: manifest_path.to_path_buf(),
                source: std::io::Error::other("injected write failure"),
            })
        } else {
            Ok(())
        }
    }
}

pub struct MockCommandRunner {
    fail_command: Option<String>,
    fail_in: Option<PathBuf>,
    runs: Mutex<Vec<(String, PathBuf)>>,
}

impl MockCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fail_command: None,
            fail_in: None,
            runs: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing_for(mut self, command: &str) -> Self {
        self.fail_command = Some(command.to_string());
        self
    }

    #[must_use]
    pub fn failing_in(mut self, cwd: PathBuf) -> Self {
        self.fail_in = Some(cwd);
        self
    }

    pub fn runs(&self) -> Vec<(String, PathBuf)> {
        self.runs.lock().expect("mock lock poisoned").clone()
    }
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<(), CommandError> {
        self.runs
            .lock()
            .expect("mock lock poisoned")
            .push((command.to_string(), cwd.to_path_buf()));
        let command_fails = self.fail_command.as_deref() == Some(command);
        let cwd_fails = self.fail_in.as_deref() == Some(cwd);
        if command_fails || cwd_fails {
            Err(CommandError::Failed {
                command: command.to_string(),
                code: Some(1),
            })
        } else {
            Ok(())
        }
    }
}
