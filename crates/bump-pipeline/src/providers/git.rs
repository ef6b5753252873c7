use std::path::Path;

use bump_git::{CommitInfo, GitError, Repository, TagInfo};

use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn is_working_tree_clean(&self, project_root: &Path) -> Result<bool, GitError> {
        let repo = Repository::open(project_root)?;
        repo.is_working_tree_clean()
    }

    fn stage_all(&self, project_root: &Path) -> Result<(), GitError> {
        let repo = Repository::open(project_root)?;
        repo.stage_all()
    }

    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo, GitError> {
        let repo = Repository::open(project_root)?;
        repo.commit(message)
    }

    fn create_tag(
        &self,
        project_root: &Path,
        name: &str,
        message: &str,
    ) -> Result<TagInfo, GitError> {
        let repo = Repository::open(project_root)?;
        repo.create_tag(name, message)
    }

    fn latest_tag(&self, project_root: &Path) -> Result<Option<String>, GitError> {
        let repo = Repository::open(project_root)?;
        repo.latest_tag()
    }

    fn commit_summaries(
        &self,
        project_root: &Path,
        since_tag: Option<&str>,
    ) -> Result<Vec<String>, GitError> {
        let repo = Repository::open(project_root)?;
        repo.commit_summaries(since_tag)
    }

    fn push_branch(&self, project_root: &Path) -> Result<(), GitError> {
        let repo = Repository::open(project_root)?;
        repo.push_branch()
    }

    fn push_tag(&self, project_root: &Path, name: &str) -> Result<(), GitError> {
        let repo = Repository::open(project_root)?;
        repo.push_tag(name)
    }
}
