use std::path::Path;

use bump_git::{CommitInfo, GitError, TagInfo};

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or status check fails.
    fn is_working_tree_clean(&self, project_root: &Path) -> Result<bool, GitError>;

    /// # Errors
    ///
    /// Returns an error if staging fails.
    fn stage_all(&self, project_root: &Path) -> Result<(), GitError>;

    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo, GitError>;

    /// # Errors
    ///
    /// Returns an error if the tag cannot be created or already exists.
    fn create_tag(&self, project_root: &Path, name: &str, message: &str)
    -> Result<TagInfo, GitError>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    fn latest_tag(&self, project_root: &Path) -> Result<Option<String>, GitError>;

    /// # Errors
    ///
    /// Returns an error if the revision walk fails.
    fn commit_summaries(
        &self,
        project_root: &Path,
        since_tag: Option<&str>,
    ) -> Result<Vec<String>, GitError>;

    /// # Errors
    ///
    /// Returns an error if no `origin` remote exists or the push fails.
    fn push_branch(&self, project_root: &Path) -> Result<(), GitError>;

    /// # Errors
    ///
    /// Returns an error if no `origin` remote exists or the push fails.
    fn push_tag(&self, project_root: &Path, name: &str) -> Result<(), GitError>;
}
