use crate::{GitError, Result};

use super::Repository;

impl Repository {
    fn origin(&self) -> Result<git2::Remote<'_>> {
        self.inner.find_remote("origin").map_err(|_| GitError::NoRemote)
    }

    /// Pushes the current branch to `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoRemote`] if no `origin` remote is
    /// configured, or the underlying push failure.
    pub fn push_branch(&self) -> Result<()> {
        let branch = self.current_branch()?;
        let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");

        let mut remote = self.origin()?;
        remote.push(&[refspec.as_str()], None)?;
        Ok(())
    }

    /// Pushes a single tag to `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoRemote`] if no `origin` remote is
    /// configured, or the underlying push failure.
    pub fn push_tag(&self, name: &str) -> Result<()> {
        let refspec = format!("refs/tags/{name}:refs/tags/{name}");

        let mut remote = self.origin()?;
        remote.push(&[refspec.as_str()], None)?;
        Ok(())
    }
}
