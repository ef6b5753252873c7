use crate::Result;

use super::Repository;

impl Repository {
    /// Collects commit summary lines from HEAD back to (but not
    /// including) `since_tag`, newest first. With no tag, the whole
    /// history is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the revision walk fails.
    pub fn commit_summaries(&self, since_tag: Option<&str>) -> Result<Vec<String>> {
        let mut walk = self.inner.revwalk()?;
        walk.push_head()?;

        if let Some(tag) = since_tag {
            let spec = format!("refs/tags/{tag}");
            if let Ok(reference) = self.inner.find_reference(&spec) {
                if let Ok(commit) = reference.peel_to_commit() {
                    walk.hide(commit.id())?;
                }
            }
        }

        let mut summaries = Vec::new();
        for oid in walk {
            let commit = self.inner.find_commit(oid?)?;
            if let Some(summary) = commit.summary() {
                summaries.push(summary.to_string());
            }
        }

        Ok(summaries)
    }
}
