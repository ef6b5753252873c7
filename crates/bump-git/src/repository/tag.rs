use crate::{Result, TagInfo};

use super::Repository;

impl Repository {
    /// Creates an annotated tag pointing at HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag cannot be created or already exists.
    pub fn create_tag(&self, name: &str, message: &str) -> Result<TagInfo> {
        let head = self.inner.head()?.peel_to_commit()?;
        let sig = self.inner.signature()?;

        self.inner
            .tag(name, head.as_object(), &sig, message, false)?;

        Ok(TagInfo {
            name: name.to_string(),
            target_sha: head.id().to_string(),
        })
    }

    /// Finds the most recent annotated tag reachable from HEAD, if
    /// any. Used to bound changelog generation.
    ///
    /// # Errors
    ///
    /// Returns an error if tag enumeration fails.
    pub fn latest_tag(&self) -> Result<Option<String>> {
        let mut best: Option<(i64, String)> = None;

        self.inner.tag_foreach(|oid, name_bytes| {
            let Ok(name) = std::str::from_utf8(name_bytes) else {
                return true;
            };
            let Some(short) = name.strip_prefix("refs/tags/") else {
                return true;
            };

            if let Ok(commit) = self
                .inner
                .find_object(oid, None)
                .and_then(|o| o.peel_to_commit())
            {
                let time = commit.time().seconds();
                if best.as_ref().is_none_or(|(t, _)| time >= *t) {
                    best = Some((time, short.to_string()));
                }
            }
            true
        })?;

        Ok(best.map(|(_, name)| name))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::setup_test_repo;

    #[test]
    fn create_annotated_tag() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let tag_info = repo.create_tag("1.0.0", "release: 1.0.0")?;

        assert_eq!(tag_info.name, "1.0.0");

        let head = repo.inner.head()?.peel_to_commit()?;
        assert_eq!(tag_info.target_sha, head.id().to_string());

        let tag = repo.inner.find_reference("refs/tags/1.0.0")?;
        assert!(tag.peel_to_tag().is_ok());

        Ok(())
    }

    #[test]
    fn duplicate_tag_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        repo.create_tag("1.0.0", "first")?;
        let result = repo.create_tag("1.0.0", "duplicate");

        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn latest_tag_finds_newest() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        repo.create_tag("1.0.0", "release: 1.0.0")?;

        std::fs::write(dir.path().join("file.txt"), "content")?;
        repo.stage_all()?;
        repo.commit("feat: add file")?;
        repo.create_tag("1.1.0", "release: 1.1.0")?;

        assert_eq!(repo.latest_tag()?.as_deref(), Some("1.1.0"));
        Ok(())
    }

    #[test]
    fn latest_tag_none_without_tags() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        assert!(repo.latest_tag()?.is_none());
        Ok(())
    }
}
