use crate::error::{GitSemversError, Result};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl std::fmt::Debug for Git2Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git2Repository")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git2Repository {
    /// Discover the git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            GitSemversError::repository(format!(
                "Not a git repository '{}': {}",
                path.display(),
                e.message()
            ))
        })?;

        tracing::debug!(path = %repo.path().display(), "opened repository");
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Work-tree root, or the git directory of a bare repository
    pub fn root(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }
}

/// Keep the names that are valid UTF-8, logging the others.
fn utf8_tag_names<'a>(names: impl IntoIterator<Item = &'a [u8]>) -> Vec<String> {
    names
        .into_iter()
        .filter_map(|bytes| match std::str::from_utf8(bytes) {
            Ok(name) => Some(name.to_string()),
            Err(_) => {
                tracing::debug!(
                    tag = %String::from_utf8_lossy(bytes),
                    "skipping tag: name is not valid UTF-8"
                );
                None
            }
        })
        .collect()
}

impl super::TagSource for Git2Repository {
    /// Tag names in byte order, the way `git tag` lists them.
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        let mut names = utf8_tag_names(tags.iter_bytes());
        names.sort();

        tracing::debug!(count = names.len(), "listed tags");
        Ok(names)
    }
}
