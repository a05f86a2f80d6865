//! Git repository handle

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::{Error, Result};

/// A git repository with a working directory
pub struct GitRepo {
    /// The underlying git2 repository
    repo: Repository,
    /// Path to the working directory root
    root: PathBuf,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// This will search upward from the given path to find the repository root.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::Config(format!(
                    "Not a git repository: {}. Run the mirror first or point --repo at a clone.",
                    path.display()
                ))
            } else {
                Error::Git(e)
            }
        })?;

        Self::from_repository(repo)
    }

    /// Wrap a repository produced by git2 (for example by a clone)
    pub fn from_repository(repo: Repository) -> Result<Self> {
        let root = repo
            .workdir()
            .ok_or_else(|| Error::Config("Bare repositories are not supported".to_string()))?
            .to_path_buf();

        Ok(Self { repo, root })
    }

    /// Get the repository root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a configured remote by name
    pub fn find_remote(&self, name: &str) -> Result<git2::Remote<'_>> {
        self.repo.find_remote(name).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::RemoteNotFound(name.to_string())
            } else {
                Error::Git(e)
            }
        })
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(Error::Git(e)),
        };

        if head.is_branch() {
            Ok(head.shorthand().map(|s| s.to_string()))
        } else {
            // Detached HEAD
            Ok(None)
        }
    }

    /// Commit id HEAD points at, if any
    pub fn head_commit(&self) -> Result<Option<git2::Oid>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(Error::Git(e)),
        }
    }

    /// Get access to the underlying git2 repository
    pub fn inner(&self) -> &Repository {
        &self.repo
    }
}
