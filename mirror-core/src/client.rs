//! Source-control client abstraction
//!
//! The mirror workflow only needs a handful of operations from a version
//! control system. [`SourceControl`] names them so the workflow can run
//! against libgit2 in production and against an in-memory fake in tests.

use std::path::Path;

use crate::git::{clone_repo, CloneOptions, GitRepo, RemoteReference};
use crate::Result;

/// Operations the mirror workflow performs on repositories
pub trait SourceControl {
    /// Handle to a local repository produced by [`SourceControl::clone_repo`]
    type Repo;

    /// Clone `url` into `dest`
    fn clone_repo(&self, url: &str, dest: &Path, options: &CloneOptions) -> Result<Self::Repo>;

    /// Fetch from the named remote
    fn fetch(&self, repo: &Self::Repo, remote_name: &str, progress: bool) -> Result<()>;

    /// List every reference advertised by the named remote
    fn list_remote_references(
        &self,
        repo: &Self::Repo,
        remote_name: &str,
    ) -> Result<Vec<RemoteReference>>;

    /// Create a local branch at `reference` and check it out
    fn checkout_new_branch(
        &self,
        repo: &Self::Repo,
        reference: &RemoteReference,
        branch_name: &str,
    ) -> Result<()>;
}

/// [`SourceControl`] implementation using libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Client;

impl Git2Client {
    /// Create a new libgit2 client
    pub fn new() -> Self {
        Self
    }
}

impl SourceControl for Git2Client {
    type Repo = GitRepo;

    fn clone_repo(&self, url: &str, dest: &Path, options: &CloneOptions) -> Result<GitRepo> {
        clone_repo(url, dest, options)
    }

    fn fetch(&self, repo: &GitRepo, remote_name: &str, progress: bool) -> Result<()> {
        repo.fetch(remote_name, progress)
    }

    fn list_remote_references(
        &self,
        repo: &GitRepo,
        remote_name: &str,
    ) -> Result<Vec<RemoteReference>> {
        repo.list_remote_references(remote_name)
    }

    fn checkout_new_branch(
        &self,
        repo: &GitRepo,
        reference: &RemoteReference,
        branch_name: &str,
    ) -> Result<()> {
        repo.checkout_new_branch(reference, branch_name)
    }
}
