//! Repository cloning

use std::path::Path;

use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::FetchOptions;

use super::progress::remote_callbacks;
use super::reference::short_branch_name;
use super::repo::GitRepo;
use crate::{Error, Result};

/// Options for a clone
#[derive(Debug, Clone)]
pub struct CloneOptions {
    /// Stream transfer progress to stdout
    pub progress: bool,
    /// Populate the working tree after fetching
    pub checkout: bool,
    /// Restrict the clone to this single branch reference (`refs/heads/...`)
    pub reference: Option<String>,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            progress: false,
            checkout: true,
            reference: None,
        }
    }
}

impl CloneOptions {
    /// Full clone with every branch and a checked out working tree
    pub fn full(progress: bool) -> Self {
        Self {
            progress,
            ..Self::default()
        }
    }

    /// Clone fetching only `reference` and checking it out
    pub fn single_branch(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }
}

/// Clone `url` into `dest`
///
/// Parent directories of `dest` are created as needed. `dest` itself must be
/// absent or empty.
pub fn clone_repo(url: &str, dest: &Path, options: &CloneOptions) -> Result<GitRepo> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(remote_callbacks(options.progress));

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    if !options.checkout {
        let mut checkout = CheckoutBuilder::new();
        checkout.dry_run();
        builder.with_checkout(checkout);
    }

    if let Some(ref reference) = options.reference {
        let branch = short_branch_name(reference).ok_or_else(|| {
            Error::Config(format!(
                "Single-branch clone needs a refs/heads/ reference, got '{}'",
                reference
            ))
        })?;
        let refspec = format!("+refs/heads/{0}:refs/remotes/origin/{0}", branch);

        builder.branch(branch);
        builder.remote_create(move |repo, name, url| repo.remote_with_fetch(name, url, &refspec));
    }

    tracing::debug!(
        url = %url,
        dest = %dest.display(),
        reference = ?options.reference,
        "Cloning repository"
    );

    let repo = builder.clone(url, dest).map_err(|source| Error::Clone {
        url: url.to_string(),
        path: dest.to_path_buf(),
        source,
    })?;

    GitRepo::from_repository(repo)
}
