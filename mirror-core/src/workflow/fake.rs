//! In-memory source-control client for workflow tests

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use git2::Oid;

use crate::client::SourceControl;
use crate::git::{CloneOptions, RemoteReference};
use crate::{Error, Result};

/// Marker file written into every directory the fake "clones" into
pub const CLONE_MARKER: &str = ".fake-clone";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clone {
        dest: PathBuf,
        reference: Option<String>,
    },
    Fetch {
        repo: PathBuf,
    },
    List,
    Checkout {
        reference: String,
        branch: String,
    },
}

#[derive(Debug)]
pub struct FakeRepo {
    pub path: PathBuf,
}

impl FakeRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Serves a fixed reference list from a remote named `origin`
#[derive(Debug, Default)]
pub struct FakeClient {
    pub references: Vec<RemoteReference>,
    pub fail_fetch: bool,
    /// Clones targeting one of these directories fail
    pub fail_clone_into: HashSet<PathBuf>,
    calls: RefCell<Vec<Call>>,
}

impl FakeClient {
    pub fn with_references(names: &[&str]) -> Self {
        let references = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let hex = format!("{:040x}", i + 1);
                RemoteReference::new(*name, Oid::from_str(&hex).unwrap())
            })
            .collect();

        Self {
            references,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn cloned_dirs(&self) -> Vec<PathBuf> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Clone { dest, .. } => Some(dest.clone()),
                _ => None,
            })
            .collect()
    }

    fn check_remote(&self, remote_name: &str) -> Result<()> {
        if remote_name == "origin" {
            Ok(())
        } else {
            Err(Error::RemoteNotFound(remote_name.to_string()))
        }
    }
}

impl SourceControl for FakeClient {
    type Repo = FakeRepo;

    fn clone_repo(&self, url: &str, dest: &Path, options: &CloneOptions) -> Result<FakeRepo> {
        self.calls.borrow_mut().push(Call::Clone {
            dest: dest.to_path_buf(),
            reference: options.reference.clone(),
        });

        if self.fail_clone_into.contains(dest) {
            return Err(Error::Clone {
                url: url.to_string(),
                path: dest.to_path_buf(),
                source: git2::Error::from_str("simulated clone failure"),
            });
        }

        std::fs::create_dir_all(dest)?;
        let marker = options.reference.as_deref().unwrap_or("full");
        std::fs::write(dest.join(CLONE_MARKER), marker)?;

        Ok(FakeRepo::new(dest))
    }

    fn fetch(&self, repo: &FakeRepo, remote_name: &str, _progress: bool) -> Result<()> {
        self.calls.borrow_mut().push(Call::Fetch {
            repo: repo.path.clone(),
        });
        self.check_remote(remote_name)?;
        if self.fail_fetch {
            return Err(Error::Other("simulated fetch failure".to_string()));
        }
        Ok(())
    }

    fn list_remote_references(
        &self,
        _repo: &FakeRepo,
        remote_name: &str,
    ) -> Result<Vec<RemoteReference>> {
        self.calls.borrow_mut().push(Call::List);
        self.check_remote(remote_name)?;
        Ok(self.references.clone())
    }

    fn checkout_new_branch(
        &self,
        _repo: &FakeRepo,
        reference: &RemoteReference,
        branch_name: &str,
    ) -> Result<()> {
        self.calls.borrow_mut().push(Call::Checkout {
            reference: reference.name.clone(),
            branch: branch_name.to_string(),
        });
        Ok(())
    }
}
