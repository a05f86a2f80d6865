//! Git operations backed by libgit2
//!
//! This module provides cloning, remote reference listing, fetching and
//! branch checkout on top of the `git2` crate.

mod checkout;
mod clone;
mod progress;
mod reference;
mod remote;
mod repo;

#[cfg(test)]
pub(crate) mod fixture;

pub use clone::{clone_repo, CloneOptions};
pub use reference::{branch_ref_name, short_branch_name, RemoteReference, BRANCH_PREFIX};
pub use repo::GitRepo;
