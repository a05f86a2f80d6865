//! Mirror Core - Core library for branch mirroring
//!
//! This crate clones a remote git repository, enumerates its branches and
//! materializes one independent single-branch clone per branch.

pub mod client;
pub mod config;
pub mod error;
pub mod git;
pub mod workflow;

pub use client::{Git2Client, SourceControl};
pub use config::{Config, MirrorConfig};
pub use error::{Error, Result};
pub use git::{CloneOptions, GitRepo, RemoteReference};
pub use workflow::{
    checkout_to_branch, find_remote_reference, list_remote_branches, reset_workspace,
    MirrorEvent, MirrorReport, MirrorWorkflow, MirroredBranch,
};
