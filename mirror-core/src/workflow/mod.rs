//! Mirror workflow
//!
//! Resets the output directory, clones the primary copy, enumerates remote
//! branches and materializes one single-branch clone per branch.

mod branches;
mod mirror;
mod reset;

#[cfg(test)]
pub(crate) mod fake;

pub use branches::{checkout_to_branch, find_remote_reference, list_remote_branches};
pub use mirror::{MirrorEvent, MirrorReport, MirrorWorkflow, MirroredBranch};
pub use reset::reset_workspace;
