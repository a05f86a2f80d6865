//! Mirror every branch of a remote into its own clone

use std::path::PathBuf;

use crate::client::SourceControl;
use crate::config::MirrorConfig;
use crate::git::{CloneOptions, RemoteReference};
use crate::{Error, Result};

use super::branches::list_remote_branches;
use super::reset::reset_workspace;

/// Progress notifications emitted while a mirror runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorEvent {
    /// The run has begun; nothing has been touched yet
    Started,
    /// The primary clone finished at the given path
    CloneDone(PathBuf),
    /// The post-clone fetch succeeded
    FetchDone,
    /// The post-clone fetch failed and was skipped
    FetchSkipped(String),
    /// A branch reference was enumerated and is about to be cloned
    Branch(RemoteReference),
    /// A branch clone finished
    BranchCloned(MirroredBranch),
}

/// A branch that was cloned into its own directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredBranch {
    /// Remote reference the clone was made from
    pub reference: RemoteReference,
    /// Directory holding the clone
    pub path: PathBuf,
}

/// Outcome of a successful mirror run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorReport {
    /// Directory holding the full primary clone
    pub main_path: PathBuf,
    /// Branch clones, in enumeration order
    pub branches: Vec<MirroredBranch>,
}

/// Sequential mirror of a remote and all of its branches
///
/// Steps, in order: reset the output directory, clone the primary copy, fetch
/// (best-effort), enumerate remote branches, clone each branch on its own.
/// The first failing clone ends the run; directories already written stay
/// on disk.
#[derive(Debug)]
pub struct MirrorWorkflow<'a, C: SourceControl> {
    client: &'a C,
    config: &'a MirrorConfig,
}

impl<'a, C: SourceControl> MirrorWorkflow<'a, C> {
    /// Create a workflow over a client and configuration
    pub fn new(client: &'a C, config: &'a MirrorConfig) -> Self {
        Self { client, config }
    }

    /// Run the mirror, reporting progress through `on_event`
    pub fn run(&self, mut on_event: impl FnMut(MirrorEvent)) -> Result<MirrorReport> {
        let config = self.config;
        on_event(MirrorEvent::Started);

        reset_workspace(&config.output_dir)?;

        let main_path = config.main_repo_path();
        let main = self.client.clone_repo(
            &config.remote_url,
            &main_path,
            &CloneOptions::full(config.progress),
        )?;
        tracing::info!(path = %main_path.display(), "Primary clone complete");
        on_event(MirrorEvent::CloneDone(main_path.clone()));

        match self.client.fetch(&main, &config.remote_name, config.progress) {
            Ok(()) => on_event(MirrorEvent::FetchDone),
            Err(e) => {
                tracing::warn!("Fetch after clone failed: {}. Continuing with cloned refs.", e);
                on_event(MirrorEvent::FetchSkipped(e.to_string()));
            }
        }

        let references = list_remote_branches(self.client, &main, &config.remote_name)?;

        let mut branches = Vec::with_capacity(references.len());
        for reference in references {
            on_event(MirrorEvent::Branch(reference.clone()));

            let mirrored = self.mirror_branch(reference)?;
            on_event(MirrorEvent::BranchCloned(mirrored.clone()));
            branches.push(mirrored);
        }

        tracing::info!(branches = branches.len(), "Mirror complete");
        Ok(MirrorReport {
            main_path,
            branches,
        })
    }

    /// Single-branch clone of one enumerated reference
    fn mirror_branch(&self, reference: RemoteReference) -> Result<MirroredBranch> {
        let short_name = reference.branch_name().ok_or_else(|| {
            Error::Other(format!("Not a branch reference: {}", reference.name))
        })?;
        let path = self.config.branch_path(short_name);

        self.client.clone_repo(
            &self.config.remote_url,
            &path,
            &CloneOptions::single_branch(reference.name.as_str()),
        )?;
        tracing::info!(branch = %short_name, path = %path.display(), "Branch cloned");

        Ok(MirroredBranch { reference, path })
    }
}
