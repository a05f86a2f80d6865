//! Branches command - list the remote branches of an existing clone

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use mirror_core::{list_remote_branches, Git2Client, GitRepo, MirrorConfig};

/// Arguments for the branches command
#[derive(Args, Debug)]
pub struct BranchesArgs {
    /// Clone to inspect (defaults to the primary clone under the output directory)
    #[arg(short, long)]
    pub repo: Option<PathBuf>,

    /// Print short branch names instead of `<commit> <reference>` lines
    #[arg(short, long)]
    pub short: bool,
}

impl BranchesArgs {
    /// Execute the branches command
    pub fn execute(&self, config: &MirrorConfig) -> anyhow::Result<()> {
        let path = self.repo.clone().unwrap_or_else(|| config.main_repo_path());
        let repo = GitRepo::open(&path)
            .with_context(|| format!("Cannot open clone at {}", path.display()))?;

        let branches = list_remote_branches(&Git2Client::new(), &repo, &config.remote_name)?;

        for reference in &branches {
            match reference.branch_name() {
                Some(name) if self.short => println!("{}", name),
                _ => println!("{}", reference),
            }
        }

        Ok(())
    }
}
