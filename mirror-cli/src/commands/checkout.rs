//! Checkout command - create a local branch from a remote branch

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use mirror_core::{checkout_to_branch, Git2Client, GitRepo, MirrorConfig};

/// Arguments for the checkout command
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Branch name without the refs/heads/ prefix
    #[arg(required = true)]
    pub branch: String,

    /// Clone to operate on (defaults to the primary clone under the output directory)
    #[arg(short, long)]
    pub repo: Option<PathBuf>,
}

impl CheckoutArgs {
    /// Execute the checkout command
    pub fn execute(&self, config: &MirrorConfig) -> anyhow::Result<()> {
        let path = self.repo.clone().unwrap_or_else(|| config.main_repo_path());
        let repo = GitRepo::open(&path)
            .with_context(|| format!("Cannot open clone at {}", path.display()))?;

        let reference = checkout_to_branch(&Git2Client::new(), &repo, &config.remote_name, &self.branch)
            .with_context(|| format!("Checkout of '{}' failed", self.branch))?;

        println!(
            "Switched to new branch '{}' at {}",
            self.branch, reference.target
        );
        Ok(())
    }
}
