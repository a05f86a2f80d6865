//! Mirror command - clone the repository and every branch

use clap::Args;
use mirror_core::{Git2Client, MirrorConfig, MirrorEvent, MirrorWorkflow};

/// Arguments for the mirror command
#[derive(Args, Debug, Default)]
pub struct MirrorArgs {
    /// Only print what would be cloned where
    #[arg(long)]
    pub dry_run: bool,
}

impl MirrorArgs {
    /// Execute the mirror command
    pub fn execute(&self, config: &MirrorConfig) -> anyhow::Result<()> {
        if self.dry_run {
            println!("[Dry run] Would mirror {}", config.remote_url);
            println!("  primary clone: {}", config.main_repo_path().display());
            println!("  branch clones: {}/<branch>", config.output_dir.display());
            return Ok(());
        }

        let client = Git2Client::new();
        let report = MirrorWorkflow::new(&client, config).run(print_event)?;

        tracing::info!(
            main = %report.main_path.display(),
            branches = report.branches.len(),
            "Mirror finished"
        );

        Ok(())
    }
}

/// Status line for a workflow event, if it has one
fn status_line(event: &MirrorEvent) -> Option<String> {
    match event {
        MirrorEvent::Started => Some("Starting".to_string()),
        MirrorEvent::CloneDone(_) => Some("Clone Done".to_string()),
        // A failed refresh is logged by the workflow and otherwise ignored
        MirrorEvent::FetchDone | MirrorEvent::FetchSkipped(_) => Some("Fetch Done".to_string()),
        MirrorEvent::Branch(reference) => Some(reference.to_string()),
        MirrorEvent::BranchCloned(_) => None,
    }
}

fn print_event(event: MirrorEvent) {
    if let Some(line) = status_line(&event) {
        println!("{}", line);
    }
}
