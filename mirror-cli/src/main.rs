//! Branch Mirror CLI - Command line interface for branch mirroring
//!
//! Clones a remote repository and every one of its branches into local
//! checkouts.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use mirror_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{BranchesArgs, CheckoutArgs, MirrorArgs};

/// Branch Mirror: clone a repository and each of its branches
#[derive(Parser, Debug)]
#[command(name = "branch-mirror")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository to mirror (overrides config and env)
    #[arg(long, global = true, env = "MIRROR_URL")]
    url: Option<String>,

    /// Output root directory (overrides config and env)
    #[arg(short, long, global = true, env = "MIRROR_OUTPUT")]
    output: Option<PathBuf>,

    /// Do not stream clone and fetch progress
    #[arg(long, global = true)]
    no_progress: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Mirror the repository and all of its branches (default)
    #[command(visible_alias = "m")]
    Mirror(MirrorArgs),

    /// List the branches advertised by the remote of an existing clone
    #[command(visible_alias = "ls")]
    Branches(BranchesArgs),

    /// Check out a remote branch as a new local branch in an existing clone
    #[command(visible_alias = "co")]
    Checkout(CheckoutArgs),

    /// Show current configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    ExitCode::from(report(run(cli)))
}

/// Map the outcome of a command to a process exit status
///
/// Errors are printed to stdout as a single red line.
fn report(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            println!("{}", error_line(&e));
            1
        }
    }
}

fn error_line(err: &anyhow::Error) -> String {
    format!("error: {:#}", err).red().bold().to_string()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Needs no configuration, so a broken config file cannot break it
    if let Some(Commands::Version) = cli.command {
        println!("branch-mirror {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::load_with_overrides(
        cli.config.as_deref(),
        cli.url.clone(),
        cli.output.clone(),
        cli.no_progress,
    )?;

    if cli.verbose {
        tracing::info!(
            url = %config.mirror.remote_url,
            output = %config.mirror.output_dir.display(),
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {}
        Some(Commands::Mirror(args)) => {
            args.execute(&config.mirror)?;
        }
        None => {
            MirrorArgs::default().execute(&config.mirror)?;
        }
        Some(Commands::Branches(args)) => {
            args.execute(&config.mirror)?;
        }
        Some(Commands::Checkout(args)) => {
            args.execute(&config.mirror)?;
        }
        Some(Commands::Config) => {
            let mirror = &config.mirror;
            println!("Branch Mirror Configuration");
            println!("===========================");
            println!();
            println!("Mirror Settings:");
            println!("  remote_url: {}", mirror.remote_url);
            println!("  output_dir: {}", mirror.output_dir.display());
            println!("  main clone: {}", mirror.main_repo_path().display());
            println!("  remote_name: {}", mirror.remote_name);
            println!("  progress: {}", mirror.progress);
            println!();
            if let Some(path) = cli.config.or_else(Config::default_config_path) {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_mirror() {
        let cli = Cli::try_parse_from(["branch-mirror", "--url", "/srv/git/project"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.url.as_deref(), Some("/srv/git/project"));
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("branch-mirror").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_version_ignores_broken_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "[mirror\nremote_url = ").unwrap();
        let config = config.to_string_lossy().into_owned();

        assert!(run(parse(&["--config", &config, "version"])).is_ok());
        assert!(run(parse(&["--config", &config, "config"])).is_err());
    }

    #[test]
    fn test_failed_mirror_exits_with_one() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let missing = temp.path().join("no-such-repository");
        let output = temp.path().join("output");

        let result = run(parse(&[
            "--config",
            &config.to_string_lossy(),
            "--url",
            &missing.to_string_lossy(),
            "--output",
            &output.to_string_lossy(),
            "--no-progress",
            "mirror",
        ]));

        let err = result.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to clone"));
        assert!(message.contains("mainRepository"));
        assert!(!output.join("main").exists());
        assert_eq!(report(Err(err)), 1);
    }

    #[test]
    fn test_report_success() {
        assert_eq!(report(Ok(())), 0);
    }

    #[test]
    fn test_error_line() {
        colored::control::set_override(false);
        let err = anyhow::anyhow!("Remote 'origin' not found");
        assert_eq!(error_line(&err), "error: Remote 'origin' not found");
    }

    #[test]
    fn test_checkout_args() {
        let cli = Cli::try_parse_from(["branch-mirror", "checkout", "feature/x", "--repo", "clone"])
            .unwrap();
        match cli.command {
            Some(Commands::Checkout(args)) => {
                assert_eq!(args.branch, "feature/x");
                assert_eq!(args.repo, Some(PathBuf::from("clone")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
