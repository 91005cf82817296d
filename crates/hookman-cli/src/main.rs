//! hookman CLI
//!
//! Inspects, validates and migrates pre-commit hook configurations.

mod cli;
mod commands;
mod context;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => {
            let cwd = match &cli.directory {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            execute_command(cmd, cwd, cli.config)
        }
        None => {
            println!(
                "{} Pre-commit hook configuration inspector",
                "hookman".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "hookman --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr; `-v` forces debug, otherwise `RUST_LOG` decides.
fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands, cwd: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let ctx = || Context::resolve(&cwd, config.as_deref());

    match cmd {
        Commands::Validate { json, strict } => commands::run_validate(&ctx()?, json, strict),
        Commands::ValidateManifest { path, json } => {
            commands::run_validate_manifest(&ctx()?, path.as_deref(), json)
        }
        Commands::List { json } => commands::run_list(&ctx()?, json),
        Commands::Show { hook } => commands::run_show(&ctx()?, &hook),
        Commands::Files {
            paths,
            staged,
            json,
        } => commands::run_files(&ctx()?, &paths, staged, json),
        Commands::Audit { json } => commands::run_audit(&ctx()?, json),
        Commands::Migrate { dry_run } => commands::run_migrate(&ctx()?, dry_run),
        Commands::SampleConfig => {
            commands::run_sample_config();
            Ok(())
        }
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookman_test_utils::repo::TestRepo;

    #[test]
    fn test_execute_validate_with_temp_repo() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_config(hookman_test_utils::SAMPLE_CONFIG);

        let result = execute_command(
            Commands::Validate {
                json: false,
                strict: false,
            },
            repo.root().to_path_buf(),
            None,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_with_config_flag() {
        let repo = TestRepo::new();
        repo.write_file("ci/hooks.yaml", hookman_test_utils::SAMPLE_CONFIG);

        let result = execute_command(
            Commands::List { json: true },
            repo.root().to_path_buf(),
            Some(PathBuf::from("ci/hooks.yaml")),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_sample_config_needs_no_repository() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = execute_command(Commands::SampleConfig, dir.path().join("missing"), None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
