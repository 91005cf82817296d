//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// hookman - Inspect and validate pre-commit hook configurations
#[derive(Parser, Debug)]
#[command(name = "hookman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the hook configuration (default: discovered from the working directory)
    #[arg(long, global = true, env = "HOOKMAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run as if started in <DIR>
    #[arg(short = 'C', global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate the hook configuration
    ///
    /// Exits non-zero when errors are found, or warnings with --strict.
    ///
    /// Examples:
    ///   hookman validate
    ///   hookman validate --strict
    ///   hookman --config ci/pre-commit.yaml validate --json
    Validate {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Validate a hook manifest (.pre-commit-hooks.yaml)
    ValidateManifest {
        /// Manifest path (default: .pre-commit-hooks.yaml at the repository root)
        path: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every configured hook with its tool, revision and arguments
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show all settings of a hook, looked up by id or alias
    Show {
        /// Hook id or alias
        hook: String,
    },

    /// Show which hooks would receive each file
    ///
    /// Without paths, the files tracked by git are used.
    ///
    /// Examples:
    ///   hookman files
    ///   hookman files src/app.py docs/index.md
    ///   hookman files --staged --json
    Files {
        /// Paths relative to the repository root
        paths: Vec<String>,

        /// Use the files staged for commit
        #[arg(long, conflicts_with = "paths")]
        staged: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Report excludes that match nothing and hooks that apply to no file
    Audit {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a legacy configuration into the current format
    Migrate {
        /// Print the migrated configuration instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a starter configuration
    SampleConfig,

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   hookman completions bash > ~/.local/share/bash-completion/completions/hookman
    ///   hookman completions zsh > ~/.zfunc/_hookman
    ///   hookman completions fish > ~/.config/fish/completions/hookman.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
