//! Audit command implementation
//!
//! Static counterpart of the `check-useless-excludes` and
//! `check-hooks-apply` meta hooks, run against the tracked files.

use colored::Colorize;
use hookman_meta::{HookRecord, UselessExclude, hooks_without_files, useless_excludes};
use serde_json::json;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the audit command
pub fn run_audit(ctx: &Context, json: bool) -> Result<()> {
    let (_, config) = ctx.load_config()?;
    let files = ctx.tracked_files()?;

    let excludes = useless_excludes(&config, &files)?;
    let idle = hooks_without_files(&config, &files)?;
    tracing::debug!(
        files = files.len(),
        useless_excludes = excludes.len(),
        idle_hooks = idle.len(),
        "Audit finished"
    );

    if json {
        let output = json!({
            "files": files.len(),
            "useless_excludes": excludes,
            "hooks_without_files": idle,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_findings(&excludes, &idle, files.len());
    }

    let count = excludes.len() + idle.len();
    if count > 0 {
        return Err(CliError::AuditFailed { count });
    }
    Ok(())
}

fn print_findings(excludes: &[UselessExclude], idle: &[HookRecord], files: usize) {
    for exclude in excludes {
        let owner = exclude.hook.as_deref().unwrap_or("global");
        println!(
            "{} {} ({}): '{}' does not match any of {} files",
            "useless exclude".yellow().bold(),
            exclude.location.cyan(),
            owner,
            exclude.pattern,
            files
        );
    }
    for hook in idle {
        println!(
            "{} {} from {} does not apply to any of {} files",
            "unused hook".yellow().bold(),
            hook.display_id().cyan(),
            hook.tool,
            files
        );
    }
    if excludes.is_empty() && idle.is_empty() {
        println!(
            "{} every exclude matches and every hook applies ({} files)",
            "OK".green().bold(),
            files
        );
    }
}
