//! Files command implementation
//!
//! Shows which hooks would receive each file without running anything.

use colored::Colorize;
use hookman_fs::NormalizedPath;
use hookman_meta::{Selection, select};
use serde::Serialize;

use crate::context::{Context, relative_path};
use crate::error::Result;

/// Which hooks a single file reaches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHooks {
    pub path: String,
    pub hooks: Vec<String>,
}

/// Run the files command
///
/// Paths come from the command line, the index (`staged`), or every
/// tracked file.
pub fn run_files(ctx: &Context, paths: &[String], staged: bool, json: bool) -> Result<()> {
    let (_, config) = ctx.load_config()?;

    let candidates: Vec<NormalizedPath> = if !paths.is_empty() {
        paths.iter().map(|p| relative_path(p)).collect()
    } else if staged {
        ctx.staged_files()?
    } else {
        ctx.tracked_files()?
    };

    let selection = select(&config, &candidates)?;
    let rows = file_hooks(&selection, &candidates);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No files to check".dimmed());
        return Ok(());
    }

    for row in &rows {
        if row.hooks.is_empty() {
            println!("{} {}", row.path, "(no hooks)".dimmed());
        } else {
            println!("{} {}", row.path, row.hooks.join(", ").cyan());
        }
    }

    Ok(())
}

/// Hooks per candidate path, keeping the candidates' order.
pub fn file_hooks(selection: &Selection, candidates: &[NormalizedPath]) -> Vec<FileHooks> {
    candidates
        .iter()
        .map(|path| FileHooks {
            path: path.as_str().to_string(),
            hooks: selection
                .hooks_for(path)
                .into_iter()
                .map(|record| record.display_id().to_string())
                .collect(),
        })
        .collect()
}
