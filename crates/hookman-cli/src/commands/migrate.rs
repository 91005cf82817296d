//! Migrate command implementation

use colored::Colorize;
use hookman_fs::io;
use hookman_meta::{migrate_config, parse_config};

use crate::context::Context;
use crate::error::Result;

/// Run the migrate command
///
/// The rewritten text must load as a current configuration before the
/// file is replaced.
pub fn run_migrate(ctx: &Context, dry_run: bool) -> Result<()> {
    let path = ctx.config_path()?;
    let original = io::read_text(&path)?;
    let migration = migrate_config(&original);

    if !migration.changed {
        println!("{} {} is already up to date", "OK".green().bold(), path);
        return Ok(());
    }

    parse_config(&migration.content, &path)?;

    if dry_run {
        print!("{}", migration.content);
        return Ok(());
    }

    io::write_atomic(&path, migration.content.as_bytes())?;
    tracing::info!(path = %path, "Migrated hook configuration");
    println!("{} migrated {}", "OK".green().bold(), path);

    Ok(())
}
