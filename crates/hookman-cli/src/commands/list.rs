//! List command implementation

use colored::Colorize;
use hookman_meta::HookRecord;

use crate::context::Context;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &Context, json: bool) -> Result<()> {
    let (path, config) = ctx.load_config()?;
    let records = config.hook_records();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{} no hooks configured in {}", "Empty:".dimmed(), path);
        return Ok(());
    }

    for record in &records {
        println!("{}", format_record(record));
    }
    println!();
    println!(
        "{} {} hooks from {} repositories",
        "Total:".dimmed(),
        records.len(),
        config.repos.len()
    );

    Ok(())
}

/// One line per hook: tool, rev, id and arguments
pub fn format_record(record: &HookRecord) -> String {
    let rev = record.rev.as_deref().unwrap_or("-");
    let mut line = format!(
        "{:<20} {:<12} {}",
        record.tool.green(),
        rev.dimmed(),
        record.display_id().cyan()
    );
    if record.alias.is_some() {
        line.push_str(&format!(" ({})", record.id));
    }
    if !record.args.is_empty() {
        line.push_str(&format!("  {}", record.args.join(" ")));
    }
    line
}
