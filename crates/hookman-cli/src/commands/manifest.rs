//! Validate-manifest command implementation

use std::path::Path;

use hookman_fs::{HookPath, NormalizedPath};
use hookman_meta::load_manifest;

use super::validate::{check_outcome, print_report, report_json};
use crate::context::Context;
use crate::error::Result;

/// Run the validate-manifest command
///
/// Without `path`, validates `.pre-commit-hooks.yaml` at the repository root.
pub fn run_validate_manifest(ctx: &Context, path: Option<&Path>, json: bool) -> Result<()> {
    let path = match path {
        Some(p) if p.is_absolute() => NormalizedPath::new(p),
        Some(p) => NormalizedPath::new(ctx.cwd.to_native().join(p)),
        None => ctx.root.join(HookPath::Manifest.as_str()),
    };

    let hooks = load_manifest(&path)?;
    let report = ctx.validator().validate_manifest(&hooks);

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&path, &report, false))?);
    } else {
        print_report(&path, &report, hooks.len());
    }

    check_outcome(&report, false)
}
