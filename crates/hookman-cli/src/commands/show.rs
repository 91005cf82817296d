//! Show command implementation

use colored::Colorize;
use hookman_meta::{Config, HookEntry, RepoEntry};

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the show command
pub fn run_show(ctx: &Context, name: &str) -> Result<()> {
    let (_, config) = ctx.load_config()?;
    let matches = find_entries(&config, name);

    if matches.is_empty() {
        return Err(CliError::user(format!(
            "No hook with id or alias '{name}'. Run 'hookman list' to see configured hooks."
        )));
    }

    for (repo, hook) in matches {
        println!(
            "{} {} {}",
            hook.id.cyan().bold(),
            "from".dimmed(),
            describe_repo(repo)
        );
        print!("{}", serde_yaml::to_string(hook).map_err(|e| CliError::user(e.to_string()))?);
        println!();
    }

    Ok(())
}

/// Hook entries (with their repository) whose id or alias equals `name`
pub fn find_entries<'a>(config: &'a Config, name: &str) -> Vec<(&'a RepoEntry, &'a HookEntry)> {
    config
        .repos
        .iter()
        .flat_map(|repo| repo.hooks.iter().map(move |hook| (repo, hook)))
        .filter(|(_, hook)| hook.id == name || hook.alias.as_deref() == Some(name))
        .collect()
}

fn describe_repo(repo: &RepoEntry) -> String {
    match &repo.rev {
        Some(rev) => format!("{} @ {}", repo.repo, rev),
        None => repo.repo.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookman_fs::NormalizedPath;
    use hookman_meta::parse_config;
    use hookman_test_utils::repo::TestRepo;

    const CONFIG: &str = r#"repos:
-   repo: https://github.com/psf/black
    rev: 23.9.1
    hooks:
    -   id: black
-   repo: local
    hooks:
    -   id: black
        alias: black-local
        name: black (pinned)
        entry: black
        language: system
"#;

    #[test]
    fn test_find_entries_by_id_and_alias() {
        let config = parse_config(CONFIG, &NormalizedPath::new("c.yaml")).unwrap();

        assert_eq!(find_entries(&config, "black").len(), 2);
        let by_alias = find_entries(&config, "black-local");
        assert_eq!(by_alias.len(), 1);
        assert_eq!(by_alias[0].0.repo, "local");
        assert!(find_entries(&config, "flake8").is_empty());
    }

    #[test]
    fn test_describe_repo() {
        let config = parse_config(CONFIG, &NormalizedPath::new("c.yaml")).unwrap();

        assert_eq!(describe_repo(&config.repos[0]), "https://github.com/psf/black @ 23.9.1");
        assert_eq!(describe_repo(&config.repos[1]), "local");
    }

    #[test]
    fn test_show_unknown_hook_is_user_error() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_config(CONFIG);
        let ctx = Context::resolve(repo.root(), None).unwrap();

        assert!(run_show(&ctx, "black").is_ok());
        assert!(matches!(run_show(&ctx, "nope").unwrap_err(), CliError::User { .. }));
    }
}
