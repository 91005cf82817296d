//! Structural guarantees of a hook configuration, checked through the public API

use hookman_fs::NormalizedPath;
use hookman_meta::{Error, parse_config, validate};
use pretty_assertions::assert_eq;

fn origin() -> NormalizedPath {
    NormalizedPath::new(".pre-commit-config.yaml")
}

#[test]
fn test_malformed_yaml_fails_before_validation() {
    let err = parse_config("repos: [unclosed\n", &origin()).unwrap_err();
    assert!(matches!(err, Error::Fs(_)), "unexpected error: {err}");
}

#[test]
fn test_hook_ids_must_be_non_empty() {
    let config = parse_config(
        "repos:\n-   repo: https://github.com/psf/black\n    rev: 23.9.1\n    hooks:\n    -   id: '  '\n",
        &origin(),
    )
    .unwrap();

    let report = validate(&config);
    assert!(report.has_code("empty-hook-id"));
    assert!(!report.is_ok());
}

#[test]
fn test_revs_must_be_present_and_non_empty() {
    let missing = parse_config(
        "repos:\n-   repo: https://github.com/psf/black\n    hooks:\n    -   id: black\n",
        &origin(),
    )
    .unwrap();
    let empty = parse_config(
        "repos:\n-   repo: https://github.com/psf/black\n    rev: ''\n    hooks:\n    -   id: black\n",
        &origin(),
    )
    .unwrap();

    assert!(validate(&missing).has_code("missing-rev"));
    assert!(validate(&empty).has_code("empty-rev"));
}

#[test]
fn test_exclude_patterns_must_compile() {
    let config = parse_config(
        r#"exclude: '^(docs|build)/'
repos:
-   repo: https://github.com/psf/black
    rev: 23.9.1
    hooks:
    -   id: black
        exclude: '*.py'
"#,
        &origin(),
    )
    .unwrap();

    let report = validate(&config);
    let invalid: Vec<&str> = report
        .errors()
        .filter(|d| d.code == "invalid-regex")
        .map(|d| d.location.as_str())
        .collect();
    assert_eq!(invalid, vec!["repos[0].hooks[0].exclude"]);
}

#[test]
fn test_duplicate_hooks_need_different_args() {
    let same = parse_config(
        "repos:\n-   repo: https://github.com/psf/black\n    rev: 23.9.1\n    hooks:\n    -   id: black\n    -   id: black\n",
        &origin(),
    )
    .unwrap();
    let different = parse_config(
        "repos:\n-   repo: https://github.com/psf/black\n    rev: 23.9.1\n    hooks:\n    -   id: black\n    -   id: black\n        args: [--check]\n",
        &origin(),
    )
    .unwrap();

    assert!(validate(&same).has_code("duplicate-hook"));
    assert!(!validate(&different).has_code("duplicate-hook"));
}

#[test]
fn test_black_entry_exposes_record() {
    let config = parse_config(
        r#"repos:
- {repo: "https://github.com/psf/black", rev: "23.9.1", hooks: [{id: "black"}]}
"#,
        &origin(),
    )
    .unwrap();

    let records = config.hook_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tool, "black");
    assert_eq!(records[0].rev.as_deref(), Some("23.9.1"));
    assert!(records[0].args.is_empty());
    assert!(validate(&config).is_ok());
}

#[test]
fn test_config_serializes_back_to_loadable_yaml() {
    let config = parse_config(hookman_test_utils::SAMPLE_CONFIG, &origin()).unwrap();

    let yaml = serde_yaml::to_string(&config).unwrap();
    let reloaded = parse_config(&yaml, &origin()).unwrap();

    assert_eq!(reloaded.hook_records(), config.hook_records());
}
