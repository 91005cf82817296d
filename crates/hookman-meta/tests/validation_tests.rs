//! Tests for configuration and manifest validation

use hookman_fs::NormalizedPath;
use hookman_meta::{Config, Severity, Validator, parse_config, parse_manifest, validate, validate_manifest};
use rstest::rstest;

fn config(yaml: &str) -> Config {
    parse_config(yaml, &NormalizedPath::new(".pre-commit-config.yaml")).unwrap()
}

fn codes(yaml: &str) -> Vec<String> {
    validate(&config(yaml))
        .diagnostics
        .into_iter()
        .map(|d| d.code)
        .collect()
}

#[test]
fn test_clean_config_has_no_diagnostics() {
    let report = validate(&config(
        r#"
exclude: ^vendor/
repos:
-   repo: https://github.com/psf/black
    rev: 23.9.1
    hooks:
    -   id: black
        args: [--line-length=100]
-   repo: https://github.com/executablebooks/mdformat
    rev: 0.7.17
    hooks:
    -   id: mdformat
        additional_dependencies: [mdformat-gfm]
        exclude: ^CHANGELOG\.md$
"#,
    ));
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
    assert!(report.passes(true));
}

#[rstest]
#[case("''")]
#[case("'   '")]
fn test_empty_hook_id(#[case] id: &str) {
    let yaml = format!(
        "repos:\n-   repo: https://github.com/psf/black\n    rev: 23.9.1\n    hooks:\n    -   id: {id}\n"
    );
    let report = validate(&config(&yaml));
    assert!(!report.is_ok());
    let diagnostic = report.errors().next().unwrap();
    assert_eq!(diagnostic.code, "empty-hook-id");
    assert_eq!(diagnostic.location, "repos[0].hooks[0].id");
}

#[test]
fn test_missing_and_empty_rev() {
    let found = codes(
        r#"
repos:
-   repo: https://github.com/psf/black
    hooks:
    -   id: black
-   repo: https://github.com/pycqa/isort
    rev: ""
    hooks:
    -   id: isort
"#,
    );
    assert_eq!(found, vec!["missing-rev", "empty-rev"]);
}

#[test]
fn test_invalid_global_and_hook_patterns() {
    let report = validate(&config(
        r#"
exclude: ^(docs/
repos:
-   repo: https://github.com/psf/black
    rev: 23.9.1
    hooks:
    -   id: black
        exclude: "[unclosed"
        files: ok\.py$
"#,
    ));
    let locations: Vec<&str> = report
        .errors()
        .filter(|d| d.code == "invalid-regex")
        .map(|d| d.location.as_str())
        .collect();
    assert_eq!(locations, vec!["exclude", "repos[0].hooks[0].exclude"]);
}

#[test]
fn test_duplicate_hook_needs_identical_args() {
    let duplicated = codes(
        r#"
repos:
-   repo: https://github.com/pycqa/flake8
    rev: 6.1.0
    hooks:
    -   id: flake8
        args: [--select=E]
    -   id: flake8
        args: [--select=E]
"#,
    );
    assert_eq!(duplicated, vec!["duplicate-hook"]);

    let distinct_args = codes(
        r#"
repos:
-   repo: https://github.com/pycqa/flake8
    rev: 6.1.0
    hooks:
    -   id: flake8
        args: [--select=E]
    -   id: flake8
        args: [--select=W]
"#,
    );
    assert!(distinct_args.is_empty());
}

#[test]
fn test_duplicate_hook_with_alias_is_allowed() {
    let found = codes(
        r#"
repos:
-   repo: https://github.com/pycqa/flake8
    rev: 6.1.0
    hooks:
    -   id: flake8
    -   id: flake8
        alias: flake8-manual
"#,
    );
    assert!(found.is_empty());
}

#[test]
fn test_same_hook_in_different_repos_is_not_duplicate() {
    let found = codes(
        r#"
repos:
-   repo: https://github.com/a/tools
    rev: v1.0.0
    hooks:
    -   id: fmt
-   repo: https://github.com/b/tools
    rev: v1.0.0
    hooks:
    -   id: fmt
"#,
    );
    assert!(found.is_empty());
}

#[test]
fn test_local_hook_must_be_complete() {
    let report = validate(&config(
        r#"
repos:
-   repo: local
    hooks:
    -   id: mypy
        entry: mypy
"#,
    ));
    let diagnostic = report.errors().next().unwrap();
    assert_eq!(diagnostic.code, "local-hook-incomplete");
    assert!(diagnostic.message.contains("name"));
    assert!(diagnostic.message.contains("language"));
    assert!(!diagnostic.message.contains("entry"));
}

#[test]
fn test_rev_not_allowed_on_local_and_meta() {
    let found = codes(
        r#"
repos:
-   repo: meta
    rev: v1
    hooks:
    -   id: identity
-   repo: meta
    hooks:
    -   id: run-everything
"#,
    );
    assert_eq!(found, vec!["rev-not-allowed", "unknown-meta-hook"]);
}

#[test]
fn test_warnings_and_info() {
    let report = validate(&config(
        r#"
repos:
-   repo: https://github.com/psf/black
    rev: main
    hooks:
    -   id: black
        types: [pythonn]
-   repo: https://github.com/psf/black
    rev: main
    hooks: []
    sha: abc
"#,
    ));
    assert!(report.is_ok());
    assert!(!report.passes(true));
    assert!(report.has_code("mutable-rev"));
    assert!(report.has_code("unknown-type-tag"));
    assert!(report.has_code("empty-hooks"));
    assert!(report.has_code("unexpected-key"));
    assert_eq!(report.count(Severity::Info), 1);
    assert!(report.has_code("duplicate-repo"));
}

#[test]
fn test_minimum_version_checks() {
    let yaml = "minimum_pre_commit_version: '3.2.0'\nrepos: []\n";
    assert!(validate(&config(yaml)).is_ok());

    let old = Validator::with_framework_version("3.0.0").validate(&config(yaml));
    assert!(old.has_code("unsupported-version"));

    let invalid = validate(&config("minimum_pre_commit_version: 'three'\nrepos: []\n"));
    assert!(invalid.has_code("invalid-version"));
}

#[test]
fn test_unknown_language_in_defaults() {
    let report = validate(&config(
        "default_language_version:\n    python: python3.11\n    pyhton: python3\nrepos: []\n",
    ));
    let locations: Vec<&str> = report.warnings().map(|d| d.location.as_str()).collect();
    assert_eq!(locations, vec!["default_language_version.pyhton"]);
}

#[test]
fn test_report_json_shape() {
    let report = validate(&config(
        "repos:\n-   repo: https://github.com/psf/black\n    hooks:\n    -   id: black\n",
    ));
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["diagnostics"][0]["severity"], "error");
    assert_eq!(json["diagnostics"][0]["code"], "missing-rev");
    assert_eq!(json["diagnostics"][0]["location"], "repos[0].rev");
}

#[test]
fn test_manifest_validation() {
    let hooks = parse_manifest(
        r#"
-   id: black
    name: black
    entry: black
    language: python
    types_or: [python, pyi]
-   id: black
    name: black-jupyter
    entry: black
    language: pythn
    files: "(unclosed"
"#,
        &NormalizedPath::new(".pre-commit-hooks.yaml"),
    )
    .unwrap();

    let report = validate_manifest(&hooks);
    assert!(report.has_code("duplicate-hook"));
    assert!(report.has_code("invalid-regex"));
    assert!(report.has_code("unknown-language"));
    assert_eq!(report.count(Severity::Error), 2);
}

#[test]
fn test_manifest_requires_non_empty_fields() {
    let hooks = parse_manifest(
        "-   id: x\n    name: ''\n    entry: x\n    language: system\n",
        &NormalizedPath::new(".pre-commit-hooks.yaml"),
    )
    .unwrap();
    let report = validate_manifest(&hooks);
    let diagnostic = report.errors().next().unwrap();
    assert_eq!(diagnostic.code, "missing-field");
    assert_eq!(diagnostic.location, "[0].name");
}
