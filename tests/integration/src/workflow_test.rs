//! End-to-end flows across the hookman crates
//!
//! discovery -> loading -> validation, and git file listing -> selection.

use hookman_fs::{HookPath, NormalizedPath, io};
use hookman_meta::{
    Error, Severity, discover_config, hooks_without_files, load_config, migrate_config,
    select, useless_excludes, validate,
};
use hookman_test_utils::{SAMPLE_CONFIG, repo::TestRepo};
use pretty_assertions::assert_eq;

fn norm(path: &std::path::Path) -> NormalizedPath {
    NormalizedPath::new(path)
}

#[test]
fn test_discover_load_validate_from_subdirectory() {
    let repo = TestRepo::new();
    repo.init_git();
    repo.write_config(SAMPLE_CONFIG);
    repo.write_file("src/deep/module.py", "");

    let path = discover_config(&norm(&repo.root().join("src/deep"))).unwrap();
    assert_eq!(path.file_name(), Some(HookPath::Config.as_str()));

    let config = load_config(&path).unwrap();
    let report = validate(&config);

    assert!(report.is_ok(), "{:?}", report.diagnostics);
    assert_eq!(config.hook_count(), 3);
}

#[test]
fn test_tracked_files_drive_selection() {
    let repo = TestRepo::new();
    repo.init_git();
    repo.write_config(SAMPLE_CONFIG);
    repo.write_file("app/main.py", "print('x')\n");
    repo.write_file("docs/guide.md", "# guide\n");
    repo.write_file("vendor/six.py", "");
    repo.write_file("scratch.py", "");
    repo.stage(&[
        ".pre-commit-config.yaml",
        "app/main.py",
        "docs/guide.md",
        "vendor/six.py",
    ]);

    let files = hookman_git::tracked_files(repo.root()).unwrap();
    let config = load_config(&norm(&repo.root().join(".pre-commit-config.yaml"))).unwrap();
    let selection = select(&config, &files).unwrap();

    let black = &selection.hooks[2];
    assert_eq!(black.hook.id, "black");
    assert_eq!(black.files, vec![NormalizedPath::new("app/main.py")]);

    let check_yaml = &selection.hooks[0];
    assert_eq!(
        check_yaml.files,
        vec![NormalizedPath::new(".pre-commit-config.yaml")]
    );

    assert!(useless_excludes(&config, &files).unwrap().is_empty());
    assert!(hooks_without_files(&config, &files).unwrap().is_empty());
}

#[test]
fn test_staged_files_drive_selection() {
    let repo = TestRepo::new();
    repo.init_git();
    repo.write_config(SAMPLE_CONFIG);
    repo.stage(&[".pre-commit-config.yaml"]);
    repo.commit("add hooks");

    repo.write_file("lib.py", "");
    repo.stage(&["lib.py"]);

    let staged = hookman_git::staged_files(repo.root()).unwrap();
    assert_eq!(staged, vec![NormalizedPath::new("lib.py")]);

    let config = load_config(&norm(&repo.root().join(".pre-commit-config.yaml"))).unwrap();
    let selection = select(&config, &staged).unwrap();
    let running: Vec<&str> = selection
        .hooks
        .iter()
        .filter(|s| s.would_run())
        .map(|s| s.hook.id.as_str())
        .collect();

    assert_eq!(running, vec!["end-of-file-fixer", "black"]);
}

#[test]
fn test_legacy_config_migrates_and_loads() {
    let repo = TestRepo::new();
    repo.write_config(
        "-   repo: https://github.com/pre-commit/pre-commit-hooks\n    sha: v4.5.0\n    hooks:\n    -   id: trailing-whitespace\n        stages: [commit, push]\n",
    );
    let path = norm(&repo.root().join(".pre-commit-config.yaml"));

    assert!(matches!(load_config(&path), Err(Error::LegacyFormat { .. })));

    let migration = migrate_config(&io::read_text(&path).unwrap());
    assert!(migration.changed);
    io::write_atomic(&path, migration.content.as_bytes()).unwrap();

    let config = load_config(&path).unwrap();
    let record = &config.hook_records()[0];
    assert_eq!(record.rev.as_deref(), Some("v4.5.0"));
    assert_eq!(
        record
            .stages
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>(),
        vec!["pre-commit", "pre-push"]
    );
    assert!(!validate(&config).has_code("unexpected-key"));
}

#[test]
fn test_invalid_config_reports_every_problem() {
    let repo = TestRepo::new();
    repo.write_config(
        r#"exclude: '[unclosed'
repos:
-   repo: https://github.com/psf/black
    rev: ''
    hooks:
    -   id: ''
    -   id: black
        exclude: '(?<=x)y'
"#,
    );

    let config = load_config(&norm(&repo.root().join(".pre-commit-config.yaml"))).unwrap();
    let report = validate(&config);

    assert_eq!(report.count(Severity::Error), 4);
    assert!(report.has_code("empty-rev"));
    assert!(report.has_code("empty-hook-id"));
    assert_eq!(
        report
            .errors()
            .filter(|d| d.code == "invalid-regex")
            .count(),
        2
    );
}
