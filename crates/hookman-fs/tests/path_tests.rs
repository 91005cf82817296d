use hookman_fs::NormalizedPath;
use rstest::rstest;

#[test]
fn test_backslashes_become_forward_slashes() {
    let path = NormalizedPath::new("src\\hooks\\lint.py");
    assert_eq!(path.as_str(), "src/hooks/lint.py");
}

#[test]
fn test_join_handles_trailing_slash() {
    assert_eq!(NormalizedPath::new("a/").join("b").as_str(), "a/b");
    assert_eq!(NormalizedPath::new("a").join("b\\c").as_str(), "a/b/c");
    assert_eq!(NormalizedPath::new("").join("b").as_str(), "b");
}

#[rstest]
#[case("/repo/src/main.rs", Some("/repo/src"))]
#[case("/repo", Some("/"))]
#[case("relative", None)]
#[case("/", None)]
fn test_parent(#[case] input: &str, #[case] expected: Option<&str>) {
    let parent = NormalizedPath::new(input).parent();
    assert_eq!(parent.as_ref().map(|p| p.as_str()), expected);
}

#[rstest]
#[case(".pre-commit-config.yaml", Some("yaml"))]
#[case("dir/setup.cfg", Some("cfg"))]
#[case("archive.tar.gz", Some("gz"))]
#[case(".gitignore", None)]
#[case("Makefile", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_file_name() {
    assert_eq!(NormalizedPath::new("a/b/c.txt").file_name(), Some("c.txt"));
    assert_eq!(NormalizedPath::new("a/b/").file_name(), Some("b"));
    assert_eq!(NormalizedPath::new("").file_name(), None);
}

#[test]
fn test_strip_prefix() {
    let base = NormalizedPath::new("/work/repo");
    let file = NormalizedPath::new("/work/repo/docs/index.md");
    assert_eq!(file.strip_prefix(&base).unwrap().as_str(), "docs/index.md");

    let base_with_slash = NormalizedPath::new("/work/repo/");
    assert_eq!(
        file.strip_prefix(&base_with_slash).unwrap().as_str(),
        "docs/index.md"
    );
}

#[test]
fn test_strip_prefix_rejects_sibling_and_self() {
    let base = NormalizedPath::new("/work/repo");
    assert!(NormalizedPath::new("/work/repository/a").strip_prefix(&base).is_none());
    assert!(NormalizedPath::new("/work/repo").strip_prefix(&base).is_none());
}

#[test]
fn test_exists_checks() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path());
    assert!(dir.exists());
    assert!(dir.is_dir());
    assert!(!dir.is_file());
    assert!(!dir.join("missing.yaml").exists());
}
