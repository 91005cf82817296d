//! Sample-config command implementation

/// Starter configuration printed by `hookman sample-config`
pub const SAMPLE_CONFIG: &str = r#"# See https://pre-commit.com for more information
# See https://pre-commit.com/hooks.html for more hooks
repos:
-   repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
    -   id: trailing-whitespace
    -   id: end-of-file-fixer
    -   id: check-yaml
    -   id: check-added-large-files
"#;

/// Run the sample-config command
pub fn run_sample_config() {
    print!("{SAMPLE_CONFIG}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookman_fs::NormalizedPath;
    use hookman_meta::{parse_config, validate};

    #[test]
    fn test_sample_config_is_valid() {
        let config = parse_config(SAMPLE_CONFIG, &NormalizedPath::new("sample.yaml")).unwrap();
        let report = validate(&config);

        assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
        assert_eq!(config.hook_count(), 4);
    }
}
