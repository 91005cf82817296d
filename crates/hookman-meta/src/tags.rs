//! File type tags used by `types`, `types_or` and `exclude_types`
//!
//! Tags are derived from the file name alone; file contents are never
//! read. Every path gets `file` plus either `text` or `binary`, and a
//! language tag when the extension or name is recognised.

use std::collections::BTreeSet;

/// Extension -> language tags.
const EXTENSION_TAGS: &[(&str, &[&str])] = &[
    ("bash", &["shell", "bash"]),
    ("c", &["c"]),
    ("cfg", &["ini"]),
    ("cpp", &["c++"]),
    ("css", &["css"]),
    ("go", &["go"]),
    ("h", &["header", "c"]),
    ("hpp", &["header", "c++"]),
    ("html", &["html"]),
    ("ini", &["ini"]),
    ("ipynb", &["jupyter", "json"]),
    ("java", &["java"]),
    ("js", &["javascript"]),
    ("json", &["json"]),
    ("jsx", &["jsx"]),
    ("lua", &["lua"]),
    ("md", &["markdown"]),
    ("markdown", &["markdown"]),
    ("php", &["php"]),
    ("proto", &["proto"]),
    ("py", &["python"]),
    ("pyi", &["pyi"]),
    ("pyx", &["cython"]),
    ("rb", &["ruby"]),
    ("rs", &["rust"]),
    ("rst", &["rst"]),
    ("scss", &["scss"]),
    ("sh", &["shell", "sh"]),
    ("sql", &["sql"]),
    ("svg", &["svg", "xml"]),
    ("swift", &["swift"]),
    ("tf", &["terraform"]),
    ("toml", &["toml"]),
    ("ts", &["ts"]),
    ("tsx", &["tsx"]),
    ("txt", &["plain-text"]),
    ("xml", &["xml"]),
    ("yaml", &["yaml"]),
    ("yml", &["yaml"]),
    ("zsh", &["shell", "zsh"]),
];

/// Extensions of files that are not text.
const BINARY_EXTENSIONS: &[&str] = &[
    "bin", "bz2", "class", "dll", "exe", "gif", "gz", "ico", "jar", "jpeg", "jpg", "mp3", "mp4",
    "o", "otf", "pdf", "png", "pyc", "so", "tar", "ttf", "webp", "whl", "woff", "woff2", "xz",
    "zip",
];

/// Whole file names -> tags, for files without a telling extension.
const NAME_TAGS: &[(&str, &[&str])] = &[
    ("Dockerfile", &["dockerfile"]),
    ("Makefile", &["makefile"]),
    ("Cargo.lock", &["toml"]),
    ("Pipfile", &["toml"]),
    (".gitignore", &["gitignore"]),
    (".gitattributes", &["gitattributes"]),
    (".pre-commit-config.yaml", &["yaml"]),
    (".pre-commit-hooks.yaml", &["yaml"]),
];

/// Tags that do not come from extensions but are valid in configurations.
const GENERIC_TAGS: &[&str] = &[
    "file",
    "text",
    "binary",
    "symlink",
    "directory",
    "executable",
    "non-executable",
    "image",
];

/// Whether `tag` is part of the known vocabulary.
pub fn is_known_tag(tag: &str) -> bool {
    GENERIC_TAGS.contains(&tag)
        || EXTENSION_TAGS.iter().any(|(_, tags)| tags.contains(&tag))
        || NAME_TAGS.iter().any(|(_, tags)| tags.contains(&tag))
}

/// Tags for a forward-slash path.
pub fn tags_for_path(path: &str) -> BTreeSet<&'static str> {
    let mut tags = BTreeSet::from(["file"]);
    let name = path.rsplit('/').next().unwrap_or(path);
    let extension = name
        .rfind('.')
        .filter(|idx| *idx > 0)
        .map(|idx| name[idx + 1..].to_lowercase());

    if let Some(ext) = extension.as_deref() {
        if BINARY_EXTENSIONS.contains(&ext) {
            tags.insert("binary");
            if matches!(ext, "gif" | "ico" | "jpeg" | "jpg" | "png" | "webp") {
                tags.insert("image");
            }
            return tags;
        }
        if let Some((_, ext_tags)) = EXTENSION_TAGS.iter().find(|(e, _)| *e == ext) {
            tags.extend(ext_tags.iter().copied());
        }
        if ext == "svg" {
            tags.insert("image");
        }
    }

    if let Some((_, name_tags)) = NAME_TAGS.iter().find(|(n, _)| *n == name) {
        tags.extend(name_tags.iter().copied());
    }

    tags.insert("text");
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_file_tags() {
        let tags = tags_for_path("pkg/module.py");
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["file", "python", "text"]
        );
    }

    #[test]
    fn test_stub_files_are_not_python() {
        let tags = tags_for_path("pkg/module.pyi");
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["file", "pyi", "text"]
        );
    }

    #[test]
    fn test_binary_file_tags() {
        let tags = tags_for_path("assets/logo.PNG");
        assert!(tags.contains("binary"));
        assert!(tags.contains("image"));
        assert!(!tags.contains("text"));
    }

    #[test]
    fn test_name_based_tags() {
        assert!(tags_for_path("docker/Dockerfile").contains("dockerfile"));
        assert!(tags_for_path(".gitignore").contains("gitignore"));
        assert!(tags_for_path("Makefile").contains("text"));
    }

    #[test]
    fn test_known_tags() {
        assert!(is_known_tag("python"));
        assert!(is_known_tag("executable"));
        assert!(is_known_tag("dockerfile"));
        assert!(!is_known_tag("pythn"));
    }
}
