/*!
 * Exclusion rules applied during traversal
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Directory names never descended into
pub static DEFAULT_EXCLUDED_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "node_modules",
        ".git",
        ".next",
        ".vscode",
        ".idea",
        "venv",
        "__pycache__",
        "dist",
        "build",
        "coverage",
        // Static assets rarely carry source worth reviewing
        "public",
        "assets",
        "images",
    ]
});

/// Suffixes matched against the lowercased file name
pub static DEFAULT_EXCLUDED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Images
        ".png",
        ".jpg",
        ".jpeg",
        ".gif",
        ".svg",
        ".ico",
        // Fonts
        ".woff",
        ".woff2",
        ".ttf",
        ".eot",
        // Media & documents
        ".mp4",
        ".webm",
        ".pdf",
        // Archives & bytecode
        ".zip",
        ".tar",
        ".gz",
        ".pyc",
        // Lockfiles are long and generated
        ".lock",
        // OS files
        ".ds_store",
        "thumbs.db",
    ]
});

/// Exact, case-sensitive file names to skip
pub static DEFAULT_EXCLUDED_FILES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["package-lock.json", "yarn.lock", ".env", ".env.local"]);

/// Immutable set of exclusion rules for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionConfig {
    /// Bare directory names pruned before descent
    dirs: HashSet<String>,
    /// Lowercase name suffixes
    extensions: Vec<String>,
    /// Bare file names, matched case-sensitively
    files: HashSet<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_DIRS.iter().copied(),
            DEFAULT_EXCLUDED_EXTENSIONS.iter().copied(),
            DEFAULT_EXCLUDED_FILES.iter().copied(),
        )
    }
}

impl ExclusionConfig {
    /// Build a configuration from explicit sets
    pub fn new<D, E, F>(dirs: D, extensions: E, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let mut extensions: Vec<String> = extensions
            .into_iter()
            .map(|e| e.into().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        extensions.sort();
        extensions.dedup();

        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            extensions,
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// A configuration that excludes nothing
    pub fn empty() -> Self {
        Self::new(
            Vec::<String>::new(),
            Vec::<String>::new(),
            Vec::<String>::new(),
        )
    }

    /// Return a copy extended with additional rules
    pub fn extended<D, E, F>(&self, dirs: D, extensions: E, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let mut merged_dirs = self.dirs.clone();
        merged_dirs.extend(dirs.into_iter().map(Into::into));

        let merged_exts = self
            .extensions
            .iter()
            .cloned()
            .chain(extensions.into_iter().map(Into::into));

        let mut merged_files = self.files.clone();
        merged_files.extend(files.into_iter().map(Into::into));

        Self::new(merged_dirs, merged_exts, merged_files)
    }

    /// Whether a directory with this bare name is pruned
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Whether a file with this bare name is excluded by name or extension
    pub fn excludes_file(&self, name: &str) -> bool {
        self.files.contains(name) || self.excludes_extension(name)
    }

    /// Case-insensitive suffix match, independent of the name rules
    pub fn excludes_extension(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }
}
