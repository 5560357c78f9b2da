/*!
 * Directory traversal and file filtering
 */

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, FilterEntry, IntoIter, WalkDir};

use crate::error::Result;
use crate::exclusions::ExclusionConfig;
use crate::types::Candidate;
use crate::{ensure, utils};

type DirFilter<'a> = Box<dyn FnMut(&DirEntry) -> bool + 'a>;

/// Scanner for candidate files under a root directory
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Traversal root
    root: PathBuf,
    /// Exclusion rules for this run
    rules: ExclusionConfig,
    /// Bare file names that are never candidates (the output artifact's name)
    reserved_names: HashSet<String>,
    /// Canonical paths that are never candidates (output, running executable)
    reserved_paths: Vec<PathBuf>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(root: impl Into<PathBuf>, rules: ExclusionConfig) -> Self {
        Self {
            root: root.into(),
            rules,
            reserved_names: HashSet::new(),
            reserved_paths: Vec::new(),
        }
    }

    /// Never yield a file with this bare name
    pub fn reserve_name(mut self, name: impl Into<String>) -> Self {
        self.reserved_names.insert(name.into());
        self
    }

    /// Never yield this file. Paths that do not exist are ignored.
    pub fn reserve_path(mut self, path: &Path) -> Self {
        if let Ok(canonical) = fs::canonicalize(path) {
            self.reserved_paths.push(canonical);
        }
        self
    }

    /// Traversal root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and lazily yield candidates.
    ///
    /// Each call walks the filesystem afresh. Within a directory, files come
    /// first sorted by name, then subdirectories sorted by name.
    pub fn scan(&self) -> Result<Candidates<'_>> {
        ensure!(
            self.root.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.root.display()
        );

        let rules = &self.rules;
        let prune: DirFilter<'_> = Box::new(move |entry: &DirEntry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if rules.excludes_dir(&name) {
                debug!("pruned directory {}", entry.path().display());
                return false;
            }
            true
        });

        let inner = WalkDir::new(&self.root)
            .sort_by(files_then_dirs)
            .into_iter()
            .filter_entry(prune);

        Ok(Candidates {
            scanner: self,
            inner,
        })
    }

    /// Whether a file entry should be left out
    fn excludes(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();

        if self.rules.excludes_file(&name) || self.reserved_names.contains(&*name) {
            return true;
        }

        // Canonicalize only when the name could match a reserved path
        let may_be_reserved = self
            .reserved_paths
            .iter()
            .any(|p| p.file_name() == Some(entry.file_name()));
        may_be_reserved && self.reserves(entry.path())
    }

    /// Whether `path` resolves to a reserved file
    pub fn reserves(&self, path: &Path) -> bool {
        fs::canonicalize(path)
            .map(|canonical| self.reserved_paths.contains(&canonical))
            .unwrap_or(false)
    }
}

fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir
        .cmp(&b_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Lazy, single-pass sequence of candidates
pub struct Candidates<'a> {
    scanner: &'a Scanner,
    inner: FilterEntry<IntoIter, DirFilter<'a>>,
}

impl Iterator for Candidates<'_> {
    type Item = Result<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            // Symlinks not pointing at a directory count, dangling ones included
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && !entry.path().is_dir());
            if !is_file {
                continue;
            }

            if self.scanner.excludes(&entry) {
                debug!("excluded file {}", entry.path().display());
                continue;
            }

            let rel_path = entry
                .path()
                .strip_prefix(&self.scanner.root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| PathBuf::from(utils::base_name(entry.path())));

            return Some(Ok(Candidate {
                abs_path: entry.into_path(),
                rel_path,
            }));
        }
    }
}
