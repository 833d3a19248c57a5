//! Source tree classification
//!
//! Breadth-first walk of a project's `src` directory that sorts the files it
//! meets into component files and plain script files.

use crate::error::{IoResultExt, KitScanError, Result};
use crate::models::{FileKind, FileSet};
use glob::Pattern;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory, below a project root, where classification starts
pub const SOURCE_DIR: &str = "src";

/// Classifies the files of a project tree
#[derive(Debug, Clone, Default)]
pub struct PathClassifier {
    exclude_patterns: Vec<Pattern>,
}

impl PathClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier that prunes directories matching any of `patterns`
    pub fn with_exclude_patterns(patterns: &[String]) -> Result<Self> {
        let exclude_patterns = patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { exclude_patterns })
    }

    /// Walk `<root>/src` breadth-first and partition its `.vue` and `.js` files.
    ///
    /// Entries of each directory are visited in file-name order. Symbolic links
    /// are not followed. Any directory that cannot be listed fails the whole walk.
    pub fn classify(&self, root: &Path) -> Result<FileSet> {
        let start = absolute(root)?.join(SOURCE_DIR);
        let mut files = FileSet::new();
        let mut pending = VecDeque::from([start]);

        while let Some(dir) = pending.pop_front() {
            tracing::trace!(dir = %dir.display(), "listing directory");

            let mut entries = fs::read_dir(&dir)
                .with_dir_context(&dir)?
                .collect::<std::io::Result<Vec<_>>>()
                .with_dir_context(&dir)?;
            entries.sort_by_key(|entry| entry.file_name());

            for entry in entries {
                let file_type = entry.file_type().with_dir_context(&dir)?;
                let path = entry.path();
                let name = entry.file_name();
                let name = name.to_string_lossy();

                if file_type.is_file() {
                    if let Some(kind) = FileKind::from_file_name(&name) {
                        files.insert(kind, path);
                    }
                } else if file_type.is_dir() {
                    if self.is_excluded(&path) {
                        tracing::debug!(dir = %path.display(), "skipping excluded directory");
                        continue;
                    }
                    pending.push_back(path);
                }
            }
        }

        tracing::debug!(
            root = %root.display(),
            components = files.component_files.len(),
            scripts = files.script_files.len(),
            "classified project files"
        );

        Ok(files)
    }

    /// Check if a directory matches any exclude pattern, by full path or by name
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches(&path_str) || pattern.matches(&name))
    }
}

/// Make `path` absolute against the current directory
fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|source| KitScanError::directory_read(path, source))
}
