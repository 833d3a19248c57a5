//! Scan result structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Kinds of source files the classifier tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Markup + script single file component (`.vue`)
    Component,
    /// Plain script module (`.js`)
    Script,
}

impl FileKind {
    /// Extension (with leading dot) that identifies this kind
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Component => ".vue",
            FileKind::Script => ".js",
        }
    }

    /// Classify a file name, component extension first
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(FileKind::Component.extension()) {
            Some(FileKind::Component)
        } else if name.ends_with(FileKind::Script.extension()) {
            Some(FileKind::Script)
        } else {
            None
        }
    }
}

/// Files discovered under a project's `src`, partitioned by kind.
///
/// Both lists hold absolute paths without duplicates, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    pub component_files: Vec<PathBuf>,
    pub script_files: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file under `kind`; returns false when the path was already present
    pub fn insert(&mut self, kind: FileKind, path: PathBuf) -> bool {
        if !self.seen.insert(path.clone()) {
            return false;
        }
        match kind {
            FileKind::Component => self.component_files.push(path),
            FileKind::Script => self.script_files.push(path),
        }
        true
    }

    /// Files of one kind, in traversal order
    pub fn files(&self, kind: FileKind) -> &[PathBuf] {
        match kind {
            FileKind::Component => &self.component_files,
            FileKind::Script => &self.script_files,
        }
    }
}

/// Kit usage of a single project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Unique kit component names, component-file results first
    pub kit_files: Vec<String>,
    pub vue_files_count: usize,
    pub js_files_count: usize,
}

impl ProjectSummary {
    pub fn kit_count(&self) -> usize {
        self.kit_files.len()
    }
}

/// A project summary together with the project it describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub summary: ProjectSummary,
}

/// Collection of all project results of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResults {
    pub projects: Vec<ProjectAnalysis>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanResults {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            scanned_at: Utc::now(),
        }
    }

    pub fn add_project(&mut self, project: ProjectAnalysis) {
        self.projects.push(project);
    }

    /// Look a project up by its configured name
    pub fn project(&self, name: &str) -> Option<&ProjectAnalysis> {
        self.projects.iter().find(|p| p.name == name)
    }
}

impl Default for ScanResults {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse duplicates, keeping the first occurrence of each name
pub fn dedup_preserving_order<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
