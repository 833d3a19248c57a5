//! Per-project aggregation of kit references
//!
//! Classifies a project's files, runs every file through extraction, parsing
//! and resolution, and folds the names into a `ProjectSummary`.

use crate::core::classifier::PathClassifier;
use crate::core::parallel::try_map_in_order;
use crate::error::Result;
use crate::models::analysis::dedup_preserving_order;
use crate::models::{FileKind, ProjectSpec, ProjectSummary, Settings};
use crate::parsers::{extract_script, ASTParser, KitAliases, KitResolver};
use std::path::{Path, PathBuf};

/// Builds the summary of one project
#[derive(Debug, Clone)]
pub struct ProjectAggregator {
    classifier: PathClassifier,
    parser: ASTParser,
    aliases: KitAliases,
    parallel: bool,
}

impl ProjectAggregator {
    /// Create an aggregator matching `aliases`, sequential, with no exclusions
    pub fn new(aliases: KitAliases) -> Self {
        Self {
            classifier: PathClassifier::new(),
            parser: ASTParser::new(),
            aliases,
            parallel: false,
        }
    }

    /// Create an aggregator from the run settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            classifier: PathClassifier::with_exclude_patterns(&settings.exclude_patterns)?,
            parser: ASTParser::new(),
            aliases: KitAliases::from_keys(settings.alias_keys()),
            parallel: settings.parallel,
        })
    }

    /// Parse files on the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn aliases(&self) -> &KitAliases {
        &self.aliases
    }

    /// Scan a project and summarize its kit usage.
    ///
    /// Component-file references come first, script-file references after;
    /// each name appears once, at its first occurrence.
    pub fn summarize(&self, project: &ProjectSpec) -> Result<ProjectSummary> {
        let files = self.classifier.classify(&project.path)?;

        let components = files.files(FileKind::Component);
        let scripts = files.files(FileKind::Script);

        let from_components = self.collect(components, FileKind::Component)?;
        let from_scripts = self.collect(scripts, FileKind::Script)?;

        Ok(ProjectSummary {
            kit_files: dedup_preserving_order(from_components.into_iter().chain(from_scripts)),
            vue_files_count: components.len(),
            js_files_count: scripts.len(),
        })
    }

    /// Deduplicated references of all `files` of one kind, in file order
    fn collect(&self, files: &[PathBuf], kind: FileKind) -> Result<Vec<String>> {
        let per_file = if self.parallel {
            try_map_in_order(files, |path| self.resolve_file(path, kind))?
        } else {
            files
                .iter()
                .map(|path| self.resolve_file(path, kind))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(dedup_preserving_order(per_file.into_iter().flatten()))
    }

    /// Kit references of a single file
    pub fn resolve_file(&self, path: &Path, kind: FileKind) -> Result<Vec<String>> {
        let script = extract_script(path, kind)?;
        let resolver = KitResolver::new(&self.aliases);

        let names = self.parser.parse_and_analyze(&script, path, |program| match kind {
            FileKind::Component => resolver.resolve_component(program),
            FileKind::Script => resolver.resolve_script(program),
        })?;

        if !names.is_empty() {
            tracing::trace!(path = %path.display(), names = ?names, "kit references");
        }
        Ok(names)
    }
}
