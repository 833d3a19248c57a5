//! Scanning of all configured projects

use crate::core::aggregator::ProjectAggregator;
use crate::error::Result;
use crate::models::{ProjectAnalysis, ScanResults, Settings};
use std::time::Instant;

/// Runs the aggregator over every configured project, in configuration order
pub struct KitScanner {
    settings: Settings,
    aggregator: ProjectAggregator,
}

impl KitScanner {
    /// Create a new scanner with the given settings
    pub fn new(settings: Settings) -> Result<Self> {
        let aggregator = ProjectAggregator::from_settings(&settings)?;
        Ok(Self {
            settings,
            aggregator,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Scan every project. The first failing project aborts the run.
    pub fn scan(&self) -> Result<ScanResults> {
        self.scan_with_progress(|_, _, _| {})
    }

    /// Scan every project, calling `on_project(index, total, name)` before each one
    pub fn scan_with_progress<F>(&self, on_project: F) -> Result<ScanResults>
    where
        F: Fn(usize, usize, &str),
    {
        let start_time = Instant::now();
        let total = self.settings.projects.len();
        let mut results = ScanResults::new();

        for (index, project) in self.settings.projects.iter().enumerate() {
            on_project(index, total, &project.name);
            tracing::info!(project = %project.name, path = %project.path.display(), "scanning project");

            let summary = self.aggregator.summarize(project)?;
            tracing::debug!(
                project = %project.name,
                kit = summary.kit_count(),
                vue = summary.vue_files_count,
                js = summary.js_files_count,
                "project summarized"
            );

            results.add_project(ProjectAnalysis {
                name: project.name.clone(),
                path: project.path.clone(),
                summary,
            });
        }

        tracing::info!(projects = total, elapsed = ?start_time.elapsed(), "scan finished");
        Ok(results)
    }
}
