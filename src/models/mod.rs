//! Data models and structures for kitscan

pub mod analysis;
pub mod config;

pub use analysis::{FileKind, FileSet, ProjectAnalysis, ProjectSummary, ScanResults};
pub use config::{OutputFormat, PartialSettings, ProjectSpec, Settings};
