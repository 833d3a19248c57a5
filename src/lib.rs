//! kitscan - kit component usage scanner for Vue projects
//!
//! Walks the `src` tree of each configured frontend project, parses the script
//! of every `.vue` and `.js` file, and reports which components of the kit
//! (the shared component library) each project imports.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;

pub use crate::core::{KitScanner, PathClassifier, ProjectAggregator};
pub use error::{ErrorSeverity, KitScanError, OptionExt, Result, ResultExt};
pub use models::{
    analysis::{FileKind, FileSet, ProjectAnalysis, ProjectSummary, ScanResults},
    config::{OutputFormat, ProjectSpec, Settings},
};
pub use parsers::{KitAliases, KitResolver};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
