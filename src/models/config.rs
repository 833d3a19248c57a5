//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A frontend project to scan: a display name and the project root.
///
/// The scan itself starts at `<path>/src`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    pub path: PathBuf,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Parses the `NAME=PATH` form used on the command line.
impl std::str::FromStr for ProjectSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
                Ok(ProjectSpec::new(name.trim(), path.trim()))
            }
            _ => Err(format!("Invalid project '{}', expected NAME=PATH", s)),
        }
    }
}

/// Main configuration settings for kitscan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Projects to scan, in report order
    pub projects: Vec<ProjectSpec>,

    /// Kit alias keys mapped to arbitrary values; only the keys take part in matching
    pub kit_aliases: BTreeMap<String, toml::Value>,

    /// Glob patterns for directories to skip while classifying
    pub exclude_patterns: Vec<String>,

    /// Whether to parse the files of a project on the rayon pool
    pub parallel: bool,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show debug logging
    pub verbose: bool,
}

impl Settings {
    /// The alias keys, in sorted order
    pub fn alias_keys(&self) -> impl Iterator<Item = &str> {
        self.kit_aliases.keys().map(String::as_str)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            kit_aliases: BTreeMap::new(),
            exclude_patterns: Vec::new(),
            parallel: false,
            output_format: OutputFormat::Text,
            output_file: None,
            use_colors: true,
            quiet: false,
            verbose: false,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub projects: Option<Vec<ProjectSpec>>,
    pub kit_aliases: Option<BTreeMap<String, toml::Value>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub parallel: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.projects.is_some() {
            self.projects = other.projects;
        }
        if other.kit_aliases.is_some() {
            self.kit_aliases = other.kit_aliases;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(projects) = &self.projects {
            settings.projects = projects.clone();
        }
        if let Some(kit_aliases) = &self.kit_aliases {
            settings.kit_aliases = kit_aliases.clone();
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }

        settings
    }
}

/// Builds an alias table whose values are all `true`, as used for aliases given
/// on the command line or in the environment.
pub fn alias_table<I, S>(keys: I) -> BTreeMap<String, toml::Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keys.into_iter()
        .map(|key| (key.into(), toml::Value::Boolean(true)))
        .collect()
}
