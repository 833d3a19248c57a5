//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::{alias_table, OutputFormat, PartialSettings, ProjectSpec};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments that take part in configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub projects: Vec<ProjectSpec>,
    pub aliases: Vec<String>,
    pub exclude: Vec<String>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub parallel: bool,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            projects: args.project.clone(),
            aliases: args.alias.clone(),
            exclude: args.exclude.clone(),
            output_format: args.output.map(Into::into),
            output_file: args.output_file.clone(),
            parallel: args.parallel,
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        // list options replace the configured lists when given at all
        if !self.args.projects.is_empty() {
            settings.projects = Some(self.args.projects.clone());
        }

        if !self.args.aliases.is_empty() {
            settings.kit_aliases = Some(alias_table(self.args.aliases.iter().cloned()));
        }

        if !self.args.exclude.is_empty() {
            settings.exclude_patterns = Some(self.args.exclude.clone());
        }

        settings.output_format = self.args.output_format;
        settings.output_file = self.args.output_file.clone();

        // flags only ever switch a setting on (or colors off)
        if self.args.parallel {
            settings.parallel = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
