//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::models::config::{OutputFormat as SettingsOutputFormat, ProjectSpec};

/// kitscan - kit component usage scanner for Vue projects
#[derive(Parser, Debug)]
#[command(name = "kitscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count the kit components each frontend project imports")]
#[command(long_about = "kitscan walks the `src` directory of every configured frontend project, \
reads the script of each .vue and .js file, and reports which components of the kit \
(the shared component library) the project imports, either statically with `import` \
declarations or lazily from a component's `components` map.")]
#[command(after_help = "EXAMPLES:

    # Scan the projects listed in .kitscan.toml
    kitscan

    # Scan two projects for imports from @kit
    kitscan --project FOO=../foo-frontend --project BAR=../bar-frontend --alias @kit

    # JSON report written to a file
    kitscan --output json --output-file kit-usage.json

    # Skip mock directories and parse files on all cores
    kitscan --exclude __mocks__ --parallel

    # Create a default configuration file
    kitscan --init
")]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .kitscan.toml in the current directory, then the home directory)")]
    pub config: Option<PathBuf>,

    /// Projects to scan
    #[arg(short, long, value_name = "NAME=PATH", help = "Project to scan, may be repeated; replaces the projects of the config file")]
    pub project: Vec<ProjectSpec>,

    /// Kit alias keys
    #[arg(short, long, value_name = "KEY", help = "Import sources containing KEY refer to the kit, may be repeated; replaces the configured aliases")]
    pub alias: Vec<String>,

    /// Exclude directories matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob pattern for directories below src to skip, may be repeated")]
    pub exclude: Vec<String>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' for reading, 'json' for machine processing, 'csv' for spreadsheets")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Parse the files of each project in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_colors: bool,

    /// Only print the counts of each project
    #[arg(short, long)]
    pub quiet: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.kitscan.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl From<OutputFormat> for SettingsOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => SettingsOutputFormat::Text,
            OutputFormat::Json => SettingsOutputFormat::Json,
            OutputFormat::Csv => SettingsOutputFormat::Csv,
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
