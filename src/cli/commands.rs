//! Command implementations

use std::path::{Path, PathBuf};

use super::Args;
use crate::config::file::DEFAULT_CONFIG_FILE;
use crate::config::{self, CliArgs};
use crate::core::KitScanner;
use crate::error::{ErrorSeverity, KitScanError, Result};
use crate::logging;
use crate::output::{create_formatter, create_writer};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Scan the configured projects and report their kit usage
    Scan(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Scan(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Scan(args) => {
                self.validate()?;

                // installed before loading so config warnings reach stderr
                logging::init_logging(args.verbose, !args.no_colors);
                let settings = config::load_config(CliArgs::from(args))?;
                tracing::debug!(settings = ?settings, "configuration loaded");

                let results = KitScanner::new(settings.clone())?.scan()?;

                let formatter = create_formatter(
                    settings.output_format,
                    settings.use_colors && settings.output_file.is_none(),
                    settings.verbose,
                    settings.quiet,
                );
                let content = formatter.format(&results)?;
                create_writer(settings.output_file.as_ref()).write(&content)?;

                if let Some(path) = &settings.output_file {
                    if !settings.quiet {
                        eprintln!("Report written to {}", path.display());
                    }
                }

                Ok(())
            }
            Command::Init => init_config(Path::new(DEFAULT_CONFIG_FILE)).map(|_| ()),
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Scan(args) => {
                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(KitScanError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }
                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and return the process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }
                exit_code(err.severity())
            }
        }
    }
}

/// Exit code for an error of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

/// Write the default config file to `path` unless one is already there.
///
/// Returns the path when a file was created.
pub fn init_config(path: &Path) -> Result<Option<PathBuf>> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(None);
    }

    config::create_default_config(path)?;

    println!("Created default configuration file at: {}", path.display());
    println!("Add your projects under [[projects]] and the kit import keys under [kit_aliases].");
    Ok(Some(path.to_path_buf()))
}
