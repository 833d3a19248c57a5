//! Configuration file parsing utilities

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{KitScanError, Result};
use crate::models::config::PartialSettings;

/// Commented template written by `--init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(KitScanError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| KitScanError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| KitScanError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();
    let invalid = |message: String| {
        Err(KitScanError::config_error(format!(
            "{} in config file: {}",
            message,
            path.display()
        )))
    };

    if let Some(projects) = &settings.projects {
        let mut names = HashSet::new();
        for project in projects {
            if project.name.trim().is_empty() {
                return invalid("Project with an empty name".to_string());
            }
            if project.path.as_os_str().is_empty() {
                return invalid(format!("Project '{}' has an empty path", project.name));
            }
            if !names.insert(project.name.as_str()) {
                return invalid(format!("Duplicate project name '{}'", project.name));
            }
        }
    }

    if let Some(aliases) = &settings.kit_aliases {
        if aliases.keys().any(|key| key.is_empty()) {
            return invalid("Empty kit alias key".to_string());
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return invalid("Empty exclude pattern".to_string());
            }
            if let Err(e) = glob::Pattern::new(pattern) {
                return invalid(format!("Invalid exclude pattern '{}' ({})", pattern, e));
            }
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return invalid("Invalid empty output_file".to_string());
        }
    }

    Ok(())
}

/// Locations searched for a default config file, in order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("kitscan").join("config.toml"));
    }

    locations
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(&default_config_locations())
}

/// Load the first of `locations` that exists
pub fn find_config_in(locations: &[PathBuf]) -> Result<Option<PartialSettings>> {
    match locations.iter().find(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config file");
            Ok(Some(parse_config_file(path)?))
        }
        None => Ok(None),
    }
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| KitScanError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    Ok(())
}
