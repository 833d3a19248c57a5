//! Validation of merged settings

use std::collections::HashSet;
use std::path::Path;

use crate::error::{KitScanError, Result, ResultExt};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.projects.is_empty() {
            return Err(KitScanError::config_error(
                "No projects configured; add [[projects]] to the config file or pass --project NAME=PATH",
            ));
        }

        let mut names = HashSet::new();
        for project in &settings.projects {
            if project.name.trim().is_empty() {
                return Err(KitScanError::config_error("Project names must not be empty"));
            }
            if project.path.as_os_str().is_empty() {
                return Err(KitScanError::config_error(format!(
                    "Project '{}' has an empty path",
                    project.name
                )));
            }
            if !names.insert(project.name.as_str()) {
                return Err(KitScanError::config_error(format!(
                    "Duplicate project name '{}'",
                    project.name
                )));
            }
        }

        // an empty key is a substring of every source
        if settings.kit_aliases.keys().any(|key| key.is_empty()) {
            return Err(KitScanError::config_error("Kit alias keys must not be empty"));
        }
        if settings.kit_aliases.is_empty() {
            tracing::warn!("no kit aliases configured, every project will report zero kit components");
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The directory the output file goes into must exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(KitScanError::InvalidPath {
                    path: parent.to_path_buf(),
                })
            }
            _ => Ok(()),
        }
    }
}
