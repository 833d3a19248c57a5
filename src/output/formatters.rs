//! Output formatting functionality

use crate::error::{KitScanError, Result};
use crate::models::{ProjectAnalysis, ScanResults};
use ansi_term::Colour::{Blue, Cyan, Yellow};
use ansi_term::Style;

/// Separator between component names in a CSV cell
pub const CSV_NAME_SEPARATOR: &str = ";";

/// Format one project as text.
///
/// The first line is `"{name} kit-{count}"`, the second `"js-{n} vue-{n}"`;
/// unless `quiet`, the component names follow, one per line.
pub fn format_project_text(
    project: &ProjectAnalysis,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> String {
    let summary = &project.summary;
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!(
            "{} {}\n",
            Blue.bold().paint(&project.name),
            Cyan.paint(format!("kit-{}", summary.kit_count()))
        ));
        output.push_str(&format!(
            "{}\n",
            Style::new().dimmed().paint(format!(
                "js-{} vue-{}",
                summary.js_files_count, summary.vue_files_count
            ))
        ));
    } else {
        output.push_str(&format!("{} kit-{}\n", project.name, summary.kit_count()));
        output.push_str(&format!(
            "js-{} vue-{}\n",
            summary.js_files_count, summary.vue_files_count
        ));
    }

    if quiet {
        return output;
    }

    if verbose {
        output.push_str(&format!("  path: {}\n", project.path.display()));
    }

    for name in &summary.kit_files {
        if use_colors {
            output.push_str(&format!("  {}\n", Yellow.paint(name)));
        } else {
            output.push_str(&format!("  {}\n", name));
        }
    }

    output
}

/// Format all projects as text, separated by blank lines
pub fn format_results_text(results: &ScanResults, use_colors: bool, verbose: bool, quiet: bool) -> String {
    results
        .projects
        .iter()
        .map(|project| format_project_text(project, use_colors, verbose, quiet))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format scan results as JSON
pub fn format_results_json(results: &ScanResults, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(results)
    } else {
        serde_json::to_string(results)
    };
    json.map_err(|e| KitScanError::JsonSerialize { source: e })
}

/// Format scan results as CSV, one row per project
pub fn format_results_csv(results: &ScanResults) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["project", "kit_count", "vue_files", "js_files", "kit_files"])?;

    for project in &results.projects {
        let summary = &project.summary;
        writer.write_record([
            project.name.clone(),
            summary.kit_count().to_string(),
            summary.vue_files_count.to_string(),
            summary.js_files_count.to_string(),
            summary.kit_files.join(CSV_NAME_SEPARATOR),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| KitScanError::io_error(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        KitScanError::io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
