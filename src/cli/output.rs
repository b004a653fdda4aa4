//! Report formatting for multiple formats
//!
//! Formatters for the patch report: JSON and YAML for machines, a short
//! human-readable summary for the terminal.

use anyhow::{Context, Result};

use crate::pbxproj::PatchReport;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for patch reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a patch report according to the configured format
    pub fn format(&self, report: &PatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize report to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &PatchReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("Patched: {}\n", report.project_path));
        out.push_str("\nGenerated identifiers:\n");
        out.push_str(&format!(
            "  Fresh.storekit reference:          {}\n",
            report.storekit_ref_id
        ));
        out.push_str(&format!(
            "  DivinePrayers.entitlements ref:    {}\n",
            report.entitlements_ref_id
        ));
        out.push_str(&format!(
            "  Fresh.storekit build file:         {}\n",
            report.storekit_build_id
        ));
        out.push_str("\nEdits:\n");
        out.push_str(&format!(
            "  build-file entries:      {}\n",
            report.build_file_entries
        ));
        out.push_str(&format!(
            "  file references:         {}\n",
            report.file_references
        ));
        out.push_str(&format!(
            "  group children:          {}\n",
            report.group_children
        ));
        out.push_str(&format!(
            "  resources-phase entries: {}\n",
            report.resources_entries
        ));
        out.push_str(&format!(
            "  entitlements settings:   {}\n",
            report.debug_settings + report.release_settings
        ));
        out.push_str(&format!(
            "  stale lines removed:     {}\n",
            report.stale_lines_removed
        ));
        out.push_str(&format!(
            "\nLines: {} in, {} out\n",
            report.lines_in, report.lines_out
        ));

        let missing = report.missing_edits();
        if !missing.is_empty() {
            out.push_str("\nSkipped (trigger not found):\n");
            for edit in missing {
                out.push_str(&format!("  - {}\n", edit));
            }
        }
        out
    }
}
