//! Output formatting for validation results (human/JSON).

use std::fmt::Write as _;

use super::types::{OutputFormat, ValidationReport};

/// Format a validation report for display (human-readable).
pub fn format_report(report: &ValidationReport, verbose: bool) -> String {
    let mut output = String::new();

    writeln!(output, "Validated {} for {}", report.project, report.aol).unwrap();

    if verbose {
        writeln!(output, "  AOL key: {}", report.aol.key()).unwrap();
        writeln!(
            output,
            "  Linker:  {} ({})",
            report.linker, report.linker_version
        )
        .unwrap();

        for compiler in &report.compilers {
            writeln!(
                output,
                "  [{}] {} ({} include path{})",
                compiler.slot,
                compiler.name,
                compiler.includes,
                if compiler.includes == 1 { "" } else { "s" }
            )
            .unwrap();
        }

        if let Some(dir) = &report.alternate_source_directory {
            writeln!(output, "  GNU sources: {}", dir.display()).unwrap();
        }
    }

    output
}

/// Format a validation report as JSON.
pub fn format_report_json(report: &ValidationReport) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
}

/// Format a validation report in the requested output format.
pub fn format_report_for_output(
    report: &ValidationReport,
    format: OutputFormat,
    verbose: bool,
) -> String {
    match format {
        OutputFormat::Human => format_report(report, verbose),
        OutputFormat::Json => format_report_json(report),
    }
}
