use colored::Colorize;

use super::runner::{CheckOutcome, ProbeReport};
use crate::cli::OutputFormat;
use crate::probe::ProbeData;

/// Format the report according to the output format
pub fn format_report(report: &ProbeReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
        }),
        OutputFormat::Text => format_text(report),
        OutputFormat::Markdown => format_markdown(report),
    }
}

fn format_text(report: &ProbeReport) -> String {
    let mut output = format!(
        "Vertex AI probe: project {} in {}\n",
        report.project, report.location
    );

    for outcome in &report.checks {
        let tag = if outcome.result.success {
            "[OK]".green()
        } else {
            "[FAIL]".red()
        };
        output.push_str(&format!(
            "  {} {} ({}ms): {}\n",
            tag, outcome.check, outcome.duration_ms, outcome.result.message
        ));
        for line in data_lines(outcome) {
            output.push_str(&format!("      {}\n", line));
        }
    }

    output
}

fn format_markdown(report: &ProbeReport) -> String {
    let mut output = String::from("## Vertex AI probe\n\n");

    for outcome in &report.checks {
        let status = if outcome.result.success { "PASSED" } else { "FAILED" };
        output.push_str(&format!(
            "- {} **{}**: {}\n",
            status, outcome.check, outcome.result.message
        ));
        for line in data_lines(outcome) {
            output.push_str(&format!("  - {}\n", line));
        }
    }

    output.push_str("\n---\n");
    output.push_str(&format!(
        "*Project: {} | Location: {} | Checked: {}*\n",
        report.project,
        report.location,
        report.checked_at.to_rfc3339()
    ));

    output
}

fn data_lines(outcome: &CheckOutcome) -> Vec<String> {
    match &outcome.result.data {
        Some(ProbeData::Models {
            models_found,
            sample,
        }) => vec![
            format!("models found: {}", models_found),
            format!("sample: {}", sample),
        ],
        Some(ProbeData::Generation { output, model }) => {
            vec![format!("output: {}", output), format!("model: {}", model)]
        }
        None => Vec::new(),
    }
}
